use thiserror::{Error};

///
/// Errors from building a counted sequence with `try_counted()`
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CountError {
    /// The requested number of elements was less than zero
    #[error("a counted sequence needs a non-negative count (got {count})")]
    Negative { count: isize }
}
