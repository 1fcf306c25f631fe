//!
//! # Sequence views
//!
//! `ClosedView` presents any sequence as a pair of cursors of the same type, and
//! `counted()` turns a cursor and a length into the cheapest sequence the cursor allows.
//!

mod closing;
mod closed_view;
mod counted;
mod sequence_ext;

pub use self::closing::*;
pub use self::closed_view::*;
pub use self::counted::*;
pub use self::sequence_ext::*;
