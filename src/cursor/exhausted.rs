///
/// The boundary of a sequence whose cursors know for themselves when they have reached the end
///
/// `CountedCursor` compares equal to this once its count reaches zero.
///
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exhausted;
