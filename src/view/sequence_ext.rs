use super::closed_view::*;

use crate::api::*;
use crate::cursor::*;

///
/// Adaptors available for every sequence
///
pub trait SequenceExt : Sequence+Sized {
    ///
    /// Wraps this sequence in a view whose ends are of the same type
    ///
    fn closed(self) -> ClosedView<Self> {
        ClosedView::new(self)
    }

    ///
    /// Returns an iterator over the elements of this sequence
    ///
    fn walk(&mut self) -> Walk<Self::Cursor, Self::Boundary> {
        let begin   = Sequence::begin(self);
        let end     = Sequence::end(self);

        Walk::new(begin, end)
    }
}

///
/// Adaptors available for sequences that can be read through a shared reference
///
pub trait SharedSequenceExt : SharedSequence {
    ///
    /// Returns an iterator over the elements of this sequence
    ///
    fn walk_shared(&self) -> Walk<Self::Cursor, Self::Boundary> {
        Walk::new(SharedSequence::begin(self), SharedSequence::end(self))
    }
}

impl<S: Sequence> SequenceExt for S { }
impl<S: SharedSequence> SharedSequenceExt for S { }
