use super::closing::*;

use crate::api::*;

use tracing::{trace};

/// The tag pair that picks how a sequence is closed
type ClosingOf<S> = (TraversalOf<<S as Sequence>::Cursor>, <S as Sequence>::Sizing);

/// The tag pair that picks how a sequence is closed when read through a shared reference
type SharedClosingOf<S> = (TraversalOf<<S as SharedSequence>::Cursor>, <S as SharedSequence>::Sizing);

///
/// A view of a sequence whose `begin()` and `end()` return values of the same type
///
/// Algorithms that want a pair of cursors of a single type can't be used directly with a
/// sequence whose boundary is a different type to its cursor. Wrapping the sequence in a
/// closed view fixes this: both ends become `Common` cursors, or for sized random-access
/// sequences, the sequence's own cursors.
///
/// ```
/// use flo_cursor::*;
///
/// let values      = [1, 2, 3, 4, 5];
/// let view        = ClosedView::new(counted(SliceCursor::new(&values), 3));
///
/// let begin       = view.begin();
/// let end         = view.end();
/// assert!(Walk::new(begin, end).copied().collect::<Vec<_>>() == vec![1, 2, 3]);
/// ```
///
#[derive(Clone, Default, Debug)]
pub struct ClosedView<V> {
    /// The sequence being viewed
    base: V
}

impl<V> ClosedView<V> {
    ///
    /// Creates a closed view of a sequence
    ///
    pub fn new(base: V) -> ClosedView<V> {
        trace!(sequence = std::any::type_name::<V>(), "Creating closed view");

        ClosedView { base }
    }

    ///
    /// Returns a copy of the sequence behind this view
    ///
    pub fn base(&self) -> V
    where
    V: Clone {
        self.base.clone()
    }

    ///
    /// A reference to the sequence behind this view
    ///
    pub fn base_ref(&self) -> &V {
        &self.base
    }

    ///
    /// Consumes this view, returning the sequence behind it
    ///
    pub fn into_base(self) -> V {
        self.base
    }
}

impl<V> From<V> for ClosedView<V> {
    fn from(base: V) -> ClosedView<V> {
        ClosedView::new(base)
    }
}

impl<V> Sequence for ClosedView<V>
where
V:              Sequence,
ClosingOf<V>:   Closing<V> {
    type Cursor     = <ClosingOf<V> as Closing<V>>::Closed;
    type Boundary   = <ClosingOf<V> as Closing<V>>::Closed;
    type Sizing     = V::Sizing;

    #[inline]
    fn begin(&mut self) -> Self::Cursor {
        <ClosingOf<V> as Closing<V>>::close_begin(&mut self.base)
    }

    #[inline]
    fn end(&mut self) -> Self::Boundary {
        <ClosingOf<V> as Closing<V>>::close_end(&mut self.base)
    }
}

impl<V> SharedSequence for ClosedView<V>
where
V:                  SharedSequence,
SharedClosingOf<V>: SharedClosing<V> {
    type Cursor     = <SharedClosingOf<V> as SharedClosing<V>>::Closed;
    type Boundary   = <SharedClosingOf<V> as SharedClosing<V>>::Closed;
    type Sizing     = V::Sizing;

    #[inline]
    fn begin(&self) -> Self::Cursor {
        <SharedClosingOf<V> as SharedClosing<V>>::close_begin(&self.base)
    }

    #[inline]
    fn end(&self) -> Self::Boundary {
        <SharedClosingOf<V> as SharedClosing<V>>::close_end(&self.base)
    }
}

impl<V> SizedSequence for ClosedView<V>
where
V: SizedSequence {
    #[inline]
    fn size(&self) -> usize {
        self.base.size()
    }
}
