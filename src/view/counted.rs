use crate::api::*;
use crate::cursor::*;
use crate::error::*;

use tracing::{trace, debug};

///
/// Selects how `counted()` represents `count` elements starting at a cursor, based on its traversal tag
///
pub trait Counting<C> {
    /// The sequence produced for this kind of cursor
    type Counted;

    fn count_from(cursor: C, count: isize) -> Self::Counted;
}

/// The sequence that `counted()` returns for a cursor
pub type Counted<C> = <TraversalOf<C> as Counting<C>>::Counted;

impl<C> Counting<C> for Contiguous
where
C: ContiguousCursor {
    type Counted = C::Span;

    #[inline]
    fn count_from(cursor: C, count: isize) -> C::Span {
        trace!(count, "Counted sequence is a contiguous span");
        cursor.span(count as usize)
    }
}

impl<C> Counting<C> for RandomAccess
where
C: RandomAccessCursor {
    type Counted = Subrange<C, C, KnownSize>;

    #[inline]
    fn count_from(cursor: C, count: isize) -> Subrange<C, C, KnownSize> {
        trace!(count, "Counted sequence is a pair of random-access cursors");

        let end = cursor.offset(count);
        Subrange::sized(cursor, end)
    }
}

impl<C> Counting<C> for MultiPass
where
C: Cursor {
    type Counted = Subrange<CountedCursor<C>, Exhausted, KnownSize>;

    #[inline]
    fn count_from(cursor: C, count: isize) -> Self::Counted {
        trace!(count, "Counted sequence is a counting cursor");
        Subrange::sized(CountedCursor::new(cursor, count), Exhausted)
    }
}

impl<Postfix, C> Counting<C> for SinglePass<Postfix>
where
C: Cursor {
    type Counted = Subrange<CountedCursor<C>, Exhausted, KnownSize>;

    #[inline]
    fn count_from(cursor: C, count: isize) -> Self::Counted {
        trace!(count, "Counted sequence is a counting cursor");
        Subrange::sized(CountedCursor::new(cursor, count), Exhausted)
    }
}

///
/// Creates a sequence of `count` elements starting at `cursor`
///
/// The cheapest representation the cursor supports is chosen: a span for contiguous
/// cursors, a pair of cursors for random-access cursors, and otherwise a `CountedCursor`
/// paired with the `Exhausted` boundary.
///
/// `count` must not be negative. Use `try_counted()` where the count is not known to be valid.
///
/// The `Subrange` returned for non-random-access cursors hands out copies of its cursor, so it
/// only implements `Sequence` when the cursor implements `Clone`. For a cursor that can't be
/// cloned, take the cursor and boundary out with `Subrange::into_parts()` instead.
///
/// ```
/// use flo_cursor::*;
///
/// let values  = vec![1, 2, 3, 4, 5, 6];
/// let span    = counted(SliceCursor::new(&values).offset(1), 4);
///
/// assert!(span == &[2, 3, 4, 5]);
/// ```
///
pub fn counted<C>(cursor: C, count: isize) -> Counted<C>
where
C:              Cursor,
C::Traversal:   Counting<C> {
    debug_assert!(count >= 0, "counted() needs a non-negative count");

    <C::Traversal as Counting<C>>::count_from(cursor, count)
}

///
/// As for `counted()`, but returns an error instead of failing an assertion if the count is negative
///
pub fn try_counted<C>(cursor: C, count: isize) -> Result<Counted<C>, CountError>
where
C:              Cursor,
C::Traversal:   Counting<C> {
    if count < 0 {
        debug!(count, "Rejected negative count for a counted sequence");
        return Err(CountError::Negative { count });
    }

    Ok(<C::Traversal as Counting<C>>::count_from(cursor, count))
}
