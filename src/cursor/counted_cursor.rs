use super::exhausted::*;

use crate::api::*;

///
/// Wraps a cursor with a count of the elements that remain to be read
///
/// The count goes down by one each time the cursor is advanced, and the cursor compares
/// equal to `Exhausted` once it reaches zero. This turns any cursor plus a length into a
/// sequence, whatever the cursor's own notion of the end of its data.
///
#[derive(Clone, Debug)]
pub struct CountedCursor<C> {
    /// The cursor that's being counted
    cursor: C,

    /// The number of elements left before the end of the sequence
    remaining: isize
}

impl<C> CountedCursor<C> {
    ///
    /// Creates a counted cursor that will read `count` elements from `cursor`
    ///
    pub fn new(cursor: C, count: isize) -> CountedCursor<C> {
        debug_assert!(count >= 0, "Counted cursors need a non-negative count");

        CountedCursor {
            cursor:     cursor,
            remaining:  count
        }
    }

    ///
    /// The number of elements left to read
    ///
    #[inline]
    pub fn count(&self) -> isize {
        self.remaining
    }

    ///
    /// The underlying cursor
    ///
    #[inline]
    pub fn base(&self) -> &C {
        &self.cursor
    }

    ///
    /// Returns the underlying cursor, discarding the count
    ///
    pub fn into_base(self) -> C {
        self.cursor
    }
}

impl<C> Cursor for CountedCursor<C>
where
C: Cursor {
    type Value      = C::Value;
    type Reference  = C::Reference;
    type Traversal  = C::Traversal;
    type Access     = C::Access;

    // The count can always be compared, even when the underlying cursor can't
    type Equality   = Comparable;

    #[inline]
    fn get(&self) -> C::Reference {
        debug_assert!(self.remaining > 0, "Tried to read past the end of a counted cursor");
        self.cursor.get()
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.remaining > 0, "Tried to advance past the end of a counted cursor");

        self.cursor.advance();
        self.remaining -= 1;
    }
}

// Two counted cursors over the same sequence are at the same place if they have the same number of elements left
impl<C> PartialEq for CountedCursor<C> {
    #[inline]
    fn eq(&self, other: &CountedCursor<C>) -> bool {
        self.remaining == other.remaining
    }
}

impl<C> PartialEq<Exhausted> for CountedCursor<C> {
    #[inline]
    fn eq(&self, _other: &Exhausted) -> bool {
        self.remaining == 0
    }
}

impl<C> PartialEq<CountedCursor<C>> for Exhausted {
    #[inline]
    fn eq(&self, other: &CountedCursor<C>) -> bool {
        other.remaining == 0
    }
}

impl<C> Distance for CountedCursor<C> {
    #[inline]
    fn distance(&self, origin: &CountedCursor<C>) -> isize {
        origin.remaining - self.remaining
    }
}

impl<C> Distance<Exhausted> for CountedCursor<C> {
    #[inline]
    fn distance(&self, _origin: &Exhausted) -> isize {
        -self.remaining
    }
}

impl<C> Distance<CountedCursor<C>> for Exhausted {
    #[inline]
    fn distance(&self, origin: &CountedCursor<C>) -> isize {
        origin.remaining
    }
}

impl<C> ForwardCursor for CountedCursor<C>
where
C: ForwardCursor { }

impl<C> RandomAccessCursor for CountedCursor<C>
where
C: RandomAccessCursor {
    fn offset(&self, n: isize) -> CountedCursor<C> {
        debug_assert!(n <= self.remaining, "Tried to move past the end of a counted cursor");

        CountedCursor {
            cursor:     self.cursor.offset(n),
            remaining:  self.remaining - n
        }
    }
}

impl<C> ContiguousCursor for CountedCursor<C>
where
C: ContiguousCursor {
    type Span = C::Span;

    fn span(&self, len: usize) -> C::Span {
        debug_assert!((len as isize) <= self.remaining, "Span extends past the end of a counted cursor");
        self.cursor.span(len)
    }
}

impl<C> NativePostfix for CountedCursor<C>
where
C: NativePostfix {
    type Postfix = C::Postfix;

    fn post_advance(&mut self) -> C::Postfix {
        debug_assert!(self.remaining > 0, "Tried to advance past the end of a counted cursor");

        let previous = self.cursor.post_advance();
        self.remaining -= 1;

        previous
    }
}

impl<C> MemberAccess for CountedCursor<C>
where
C: MemberAccess {
    type Pointer = C::Pointer;

    #[inline]
    fn arrow(&self) -> C::Pointer {
        self.cursor.arrow()
    }
}

impl<C> IterMove for CountedCursor<C>
where
C: IterMove {
    type Moved = C::Moved;

    #[inline]
    fn iter_move(&self) -> C::Moved {
        self.cursor.iter_move()
    }
}

impl<C, C2> IterSwap<CountedCursor<C2>> for CountedCursor<C>
where
C: IterSwap<C2> {
    #[inline]
    fn iter_swap(&self, other: &CountedCursor<C2>) {
        self.cursor.iter_swap(&other.cursor)
    }
}
