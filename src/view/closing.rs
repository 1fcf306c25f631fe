use crate::api::*;
use crate::common::*;

use tracing::{trace};

///
/// Selects the cursor type that a closed view over a sequence returns from `begin()` and `end()`
///
/// This is implemented for `(Traversal, Sizing)` tag pairs. Sized sequences with random-access
/// cursors already have an end cursor of the same type (the first cursor advanced by the size),
/// so they're closed using their own cursors. Every other sequence is closed with `Common`,
/// whose cursors compare according to the `Equality` tag of the sequence's cursor.
///
pub trait Closing<S: Sequence> {
    /// The cursor type used for both ends of the closed sequence
    type Closed: Cursor+PartialEq;

    fn close_begin(base: &mut S) -> Self::Closed;
    fn close_end(base: &mut S) -> Self::Closed;
}

///
/// As for `Closing`, for sequences that are read through a shared reference
///
pub trait SharedClosing<S: SharedSequence> {
    /// The cursor type used for both ends of the closed sequence
    type Closed: Cursor+PartialEq;

    fn close_begin(base: &S) -> Self::Closed;
    fn close_end(base: &S) -> Self::Closed;
}

impl<S> Closing<S> for (RandomAccess, KnownSize)
where
S:          Sequence+SizedSequence,
S::Cursor:  RandomAccessCursor {
    type Closed = S::Cursor;

    #[inline]
    fn close_begin(base: &mut S) -> S::Cursor {
        base.begin()
    }

    fn close_end(base: &mut S) -> S::Cursor {
        let size = base.size();
        trace!(size, "Closing random-access sequence using its own cursor");

        base.begin().offset(size as isize)
    }
}

impl<S> Closing<S> for (Contiguous, KnownSize)
where
S:          Sequence+SizedSequence,
S::Cursor:  RandomAccessCursor {
    type Closed = S::Cursor;

    #[inline]
    fn close_begin(base: &mut S) -> S::Cursor {
        base.begin()
    }

    fn close_end(base: &mut S) -> S::Cursor {
        let size = base.size();
        trace!(size, "Closing contiguous sequence using its own cursor");

        base.begin().offset(size as isize)
    }
}

impl<Postfix, Z, S> Closing<S> for (SinglePass<Postfix>, Z)
where
Postfix:               PostfixKind,
S:                     Sequence,
S::Cursor:             Cursor<Traversal=SinglePass<Postfix>>,
EqualityOf<S::Cursor>: CursorEquality<S::Cursor, S::Cursor> {
    type Closed = Common<S::Cursor, S::Boundary>;

    #[inline]
    fn close_begin(base: &mut S) -> Self::Closed {
        Common::from_cursor(base.begin())
    }

    #[inline]
    fn close_end(base: &mut S) -> Self::Closed {
        Common::from_boundary(base.end())
    }
}

impl<Z, S> Closing<S> for (MultiPass, Z)
where
S:                     Sequence,
S::Cursor:             ForwardCursor+Cursor<Traversal=MultiPass>,
EqualityOf<S::Cursor>: CursorEquality<S::Cursor, S::Cursor> {
    type Closed = Common<S::Cursor, S::Boundary>;

    #[inline]
    fn close_begin(base: &mut S) -> Self::Closed {
        Common::from_cursor(base.begin())
    }

    #[inline]
    fn close_end(base: &mut S) -> Self::Closed {
        Common::from_boundary(base.end())
    }
}

impl<S> Closing<S> for (RandomAccess, UnknownSize)
where
S:                     Sequence,
S::Cursor:             RandomAccessCursor+Cursor<Traversal=RandomAccess>,
EqualityOf<S::Cursor>: CursorEquality<S::Cursor, S::Cursor> {
    type Closed = Common<S::Cursor, S::Boundary>;

    #[inline]
    fn close_begin(base: &mut S) -> Self::Closed {
        Common::from_cursor(base.begin())
    }

    #[inline]
    fn close_end(base: &mut S) -> Self::Closed {
        Common::from_boundary(base.end())
    }
}

impl<S> Closing<S> for (Contiguous, UnknownSize)
where
S:                     Sequence,
S::Cursor:             ContiguousCursor+Cursor<Traversal=Contiguous>,
EqualityOf<S::Cursor>: CursorEquality<S::Cursor, S::Cursor> {
    type Closed = Common<S::Cursor, S::Boundary>;

    #[inline]
    fn close_begin(base: &mut S) -> Self::Closed {
        Common::from_cursor(base.begin())
    }

    #[inline]
    fn close_end(base: &mut S) -> Self::Closed {
        Common::from_boundary(base.end())
    }
}

impl<S> SharedClosing<S> for (RandomAccess, KnownSize)
where
S:          SharedSequence+SizedSequence,
S::Cursor:  RandomAccessCursor {
    type Closed = S::Cursor;

    #[inline]
    fn close_begin(base: &S) -> S::Cursor {
        base.begin()
    }

    fn close_end(base: &S) -> S::Cursor {
        let size = base.size();
        trace!(size, "Closing random-access sequence using its own cursor");

        base.begin().offset(size as isize)
    }
}

impl<S> SharedClosing<S> for (Contiguous, KnownSize)
where
S:          SharedSequence+SizedSequence,
S::Cursor:  RandomAccessCursor {
    type Closed = S::Cursor;

    #[inline]
    fn close_begin(base: &S) -> S::Cursor {
        base.begin()
    }

    fn close_end(base: &S) -> S::Cursor {
        let size = base.size();
        trace!(size, "Closing contiguous sequence using its own cursor");

        base.begin().offset(size as isize)
    }
}

impl<Postfix, Z, S> SharedClosing<S> for (SinglePass<Postfix>, Z)
where
Postfix:               PostfixKind,
S:                     SharedSequence,
S::Cursor:             Cursor<Traversal=SinglePass<Postfix>>,
EqualityOf<S::Cursor>: CursorEquality<S::Cursor, S::Cursor> {
    type Closed = Common<S::Cursor, S::Boundary>;

    #[inline]
    fn close_begin(base: &S) -> Self::Closed {
        Common::from_cursor(base.begin())
    }

    #[inline]
    fn close_end(base: &S) -> Self::Closed {
        Common::from_boundary(base.end())
    }
}

impl<Z, S> SharedClosing<S> for (MultiPass, Z)
where
S:                     SharedSequence,
S::Cursor:             ForwardCursor+Cursor<Traversal=MultiPass>,
EqualityOf<S::Cursor>: CursorEquality<S::Cursor, S::Cursor> {
    type Closed = Common<S::Cursor, S::Boundary>;

    #[inline]
    fn close_begin(base: &S) -> Self::Closed {
        Common::from_cursor(base.begin())
    }

    #[inline]
    fn close_end(base: &S) -> Self::Closed {
        Common::from_boundary(base.end())
    }
}

impl<S> SharedClosing<S> for (RandomAccess, UnknownSize)
where
S:                     SharedSequence,
S::Cursor:             RandomAccessCursor+Cursor<Traversal=RandomAccess>,
EqualityOf<S::Cursor>: CursorEquality<S::Cursor, S::Cursor> {
    type Closed = Common<S::Cursor, S::Boundary>;

    #[inline]
    fn close_begin(base: &S) -> Self::Closed {
        Common::from_cursor(base.begin())
    }

    #[inline]
    fn close_end(base: &S) -> Self::Closed {
        Common::from_boundary(base.end())
    }
}

impl<S> SharedClosing<S> for (Contiguous, UnknownSize)
where
S:                     SharedSequence,
S::Cursor:             ContiguousCursor+Cursor<Traversal=Contiguous>,
EqualityOf<S::Cursor>: CursorEquality<S::Cursor, S::Cursor> {
    type Closed = Common<S::Cursor, S::Boundary>;

    #[inline]
    fn close_begin(base: &S) -> Self::Closed {
        Common::from_cursor(base.begin())
    }

    #[inline]
    fn close_end(base: &S) -> Self::Closed {
        Common::from_boundary(base.end())
    }
}
