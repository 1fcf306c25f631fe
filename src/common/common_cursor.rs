use super::strategy::*;

use crate::api::*;

use std::ops::{Sub};

///
/// A cursor that holds either a cursor or the boundary of a sequence
///
/// Some sequences are naturally described by a cursor and a boundary of a different type
/// (for example, a cursor over a C string and a 'nul byte' boundary). `Common` unifies
/// the two types so that the start and end of the sequence can be passed around as a pair
/// of values of the same type.
///
/// Reading or advancing a `Common` is only possible while it holds a cursor: doing either
/// while it holds a boundary is a logic error and will panic.
///
#[derive(Clone, Copy, Debug)]
pub enum Common<C, B> {
    /// A position within the sequence
    Cursor(C),

    /// The end of the sequence
    Boundary(B)
}

impl<C, B> Common<C, B> {
    ///
    /// Creates a common cursor holding a cursor
    ///
    #[inline]
    pub fn from_cursor(cursor: C) -> Common<C, B> {
        Common::Cursor(cursor)
    }

    ///
    /// Creates a common cursor holding a boundary
    ///
    #[inline]
    pub fn from_boundary(boundary: B) -> Common<C, B> {
        Common::Boundary(boundary)
    }

    ///
    /// True if this holds a cursor
    ///
    #[inline]
    pub fn is_cursor(&self) -> bool {
        matches!(self, Common::Cursor(_))
    }

    ///
    /// True if this holds a boundary
    ///
    #[inline]
    pub fn is_boundary(&self) -> bool {
        matches!(self, Common::Boundary(_))
    }

    /// The held cursor, if there is one
    #[inline]
    pub fn cursor(&self) -> Option<&C> {
        match self {
            Common::Cursor(cursor)  => Some(cursor),
            Common::Boundary(_)     => None
        }
    }

    /// The held boundary, if there is one
    #[inline]
    pub fn boundary(&self) -> Option<&B> {
        match self {
            Common::Cursor(_)           => None,
            Common::Boundary(boundary)  => Some(boundary)
        }
    }

    ///
    /// Mutable access to the held cursor
    ///
    /// Moving the cursor this way is the same as advancing the common cursor.
    ///
    #[inline]
    pub fn cursor_mut(&mut self) -> Option<&mut C> {
        match self {
            Common::Cursor(cursor)  => Some(cursor),
            Common::Boundary(_)     => None
        }
    }

    ///
    /// Replaces the contents of this common cursor with a converted copy of another
    ///
    pub fn assign_from<C2, B2>(&mut self, other: &Common<C2, B2>)
    where
    C2: Clone+Into<C>,
    B2: Clone+Into<B> {
        *self = Common::from(other);
    }

    ///
    /// Retrieves the held cursor for an operation that is only valid when this holds a cursor
    ///
    #[inline]
    #[track_caller]
    pub (crate) fn held_cursor(&self, operation: &str) -> &C {
        match self {
            Common::Cursor(cursor)  => cursor,
            Common::Boundary(_)     => panic!("Attempted to {} a common cursor that holds its boundary", operation)
        }
    }

    ///
    /// Retrieves the held cursor for a mutating operation that is only valid when this holds a cursor
    ///
    #[inline]
    #[track_caller]
    pub (crate) fn held_cursor_mut(&mut self, operation: &str) -> &mut C {
        match self {
            Common::Cursor(cursor)  => cursor,
            Common::Boundary(_)     => panic!("Attempted to {} a common cursor that holds its boundary", operation)
        }
    }
}

impl<C, B> Default for Common<C, B>
where
C: Default {
    fn default() -> Common<C, B> {
        Common::Cursor(C::default())
    }
}

impl<C, B, C2, B2> From<&Common<C2, B2>> for Common<C, B>
where
C2: Clone+Into<C>,
B2: Clone+Into<B> {
    fn from(other: &Common<C2, B2>) -> Common<C, B> {
        match other {
            Common::Cursor(cursor)      => Common::Cursor(cursor.clone().into()),
            Common::Boundary(boundary)  => Common::Boundary(boundary.clone().into())
        }
    }
}

impl<C, B> Cursor for Common<C, B>
where
C: Cursor {
    type Value      = C::Value;
    type Reference  = C::Reference;
    type Traversal  = <C::Traversal as Traversal>::Closed;
    type Access     = ByMember;
    type Equality   = Comparable;

    ///
    /// Reads the value at the held cursor
    ///
    #[inline]
    #[track_caller]
    fn get(&self) -> C::Reference {
        self.held_cursor("dereference").get()
    }

    ///
    /// Advances the held cursor
    ///
    #[inline]
    #[track_caller]
    fn advance(&mut self) {
        self.held_cursor_mut("increment").advance()
    }
}

impl<C, B> ForwardCursor for Common<C, B>
where
C:              ForwardCursor+PartialEq<B>,
B:              Clone+PartialEq<C>,
C::Equality:    CursorEquality<C, C> { }

impl<C, B> NativePostfix for Common<C, B>
where
C:              Cursor,
C::Traversal:   PostfixStrategy<C, B> {
    type Postfix = <C::Traversal as PostfixStrategy<C, B>>::Output;

    ///
    /// Advances the held cursor, returning something that dereferences to the value before the advance
    ///
    /// Multi-pass cursors return a copy of the common cursor from before the advance. Single-pass
    /// cursors either return the result of their own post-advance or a proxy holding the value
    /// that was read before the cursor moved on.
    ///
    #[inline]
    #[track_caller]
    fn post_advance(&mut self) -> Self::Postfix {
        <C::Traversal as PostfixStrategy<C, B>>::post_advance(self)
    }
}

impl<C, B> MemberAccess for Common<C, B>
where
C:          Cursor,
C::Access:  ArrowStrategy<C> {
    type Pointer = <C::Access as ArrowStrategy<C>>::Pointer;

    ///
    /// Returns a pointer to the value at the held cursor
    ///
    /// This is the cursor's own pointer if it has one, a reference if the cursor yields
    /// references, or otherwise a proxy that holds a copy of the current value.
    ///
    #[inline]
    #[track_caller]
    fn arrow(&self) -> Self::Pointer {
        <C::Access as ArrowStrategy<C>>::arrow(self.held_cursor("access a member of"))
    }
}

impl<C, B, C2, B2> PartialEq<Common<C2, B2>> for Common<C, B>
where
C:              Cursor+PartialEq<B2>,
B:              PartialEq<C2>,
C::Equality:    CursorEquality<C, C2> {
    ///
    /// Two boundaries are always equal, two cursors compare if they can be compared with each other,
    /// and a cursor and a boundary compare using the relation between the two
    ///
    fn eq(&self, other: &Common<C2, B2>) -> bool {
        match (self, other) {
            (Common::Boundary(_), Common::Boundary(_))                  => true,
            (Common::Cursor(cursor), Common::Cursor(other_cursor))      => <C::Equality as CursorEquality<C, C2>>::cursors_equal(cursor, other_cursor),
            (Common::Cursor(cursor), Common::Boundary(other_boundary))  => cursor == other_boundary,
            (Common::Boundary(boundary), Common::Cursor(other_cursor))  => boundary == other_cursor,
        }
    }
}

impl<C, B, C2, B2> Distance<Common<C2, B2>> for Common<C, B>
where
C: Distance<C2>+Distance<B2>,
B: Distance<C2> {
    fn distance(&self, origin: &Common<C2, B2>) -> isize {
        match (self, origin) {
            // Every boundary denotes the same end position
            (Common::Boundary(_), Common::Boundary(_))              => 0,
            (Common::Cursor(cursor), Common::Cursor(origin))        => <C as Distance<C2>>::distance(cursor, origin),
            (Common::Cursor(cursor), Common::Boundary(origin))      => <C as Distance<B2>>::distance(cursor, origin),
            (Common::Boundary(boundary), Common::Cursor(origin))    => <B as Distance<C2>>::distance(boundary, origin),
        }
    }
}

impl<C, B, C2, B2> Sub<&Common<C2, B2>> for &Common<C, B>
where
C: Distance<C2>+Distance<B2>,
B: Distance<C2> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: &Common<C2, B2>) -> isize {
        <Common<C, B> as Distance<Common<C2, B2>>>::distance(self, origin)
    }
}

impl<C, B> IterMove for Common<C, B>
where
C: IterMove {
    type Moved = C::Moved;

    #[inline]
    #[track_caller]
    fn iter_move(&self) -> C::Moved {
        self.held_cursor("move from").iter_move()
    }
}

impl<C, B, C2, B2> IterSwap<Common<C2, B2>> for Common<C, B>
where
C: IterSwap<C2> {
    #[inline]
    #[track_caller]
    fn iter_swap(&self, other: &Common<C2, B2>) {
        let cursor  = self.held_cursor("swap through");
        let other   = other.held_cursor("swap through");

        cursor.iter_swap(other)
    }
}
