use super::capability::*;
use super::distance_trait::*;

use std::ops::{Deref};

///
/// A cursor is a value denoting a position within a sequence
///
/// The capabilities of the cursor beyond reading and advancing are described by its
/// `Traversal`, `Access` and `Equality` tags, which must agree with the extra traits that
/// the cursor implements (a cursor tagged `RandomAccess` implements `RandomAccessCursor`, a
/// cursor tagged `ByMember` implements `MemberAccess`, a cursor tagged `Comparable`
/// implements `PartialEq` and so on).
///
pub trait Cursor {
    /// The type of the elements in the sequence
    type Value;

    /// What dereferencing the cursor yields. This is `&'a Value` for cursors that can
    /// return true references, or a value for cursors that produce their elements
    type Reference;

    /// How this cursor may be traversed
    type Traversal: Traversal;

    /// How the members of the value at this cursor can be reached
    type Access: Access;

    /// Whether or not two cursors can be compared with each other
    type Equality: Equality;

    ///
    /// Reads the element at the current position
    ///
    fn get(&self) -> Self::Reference;

    ///
    /// Moves to the next position in the sequence
    ///
    fn advance(&mut self);
}

///
/// A cursor that can be copied, with each copy advanced independently
///
pub trait ForwardCursor : Cursor+Clone+PartialEq { }

///
/// A cursor that supports constant-time jumps and distances
///
pub trait RandomAccessCursor : ForwardCursor+Distance {
    ///
    /// Returns the cursor `n` positions away from this one
    ///
    fn offset(&self, n: isize) -> Self;

    ///
    /// Moves this cursor by `n` positions
    ///
    fn advance_by(&mut self, n: isize) {
        *self = self.offset(n);
    }
}

///
/// A random-access cursor whose elements occupy a single block of memory
///
pub trait ContiguousCursor : RandomAccessCursor {
    /// A view of a run of contiguous elements (typically `&'a [Value]`)
    type Span;

    ///
    /// Returns the `len` contiguous elements that start at this cursor
    ///
    fn span(&self, len: usize) -> Self::Span;
}

///
/// A single-pass cursor whose own post-advance returns something that can still be
/// dereferenced after the cursor has moved on
///
pub trait NativePostfix : Cursor {
    /// The value returned by a post-advance
    type Postfix;

    ///
    /// Advances the cursor, returning something representing the position before the advance
    ///
    fn post_advance(&mut self) -> Self::Postfix;
}

///
/// A cursor that provides its own pointer for reaching the members of its current value
///
pub trait MemberAccess : Cursor {
    /// The pointer returned by `arrow()`
    type Pointer: Deref<Target=Self::Value>;

    ///
    /// Returns a pointer to the current value
    ///
    fn arrow(&self) -> Self::Pointer;
}

///
/// A cursor that can move the value it points at out of the sequence
///
pub trait IterMove : Cursor {
    /// The type produced by moving out of the current position
    type Moved;

    fn iter_move(&self) -> Self::Moved;
}

///
/// Cursors whose referenced elements can be exchanged with the elements referenced by another cursor
///
pub trait IterSwap<Rhs = Self> {
    fn iter_swap(&self, other: &Rhs);
}

/// The traversal tag of a cursor
pub type TraversalOf<C> = <C as Cursor>::Traversal;

/// The equality tag of a cursor
pub type EqualityOf<C> = <C as Cursor>::Equality;
