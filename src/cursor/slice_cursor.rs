use super::subrange::*;

use crate::api::*;

use std::cell::{Cell};

///
/// A contiguous cursor over a borrowed slice
///
/// The cursor can be positioned anywhere from the first element to one past the last
/// element of the slice. Dereferencing it yields references that borrow the slice rather
/// than the cursor, so they remain valid after the cursor moves on.
///
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    /// The slice that's being traversed
    slice: &'a [T],

    /// The index of the element this cursor points at
    pos: usize
}

impl<'a, T> SliceCursor<'a, T> {
    ///
    /// Creates a cursor pointing at the first element of a slice
    ///
    pub fn new(slice: &'a [T]) -> SliceCursor<'a, T> {
        SliceCursor { slice, pos: 0 }
    }

    ///
    /// Creates a cursor pointing one past the last element of a slice
    ///
    pub fn at_end(slice: &'a [T]) -> SliceCursor<'a, T> {
        SliceCursor { slice, pos: slice.len() }
    }

    ///
    /// The index within the slice of the element this cursor points at
    ///
    pub fn position(&self) -> usize {
        self.pos
    }

    ///
    /// The elements from this cursor to the end of the slice
    ///
    pub fn remaining(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }

    ///
    /// The address of the element at this cursor (one past the end of the slice for an end cursor)
    ///
    /// All the positions in a slice of zero-sized values share the same address.
    ///
    pub fn address(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.pos)
    }
}

///
/// Returns a sized sequence covering every element of a slice
///
pub fn slice_sequence<T>(slice: &[T]) -> Subrange<SliceCursor<'_, T>, SliceCursor<'_, T>, KnownSize> {
    Subrange::sized(SliceCursor::new(slice), SliceCursor::at_end(slice))
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> { }

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &SliceCursor<'a, T>) -> bool {
        if std::mem::size_of::<T>() == 0 {
            // Every element of a slice of zero-sized values has the same address
            self.slice.as_ptr() == other.slice.as_ptr() && self.pos == other.pos
        } else {
            self.address() == other.address()
        }
    }
}

impl<'a, T> Eq for SliceCursor<'a, T> { }

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Value      = T;
    type Reference  = &'a T;
    type Traversal  = Contiguous;
    type Access     = ByReference;
    type Equality   = Comparable;

    #[inline]
    fn get(&self) -> &'a T {
        &self.slice[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.pos < self.slice.len(), "Tried to advance a slice cursor past the end of its slice");
        self.pos += 1;
    }
}

impl<'a, T> ForwardCursor for SliceCursor<'a, T> { }

impl<'a, T> Distance for SliceCursor<'a, T> {
    fn distance(&self, origin: &SliceCursor<'a, T>) -> isize {
        debug_assert!(std::ptr::eq(self.slice.as_ptr(), origin.slice.as_ptr()), "Distance between cursors over different slices");

        (self.pos as isize) - (origin.pos as isize)
    }
}

impl<'a, T> RandomAccessCursor for SliceCursor<'a, T> {
    fn offset(&self, n: isize) -> SliceCursor<'a, T> {
        let pos = (self.pos as isize) + n;
        debug_assert!(pos >= 0 && (pos as usize) <= self.slice.len(), "Slice cursor offset out of range");

        SliceCursor { slice: self.slice, pos: pos as usize }
    }
}

impl<'a, T> ContiguousCursor for SliceCursor<'a, T> {
    type Span = &'a [T];

    fn span(&self, len: usize) -> &'a [T] {
        &self.slice[self.pos..(self.pos+len)]
    }
}

// Moving out of a shared slice can only copy the element
impl<'a, T> IterMove for SliceCursor<'a, T>
where
T: Clone {
    type Moved = T;

    #[inline]
    fn iter_move(&self) -> T {
        self.get().clone()
    }
}

impl<'a, 'b, T> IterSwap<SliceCursor<'b, Cell<T>>> for SliceCursor<'a, Cell<T>> {
    #[inline]
    fn iter_swap(&self, other: &SliceCursor<'b, Cell<T>>) {
        self.get().swap(other.get())
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Cursor     = SliceCursor<'a, T>;
    type Boundary   = SliceCursor<'a, T>;
    type Sizing     = KnownSize;

    #[inline]
    fn begin(&mut self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self)
    }

    #[inline]
    fn end(&mut self) -> SliceCursor<'a, T> {
        SliceCursor::at_end(*self)
    }
}

impl<'a, T> SharedSequence for &'a [T] {
    type Cursor     = SliceCursor<'a, T>;
    type Boundary   = SliceCursor<'a, T>;
    type Sizing     = KnownSize;

    #[inline]
    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self)
    }

    #[inline]
    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::at_end(*self)
    }
}

impl<'a, T> SizedSequence for &'a [T] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
