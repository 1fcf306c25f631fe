use super::proxy::*;
use super::common_cursor::*;

use crate::api::*;

use std::ops::{Deref};

///
/// Selects how `Common::post_advance()` is implemented for a cursor, based on its traversal tag
///
pub trait PostfixStrategy<C: Cursor, B> {
    /// What a post-advance returns
    type Output;

    ///
    /// Advances the cursor held by `cursor`, returning something that dereferences to the value before the advance
    ///
    fn post_advance(cursor: &mut Common<C, B>) -> Self::Output;
}

///
/// Selects how `Common::arrow()` is implemented for a cursor, based on its access tag
///
pub trait ArrowStrategy<C: Cursor> {
    /// The pointer that is returned
    type Pointer: Deref<Target=C::Value>;

    ///
    /// Returns a pointer to the value at a cursor
    ///
    fn arrow(cursor: &C) -> Self::Pointer;
}

///
/// Selects how two cursors held by `Common` values are compared, based on their equality tag
///
pub trait CursorEquality<C, C2> {
    fn cursors_equal(cursor: &C, other: &C2) -> bool;
}

///
/// Post-advance for multi-pass cursors: copy, advance and return the copy
///
#[inline]
fn copy_then_advance<C: ForwardCursor, B: Clone>(cursor: &mut Common<C, B>) -> Common<C, B> {
    let previous = cursor.clone();
    cursor.advance();

    previous
}

impl<C, B> PostfixStrategy<C, B> for MultiPass
where
C: ForwardCursor,
B: Clone {
    type Output = Common<C, B>;

    #[inline]
    fn post_advance(cursor: &mut Common<C, B>) -> Common<C, B> {
        copy_then_advance(cursor)
    }
}

impl<C, B> PostfixStrategy<C, B> for RandomAccess
where
C: ForwardCursor,
B: Clone {
    type Output = Common<C, B>;

    #[inline]
    fn post_advance(cursor: &mut Common<C, B>) -> Common<C, B> {
        copy_then_advance(cursor)
    }
}

impl<C, B> PostfixStrategy<C, B> for Contiguous
where
C: ForwardCursor,
B: Clone {
    type Output = Common<C, B>;

    #[inline]
    fn post_advance(cursor: &mut Common<C, B>) -> Common<C, B> {
        copy_then_advance(cursor)
    }
}

impl<C, B> PostfixStrategy<C, B> for SinglePass<Native>
where
C: NativePostfix {
    type Output = C::Postfix;

    #[inline]
    fn post_advance(cursor: &mut Common<C, B>) -> C::Postfix {
        cursor.held_cursor_mut("increment").post_advance()
    }
}

impl<C, B> PostfixStrategy<C, B> for SinglePass<Buffered>
where
C:          Cursor,
C::Value:   From<C::Reference> {
    type Output = PostfixProxy<C::Value>;

    fn post_advance(cursor: &mut Common<C, B>) -> PostfixProxy<C::Value> {
        // Read the value before the cursor moves on: the cursor may not be able to produce it afterwards
        let held  = cursor.held_cursor_mut("increment");
        let value = C::Value::from(held.get());
        held.advance();

        PostfixProxy::new(value)
    }
}

impl<C> ArrowStrategy<C> for ByMember
where
C: MemberAccess {
    type Pointer = C::Pointer;

    #[inline]
    fn arrow(cursor: &C) -> C::Pointer {
        cursor.arrow()
    }
}

impl<C> ArrowStrategy<C> for ByReference
where
C:              Cursor,
C::Reference:   Deref<Target=C::Value> {
    type Pointer = C::Reference;

    #[inline]
    fn arrow(cursor: &C) -> C::Reference {
        cursor.get()
    }
}

impl<C> ArrowStrategy<C> for ByValue
where
C:          Cursor,
C::Value:   From<C::Reference> {
    type Pointer = ArrowProxy<C::Value>;

    #[inline]
    fn arrow(cursor: &C) -> ArrowProxy<C::Value> {
        ArrowProxy::new(C::Value::from(cursor.get()))
    }
}

// Cursors that can't be compared with each other are considered to be at the same position
impl<C, C2> CursorEquality<C, C2> for Incomparable {
    #[inline]
    fn cursors_equal(_cursor: &C, _other: &C2) -> bool {
        true
    }
}

impl<C, C2> CursorEquality<C, C2> for Comparable
where
C: PartialEq<C2> {
    #[inline]
    fn cursors_equal(cursor: &C, other: &C2) -> bool {
        cursor == other
    }
}
