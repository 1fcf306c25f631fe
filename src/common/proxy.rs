use std::ops::{Deref};

///
/// Holds a copy of the value at a cursor so that its members can be reached through a pointer
///
/// This is returned by `arrow()` for cursors that produce values rather than references.
/// It lives for as long as the expression that created it and should not be stored.
///
#[derive(Debug)]
#[must_use]
pub struct ArrowProxy<Value> {
    value: Value
}

impl<Value> ArrowProxy<Value> {
    pub (crate) fn new(value: Value) -> ArrowProxy<Value> {
        ArrowProxy { value }
    }
}

impl<Value> Deref for ArrowProxy<Value> {
    type Target = Value;

    #[inline]
    fn deref(&self) -> &Value {
        &self.value
    }
}

///
/// The value that a single-pass cursor pointed at before it was post-advanced
///
/// Single-pass cursors that produce values can't be copied to remember their previous
/// position, so a post-advance reads the current value into one of these before moving on.
/// Dereferencing the proxy yields the value that was read.
///
#[derive(Debug)]
#[must_use]
pub struct PostfixProxy<Value> {
    value: Value
}

impl<Value> PostfixProxy<Value> {
    pub (crate) fn new(value: Value) -> PostfixProxy<Value> {
        PostfixProxy { value }
    }

    ///
    /// Takes the buffered value out of this proxy
    ///
    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl<Value> Deref for PostfixProxy<Value> {
    type Target = Value;

    #[inline]
    fn deref(&self) -> &Value {
        &self.value
    }
}
