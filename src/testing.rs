//!
//! Cursors with specific capabilities, used to exercise the strategies in the rest of the crate
//!

use crate::api::*;
use crate::cursor::*;

use std::rc::*;
use std::cell::*;

///
/// Single-pass cursor that produces values: reading it and then advancing it invalidates what was read,
/// and copies share the same position
///
#[derive(Clone, Debug)]
pub struct InputCursor {
    pub values:     Rc<Vec<i32>>,
    pub position:   Rc<Cell<usize>>
}

/// The end of the values read by an `InputCursor`
#[derive(Clone, Copy, Debug)]
pub struct InputEnd;

impl InputCursor {
    pub fn new(values: Vec<i32>) -> InputCursor {
        InputCursor {
            values:     Rc::new(values),
            position:   Rc::new(Cell::new(0))
        }
    }

    pub fn position(&self) -> usize {
        self.position.get()
    }
}

impl Cursor for InputCursor {
    type Value      = i32;
    type Reference  = i32;
    type Traversal  = SinglePass<Buffered>;
    type Access     = ByValue;
    type Equality   = Incomparable;

    fn get(&self) -> i32 {
        self.values[self.position.get()]
    }

    fn advance(&mut self) {
        self.position.set(self.position.get() + 1);
    }
}

impl PartialEq<InputEnd> for InputCursor {
    fn eq(&self, _other: &InputEnd) -> bool {
        self.position.get() >= self.values.len()
    }
}

impl PartialEq<InputCursor> for InputEnd {
    fn eq(&self, other: &InputCursor) -> bool {
        other == self
    }
}

///
/// Sequence that can only be read through a mutable reference: each call to `begin()` restarts it
///
#[derive(Debug)]
pub struct InputSource {
    values:     Rc<Vec<i32>>,
    pub starts: usize
}

impl InputSource {
    pub fn new(values: Vec<i32>) -> InputSource {
        InputSource {
            values: Rc::new(values),
            starts: 0
        }
    }
}

impl Sequence for InputSource {
    type Cursor     = InputCursor;
    type Boundary   = InputEnd;
    type Sizing     = UnknownSize;

    fn begin(&mut self) -> InputCursor {
        self.starts += 1;

        InputCursor {
            values:     Rc::clone(&self.values),
            position:   Rc::new(Cell::new(0))
        }
    }

    fn end(&mut self) -> InputEnd {
        InputEnd
    }
}

///
/// Single-pass cursor that owns its values, so it can't be cloned
///
#[derive(Debug)]
pub struct DrainCursor {
    values:     std::vec::IntoIter<i32>,
    current:    Option<i32>
}

impl DrainCursor {
    pub fn new(values: Vec<i32>) -> DrainCursor {
        let mut values  = values.into_iter();
        let current     = values.next();

        DrainCursor { values, current }
    }
}

impl Cursor for DrainCursor {
    type Value      = i32;
    type Reference  = i32;
    type Traversal  = SinglePass<Buffered>;
    type Access     = ByValue;
    type Equality   = Incomparable;

    fn get(&self) -> i32 {
        self.current.expect("Read past the end of a drain cursor")
    }

    fn advance(&mut self) {
        self.current = self.values.next();
    }
}

///
/// Single-pass cursor whose own post-advance returns a usable value
///
#[derive(Clone, Debug)]
pub struct NativeInputCursor {
    pub input: InputCursor
}

impl Cursor for NativeInputCursor {
    type Value      = i32;
    type Reference  = i32;
    type Traversal  = SinglePass<Native>;
    type Access     = ByValue;
    type Equality   = Incomparable;

    fn get(&self) -> i32 {
        self.input.get()
    }

    fn advance(&mut self) {
        self.input.advance()
    }
}

impl NativePostfix for NativeInputCursor {
    type Postfix = Box<i32>;

    fn post_advance(&mut self) -> Box<i32> {
        let value = Box::new(self.input.get());
        self.input.advance();

        value
    }
}

impl PartialEq<InputEnd> for NativeInputCursor {
    fn eq(&self, other: &InputEnd) -> bool {
        self.input == *other
    }
}

impl PartialEq<NativeInputCursor> for InputEnd {
    fn eq(&self, other: &NativeInputCursor) -> bool {
        other.input == *self
    }
}

///
/// A node in a singly linked list
///
#[derive(Debug)]
pub struct ListNode {
    pub value:  i32,
    pub next:   Option<Box<ListNode>>
}

///
/// Creates a linked list containing the specified values
///
pub fn list(values: &[i32]) -> Option<Box<ListNode>> {
    values.iter().rev()
        .fold(None, |next, value| Some(Box::new(ListNode { value: *value, next: next })))
}

///
/// Multi-pass (but not random-access) cursor over a linked list
///
#[derive(Clone, Copy, Debug)]
pub struct ListCursor<'a> {
    pub node: Option<&'a ListNode>
}

/// The end of a linked list
#[derive(Clone, Copy, Debug)]
pub struct ListEnd;

///
/// Creates a sequence covering a linked list
///
pub fn list_sequence(head: &Option<Box<ListNode>>) -> Subrange<ListCursor<'_>, ListEnd> {
    Subrange::new(ListCursor { node: head.as_deref() }, ListEnd)
}

impl<'a> PartialEq for ListCursor<'a> {
    fn eq(&self, other: &ListCursor<'a>) -> bool {
        match (self.node, other.node) {
            (Some(a), Some(b))  => std::ptr::eq(a, b),
            (None, None)        => true,
            _                   => false
        }
    }
}

impl<'a> Cursor for ListCursor<'a> {
    type Value      = i32;
    type Reference  = &'a i32;
    type Traversal  = MultiPass;
    type Access     = ByReference;
    type Equality   = Comparable;

    fn get(&self) -> &'a i32 {
        &self.node.expect("Read past the end of a list").value
    }

    fn advance(&mut self) {
        self.node = self.node.and_then(|node| node.next.as_deref());
    }
}

impl<'a> ForwardCursor for ListCursor<'a> { }

impl<'a> PartialEq<ListEnd> for ListCursor<'a> {
    fn eq(&self, _other: &ListEnd) -> bool {
        self.node.is_none()
    }
}

impl<'a> PartialEq<ListCursor<'a>> for ListEnd {
    fn eq(&self, other: &ListCursor<'a>) -> bool {
        other.node.is_none()
    }
}

///
/// Boundary for a slice cursor at a particular position
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EndAt(pub usize);

impl<'a, T> PartialEq<EndAt> for SliceCursor<'a, T> {
    fn eq(&self, other: &EndAt) -> bool {
        self.position() == other.0
    }
}

impl<'a, T> PartialEq<SliceCursor<'a, T>> for EndAt {
    fn eq(&self, other: &SliceCursor<'a, T>) -> bool {
        other.position() == self.0
    }
}

impl<'a, T> Distance<EndAt> for SliceCursor<'a, T> {
    fn distance(&self, origin: &EndAt) -> isize {
        (self.position() as isize) - (origin.0 as isize)
    }
}

impl<'a, T> Distance<SliceCursor<'a, T>> for EndAt {
    fn distance(&self, origin: &SliceCursor<'a, T>) -> isize {
        (self.0 as isize) - (origin.position() as isize)
    }
}

///
/// Random-access cursor that produces the integers
///
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct Iota(pub isize);

impl Cursor for Iota {
    type Value      = isize;
    type Reference  = isize;
    type Traversal  = RandomAccess;
    type Access     = ByValue;
    type Equality   = Comparable;

    fn get(&self) -> isize {
        self.0
    }

    fn advance(&mut self) {
        self.0 += 1;
    }
}

impl ForwardCursor for Iota { }

impl Distance for Iota {
    fn distance(&self, origin: &Iota) -> isize {
        self.0 - origin.0
    }
}

impl RandomAccessCursor for Iota {
    fn offset(&self, n: isize) -> Iota {
        Iota(self.0 + n)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32
}

///
/// Cursor that produces copies of points but can also point at the stored point
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointCursor<'a> {
    pub points: &'a [Point],
    pub pos:    usize
}

impl<'a> Cursor for PointCursor<'a> {
    type Value      = Point;
    type Reference  = Point;
    type Traversal  = MultiPass;
    type Access     = ByMember;
    type Equality   = Comparable;

    fn get(&self) -> Point {
        self.points[self.pos].clone()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<'a> MemberAccess for PointCursor<'a> {
    type Pointer = &'a Point;

    fn arrow(&self) -> &'a Point {
        &self.points[self.pos]
    }
}

///
/// Finds the first element matching a predicate, using only the operations on a cursor and its end marker
///
pub fn find_if<C, E, P>(cursor: C, end: &E, predicate: P) -> C
where
C: Cursor+PartialEq<E>,
P: Fn(C::Reference) -> bool {
    let mut cursor = cursor;

    while cursor != *end {
        if predicate(cursor.get()) {
            break;
        }

        cursor.advance();
    }

    cursor
}

///
/// Finds the smallest element between a cursor and its end marker
///
pub fn min<C, E>(cursor: C, end: &E) -> Option<C::Reference>
where
C:              Cursor+PartialEq<E>,
C::Reference:   PartialOrd {
    let mut cursor  = cursor;
    let mut least   = None;

    while cursor != *end {
        let value = cursor.get();

        least = match least {
            Some(least) if least <= value   => Some(least),
            _                               => Some(value)
        };

        cursor.advance();
    }

    least
}

///
/// Sends trace output to the test harness (once per process: later calls are ignored)
///
pub fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
