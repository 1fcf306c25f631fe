use super::capability::*;
use super::cursor_trait::*;

///
/// A sequence described by a cursor to its first element and a boundary that marks its end
///
/// Reading the cursor and boundary may change the sequence (for example, a generator that
/// starts producing values when it is first read), so these take `&mut self`. Sequences
/// that can be read through a shared reference also implement `SharedSequence`.
///
pub trait Sequence {
    /// A cursor to an element of this sequence
    type Cursor: Cursor+PartialEq<Self::Boundary>;

    /// The value that a cursor compares equal to once it has passed the last element
    type Boundary: PartialEq<Self::Cursor>;

    /// Whether or not this sequence implements `SizedSequence`
    type Sizing: Sizing;

    ///
    /// Returns a cursor to the first element in this sequence
    ///
    fn begin(&mut self) -> Self::Cursor;

    ///
    /// Returns the boundary that marks the end of this sequence
    ///
    fn end(&mut self) -> Self::Boundary;
}

///
/// A sequence that can be traversed through a shared reference
///
pub trait SharedSequence {
    /// A cursor to an element of this sequence
    type Cursor: Cursor+PartialEq<Self::Boundary>;

    /// The value that a cursor compares equal to once it has passed the last element
    type Boundary: PartialEq<Self::Cursor>;

    /// Whether or not this sequence implements `SizedSequence`
    type Sizing: Sizing;

    ///
    /// Returns a cursor to the first element in this sequence
    ///
    fn begin(&self) -> Self::Cursor;

    ///
    /// Returns the boundary that marks the end of this sequence
    ///
    fn end(&self) -> Self::Boundary;
}

///
/// A sequence that knows how many elements it contains without being walked
///
pub trait SizedSequence {
    ///
    /// The number of elements in this sequence
    ///
    fn size(&self) -> usize;
}
