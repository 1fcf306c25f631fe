use std::marker::{PhantomData};

///
/// Describes the traversal capability of a cursor at runtime
///
/// The variants are ordered so that a 'greater' kind of traversal supports everything
/// a lesser one does.
///
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalKind {
    /// Past positions cannot be revisited: copying the cursor does not give an independent traversal
    SinglePass,

    /// The cursor can be copied and each copy advanced independently
    MultiPass,

    /// The cursor can jump to an arbitrary offset and measure distances in constant time
    RandomAccess,

    /// As for random access, and the elements occupy a single block of memory
    Contiguous
}

impl TraversalKind {
    ///
    /// True if a cursor with this traversal can be copied and replayed
    ///
    pub fn is_multi_pass(self) -> bool {
        self >= TraversalKind::MultiPass
    }

    ///
    /// True if a cursor with this traversal supports arbitrary offsets
    ///
    pub fn is_random_access(self) -> bool {
        self >= TraversalKind::RandomAccess
    }
}

///
/// Tag types that describe how a cursor may be traversed
///
pub trait Traversal {
    /// The runtime description of this traversal
    const KIND: TraversalKind;

    /// The traversal reported by a `Common` cursor that wraps a cursor with this traversal
    type Closed: Traversal;
}

///
/// Describes what post-advancing a single-pass cursor yields
///
pub trait PostfixKind { }

/// The cursor's own post-advance does not yield a usable value: the current value is buffered instead
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Buffered { }

/// The cursor implements `NativePostfix` and its result can be used directly
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Native { }

impl PostfixKind for Buffered { }
impl PostfixKind for Native { }

/// Traversal tag for single-pass cursors
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SinglePass<Postfix = Buffered>(PhantomData<Postfix>);

/// Traversal tag for cursors that can be copied and replayed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MultiPass { }

/// Traversal tag for cursors with constant-time offsets and distances
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RandomAccess { }

/// Traversal tag for random-access cursors over contiguous memory
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Contiguous { }

impl<Postfix: PostfixKind> Traversal for SinglePass<Postfix> {
    const KIND: TraversalKind = TraversalKind::SinglePass;

    // A common cursor always has a usable post-advance of its own
    type Closed = SinglePass<Native>;
}

impl Traversal for MultiPass {
    const KIND: TraversalKind = TraversalKind::MultiPass;
    type Closed = MultiPass;
}

impl Traversal for RandomAccess {
    const KIND: TraversalKind = TraversalKind::RandomAccess;
    type Closed = MultiPass;
}

impl Traversal for Contiguous {
    const KIND: TraversalKind = TraversalKind::Contiguous;
    type Closed = MultiPass;
}

///
/// Tag types that describe how a cursor gives access to the members of the value it points at
///
pub trait Access { }

/// The cursor implements `MemberAccess` itself
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ByMember { }

/// Dereferencing the cursor yields a true reference to the value
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ByReference { }

/// Dereferencing the cursor yields a value that has to be buffered to take its address
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ByValue { }

impl Access for ByMember { }
impl Access for ByReference { }
impl Access for ByValue { }

///
/// Tag types that describe whether two cursors of the same sequence can be compared with each other
///
pub trait Equality { }

/// The cursor implements `PartialEq` and comparing two cursors tells whether they are at the same position
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Comparable { }

/// Cursors can't be compared with each other (only with their boundary)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Incomparable { }

impl Equality for Comparable { }
impl Equality for Incomparable { }

///
/// Tag types that describe whether or not a sequence knows its size up front
///
pub trait Sizing {
    /// True if sequences with this sizing implement `SizedSequence`
    const KNOWN: bool;
}

/// The sequence implements `SizedSequence`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KnownSize { }

/// The size of the sequence is only discovered by walking it
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnknownSize { }

impl Sizing for KnownSize {
    const KNOWN: bool = true;
}

impl Sizing for UnknownSize {
    const KNOWN: bool = false;
}
