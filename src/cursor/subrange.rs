use crate::api::*;

use std::marker::{PhantomData};

///
/// A sequence made from a cursor to its first element and a boundary marking its end
///
/// The `Sizing` parameter records whether or not the size of the sequence can be found
/// by measuring the distance from the cursor to the boundary.
///
/// `begin()` and `end()` return clones, so a subrange is only a `Sequence` if its cursor and
/// boundary can be cloned. Otherwise `into_parts()` is the way to get at them.
///
#[derive(Clone, Debug)]
pub struct Subrange<C, B, Z = UnknownSize> {
    /// Cursor to the first element
    begin: C,

    /// The boundary after the last element
    end: B,

    sizing: PhantomData<Z>
}

impl<C, B> Subrange<C, B, UnknownSize> {
    ///
    /// Creates a subrange from a cursor and a boundary. The size of the sequence is not known
    ///
    pub fn new(begin: C, end: B) -> Subrange<C, B, UnknownSize> {
        Subrange {
            begin:  begin,
            end:    end,
            sizing: PhantomData
        }
    }
}

impl<C, B> Subrange<C, B, KnownSize>
where
B: Distance<C> {
    ///
    /// Creates a subrange whose size is the distance between its cursor and its boundary
    ///
    pub fn sized(begin: C, end: B) -> Subrange<C, B, KnownSize> {
        debug_assert!(end.distance(&begin) >= 0, "Subrange boundary is before its first cursor");

        Subrange {
            begin:  begin,
            end:    end,
            sizing: PhantomData
        }
    }
}

impl<C, B, Z> Subrange<C, B, Z> {
    ///
    /// Splits this subrange into its cursor and its boundary
    ///
    pub fn into_parts(self) -> (C, B) {
        (self.begin, self.end)
    }
}

impl<C, B, Z> Sequence for Subrange<C, B, Z>
where
C: Cursor+Clone+PartialEq<B>,
B: Clone+PartialEq<C>,
Z: Sizing {
    type Cursor     = C;
    type Boundary   = B;
    type Sizing     = Z;

    #[inline]
    fn begin(&mut self) -> C {
        self.begin.clone()
    }

    #[inline]
    fn end(&mut self) -> B {
        self.end.clone()
    }
}

impl<C, B, Z> SharedSequence for Subrange<C, B, Z>
where
C: Cursor+Clone+PartialEq<B>,
B: Clone+PartialEq<C>,
Z: Sizing {
    type Cursor     = C;
    type Boundary   = B;
    type Sizing     = Z;

    #[inline]
    fn begin(&self) -> C {
        self.begin.clone()
    }

    #[inline]
    fn end(&self) -> B {
        self.end.clone()
    }
}

impl<C, B> SizedSequence for Subrange<C, B, KnownSize>
where
B: Distance<C> {
    fn size(&self) -> usize {
        self.end.distance(&self.begin) as usize
    }
}
