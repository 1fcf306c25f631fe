///
/// Measures the signed number of positions between two cursors, or between a cursor and a boundary
///
/// `a.distance(&b)` is the number of times `b` has to be advanced to reach `a`: it is the
/// `a - b` of a pointer difference.
///
pub trait Distance<Rhs: ?Sized = Self> {
    fn distance(&self, origin: &Rhs) -> isize;
}
