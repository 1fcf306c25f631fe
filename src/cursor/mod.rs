//!
//! # Cursors and boundaries
//!
//! Concrete cursor and boundary types: a contiguous cursor over slices, a counting
//! wrapper that turns any cursor and a length into a sequence, the `Exhausted` boundary
//! that goes with it, and the `Subrange` sequence that pairs a cursor with its boundary.
//!

mod slice_cursor;
mod counted_cursor;
mod exhausted;
mod subrange;
mod walk;

pub use self::slice_cursor::*;
pub use self::counted_cursor::*;
pub use self::exhausted::*;
pub use self::subrange::*;
pub use self::walk::*;
