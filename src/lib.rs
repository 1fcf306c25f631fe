//!
//! `flo_cursor` unifies cursors and boundaries so that sequences can be traversed by algorithms
//! that expect a begin/end pair of a single type.
//!
//! Many sequences are most naturally described by a cursor and a boundary of a different type:
//! a cursor over a C string and a 'nul byte' boundary, a cursor that reads from a stream and a
//! boundary that checks whether the stream has ended, or a cursor plus a count of the elements
//! that remain. `flo_cursor` provides:
//!
//!  * `Common<C, B>`, a cursor that holds either a cursor or a boundary and behaves as a single
//!    cursor type, whichever of the two it holds
//!  * `ClosedView`, which presents any sequence as a pair of cursors of the same type, using
//!    `Common` only when the sequence can't be closed with its own cursors
//!  * `counted()`, which turns a cursor and a length into a sequence, using a slice for
//!    contiguous cursors, a pair of cursors for random-access cursors and a `CountedCursor`
//!    for everything else
//!
//! The capabilities of a cursor are described by tag types (`Cursor::Traversal` and
//! `Cursor::Access`) and each operation picks its implementation from those tags at compile
//! time. The only decision made at runtime is whether a `Common` holds a cursor or a boundary.
//!
//! ## Examples
//!
//! Closing a sequence whose boundary is a different type to its cursor
//!
//! ```
//! use flo_cursor::*;
//!
//! let values      = vec![1, 2, 3, 4];
//! let cursor      = CountedCursor::new(SliceCursor::new(&values), 3);
//! let mut view    = Subrange::new(cursor, Exhausted).closed();
//!
//! let begin       = Sequence::begin(&mut view);
//! let end         = Sequence::end(&mut view);
//!
//! assert!(begin.is_cursor());
//! assert!(end.is_boundary());
//! assert!(Walk::new(begin, end).copied().collect::<Vec<_>>() == vec![1, 2, 3]);
//! ```
//!

pub mod api;
pub mod common;
pub mod cursor;
pub mod view;
mod error;
#[cfg(test)] mod testing;

pub use crate::api::*;
pub use crate::common::*;
pub use crate::cursor::*;
pub use crate::view::*;
pub use crate::error::*;
