//!
//! # Common cursors
//!
//! `Common<C, B>` holds either a cursor or a boundary, so that a sequence described by two
//! different types can be described by a begin/end pair of a single type. Which payload
//! is held is decided at runtime, but how each operation is carried out is decided at
//! compile time from the capability tags of the wrapped cursor.
//!

mod common_cursor;
mod proxy;
mod strategy;

pub use self::common_cursor::*;
pub use self::proxy::*;
pub use self::strategy::*;
