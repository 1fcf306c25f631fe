//!
//! # Cursor and sequence traits
//!
//! The traits in this module describe what a cursor can do. A cursor declares its
//! capabilities through a set of tag types (its traversal, how it gives access to the
//! value it points at) and the rest of the crate picks an implementation for each
//! operation from those tags at compile time.
//!

mod capability;
mod cursor_trait;
mod distance_trait;
mod sequence_trait;

pub use self::capability::*;
pub use self::cursor_trait::*;
pub use self::distance_trait::*;
pub use self::sequence_trait::*;
