use crate::api::*;

///
/// Iterator that reads the elements from a cursor until it reaches an end marker
///
/// The end marker can be a boundary or a cursor of the same type (such as the end of a
/// closed view). This lets ordinary iterator code consume any cursor/boundary pair.
///
#[derive(Clone, Debug)]
pub struct Walk<C, E> {
    /// The position of the next element to read
    cursor: C,

    /// Where to stop
    end: E
}

impl<C, E> Walk<C, E> {
    ///
    /// Creates an iterator that reads from `cursor` until it compares equal to `end`
    ///
    pub fn new(cursor: C, end: E) -> Walk<C, E> {
        Walk { cursor, end }
    }

    ///
    /// The position of the next element that will be read
    ///
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    ///
    /// Stops iterating, returning the cursor and the end marker
    ///
    pub fn into_parts(self) -> (C, E) {
        (self.cursor, self.end)
    }
}

impl<C, E> Iterator for Walk<C, E>
where
C: Cursor+PartialEq<E> {
    type Item = C::Reference;

    fn next(&mut self) -> Option<C::Reference> {
        if self.cursor == self.end {
            // Reached the end of the sequence
            None
        } else {
            // Read the current element and move on
            let item = self.cursor.get();
            self.cursor.advance();

            Some(item)
        }
    }
}
