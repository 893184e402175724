//! Vector-backed stream implementation

use super::{Stream, StreamError};
use serde::{Deserialize, Serialize};

/// Owned sequence plus cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VecStream<T> {
    items: Vec<T>,
    cursor: isize,
}

/// Character stream consumed by the lexer
pub type CharStream = VecStream<char>;

impl<T: Clone> VecStream<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, cursor: -1 }
    }

    pub fn next(&mut self) -> Option<T> {
        if self.cursor < self.end() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn read_at(&self, offset: isize) -> Option<T> {
        self.get(self.cursor.checked_add(offset)?)
    }

    pub fn current(&self) -> Option<T> {
        self.get(self.cursor)
    }

    pub fn input(&self) -> &[T] {
        &self.items
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.end()
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn replace(&mut self, index: usize, value: T) -> Result<(), StreamError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StreamError::IndexOutOfBounds { index, len }),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements a caller can still obtain with `next`
    pub fn remaining(&self) -> usize {
        (self.end() - self.cursor - 1).max(0) as usize
    }

    fn end(&self) -> isize {
        self.items.len() as isize
    }

    fn get(&self, index: isize) -> Option<T> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get(i))
            .cloned()
    }
}

impl<T: Clone> Stream for VecStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        VecStream::next(self)
    }

    fn read_at(&self, offset: isize) -> Option<T> {
        VecStream::read_at(self, offset)
    }

    fn current(&self) -> Option<T> {
        VecStream::current(self)
    }

    fn input(&self) -> &[T] {
        VecStream::input(self)
    }

    fn has_next(&self) -> bool {
        VecStream::has_next(self)
    }

    fn cursor(&self) -> isize {
        VecStream::cursor(self)
    }

    fn replace(&mut self, index: usize, value: T) -> Result<(), StreamError> {
        VecStream::replace(self, index, value)
    }
}

impl<T: Clone> From<Vec<T>> for VecStream<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl From<&str> for CharStream {
    fn from(pattern: &str) -> Self {
        Self::new(pattern.chars().collect())
    }
}

impl CharStream {
    /// Underlying characters as a string, for diagnostics
    pub fn as_string(&self) -> String {
        self.items.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_cursor_starts_before_first_element() {
        let stream = CharStream::from("ab");
        assert_eq!(stream.cursor(), -1);
        assert_eq!(stream.current(), None);
        assert_eq!(stream.read_at(1), Some('a'));
        assert!(stream.has_next());
        assert_eq!(stream.remaining(), 2);
    }

    #[test]
    fn test_next_saturates_at_end() {
        let mut stream = CharStream::from("ab");
        assert_eq!(stream.next(), Some('a'));
        assert_eq!(stream.next(), Some('b'));
        assert!(!stream.has_next());
        assert_eq!(stream.next(), None);
        assert_eq!(stream.cursor(), 2);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.cursor(), 2);
        assert_eq!(stream.current(), None);
        assert_eq!(stream.read_at(-1), Some('b'));
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_read_at_does_not_move() {
        let mut stream = CharStream::from("xyz");
        stream.next();
        assert_eq!(stream.read_at(0), Some('x'));
        assert_eq!(stream.read_at(2), Some('z'));
        assert_eq!(stream.read_at(3), None);
        assert_eq!(stream.read_at(-1), None);
        assert_eq!(stream.read_at(isize::MAX), None);
        assert_eq!(stream.cursor(), 0);
    }

    #[test]
    fn test_replace_in_and_out_of_bounds() {
        let mut stream = CharStream::from("a+");
        assert!(stream.replace(1, '*').is_ok());
        assert_eq!(stream.as_string(), "a*");
        assert_matches!(
            stream.replace(2, '?'),
            Err(StreamError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = CharStream::from("abc");
        original.next();

        let mut speculative = original.clone();
        speculative.next();
        speculative.next();
        speculative.replace(0, 'z').unwrap();

        assert_eq!(original.cursor(), 0);
        assert_eq!(original.current(), Some('a'));
        assert_eq!(original.input(), &['a', 'b', 'c']);
        assert_eq!(speculative.current(), Some('c'));
    }

    #[test]
    fn test_empty_stream() {
        let mut stream: VecStream<u8> = Vec::new().into();
        assert!(stream.is_empty());
        assert!(!stream.has_next());
        assert_eq!(stream.next(), None);
        assert_eq!(stream.cursor(), 0);
    }

    #[test]
    fn test_generic_access_through_trait() {
        fn drain<S: Stream>(stream: &mut S) -> Vec<S::Item> {
            let mut out = Vec::new();
            while let Some(item) = Stream::next(stream) {
                out.push(item);
            }
            out
        }

        let mut stream = VecStream::from(vec![1, 2, 3]);
        assert_eq!(drain(&mut stream), vec![1, 2, 3]);
    }
}
