//! Cursor-based streams over owned sequences
//!
//! The lexer reads characters through a [`CharStream`] and hands its output to
//! the parser as a [`TokenStream`](crate::tokens::TokenStream); both are
//! [`VecStream`] instances behind the [`Stream`] contract.

pub mod vec_stream;

pub use vec_stream::{CharStream, VecStream};

/// Errors raised by stream mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("Index {index} out of bounds for stream of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Indexable view over a sequence with a signed cursor
///
/// The cursor starts at -1 (before the first element) and never moves past
/// `len`. Cloning yields an independent copy with its own cursor.
pub trait Stream: Clone {
    type Item: Clone;

    /// Advance the cursor by one and return the element now under it
    fn next(&mut self) -> Option<Self::Item>;

    /// Look at `cursor + offset` without moving
    fn read_at(&self, offset: isize) -> Option<Self::Item>;

    /// Element under the cursor, `None` before the start or past the end
    fn current(&self) -> Option<Self::Item>;

    /// The whole underlying sequence
    fn input(&self) -> &[Self::Item];

    fn has_next(&self) -> bool;

    fn cursor(&self) -> isize;

    /// Overwrite the element at an absolute index
    fn replace(&mut self, index: usize, value: Self::Item) -> Result<(), StreamError>;
}
