//! Token system for pattern lexing
//!
//! - [`TokenKind`] - closed set of canonical kind names
//! - [`Token`] - plain tokens, escape tokens carrying a negation flag, and the end marker
//! - [`TokenMap`] - lexeme to kind table loaded from JSON configuration
//! - [`TokenStream`] - lexer output with cursor-based lookahead

pub mod token;
pub mod token_map;
pub mod token_stream;

pub use token::{EscapeToken, PlainToken, Token, TokenClass, TokenKind};
pub use token_map::TokenMap;
pub use token_stream::TokenStream;
