//! Token stream handed to the pattern parser
//!
//! Tokens are consumed through the same cursor contract as characters, so the
//! parser gets lookahead, point replacement and speculative clones for free.

use super::token::{Token, TokenKind};
use crate::stream::VecStream;

/// Lexer output, terminated by `Token::End`
pub type TokenStream = VecStream<Token>;

impl VecStream<Token> {
    /// Concatenated lexemes of every token
    pub fn lexemes(&self) -> String {
        self.input().iter().map(Token::lexeme).collect()
    }

    /// Kinds in order; the end marker has none and is skipped
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.input().iter().filter_map(Token::kind).collect()
    }

    /// Whether the last token is the end marker
    pub fn is_terminated(&self) -> bool {
        self.input().last().is_some_and(Token::is_end)
    }
}
