//! Lexical analysis of regular expression patterns
//!

pub mod analyzer;
pub mod metrics;

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{TokenMap, TokenStream};
use std::time::Instant;

pub use analyzer::{Lexer, LexerError, LexerState};
pub use metrics::LexicalMetrics;

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize a whole pattern into a stream terminated by `Token::End`
pub fn tokenize(pattern: &str, map: &TokenMap) -> Result<TokenStream, LexerError> {
    tokenize_with_preferences(pattern, map, LexicalPreferences::default())
}

/// Tokenize with custom runtime preferences
pub fn tokenize_with_preferences(
    pattern: &str,
    map: &TokenMap,
    preferences: LexicalPreferences,
) -> Result<TokenStream, LexerError> {
    let started = Instant::now();
    let mut lexer = Lexer::create(pattern, map)?.with_preferences(preferences);

    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let finished = token.is_end();
        tokens.push(token);
        if finished {
            break;
        }
    }

    let metrics = lexer.metrics();
    crate::log_performance!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
        duration = started.elapsed(),
        "tokens" => metrics.total_tokens,
        "escapes" => metrics.escape_tokens,
        "negated" => metrics.negated_escapes,
        "unicode" => metrics.unicode_tokens
    );

    Ok(TokenStream::from(tokens))
}

// ============================================================================
// MODULE INITIALIZATION AND VALIDATION
// ============================================================================

/// Check that every lexical code has registry metadata (for system startup)
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let lexical_codes = [
        codes::lexical::UNKNOWN_CHARACTER,
        codes::lexical::UNTERMINATED_PROPERTY,
        codes::lexical::UNKNOWN_PROPERTY,
        codes::lexical::PATTERN_TOO_LONG,
    ];

    for code in &lexical_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::log_debug!("Lexical limits initialized",
        "max_pattern_length" => MAX_PATTERN_LENGTH,
        "max_logged_fragment_length" => MAX_LOGGED_FRAGMENT_LENGTH
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Token, TokenKind};
    use assert_matches::assert_matches;

    #[test]
    fn test_tokenize_terminates_with_end() {
        let map = TokenMap::builtin().unwrap();
        let stream = tokenize(r"^[a-z]+\d{2}$", map).unwrap();

        assert!(stream.is_terminated());
        assert_eq!(stream.lexemes(), "^[a-z]+dd{2}$");
        assert_eq!(
            stream.kinds()[..4],
            [
                TokenKind::Hat,
                TokenKind::LeftBracket,
                TokenKind::Char,
                TokenKind::Minus
            ]
        );
        assert_eq!(
            stream.input().iter().filter(|t| t.is_escape()).count(),
            1
        );
    }

    #[test]
    fn test_tokenize_empty_pattern() {
        let map = TokenMap::builtin().unwrap();
        let stream = tokenize("", map).unwrap();
        assert_eq!(stream.input(), &[Token::End]);
    }

    #[test]
    fn test_tokenize_propagates_error() {
        let map = TokenMap::builtin().unwrap();
        assert_matches!(
            tokenize(r"a\p{Nope}", map),
            Err(LexerError::UnknownProperty { .. })
        );
    }

    #[test]
    fn test_lexical_codes_registered() {
        assert!(init_lexical_analysis_logging().is_ok());
    }
}
