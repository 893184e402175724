//! Pattern lexer
//!
//! Pulls one token at a time from a [`CharStream`]. Single characters are
//! classified through the [`TokenMap`]; a backslash opens an escape whose
//! meaning depends on one character of lookahead, and `\p`/`\P` hand over to
//! the Unicode property reader.

use super::metrics::LexicalMetrics;
use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::stream::CharStream;
use crate::tokens::{Token, TokenKind, TokenMap};
use crate::{log_debug, log_error};

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Unknown token {character} at position {position}")]
    UnknownCharacter { character: char, position: usize },

    #[error("Unknown token {fragment} at position {position}")]
    UnterminatedProperty { fragment: String, position: usize },

    #[error("Unknown unicode token {name} at position {position}")]
    UnknownProperty { name: String, position: usize },

    #[error("Pattern too long: {length} characters (max {MAX_PATTERN_LENGTH})")]
    PatternTooLong { length: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnknownCharacter { .. } => codes::lexical::UNKNOWN_CHARACTER,
            LexerError::UnterminatedProperty { .. } => codes::lexical::UNTERMINATED_PROPERTY,
            LexerError::UnknownProperty { .. } => codes::lexical::UNKNOWN_PROPERTY,
            LexerError::PatternTooLong { .. } => codes::lexical::PATTERN_TOO_LONG,
        }
    }

    /// Stream index the error was raised at, if it has one
    pub fn position(&self) -> Option<usize> {
        match self {
            LexerError::UnknownCharacter { position, .. }
            | LexerError::UnterminatedProperty { position, .. }
            | LexerError::UnknownProperty { position, .. } => Some(*position),
            LexerError::PatternTooLong { .. } => None,
        }
    }
}

/// Where the lexer is between and during tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerState {
    Start,
    Escaped,
    InUnicodeShort,
    InUnicodeBrace,
    /// End of input reached; sticky
    Done,
    /// A lexical error was raised; sticky, replays the error
    Error,
}

impl LexerState {
    pub fn is_terminal(self) -> bool {
        matches!(self, LexerState::Done | LexerState::Error)
    }
}

/// Single-pattern lexer session
#[derive(Debug)]
pub struct Lexer<'m> {
    stream: CharStream,
    map: &'m TokenMap,
    state: LexerState,
    failure: Option<LexerError>,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl<'m> Lexer<'m> {
    pub fn new(stream: CharStream, map: &'m TokenMap) -> Self {
        Self {
            stream,
            map,
            state: LexerState::Start,
            failure: None,
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    /// Build the character stream for `pattern`, enforcing the length limit
    pub fn create(pattern: &str, map: &'m TokenMap) -> Result<Self, LexerError> {
        let length = pattern.chars().count();
        if length > MAX_PATTERN_LENGTH {
            let error = LexerError::PatternTooLong { length };
            log_error!(error.error_code(), &error.to_string(),
                "length" => length,
                "limit" => MAX_PATTERN_LENGTH
            );
            return Err(error);
        }

        log_debug!("Starting lexical analysis", "pattern_length" => length);

        Ok(Self::new(CharStream::from(pattern), map))
    }

    pub fn with_preferences(mut self, preferences: LexicalPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn stream(&self) -> &CharStream {
        &self.stream
    }

    pub fn state(&self) -> LexerState {
        self.state
    }

    /// Produce the next token
    ///
    /// Returns `Token::End` forever once the input is exhausted. After a
    /// lexical error every call returns that same error and the stream is
    /// left where the error happened.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        match (self.state, &self.failure) {
            (LexerState::Done, _) => return Ok(Token::End),
            (LexerState::Error, Some(error)) => return Err(error.clone()),
            _ => {}
        }

        match self.lex_token() {
            Ok(Token::End) => {
                self.state = LexerState::Done;
                Ok(Token::End)
            }
            Ok(token) => {
                self.state = LexerState::Start;
                self.metrics.record_token(&token, &self.preferences);
                Ok(token)
            }
            Err(error) => {
                self.state = LexerState::Error;
                self.metrics.record_error();
                self.report(&error);
                self.failure = Some(error.clone());
                Err(error)
            }
        }
    }

    fn lex_token(&mut self) -> Result<Token, LexerError> {
        let Some(character) = self.stream.next() else {
            return Ok(Token::End);
        };

        if let Some(kind) = self.map.kind_of_char(character) {
            if kind.is_direct() {
                return Ok(Token::plain(kind, character));
            }
        }

        if character.is_ascii_digit() {
            return Ok(Token::plain(TokenKind::Integer, character));
        }

        if character.is_ascii_alphabetic() || is_pattern_whitespace(character) {
            return Ok(Token::plain(TokenKind::Char, character));
        }

        if character == '\\' {
            return self.lex_escape();
        }

        Err(LexerError::UnknownCharacter {
            character,
            position: self.stream_position(),
        })
    }

    /// Cursor sits on the backslash; the selector is only peeked at
    fn lex_escape(&mut self) -> Result<Token, LexerError> {
        self.state = LexerState::Escaped;

        let selector = match self.stream.read_at(1) {
            None | Some('\\') => {
                self.stream.next();
                return Ok(Token::plain(TokenKind::Backslash, '\\'));
            }
            Some('p') | Some('P') => return self.read_unicode_property(),
            Some('X') => return Ok(Token::escape(TokenKind::UnicodeX, 'X', false)),
            Some(selector) => selector,
        };

        if let Some(kind) = self.shorthand_kind(selector) {
            return Ok(Token::escape(kind, selector, false));
        }

        let lowered = selector.to_ascii_lowercase();
        if lowered != selector {
            if let Some(kind) = self.shorthand_kind(lowered) {
                return Ok(Token::escape(kind, selector, true));
            }
        }

        let literal = self.stream.next().unwrap_or(selector);
        Ok(Token::plain(TokenKind::Char, literal))
    }

    fn shorthand_kind(&self, character: char) -> Option<TokenKind> {
        self.map
            .kind_of_char(character)
            .filter(|kind| kind.is_shorthand_class())
    }

    /// Reads `\pL`, `\PL`, `\p{Name}`, `\P{Name}` and `\p{^Name}`
    fn read_unicode_property(&mut self) -> Result<Token, LexerError> {
        let mut negated = self.stream.next() == Some('P');

        let name = match self.stream.next() {
            Some('{') => {
                self.state = LexerState::InUnicodeBrace;
                if self.stream.read_at(1) == Some('^') {
                    negated = true;
                    self.stream.next();
                }

                let mut name = String::new();
                loop {
                    match self.stream.next() {
                        Some('}') => break name,
                        Some(character) => name.push(character),
                        None => {
                            return Err(LexerError::UnterminatedProperty {
                                fragment: name,
                                position: self.stream_position(),
                            })
                        }
                    }
                }
            }
            Some(character) => {
                self.state = LexerState::InUnicodeShort;
                character.to_string()
            }
            None => {
                // nothing follows `\p`; the empty name never resolves
                self.state = LexerState::InUnicodeShort;
                String::new()
            }
        };

        match self.map.kind_of(&name) {
            Some(kind) => Ok(Token::escape(kind, name, negated)),
            None => Err(LexerError::UnknownProperty {
                name,
                position: self.stream_position(),
            }),
        }
    }

    fn stream_position(&self) -> usize {
        self.stream.cursor().max(0) as usize
    }

    fn report(&self, error: &LexerError) {
        let fragment = match error {
            LexerError::UnterminatedProperty { fragment: text, .. }
            | LexerError::UnknownProperty { name: text, .. } => {
                text.chars().take(MAX_LOGGED_FRAGMENT_LENGTH).collect::<String>()
            }
            LexerError::UnknownCharacter { character, .. } => character.to_string(),
            LexerError::PatternTooLong { .. } => String::new(),
        };

        if self.preferences.include_position_in_errors {
            log_error!(error.error_code(), &error.to_string(),
                position = self.stream.cursor(),
                "fragment" => fragment
            );
        } else {
            log_error!(error.error_code(), &error.to_string(),
                "fragment" => fragment
            );
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_terminal() {
            return None;
        }

        match self.next_token() {
            Ok(Token::End) => None,
            result => Some(result),
        }
    }
}

/// Whitespace accepted as a literal character
fn is_pattern_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\r' | '\n' | '\t' | '\u{0B}' | '\u{A0}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn map() -> &'static TokenMap {
        TokenMap::builtin().unwrap()
    }

    fn lex_all(pattern: &str) -> Vec<Token> {
        Lexer::create(pattern, map())
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_structural_and_literals() {
        let tokens = lex_all("(a|b)*1");
        assert_eq!(
            tokens,
            vec![
                Token::plain(TokenKind::LeftParenthesis, "("),
                Token::plain(TokenKind::Char, "a"),
                Token::plain(TokenKind::Pipe, "|"),
                Token::plain(TokenKind::Char, "b"),
                Token::plain(TokenKind::RightParenthesis, ")"),
                Token::plain(TokenKind::Star, "*"),
                Token::plain(TokenKind::Integer, "1"),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_char() {
        for ws in [" ", "\r", "\n", "\t", "\u{0B}", "\u{A0}"] {
            assert_eq!(lex_all(ws), vec![Token::plain(TokenKind::Char, ws)]);
        }
    }

    #[test]
    fn test_unmapped_letter_like_shorthand_is_char() {
        // `d` is bound to ANY_DIGIT, which is not emitted directly
        assert_eq!(lex_all("d"), vec![Token::plain(TokenKind::Char, "d")]);
    }

    #[test]
    fn test_backslash_pairs() {
        let mut lexer = Lexer::create(r"\\", map()).unwrap();
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::plain(TokenKind::Backslash, "\\")
        );
        assert_eq!(lexer.stream().cursor(), 1);
        assert_eq!(lexer.next_token().unwrap(), Token::End);

        assert_eq!(
            lex_all("a\\"),
            vec![
                Token::plain(TokenKind::Char, "a"),
                Token::plain(TokenKind::Backslash, "\\"),
            ]
        );
    }

    #[test]
    fn test_shorthand_selector_left_in_stream() {
        let mut lexer = Lexer::create(r"\d", map()).unwrap();
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::escape(TokenKind::AnyDigit, "d", false)
        );
        assert_eq!(lexer.stream().cursor(), 0);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::plain(TokenKind::Char, "d")
        );
        assert_eq!(lexer.next_token().unwrap(), Token::End);
    }

    #[test]
    fn test_negated_shorthand() {
        let tokens = lex_all(r"\W");
        assert_eq!(tokens[0], Token::escape(TokenKind::AnyWord, "W", true));
        assert_eq!(tokens[1], Token::plain(TokenKind::Char, "W"));
    }

    #[test]
    fn test_unicode_x() {
        let tokens = lex_all(r"\X");
        assert_eq!(tokens[0], Token::escape(TokenKind::UnicodeX, "X", false));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_escaped_literal_consumes_selector() {
        assert_eq!(lex_all(r"\*"), vec![Token::plain(TokenKind::Char, "*")]);
        assert_eq!(lex_all(r"\n"), vec![Token::plain(TokenKind::Char, "n")]);
    }

    #[test]
    fn test_unicode_properties() {
        assert_eq!(
            lex_all(r"\p{L}"),
            vec![Token::escape(TokenKind::UnicodeLetter, "L", false)]
        );
        assert_eq!(
            lex_all(r"\P{Greek}"),
            vec![Token::escape(TokenKind::UnicodeGreek, "Greek", true)]
        );
        assert_eq!(
            lex_all(r"\p{^Lu}"),
            vec![Token::escape(TokenKind::UnicodeUppercaseLetter, "Lu", true)]
        );
        assert_eq!(
            lex_all(r"\pN+"),
            vec![
                Token::escape(TokenKind::UnicodeNumber, "N", false),
                Token::plain(TokenKind::Plus, "+"),
            ]
        );
        assert_eq!(
            lex_all(r"\p{L&}"),
            vec![Token::escape(TokenKind::UnicodeCasedLetter, "L&", false)]
        );
    }

    #[test]
    fn test_unknown_property() {
        let mut lexer = Lexer::create(r"\p{Klingon}", map()).unwrap();
        assert_matches!(
            lexer.next_token(),
            Err(LexerError::UnknownProperty { name, position: 10 }) if name == "Klingon"
        );
    }

    #[test]
    fn test_unterminated_property() {
        let mut lexer = Lexer::create(r"\p{L", map()).unwrap();
        assert_matches!(
            lexer.next_token(),
            Err(LexerError::UnterminatedProperty { fragment, position: 4 }) if fragment == "L"
        );

        let error = Lexer::create(r"\p{Lu", map()).unwrap().next_token().unwrap_err();
        assert_eq!(error.to_string(), "Unknown token Lu at position 5");
    }

    #[test]
    fn test_bare_property_marker_at_end() {
        for pattern in [r"\p", r"\P"] {
            let mut lexer = Lexer::create(pattern, map()).unwrap();
            assert_matches!(
                lexer.next_token(),
                Err(LexerError::UnknownProperty { name, position: 2 }) if name.is_empty()
            );
            assert_eq!(lexer.state(), LexerState::Error);
        }
    }

    #[test]
    fn test_unknown_character_is_sticky() {
        let mut lexer = Lexer::create("a€b", map()).unwrap();
        assert!(lexer.next_token().is_ok());

        let first = lexer.next_token().unwrap_err();
        assert_eq!(
            first,
            LexerError::UnknownCharacter {
                character: '€',
                position: 1
            }
        );
        assert_eq!(first.to_string(), "Unknown token € at position 1");
        assert_eq!(lexer.state(), LexerState::Error);

        assert_eq!(lexer.next_token().unwrap_err(), first);
        assert_eq!(lexer.stream().cursor(), 1);
        assert_eq!(lexer.metrics().errors, 1);
    }

    #[test]
    fn test_iterator_yields_error_once() {
        let results: Vec<_> = Lexer::create("a€b", map()).unwrap().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_empty_input_is_done() {
        let mut lexer = Lexer::create("", map()).unwrap();
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap(), Token::End);
        }
        assert_eq!(lexer.state(), LexerState::Done);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_pattern_too_long() {
        let pattern = "a".repeat(MAX_PATTERN_LENGTH + 1);
        assert_matches!(
            Lexer::create(&pattern, map()),
            Err(LexerError::PatternTooLong { length }) if length == MAX_PATTERN_LENGTH + 1
        );
    }

    #[test]
    fn test_metrics_follow_preferences() {
        let preferences = LexicalPreferences {
            collect_detailed_metrics: true,
            track_kind_usage: true,
            include_position_in_errors: false,
        };
        let mut lexer = Lexer::create(r"a\D\p{Greek}", map())
            .unwrap()
            .with_preferences(preferences);
        while !lexer.next_token().unwrap().is_end() {}

        let metrics = lexer.metrics();
        assert_eq!(metrics.total_tokens, 4);
        assert_eq!(metrics.escape_tokens, 2);
        assert_eq!(metrics.negated_escapes, 1);
        assert_eq!(metrics.unicode_tokens, 1);
        assert_eq!(metrics.char_tokens, 2);
        assert_eq!(metrics.kind_usage.get(&TokenKind::Char), Some(&2));
    }
}
