//! Lexeme to token kind table
//!
//! The configuration format is a JSON object keyed by canonical kind name,
//! `{ "LEFT_PARENTHESIS": "(", "UNICODE_LETTER": "L", ... }`. It is inverted
//! at load time so the lexer can classify a character or a property name with
//! a single lookup.

use super::token::TokenKind;
use crate::config::ConfigError;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;

/// Token table shipped with the crate
pub const BUILTIN_TOKENS_JSON: &str = include_str!("../../resources/tokens.json");

static BUILTIN: OnceLock<TokenMap> = OnceLock::new();

/// Immutable lexeme to kind mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMap {
    lexemes: HashMap<String, TokenKind>,
}

impl TokenMap {
    /// Process-wide map built from the embedded table on first use
    pub fn builtin() -> Result<&'static TokenMap, ConfigError> {
        if let Some(map) = BUILTIN.get() {
            return Ok(map);
        }

        let map = Self::from_json_str(BUILTIN_TOKENS_JSON)?;
        Ok(BUILTIN.get_or_init(|| map))
    }

    /// Parse a `{ "KIND_NAME": "lexeme" }` JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json).map_err(|e| {
            let error = ConfigError::from(e);
            log_error!(error.error_code(), &error.to_string());
            error
        })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (name, lexeme) in raw {
            let kind = TokenKind::from_name(&name).ok_or_else(|| {
                let error = ConfigError::UnknownKind { name: name.clone() };
                log_error!(error.error_code(), &error.to_string(), "kind" => name.as_str());
                error
            })?;
            entries.push((kind, lexeme));
        }

        Self::from_entries(entries)
    }

    /// Read and parse a token map file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            let error = ConfigError::Io {
                path: path.to_path_buf(),
                source,
            };
            log_error!(error.error_code(), &error.to_string());
            error
        })?;

        let map = Self::from_json_str(&content)?;

        log_success!(codes::success::TOKEN_MAP_LOADED, "Token map loaded",
            "path" => path.display(),
            "entries" => map.len()
        );

        Ok(map)
    }

    /// Build from already-resolved kinds, applying every binding rule
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (TokenKind, S)>,
        S: Into<String>,
    {
        let mut lexemes: HashMap<String, TokenKind> = HashMap::new();

        for (kind, lexeme) in entries {
            let lexeme = lexeme.into();
            if let Err(error) = validate_binding(kind, &lexeme) {
                log_error!(error.error_code(), &error.to_string(), "kind" => kind);
                return Err(error);
            }

            if let Some(&first) = lexemes.get(&lexeme) {
                let error = ConfigError::DuplicateLexeme {
                    lexeme,
                    first,
                    second: kind,
                };
                log_error!(error.error_code(), &error.to_string());
                return Err(error);
            }

            lexemes.insert(lexeme, kind);
        }

        log_debug!("Token map built", "entries" => lexemes.len());

        Ok(Self { lexemes })
    }

    /// Kind bound to a lexeme (a single character or a property name)
    pub fn kind_of(&self, lexeme: &str) -> Option<TokenKind> {
        self.lexemes.get(lexeme).copied()
    }

    pub fn kind_of_char(&self, character: char) -> Option<TokenKind> {
        let mut buffer = [0u8; 4];
        self.kind_of(character.encode_utf8(&mut buffer))
    }

    /// Lexeme bound to a kind, if the table has one
    pub fn lexeme_of(&self, kind: TokenKind) -> Option<&str> {
        self.lexemes
            .iter()
            .find(|(_, bound)| **bound == kind)
            .map(|(lexeme, _)| lexeme.as_str())
    }

    pub fn contains(&self, lexeme: &str) -> bool {
        self.lexemes.contains_key(lexeme)
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.lexemes
            .iter()
            .map(|(lexeme, kind)| (lexeme.as_str(), *kind))
    }
}

fn validate_binding(kind: TokenKind, lexeme: &str) -> Result<(), ConfigError> {
    if kind.is_synthesized() {
        return Err(ConfigError::ReservedKind { kind });
    }

    if lexeme.is_empty() {
        return Err(ConfigError::EmptyLexeme { kind });
    }

    if lexeme == "\\" && kind.is_direct() {
        return Err(ConfigError::BackslashShadowed { kind });
    }

    if kind.is_shorthand_class() {
        let mut chars = lexeme.chars();
        let valid = matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if c.is_ascii_lowercase()
        );
        if !valid {
            return Err(ConfigError::InvalidShorthand {
                kind,
                lexeme: lexeme.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_builtin_map_loads() {
        let map = TokenMap::builtin().unwrap();
        assert_eq!(map.kind_of("("), Some(TokenKind::LeftParenthesis));
        assert_eq!(map.kind_of_char('*'), Some(TokenKind::Star));
        assert_eq!(map.kind_of("d"), Some(TokenKind::AnyDigit));
        assert_eq!(map.kind_of("L"), Some(TokenKind::UnicodeLetter));
        assert_eq!(map.kind_of("L&"), Some(TokenKind::UnicodeCasedLetter));
        assert_eq!(map.kind_of("Greek"), Some(TokenKind::UnicodeGreek));
        assert_eq!(map.kind_of("\\"), None);
        assert_eq!(map.lexeme_of(TokenKind::Pipe), Some("|"));

        // same instance on every call
        assert!(std::ptr::eq(map, TokenMap::builtin().unwrap()));
    }

    #[test]
    fn test_builtin_map_covers_bindable_kinds() {
        let map = TokenMap::builtin().unwrap();
        for kind in TokenKind::ALL.iter().filter(|k| !k.is_synthesized()) {
            assert!(map.lexeme_of(*kind).is_some(), "{} has no lexeme", kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = TokenMap::from_json_str(r#"{ "STAR": "*", "SPARKLE": "✨" }"#);
        assert_matches!(result, Err(ConfigError::UnknownKind { name }) if name == "SPARKLE");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = TokenMap::from_json_str(r#"{ "STAR": 3 }"#);
        assert_matches!(result, Err(ConfigError::Json(_)));
    }

    #[test]
    fn test_binding_rules() {
        assert_matches!(
            TokenMap::from_entries([(TokenKind::Star, "")]),
            Err(ConfigError::EmptyLexeme { kind: TokenKind::Star })
        );
        assert_matches!(
            TokenMap::from_entries([(TokenKind::Char, "c")]),
            Err(ConfigError::ReservedKind { kind: TokenKind::Char })
        );
        assert_matches!(
            TokenMap::from_entries([(TokenKind::Slash, "\\")]),
            Err(ConfigError::BackslashShadowed { kind: TokenKind::Slash })
        );
        assert_matches!(
            TokenMap::from_entries([(TokenKind::AnyDigit, "D")]),
            Err(ConfigError::InvalidShorthand { kind: TokenKind::AnyDigit, .. })
        );
        assert_matches!(
            TokenMap::from_entries([(TokenKind::AnyWord, "wd")]),
            Err(ConfigError::InvalidShorthand { kind: TokenKind::AnyWord, .. })
        );
    }

    #[test]
    fn test_duplicate_lexeme_rejected() {
        let result = TokenMap::from_entries([(TokenKind::Star, "*"), (TokenKind::Plus, "*")]);
        assert_matches!(
            result,
            Err(ConfigError::DuplicateLexeme { first: TokenKind::Star, second: TokenKind::Plus, .. })
        );
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "PIPE": "|", "ANY_DIGIT": "d", "UNICODE_GREEK": "Greek" }}"#).unwrap();

        let map = TokenMap::from_path(file.path()).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.kind_of_char('|'), Some(TokenKind::Pipe));
        assert!(map.contains("Greek"));
        assert_eq!(map.iter().count(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TokenMap::from_path(dir.path().join("absent.json"));
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }
}
