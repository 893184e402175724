//! Configuration errors: token map and runtime preference loading

use crate::logging::codes;
use crate::tokens::TokenKind;
use std::path::PathBuf;

/// Fatal configuration failures, raised before any lexing happens
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed token map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed runtime configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown token kind '{name}' in token map")]
    UnknownKind { name: String },

    #[error("Token kind {kind} is bound to an empty lexeme")]
    EmptyLexeme { kind: TokenKind },

    #[error("Lexeme '{lexeme}' is bound to both {first} and {second}")]
    DuplicateLexeme {
        lexeme: String,
        first: TokenKind,
        second: TokenKind,
    },

    #[error("Token kind {kind} is produced by the lexer and cannot be bound in a token map")]
    ReservedKind { kind: TokenKind },

    #[error("Backslash cannot be bound to {kind}: it would shadow every escape sequence")]
    BackslashShadowed { kind: TokenKind },

    #[error("Shorthand class {kind} must be bound to a single lowercase letter, found '{lexeme}'")]
    InvalidShorthand { kind: TokenKind, lexeme: String },
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ConfigError::Io { .. } => codes::configuration::CONFIG_UNREADABLE,
            ConfigError::Json(_) => codes::configuration::MALFORMED_TOKEN_MAP,
            ConfigError::Toml(_) => codes::configuration::MALFORMED_RUNTIME_CONFIG,
            ConfigError::UnknownKind { .. } => codes::configuration::UNKNOWN_TOKEN_KIND,
            ConfigError::EmptyLexeme { .. }
            | ConfigError::ReservedKind { .. }
            | ConfigError::BackslashShadowed { .. }
            | ConfigError::InvalidShorthand { .. } => codes::configuration::INVALID_TOKEN_BINDING,
            ConfigError::DuplicateLexeme { .. } => codes::configuration::DUPLICATE_LEXEME,
        }
    }
}
