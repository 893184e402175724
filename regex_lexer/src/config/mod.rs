//! Configuration module for the pattern lexer
//!
//! Compile-time limits live in [`constants`], user preferences in [`runtime`].
//! Token map loading failures and malformed runtime configuration share the
//! [`ConfigError`] category, which is distinct from per-token lexical errors.

pub mod constants;
pub mod error;
pub mod runtime;

pub use constants::compile_time;
pub use error::ConfigError;
pub use runtime::{LexicalPreferences, LoggingPreferences, RuntimeConfig};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile the crate was built with
    pub fn profile() -> &'static str {
        if cfg!(debug_assertions) {
            "development"
        } else {
            "release"
        }
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!(
            "Built-in token map ({} bytes), profile {}",
            crate::tokens::token_map::BUILTIN_TOKENS_JSON.len(),
            profile()
        )
    }
}
