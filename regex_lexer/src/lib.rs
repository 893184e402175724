// Internal modules
pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod stream;
pub mod tokens;

// Re-export key types for library consumers
pub use config::{ConfigError, LexicalPreferences, RuntimeConfig};
pub use lexical::{tokenize, tokenize_with_preferences, Lexer, LexerError, LexicalMetrics};
pub use stream::{CharStream, Stream, StreamError, VecStream};
pub use tokens::{Token, TokenKind, TokenMap, TokenStream};
