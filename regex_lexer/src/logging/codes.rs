//! Consolidated error codes and classification system
//!
//! Single source of truth for all codes, their metadata, and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Configuration error codes (token map and runtime preferences)
pub mod configuration {
    use super::Code;

    pub const CONFIG_UNREADABLE: Code = Code::new("E010");
    pub const MALFORMED_TOKEN_MAP: Code = Code::new("E011");
    pub const MALFORMED_RUNTIME_CONFIG: Code = Code::new("E012");
    pub const UNKNOWN_TOKEN_KIND: Code = Code::new("E013");
    pub const INVALID_TOKEN_BINDING: Code = Code::new("E014");
    pub const DUPLICATE_LEXEME: Code = Code::new("E015");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const UNKNOWN_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_PROPERTY: Code = Code::new("E021");
    pub const UNKNOWN_PROPERTY: Code = Code::new("E022");
    pub const PATTERN_TOO_LONG: Code = Code::new("E023");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const TOKEN_MAP_LOADED: Code = Code::new("I010");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // System errors
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
                "File a bug report with the failing pattern",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failed",
                "Check logging and token map configuration",
            ),
            // Configuration errors
            ErrorMetadata::new(
                "E010",
                "Configuration",
                Severity::Critical,
                false,
                true,
                "Configuration file could not be read",
                "Check the file path and permissions",
            ),
            ErrorMetadata::new(
                "E011",
                "Configuration",
                Severity::Critical,
                false,
                true,
                "Token map is not a JSON object of kind names to lexemes",
                "Fix the token map JSON syntax",
            ),
            ErrorMetadata::new(
                "E012",
                "Configuration",
                Severity::High,
                false,
                true,
                "Runtime configuration is not valid TOML for the expected sections",
                "Fix the runtime configuration file",
            ),
            ErrorMetadata::new(
                "E013",
                "Configuration",
                Severity::Critical,
                false,
                true,
                "Token map names a token kind that does not exist",
                "Use one of the canonical token kind names",
            ),
            ErrorMetadata::new(
                "E014",
                "Configuration",
                Severity::Critical,
                false,
                true,
                "Token map binds a kind to a lexeme it cannot carry",
                "Bind shorthand classes to one lowercase letter and leave synthesized kinds and the backslash out",
            ),
            ErrorMetadata::new(
                "E015",
                "Configuration",
                Severity::Critical,
                false,
                true,
                "Two token kinds are bound to the same lexeme",
                "Remove one of the conflicting bindings",
            ),
            // Lexical errors
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                false,
                true,
                "Character has no classification rule",
                "Escape the character or add it to the token map",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::High,
                false,
                true,
                "Unicode property escape reached end of input before '}'",
                "Close the property name with '}'",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::High,
                false,
                true,
                "Unicode property name is not in the token map",
                "Use a supported property or script name",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::High,
                false,
                true,
                "Pattern exceeds the maximum accepted length",
                "Split the pattern or raise MAX_PATTERN_LENGTH",
            ),
            // Success codes
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed",
                "No action required",
            ),
            ErrorMetadata::new(
                "I010",
                "Configuration",
                Severity::Low,
                true,
                false,
                "Token map loaded and validated",
                "No action required",
            ),
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Pattern tokenization completed",
                "Hand the token stream to the parser",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
