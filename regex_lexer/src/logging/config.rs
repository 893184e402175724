//! Configuration access for logging
//!
//! Compile-time limits come from `crate::config::compile_time::logging`,
//! user preferences are installed once at startup.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Installed runtime preferences (with fallback to defaults)
pub fn current_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Get minimum log level from user preference
pub fn get_min_log_level() -> EventsLogLevel {
    current_preferences()
        .min_log_level
        .to_events_log_level()
}

/// Get maximum log message length (compile-time constant)
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

/// Validate current configuration settings
pub fn validate_config() -> Result<(), String> {
    if MAX_LOG_MESSAGE_LENGTH < 80 {
        return Err(format!(
            "Log message length limit too small: {}",
            MAX_LOG_MESSAGE_LENGTH
        ));
    }

    if MEMORY_LOGGER_CAPACITY == 0 {
        return Err("Memory logger capacity must be positive".to_string());
    }

    Ok(())
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = current_preferences();

    format!(
        "Logging Configuration:\n\
         === Compile-time Limits ===\n\
         - Max message length: {}\n\
         - Memory logger capacity: {}\n\
         === User Preferences (Runtime) ===\n\
         - Min log level: {:?}\n\
         - Structured logging: {}",
        MAX_LOG_MESSAGE_LENGTH,
        MEMORY_LOGGER_CAPACITY,
        preferences.min_log_level,
        preferences.use_structured_logging,
    )
}
