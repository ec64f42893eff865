//! Configuration access for logging - compile-time constants plus runtime
//! user preferences. Limits are enforced at compile time and cannot be
//! widened at runtime.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

// Type aliases for clarity
type EventsLogLevel = crate::logging::events::LogLevel;

// ============================================================================
// RUNTIME PREFERENCES STORAGE
// ============================================================================

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    validate_preferences(&preferences)?;

    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Validate runtime preferences against compile-time limits
fn validate_preferences(preferences: &LoggingPreferences) -> Result<(), String> {
    let requested = preferences.min_log_level.to_events_log_level() as u8;
    if requested > MIN_LOG_LEVEL {
        return Err(format!(
            "Requested log level {} exceeds build maximum {}",
            requested, MIN_LOG_LEVEL
        ));
    }
    Ok(())
}

// ============================================================================
// CONFIGURATION ACCESS FUNCTIONS
// ============================================================================

/// Get minimum log level (user preference within build bounds)
pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled (user preference)
pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Ring buffer size for in-memory loggers
pub fn get_error_buffer_size() -> usize {
    MAX_ERROR_COLLECTION
}

/// Ring buffer size for the memory logger
pub fn get_log_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Validate the logging configuration at startup
pub fn validate_config() -> Result<(), String> {
    if LOG_BUFFER_SIZE == 0 {
        return Err("log buffer size must be non-zero".to_string());
    }
    if MAX_ERROR_COLLECTION == 0 {
        return Err("error collection size must be non-zero".to_string());
    }
    Ok(())
}

/// Human-readable configuration summary for diagnostics
pub fn get_config_summary() -> String {
    format!(
        "Logging config: min_level={:?} structured={} console={} buffer={}",
        get_min_log_level(),
        use_structured_logging(),
        use_console_logging(),
        LOG_BUFFER_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_config_summary_mentions_buffer() {
        assert!(get_config_summary().contains("buffer"));
    }
}
