// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProcessorPreferences {
    /// Whether to require a .conf/.cfg extension (user preference, not security)
    pub require_conf_extension: bool,

    /// Whether to enable detailed performance logging
    pub enable_performance_logging: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            require_conf_extension: env::var("JUNOS_REQUIRE_CONF_EXTENSION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_performance_logging: env::var("JUNOS_ENABLE_PERFORMANCE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to collect detailed token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to count comments and newlines in token totals
    pub include_all_tokens_in_counts: bool,

    /// Whether to show position information in error messages
    pub include_position_in_errors: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var("JUNOS_LEXICAL_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_all_tokens_in_counts: env::var("JUNOS_LEXICAL_INCLUDE_ALL_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_position_in_errors: env::var("JUNOS_LEXICAL_POSITION_IN_ERRORS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyPreferences {
    /// Whether to keep per-group expansion statistics
    pub track_group_statistics: bool,

    /// Whether expansion of an undefined group is reported as an error
    /// event (true) or only as a pipeline warning (false)
    pub undefined_group_is_error: bool,
}

impl Default for HierarchyPreferences {
    fn default() -> Self {
        Self {
            track_group_statistics: env::var("JUNOS_HIERARCHY_TRACK_GROUPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            undefined_group_is_error: env::var("JUNOS_HIERARCHY_UNDEFINED_GROUP_ERROR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Log level selected through runtime preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }

    fn from_env_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warning),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Minimum level actually emitted
    pub min_log_level: LogLevel,

    /// Emit JSON events instead of human-readable lines
    pub use_structured_logging: bool,

    /// Whether console output is enabled at all
    pub enable_console_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: env::var("JUNOS_LOG_LEVEL")
                .ok()
                .and_then(|v| LogLevel::from_env_value(&v))
                .unwrap_or(LogLevel::Warning),
            use_structured_logging: env::var("JUNOS_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("JUNOS_CONSOLE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// Bundle of all runtime preferences, loadable from a TOML file. Values
/// absent from the file fall back to the env-var-driven defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimePreferences {
    #[serde(default)]
    pub file_processor: FileProcessorPreferences,
    #[serde(default)]
    pub lexical: LexicalPreferences,
    #[serde(default)]
    pub hierarchy: HierarchyPreferences,
    #[serde(default)]
    pub logging: LoggingPreferences,
}

impl Default for RuntimePreferences {
    fn default() -> Self {
        Self {
            file_processor: FileProcessorPreferences::default(),
            lexical: LexicalPreferences::default(),
            hierarchy: HierarchyPreferences::default(),
            logging: LoggingPreferences::default(),
        }
    }
}

impl RuntimePreferences {
    /// Load preferences from a TOML file
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        toml::from_str(&content).map_err(|e| format!("Invalid TOML in {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_usable() {
        let prefs = LexicalPreferences::default();
        assert!(prefs.collect_detailed_metrics || !prefs.collect_detailed_metrics);

        let logging = LoggingPreferences::default();
        assert!(logging.enable_console_logging || !logging.enable_console_logging);
    }

    #[test]
    fn test_log_level_from_env_value() {
        assert_eq!(LogLevel::from_env_value("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_env_value("WARN"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_env_value("bogus"), None);
    }

    #[test]
    fn test_load_preferences_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[lexical]\n\
             collect_detailed_metrics = false\n\
             include_all_tokens_in_counts = true\n\
             include_position_in_errors = true\n"
        )
        .unwrap();

        let prefs = RuntimePreferences::load_from_file(file.path()).unwrap();
        assert!(!prefs.lexical.collect_detailed_metrics);
        assert!(prefs.lexical.include_all_tokens_in_counts);
    }

    #[test]
    fn test_load_preferences_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not [valid toml").unwrap();
        assert!(RuntimePreferences::load_from_file(file.path()).is_err());
    }
}
