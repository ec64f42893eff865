//! Configuration module for the flat Junos parser
//! Automatically uses generated constants from TOML configuration

// Include generated constants from build.rs
// This file is generated at compile time from the workspace TOML configuration
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

// Keep original constants file for reference and runtime configuration
pub mod constants;
pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("JUNOS_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("JUNOS_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_constants_available() {
        assert!(compile_time::file_processing::MAX_FILE_SIZE > 0);
        assert!(compile_time::lexical::MAX_TOKEN_COUNT > 0);
        assert!(compile_time::hierarchy::MAX_TREE_DEPTH > 0);
    }

    #[test]
    fn test_static_constants_match_generated_shape() {
        // Static constants are the documented reference values; the generated
        // set can tighten them per profile but never widen past these.
        assert!(
            compile_time::file_processing::MAX_FILE_SIZE
                <= constants::compile_time::file_processing::MAX_FILE_SIZE
        );
    }

    #[test]
    fn test_build_info() {
        assert!(!build_info::profile().is_empty());
        assert!(build_info::source_info().contains(".toml"));
    }
}
