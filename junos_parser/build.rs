// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    file_processing: FileProcessingLimits,
    lexical: LexicalLimits,
    syntax: SyntaxLimits,
    hierarchy: HierarchyLimits,
    extraction: ExtractionLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct FileProcessingLimits {
    max_file_size: u64,
    large_file_threshold: u64,
    max_line_count: usize,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_word_length: usize,
    max_quoted_length: usize,
    max_comment_length: usize,
    max_token_count: usize,
}

#[derive(serde::Deserialize)]
struct SyntaxLimits {
    max_words_per_line: usize,
    max_error_history: usize,
}

#[derive(serde::Deserialize)]
struct HierarchyLimits {
    max_tree_depth: usize,
    max_group_expansion_lines: usize,
    max_wildcard_expansion_lines: usize,
    max_groups: usize,
}

#[derive(serde::Deserialize)]
struct ExtractionLimits {
    max_warnings: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_error_collection: usize,
    log_buffer_size: usize,
    min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=JUNOS_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=JUNOS_CONFIG_DIR");

    let profile = env::var("JUNOS_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("JUNOS_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of junos_parser directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_security_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_security_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_FILE_SIZE: u64 = 1_000_000_000;
    const ABSOLUTE_MAX_EXPANSION: usize = 10_000_000;

    if config.file_processing.max_file_size > ABSOLUTE_MAX_FILE_SIZE {
        panic!("SECURITY: max_file_size exceeds absolute maximum");
    }

    if config.hierarchy.max_group_expansion_lines > ABSOLUTE_MAX_EXPANSION {
        panic!("SECURITY: max_group_expansion_lines exceeds absolute maximum");
    }

    if config.hierarchy.max_wildcard_expansion_lines > ABSOLUTE_MAX_EXPANSION {
        panic!("SECURITY: max_wildcard_expansion_lines exceeds absolute maximum");
    }

    if config.logging.min_log_level > 3 {
        panic!("SECURITY: min_log_level out of range (max: 3)");
    }

    if profile == "production" && config.file_processing.max_file_size > 50_000_000 {
        panic!("PRODUCTION: max_file_size too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod file_processing {{
        pub const MAX_FILE_SIZE: u64 = {};
        pub const LARGE_FILE_THRESHOLD: u64 = {};
        pub const MAX_LINE_COUNT: usize = {};
    }}

    pub mod lexical {{
        pub const MAX_WORD_LENGTH: usize = {};
        pub const MAX_QUOTED_LENGTH: usize = {};
        pub const MAX_COMMENT_LENGTH: usize = {};
        pub const MAX_TOKEN_COUNT: usize = {};
    }}

    pub mod syntax {{
        pub const MAX_WORDS_PER_LINE: usize = {};
        pub const MAX_ERROR_HISTORY: usize = {};
    }}

    pub mod hierarchy {{
        pub const MAX_TREE_DEPTH: usize = {};
        pub const MAX_GROUP_EXPANSION_LINES: usize = {};
        pub const MAX_WILDCARD_EXPANSION_LINES: usize = {};
        pub const MAX_GROUPS: usize = {};
    }}

    pub mod extraction {{
        pub const MAX_WARNINGS: usize = {};
    }}

    pub mod logging {{
        pub const MAX_ERROR_COLLECTION: usize = {};
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MIN_LOG_LEVEL: u8 = {};
    }}
}}
"#,
        profile,
        // File processing
        config.file_processing.max_file_size,
        config.file_processing.large_file_threshold,
        config.file_processing.max_line_count,
        // Lexical
        config.lexical.max_word_length,
        config.lexical.max_quoted_length,
        config.lexical.max_comment_length,
        config.lexical.max_token_count,
        // Syntax
        config.syntax.max_words_per_line,
        config.syntax.max_error_history,
        // Hierarchy
        config.hierarchy.max_tree_depth,
        config.hierarchy.max_group_expansion_lines,
        config.hierarchy.max_wildcard_expansion_lines,
        config.hierarchy.max_groups,
        // Extraction
        config.extraction.max_warnings,
        // Logging
        config.logging.max_error_collection,
        config.logging.log_buffer_size,
        config.logging.min_log_level,
    );

    fs::write(output_path, constants_code).unwrap();
}
