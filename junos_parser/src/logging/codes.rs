//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions for the parse/preprocess/extract pipeline.

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

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
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

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const EMPTY_FILE: Code = Code::new("E008");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const TOO_MANY_LINES: Code = Code::new("E012");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_QUOTE: Code = Code::new("E021");
    pub const UNTERMINATED_WILDCARD: Code = Code::new("E022");
    pub const WORD_TOO_LONG: Code = Code::new("E023");
    pub const QUOTED_TOO_LONG: Code = Code::new("E024");
    pub const COMMENT_TOO_LONG: Code = Code::new("E025");
    pub const TOO_MANY_TOKENS: Code = Code::new("E026");
}

/// Line syntax error codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E040");
    pub const EMPTY_LINE_BODY: Code = Code::new("E041");
    pub const TOO_MANY_WORDS: Code = Code::new("E042");
    pub const UNSUPPORTED_LINE_KEYWORD: Code = Code::new("E043");
    pub const MISSING_EOF: Code = Code::new("E044");
}

/// Hierarchy preprocessing error codes
pub mod hierarchy {
    use super::Code;

    pub const UNDEFINED_GROUP: Code = Code::new("E060");
    pub const PARTIAL_GROUP_MATCH: Code = Code::new("E061");
    pub const TREE_TOO_DEEP: Code = Code::new("E062");
    pub const EXPANSION_LIMIT: Code = Code::new("E063");
    pub const BAD_WILDCARD: Code = Code::new("E064");
    pub const TOO_MANY_GROUPS: Code = Code::new("E065");
    pub const BAD_APPLY_PATH: Code = Code::new("E066");
}

/// Statement/tree building error codes
pub mod grammar {
    use super::Code;

    pub const UNRECOGNIZED_STATEMENT: Code = Code::new("E080");
    pub const MALFORMED_VALUE: Code = Code::new("E081");
}

/// Success codes (informational)
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I002");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I003");
    pub const LINE_PARSE_COMPLETE: Code = Code::new("I004");
    pub const PREPROCESS_COMPLETE: Code = Code::new("I005");
    pub const TREE_BUILD_COMPLETE: Code = Code::new("I006");
    pub const PIPELINE_COMPLETE: Code = Code::new("I007");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

fn registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    static REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let entries = [
            // System
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Internal error",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Initialization failure",
            ),
            // File processing
            ErrorMetadata::new(
                "E005",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "File not found",
            ),
            ErrorMetadata::new(
                "E006",
                "FileProcessing",
                Severity::Low,
                true,
                false,
                "Unexpected file extension",
            ),
            ErrorMetadata::new(
                "E007",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "File exceeds size limit",
            ),
            ErrorMetadata::new(
                "E008",
                "FileProcessing",
                Severity::Medium,
                true,
                false,
                "Empty file",
            ),
            ErrorMetadata::new(
                "E009",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "Permission denied",
            ),
            ErrorMetadata::new(
                "E010",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "File is not valid UTF-8",
            ),
            ErrorMetadata::new(
                "E011",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "I/O error while reading file",
            ),
            ErrorMetadata::new(
                "E012",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "File exceeds line count limit",
            ),
            // Lexical
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Invalid character in input",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Unterminated double-quoted word",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Unterminated wildcard pattern",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Medium,
                false,
                false,
                "Word exceeds length limit",
            ),
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                false,
                false,
                "Quoted word exceeds length limit",
            ),
            ErrorMetadata::new(
                "E025",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Comment exceeds length limit",
            ),
            ErrorMetadata::new(
                "E026",
                "Lexical",
                Severity::High,
                false,
                true,
                "Token count limit exceeded",
            ),
            // Syntax
            ErrorMetadata::new(
                "E040",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Unexpected token on line",
            ),
            ErrorMetadata::new(
                "E041",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Line keyword without a statement body",
            ),
            ErrorMetadata::new(
                "E042",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Line exceeds word count limit",
            ),
            ErrorMetadata::new(
                "E043",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Unsupported line keyword",
            ),
            ErrorMetadata::new(
                "E044",
                "Syntax",
                Severity::High,
                false,
                true,
                "Token stream missing EOF",
            ),
            // Hierarchy
            ErrorMetadata::new(
                "E060",
                "Hierarchy",
                Severity::Medium,
                true,
                false,
                "apply-groups references an undefined group",
            ),
            ErrorMetadata::new(
                "E061",
                "Hierarchy",
                Severity::Low,
                true,
                false,
                "apply-groups path only partially matches group contents",
            ),
            ErrorMetadata::new(
                "E062",
                "Hierarchy",
                Severity::High,
                false,
                true,
                "Hierarchy tree depth limit exceeded",
            ),
            ErrorMetadata::new(
                "E063",
                "Hierarchy",
                Severity::High,
                false,
                true,
                "Expansion produced too many lines",
            ),
            ErrorMetadata::new(
                "E064",
                "Hierarchy",
                Severity::Medium,
                true,
                false,
                "Malformed wildcard pattern",
            ),
            ErrorMetadata::new(
                "E065",
                "Hierarchy",
                Severity::High,
                false,
                true,
                "Group count limit exceeded",
            ),
            ErrorMetadata::new(
                "E066",
                "Hierarchy",
                Severity::Medium,
                true,
                false,
                "Malformed apply-path expression",
            ),
            // Grammar
            ErrorMetadata::new(
                "E080",
                "Grammar",
                Severity::Low,
                true,
                false,
                "Statement not covered by the modeled grammar",
            ),
            ErrorMetadata::new(
                "E081",
                "Grammar",
                Severity::Medium,
                true,
                false,
                "Statement value failed to parse",
            ),
        ];

        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    registry().get(code)
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code).map_or("Unknown error", |m| m.description)
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code).map_or("Unknown", |m| m.category)
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code).map_or(Severity::Medium, |m| m.severity)
}

pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code).map_or(true, |m| m.recoverable)
}

pub fn requires_halt(code: &str) -> bool {
    get_metadata(code).map_or(false, |m| m.requires_halt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_error_constants() {
        let codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            file_processing::FILE_NOT_FOUND,
            file_processing::INVALID_EXTENSION,
            file_processing::FILE_TOO_LARGE,
            file_processing::EMPTY_FILE,
            file_processing::PERMISSION_DENIED,
            file_processing::INVALID_ENCODING,
            file_processing::IO_ERROR,
            file_processing::TOO_MANY_LINES,
            lexical::INVALID_CHARACTER,
            lexical::UNTERMINATED_QUOTE,
            lexical::UNTERMINATED_WILDCARD,
            lexical::WORD_TOO_LONG,
            lexical::QUOTED_TOO_LONG,
            lexical::COMMENT_TOO_LONG,
            lexical::TOO_MANY_TOKENS,
            syntax::UNEXPECTED_TOKEN,
            syntax::EMPTY_LINE_BODY,
            syntax::TOO_MANY_WORDS,
            syntax::UNSUPPORTED_LINE_KEYWORD,
            syntax::MISSING_EOF,
            hierarchy::UNDEFINED_GROUP,
            hierarchy::PARTIAL_GROUP_MATCH,
            hierarchy::TREE_TOO_DEEP,
            hierarchy::EXPANSION_LIMIT,
            hierarchy::BAD_WILDCARD,
            hierarchy::TOO_MANY_GROUPS,
            hierarchy::BAD_APPLY_PATH,
            grammar::UNRECOGNIZED_STATEMENT,
            grammar::MALFORMED_VALUE,
        ];
        for code in codes {
            assert_ne!(
                get_description(code.as_str()),
                "Unknown error",
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_halt_classification() {
        assert!(requires_halt(system::INTERNAL_ERROR.as_str()));
        assert!(requires_halt(hierarchy::EXPANSION_LIMIT.as_str()));
        assert!(!requires_halt(grammar::UNRECOGNIZED_STATEMENT.as_str()));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical < Severity::Low);
        assert_eq!(get_severity("E080"), Severity::Low);
    }
}
