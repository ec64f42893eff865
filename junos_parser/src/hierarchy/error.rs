//! Hierarchy preprocessing errors

use crate::logging::codes;

pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Errors raised during hierarchy preprocessing. Undefined groups, partial
/// group matches, bad wildcards and bad apply-path expressions are
/// recoverable (the preprocessor downgrades them to warnings and drops the
/// offending line); the limit violations abort the run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HierarchyError {
    #[error("No such group: \"{group}\"")]
    UndefinedGroup { group: String },

    #[error("No matching path for apply-groups \"{group}\"{detail}")]
    PartialGroupMatch { group: String, detail: String },

    #[error("Hierarchy tree depth {depth} exceeds limit {max}")]
    TreeTooDeep { depth: usize, max: usize },

    #[error("Expansion produced {produced} lines, exceeding limit {max}")]
    ExpansionLimit { produced: usize, max: usize },

    #[error("Malformed wildcard '{pattern}': {reason}")]
    BadWildcard { pattern: String, reason: String },

    #[error("Too many groups: {count} (max {max})")]
    TooManyGroups { count: usize, max: usize },

    #[error("Malformed apply-path expression: {text}")]
    BadApplyPath { text: String },
}

impl HierarchyError {
    pub fn partial_group_match(group: &str, partial: &str) -> Self {
        let detail = if partial.is_empty() {
            String::new()
        } else {
            format!(": partial path match within applied group: \"{}\"", partial)
        };
        Self::PartialGroupMatch {
            group: group.to_string(),
            detail,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            HierarchyError::UndefinedGroup { .. } => codes::hierarchy::UNDEFINED_GROUP,
            HierarchyError::PartialGroupMatch { .. } => codes::hierarchy::PARTIAL_GROUP_MATCH,
            HierarchyError::TreeTooDeep { .. } => codes::hierarchy::TREE_TOO_DEEP,
            HierarchyError::ExpansionLimit { .. } => codes::hierarchy::EXPANSION_LIMIT,
            HierarchyError::BadWildcard { .. } => codes::hierarchy::BAD_WILDCARD,
            HierarchyError::TooManyGroups { .. } => codes::hierarchy::TOO_MANY_GROUPS,
            HierarchyError::BadApplyPath { .. } => codes::hierarchy::BAD_APPLY_PATH,
        }
    }

    /// Whether the preprocessor may continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HierarchyError::UndefinedGroup { .. }
                | HierarchyError::PartialGroupMatch { .. }
                | HierarchyError::BadWildcard { .. }
                | HierarchyError::BadApplyPath { .. }
        )
    }
}
