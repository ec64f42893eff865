//! Pipeline result type

use crate::file_processor::FileMetadata;
use crate::grammar::tree::{ParseTree, RuleNode};
use crate::grammar::BuildStats;
use crate::hierarchy::{PreprocessStats, PreprocessWarning};
use crate::lexical::LexicalMetrics;
use crate::logging::codes;
use crate::syntax::SkippedLine;
use std::time::Duration;

/// Everything the front half of the system produces for one file: the
/// parse tree plus per-stage metrics and recoverable problems.
#[derive(Debug)]
pub struct PipelineResult {
    /// The configuration parse tree root
    pub tree: RuleNode,
    /// Metadata of the processed file
    pub file_metadata: FileMetadata,
    /// Lexer metrics
    pub lexical_metrics: LexicalMetrics,
    /// Lines the line parser had to skip, with reasons
    pub skipped_lines: Vec<SkippedLine>,
    /// What preprocessing expanded/dropped
    pub preprocess_stats: PreprocessStats,
    /// Recoverable preprocessing problems
    pub preprocess_warnings: Vec<PreprocessWarning>,
    /// Tree build counters
    pub build_stats: BuildStats,
    /// The effective set lines the tree was built from
    pub effective_set_lines: Vec<String>,
    /// Total wall-clock duration
    pub duration: Duration,
}

impl PipelineResult {
    /// Error nodes in the built tree (statements outside the grammar)
    pub fn error_node_count(&self) -> usize {
        self.build_stats.error_nodes
    }

    /// Whether any stage reported a recoverable problem
    pub fn has_warnings(&self) -> bool {
        !self.skipped_lines.is_empty()
            || !self.preprocess_warnings.is_empty()
            || self.build_stats.error_nodes > 0
    }

    /// Walk-ready view of the tree
    pub fn tree_as_parse_tree(&self) -> ParseTree {
        ParseTree::Rule(self.tree.clone())
    }

    pub fn log_success(&self, file_path: &str) {
        crate::log_performance!(codes::success::PIPELINE_COMPLETE,
            "Configuration parse pipeline completed",
            duration = self.duration,
            "file" => file_path,
            "statements" => self.build_stats.statements,
            "error_nodes" => self.build_stats.error_nodes,
            "skipped_lines" => self.skipped_lines.len(),
            "preprocess_warnings" => self.preprocess_warnings.len()
        );
    }
}
