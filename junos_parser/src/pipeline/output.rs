//! Serializable pipeline output for downstream consumers

use crate::pipeline::result::PipelineResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON-friendly summary of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub file: String,
    pub processed_at: DateTime<Utc>,
    pub statements: usize,
    pub error_nodes: usize,
    pub skipped_lines: Vec<String>,
    pub preprocess_warnings: Vec<String>,
    pub effective_set_lines: Vec<String>,
    pub duration_ms: f64,
}

impl PipelineOutput {
    pub fn from_result(result: &PipelineResult) -> Self {
        Self {
            file: result.file_metadata.path.display().to_string(),
            processed_at: Utc::now(),
            statements: result.build_stats.statements,
            error_nodes: result.build_stats.error_nodes,
            skipped_lines: result
                .skipped_lines
                .iter()
                .map(|s| format!("{} at {}", s.reason, s.span))
                .collect(),
            preprocess_warnings: result
                .preprocess_warnings
                .iter()
                .map(|w| format!("{} (line {})", w.message, w.line_number))
                .collect(),
            effective_set_lines: result.effective_set_lines.clone(),
            duration_ms: result.duration.as_secs_f64() * 1000.0,
        }
    }
}
