//! High-level extraction API
//!
//! Drives the full path: file -> junos_parser pipeline -> tree walk ->
//! device model, and bundles everything a consumer needs.

use crate::extraction::{ConfigBuilder, Warnings};
use crate::model::JunosConfiguration;
use junos_parser::pipeline::{self, PipelineError, PipelineResult};

/// Extraction errors: parse-pipeline failures only; extraction itself
/// degrades to warnings instead of failing
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Result of extracting one configuration file
#[derive(Debug)]
pub struct ExtractionResult {
    pub configuration: JunosConfiguration,
    pub warnings: Warnings,
    pub parse: PipelineResult,
}

impl ExtractionResult {
    /// Total problems across parse and extraction
    pub fn problem_count(&self) -> usize {
        self.warnings.count()
            + self.parse.skipped_lines.len()
            + self.parse.preprocess_warnings.len()
    }
}

/// Extract the device model from a configuration file on disk
pub fn extract_file(file_path: &str) -> Result<ExtractionResult, ExtractionError> {
    let parse = pipeline::process_file(file_path)?;
    let (configuration, warnings) = ConfigBuilder::build(&parse.tree);
    Ok(ExtractionResult {
        configuration,
        warnings,
        parse,
    })
}

/// Extract the device model from configuration text in memory
pub fn extract_text(name: &str, content: &str) -> Result<ExtractionResult, ExtractionError> {
    let parse = pipeline::process_text(name, content)?;
    let (configuration, warnings) = ConfigBuilder::build(&parse.tree);
    Ok(ExtractionResult {
        configuration,
        warnings,
        parse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extract_text() {
        let result = extract_text(
            "r1.conf",
            "set system host-name r1\nset interfaces ge-0/0/0 unit 0\n",
        )
        .unwrap();
        assert_eq!(result.configuration.hostname(), Some("r1"));
        assert_eq!(result.problem_count(), 0);
    }

    #[test]
    fn test_extract_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "set system host-name lab").unwrap();
        writeln!(file, "set bogus statement here").unwrap();

        let result = extract_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(result.configuration.hostname(), Some("lab"));
        assert!(result.problem_count() > 0);
    }

    #[test]
    fn test_extract_missing_file() {
        use assert_matches::assert_matches;
        assert_matches!(
            extract_file("/nonexistent/r.conf"),
            Err(ExtractionError::Pipeline(_))
        );
    }
}
