//! The parse pipeline: file -> tokens -> lines -> preprocessing -> tree
//!
//! Each stage logs through the global logging system under the file's
//! context; recoverable problems accumulate on the result instead of
//! failing the run.

mod error;
pub mod output;
mod result;

pub use error::PipelineError;
pub use output::PipelineOutput;
pub use result::PipelineResult;

use crate::file_processor::FileProcessingResult;
use crate::hierarchy::FlatLine;
use crate::logging;
use std::path::PathBuf;
use std::time::Instant;

/// Process a single configuration file through the complete pipeline
/// (file -> lexical -> lines -> hierarchy -> tree)
pub fn process_file(file_path: &str) -> Result<PipelineResult, PipelineError> {
    logging::with_file_context(PathBuf::from(file_path), 0, || {
        crate::log_info!("Starting flat configuration parse pipeline", "file" => file_path);

        let file_result = crate::file_processor::process_file(file_path)?;
        let result = run_stages(file_result)?;
        result.log_success(file_path);
        Ok(result)
    })
}

/// Process configuration text already in memory (tests, stdin)
pub fn process_text(name: &str, content: &str) -> Result<PipelineResult, PipelineError> {
    logging::with_file_context(PathBuf::from(name), 0, || {
        let file_result = crate::file_processor::process_text(name, content)?;
        run_stages(file_result)
    })
}

fn run_stages(file_result: FileProcessingResult) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    let file_metadata = file_result.metadata.clone();

    // Stage 1: lexical analysis
    let mut analyzer = crate::lexical::create_analyzer();
    let tokens = analyzer.tokenize_file_result(file_result)?;
    let lexical_metrics = analyzer.metrics().clone();

    // Stage 2: line parsing
    let line_parse = crate::syntax::parse_token_stream(tokens)?;

    // Stage 3: hierarchy preprocessing
    let preprocess = crate::hierarchy::preprocess(&line_parse)?;

    // Stage 4: tree building
    let (tree, build_stats) = crate::grammar::build_configuration(&preprocess.effective);

    let effective_set_lines = preprocess
        .effective
        .iter()
        .map(FlatLine::to_set_line)
        .collect();

    Ok(PipelineResult {
        tree,
        file_metadata,
        lexical_metrics,
        skipped_lines: line_parse.skipped,
        preprocess_stats: preprocess.stats,
        preprocess_warnings: preprocess.warnings,
        build_stats,
        effective_set_lines,
        duration: start_time.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Rule;
    use std::io::Write;

    #[test]
    fn test_process_text_end_to_end() {
        let source = "\
set groups DNS system name-server 10.1.1.1\n\
set apply-groups DNS\n\
set system host-name r1\n\
set interfaces ge-0/0/0 unit 0 family inet address 10.0.0.1/31\n\
deactivate interfaces ge-0/0/0\n";
        let result = process_text("inline.conf", source).unwrap();

        assert_eq!(result.build_stats.statements, 2);
        assert!(result
            .effective_set_lines
            .contains(&"set system name-server 10.1.1.1".to_string()));
        assert!(result.tree.find_descendant(Rule::SysHostName).is_some());
        // the deactivated interface never reaches the tree
        assert!(result.tree.find_descendant(Rule::Interface).is_none());
        assert_eq!(result.preprocess_stats.deactivated_lines, 1);
    }

    #[test]
    fn test_process_file_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "set system host-name lab-r1").unwrap();
        writeln!(file, "set vlans blue vlan-id 100").unwrap();

        let result = process_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(result.build_stats.statements, 2);
        assert_eq!(result.error_node_count(), 1);
        assert!(result.has_warnings());

        let output = PipelineOutput::from_result(&result);
        assert_eq!(output.statements, 2);
        assert_eq!(output.error_nodes, 1);
    }

    #[test]
    fn test_missing_file_error() {
        use assert_matches::assert_matches;
        let result = process_file("/nonexistent/whatever.conf");
        assert_matches!(result, Err(PipelineError::File(_)));
    }
}
