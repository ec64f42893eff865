//! Pipeline error type: one wrapper over every stage's failure

use crate::file_processor::FileProcessorError;
use crate::hierarchy::HierarchyError;
use crate::lexical::LexerError;
use crate::syntax::SyntaxError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    File(#[from] FileProcessorError),

    #[error("Lexical analysis failed: {0}")]
    Lexical(#[from] LexerError),

    #[error("Line parsing failed: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Hierarchy preprocessing failed: {0}")]
    Hierarchy(#[from] HierarchyError),
}

impl PipelineError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::File(e) => e.error_code(),
            PipelineError::Lexical(e) => e.error_code(),
            PipelineError::Syntax(e) => e.error_code(),
            PipelineError::Hierarchy(e) => e.error_code(),
        }
    }

    /// The pipeline stage that failed, for diagnostics
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::File(_) => "file",
            PipelineError::Lexical(_) => "lexical",
            PipelineError::Syntax(_) => "syntax",
            PipelineError::Hierarchy(_) => "hierarchy",
        }
    }
}
