//! Error types for line parsing with global logging integration

use crate::logging::codes;
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Line-level syntax errors. Most malformed input is handled by recovery
/// (the offending line is skipped and recorded); these errors are the
/// structural failures that abort a parse.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unexpected token: expected {expected}, found '{found}' at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Line exceeds word limit: {words} words at {span}")]
    TooManyWords { words: usize, span: Span },

    #[error("Missing EOF token in token stream")]
    MissingEof,

    #[error("Internal parser error: {message}")]
    InternalParserError { message: String },
}

impl SyntaxError {
    pub fn unexpected_token(expected: &str, found: &str, span: Span) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            span,
        }
    }

    pub fn too_many_words(words: usize, span: Span) -> Self {
        Self::TooManyWords { words, span }
    }

    pub fn missing_eof() -> Self {
        Self::MissingEof
    }

    pub fn internal(message: &str) -> Self {
        Self::InternalParserError {
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            SyntaxError::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            SyntaxError::TooManyWords { .. } => codes::syntax::TOO_MANY_WORDS,
            SyntaxError::MissingEof => codes::syntax::MISSING_EOF,
            SyntaxError::InternalParserError { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxError::UnexpectedToken { span, .. } | SyntaxError::TooManyWords { span, .. } => {
                Some(*span)
            }
            _ => None,
        }
    }
}
