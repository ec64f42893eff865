//! Lexical analysis for flat configuration text
//!
//! Provides line-aware tokenization with file-aware processing and
//! integration with the global logging system.

pub mod analyzer;

use crate::config::runtime::LexicalPreferences;
use crate::file_processor::FileProcessingResult;
use crate::tokens::TokenStream;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};

/// Tokenize file processing result with default preferences
pub fn tokenize_file_result(file_result: FileProcessingResult) -> Result<TokenStream, LexerError> {
    let mut analyzer = LexicalAnalyzer::new();
    analyzer.tokenize_file_result(file_result)
}

/// Tokenize with custom runtime preferences
pub fn tokenize_file_result_with_preferences(
    file_result: FileProcessingResult,
    preferences: LexicalPreferences,
) -> Result<TokenStream, LexerError> {
    let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
    analyzer.tokenize_file_result(file_result)
}

/// Create a new lexical analyzer with default preferences
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}
