//! Line-level syntax analysis
//!
//! Turns the token stream into `ConfigLine` records, one per usable source
//! line, with per-line recovery for input the flat grammar cannot use.

pub mod error;
pub mod parser;

use crate::tokens::TokenStream;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::{parse_lines, ConfigLine, LineParseResult, SkippedLine, Word, WordKind};

/// Parse a token stream into configuration lines
pub fn parse_token_stream(tokens: TokenStream) -> SyntaxResult<LineParseResult> {
    parse_lines(tokens)
}
