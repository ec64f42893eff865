//! Token types and stream management for flat configuration text

pub mod token;
pub mod token_stream;

pub use token::{classify_line_start_word, LineKeyword, Token, TokenClass};
pub use token_stream::{SpannedToken, TokenStream};
