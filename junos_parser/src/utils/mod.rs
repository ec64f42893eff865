//! Shared utility types for the parser pipeline

pub mod span;

pub use span::{Position, SourceMap, Span, Spanned};
