//! Statement grammar: typed parse trees over effective flat lines
//!
//! `rules` is the rule inventory, `tree` the node types, `builders` the
//! per-stanza statement builders. The grammar is recognition-only: value
//! validation (numbers, addresses, ranges) belongs to extraction.

pub mod builders;
pub mod rules;
pub mod tree;

pub use builders::{build_configuration, build_statement, BuildStats};
pub use rules::Rule;
pub use tree::{line_span, ErrorNode, ParseTree, RuleNode, TerminalNode};
