//! Parse tree node types
//!
//! The statement builders produce one `Configuration` rule node per file,
//! with a `SetLine` child per effective line. Terminal nodes carry the
//! matched words; error nodes carry the unmatched tail of statements the
//! grammar does not cover, so extraction can warn and continue.

use crate::grammar::rules::Rule;
use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};

/// A span covering a whole source line (column detail is gone after
/// preprocessing; synthesized lines carry their originating line number)
pub fn line_span(line_number: u32) -> Span {
    let pos = Position::new(0, line_number, 1);
    Span::new(pos, pos)
}

/// One node of the parse tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParseTree {
    Rule(RuleNode),
    Terminal(TerminalNode),
    Error(ErrorNode),
}

impl ParseTree {
    pub fn as_rule(&self) -> Option<&RuleNode> {
        match self {
            ParseTree::Rule(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_terminal(&self) -> Option<&TerminalNode> {
        match self {
            ParseTree::Terminal(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorNode> {
        match self {
            ParseTree::Error(node) => Some(node),
            _ => None,
        }
    }

    /// Count error nodes in this subtree
    pub fn error_count(&self) -> usize {
        match self {
            ParseTree::Error(_) => 1,
            ParseTree::Terminal(_) => 0,
            ParseTree::Rule(node) => node.children.iter().map(ParseTree::error_count).sum(),
        }
    }
}

/// An interior node: one grammar rule match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleNode {
    pub rule: Rule,
    pub span: Span,
    /// Group provenance for statements synthesized by apply-groups
    /// expansion (set on `SetLine` nodes only)
    pub source_group: Option<String>,
    pub children: Vec<ParseTree>,
}

impl RuleNode {
    pub fn new(rule: Rule, span: Span) -> Self {
        Self {
            rule,
            span,
            source_group: None,
            children: Vec::new(),
        }
    }

    pub fn push_rule(&mut self, node: RuleNode) {
        self.children.push(ParseTree::Rule(node));
    }

    pub fn push_terminal(&mut self, text: &str, span: Span) {
        self.children.push(ParseTree::Terminal(TerminalNode {
            text: text.to_string(),
            span,
        }));
    }

    pub fn push_error(&mut self, text: &str, span: Span) {
        self.children.push(ParseTree::Error(ErrorNode {
            text: text.to_string(),
            span,
        }));
    }

    /// Texts of the direct terminal children, in order
    pub fn terminal_texts(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|c| c.as_terminal())
            .map(|t| t.text.as_str())
            .collect()
    }

    /// First direct terminal child's text
    pub fn first_terminal_text(&self) -> Option<&str> {
        self.children
            .iter()
            .find_map(|c| c.as_terminal())
            .map(|t| t.text.as_str())
    }

    /// Direct rule children, in order
    pub fn rule_children(&self) -> impl Iterator<Item = &RuleNode> {
        self.children.iter().filter_map(|c| c.as_rule())
    }

    /// First direct child matching a rule
    pub fn find_rule(&self, rule: Rule) -> Option<&RuleNode> {
        self.rule_children().find(|n| n.rule == rule)
    }

    /// Depth-first search for the first descendant matching a rule
    pub fn find_descendant(&self, rule: Rule) -> Option<&RuleNode> {
        for child in self.rule_children() {
            if child.rule == rule {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(rule) {
                return Some(found);
            }
        }
        None
    }
}

/// A leaf node: one matched word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalNode {
    pub text: String,
    pub span: Span,
}

/// A leaf node holding input the grammar could not match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorNode {
    pub text: String,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_node_accessors() {
        let mut node = RuleNode::new(Rule::SysHostName, line_span(1));
        node.push_terminal("r1", line_span(1));

        assert_eq!(node.first_terminal_text(), Some("r1"));
        assert_eq!(node.terminal_texts(), vec!["r1"]);
    }

    #[test]
    fn test_find_descendant() {
        let mut root = RuleNode::new(Rule::Configuration, line_span(1));
        let mut set_line = RuleNode::new(Rule::SetLine, line_span(1));
        let mut statement = RuleNode::new(Rule::Statement, line_span(1));
        let mut system = RuleNode::new(Rule::System, line_span(1));
        system.push_rule(RuleNode::new(Rule::SysHostName, line_span(1)));
        statement.push_rule(system);
        set_line.push_rule(statement);
        root.push_rule(set_line);

        assert!(root.find_descendant(Rule::SysHostName).is_some());
        assert!(root.find_descendant(Rule::BgpGroup).is_none());
        assert!(root.find_rule(Rule::SetLine).is_some());
        assert!(root.find_rule(Rule::SysHostName).is_none());
    }

    #[test]
    fn test_error_count() {
        let mut root = RuleNode::new(Rule::Configuration, line_span(1));
        let mut statement = RuleNode::new(Rule::Statement, line_span(1));
        statement.push_error("vlans blue", line_span(1));
        root.push_rule(statement);

        assert_eq!(ParseTree::Rule(root).error_count(), 1);
    }
}
