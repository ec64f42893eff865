//! Statement builders: effective flat lines to typed parse trees
//!
//! Each stanza has its own builder module working over a shared word
//! cursor. Builders never fail: input outside the modeled grammar becomes
//! an error node holding the unmatched tail, and the line still produces a
//! statement so the walk visits everything.

pub mod applications;
pub mod firewall;
pub mod interfaces;
pub mod policy;
pub mod protocols;
pub mod routing;
pub mod security;
pub mod system;

use crate::grammar::rules::Rule;
use crate::grammar::tree::{line_span, ParseTree, RuleNode};
use crate::hierarchy::{FlatLine, PathNode};
use crate::logging::codes;
use crate::{log_debug, log_success};
use serde::{Deserialize, Serialize};

// ============================================================================
// CURSOR
// ============================================================================

/// Word cursor over one effective line
pub(crate) struct Cursor<'a> {
    nodes: &'a [PathNode],
    pos: usize,
    line_number: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a FlatLine) -> Self {
        Self {
            nodes: &line.path.nodes,
            pos: 0,
            line_number: line.line_number,
        }
    }

    /// Text of the next word, quotes/brackets stripped
    pub fn peek(&self) -> Option<&'a str> {
        self.nodes.get(self.pos).map(|n| n.word.text())
    }

    /// Consume and return the next word
    pub fn bump(&mut self) -> Option<&'a PathNode> {
        let node = self.nodes.get(self.pos);
        if node.is_some() {
            self.pos += 1;
        }
        node
    }

    pub fn remaining(&self) -> usize {
        self.nodes.len() - self.pos
    }

    /// Span attributed to the current position
    pub fn span(&self) -> crate::utils::Span {
        let line = self
            .nodes
            .get(self.pos)
            .map(|n| n.line_number)
            .unwrap_or(self.line_number);
        line_span(line)
    }

    /// Consume the next word into `node` as a terminal
    pub fn take_value(&mut self, node: &mut RuleNode) -> bool {
        match self.bump() {
            Some(path_node) => {
                node.push_terminal(path_node.word.text(), line_span(path_node.line_number));
                true
            }
            None => false,
        }
    }

    /// Consume every remaining word into `node` as terminals
    pub fn take_rest(&mut self, node: &mut RuleNode) {
        while self.take_value(node) {}
    }

    /// Consume every remaining word into `node` as one error node
    pub fn error_rest(&mut self, node: &mut RuleNode) {
        if self.remaining() == 0 {
            return;
        }
        let span = self.span();
        let text = self.nodes[self.pos..]
            .iter()
            .map(|n| n.word.source_form())
            .collect::<Vec<_>>()
            .join(" ");
        self.pos = self.nodes.len();
        node.push_error(&text, span);
    }
}

// ============================================================================
// SHARED BUILDER SHAPES
// ============================================================================

/// A rule whose remaining words are all values (`host-name r1`,
/// `name-server 10.0.0.1`, `import POLICY`)
pub(crate) fn leaf(rule: Rule, cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(rule, cursor.span());
    cursor.take_rest(&mut node);
    node
}

/// A rule taking exactly one value; trailing words become an error node
pub(crate) fn leaf_one(rule: Rule, cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(rule, cursor.span());
    cursor.take_value(&mut node);
    cursor.error_rest(&mut node);
    node
}

/// A bare flag rule (`disable`, `accept`); trailing words are an error
pub(crate) fn flag(rule: Rule, cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(rule, cursor.span());
    cursor.error_rest(&mut node);
    node
}

/// Wrap the remaining words of an unrecognized statement in an error node
pub(crate) fn unrecognized(node: &mut RuleNode, cursor: &mut Cursor) {
    cursor.error_rest(node);
}

// ============================================================================
// TOP-LEVEL BUILD
// ============================================================================

/// Counters for one tree build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildStats {
    pub statements: usize,
    pub error_nodes: usize,
}

/// Build the configuration parse tree from effective lines
pub fn build_configuration(lines: &[FlatLine]) -> (RuleNode, BuildStats) {
    let first_line = lines.first().map(|l| l.line_number).unwrap_or(0);
    let mut root = RuleNode::new(Rule::Configuration, line_span(first_line));
    let mut stats = BuildStats::default();

    for line in lines {
        let mut set_line = RuleNode::new(Rule::SetLine, line_span(line.line_number));
        set_line.source_group = line.source_group.clone();

        let statement = build_statement(line);
        stats.statements += 1;
        stats.error_nodes += statement
            .children
            .iter()
            .map(ParseTree::error_count)
            .sum::<usize>();
        set_line.push_rule(statement);
        root.push_rule(set_line);
    }

    log_success!(codes::success::TREE_BUILD_COMPLETE,
        "Parse tree build completed",
        "statements" => stats.statements,
        "error_nodes" => stats.error_nodes
    );

    (root, stats)
}

/// Build the statement subtree for one line
pub fn build_statement(line: &FlatLine) -> RuleNode {
    let mut cursor = Cursor::new(line);
    let mut statement = RuleNode::new(Rule::Statement, line_span(line.line_number));

    match cursor.peek() {
        Some("system") => {
            cursor.bump();
            statement.push_rule(system::build(&mut cursor));
        }
        Some("interfaces") => {
            cursor.bump();
            statement.push_rule(interfaces::build(&mut cursor));
        }
        Some("protocols") => {
            cursor.bump();
            statement.push_rule(protocols::build(&mut cursor));
        }
        Some("policy-options") => {
            cursor.bump();
            statement.push_rule(policy::build(&mut cursor));
        }
        Some("firewall") => {
            cursor.bump();
            statement.push_rule(firewall::build(&mut cursor));
        }
        Some("security") => {
            cursor.bump();
            statement.push_rule(security::build(&mut cursor));
        }
        Some("routing-options") => {
            cursor.bump();
            statement.push_rule(routing::build(&mut cursor));
        }
        Some("applications") => {
            cursor.bump();
            statement.push_rule(applications::build(&mut cursor));
        }
        Some(other) => {
            log_debug!("statement outside modeled grammar",
                "first_word" => other,
                "line" => line.line_number
            );
            unrecognized(&mut statement, &mut cursor);
        }
        None => {}
    }

    statement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{HierarchyPath, PathWord};

    pub(crate) fn flat_line(words: &[&str]) -> FlatLine {
        let mut path = HierarchyPath::new();
        for w in words {
            path.push(PathWord::Literal(w.to_string()), 1);
        }
        FlatLine::new(path, 1)
    }

    #[test]
    fn test_statement_dispatch() {
        let statement = build_statement(&flat_line(&["system", "host-name", "r1"]));
        let system = statement.find_rule(Rule::System).unwrap();
        let host = system.find_rule(Rule::SysHostName).unwrap();
        assert_eq!(host.first_terminal_text(), Some("r1"));
    }

    #[test]
    fn test_unrecognized_statement_becomes_error_node() {
        let statement = build_statement(&flat_line(&["vlans", "blue", "vlan-id", "100"]));
        assert_eq!(ParseTree::Rule(statement.clone()).error_count(), 1);
        let error = statement.children[0].as_error().unwrap();
        assert_eq!(error.text, "vlans blue vlan-id 100");
    }

    #[test]
    fn test_build_configuration_counts() {
        let lines = vec![
            flat_line(&["system", "host-name", "r1"]),
            flat_line(&["chassis", "aggregated-devices"]),
        ];
        let (root, stats) = build_configuration(&lines);
        assert_eq!(stats.statements, 2);
        assert_eq!(stats.error_nodes, 1);
        assert_eq!(root.rule_children().count(), 2);
    }

    #[test]
    fn test_set_line_carries_source_group() {
        let mut line = flat_line(&["system", "host-name", "r1"]);
        line.source_group = Some("COMMON".to_string());
        let (root, _) = build_configuration(&[line]);
        let set_line = root.find_rule(Rule::SetLine).unwrap();
        assert_eq!(set_line.source_group.as_deref(), Some("COMMON"));
    }
}
