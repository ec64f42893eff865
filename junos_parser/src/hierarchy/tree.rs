//! Hierarchy trees for flat configuration preprocessing
//!
//! Three kinds of tree share one structure: the master tree (every set line
//! in the file), one tree per `groups` definition, and the deactivate tree.
//! Children keep insertion order; later identical paths fold into existing
//! nodes. Group expansion, wildcard application and apply-path all walk
//! these trees and synthesize new flat lines from them.

use crate::config::constants::compile_time::hierarchy::*;
use crate::hierarchy::error::{HierarchyError, HierarchyResult};
use crate::hierarchy::wildcard::WildcardMatcher;
use crate::syntax::{Word, WordKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// PATH TYPES
// ============================================================================

/// One word of a hierarchy path: literal text or a wildcard pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathWord {
    Literal(String),
    Wildcard(String),
}

impl PathWord {
    pub fn from_word(word: &Word) -> Self {
        match word.kind {
            WordKind::Wildcard => Self::Wildcard(word.text.clone()),
            _ => Self::Literal(word.text.clone()),
        }
    }

    /// The word text without wildcard brackets
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Wildcard(s) => s,
        }
    }

    /// The word as it appears in source (`<...>` for wildcards)
    pub fn source_form(&self) -> String {
        match self {
            Self::Literal(s) => s.clone(),
            Self::Wildcard(s) => format!("<{}>", s),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(_))
    }
}

impl fmt::Display for PathWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source_form())
    }
}

/// A node of a hierarchy path, carrying its source line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    pub word: PathWord,
    pub line_number: u32,
}

/// A hierarchy path: the words of one set line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyPath {
    pub nodes: Vec<PathNode>,
}

impl HierarchyPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from parsed line words
    pub fn from_words(words: &[crate::utils::Spanned<Word>]) -> Self {
        Self {
            nodes: words
                .iter()
                .map(|w| PathNode {
                    word: PathWord::from_word(&w.value),
                    line_number: w.span.line(),
                })
                .collect(),
        }
    }

    pub fn push(&mut self, word: PathWord, line_number: u32) {
        self.nodes.push(PathNode { word, line_number });
    }

    pub fn pop(&mut self) {
        self.nodes.pop();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_wildcard(&self) -> bool {
        self.nodes.iter().any(|n| n.word.is_wildcard())
    }

    /// Space-joined source form of the path
    pub fn path_string(&self) -> String {
        self.nodes
            .iter()
            .map(|n| n.word.source_form())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A sub-path of the first `len` nodes
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            nodes: self.nodes[..len.min(self.nodes.len())].to_vec(),
        }
    }

    /// A sub-path starting at node `start`
    pub fn suffix_from(&self, start: usize) -> Self {
        Self {
            nodes: self.nodes[start.min(self.nodes.len())..].to_vec(),
        }
    }
}

impl fmt::Display for HierarchyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_string())
    }
}

/// An effective flat line after preprocessing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatLine {
    pub path: HierarchyPath,
    /// Source line number the statement is attributed to
    pub line_number: u32,
    /// Group that synthesized this line, when it came from apply-groups
    pub source_group: Option<String>,
}

impl FlatLine {
    pub fn new(path: HierarchyPath, line_number: u32) -> Self {
        Self {
            path,
            line_number,
            source_group: None,
        }
    }

    /// Render as a `set` line
    pub fn to_set_line(&self) -> String {
        format!("set {}", self.path.path_string())
    }
}

// ============================================================================
// TREE NODES
// ============================================================================

/// Result of inserting a path into a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPathResult {
    Blacklisted,
    Modified,
    Unmodified,
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: Vec<ChildNode>,
    blacklisted_groups: HashSet<String>,
}

impl Node {
    fn get_child(&self, word: &PathWord) -> Option<&ChildNode> {
        self.children.iter().find(|c| &c.word == word)
    }

    fn get_child_index(&self, word: &PathWord) -> Option<usize> {
        self.children.iter().position(|c| &c.word == word)
    }

    /// First child that matches a path word: literal children match by
    /// equality, wildcard children match literal path words by pattern,
    /// wildcard path words only match identical wildcard children.
    fn first_matching_child(&self, word: &PathWord, matcher: &WildcardMatcher) -> Option<usize> {
        self.children
            .iter()
            .position(|c| pattern_word_matches(&c.word, word, matcher))
    }
}

/// Whether `pattern` (a possibly-wildcard word) matches `candidate`.
/// Literal/literal compares text, wildcard/literal runs the pattern,
/// wildcard/wildcard requires identical patterns.
fn pattern_word_matches(pattern: &PathWord, candidate: &PathWord, matcher: &WildcardMatcher) -> bool {
    match (pattern, candidate) {
        (PathWord::Literal(p), PathWord::Literal(c)) => p == c,
        (PathWord::Wildcard(p), PathWord::Literal(c)) => matcher.matches(c, p),
        (PathWord::Wildcard(p), PathWord::Wildcard(c)) => p == c,
        (PathWord::Literal(_), PathWord::Wildcard(_)) => false,
    }
}

#[derive(Debug, Clone)]
struct ChildNode {
    word: PathWord,
    line_number: u32,
    /// Whether a set line terminates at this node
    has_line: bool,
    source_group: Option<String>,
    node: Node,
}

impl ChildNode {
    fn new(word: PathWord, line_number: u32) -> Self {
        Self {
            word,
            line_number,
            has_line: false,
            source_group: None,
            node: Node::default(),
        }
    }
}

// ============================================================================
// HIERARCHY TREE
// ============================================================================

/// One insertion-ordered hierarchy tree
#[derive(Debug, Clone, Default)]
pub struct HierarchyTree {
    group_name: Option<String>,
    root: Node,
}

impl HierarchyTree {
    pub fn new(group_name: Option<String>) -> Self {
        Self {
            group_name,
            root: Node::default(),
        }
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Insert a path. `has_line` marks the final node as terminating an
    /// actual set line; `group` attributes the insertion to a group and is
    /// checked against per-node blacklists.
    pub fn add_path(
        &mut self,
        path: &HierarchyPath,
        has_line: bool,
        group: Option<&str>,
    ) -> HierarchyResult<AddPathResult> {
        if path.len() > MAX_TREE_DEPTH {
            return Err(HierarchyError::TreeTooDeep {
                depth: path.len(),
                max: MAX_TREE_DEPTH,
            });
        }

        let mut result = AddPathResult::Unmodified;
        let mut current = &mut self.root;

        for (i, path_node) in path.nodes.iter().enumerate() {
            let index = match current.get_child_index(&path_node.word) {
                Some(index) => index,
                None => {
                    result = AddPathResult::Modified;
                    current.children.push(ChildNode::new(
                        path_node.word.clone(),
                        path_node.line_number,
                    ));
                    current.children.len() - 1
                }
            };

            let child = &mut current.children[index];
            if let Some(g) = group {
                if child.node.blacklisted_groups.contains(g) {
                    return Ok(AddPathResult::Blacklisted);
                }
            }
            if i == path.len() - 1 {
                if has_line {
                    child.has_line = true;
                    child.source_group = group.map(str::to_string);
                }
            }
            current = &mut current.children[index].node;
        }

        Ok(result)
    }

    /// Whether some prefix of `path` reaches a leaf of this tree
    /// (deactivate semantics: deactivating a node covers its subtree)
    pub fn contains_path_prefix_of(&self, path: &HierarchyPath) -> bool {
        let mut current = &self.root;
        for path_node in &path.nodes {
            match current.get_child(&path_node.word) {
                Some(child) => {
                    if child.node.children.is_empty() {
                        return true;
                    }
                    current = &child.node;
                }
                None => break,
            }
        }
        false
    }

    /// Remove everything below the exact node at `path`
    pub fn prune_after_path(&mut self, path: &HierarchyPath) {
        let mut current = &mut self.root;
        for path_node in &path.nodes {
            match current.get_child_index(&path_node.word) {
                Some(index) => current = &mut current.children[index].node,
                None => return,
            }
        }
        current.children.clear();
    }

    /// Blacklist `group` at the exact node at `path`
    pub fn set_apply_groups_except(&mut self, path: &HierarchyPath, group: &str) {
        let mut current = &mut self.root;
        for path_node in &path.nodes {
            match current.get_child_index(&path_node.word) {
                Some(index) => current = &mut current.children[index].node,
                None => return,
            }
        }
        current.blacklisted_groups.insert(group.to_string());
    }

    // ------------------------------------------------------------------
    // GROUP EXPANSION
    // ------------------------------------------------------------------

    /// Generate flat lines for applying this group tree at
    /// `application_path` (the statement path the apply-groups word was
    /// attached to). Generated lines are inserted into `master` so later
    /// wildcard application sees them.
    pub fn get_apply_groups_lines(
        &self,
        application_path: &HierarchyPath,
        master: &mut HierarchyTree,
        matcher: &WildcardMatcher,
    ) -> HierarchyResult<Vec<FlatLine>> {
        let group = self
            .group_name
            .clone()
            .unwrap_or_default();
        let mut lines = Vec::new();
        let mut prefix = application_path.clone();

        if application_path.is_empty() {
            self.add_group_paths(None, &self.root, master, &mut prefix, &mut lines, &group)?;
            return Ok(lines);
        }

        // Navigate the group tree along the application path; group-side
        // wildcards match concrete application words.
        let mut current = &self.root;
        let mut matched: Option<&ChildNode> = None;
        let mut partial = Vec::new();
        for path_node in &application_path.nodes {
            match current.first_matching_child(&path_node.word, matcher) {
                Some(index) => {
                    let child = &current.children[index];
                    partial.push(child.word.source_form());
                    matched = Some(child);
                    current = &child.node;
                }
                None => {
                    return Err(HierarchyError::partial_group_match(
                        &group,
                        &partial.join(" "),
                    ));
                }
            }
        }

        let matched = matched.ok_or_else(|| HierarchyError::partial_group_match(&group, ""))?;
        let line_info = matched
            .has_line
            .then_some(matched.line_number);
        self.add_group_paths(line_info, &matched.node, master, &mut prefix, &mut lines, &group)?;
        Ok(lines)
    }

    /// Depth-first clone of group subtree paths under the concrete prefix
    fn add_group_paths(
        &self,
        line_at_node: Option<u32>,
        node: &Node,
        master: &mut HierarchyTree,
        prefix: &mut HierarchyPath,
        lines: &mut Vec<FlatLine>,
        group: &str,
    ) -> HierarchyResult<()> {
        if let Some(line_number) = line_at_node {
            if master.add_path(prefix, true, Some(group))? == AddPathResult::Blacklisted {
                return Ok(());
            }
            lines.push(FlatLine {
                path: prefix.clone(),
                line_number,
                source_group: Some(group.to_string()),
            });
            if lines.len() > MAX_GROUP_EXPANSION_LINES {
                return Err(HierarchyError::ExpansionLimit {
                    produced: lines.len(),
                    max: MAX_GROUP_EXPANSION_LINES,
                });
            }
        }
        for child in &node.children {
            prefix.push(child.word.clone(), child.line_number);
            let child_line = child.has_line.then_some(child.line_number);
            self.add_group_paths(child_line, &child.node, master, prefix, lines, group)?;
            prefix.pop();
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // WILDCARD APPLICATION
    // ------------------------------------------------------------------

    /// Expand a wildcard-bearing path against this tree, generating one
    /// concrete line per match. The generated nodes are inserted into the
    /// tree; the caller drops the wildcard line afterwards.
    pub fn apply_wildcard_path(
        &mut self,
        path: &HierarchyPath,
        matcher: &WildcardMatcher,
    ) -> HierarchyResult<Vec<FlatLine>> {
        if path.is_empty() {
            return Ok(Vec::new());
        }
        let source_group = self.find_source_group(path);

        let mut remaining_wildcards = 0;
        let mut line_number = path
            .nodes
            .first()
            .map(|n| n.line_number)
            .unwrap_or(0);
        for node in &path.nodes {
            if node.word.is_wildcard() {
                remaining_wildcards += 1;
                line_number = node.line_number;
            }
        }

        let mut lines = Vec::new();
        let mut new_path = HierarchyPath::new();
        // The walk mutates the tree while traversing it, so it runs over a
        // clone of the root and re-inserts generated paths afterwards.
        let snapshot = self.root.clone();
        Self::apply_wildcard_recursive(
            &snapshot,
            path,
            0,
            remaining_wildcards,
            line_number,
            source_group.as_deref(),
            matcher,
            &mut new_path,
            &mut lines,
        )?;
        for line in &lines {
            self.add_path(&line.path, true, None)?;
        }
        Ok(lines)
    }

    fn find_source_group(&self, path: &HierarchyPath) -> Option<String> {
        let mut current = &self.root;
        let mut found: Option<&ChildNode> = None;
        for path_node in &path.nodes {
            match current.get_child(&path_node.word) {
                Some(child) => {
                    found = Some(child);
                    current = &child.node;
                }
                None => return None,
            }
        }
        found.and_then(|c| c.source_group.clone())
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_wildcard_recursive(
        node: &Node,
        path: &HierarchyPath,
        index: usize,
        remaining_wildcards: usize,
        line_number: u32,
        source_group: Option<&str>,
        matcher: &WildcardMatcher,
        new_path: &mut HierarchyPath,
        lines: &mut Vec<FlatLine>,
    ) -> HierarchyResult<()> {
        if let Some(group) = source_group {
            if node.blacklisted_groups.contains(group) {
                return Ok(());
            }
        }
        if lines.len() > MAX_WILDCARD_EXPANSION_LINES {
            return Err(HierarchyError::ExpansionLimit {
                produced: lines.len(),
                max: MAX_WILDCARD_EXPANSION_LINES,
            });
        }

        let path_node = &path.nodes[index];
        if !path_node.word.is_wildcard() {
            let existing = node.get_child(&path_node.word);
            if existing.is_none() && remaining_wildcards > 0 {
                // A missing literal with wildcards still unmatched means
                // there is nothing to expand against.
                return Ok(());
            }
            new_path.push(path_node.word.clone(), path_node.line_number);
            if index == path.len() - 1 {
                lines.push(FlatLine {
                    path: new_path.clone(),
                    line_number,
                    source_group: source_group.map(str::to_string),
                });
            } else {
                let empty = Node::default();
                let child_node = existing.map(|c| &c.node).unwrap_or(&empty);
                Self::apply_wildcard_recursive(
                    child_node,
                    path,
                    index + 1,
                    remaining_wildcards,
                    line_number,
                    source_group,
                    matcher,
                    new_path,
                    lines,
                )?;
            }
            new_path.pop();
        } else if index < path.len() - 1 {
            for child in &node.children {
                if !child.word.is_wildcard()
                    && pattern_word_matches(&path_node.word, &child.word, matcher)
                {
                    new_path.push(child.word.clone(), child.line_number);
                    Self::apply_wildcard_recursive(
                        &child.node,
                        path,
                        index + 1,
                        remaining_wildcards - 1,
                        line_number,
                        source_group,
                        matcher,
                        new_path,
                        lines,
                    )?;
                    new_path.pop();
                }
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // APPLY-PATH
    // ------------------------------------------------------------------

    /// Expand an apply-path expression: every concrete word found in this
    /// tree at `apply_path` becomes one prefix entry under `base_path`.
    /// Bare addresses get a host prefix length appended.
    pub fn get_apply_path_lines(
        &self,
        base_path: &HierarchyPath,
        apply_path: &HierarchyPath,
        matcher: &WildcardMatcher,
    ) -> Vec<FlatLine> {
        let mut candidates = Vec::new();
        if !apply_path.is_empty() {
            Self::collect_apply_path_prefixes(&self.root, apply_path, 0, matcher, &mut candidates);
        }

        let mut lines = Vec::new();
        for (text, line_number) in candidates {
            let prefix_str = if text.contains('/') {
                text
            } else if text.contains(':') {
                format!("{}/128", text)
            } else {
                format!("{}/32", text)
            };
            let mut path = base_path.clone();
            path.push(PathWord::Literal(prefix_str), line_number);
            lines.push(FlatLine {
                path,
                line_number,
                source_group: None,
            });
        }
        lines
    }

    fn collect_apply_path_prefixes(
        node: &Node,
        path: &HierarchyPath,
        depth: usize,
        matcher: &WildcardMatcher,
        out: &mut Vec<(String, u32)>,
    ) {
        let path_node = &path.nodes[depth];
        if depth == path.len() - 1 {
            for child in node.children.iter() {
                if !child.word.is_wildcard()
                    && pattern_word_matches(&path_node.word, &child.word, matcher)
                {
                    out.push((child.word.text().to_string(), child.line_number));
                }
            }
        } else {
            for child in node.children.iter() {
                if pattern_word_matches(&path_node.word, &child.word, matcher) {
                    Self::collect_apply_path_prefixes(&child.node, path, depth + 1, matcher, out);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // SERIALIZATION
    // ------------------------------------------------------------------

    /// Newline-separated set lines, one per root-to-leaf path
    pub fn to_set_lines(&self, header: &str) -> String {
        let mut output = String::from(header);
        Self::append_set_lines(&self.root, "set", &mut output);
        output
    }

    fn append_set_lines(node: &Node, prefix: &str, output: &mut String) {
        if node.children.is_empty() {
            output.push_str(prefix);
            output.push('\n');
        }
        for child in &node.children {
            let child_prefix = format!("{} {}", prefix, child.word.source_form());
            Self::append_set_lines(&child.node, &child_prefix, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(words: &[&str]) -> HierarchyPath {
        let mut p = HierarchyPath::new();
        for (i, w) in words.iter().enumerate() {
            let word = if w.starts_with('<') && w.ends_with('>') {
                PathWord::Wildcard(w[1..w.len() - 1].to_string())
            } else {
                PathWord::Literal(w.to_string())
            };
            p.push(word, i as u32 + 1);
        }
        p
    }

    #[test]
    fn test_add_path_and_prefix_containment() {
        let mut tree = HierarchyTree::new(None);
        tree.add_path(&path(&["interfaces", "ge-0/0/0", "unit", "0"]), true, None)
            .unwrap();

        // Deactivating the whole interface covers deeper paths
        let mut deactivate = HierarchyTree::new(None);
        deactivate
            .add_path(&path(&["interfaces", "ge-0/0/0"]), false, None)
            .unwrap();
        deactivate.prune_after_path(&path(&["interfaces", "ge-0/0/0"]));
        assert!(deactivate.contains_path_prefix_of(&path(&[
            "interfaces",
            "ge-0/0/0",
            "unit",
            "0",
        ])));
        assert!(!deactivate.contains_path_prefix_of(&path(&["interfaces", "ge-0/0/1"])));
    }

    #[test]
    fn test_add_path_results() {
        let mut tree = HierarchyTree::new(None);
        assert_eq!(
            tree.add_path(&path(&["system", "host-name", "r1"]), true, None)
                .unwrap(),
            AddPathResult::Modified
        );
        assert_eq!(
            tree.add_path(&path(&["system", "host-name", "r1"]), true, None)
                .unwrap(),
            AddPathResult::Unmodified
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut tree = HierarchyTree::new(None);
        let deep: Vec<String> = (0..40).map(|i| format!("w{}", i)).collect();
        let deep_refs: Vec<&str> = deep.iter().map(String::as_str).collect();
        let result = tree.add_path(&path(&deep_refs), true, None);
        assert!(matches!(result, Err(HierarchyError::TreeTooDeep { .. })));
    }

    #[test]
    fn test_group_expansion_simple() {
        let matcher = WildcardMatcher::new();
        let mut group = HierarchyTree::new(Some("MTU".to_string()));
        group
            .add_path(&path(&["interfaces", "ge-0/0/0", "mtu", "9000"]), true, None)
            .unwrap();

        let mut master = HierarchyTree::new(None);
        let lines = group
            .get_apply_groups_lines(&HierarchyPath::new(), &mut master, &matcher)
            .unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_set_line(), "set interfaces ge-0/0/0 mtu 9000");
        assert_eq!(lines[0].source_group.as_deref(), Some("MTU"));
    }

    #[test]
    fn test_group_expansion_wildcard_prefix_match() {
        // Group configures <ge-*> interfaces; applying below a concrete
        // interface substitutes the concrete name.
        let matcher = WildcardMatcher::new();
        let mut group = HierarchyTree::new(Some("LINKS".to_string()));
        group
            .add_path(&path(&["interfaces", "<ge-*>", "mtu", "9000"]), true, None)
            .unwrap();

        let mut master = HierarchyTree::new(None);
        let lines = group
            .get_apply_groups_lines(
                &path(&["interfaces", "ge-0/0/3"]),
                &mut master,
                &matcher,
            )
            .unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_set_line(), "set interfaces ge-0/0/3 mtu 9000");
    }

    #[test]
    fn test_group_expansion_partial_match() {
        let matcher = WildcardMatcher::new();
        let mut group = HierarchyTree::new(Some("G".to_string()));
        group
            .add_path(&path(&["system", "host-name", "master"]), true, None)
            .unwrap();

        let mut master = HierarchyTree::new(None);
        let result = group.get_apply_groups_lines(
            &path(&["interfaces", "ge-0/0/0"]),
            &mut master,
            &matcher,
        );
        assert!(matches!(
            result,
            Err(HierarchyError::PartialGroupMatch { .. })
        ));
    }

    #[test]
    fn test_group_expansion_respects_blacklist() {
        let matcher = WildcardMatcher::new();
        let mut group = HierarchyTree::new(Some("G".to_string()));
        group
            .add_path(&path(&["system", "name-server", "10.0.0.1"]), true, None)
            .unwrap();

        let mut master = HierarchyTree::new(None);
        master
            .add_path(&path(&["system"]), false, None)
            .unwrap();
        master.set_apply_groups_except(&path(&["system"]), "G");

        let lines = group
            .get_apply_groups_lines(&HierarchyPath::new(), &mut master, &matcher)
            .unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_wildcard_application() {
        let matcher = WildcardMatcher::new();
        let mut master = HierarchyTree::new(None);
        master
            .add_path(&path(&["interfaces", "ge-0/0/0", "unit", "0"]), true, None)
            .unwrap();
        master
            .add_path(&path(&["interfaces", "ge-0/0/1", "unit", "0"]), true, None)
            .unwrap();
        master
            .add_path(&path(&["interfaces", "xe-1/0/0", "unit", "0"]), true, None)
            .unwrap();

        let lines = master
            .apply_wildcard_path(&path(&["interfaces", "<ge-*>", "disable"]), &matcher)
            .unwrap();

        let rendered: Vec<String> = lines.iter().map(FlatLine::to_set_line).collect();
        assert_eq!(
            rendered,
            vec![
                "set interfaces ge-0/0/0 disable",
                "set interfaces ge-0/0/1 disable",
            ]
        );
    }

    #[test]
    fn test_wildcard_application_missing_literal_tail() {
        let matcher = WildcardMatcher::new();
        let mut master = HierarchyTree::new(None);
        master
            .add_path(&path(&["protocols", "ospf"]), true, None)
            .unwrap();

        // No interface subtree exists, so the wildcard has nothing to bind
        let lines = master
            .apply_wildcard_path(&path(&["interfaces", "<ge-*>", "disable"]), &matcher)
            .unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_apply_path_lines() {
        let matcher = WildcardMatcher::new();
        let mut master = HierarchyTree::new(None);
        master
            .add_path(
                &path(&["interfaces", "ge-0/0/0", "unit", "0", "family", "inet", "address",
                    "10.0.0.1/31"]),
                true,
                None,
            )
            .unwrap();
        master
            .add_path(
                &path(&["interfaces", "ge-0/0/1", "unit", "0", "family", "inet", "address",
                    "10.0.1.1"]),
                true,
                None,
            )
            .unwrap();

        let base = path(&["policy-options", "prefix-list", "LOCALS"]);
        let expr = path(&["interfaces", "<*>", "unit", "<*>", "family", "inet", "address", "<*>"]);
        let lines = master.get_apply_path_lines(&base, &expr, &matcher);

        let rendered: Vec<String> = lines.iter().map(FlatLine::to_set_line).collect();
        assert_eq!(
            rendered,
            vec![
                "set policy-options prefix-list LOCALS 10.0.0.1/31",
                "set policy-options prefix-list LOCALS 10.0.1.1/32",
            ]
        );
    }

    #[test]
    fn test_to_set_lines_round_trip() {
        let mut tree = HierarchyTree::new(None);
        tree.add_path(&path(&["system", "host-name", "r1"]), true, None)
            .unwrap();
        tree.add_path(&path(&["system", "domain-name", "example.com"]), true, None)
            .unwrap();

        let rendered = tree.to_set_lines("");
        assert_eq!(
            rendered,
            "set system host-name r1\nset system domain-name example.com\n"
        );
    }
}
