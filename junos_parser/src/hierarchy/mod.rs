//! Hierarchy preprocessing for flat configuration lines
//!
//! Flat Junos lines are not directly consumable: `groups` bodies define
//! reusable subtrees, `apply-groups` splices them in (with wildcard
//! substitution), wildcard set lines fan out over the master tree,
//! `apply-path` materializes prefix lists from interface addresses, and
//! `deactivate` lines veto whole subtrees. This module resolves all of
//! that, turning the parsed line list into the effective line list the
//! statement grammar sees.

pub mod error;
pub mod tree;
pub mod wildcard;

use crate::config::constants::compile_time::hierarchy::MAX_GROUPS;
use crate::logging::codes;
use crate::syntax::{ConfigLine, LineParseResult, WordKind};
use crate::{log_debug, log_success, log_warning};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use error::{HierarchyError, HierarchyResult};
pub use tree::{AddPathResult, FlatLine, HierarchyPath, HierarchyTree, PathNode, PathWord};
pub use wildcard::{to_regex, WildcardError, WildcardMatcher};

// ============================================================================
// HIERARCHY
// ============================================================================

/// The hierarchy state for one configuration file: the master tree, one
/// tree per group, and the deactivate tree.
pub struct Hierarchy {
    master_tree: HierarchyTree,
    deactivate_tree: HierarchyTree,
    trees: HashMap<String, HierarchyTree>,
    matcher: WildcardMatcher,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self {
            master_tree: HierarchyTree::new(None),
            deactivate_tree: HierarchyTree::new(None),
            trees: HashMap::new(),
            matcher: WildcardMatcher::new(),
        }
    }

    pub fn group_count(&self) -> usize {
        self.trees.len()
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.trees.contains_key(group)
    }

    /// Create the tree for a group if it does not exist yet
    pub fn ensure_group(&mut self, group: &str) -> HierarchyResult<()> {
        if !self.trees.contains_key(group) {
            if self.trees.len() >= MAX_GROUPS {
                return Err(HierarchyError::TooManyGroups {
                    count: self.trees.len() + 1,
                    max: MAX_GROUPS,
                });
            }
            self.trees
                .insert(group.to_string(), HierarchyTree::new(Some(group.to_string())));
        }
        Ok(())
    }

    pub fn add_group_path(&mut self, group: &str, path: &HierarchyPath) -> HierarchyResult<()> {
        self.ensure_group(group)?;
        let tree = self
            .trees
            .get_mut(group)
            .expect("group tree was just ensured");
        tree.add_path(path, true, None)?;
        Ok(())
    }

    pub fn add_master_path(&mut self, path: &HierarchyPath) -> HierarchyResult<AddPathResult> {
        self.master_tree.add_path(path, true, None)
    }

    pub fn add_deactivate_path(&mut self, path: &HierarchyPath) -> HierarchyResult<()> {
        if self.is_deactivated(path) {
            return Ok(());
        }
        self.deactivate_tree.add_path(path, false, None)?;
        self.deactivate_tree.prune_after_path(path);
        Ok(())
    }

    pub fn is_deactivated(&self, path: &HierarchyPath) -> bool {
        self.deactivate_tree.contains_path_prefix_of(path)
    }

    pub fn set_apply_groups_except(&mut self, path: &HierarchyPath, group: &str) {
        self.master_tree.set_apply_groups_except(path, group);
    }

    /// Expand `apply-groups <group>` at `path` into synthesized lines
    pub fn get_apply_groups_lines(
        &mut self,
        group: &str,
        path: &HierarchyPath,
    ) -> HierarchyResult<Vec<FlatLine>> {
        let tree = self
            .trees
            .get(group)
            .ok_or_else(|| HierarchyError::UndefinedGroup {
                group: group.to_string(),
            })?;
        tree.get_apply_groups_lines(path, &mut self.master_tree, &self.matcher)
    }

    /// Expand a wildcard-bearing master path into concrete lines
    pub fn apply_wildcard_path(&mut self, path: &HierarchyPath) -> HierarchyResult<Vec<FlatLine>> {
        self.master_tree.apply_wildcard_path(path, &self.matcher)
    }

    /// Expand an apply-path expression against the master tree
    pub fn get_apply_path_lines(
        &self,
        base_path: &HierarchyPath,
        apply_path: &HierarchyPath,
    ) -> Vec<FlatLine> {
        self.master_tree
            .get_apply_path_lines(base_path, apply_path, &self.matcher)
    }

    /// Serialize the master tree back to set lines
    pub fn to_set_lines(&self, header: &str) -> String {
        self.master_tree.to_set_lines(header)
    }
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PREPROCESSOR
// ============================================================================

/// A recoverable problem found during preprocessing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessWarning {
    pub message: String,
    pub line_number: u32,
}

/// Counters describing what preprocessing did
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreprocessStats {
    pub group_definition_lines: usize,
    pub group_count: usize,
    pub expanded_group_lines: usize,
    pub expanded_wildcard_lines: usize,
    pub expanded_apply_path_lines: usize,
    pub deactivated_lines: usize,
}

/// Output of preprocessing
pub struct PreprocessResult {
    pub effective: Vec<FlatLine>,
    pub hierarchy: Hierarchy,
    pub stats: PreprocessStats,
    pub warnings: Vec<PreprocessWarning>,
}

/// Run the full preprocessing pass over parsed lines
pub fn preprocess(parse: &LineParseResult) -> HierarchyResult<PreprocessResult> {
    let mut hierarchy = Hierarchy::new();
    let mut stats = PreprocessStats::default();
    let mut warnings = Vec::new();

    // Pass 1: partition lines into group definitions, deactivations, and
    // ordinary set lines (kept in order).
    let mut work: Vec<FlatLine> = Vec::new();
    let mut deactivate_paths: Vec<HierarchyPath> = Vec::new();

    for line in &parse.lines {
        let path = HierarchyPath::from_words(&line.words);
        match line.keyword {
            crate::tokens::LineKeyword::Deactivate => deactivate_paths.push(path),
            crate::tokens::LineKeyword::Set => {
                if is_group_definition(line) {
                    stats.group_definition_lines += 1;
                    let group = line.words[1].value.text.clone();
                    hierarchy.ensure_group(&group)?;
                    if line.words.len() > 2 {
                        hierarchy.add_group_path(&group, &path.suffix_from(2))?;
                    }
                } else {
                    work.push(FlatLine::new(path, line.line_number));
                }
            }
            _ => {
                // parser already skipped unsupported keywords
            }
        }
    }
    stats.group_count = hierarchy.group_count();

    // Pass 2a: the master tree sees every remaining line (including the
    // apply-groups markers themselves, whose prefix nodes the blacklist
    // registration below relies on).
    for line in &work {
        hierarchy.add_master_path(&line.path)?;
    }

    // Pass 2b: register every apply-groups-except before any expansion, so
    // an exception occurring later in the file still masks earlier
    // apply-groups lines.
    for line in &work {
        if let Some((prefix, group)) = split_trailing_pair(&line.path, "apply-groups-except") {
            hierarchy.set_apply_groups_except(&prefix, &group);
        }
    }

    // Pass 2c: apply-groups expansion, splicing synthesized lines at the
    // point of application.
    let mut expanded: Vec<FlatLine> = Vec::new();
    for line in work {
        if split_trailing_pair(&line.path, "apply-groups-except").is_some() {
            continue;
        }
        if let Some((prefix, group)) = split_trailing_pair(&line.path, "apply-groups") {
            match hierarchy.get_apply_groups_lines(&group, &prefix) {
                Ok(lines) => {
                    stats.expanded_group_lines += lines.len();
                    expanded.extend(lines);
                }
                Err(e) if e.is_recoverable() => {
                    log_warning!("apply-groups expansion dropped",
                        "reason" => e,
                        "line" => line.line_number
                    );
                    warnings.push(PreprocessWarning {
                        message: e.to_string(),
                        line_number: line.line_number,
                    });
                }
                Err(e) => return Err(e),
            }
            continue;
        }
        expanded.push(line);
    }

    // Pass 3: wildcard fan-out. Wildcard lines are replaced by their
    // concrete expansions and never survive to the grammar.
    let mut concrete: Vec<FlatLine> = Vec::new();
    for line in expanded {
        if line.path.contains_wildcard() {
            let generated = hierarchy.apply_wildcard_path(&line.path)?;
            log_debug!("wildcard line expanded",
                "line" => line.to_set_line(),
                "generated" => generated.len()
            );
            stats.expanded_wildcard_lines += generated.len();
            concrete.extend(generated);
        } else {
            concrete.push(line);
        }
    }

    // Pass 4: apply-path materialization for prefix lists.
    let mut resolved: Vec<FlatLine> = Vec::new();
    for line in concrete {
        match parse_apply_path(&line) {
            Some(Ok((base, expr))) => {
                let generated = hierarchy.get_apply_path_lines(&base, &expr);
                stats.expanded_apply_path_lines += generated.len();
                resolved.extend(generated);
            }
            Some(Err(e)) => {
                log_warning!("apply-path expression dropped",
                    "reason" => e,
                    "line" => line.line_number
                );
                warnings.push(PreprocessWarning {
                    message: e.to_string(),
                    line_number: line.line_number,
                });
            }
            None => resolved.push(line),
        }
    }

    // Pass 5: deactivation. Deactivate lines veto their whole subtree.
    for path in &deactivate_paths {
        hierarchy.add_deactivate_path(path)?;
    }
    let before = resolved.len();
    let effective: Vec<FlatLine> = resolved
        .into_iter()
        .filter(|l| !hierarchy.is_deactivated(&l.path))
        .collect();
    stats.deactivated_lines = before - effective.len();

    log_success!(codes::success::PREPROCESS_COMPLETE,
        "Hierarchy preprocessing completed",
        "effective_lines" => effective.len(),
        "groups" => stats.group_count,
        "group_lines" => stats.expanded_group_lines,
        "wildcard_lines" => stats.expanded_wildcard_lines,
        "deactivated" => stats.deactivated_lines
    );

    Ok(PreprocessResult {
        effective,
        hierarchy,
        stats,
        warnings,
    })
}

/// `set groups <name> ...` defines group content rather than configuration
fn is_group_definition(line: &ConfigLine) -> bool {
    line.words
        .first()
        .map(|w| w.value.kind == WordKind::Bare && w.value.text == "groups")
        .unwrap_or(false)
        && line.words.len() >= 2
}

/// Split a path ending in `<marker> <name>` into (prefix, name)
fn split_trailing_pair(path: &HierarchyPath, marker: &str) -> Option<(HierarchyPath, String)> {
    let n = path.len();
    if n < 2 {
        return None;
    }
    let marker_node = &path.nodes[n - 2];
    let name_node = &path.nodes[n - 1];
    if marker_node.word == PathWord::Literal(marker.to_string()) && !name_node.word.is_wildcard() {
        Some((path.prefix(n - 2), name_node.word.text().to_string()))
    } else {
        None
    }
}

/// Recognize `set policy-options prefix-list <name> apply-path "<expr>"`.
/// Returns None when the line is not an apply-path line, Some(Err) when it
/// is but the expression is unusable.
#[allow(clippy::type_complexity)]
fn parse_apply_path(line: &FlatLine) -> Option<Result<(HierarchyPath, HierarchyPath), HierarchyError>> {
    let nodes = &line.path.nodes;
    if nodes.len() != 5 {
        return None;
    }
    if nodes[0].word.text() != "policy-options"
        || nodes[1].word.text() != "prefix-list"
        || nodes[3].word.text() != "apply-path"
    {
        return None;
    }

    let expr_text = nodes[4].word.text();
    let mut expr = HierarchyPath::new();
    for word in expr_text.split_whitespace() {
        if word.starts_with('<') && word.ends_with('>') && word.len() >= 2 {
            expr.push(
                PathWord::Wildcard(word[1..word.len() - 1].to_string()),
                nodes[4].line_number,
            );
        } else if word.starts_with('<') || word.ends_with('>') {
            return Some(Err(HierarchyError::BadApplyPath {
                text: expr_text.to_string(),
            }));
        } else {
            expr.push(PathWord::Literal(word.to_string()), nodes[4].line_number);
        }
    }
    if expr.is_empty() {
        return Some(Err(HierarchyError::BadApplyPath {
            text: expr_text.to_string(),
        }));
    }

    Some(Ok((line.path.prefix(3), expr)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexicalAnalyzer;
    use crate::syntax::parse_lines;
    use crate::tokens::TokenStream;

    fn run(source: &str) -> PreprocessResult {
        let tokens = LexicalAnalyzer::new().tokenize_source(source).unwrap();
        let parsed = parse_lines(TokenStream::new(tokens)).unwrap();
        preprocess(&parsed).unwrap()
    }

    fn set_lines(result: &PreprocessResult) -> Vec<String> {
        result.effective.iter().map(FlatLine::to_set_line).collect()
    }

    #[test]
    fn test_plain_lines_pass_through_in_order() {
        let result = run("set system host-name r1\nset system domain-name example.com\n");
        assert_eq!(
            set_lines(&result),
            vec![
                "set system host-name r1",
                "set system domain-name example.com",
            ]
        );
    }

    #[test]
    fn test_apply_groups_expands_at_application_point() {
        let source = "\
set groups DNS system name-server 10.1.1.1\n\
set system host-name r1\n\
set apply-groups DNS\n\
set system domain-name example.com\n";
        let result = run(source);
        assert_eq!(
            set_lines(&result),
            vec![
                "set system host-name r1",
                "set system name-server 10.1.1.1",
                "set system domain-name example.com",
            ]
        );
        assert_eq!(result.effective[1].source_group.as_deref(), Some("DNS"));
        assert_eq!(result.stats.expanded_group_lines, 1);
    }

    #[test]
    fn test_apply_groups_under_path() {
        let source = "\
set groups JUMBO interfaces <ge-*> mtu 9192\n\
set interfaces ge-0/0/1 apply-groups JUMBO\n\
set interfaces ge-0/0/1 unit 0 family inet address 10.0.0.1/31\n";
        let result = run(source);
        let lines = set_lines(&result);
        assert!(lines.contains(&"set interfaces ge-0/0/1 mtu 9192".to_string()));
    }

    #[test]
    fn test_undefined_group_warns_and_drops() {
        let result = run("set apply-groups NOPE\nset system host-name r1\n");
        assert_eq!(set_lines(&result), vec!["set system host-name r1"]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("NOPE"));
    }

    #[test]
    fn test_apply_groups_except_blocks_subtree() {
        let source = "\
set groups COMMON system name-server 10.1.1.1\n\
set groups COMMON interfaces lo0 unit 0 family inet address 127.0.0.1/32\n\
set system apply-groups-except COMMON\n\
set apply-groups COMMON\n";
        let result = run(source);
        let lines = set_lines(&result);
        assert!(!lines.iter().any(|l| l.contains("name-server")));
        assert!(lines
            .iter()
            .any(|l| l.contains("interfaces lo0 unit 0 family inet address")));
    }

    #[test]
    fn test_group_wildcards_expand_against_master() {
        let source = "\
set groups LINKS interfaces <ge-*> mtu 9000\n\
set interfaces ge-0/0/0 unit 0\n\
set interfaces ge-0/0/7 unit 0\n\
set interfaces xe-2/0/0 unit 0\n\
set apply-groups LINKS\n";
        let result = run(source);
        let lines = set_lines(&result);
        assert!(lines.contains(&"set interfaces ge-0/0/0 mtu 9000".to_string()));
        assert!(lines.contains(&"set interfaces ge-0/0/7 mtu 9000".to_string()));
        assert!(!lines.iter().any(|l| l.contains("xe-2/0/0 mtu")));
        assert!(result.stats.expanded_wildcard_lines >= 2);
    }

    #[test]
    fn test_deactivate_prunes_subtree() {
        let source = "\
set interfaces ge-0/0/0 unit 0 family inet address 10.0.0.1/31\n\
set interfaces ge-0/0/1 unit 0 family inet address 10.0.1.1/31\n\
deactivate interfaces ge-0/0/0\n";
        let result = run(source);
        let lines = set_lines(&result);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ge-0/0/1"));
        assert_eq!(result.stats.deactivated_lines, 1);
    }

    #[test]
    fn test_apply_path_materializes_prefix_list() {
        let source = "\
set interfaces ge-0/0/0 unit 0 family inet address 10.0.0.1/31\n\
set interfaces ge-0/0/1 unit 0 family inet address 172.16.0.1\n\
set policy-options prefix-list LOCALS apply-path \"interfaces <*> unit <*> family inet address <*>\"\n";
        let result = run(source);
        let lines = set_lines(&result);
        assert!(lines.contains(&"set policy-options prefix-list LOCALS 10.0.0.1/31".to_string()));
        assert!(lines.contains(&"set policy-options prefix-list LOCALS 172.16.0.1/32".to_string()));
        assert!(!lines.iter().any(|l| l.contains("apply-path")));
    }

    #[test]
    fn test_group_definition_without_body_is_legal() {
        let result = run("set groups EMPTY\nset apply-groups EMPTY\nset system host-name r1\n");
        assert_eq!(set_lines(&result), vec!["set system host-name r1"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_hierarchy_round_trip_contains_all_lines() {
        let result = run("set system host-name r1\nset interfaces ge-0/0/0 unit 0\n");
        let dump = result.hierarchy.to_set_lines("");
        assert!(dump.contains("set system host-name r1"));
        assert!(dump.contains("set interfaces ge-0/0/0 unit 0"));
    }
}
