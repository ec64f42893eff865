//! `protocols` stanza builder (BGP is the modeled protocol)

use super::{flag, leaf, leaf_one, unrecognized, Cursor};
use crate::grammar::rules::Rule;
use crate::grammar::tree::RuleNode;

pub(crate) fn build(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::Protocols, cursor.span());

    match cursor.peek() {
        Some("bgp") => {
            cursor.bump();
            let mut bgp = RuleNode::new(Rule::Bgp, cursor.span());
            bgp_tail(cursor, &mut bgp);
            node.push_rule(bgp);
        }
        // ospf/isis/mpls/ldp and friends are outside the modeled subset
        _ => unrecognized(&mut node, cursor),
    }

    node
}

/// BGP statements are valid at process, group, and neighbor level; the
/// same tail runs at each level and nests group/neighbor scopes.
fn bgp_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("group") => {
            cursor.bump();
            let mut group = RuleNode::new(Rule::BgpGroup, cursor.span());
            cursor.take_value(&mut group);
            bgp_tail(cursor, &mut group);
            node.push_rule(group);
        }
        Some("neighbor") => {
            cursor.bump();
            let mut neighbor = RuleNode::new(Rule::BgpNeighbor, cursor.span());
            cursor.take_value(&mut neighbor);
            bgp_tail(cursor, &mut neighbor);
            node.push_rule(neighbor);
        }
        Some("type") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::BgpType, cursor));
        }
        Some("description") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::BgpDescription, cursor));
        }
        Some("local-address") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::BgpLocalAddress, cursor));
        }
        Some("local-as") => {
            cursor.bump();
            node.push_rule(leaf(Rule::BgpLocalAs, cursor));
        }
        Some("peer-as") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::BgpPeerAs, cursor));
        }
        Some("multihop") => {
            cursor.bump();
            // optional `ttl <n>` words ride along
            node.push_rule(leaf(Rule::BgpMultihop, cursor));
        }
        Some("multipath") => {
            cursor.bump();
            // optional `multiple-as`
            node.push_rule(leaf(Rule::BgpMultipath, cursor));
        }
        Some("cluster") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::BgpClusterId, cursor));
        }
        Some("import") => {
            cursor.bump();
            node.push_rule(leaf(Rule::BgpImport, cursor));
        }
        Some("export") => {
            cursor.bump();
            node.push_rule(leaf(Rule::BgpExport, cursor));
        }
        Some("remove-private") => {
            cursor.bump();
            node.push_rule(flag(Rule::BgpRemovePrivate, cursor));
        }
        _ => unrecognized(node, cursor),
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::builders::build_statement;
    use crate::grammar::builders::tests::flat_line;
    use crate::grammar::rules::Rule;
    use crate::grammar::tree::ParseTree;

    #[test]
    fn test_group_neighbor_nesting() {
        let statement = build_statement(&flat_line(&[
            "protocols", "bgp", "group", "EBGP", "neighbor", "10.0.0.2", "peer-as", "65002",
        ]));
        let group = statement.find_descendant(Rule::BgpGroup).unwrap();
        assert_eq!(group.first_terminal_text(), Some("EBGP"));
        let neighbor = group.find_rule(Rule::BgpNeighbor).unwrap();
        assert_eq!(neighbor.first_terminal_text(), Some("10.0.0.2"));
        let peer_as = neighbor.find_rule(Rule::BgpPeerAs).unwrap();
        assert_eq!(peer_as.first_terminal_text(), Some("65002"));
    }

    #[test]
    fn test_process_level_statement() {
        let statement = build_statement(&flat_line(&["protocols", "bgp", "multipath"]));
        let bgp = statement.find_descendant(Rule::Bgp).unwrap();
        assert!(bgp.find_rule(Rule::BgpMultipath).is_some());
    }

    #[test]
    fn test_group_type_and_export() {
        let statement = build_statement(&flat_line(&[
            "protocols", "bgp", "group", "IBGP", "type", "internal",
        ]));
        let group = statement.find_descendant(Rule::BgpGroup).unwrap();
        assert_eq!(
            group.find_rule(Rule::BgpType).unwrap().first_terminal_text(),
            Some("internal")
        );

        let statement = build_statement(&flat_line(&[
            "protocols", "bgp", "group", "IBGP", "export", "NEXT-HOP-SELF",
        ]));
        let group = statement.find_descendant(Rule::BgpGroup).unwrap();
        assert_eq!(
            group
                .find_rule(Rule::BgpExport)
                .unwrap()
                .first_terminal_text(),
            Some("NEXT-HOP-SELF")
        );
    }

    #[test]
    fn test_multihop_with_ttl() {
        let statement = build_statement(&flat_line(&[
            "protocols", "bgp", "group", "EBGP", "multihop", "ttl", "5",
        ]));
        let multihop = statement.find_descendant(Rule::BgpMultihop).unwrap();
        assert_eq!(multihop.terminal_texts(), vec!["ttl", "5"]);
    }

    #[test]
    fn test_ospf_is_unmodeled() {
        let statement = build_statement(&flat_line(&[
            "protocols", "ospf", "area", "0.0.0.0", "interface", "ge-0/0/0.0",
        ]));
        assert_eq!(ParseTree::Rule(statement).error_count(), 1);
    }
}
