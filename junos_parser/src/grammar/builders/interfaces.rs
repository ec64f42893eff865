//! `interfaces` stanza builder

use super::{flag, leaf, leaf_one, unrecognized, Cursor};
use crate::grammar::rules::Rule;
use crate::grammar::tree::RuleNode;

pub(crate) fn build(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::Interfaces, cursor.span());

    if cursor.peek().is_none() {
        // bare `set interfaces` configures nothing
        return node;
    }

    let mut interface = RuleNode::new(Rule::Interface, cursor.span());
    cursor.take_value(&mut interface);
    interface_tail(cursor, &mut interface);
    node.push_rule(interface);
    node
}

fn interface_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        // declaring the interface with no body is legal
        None => {}
        Some("disable") => {
            cursor.bump();
            node.push_rule(flag(Rule::IfDisable, cursor));
        }
        Some("description") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::IfDescription, cursor));
        }
        Some("mtu") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::IfMtu, cursor));
        }
        Some("unit") => {
            cursor.bump();
            let mut unit = RuleNode::new(Rule::IfUnit, cursor.span());
            cursor.take_value(&mut unit);
            unit_tail(cursor, &mut unit);
            node.push_rule(unit);
        }
        _ => unrecognized(node, cursor),
    }
}

fn unit_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("disable") => {
            cursor.bump();
            node.push_rule(flag(Rule::IfDisable, cursor));
        }
        Some("description") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::IfDescription, cursor));
        }
        Some("family") => {
            cursor.bump();
            match cursor.peek() {
                Some("inet") => {
                    cursor.bump();
                    let mut family = RuleNode::new(Rule::IfuFamilyInet, cursor.span());
                    inet_tail(cursor, &mut family);
                    node.push_rule(family);
                }
                Some("inet6") => {
                    cursor.bump();
                    // recognized so extraction can flag it, body not modeled
                    node.push_rule(leaf(Rule::IfuFamilyInet6, cursor));
                }
                _ => unrecognized(node, cursor),
            }
        }
        _ => unrecognized(node, cursor),
    }
}

fn inet_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        // declaring the family with no body is legal
        None => {}
        Some("address") => {
            cursor.bump();
            // first value is the prefix; `primary`/`preferred` ride along
            node.push_rule(leaf(Rule::IfiAddress, cursor));
        }
        Some("filter") => {
            cursor.bump();
            match cursor.peek() {
                Some("input") => {
                    cursor.bump();
                    node.push_rule(leaf_one(Rule::IfiFilterInput, cursor));
                }
                Some("output") => {
                    cursor.bump();
                    node.push_rule(leaf_one(Rule::IfiFilterOutput, cursor));
                }
                _ => unrecognized(node, cursor),
            }
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
    fn test_interface_address() {
        let statement = build_statement(&flat_line(&[
            "interfaces",
            "ge-0/0/0",
            "unit",
            "0",
            "family",
            "inet",
            "address",
            "10.0.0.1/31",
        ]));
        let interface = statement.find_descendant(Rule::Interface).unwrap();
        assert_eq!(interface.first_terminal_text(), Some("ge-0/0/0"));
        let unit = interface.find_rule(Rule::IfUnit).unwrap();
        assert_eq!(unit.first_terminal_text(), Some("0"));
        let address = unit.find_descendant(Rule::IfiAddress).unwrap();
        assert_eq!(address.first_terminal_text(), Some("10.0.0.1/31"));
    }

    #[test]
    fn test_interface_disable_flag() {
        let statement = build_statement(&flat_line(&["interfaces", "ge-0/0/0", "disable"]));
        let interface = statement.find_descendant(Rule::Interface).unwrap();
        assert!(interface.find_rule(Rule::IfDisable).is_some());
        assert_eq!(ParseTree::Rule(statement).error_count(), 0);
    }

    #[test]
    fn test_unit_filter_input() {
        let statement = build_statement(&flat_line(&[
            "interfaces", "ge-0/0/0", "unit", "0", "family", "inet", "filter", "input",
            "EDGE-IN",
        ]));
        let filter = statement.find_descendant(Rule::IfiFilterInput).unwrap();
        assert_eq!(filter.first_terminal_text(), Some("EDGE-IN"));
    }

    #[test]
    fn test_inet6_family_recognized() {
        let statement = build_statement(&flat_line(&[
            "interfaces", "ge-0/0/0", "unit", "0", "family", "inet6", "address",
            "2001:db8::1/64",
        ]));
        let family = statement.find_descendant(Rule::IfuFamilyInet6).unwrap();
        assert_eq!(family.terminal_texts(), vec!["address", "2001:db8::1/64"]);
    }

    #[test]
    fn test_unmodeled_interface_statement() {
        let statement = build_statement(&flat_line(&[
            "interfaces", "ge-0/0/0", "gigether-options", "802.3ad", "ae0",
        ]));
        assert_eq!(ParseTree::Rule(statement).error_count(), 1);
    }

    #[test]
    fn test_bare_interface_declaration() {
        let statement = build_statement(&flat_line(&["interfaces", "ge-0/0/0"]));
        assert!(statement.find_descendant(Rule::Interface).is_some());
        assert_eq!(ParseTree::Rule(statement).error_count(), 0);
    }
}
