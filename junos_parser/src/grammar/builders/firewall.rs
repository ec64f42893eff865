//! `firewall` stanza builder

use super::{flag, leaf, leaf_one, unrecognized, Cursor};
use crate::grammar::rules::Rule;
use crate::grammar::tree::RuleNode;

pub(crate) fn build(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::Firewall, cursor.span());

    match cursor.peek() {
        Some("family") => {
            cursor.bump();
            match cursor.peek() {
                Some("inet") => {
                    cursor.bump();
                    let mut family = RuleNode::new(Rule::FwFamilyInet, cursor.span());
                    match cursor.peek() {
                        Some("filter") => {
                            cursor.bump();
                            family.push_rule(filter(cursor));
                        }
                        _ => unrecognized(&mut family, cursor),
                    }
                    node.push_rule(family);
                }
                // inet6/ethernet-switching filters are outside the subset
                _ => unrecognized(&mut node, cursor),
            }
        }
        // `firewall filter` without family defaults to inet
        Some("filter") => {
            cursor.bump();
            node.push_rule(filter(cursor));
        }
        _ => unrecognized(&mut node, cursor),
    }

    node
}

fn filter(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::FwFilter, cursor.span());
    cursor.take_value(&mut node);

    match cursor.peek() {
        None => {}
        Some("term") => {
            cursor.bump();
            let mut term = RuleNode::new(Rule::FwTerm, cursor.span());
            cursor.take_value(&mut term);
            term_tail(cursor, &mut term);
            node.push_rule(term);
        }
        _ => unrecognized(&mut node, cursor),
    }

    node
}

fn term_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("from") => {
            cursor.bump();
            let mut from = RuleNode::new(Rule::FwFrom, cursor.span());
            from_tail(cursor, &mut from);
            node.push_rule(from);
        }
        Some("then") => {
            cursor.bump();
            let mut then = RuleNode::new(Rule::FwThen, cursor.span());
            then_tail(cursor, &mut then);
            node.push_rule(then);
        }
        _ => unrecognized(node, cursor),
    }
}

fn from_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("source-address") => {
            cursor.bump();
            node.push_rule(leaf(Rule::FwFromSourceAddress, cursor));
        }
        Some("destination-address") => {
            cursor.bump();
            node.push_rule(leaf(Rule::FwFromDestinationAddress, cursor));
        }
        Some("source-port") => {
            cursor.bump();
            node.push_rule(leaf(Rule::FwFromSourcePort, cursor));
        }
        Some("destination-port") => {
            cursor.bump();
            node.push_rule(leaf(Rule::FwFromDestinationPort, cursor));
        }
        Some("port") => {
            cursor.bump();
            node.push_rule(leaf(Rule::FwFromPort, cursor));
        }
        Some("protocol") => {
            cursor.bump();
            node.push_rule(leaf(Rule::FwFromProtocol, cursor));
        }
        Some("icmp-type") => {
            cursor.bump();
            node.push_rule(leaf(Rule::FwFromIcmpType, cursor));
        }
        Some("tcp-established") => {
            cursor.bump();
            node.push_rule(flag(Rule::FwFromTcpEstablished, cursor));
        }
        Some("source-prefix-list") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::FwFromSourcePrefixList, cursor));
        }
        Some("destination-prefix-list") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::FwFromDestinationPrefixList, cursor));
        }
        _ => unrecognized(node, cursor),
    }
}

fn then_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("accept") => {
            cursor.bump();
            node.push_rule(flag(Rule::FwThenAccept, cursor));
        }
        Some("discard") => {
            cursor.bump();
            node.push_rule(flag(Rule::FwThenDiscard, cursor));
        }
        Some("reject") => {
            cursor.bump();
            // optional reject message word rides along
            node.push_rule(leaf(Rule::FwThenReject, cursor));
        }
        Some("next") => {
            cursor.bump();
            match cursor.peek() {
                Some("term") => {
                    cursor.bump();
                    node.push_rule(flag(Rule::FwThenNextTerm, cursor));
                }
                _ => unrecognized(node, cursor),
            }
        }
        Some("log") => {
            cursor.bump();
            node.push_rule(flag(Rule::FwThenLog, cursor));
        }
        Some("count") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::FwThenCount, cursor));
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
    fn test_filter_term_from_destination_address() {
        let statement = build_statement(&flat_line(&[
            "firewall",
            "family",
            "inet",
            "filter",
            "EDGE-IN",
            "term",
            "BLOCK-TELNET",
            "from",
            "destination-address",
            "10.0.5.0/24",
        ]));
        let filter = statement.find_descendant(Rule::FwFilter).unwrap();
        assert_eq!(filter.first_terminal_text(), Some("EDGE-IN"));
        let term = filter.find_rule(Rule::FwTerm).unwrap();
        assert_eq!(term.first_terminal_text(), Some("BLOCK-TELNET"));
        let address = term
            .find_descendant(Rule::FwFromDestinationAddress)
            .unwrap();
        assert_eq!(address.first_terminal_text(), Some("10.0.5.0/24"));
    }

    #[test]
    fn test_filter_without_family_prefix() {
        let statement = build_statement(&flat_line(&[
            "firewall", "filter", "EDGE-IN", "term", "1", "then", "accept",
        ]));
        assert!(statement.find_descendant(Rule::FwThenAccept).is_some());
        assert_eq!(ParseTree::Rule(statement).error_count(), 0);
    }

    #[test]
    fn test_from_port_by_name() {
        let statement = build_statement(&flat_line(&[
            "firewall", "filter", "F", "term", "T", "from", "destination-port", "ssh",
        ]));
        let port = statement.find_descendant(Rule::FwFromDestinationPort).unwrap();
        assert_eq!(port.first_terminal_text(), Some("ssh"));
    }

    #[test]
    fn test_then_count() {
        let statement = build_statement(&flat_line(&[
            "firewall", "filter", "F", "term", "T", "then", "count", "telnet-drops",
        ]));
        let count = statement.find_descendant(Rule::FwThenCount).unwrap();
        assert_eq!(count.first_terminal_text(), Some("telnet-drops"));
    }

    #[test]
    fn test_inet6_filter_unmodeled() {
        let statement = build_statement(&flat_line(&[
            "firewall", "family", "inet6", "filter", "V6-EDGE",
        ]));
        assert_eq!(ParseTree::Rule(statement).error_count(), 1);
    }
}
