//! `security` stanza builder (zones and zone-pair policies)

use super::{flag, leaf, leaf_one, unrecognized, Cursor};
use crate::grammar::rules::Rule;
use crate::grammar::tree::RuleNode;

pub(crate) fn build(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::Security, cursor.span());

    match cursor.peek() {
        Some("zones") => {
            cursor.bump();
            let mut zones = RuleNode::new(Rule::SecZones, cursor.span());
            match cursor.peek() {
                Some("security-zone") => {
                    cursor.bump();
                    let mut zone = RuleNode::new(Rule::SecZone, cursor.span());
                    cursor.take_value(&mut zone);
                    zone_tail(cursor, &mut zone);
                    zones.push_rule(zone);
                }
                _ => unrecognized(&mut zones, cursor),
            }
            node.push_rule(zones);
        }
        Some("policies") => {
            cursor.bump();
            let mut policies = RuleNode::new(Rule::SecPolicies, cursor.span());
            policies_tail(cursor, &mut policies);
            node.push_rule(policies);
        }
        // ike/ipsec/nat/screen are outside the modeled subset
        _ => unrecognized(&mut node, cursor),
    }

    node
}

fn zone_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("interfaces") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::ZoneInterfaces, cursor));
        }
        Some("address-book") => {
            cursor.bump();
            let mut book = RuleNode::new(Rule::ZoneAddressBook, cursor.span());
            match cursor.peek() {
                Some("address") => {
                    cursor.bump();
                    // name then prefix
                    book.push_rule(leaf(Rule::ZoneAbAddress, cursor));
                }
                Some("address-set") => {
                    cursor.bump();
                    let mut set = RuleNode::new(Rule::ZoneAbAddressSet, cursor.span());
                    cursor.take_value(&mut set);
                    match cursor.peek() {
                        None => {}
                        Some("address") => {
                            cursor.bump();
                            cursor.take_value(&mut set);
                            cursor.error_rest(&mut set);
                        }
                        _ => unrecognized(&mut set, cursor),
                    }
                    book.push_rule(set);
                }
                _ => unrecognized(&mut book, cursor),
            }
            node.push_rule(book);
        }
        Some("host-inbound-traffic") => {
            cursor.bump();
            let mut hit = RuleNode::new(Rule::ZoneHostInboundTraffic, cursor.span());
            match cursor.peek() {
                Some("system-services") => {
                    cursor.bump();
                    hit.push_rule(leaf_one(Rule::ZoneHitSystemServices, cursor));
                }
                Some("protocols") => {
                    cursor.bump();
                    hit.push_rule(leaf_one(Rule::ZoneHitProtocols, cursor));
                }
                _ => unrecognized(&mut hit, cursor),
            }
            node.push_rule(hit);
        }
        _ => unrecognized(node, cursor),
    }
}

fn policies_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        Some("from-zone") => {
            cursor.bump();
            let mut pair = RuleNode::new(Rule::SecPoliciesFromTo, cursor.span());
            cursor.take_value(&mut pair);
            match cursor.peek() {
                Some("to-zone") => {
                    cursor.bump();
                    cursor.take_value(&mut pair);
                    match cursor.peek() {
                        Some("policy") => {
                            cursor.bump();
                            let mut policy = RuleNode::new(Rule::SecPolicy, cursor.span());
                            cursor.take_value(&mut policy);
                            policy_tail(cursor, &mut policy);
                            pair.push_rule(policy);
                        }
                        _ => unrecognized(&mut pair, cursor),
                    }
                }
                _ => unrecognized(&mut pair, cursor),
            }
            node.push_rule(pair);
        }
        _ => unrecognized(node, cursor),
    }
}

fn policy_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("match") => {
            cursor.bump();
            let mut m = RuleNode::new(Rule::SpMatch, cursor.span());
            match cursor.peek() {
                Some("source-address") => {
                    cursor.bump();
                    m.push_rule(leaf(Rule::SpMatchSourceAddress, cursor));
                }
                Some("destination-address") => {
                    cursor.bump();
                    m.push_rule(leaf(Rule::SpMatchDestinationAddress, cursor));
                }
                Some("application") => {
                    cursor.bump();
                    m.push_rule(leaf(Rule::SpMatchApplication, cursor));
                }
                _ => unrecognized(&mut m, cursor),
            }
            node.push_rule(m);
        }
        Some("then") => {
            cursor.bump();
            let mut then = RuleNode::new(Rule::SpThen, cursor.span());
            match cursor.peek() {
                Some("permit") => {
                    cursor.bump();
                    then.push_rule(flag(Rule::SpThenPermit, cursor));
                }
                Some("deny") => {
                    cursor.bump();
                    then.push_rule(flag(Rule::SpThenDeny, cursor));
                }
                Some("reject") => {
                    cursor.bump();
                    then.push_rule(flag(Rule::SpThenReject, cursor));
                }
                Some("log") => {
                    cursor.bump();
                    // session-init / session-close words ride along
                    then.push_rule(leaf(Rule::SpThenLog, cursor));
                }
                _ => unrecognized(&mut then, cursor),
            }
            node.push_rule(then);
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
    fn test_zone_interfaces() {
        let statement = build_statement(&flat_line(&[
            "security", "zones", "security-zone", "trust", "interfaces", "ge-0/0/0.0",
        ]));
        let zone = statement.find_descendant(Rule::SecZone).unwrap();
        assert_eq!(zone.first_terminal_text(), Some("trust"));
        let interfaces = zone.find_rule(Rule::ZoneInterfaces).unwrap();
        assert_eq!(interfaces.first_terminal_text(), Some("ge-0/0/0.0"));
    }

    #[test]
    fn test_address_book_address() {
        let statement = build_statement(&flat_line(&[
            "security", "zones", "security-zone", "trust", "address-book", "address",
            "WEB-SERVER", "10.0.5.10/32",
        ]));
        let address = statement.find_descendant(Rule::ZoneAbAddress).unwrap();
        assert_eq!(address.terminal_texts(), vec!["WEB-SERVER", "10.0.5.10/32"]);
    }

    #[test]
    fn test_address_set_member() {
        let statement = build_statement(&flat_line(&[
            "security", "zones", "security-zone", "trust", "address-book", "address-set",
            "SERVERS", "address", "WEB-SERVER",
        ]));
        let set = statement.find_descendant(Rule::ZoneAbAddressSet).unwrap();
        assert_eq!(set.terminal_texts(), vec!["SERVERS", "WEB-SERVER"]);
    }

    #[test]
    fn test_host_inbound_system_services() {
        let statement = build_statement(&flat_line(&[
            "security", "zones", "security-zone", "trust", "host-inbound-traffic",
            "system-services", "ssh",
        ]));
        let services = statement
            .find_descendant(Rule::ZoneHitSystemServices)
            .unwrap();
        assert_eq!(services.first_terminal_text(), Some("ssh"));
    }

    #[test]
    fn test_zone_pair_policy() {
        let statement = build_statement(&flat_line(&[
            "security", "policies", "from-zone", "trust", "to-zone", "untrust", "policy",
            "ALLOW-WEB", "match", "source-address", "any",
        ]));
        let pair = statement.find_descendant(Rule::SecPoliciesFromTo).unwrap();
        assert_eq!(pair.terminal_texts(), vec!["trust", "untrust"]);
        let policy = pair.find_rule(Rule::SecPolicy).unwrap();
        assert_eq!(policy.first_terminal_text(), Some("ALLOW-WEB"));
        assert!(policy.find_descendant(Rule::SpMatchSourceAddress).is_some());
    }

    #[test]
    fn test_policy_then_permit() {
        let statement = build_statement(&flat_line(&[
            "security", "policies", "from-zone", "trust", "to-zone", "untrust", "policy",
            "ALLOW-WEB", "then", "permit",
        ]));
        assert!(statement.find_descendant(Rule::SpThenPermit).is_some());
        assert_eq!(ParseTree::Rule(statement).error_count(), 0);
    }

    #[test]
    fn test_nat_is_unmodeled() {
        let statement = build_statement(&flat_line(&[
            "security", "nat", "source", "rule-set", "TRUST-TO-UNTRUST",
        ]));
        assert_eq!(ParseTree::Rule(statement).error_count(), 1);
    }
}
