//! `policy-options` stanza builder

use super::{flag, leaf, leaf_one, unrecognized, Cursor};
use crate::grammar::rules::Rule;
use crate::grammar::tree::RuleNode;

pub(crate) fn build(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::PolicyOptions, cursor.span());

    match cursor.peek() {
        Some("prefix-list") => {
            cursor.bump();
            let mut list = RuleNode::new(Rule::PrefixList, cursor.span());
            cursor.take_value(&mut list);
            match cursor.peek() {
                None => {}
                // apply-path is resolved during preprocessing; one
                // surviving here was malformed
                Some("apply-path") => unrecognized(&mut list, cursor),
                Some(_) => {
                    list.push_rule(leaf_one(Rule::PrefixListEntry, cursor));
                }
            }
            node.push_rule(list);
        }
        Some("community") => {
            cursor.bump();
            let mut community = RuleNode::new(Rule::Community, cursor.span());
            cursor.take_value(&mut community);
            match cursor.peek() {
                None => {}
                Some("members") => {
                    cursor.bump();
                    community.push_rule(leaf(Rule::CommunityMembers, cursor));
                }
                _ => unrecognized(&mut community, cursor),
            }
            node.push_rule(community);
        }
        Some("policy-statement") => {
            cursor.bump();
            let mut policy = RuleNode::new(Rule::PolicyStatement, cursor.span());
            cursor.take_value(&mut policy);
            match cursor.peek() {
                None => {}
                Some("term") => {
                    cursor.bump();
                    let mut term = RuleNode::new(Rule::PsTerm, cursor.span());
                    cursor.take_value(&mut term);
                    term_tail(cursor, &mut term);
                    policy.push_rule(term);
                }
                // from/then directly on the policy: anonymous term
                Some("from") | Some("then") => term_tail(cursor, &mut policy),
                _ => unrecognized(&mut policy, cursor),
            }
            node.push_rule(policy);
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
            let mut from = RuleNode::new(Rule::PsFrom, cursor.span());
            from_tail(cursor, &mut from);
            node.push_rule(from);
        }
        Some("then") => {
            cursor.bump();
            let mut then = RuleNode::new(Rule::PsThen, cursor.span());
            then_tail(cursor, &mut then);
            node.push_rule(then);
        }
        _ => unrecognized(node, cursor),
    }
}

fn from_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("protocol") => {
            cursor.bump();
            node.push_rule(leaf(Rule::PsFromProtocol, cursor));
        }
        Some("prefix-list") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::PsFromPrefixList, cursor));
        }
        Some("community") => {
            cursor.bump();
            node.push_rule(leaf(Rule::PsFromCommunity, cursor));
        }
        Some("neighbor") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::PsFromNeighbor, cursor));
        }
        Some("route-filter") => {
            cursor.bump();
            let mut route_filter = RuleNode::new(Rule::PsFromRouteFilter, cursor.span());
            cursor.take_value(&mut route_filter);
            route_filter_modifier(cursor, &mut route_filter);
            node.push_rule(route_filter);
        }
        _ => unrecognized(node, cursor),
    }
}

fn route_filter_modifier(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        // bare route-filter defaults to exact match downstream
        None => {}
        Some("exact") => {
            cursor.bump();
            node.push_rule(flag(Rule::RfExact, cursor));
        }
        Some("longer") => {
            cursor.bump();
            node.push_rule(flag(Rule::RfLonger, cursor));
        }
        Some("orlonger") => {
            cursor.bump();
            node.push_rule(flag(Rule::RfOrlonger, cursor));
        }
        Some("upto") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::RfUpto, cursor));
        }
        Some("prefix-length-range") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::RfPrefixLengthRange, cursor));
        }
        Some("through") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::RfThrough, cursor));
        }
        _ => unrecognized(node, cursor),
    }
}

fn then_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("accept") => {
            cursor.bump();
            node.push_rule(flag(Rule::PsThenAccept, cursor));
        }
        Some("reject") => {
            cursor.bump();
            node.push_rule(flag(Rule::PsThenReject, cursor));
        }
        Some("next") => {
            cursor.bump();
            match cursor.peek() {
                Some("term") => {
                    cursor.bump();
                    node.push_rule(flag(Rule::PsThenNextTerm, cursor));
                }
                Some("policy") => {
                    cursor.bump();
                    node.push_rule(flag(Rule::PsThenNextPolicy, cursor));
                }
                _ => unrecognized(node, cursor),
            }
        }
        Some("metric") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::PsThenMetric, cursor));
        }
        Some("local-preference") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::PsThenLocalPreference, cursor));
        }
        Some("community") => {
            cursor.bump();
            match cursor.peek() {
                Some("add") => {
                    cursor.bump();
                    node.push_rule(leaf_one(Rule::PsThenCommunityAdd, cursor));
                }
                Some("set") => {
                    cursor.bump();
                    node.push_rule(leaf_one(Rule::PsThenCommunitySet, cursor));
                }
                Some("delete") => {
                    cursor.bump();
                    node.push_rule(leaf_one(Rule::PsThenCommunityDelete, cursor));
                }
                _ => unrecognized(node, cursor),
            }
        }
        _ => unrecognized(node, cursor),
    }
}
