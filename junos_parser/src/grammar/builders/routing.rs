//! `routing-options` stanza builder

use super::{flag, leaf_one, unrecognized, Cursor};
use crate::grammar::rules::Rule;
use crate::grammar::tree::RuleNode;

pub(crate) fn build(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::RoutingOptions, cursor.span());

    match cursor.peek() {
        Some("router-id") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::RoRouterId, cursor));
        }
        Some("autonomous-system") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::RoAutonomousSystem, cursor));
        }
        Some("static") => {
            cursor.bump();
            let mut r#static = RuleNode::new(Rule::RoStatic, cursor.span());
            match cursor.peek() {
                Some("route") => {
                    cursor.bump();
                    let mut route = RuleNode::new(Rule::RoStaticRoute, cursor.span());
                    cursor.take_value(&mut route);
                    route_tail(cursor, &mut route);
                    r#static.push_rule(route);
                }
                _ => unrecognized(&mut r#static, cursor),
            }
            node.push_rule(r#static);
        }
        // aggregate/generate/rib are outside the modeled subset
        _ => unrecognized(&mut node, cursor),
    }

    node
}

fn route_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("next-hop") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::SrNextHop, cursor));
        }
        Some("discard") => {
            cursor.bump();
            node.push_rule(flag(Rule::SrDiscard, cursor));
        }
        Some("reject") => {
            cursor.bump();
            node.push_rule(flag(Rule::SrReject, cursor));
        }
        Some("metric") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::SrMetric, cursor));
        }
        Some("preference") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::SrPreference, cursor));
        }
        Some("tag") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::SrTag, cursor));
        }
        _ => unrecognized(node, cursor),
    }
}
