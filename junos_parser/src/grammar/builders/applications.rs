//! `applications` stanza builder

use super::{leaf_one, unrecognized, Cursor};
use crate::grammar::rules::Rule;
use crate::grammar::tree::RuleNode;

pub(crate) fn build(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::Applications, cursor.span());

    match cursor.peek() {
        Some("application") => {
            cursor.bump();
            let mut app = RuleNode::new(Rule::Application, cursor.span());
            cursor.take_value(&mut app);
            app_tail(cursor, &mut app);
            node.push_rule(app);
        }
        // application-set grouping is outside the modeled subset
        _ => unrecognized(&mut node, cursor),
    }

    node
}

fn app_tail(cursor: &mut Cursor, node: &mut RuleNode) {
    match cursor.peek() {
        None => {}
        Some("protocol") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::AppProtocol, cursor));
        }
        Some("source-port") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::AppSourcePort, cursor));
        }
        Some("destination-port") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::AppDestinationPort, cursor));
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
    fn test_application_destination_port() {
        let statement = build_statement(&flat_line(&[
            "applications", "application", "APP-SQL", "destination-port", "1433",
        ]));
        let app = statement.find_descendant(Rule::Application).unwrap();
        assert_eq!(app.first_terminal_text(), Some("APP-SQL"));
        let port = app.find_rule(Rule::AppDestinationPort).unwrap();
        assert_eq!(port.first_terminal_text(), Some("1433"));
    }

    #[test]
    fn test_application_protocol() {
        let statement = build_statement(&flat_line(&[
            "applications", "application", "APP-SQL", "protocol", "tcp",
        ]));
        assert!(statement.find_descendant(Rule::AppProtocol).is_some());
    }

    #[test]
    fn test_application_set_unmodeled() {
        let statement = build_statement(&flat_line(&[
            "applications", "application-set", "DB-APPS", "application", "APP-SQL",
        ]));
        assert_eq!(ParseTree::Rule(statement).error_count(), 1);
    }
}
