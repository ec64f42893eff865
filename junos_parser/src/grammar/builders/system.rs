//! `system` stanza builder

use super::{leaf, leaf_one, unrecognized, Cursor};
use crate::grammar::rules::Rule;
use crate::grammar::tree::RuleNode;

pub(crate) fn build(cursor: &mut Cursor) -> RuleNode {
    let mut node = RuleNode::new(Rule::System, cursor.span());

    match cursor.peek() {
        Some("host-name") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::SysHostName, cursor));
        }
        Some("domain-name") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::SysDomainName, cursor));
        }
        Some("name-server") => {
            cursor.bump();
            node.push_rule(leaf_one(Rule::SysNameServer, cursor));
        }
        Some("ntp") => {
            cursor.bump();
            match cursor.peek() {
                Some("server") => {
                    cursor.bump();
                    // trailing options (version, prefer) ride along as values
                    node.push_rule(leaf(Rule::SysNtpServer, cursor));
                }
                _ => unrecognized(&mut node, cursor),
            }
        }
        Some("syslog") => {
            cursor.bump();
            match cursor.peek() {
                Some("host") => {
                    cursor.bump();
                    // host name plus facility/severity words
                    node.push_rule(leaf(Rule::SysSyslogHost, cursor));
                }
                _ => unrecognized(&mut node, cursor),
            }
        }
        _ => unrecognized(&mut node, cursor),
    }

    node
}

#[cfg(test)]
mod tests {
    use crate::grammar::builders::build_statement;
    use crate::grammar::builders::tests::flat_line;
    use crate::grammar::rules::Rule;
    use crate::grammar::tree::ParseTree;

    #[test]
    fn test_host_name() {
        let statement = build_statement(&flat_line(&["system", "host-name", "border-r1"]));
        let node = statement.find_descendant(Rule::SysHostName).unwrap();
        assert_eq!(node.first_terminal_text(), Some("border-r1"));
    }

    #[test]
    fn test_ntp_server() {
        let statement = build_statement(&flat_line(&["system", "ntp", "server", "10.0.0.10"]));
        let node = statement.find_descendant(Rule::SysNtpServer).unwrap();
        assert_eq!(node.first_terminal_text(), Some("10.0.0.10"));
    }

    #[test]
    fn test_syslog_host_with_facility() {
        let statement = build_statement(&flat_line(&[
            "system", "syslog", "host", "10.0.0.99", "any", "notice",
        ]));
        let node = statement.find_descendant(Rule::SysSyslogHost).unwrap();
        assert_eq!(node.terminal_texts(), vec!["10.0.0.99", "any", "notice"]);
    }

    #[test]
    fn test_unmodeled_system_statement() {
        let statement = build_statement(&flat_line(&["system", "services", "ssh"]));
        assert_eq!(ParseTree::Rule(statement).error_count(), 1);
    }

    #[test]
    fn test_host_name_trailing_junk_is_error() {
        let statement =
            build_statement(&flat_line(&["system", "host-name", "r1", "surprise"]));
        assert_eq!(ParseTree::Rule(statement).error_count(), 1);
    }
}
