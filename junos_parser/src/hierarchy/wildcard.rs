//! Juniper group wildcard matching
//!
//! Group bodies and wildcard set lines use Junos wildcard patterns, not
//! regular expressions: `*` matches any run of characters, `?` matches a
//! single word character, and `[a-z]` / `[!abc]` bracket sets work the way
//! shells do. Patterns are translated to anchored regular expressions once
//! and cached per pattern.

use crate::logging::codes;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;

/// Wildcard translation/matching errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum WildcardError {
    #[error("Malformed wildcard pattern '{pattern}': {reason}")]
    Malformed { pattern: String, reason: String },
}

impl WildcardError {
    pub fn error_code(&self) -> crate::logging::Code {
        codes::hierarchy::BAD_WILDCARD
    }
}

/// Translate a Junos wildcard into an anchored regular expression
pub fn to_regex(wildcard: &str) -> Result<String, WildcardError> {
    let mut out = String::with_capacity(wildcard.len() + 8);
    out.push('^');

    let mut chars = wildcard.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' => out.push_str(".*"),
            '?' => out.push_str("\\w"),
            '[' => {
                out.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    out.push('^');
                }
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    match c {
                        '-' => out.push('-'),
                        c if c.is_alphanumeric() || c == '_' || c == '.' || c == '/' => {
                            out.push(c);
                        }
                        c => {
                            return Err(WildcardError::Malformed {
                                pattern: wildcard.to_string(),
                                reason: format!("unexpected '{}' inside bracket set", c),
                            });
                        }
                    }
                }
                if !closed {
                    return Err(WildcardError::Malformed {
                        pattern: wildcard.to_string(),
                        reason: "unclosed bracket set".to_string(),
                    });
                }
                out.push(']');
            }
            ']' => {
                return Err(WildcardError::Malformed {
                    pattern: wildcard.to_string(),
                    reason: "unmatched ']'".to_string(),
                });
            }
            c => out.push_str(&regex::escape(&c.to_string())),
        }
    }

    out.push('$');
    Ok(out)
}

/// Wildcard matcher with a per-pattern compiled regex cache
#[derive(Debug, Default)]
pub struct WildcardMatcher {
    cache: RefCell<HashMap<String, Option<Regex>>>,
}

impl WildcardMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate` matches the Junos wildcard `wildcard`.
    /// Malformed patterns match nothing.
    pub fn matches(&self, candidate: &str, wildcard: &str) -> bool {
        let mut cache = self.cache.borrow_mut();
        let compiled = cache.entry(wildcard.to_string()).or_insert_with(|| {
            to_regex(wildcard)
                .ok()
                .and_then(|pattern| Regex::new(&pattern).ok())
        });
        match compiled {
            Some(re) => re.is_match(candidate),
            None => false,
        }
    }

    /// Validate a pattern, returning the translation error if malformed
    pub fn validate(&self, wildcard: &str) -> Result<(), WildcardError> {
        to_regex(wildcard).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(candidate: &str, wildcard: &str) -> bool {
        WildcardMatcher::new().matches(candidate, wildcard)
    }

    #[test]
    fn test_star_matches_any_run() {
        assert!(matches("ge-0/0/0", "ge-*"));
        assert!(matches("ge-", "ge-*"));
        assert!(!matches("xe-0/0/0", "ge-*"));
    }

    #[test]
    fn test_question_mark_single_char() {
        assert!(matches("ge-0", "ge-?"));
        assert!(!matches("ge-00", "ge-?"));
    }

    #[test]
    fn test_bracket_sets() {
        assert!(matches("ge-0/0/1", "ge-0/0/[0-3]"));
        assert!(!matches("ge-0/0/7", "ge-0/0/[0-3]"));
        assert!(matches("b", "[!a]"));
        assert!(!matches("a", "[!a]"));
    }

    #[test]
    fn test_literal_dots_not_regex_dots() {
        assert!(matches("10.0.0.1", "10.0.0.1"));
        assert!(!matches("10x0y0z1", "10.0.0.1"));
    }

    #[test]
    fn test_full_anchor() {
        assert!(!matches("xge-0", "ge-*"));
    }

    #[test]
    fn test_malformed_patterns() {
        assert!(to_regex("[abc").is_err());
        assert!(to_regex("a]b").is_err());
        assert!(matches("anything", "[abc") == false);
    }

    #[test]
    fn test_cache_reuse() {
        let matcher = WildcardMatcher::new();
        assert!(matcher.matches("ge-0", "ge-*"));
        assert!(matcher.matches("ge-1", "ge-*"));
        assert_eq!(matcher.cache.borrow().len(), 1);
    }
}
