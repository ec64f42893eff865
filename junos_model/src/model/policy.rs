//! Routing policy model: prefix lists, communities, policy statements

use crate::types::{Ip, Prefix};
use serde::{Deserialize, Serialize};

/// A named prefix list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefixList {
    pub name: String,
    pub prefixes: Vec<Prefix>,
}

impl PrefixList {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            prefixes: Vec::new(),
        }
    }

    /// Insert keeping declaration order, dropping duplicates
    pub fn add_prefix(&mut self, prefix: Prefix) {
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }
}

/// A named community list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityList {
    pub name: String,
    /// Member expressions as written (`65001:100`, `no-export`, regexes)
    pub members: Vec<String>,
}

impl CommunityList {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
        }
    }
}

/// Protocol selector in a `from` condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutingProtocol {
    Bgp,
    Static,
    Direct,
    Local,
    Aggregate,
    Ospf,
}

impl RoutingProtocol {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "bgp" => Some(Self::Bgp),
            "static" => Some(Self::Static),
            "direct" => Some(Self::Direct),
            "local" => Some(Self::Local),
            "aggregate" => Some(Self::Aggregate),
            "ospf" => Some(Self::Ospf),
            _ => None,
        }
    }
}

/// Route-filter match mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteFilterModifier {
    Exact,
    Longer,
    OrLonger,
    Upto(u8),
    PrefixLengthRange(u8, u8),
    Through(Prefix),
}

/// One route-filter line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteFilterLine {
    pub prefix: Prefix,
    pub modifier: RouteFilterModifier,
}

impl RouteFilterLine {
    /// Whether a candidate prefix falls within this line
    pub fn matches(&self, candidate: &Prefix) -> bool {
        match self.modifier {
            RouteFilterModifier::Exact => candidate == &self.prefix,
            RouteFilterModifier::Longer => {
                self.prefix.contains(candidate) && candidate.length() > self.prefix.length()
            }
            RouteFilterModifier::OrLonger => self.prefix.contains(candidate),
            RouteFilterModifier::Upto(max) => {
                self.prefix.contains(candidate) && candidate.length() <= max
            }
            RouteFilterModifier::PrefixLengthRange(min, max) => {
                self.prefix.contains(candidate)
                    && candidate.length() >= min
                    && candidate.length() <= max
            }
            RouteFilterModifier::Through(end) => {
                // route-filter a through b: prefixes along the chain from a
                // to b; approximated as contained-by-a and containing-b
                self.prefix.contains(candidate) && candidate.contains(&end)
            }
        }
    }
}

/// Match conditions of one term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PsFrom {
    pub protocols: Vec<RoutingProtocol>,
    pub prefix_lists: Vec<String>,
    pub communities: Vec<String>,
    pub neighbors: Vec<Ip>,
    pub route_filters: Vec<RouteFilterLine>,
}

/// Actions of one term, in configuration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PsAction {
    Accept,
    Reject,
    NextTerm,
    NextPolicy,
    Metric(u32),
    LocalPreference(u32),
    CommunityAdd(String),
    CommunitySet(String),
    CommunityDelete(String),
}

impl PsAction {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accept | Self::Reject)
    }
}

/// One term; the anonymous term of a policy has an empty name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsTerm {
    pub name: String,
    pub from: PsFrom,
    pub then: Vec<PsAction>,
}

impl PsTerm {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            from: PsFrom::default(),
            then: Vec::new(),
        }
    }
}

/// A policy statement: ordered terms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyStatement {
    pub name: String,
    pub terms: Vec<PsTerm>,
}

impl PolicyStatement {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            terms: Vec::new(),
        }
    }

    pub fn term_mut(&mut self, name: &str) -> &mut PsTerm {
        if let Some(index) = self.terms.iter().position(|t| t.name == name) {
            &mut self.terms[index]
        } else {
            self.terms.push(PsTerm::new(name));
            self.terms.last_mut().expect("term was just pushed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> Prefix {
        s.parse().unwrap()
    }

    #[test]
    fn test_prefix_list_dedup() {
        let mut list = PrefixList::new("LOCALS");
        list.add_prefix(prefix("10.0.0.0/24"));
        list.add_prefix(prefix("10.0.0.0/24"));
        assert_eq!(list.prefixes.len(), 1);
    }

    #[test]
    fn test_route_filter_exact() {
        let line = RouteFilterLine {
            prefix: prefix("10.0.0.0/8"),
            modifier: RouteFilterModifier::Exact,
        };
        assert!(line.matches(&prefix("10.0.0.0/8")));
        assert!(!line.matches(&prefix("10.1.0.0/16")));
    }

    #[test]
    fn test_route_filter_orlonger_and_upto() {
        let orlonger = RouteFilterLine {
            prefix: prefix("10.0.0.0/8"),
            modifier: RouteFilterModifier::OrLonger,
        };
        assert!(orlonger.matches(&prefix("10.0.0.0/8")));
        assert!(orlonger.matches(&prefix("10.250.0.0/16")));
        assert!(!orlonger.matches(&prefix("11.0.0.0/8")));

        let upto = RouteFilterLine {
            prefix: prefix("10.0.0.0/8"),
            modifier: RouteFilterModifier::Upto(16),
        };
        assert!(upto.matches(&prefix("10.3.0.0/16")));
        assert!(!upto.matches(&prefix("10.3.3.0/24")));
    }

    #[test]
    fn test_term_order_preserved() {
        let mut policy = PolicyStatement::new("EXPORT");
        policy.term_mut("10").then.push(PsAction::Accept);
        policy.term_mut("20").then.push(PsAction::Reject);
        let names: Vec<&str> = policy.terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["10", "20"]);
    }
}
