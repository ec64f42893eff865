//! Firewall filter model

use crate::types::{PortRange, Prefix};
use serde::{Deserialize, Serialize};

/// IP protocol in a match condition: a well-known name or a raw number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpProtocol {
    Icmp,
    Igmp,
    Tcp,
    Udp,
    Gre,
    Esp,
    Ah,
    Ospf,
    Pim,
    Number(u8),
}

impl IpProtocol {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "icmp" => Some(Self::Icmp),
            "igmp" => Some(Self::Igmp),
            "tcp" => Some(Self::Tcp),
            "udp" => Some(Self::Udp),
            "gre" => Some(Self::Gre),
            "esp" => Some(Self::Esp),
            "ah" => Some(Self::Ah),
            "ospf" => Some(Self::Ospf),
            "pim" => Some(Self::Pim),
            _ => word.parse::<u8>().ok().map(Self::Number),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::Icmp => 1,
            Self::Igmp => 2,
            Self::Tcp => 6,
            Self::Udp => 17,
            Self::Gre => 47,
            Self::Esp => 50,
            Self::Ah => 51,
            Self::Ospf => 89,
            Self::Pim => 103,
            Self::Number(n) => n,
        }
    }
}

/// Match conditions of one term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FwFrom {
    pub source_addresses: Vec<Prefix>,
    pub destination_addresses: Vec<Prefix>,
    pub source_ports: Vec<PortRange>,
    pub destination_ports: Vec<PortRange>,
    /// `port` matches either direction
    pub ports: Vec<PortRange>,
    pub protocols: Vec<IpProtocol>,
    pub icmp_types: Vec<u8>,
    pub tcp_established: bool,
    pub source_prefix_lists: Vec<String>,
    pub destination_prefix_lists: Vec<String>,
}

impl FwFrom {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Actions of one term, in configuration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FwAction {
    Accept,
    Discard,
    Reject,
    NextTerm,
    Log,
    Count(String),
}

impl FwAction {
    /// Whether this action terminates evaluation of the filter
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accept | Self::Discard | Self::Reject)
    }
}

/// One term of a filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FwTerm {
    pub name: String,
    pub from: FwFrom,
    pub then: Vec<FwAction>,
}

impl FwTerm {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            from: FwFrom::default(),
            then: Vec::new(),
        }
    }
}

/// A firewall filter: ordered terms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallFilter {
    pub name: String,
    pub terms: Vec<FwTerm>,
}

impl FirewallFilter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            terms: Vec::new(),
        }
    }

    /// Term by name, created at the end of the filter if absent
    /// (flat lines repeat the term name; order of first mention wins)
    pub fn term_mut(&mut self, name: &str) -> &mut FwTerm {
        if let Some(index) = self.terms.iter().position(|t| t.name == name) {
            &mut self.terms[index]
        } else {
            self.terms.push(FwTerm::new(name));
            self.terms.last_mut().expect("term was just pushed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_order_is_first_mention() {
        let mut filter = FirewallFilter::new("EDGE-IN");
        filter.term_mut("B").then.push(FwAction::Discard);
        filter.term_mut("A").then.push(FwAction::Accept);
        filter.term_mut("B").from.tcp_established = true;

        let names: Vec<&str> = filter.terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(filter.terms[0].from.tcp_established);
    }

    #[test]
    fn test_protocol_parse() {
        assert_eq!(IpProtocol::parse("tcp"), Some(IpProtocol::Tcp));
        assert_eq!(IpProtocol::parse("89"), Some(IpProtocol::Number(89)));
        assert_eq!(IpProtocol::parse("banana"), None);
        assert_eq!(IpProtocol::Tcp.number(), 6);
    }

    #[test]
    fn test_terminal_actions() {
        assert!(FwAction::Discard.is_terminal());
        assert!(!FwAction::Log.is_terminal());
        assert!(!FwAction::Count("c".to_string()).is_terminal());
    }
}
