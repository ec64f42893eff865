//! Security zones and zone-pair policies

use crate::types::Prefix;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A security zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    /// Logical interfaces assigned to the zone
    pub interfaces: BTreeSet<String>,
    /// Named addresses in the zone's address book
    pub address_book: BTreeMap<String, Prefix>,
    /// Named address sets (member names reference the address book)
    pub address_sets: BTreeMap<String, BTreeSet<String>>,
    /// host-inbound-traffic system-services
    pub inbound_services: BTreeSet<String>,
    /// host-inbound-traffic protocols
    pub inbound_protocols: BTreeSet<String>,
}

impl Zone {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Resolve an address-book name (direct address or set) to prefixes.
    /// `any` resolves to the default route.
    pub fn resolve_address(&self, name: &str) -> Vec<Prefix> {
        let mut visited = BTreeSet::new();
        self.resolve_address_inner(name, &mut visited)
    }

    fn resolve_address_inner<'a>(
        &'a self,
        name: &'a str,
        visited: &mut BTreeSet<&'a str>,
    ) -> Vec<Prefix> {
        if name == "any" {
            return vec![Prefix::ZERO];
        }
        if let Some(prefix) = self.address_book.get(name) {
            return vec![*prefix];
        }
        // visited guards against member cycles between sets
        if !visited.insert(name) {
            return Vec::new();
        }
        if let Some(members) = self.address_sets.get(name) {
            let mut prefixes = Vec::new();
            for member in members {
                prefixes.extend(self.resolve_address_inner(member, visited));
            }
            return prefixes;
        }
        Vec::new()
    }
}

/// Action of a zone-pair policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecPolicyAction {
    Permit,
    Deny,
    Reject,
}

/// One policy inside a from-zone/to-zone pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityPolicy {
    pub name: String,
    /// Address-book names (`any` included) as written
    pub match_source_addresses: Vec<String>,
    pub match_destination_addresses: Vec<String>,
    /// Application names (`any`, `junos-*`, or user-defined)
    pub match_applications: Vec<String>,
    pub action: Option<SecPolicyAction>,
    /// `log` options (`session-init`, `session-close`)
    pub log: Vec<String>,
}

impl SecurityPolicy {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            match_source_addresses: Vec::new(),
            match_destination_addresses: Vec::new(),
            match_applications: Vec::new(),
            action: None,
            log: Vec::new(),
        }
    }
}

/// The ordered policies of one from-zone/to-zone pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePairPolicies {
    pub from_zone: String,
    pub to_zone: String,
    pub policies: Vec<SecurityPolicy>,
}

impl ZonePairPolicies {
    pub fn new(from_zone: &str, to_zone: &str) -> Self {
        Self {
            from_zone: from_zone.to_string(),
            to_zone: to_zone.to_string(),
            policies: Vec::new(),
        }
    }

    pub fn policy_mut(&mut self, name: &str) -> &mut SecurityPolicy {
        if let Some(index) = self.policies.iter().position(|p| p.name == name) {
            &mut self.policies[index]
        } else {
            self.policies.push(SecurityPolicy::new(name));
            self.policies.last_mut().expect("policy was just pushed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_resolution() {
        let mut zone = Zone::new("trust");
        zone.address_book
            .insert("WEB".to_string(), "10.0.5.10/32".parse().unwrap());
        zone.address_book
            .insert("DB".to_string(), "10.0.5.20/32".parse().unwrap());
        zone.address_sets.insert(
            "SERVERS".to_string(),
            ["WEB".to_string(), "DB".to_string()].into_iter().collect(),
        );

        assert_eq!(zone.resolve_address("WEB").len(), 1);
        assert_eq!(zone.resolve_address("SERVERS").len(), 2);
        assert_eq!(zone.resolve_address("any"), vec![Prefix::ZERO]);
        assert!(zone.resolve_address("MISSING").is_empty());
    }

    #[test]
    fn test_policy_order_preserved() {
        let mut pair = ZonePairPolicies::new("trust", "untrust");
        pair.policy_mut("ALLOW-WEB").action = Some(SecPolicyAction::Permit);
        pair.policy_mut("DENY-ALL").action = Some(SecPolicyAction::Deny);
        pair.policy_mut("ALLOW-WEB")
            .match_applications
            .push("junos-http".to_string());

        let names: Vec<&str> = pair.policies.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ALLOW-WEB", "DENY-ALL"]);
    }
}
