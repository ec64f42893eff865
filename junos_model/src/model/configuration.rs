//! The vendor-specific device model
//!
//! Populated by the extraction listener during the tree walk; single
//! default routing instance. Maps are ordered for deterministic JSON.

use crate::model::application::Application;
use crate::model::bgp::BgpProcess;
use crate::model::firewall::FirewallFilter;
use crate::model::interface::Interface;
use crate::model::policy::{CommunityList, PolicyStatement, PrefixList};
use crate::model::routing::RoutingSettings;
use crate::model::security::{Zone, ZonePairPolicies};
use crate::model::system::SystemSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JunosConfiguration {
    pub system: SystemSettings,
    pub interfaces: BTreeMap<String, Interface>,
    pub bgp: Option<BgpProcess>,
    pub firewall_filters: BTreeMap<String, FirewallFilter>,
    pub prefix_lists: BTreeMap<String, PrefixList>,
    pub communities: BTreeMap<String, CommunityList>,
    pub policy_statements: BTreeMap<String, PolicyStatement>,
    pub zones: BTreeMap<String, Zone>,
    /// Zone-pair policies in declaration order
    pub zone_pair_policies: Vec<ZonePairPolicies>,
    pub routing: RoutingSettings,
    pub applications: BTreeMap<String, Application>,
}

impl JunosConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hostname(&self) -> Option<&str> {
        self.system.host_name.as_deref()
    }

    pub fn interface_mut(&mut self, name: &str) -> &mut Interface {
        self.interfaces
            .entry(name.to_string())
            .or_insert_with(|| Interface::new(name))
    }

    pub fn bgp_mut(&mut self) -> &mut BgpProcess {
        self.bgp.get_or_insert_with(BgpProcess::default)
    }

    pub fn firewall_filter_mut(&mut self, name: &str) -> &mut FirewallFilter {
        self.firewall_filters
            .entry(name.to_string())
            .or_insert_with(|| FirewallFilter::new(name))
    }

    pub fn prefix_list_mut(&mut self, name: &str) -> &mut PrefixList {
        self.prefix_lists
            .entry(name.to_string())
            .or_insert_with(|| PrefixList::new(name))
    }

    pub fn community_mut(&mut self, name: &str) -> &mut CommunityList {
        self.communities
            .entry(name.to_string())
            .or_insert_with(|| CommunityList::new(name))
    }

    pub fn policy_statement_mut(&mut self, name: &str) -> &mut PolicyStatement {
        self.policy_statements
            .entry(name.to_string())
            .or_insert_with(|| PolicyStatement::new(name))
    }

    pub fn zone_mut(&mut self, name: &str) -> &mut Zone {
        self.zones
            .entry(name.to_string())
            .or_insert_with(|| Zone::new(name))
    }

    pub fn application_mut(&mut self, name: &str) -> &mut Application {
        self.applications
            .entry(name.to_string())
            .or_insert_with(|| Application::new(name))
    }

    /// Zone-pair policies for a pair, created at the end if absent
    pub fn zone_pair_mut(&mut self, from_zone: &str, to_zone: &str) -> &mut ZonePairPolicies {
        if let Some(index) = self
            .zone_pair_policies
            .iter()
            .position(|p| p.from_zone == from_zone && p.to_zone == to_zone)
        {
            &mut self.zone_pair_policies[index]
        } else {
            self.zone_pair_policies
                .push(ZonePairPolicies::new(from_zone, to_zone));
            self.zone_pair_policies
                .last_mut()
                .expect("pair was just pushed")
        }
    }

    /// The zone a logical interface is assigned to, if any
    pub fn zone_of_interface(&self, interface_name: &str) -> Option<&Zone> {
        self.zones
            .values()
            .find(|z| z.interfaces.contains(interface_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_accessors() {
        let mut config = JunosConfiguration::new();
        config.interface_mut("ge-0/0/0").mtu = Some(9000);
        config.interface_mut("ge-0/0/0").disabled = true;
        assert_eq!(config.interfaces.len(), 1);
        assert_eq!(config.interfaces["ge-0/0/0"].mtu, Some(9000));
    }

    #[test]
    fn test_zone_pair_ordering() {
        let mut config = JunosConfiguration::new();
        config.zone_pair_mut("trust", "untrust");
        config.zone_pair_mut("untrust", "trust");
        config.zone_pair_mut("trust", "untrust");
        assert_eq!(config.zone_pair_policies.len(), 2);
        assert_eq!(config.zone_pair_policies[0].from_zone, "trust");
    }

    #[test]
    fn test_zone_of_interface() {
        let mut config = JunosConfiguration::new();
        config
            .zone_mut("trust")
            .interfaces
            .insert("ge-0/0/0.0".to_string());
        assert_eq!(
            config.zone_of_interface("ge-0/0/0.0").map(|z| z.name.as_str()),
            Some("trust")
        );
        assert!(config.zone_of_interface("ge-9/9/9.0").is_none());
    }

    #[test]
    fn test_serializes_to_json() {
        let mut config = JunosConfiguration::new();
        config.system.host_name = Some("r1".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"host_name\":\"r1\""));
    }
}
