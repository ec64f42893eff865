//! BGP model with Junos field inheritance
//!
//! Junos resolves BGP attributes through three levels: process, group,
//! neighbor. A neighbor inherits every attribute it does not set itself
//! from its group, a group from the process. Inheritance is applied once,
//! after extraction finishes.

use crate::types::Ip;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `type internal` / `type external`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BgpGroupType {
    Internal,
    External,
}

impl BgpGroupType {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "internal" => Some(Self::Internal),
            "external" => Some(Self::External),
            _ => None,
        }
    }
}

/// The inheritable attribute set shared by process, group and neighbor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BgpSettings {
    pub group_type: Option<BgpGroupType>,
    pub description: Option<String>,
    pub local_address: Option<Ip>,
    pub local_as: Option<u32>,
    pub peer_as: Option<u32>,
    pub multihop: bool,
    pub multihop_ttl: Option<u8>,
    pub multipath: bool,
    pub multipath_multiple_as: bool,
    pub cluster_id: Option<Ip>,
    pub import_policies: Vec<String>,
    pub export_policies: Vec<String>,
    pub remove_private: bool,
}

impl BgpSettings {
    /// Fill every unset attribute from `parent`. Boolean flags combine
    /// with or: a flag set anywhere up the chain stays set.
    pub fn inherit_unset_from(&mut self, parent: &BgpSettings) {
        if self.group_type.is_none() {
            self.group_type = parent.group_type;
        }
        if self.description.is_none() {
            self.description = parent.description.clone();
        }
        if self.local_address.is_none() {
            self.local_address = parent.local_address;
        }
        if self.local_as.is_none() {
            self.local_as = parent.local_as;
        }
        if self.peer_as.is_none() {
            self.peer_as = parent.peer_as;
        }
        self.multihop |= parent.multihop;
        if self.multihop_ttl.is_none() {
            self.multihop_ttl = parent.multihop_ttl;
        }
        self.multipath |= parent.multipath;
        self.multipath_multiple_as |= parent.multipath_multiple_as;
        if self.cluster_id.is_none() {
            self.cluster_id = parent.cluster_id;
        }
        if self.import_policies.is_empty() {
            self.import_policies = parent.import_policies.clone();
        }
        if self.export_policies.is_empty() {
            self.export_policies = parent.export_policies.clone();
        }
        self.remove_private |= parent.remove_private;
    }
}

/// One configured neighbor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BgpNeighbor {
    pub address: Ip,
    pub settings: BgpSettings,
}

impl BgpNeighbor {
    pub fn new(address: Ip) -> Self {
        Self {
            address,
            settings: BgpSettings::default(),
        }
    }
}

/// A named peer group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BgpGroup {
    pub name: String,
    pub settings: BgpSettings,
    pub neighbors: BTreeMap<Ip, BgpNeighbor>,
}

impl BgpGroup {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            settings: BgpSettings::default(),
            neighbors: BTreeMap::new(),
        }
    }

    pub fn neighbor_mut(&mut self, address: Ip) -> &mut BgpNeighbor {
        self.neighbors
            .entry(address)
            .or_insert_with(|| BgpNeighbor::new(address))
    }
}

/// The BGP process: process-level settings plus groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BgpProcess {
    pub settings: BgpSettings,
    pub groups: BTreeMap<String, BgpGroup>,
}

impl BgpProcess {
    pub fn group_mut(&mut self, name: &str) -> &mut BgpGroup {
        self.groups
            .entry(name.to_string())
            .or_insert_with(|| BgpGroup::new(name))
    }

    /// Resolve inheritance: group <- process, neighbor <- group
    pub fn apply_inheritance(&mut self) {
        for group in self.groups.values_mut() {
            group.settings.inherit_unset_from(&self.settings);
            for neighbor in group.neighbors.values_mut() {
                neighbor.settings.inherit_unset_from(&group.settings);
            }
        }
    }

    /// Total configured neighbors across groups
    pub fn neighbor_count(&self) -> usize {
        self.groups.values().map(|g| g.neighbors.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_inherits_from_group_and_process() {
        let mut process = BgpProcess::default();
        process.settings.local_as = Some(65001);

        let group = process.group_mut("EBGP");
        group.settings.group_type = Some(BgpGroupType::External);
        group.settings.peer_as = Some(65002);
        group.neighbor_mut("10.0.0.2".parse().unwrap());

        process.apply_inheritance();

        let neighbor = &process.groups["EBGP"].neighbors[&"10.0.0.2".parse::<Ip>().unwrap()];
        assert_eq!(neighbor.settings.local_as, Some(65001));
        assert_eq!(neighbor.settings.peer_as, Some(65002));
        assert_eq!(neighbor.settings.group_type, Some(BgpGroupType::External));
    }

    #[test]
    fn test_neighbor_overrides_win() {
        let mut process = BgpProcess::default();
        let group = process.group_mut("EBGP");
        group.settings.peer_as = Some(65002);
        let neighbor = group.neighbor_mut("10.0.0.2".parse().unwrap());
        neighbor.settings.peer_as = Some(65099);

        process.apply_inheritance();

        let neighbor = &process.groups["EBGP"].neighbors[&"10.0.0.2".parse::<Ip>().unwrap()];
        assert_eq!(neighbor.settings.peer_as, Some(65099));
    }

    #[test]
    fn test_flag_inheritance_is_sticky() {
        let mut process = BgpProcess::default();
        process.settings.multipath = true;
        process.group_mut("IBGP");

        process.apply_inheritance();
        assert!(process.groups["IBGP"].settings.multipath);
    }

    #[test]
    fn test_import_policies_inherit_only_when_empty() {
        let mut process = BgpProcess::default();
        process.settings.import_policies = vec!["PROCESS-IN".to_string()];

        let group = process.group_mut("A");
        group.settings.import_policies = vec!["GROUP-IN".to_string()];
        process.group_mut("B");

        process.apply_inheritance();
        assert_eq!(process.groups["A"].settings.import_policies, vec!["GROUP-IN"]);
        assert_eq!(
            process.groups["B"].settings.import_policies,
            vec!["PROCESS-IN"]
        );
    }
}
