//! Interface model

use crate::types::Prefix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A physical or aggregate interface with its logical units
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub disabled: bool,
    pub description: Option<String>,
    pub mtu: Option<u32>,
    pub units: BTreeMap<u32, Unit>,
}

impl Interface {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn unit_mut(&mut self, number: u32) -> &mut Unit {
        self.units.entry(number).or_insert_with(|| Unit {
            number,
            ..Default::default()
        })
    }

    /// Logical interface name (`ge-0/0/0.0`) for a unit
    pub fn unit_name(&self, number: u32) -> String {
        format!("{}.{}", self.name, number)
    }
}

/// A logical unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub number: u32,
    pub disabled: bool,
    pub description: Option<String>,
    pub family_inet: Option<FamilyInet>,
    /// `family inet6` was configured; not modeled beyond presence
    pub family_inet6_present: bool,
}

impl Unit {
    pub fn family_inet_mut(&mut self) -> &mut FamilyInet {
        self.family_inet.get_or_insert_with(FamilyInet::default)
    }
}

/// IPv4 addressing and filters on a unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyInet {
    pub addresses: Vec<InterfaceAddress>,
    pub input_filter: Option<String>,
    pub output_filter: Option<String>,
}

/// One address with its Junos flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceAddress {
    pub prefix: Prefix,
    pub primary: bool,
    pub preferred: bool,
}

impl InterfaceAddress {
    pub fn new(prefix: Prefix) -> Self {
        Self {
            prefix,
            primary: false,
            preferred: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_creation_and_naming() {
        let mut iface = Interface::new("ge-0/0/0");
        iface.unit_mut(0).description = Some("uplink".to_string());
        assert_eq!(iface.units.len(), 1);
        assert_eq!(iface.unit_name(0), "ge-0/0/0.0");
    }

    #[test]
    fn test_family_inet_lazy_init() {
        let mut iface = Interface::new("ge-0/0/0");
        let unit = iface.unit_mut(0);
        assert!(unit.family_inet.is_none());
        unit.family_inet_mut()
            .addresses
            .push(InterfaceAddress::new("10.0.0.1/31".parse().unwrap()));
        assert!(unit.family_inet.is_some());
    }
}
