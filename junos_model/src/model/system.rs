//! `system` stanza model

use crate::types::Ip;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// System-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub host_name: Option<String>,
    pub domain_name: Option<String>,
    /// DNS resolvers
    pub name_servers: BTreeSet<Ip>,
    /// NTP servers (hostname or address, kept as written)
    pub ntp_servers: BTreeSet<String>,
    /// Syslog destinations
    pub syslog_hosts: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_servers_deduplicate() {
        let mut system = SystemSettings::default();
        system.name_servers.insert("10.0.0.1".parse().unwrap());
        system.name_servers.insert("10.0.0.1".parse().unwrap());
        assert_eq!(system.name_servers.len(), 1);
    }
}
