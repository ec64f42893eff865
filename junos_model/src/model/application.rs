//! Application definitions (`applications application ...`) plus the
//! `junos-*` builtin set referenced by security policies

use crate::model::firewall::IpProtocol;
use crate::types::PortRange;
use serde::{Deserialize, Serialize};

/// A user-defined or builtin application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub protocol: Option<IpProtocol>,
    pub source_port: Option<PortRange>,
    pub destination_port: Option<PortRange>,
}

impl Application {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn builtin(name: &str, protocol: IpProtocol, destination_port: Option<u16>) -> Self {
        Self {
            name: name.to_string(),
            protocol: Some(protocol),
            source_port: None,
            destination_port: destination_port.map(PortRange::single),
        }
    }
}

/// Resolve a `junos-*` builtin application by name. Only the commonly
/// referenced subset is carried; unknown `junos-*` names still count as
/// defined for reference checking, returning None here.
pub fn builtin_application(name: &str) -> Option<Application> {
    let app = match name {
        "junos-ssh" => Application::builtin(name, IpProtocol::Tcp, Some(22)),
        "junos-telnet" => Application::builtin(name, IpProtocol::Tcp, Some(23)),
        "junos-smtp" => Application::builtin(name, IpProtocol::Tcp, Some(25)),
        "junos-dns-udp" => Application::builtin(name, IpProtocol::Udp, Some(53)),
        "junos-dns-tcp" => Application::builtin(name, IpProtocol::Tcp, Some(53)),
        "junos-http" => Application::builtin(name, IpProtocol::Tcp, Some(80)),
        "junos-https" => Application::builtin(name, IpProtocol::Tcp, Some(443)),
        "junos-ftp" => Application::builtin(name, IpProtocol::Tcp, Some(21)),
        "junos-ntp" => Application::builtin(name, IpProtocol::Udp, Some(123)),
        "junos-bgp" => Application::builtin(name, IpProtocol::Tcp, Some(179)),
        "junos-ping" => Application::builtin(name, IpProtocol::Icmp, None),
        "junos-icmp-all" => Application::builtin(name, IpProtocol::Icmp, None),
        _ => return None,
    };
    Some(app)
}

/// Whether an application name is acceptable in a policy match without a
/// user definition: `any` or any `junos-*` builtin
pub fn is_implicitly_defined(name: &str) -> bool {
    name == "any" || name.starts_with("junos-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let ssh = builtin_application("junos-ssh").unwrap();
        assert_eq!(ssh.protocol, Some(IpProtocol::Tcp));
        assert_eq!(ssh.destination_port, Some(PortRange::single(22)));
        assert!(builtin_application("junos-nonexistent").is_none());
    }

    #[test]
    fn test_implicit_definition() {
        assert!(is_implicitly_defined("any"));
        assert!(is_implicitly_defined("junos-obscure-thing"));
        assert!(!is_implicitly_defined("MY-APP"));
    }
}
