//! Primitive value types shared across the device model

pub mod addr;

pub use addr::{looks_like_ipv6, AddrError, Ip, PortRange, Prefix};

/// Well-known service names accepted where Junos accepts either a port
/// number or a name (firewall terms, applications)
pub fn named_port(name: &str) -> Option<u16> {
    match name {
        "ftp-data" => Some(20),
        "ftp" => Some(21),
        "ssh" => Some(22),
        "telnet" => Some(23),
        "smtp" => Some(25),
        "domain" => Some(53),
        "tftp" => Some(69),
        "http" => Some(80),
        "pop3" => Some(110),
        "ntp" => Some(123),
        "imap" => Some(143),
        "snmp" => Some(161),
        "snmptrap" => Some(162),
        "bgp" => Some(179),
        "ldap" => Some(389),
        "https" => Some(443),
        "syslog" => Some(514),
        "ldp" => Some(646),
        "radius" => Some(1812),
        _ => None,
    }
}

/// Parse a Junos port word: a number, a range `a-b`, or a service name
pub fn parse_port_word(word: &str) -> Option<PortRange> {
    if let Ok(port) = word.parse::<u16>() {
        return Some(PortRange::single(port));
    }
    if let Some((start, end)) = word.split_once('-') {
        if let (Ok(start), Ok(end)) = (start.parse::<u16>(), end.parse::<u16>()) {
            return Some(PortRange::new(start, end));
        }
    }
    named_port(word).map(PortRange::single)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_ports() {
        assert_eq!(named_port("bgp"), Some(179));
        assert_eq!(named_port("ssh"), Some(22));
        assert_eq!(named_port("no-such-service"), None);
    }

    #[test]
    fn test_parse_port_word() {
        assert_eq!(parse_port_word("443"), Some(PortRange::single(443)));
        assert_eq!(parse_port_word("1024-2048"), Some(PortRange::new(1024, 2048)));
        assert_eq!(parse_port_word("https"), Some(PortRange::single(443)));
        assert_eq!(parse_port_word("bogus"), None);
    }
}
