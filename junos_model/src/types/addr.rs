//! IPv4 address and prefix primitives
//!
//! Kept deliberately small: the extraction engine needs parsing, ordering,
//! containment and canonical text forms, nothing more. IPv6 text is
//! detected (for unimplemented-feature warnings) but never modeled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    #[error("Invalid IPv4 address: '{0}'")]
    InvalidIp(String),

    #[error("Invalid prefix: '{0}'")]
    InvalidPrefix(String),

    #[error("Prefix length {0} out of range (max 32)")]
    InvalidPrefixLength(u8),
}

/// An IPv4 address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Ip(u32);

impl Ip {
    pub const ZERO: Ip = Ip(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl FromStr for Ip {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 4];
        let mut parts = 0;
        for part in s.split('.') {
            if parts == 4 {
                return Err(AddrError::InvalidIp(s.to_string()));
            }
            // leading '+' / whitespace must not slip through u8::parse
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) || part.len() > 3 {
                return Err(AddrError::InvalidIp(s.to_string()));
            }
            octets[parts] = part
                .parse::<u8>()
                .map_err(|_| AddrError::InvalidIp(s.to_string()))?;
            parts += 1;
        }
        if parts != 4 {
            return Err(AddrError::InvalidIp(s.to_string()));
        }
        Ok(Ip(u32::from_be_bytes(octets)))
    }
}

impl fmt::Display for Ip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.octets();
        write!(f, "{}.{}.{}.{}", o[0], o[1], o[2], o[3])
    }
}

impl Serialize for Ip {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ip {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An IPv4 prefix (network address + length)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix {
    ip: Ip,
    length: u8,
}

impl Prefix {
    pub const ZERO: Prefix = Prefix {
        ip: Ip::ZERO,
        length: 0,
    };

    pub const MAX_LENGTH: u8 = 32;

    pub fn new(ip: Ip, length: u8) -> Result<Self, AddrError> {
        if length > Self::MAX_LENGTH {
            return Err(AddrError::InvalidPrefixLength(length));
        }
        Ok(Self { ip, length })
    }

    pub fn ip(&self) -> Ip {
        self.ip
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    fn mask(&self) -> u32 {
        if self.length == 0 {
            0
        } else {
            u32::MAX << (32 - self.length as u32)
        }
    }

    /// The network address (host bits cleared)
    pub fn network(&self) -> Prefix {
        Prefix {
            ip: Ip(self.ip.0 & self.mask()),
            length: self.length,
        }
    }

    /// Whether this prefix contains the address
    pub fn contains_ip(&self, ip: Ip) -> bool {
        (ip.0 & self.mask()) == (self.ip.0 & self.mask())
    }

    /// Whether this prefix contains the other prefix entirely
    pub fn contains(&self, other: &Prefix) -> bool {
        other.length >= self.length && self.contains_ip(other.ip)
    }
}

impl FromStr for Prefix {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ip_part, len_part) = s
            .split_once('/')
            .ok_or_else(|| AddrError::InvalidPrefix(s.to_string()))?;
        let ip: Ip = ip_part
            .parse()
            .map_err(|_| AddrError::InvalidPrefix(s.to_string()))?;
        let length: u8 = len_part
            .parse()
            .map_err(|_| AddrError::InvalidPrefix(s.to_string()))?;
        Prefix::new(ip, length)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ip, self.length)
    }
}

impl Serialize for Prefix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An inclusive port range; single ports are start == end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    pub fn single(port: u16) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, port: u16) -> bool {
        port >= self.start && port <= self.end
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Whether a word looks like IPv6 text (flagged, never modeled)
pub fn looks_like_ipv6(text: &str) -> bool {
    text.contains(':') && text.chars().all(|c| c.is_ascii_hexdigit() || c == ':' || c == '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_round_trip() {
        let ip: Ip = "10.0.0.1".parse().unwrap();
        assert_eq!(ip.to_string(), "10.0.0.1");
        assert_eq!(ip.octets(), [10, 0, 0, 1]);
    }

    #[test]
    fn test_ip_rejects_garbage() {
        assert!("10.0.0".parse::<Ip>().is_err());
        assert!("10.0.0.0.1".parse::<Ip>().is_err());
        assert!("10.0.0.256".parse::<Ip>().is_err());
        assert!("10.0.0.+1".parse::<Ip>().is_err());
        assert!("".parse::<Ip>().is_err());
    }

    #[test]
    fn test_prefix_round_trip() {
        let prefix: Prefix = "10.0.0.0/24".parse().unwrap();
        assert_eq!(prefix.to_string(), "10.0.0.0/24");
        assert_eq!(prefix.length(), 24);
    }

    #[test]
    fn test_prefix_rejects_bad_length() {
        assert!("10.0.0.0/33".parse::<Prefix>().is_err());
        assert!("10.0.0.0".parse::<Prefix>().is_err());
    }

    #[test]
    fn test_prefix_network_and_containment() {
        let prefix: Prefix = "10.0.5.7/24".parse().unwrap();
        assert_eq!(prefix.network().to_string(), "10.0.5.0/24");
        assert!(prefix.contains_ip("10.0.5.200".parse().unwrap()));
        assert!(!prefix.contains_ip("10.0.6.1".parse().unwrap()));

        let wider: Prefix = "10.0.0.0/8".parse().unwrap();
        assert!(wider.contains(&prefix));
        assert!(!prefix.contains(&wider));
    }

    #[test]
    fn test_default_route() {
        let prefix: Prefix = "0.0.0.0/0".parse().unwrap();
        assert!(prefix.contains_ip("203.0.113.9".parse().unwrap()));
    }

    #[test]
    fn test_port_range() {
        let range = PortRange::new(1024, 2048);
        assert!(range.contains(1500));
        assert!(!range.contains(80));
        assert_eq!(PortRange::single(22).to_string(), "22");
        assert_eq!(range.to_string(), "1024-2048");
    }

    #[test]
    fn test_ipv6_detection() {
        assert!(looks_like_ipv6("2001:db8::1"));
        assert!(looks_like_ipv6("2001:db8::/32"));
        assert!(!looks_like_ipv6("10.0.0.1"));
        assert!(!looks_like_ipv6("ge-0/0/0"));
    }

    #[test]
    fn test_serde_as_strings() {
        let prefix: Prefix = "192.0.2.0/24".parse().unwrap();
        let json = serde_json::to_string(&prefix).unwrap();
        assert_eq!(json, "\"192.0.2.0/24\"");
        let back: Prefix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefix);
    }
}
