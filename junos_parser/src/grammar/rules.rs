//! Grammar rule inventory
//!
//! One variant per production of the modeled flat-Junos grammar. Every rule
//! has an `enter_*`/`exit_*` pair on the listener trait, dispatched by the
//! tree walker. Names follow the configuration hierarchy: `Bgp*` rules live
//! under `protocols bgp`, `Fw*` under `firewall`, `Zone*` under
//! `security zones security-zone`, and so on.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    // Top level
    Configuration,
    SetLine,
    Statement,

    // system
    System,
    SysHostName,
    SysDomainName,
    SysNameServer,
    SysNtpServer,
    SysSyslogHost,

    // interfaces
    Interfaces,
    Interface,
    IfDisable,
    IfDescription,
    IfMtu,
    IfUnit,
    IfuFamilyInet,
    IfuFamilyInet6,
    IfiAddress,
    IfiFilterInput,
    IfiFilterOutput,

    // protocols bgp
    Protocols,
    Bgp,
    BgpGroup,
    BgpNeighbor,
    BgpType,
    BgpDescription,
    BgpLocalAddress,
    BgpLocalAs,
    BgpPeerAs,
    BgpMultihop,
    BgpMultipath,
    BgpClusterId,
    BgpImport,
    BgpExport,
    BgpRemovePrivate,

    // policy-options
    PolicyOptions,
    PrefixList,
    PrefixListEntry,
    Community,
    CommunityMembers,
    PolicyStatement,
    PsTerm,
    PsFrom,
    PsFromProtocol,
    PsFromPrefixList,
    PsFromCommunity,
    PsFromNeighbor,
    PsFromRouteFilter,
    RfExact,
    RfLonger,
    RfOrlonger,
    RfUpto,
    RfPrefixLengthRange,
    RfThrough,
    PsThen,
    PsThenAccept,
    PsThenReject,
    PsThenNextTerm,
    PsThenNextPolicy,
    PsThenMetric,
    PsThenLocalPreference,
    PsThenCommunityAdd,
    PsThenCommunitySet,
    PsThenCommunityDelete,

    // firewall
    Firewall,
    FwFamilyInet,
    FwFilter,
    FwTerm,
    FwFrom,
    FwFromSourceAddress,
    FwFromDestinationAddress,
    FwFromSourcePort,
    FwFromDestinationPort,
    FwFromPort,
    FwFromProtocol,
    FwFromIcmpType,
    FwFromTcpEstablished,
    FwFromSourcePrefixList,
    FwFromDestinationPrefixList,
    FwThen,
    FwThenAccept,
    FwThenDiscard,
    FwThenReject,
    FwThenNextTerm,
    FwThenLog,
    FwThenCount,

    // security
    Security,
    SecZones,
    SecZone,
    ZoneInterfaces,
    ZoneAddressBook,
    ZoneAbAddress,
    ZoneAbAddressSet,
    ZoneHostInboundTraffic,
    ZoneHitSystemServices,
    ZoneHitProtocols,
    SecPolicies,
    SecPoliciesFromTo,
    SecPolicy,
    SpMatch,
    SpMatchSourceAddress,
    SpMatchDestinationAddress,
    SpMatchApplication,
    SpThen,
    SpThenPermit,
    SpThenDeny,
    SpThenReject,
    SpThenLog,

    // routing-options
    RoutingOptions,
    RoRouterId,
    RoAutonomousSystem,
    RoStatic,
    RoStaticRoute,
    SrNextHop,
    SrDiscard,
    SrReject,
    SrMetric,
    SrPreference,
    SrTag,

    // applications
    Applications,
    Application,
    AppProtocol,
    AppSourcePort,
    AppDestinationPort,
}

impl Rule {
    /// Stable snake-case rule name used in diagnostics and dumps
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Configuration => "configuration",
            Rule::SetLine => "set_line",
            Rule::Statement => "statement",
            Rule::System => "system",
            Rule::SysHostName => "sys_host_name",
            Rule::SysDomainName => "sys_domain_name",
            Rule::SysNameServer => "sys_name_server",
            Rule::SysNtpServer => "sys_ntp_server",
            Rule::SysSyslogHost => "sys_syslog_host",
            Rule::Interfaces => "interfaces",
            Rule::Interface => "interface",
            Rule::IfDisable => "if_disable",
            Rule::IfDescription => "if_description",
            Rule::IfMtu => "if_mtu",
            Rule::IfUnit => "if_unit",
            Rule::IfuFamilyInet => "ifu_family_inet",
            Rule::IfuFamilyInet6 => "ifu_family_inet6",
            Rule::IfiAddress => "ifi_address",
            Rule::IfiFilterInput => "ifi_filter_input",
            Rule::IfiFilterOutput => "ifi_filter_output",
            Rule::Protocols => "protocols",
            Rule::Bgp => "bgp",
            Rule::BgpGroup => "bgp_group",
            Rule::BgpNeighbor => "bgp_neighbor",
            Rule::BgpType => "bgp_type",
            Rule::BgpDescription => "bgp_description",
            Rule::BgpLocalAddress => "bgp_local_address",
            Rule::BgpLocalAs => "bgp_local_as",
            Rule::BgpPeerAs => "bgp_peer_as",
            Rule::BgpMultihop => "bgp_multihop",
            Rule::BgpMultipath => "bgp_multipath",
            Rule::BgpClusterId => "bgp_cluster_id",
            Rule::BgpImport => "bgp_import",
            Rule::BgpExport => "bgp_export",
            Rule::BgpRemovePrivate => "bgp_remove_private",
            Rule::PolicyOptions => "policy_options",
            Rule::PrefixList => "prefix_list",
            Rule::PrefixListEntry => "prefix_list_entry",
            Rule::Community => "community",
            Rule::CommunityMembers => "community_members",
            Rule::PolicyStatement => "policy_statement",
            Rule::PsTerm => "ps_term",
            Rule::PsFrom => "ps_from",
            Rule::PsFromProtocol => "ps_from_protocol",
            Rule::PsFromPrefixList => "ps_from_prefix_list",
            Rule::PsFromCommunity => "ps_from_community",
            Rule::PsFromNeighbor => "ps_from_neighbor",
            Rule::PsFromRouteFilter => "ps_from_route_filter",
            Rule::RfExact => "rf_exact",
            Rule::RfLonger => "rf_longer",
            Rule::RfOrlonger => "rf_orlonger",
            Rule::RfUpto => "rf_upto",
            Rule::RfPrefixLengthRange => "rf_prefix_length_range",
            Rule::RfThrough => "rf_through",
            Rule::PsThen => "ps_then",
            Rule::PsThenAccept => "ps_then_accept",
            Rule::PsThenReject => "ps_then_reject",
            Rule::PsThenNextTerm => "ps_then_next_term",
            Rule::PsThenNextPolicy => "ps_then_next_policy",
            Rule::PsThenMetric => "ps_then_metric",
            Rule::PsThenLocalPreference => "ps_then_local_preference",
            Rule::PsThenCommunityAdd => "ps_then_community_add",
            Rule::PsThenCommunitySet => "ps_then_community_set",
            Rule::PsThenCommunityDelete => "ps_then_community_delete",
            Rule::Firewall => "firewall",
            Rule::FwFamilyInet => "fw_family_inet",
            Rule::FwFilter => "fw_filter",
            Rule::FwTerm => "fw_term",
            Rule::FwFrom => "fw_from",
            Rule::FwFromSourceAddress => "fw_from_source_address",
            Rule::FwFromDestinationAddress => "fw_from_destination_address",
            Rule::FwFromSourcePort => "fw_from_source_port",
            Rule::FwFromDestinationPort => "fw_from_destination_port",
            Rule::FwFromPort => "fw_from_port",
            Rule::FwFromProtocol => "fw_from_protocol",
            Rule::FwFromIcmpType => "fw_from_icmp_type",
            Rule::FwFromTcpEstablished => "fw_from_tcp_established",
            Rule::FwFromSourcePrefixList => "fw_from_source_prefix_list",
            Rule::FwFromDestinationPrefixList => "fw_from_destination_prefix_list",
            Rule::FwThen => "fw_then",
            Rule::FwThenAccept => "fw_then_accept",
            Rule::FwThenDiscard => "fw_then_discard",
            Rule::FwThenReject => "fw_then_reject",
            Rule::FwThenNextTerm => "fw_then_next_term",
            Rule::FwThenLog => "fw_then_log",
            Rule::FwThenCount => "fw_then_count",
            Rule::Security => "security",
            Rule::SecZones => "sec_zones",
            Rule::SecZone => "sec_zone",
            Rule::ZoneInterfaces => "zone_interfaces",
            Rule::ZoneAddressBook => "zone_address_book",
            Rule::ZoneAbAddress => "zone_ab_address",
            Rule::ZoneAbAddressSet => "zone_ab_address_set",
            Rule::ZoneHostInboundTraffic => "zone_host_inbound_traffic",
            Rule::ZoneHitSystemServices => "zone_hit_system_services",
            Rule::ZoneHitProtocols => "zone_hit_protocols",
            Rule::SecPolicies => "sec_policies",
            Rule::SecPoliciesFromTo => "sec_policies_from_to",
            Rule::SecPolicy => "sec_policy",
            Rule::SpMatch => "sp_match",
            Rule::SpMatchSourceAddress => "sp_match_source_address",
            Rule::SpMatchDestinationAddress => "sp_match_destination_address",
            Rule::SpMatchApplication => "sp_match_application",
            Rule::SpThen => "sp_then",
            Rule::SpThenPermit => "sp_then_permit",
            Rule::SpThenDeny => "sp_then_deny",
            Rule::SpThenReject => "sp_then_reject",
            Rule::SpThenLog => "sp_then_log",
            Rule::RoutingOptions => "routing_options",
            Rule::RoRouterId => "ro_router_id",
            Rule::RoAutonomousSystem => "ro_autonomous_system",
            Rule::RoStatic => "ro_static",
            Rule::RoStaticRoute => "ro_static_route",
            Rule::SrNextHop => "sr_next_hop",
            Rule::SrDiscard => "sr_discard",
            Rule::SrReject => "sr_reject",
            Rule::SrMetric => "sr_metric",
            Rule::SrPreference => "sr_preference",
            Rule::SrTag => "sr_tag",
            Rule::Applications => "applications",
            Rule::Application => "application",
            Rule::AppProtocol => "app_protocol",
            Rule::AppSourcePort => "app_source_port",
            Rule::AppDestinationPort => "app_destination_port",
        }
    }

    /// Every rule, in declaration order. The listener test suite uses this
    /// to verify full enter/exit coverage.
    pub fn all() -> &'static [Rule] {
        use Rule::*;
        &[
            Configuration,
            SetLine,
            Statement,
            System,
            SysHostName,
            SysDomainName,
            SysNameServer,
            SysNtpServer,
            SysSyslogHost,
            Interfaces,
            Interface,
            IfDisable,
            IfDescription,
            IfMtu,
            IfUnit,
            IfuFamilyInet,
            IfuFamilyInet6,
            IfiAddress,
            IfiFilterInput,
            IfiFilterOutput,
            Protocols,
            Bgp,
            BgpGroup,
            BgpNeighbor,
            BgpType,
            BgpDescription,
            BgpLocalAddress,
            BgpLocalAs,
            BgpPeerAs,
            BgpMultihop,
            BgpMultipath,
            BgpClusterId,
            BgpImport,
            BgpExport,
            BgpRemovePrivate,
            PolicyOptions,
            PrefixList,
            PrefixListEntry,
            Community,
            CommunityMembers,
            PolicyStatement,
            PsTerm,
            PsFrom,
            PsFromProtocol,
            PsFromPrefixList,
            PsFromCommunity,
            PsFromNeighbor,
            PsFromRouteFilter,
            RfExact,
            RfLonger,
            RfOrlonger,
            RfUpto,
            RfPrefixLengthRange,
            RfThrough,
            PsThen,
            PsThenAccept,
            PsThenReject,
            PsThenNextTerm,
            PsThenNextPolicy,
            PsThenMetric,
            PsThenLocalPreference,
            PsThenCommunityAdd,
            PsThenCommunitySet,
            PsThenCommunityDelete,
            Firewall,
            FwFamilyInet,
            FwFilter,
            FwTerm,
            FwFrom,
            FwFromSourceAddress,
            FwFromDestinationAddress,
            FwFromSourcePort,
            FwFromDestinationPort,
            FwFromPort,
            FwFromProtocol,
            FwFromIcmpType,
            FwFromTcpEstablished,
            FwFromSourcePrefixList,
            FwFromDestinationPrefixList,
            FwThen,
            FwThenAccept,
            FwThenDiscard,
            FwThenReject,
            FwThenNextTerm,
            FwThenLog,
            FwThenCount,
            Security,
            SecZones,
            SecZone,
            ZoneInterfaces,
            ZoneAddressBook,
            ZoneAbAddress,
            ZoneAbAddressSet,
            ZoneHostInboundTraffic,
            ZoneHitSystemServices,
            ZoneHitProtocols,
            SecPolicies,
            SecPoliciesFromTo,
            SecPolicy,
            SpMatch,
            SpMatchSourceAddress,
            SpMatchDestinationAddress,
            SpMatchApplication,
            SpThen,
            SpThenPermit,
            SpThenDeny,
            SpThenReject,
            SpThenLog,
            RoutingOptions,
            RoRouterId,
            RoAutonomousSystem,
            RoStatic,
            RoStaticRoute,
            SrNextHop,
            SrDiscard,
            SrReject,
            SrMetric,
            SrPreference,
            SrTag,
            Applications,
            Application,
            AppProtocol,
            AppSourcePort,
            AppDestinationPort,
        ]
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_covers_every_variant_once() {
        let names: HashSet<&str> = Rule::all().iter().map(|r| r.as_str()).collect();
        assert_eq!(names.len(), Rule::all().len(), "duplicate rule names");
    }

    #[test]
    fn test_names_are_snake_case() {
        for rule in Rule::all() {
            let name = rule.as_str();
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "bad rule name: {}",
                name
            );
        }
    }
}
