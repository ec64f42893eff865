//! Semantic extraction: parse tree -> device model

pub mod builder;
pub mod warnings;

pub use builder::ConfigBuilder;
pub use warnings::{Warning, Warnings};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        BgpGroupType, FwAction, IpProtocol, PsAction, RouteFilterModifier, SecPolicyAction,
    };
    use crate::types::{Ip, PortRange, Prefix};
    use junos_parser::pipeline::process_text;

    fn extract(source: &str) -> (crate::model::JunosConfiguration, Warnings) {
        let result = process_text("test.conf", source).expect("pipeline should succeed");
        ConfigBuilder::build(&result.tree)
    }

    #[test]
    fn test_system_extraction() {
        let (config, warnings) = extract(
            "set system host-name border-r1\n\
             set system domain-name example.net\n\
             set system name-server 10.0.0.53\n\
             set system ntp server 10.0.0.123\n\
             set system syslog host 10.0.0.99 any notice\n",
        );
        assert_eq!(config.hostname(), Some("border-r1"));
        assert_eq!(config.system.domain_name.as_deref(), Some("example.net"));
        assert_eq!(config.system.name_servers.len(), 1);
        assert!(config.system.ntp_servers.contains("10.0.0.123"));
        assert!(config.system.syslog_hosts.contains("10.0.0.99"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_interface_extraction() {
        let (config, warnings) = extract(
            "set interfaces ge-0/0/0 description \"uplink to core\"\n\
             set interfaces ge-0/0/0 mtu 9192\n\
             set interfaces ge-0/0/0 unit 0 family inet address 10.0.0.1/31\n\
             set interfaces ge-0/0/0 unit 0 family inet filter input EDGE-IN\n\
             set interfaces ge-0/0/1 disable\n\
             set firewall filter EDGE-IN term ALL then accept\n",
        );
        let iface = &config.interfaces["ge-0/0/0"];
        assert_eq!(iface.description.as_deref(), Some("uplink to core"));
        assert_eq!(iface.mtu, Some(9192));
        let family = iface.units[&0].family_inet.as_ref().unwrap();
        assert_eq!(family.addresses.len(), 1);
        assert_eq!(
            family.addresses[0].prefix,
            "10.0.0.1/31".parse::<Prefix>().unwrap()
        );
        assert_eq!(family.input_filter.as_deref(), Some("EDGE-IN"));
        assert!(config.interfaces["ge-0/0/1"].disabled);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bgp_extraction_with_inheritance() {
        let (config, warnings) = extract(
            "set routing-options autonomous-system 65001\n\
             set protocols bgp group EBGP type external\n\
             set protocols bgp group EBGP local-as 65001\n\
             set protocols bgp group EBGP neighbor 10.0.0.2 peer-as 65002\n\
             set protocols bgp group EBGP neighbor 10.0.0.6 peer-as 65003\n\
             set protocols bgp group EBGP neighbor 10.0.0.6 description \"transit\"\n",
        );
        let bgp = config.bgp.as_ref().unwrap();
        assert_eq!(bgp.neighbor_count(), 2);
        let group = &bgp.groups["EBGP"];
        let n2 = &group.neighbors[&"10.0.0.2".parse::<Ip>().unwrap()];
        assert_eq!(n2.settings.group_type, Some(BgpGroupType::External));
        assert_eq!(n2.settings.local_as, Some(65001));
        assert_eq!(n2.settings.peer_as, Some(65002));
        let n6 = &group.neighbors[&"10.0.0.6".parse::<Ip>().unwrap()];
        assert_eq!(n6.settings.peer_as, Some(65003));
        assert_eq!(n6.settings.description.as_deref(), Some("transit"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_firewall_extraction() {
        let (config, warnings) = extract(
            "set firewall family inet filter EDGE-IN term BLOCK-TELNET from protocol tcp\n\
             set firewall family inet filter EDGE-IN term BLOCK-TELNET from destination-port telnet\n\
             set firewall family inet filter EDGE-IN term BLOCK-TELNET then discard\n\
             set firewall family inet filter EDGE-IN term BLOCK-TELNET then count telnet-drops\n\
             set firewall family inet filter EDGE-IN term ALLOW-ALL then accept\n",
        );
        let filter = &config.firewall_filters["EDGE-IN"];
        assert_eq!(filter.terms.len(), 2);
        let block = &filter.terms[0];
        assert_eq!(block.name, "BLOCK-TELNET");
        assert_eq!(block.from.protocols, vec![IpProtocol::Tcp]);
        assert_eq!(block.from.destination_ports, vec![PortRange::single(23)]);
        assert_eq!(
            block.then,
            vec![FwAction::Discard, FwAction::Count("telnet-drops".to_string())]
        );
        assert_eq!(filter.terms[1].then, vec![FwAction::Accept]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_policy_extraction() {
        let (config, warnings) = extract(
            "set policy-options prefix-list LOCALS 10.0.0.0/24\n\
             set policy-options community CUST members 65001:100\n\
             set policy-options policy-statement EXPORT-LOCAL term 10 from protocol static\n\
             set policy-options policy-statement EXPORT-LOCAL term 10 from route-filter 10.0.0.0/8 orlonger\n\
             set policy-options policy-statement EXPORT-LOCAL term 10 then community add CUST\n\
             set policy-options policy-statement EXPORT-LOCAL term 10 then accept\n\
             set policy-options policy-statement EXPORT-LOCAL term 20 then reject\n",
        );
        let policy = &config.policy_statements["EXPORT-LOCAL"];
        assert_eq!(policy.terms.len(), 2);
        let term = &policy.terms[0];
        assert_eq!(term.from.route_filters.len(), 1);
        assert_eq!(
            term.from.route_filters[0].modifier,
            RouteFilterModifier::OrLonger
        );
        assert_eq!(
            term.then,
            vec![
                PsAction::CommunityAdd("CUST".to_string()),
                PsAction::Accept,
            ]
        );
        assert_eq!(config.prefix_lists["LOCALS"].prefixes.len(), 1);
        assert_eq!(config.communities["CUST"].members, vec!["65001:100"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_security_extraction() {
        let (config, warnings) = extract(
            "set security zones security-zone trust interfaces ge-0/0/0.0\n\
             set security zones security-zone trust address-book address WEB 10.0.5.10/32\n\
             set security zones security-zone trust address-book address-set SERVERS address WEB\n\
             set security zones security-zone trust host-inbound-traffic system-services ssh\n\
             set security zones security-zone untrust interfaces ge-0/0/1.0\n\
             set security policies from-zone trust to-zone untrust policy ALLOW-WEB match source-address any\n\
             set security policies from-zone trust to-zone untrust policy ALLOW-WEB match application junos-http\n\
             set security policies from-zone trust to-zone untrust policy ALLOW-WEB then permit\n",
        );
        let trust = &config.zones["trust"];
        assert!(trust.interfaces.contains("ge-0/0/0.0"));
        assert!(trust.address_book.contains_key("WEB"));
        assert!(trust.address_sets["SERVERS"].contains("WEB"));
        assert!(trust.inbound_services.contains("ssh"));

        assert_eq!(config.zone_pair_policies.len(), 1);
        let pair = &config.zone_pair_policies[0];
        let policy = &pair.policies[0];
        assert_eq!(policy.action, Some(SecPolicyAction::Permit));
        assert_eq!(policy.match_applications, vec!["junos-http"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_static_routes() {
        let (config, warnings) = extract(
            "set routing-options static route 0.0.0.0/0 next-hop 10.0.0.1\n\
             set routing-options static route 192.0.2.0/24 discard\n\
             set routing-options static route 0.0.0.0/0 metric 10\n",
        );
        assert_eq!(config.routing.static_routes.len(), 2);
        let default = &config.routing.static_routes[&"0.0.0.0/0".parse::<Prefix>().unwrap()];
        assert_eq!(default.next_hops.len(), 1);
        assert_eq!(default.metric, Some(10));
        assert!(
            config.routing.static_routes[&"192.0.2.0/24".parse::<Prefix>().unwrap()].discard
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_group_hostname_does_not_override_explicit() {
        let (config, _) = extract(
            "set groups STANDARD system host-name template-host\n\
             set system host-name real-host\n\
             set apply-groups STANDARD\n",
        );
        assert_eq!(config.hostname(), Some("real-host"));
    }

    #[test]
    fn test_group_hostname_applies_when_no_explicit() {
        let (config, _) = extract(
            "set groups STANDARD system host-name template-host\n\
             set apply-groups STANDARD\n",
        );
        assert_eq!(config.hostname(), Some("template-host"));
    }

    #[test]
    fn test_unrecognized_statement_warns() {
        let (_, warnings) = extract("set vlans blue vlan-id 100\n");
        assert_eq!(warnings.red_flags.len(), 1);
        assert!(warnings.red_flags[0].text.contains("unrecognized"));
    }

    #[test]
    fn test_inet6_flagged_unimplemented() {
        let (config, warnings) = extract(
            "set interfaces ge-0/0/0 unit 0 family inet6 address 2001:db8::1/64\n",
        );
        assert!(config.interfaces["ge-0/0/0"].units[&0].family_inet6_present);
        assert_eq!(warnings.unimplemented.len(), 1);
    }

    #[test]
    fn test_undefined_reference_warnings() {
        let (_, warnings) = extract(
            "set interfaces ge-0/0/0 unit 0 family inet filter input NO-SUCH-FILTER\n\
             set protocols bgp group X export NO-SUCH-POLICY\n",
        );
        let texts: Vec<&str> = warnings.red_flags.iter().map(|w| w.text.as_str()).collect();
        assert!(texts.iter().any(|t| t.contains("NO-SUCH-FILTER")));
        assert!(texts.iter().any(|t| t.contains("NO-SUCH-POLICY")));
    }

    #[test]
    fn test_malformed_value_warns_and_continues() {
        let (config, warnings) = extract(
            "set interfaces ge-0/0/0 mtu banana\n\
             set interfaces ge-0/0/0 unit 0 family inet address 10.0.0.1/31\n",
        );
        assert!(config.interfaces["ge-0/0/0"].mtu.is_none());
        assert!(!config.interfaces["ge-0/0/0"].units.is_empty());
        assert!(warnings.red_flags.iter().any(|w| w.text.contains("banana")));
    }

    #[test]
    fn test_bgp_neighbor_outside_group_flagged() {
        let (_, warnings) = extract("set protocols bgp neighbor 10.0.0.9 peer-as 65009\n");
        assert!(warnings
            .red_flags
            .iter()
            .any(|w| w.text.contains("outside a group")));
    }
}
