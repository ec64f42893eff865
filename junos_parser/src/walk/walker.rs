//! Depth-first parse-tree walker
//!
//! The walk is synchronous and single-threaded: for each rule node it
//! fires `enter_every_rule`, the rule's enter hook, the children left to
//! right, the rule's exit hook, then `exit_every_rule`. Terminals and
//! error nodes fire their visit hooks in place.

use crate::grammar::rules::Rule;
use crate::grammar::tree::{ParseTree, RuleNode};
use crate::walk::listener::FlatJunosListener;

/// Walks a parse tree, dispatching to a listener
pub struct ParseTreeWalker;

impl ParseTreeWalker {
    /// Walk `tree` depth-first, dispatching every node to `listener`
    pub fn walk<L: FlatJunosListener + ?Sized>(listener: &mut L, tree: &ParseTree) {
        match tree {
            ParseTree::Terminal(node) => listener.visit_terminal(node),
            ParseTree::Error(node) => listener.visit_error_node(node),
            ParseTree::Rule(node) => Self::walk_rule(listener, node),
        }
    }

    /// Walk starting from a rule node
    pub fn walk_rule<L: FlatJunosListener + ?Sized>(listener: &mut L, node: &RuleNode) {
        listener.enter_every_rule(node);
        dispatch_enter(listener, node);
        for child in &node.children {
            Self::walk(listener, child);
        }
        dispatch_exit(listener, node);
        listener.exit_every_rule(node);
    }
}

fn dispatch_enter<L: FlatJunosListener + ?Sized>(listener: &mut L, node: &RuleNode) {
    match node.rule {
        Rule::Configuration => listener.enter_configuration(node),
        Rule::SetLine => listener.enter_set_line(node),
        Rule::Statement => listener.enter_statement(node),
        Rule::System => listener.enter_system(node),
        Rule::SysHostName => listener.enter_sys_host_name(node),
        Rule::SysDomainName => listener.enter_sys_domain_name(node),
        Rule::SysNameServer => listener.enter_sys_name_server(node),
        Rule::SysNtpServer => listener.enter_sys_ntp_server(node),
        Rule::SysSyslogHost => listener.enter_sys_syslog_host(node),
        Rule::Interfaces => listener.enter_interfaces(node),
        Rule::Interface => listener.enter_interface(node),
        Rule::IfDisable => listener.enter_if_disable(node),
        Rule::IfDescription => listener.enter_if_description(node),
        Rule::IfMtu => listener.enter_if_mtu(node),
        Rule::IfUnit => listener.enter_if_unit(node),
        Rule::IfuFamilyInet => listener.enter_ifu_family_inet(node),
        Rule::IfuFamilyInet6 => listener.enter_ifu_family_inet6(node),
        Rule::IfiAddress => listener.enter_ifi_address(node),
        Rule::IfiFilterInput => listener.enter_ifi_filter_input(node),
        Rule::IfiFilterOutput => listener.enter_ifi_filter_output(node),
        Rule::Protocols => listener.enter_protocols(node),
        Rule::Bgp => listener.enter_bgp(node),
        Rule::BgpGroup => listener.enter_bgp_group(node),
        Rule::BgpNeighbor => listener.enter_bgp_neighbor(node),
        Rule::BgpType => listener.enter_bgp_type(node),
        Rule::BgpDescription => listener.enter_bgp_description(node),
        Rule::BgpLocalAddress => listener.enter_bgp_local_address(node),
        Rule::BgpLocalAs => listener.enter_bgp_local_as(node),
        Rule::BgpPeerAs => listener.enter_bgp_peer_as(node),
        Rule::BgpMultihop => listener.enter_bgp_multihop(node),
        Rule::BgpMultipath => listener.enter_bgp_multipath(node),
        Rule::BgpClusterId => listener.enter_bgp_cluster_id(node),
        Rule::BgpImport => listener.enter_bgp_import(node),
        Rule::BgpExport => listener.enter_bgp_export(node),
        Rule::BgpRemovePrivate => listener.enter_bgp_remove_private(node),
        Rule::PolicyOptions => listener.enter_policy_options(node),
        Rule::PrefixList => listener.enter_prefix_list(node),
        Rule::PrefixListEntry => listener.enter_prefix_list_entry(node),
        Rule::Community => listener.enter_community(node),
        Rule::CommunityMembers => listener.enter_community_members(node),
        Rule::PolicyStatement => listener.enter_policy_statement(node),
        Rule::PsTerm => listener.enter_ps_term(node),
        Rule::PsFrom => listener.enter_ps_from(node),
        Rule::PsFromProtocol => listener.enter_ps_from_protocol(node),
        Rule::PsFromPrefixList => listener.enter_ps_from_prefix_list(node),
        Rule::PsFromCommunity => listener.enter_ps_from_community(node),
        Rule::PsFromNeighbor => listener.enter_ps_from_neighbor(node),
        Rule::PsFromRouteFilter => listener.enter_ps_from_route_filter(node),
        Rule::RfExact => listener.enter_rf_exact(node),
        Rule::RfLonger => listener.enter_rf_longer(node),
        Rule::RfOrlonger => listener.enter_rf_orlonger(node),
        Rule::RfUpto => listener.enter_rf_upto(node),
        Rule::RfPrefixLengthRange => listener.enter_rf_prefix_length_range(node),
        Rule::RfThrough => listener.enter_rf_through(node),
        Rule::PsThen => listener.enter_ps_then(node),
        Rule::PsThenAccept => listener.enter_ps_then_accept(node),
        Rule::PsThenReject => listener.enter_ps_then_reject(node),
        Rule::PsThenNextTerm => listener.enter_ps_then_next_term(node),
        Rule::PsThenNextPolicy => listener.enter_ps_then_next_policy(node),
        Rule::PsThenMetric => listener.enter_ps_then_metric(node),
        Rule::PsThenLocalPreference => listener.enter_ps_then_local_preference(node),
        Rule::PsThenCommunityAdd => listener.enter_ps_then_community_add(node),
        Rule::PsThenCommunitySet => listener.enter_ps_then_community_set(node),
        Rule::PsThenCommunityDelete => listener.enter_ps_then_community_delete(node),
        Rule::Firewall => listener.enter_firewall(node),
        Rule::FwFamilyInet => listener.enter_fw_family_inet(node),
        Rule::FwFilter => listener.enter_fw_filter(node),
        Rule::FwTerm => listener.enter_fw_term(node),
        Rule::FwFrom => listener.enter_fw_from(node),
        Rule::FwFromSourceAddress => listener.enter_fw_from_source_address(node),
        Rule::FwFromDestinationAddress => listener.enter_fw_from_destination_address(node),
        Rule::FwFromSourcePort => listener.enter_fw_from_source_port(node),
        Rule::FwFromDestinationPort => listener.enter_fw_from_destination_port(node),
        Rule::FwFromPort => listener.enter_fw_from_port(node),
        Rule::FwFromProtocol => listener.enter_fw_from_protocol(node),
        Rule::FwFromIcmpType => listener.enter_fw_from_icmp_type(node),
        Rule::FwFromTcpEstablished => listener.enter_fw_from_tcp_established(node),
        Rule::FwFromSourcePrefixList => listener.enter_fw_from_source_prefix_list(node),
        Rule::FwFromDestinationPrefixList => listener.enter_fw_from_destination_prefix_list(node),
        Rule::FwThen => listener.enter_fw_then(node),
        Rule::FwThenAccept => listener.enter_fw_then_accept(node),
        Rule::FwThenDiscard => listener.enter_fw_then_discard(node),
        Rule::FwThenReject => listener.enter_fw_then_reject(node),
        Rule::FwThenNextTerm => listener.enter_fw_then_next_term(node),
        Rule::FwThenLog => listener.enter_fw_then_log(node),
        Rule::FwThenCount => listener.enter_fw_then_count(node),
        Rule::Security => listener.enter_security(node),
        Rule::SecZones => listener.enter_sec_zones(node),
        Rule::SecZone => listener.enter_sec_zone(node),
        Rule::ZoneInterfaces => listener.enter_zone_interfaces(node),
        Rule::ZoneAddressBook => listener.enter_zone_address_book(node),
        Rule::ZoneAbAddress => listener.enter_zone_ab_address(node),
        Rule::ZoneAbAddressSet => listener.enter_zone_ab_address_set(node),
        Rule::ZoneHostInboundTraffic => listener.enter_zone_host_inbound_traffic(node),
        Rule::ZoneHitSystemServices => listener.enter_zone_hit_system_services(node),
        Rule::ZoneHitProtocols => listener.enter_zone_hit_protocols(node),
        Rule::SecPolicies => listener.enter_sec_policies(node),
        Rule::SecPoliciesFromTo => listener.enter_sec_policies_from_to(node),
        Rule::SecPolicy => listener.enter_sec_policy(node),
        Rule::SpMatch => listener.enter_sp_match(node),
        Rule::SpMatchSourceAddress => listener.enter_sp_match_source_address(node),
        Rule::SpMatchDestinationAddress => listener.enter_sp_match_destination_address(node),
        Rule::SpMatchApplication => listener.enter_sp_match_application(node),
        Rule::SpThen => listener.enter_sp_then(node),
        Rule::SpThenPermit => listener.enter_sp_then_permit(node),
        Rule::SpThenDeny => listener.enter_sp_then_deny(node),
        Rule::SpThenReject => listener.enter_sp_then_reject(node),
        Rule::SpThenLog => listener.enter_sp_then_log(node),
        Rule::RoutingOptions => listener.enter_routing_options(node),
        Rule::RoRouterId => listener.enter_ro_router_id(node),
        Rule::RoAutonomousSystem => listener.enter_ro_autonomous_system(node),
        Rule::RoStatic => listener.enter_ro_static(node),
        Rule::RoStaticRoute => listener.enter_ro_static_route(node),
        Rule::SrNextHop => listener.enter_sr_next_hop(node),
        Rule::SrDiscard => listener.enter_sr_discard(node),
        Rule::SrReject => listener.enter_sr_reject(node),
        Rule::SrMetric => listener.enter_sr_metric(node),
        Rule::SrPreference => listener.enter_sr_preference(node),
        Rule::SrTag => listener.enter_sr_tag(node),
        Rule::Applications => listener.enter_applications(node),
        Rule::Application => listener.enter_application(node),
        Rule::AppProtocol => listener.enter_app_protocol(node),
        Rule::AppSourcePort => listener.enter_app_source_port(node),
        Rule::AppDestinationPort => listener.enter_app_destination_port(node),
    }
}

fn dispatch_exit<L: FlatJunosListener + ?Sized>(listener: &mut L, node: &RuleNode) {
    match node.rule {
        Rule::Configuration => listener.exit_configuration(node),
        Rule::SetLine => listener.exit_set_line(node),
        Rule::Statement => listener.exit_statement(node),
        Rule::System => listener.exit_system(node),
        Rule::SysHostName => listener.exit_sys_host_name(node),
        Rule::SysDomainName => listener.exit_sys_domain_name(node),
        Rule::SysNameServer => listener.exit_sys_name_server(node),
        Rule::SysNtpServer => listener.exit_sys_ntp_server(node),
        Rule::SysSyslogHost => listener.exit_sys_syslog_host(node),
        Rule::Interfaces => listener.exit_interfaces(node),
        Rule::Interface => listener.exit_interface(node),
        Rule::IfDisable => listener.exit_if_disable(node),
        Rule::IfDescription => listener.exit_if_description(node),
        Rule::IfMtu => listener.exit_if_mtu(node),
        Rule::IfUnit => listener.exit_if_unit(node),
        Rule::IfuFamilyInet => listener.exit_ifu_family_inet(node),
        Rule::IfuFamilyInet6 => listener.exit_ifu_family_inet6(node),
        Rule::IfiAddress => listener.exit_ifi_address(node),
        Rule::IfiFilterInput => listener.exit_ifi_filter_input(node),
        Rule::IfiFilterOutput => listener.exit_ifi_filter_output(node),
        Rule::Protocols => listener.exit_protocols(node),
        Rule::Bgp => listener.exit_bgp(node),
        Rule::BgpGroup => listener.exit_bgp_group(node),
        Rule::BgpNeighbor => listener.exit_bgp_neighbor(node),
        Rule::BgpType => listener.exit_bgp_type(node),
        Rule::BgpDescription => listener.exit_bgp_description(node),
        Rule::BgpLocalAddress => listener.exit_bgp_local_address(node),
        Rule::BgpLocalAs => listener.exit_bgp_local_as(node),
        Rule::BgpPeerAs => listener.exit_bgp_peer_as(node),
        Rule::BgpMultihop => listener.exit_bgp_multihop(node),
        Rule::BgpMultipath => listener.exit_bgp_multipath(node),
        Rule::BgpClusterId => listener.exit_bgp_cluster_id(node),
        Rule::BgpImport => listener.exit_bgp_import(node),
        Rule::BgpExport => listener.exit_bgp_export(node),
        Rule::BgpRemovePrivate => listener.exit_bgp_remove_private(node),
        Rule::PolicyOptions => listener.exit_policy_options(node),
        Rule::PrefixList => listener.exit_prefix_list(node),
        Rule::PrefixListEntry => listener.exit_prefix_list_entry(node),
        Rule::Community => listener.exit_community(node),
        Rule::CommunityMembers => listener.exit_community_members(node),
        Rule::PolicyStatement => listener.exit_policy_statement(node),
        Rule::PsTerm => listener.exit_ps_term(node),
        Rule::PsFrom => listener.exit_ps_from(node),
        Rule::PsFromProtocol => listener.exit_ps_from_protocol(node),
        Rule::PsFromPrefixList => listener.exit_ps_from_prefix_list(node),
        Rule::PsFromCommunity => listener.exit_ps_from_community(node),
        Rule::PsFromNeighbor => listener.exit_ps_from_neighbor(node),
        Rule::PsFromRouteFilter => listener.exit_ps_from_route_filter(node),
        Rule::RfExact => listener.exit_rf_exact(node),
        Rule::RfLonger => listener.exit_rf_longer(node),
        Rule::RfOrlonger => listener.exit_rf_orlonger(node),
        Rule::RfUpto => listener.exit_rf_upto(node),
        Rule::RfPrefixLengthRange => listener.exit_rf_prefix_length_range(node),
        Rule::RfThrough => listener.exit_rf_through(node),
        Rule::PsThen => listener.exit_ps_then(node),
        Rule::PsThenAccept => listener.exit_ps_then_accept(node),
        Rule::PsThenReject => listener.exit_ps_then_reject(node),
        Rule::PsThenNextTerm => listener.exit_ps_then_next_term(node),
        Rule::PsThenNextPolicy => listener.exit_ps_then_next_policy(node),
        Rule::PsThenMetric => listener.exit_ps_then_metric(node),
        Rule::PsThenLocalPreference => listener.exit_ps_then_local_preference(node),
        Rule::PsThenCommunityAdd => listener.exit_ps_then_community_add(node),
        Rule::PsThenCommunitySet => listener.exit_ps_then_community_set(node),
        Rule::PsThenCommunityDelete => listener.exit_ps_then_community_delete(node),
        Rule::Firewall => listener.exit_firewall(node),
        Rule::FwFamilyInet => listener.exit_fw_family_inet(node),
        Rule::FwFilter => listener.exit_fw_filter(node),
        Rule::FwTerm => listener.exit_fw_term(node),
        Rule::FwFrom => listener.exit_fw_from(node),
        Rule::FwFromSourceAddress => listener.exit_fw_from_source_address(node),
        Rule::FwFromDestinationAddress => listener.exit_fw_from_destination_address(node),
        Rule::FwFromSourcePort => listener.exit_fw_from_source_port(node),
        Rule::FwFromDestinationPort => listener.exit_fw_from_destination_port(node),
        Rule::FwFromPort => listener.exit_fw_from_port(node),
        Rule::FwFromProtocol => listener.exit_fw_from_protocol(node),
        Rule::FwFromIcmpType => listener.exit_fw_from_icmp_type(node),
        Rule::FwFromTcpEstablished => listener.exit_fw_from_tcp_established(node),
        Rule::FwFromSourcePrefixList => listener.exit_fw_from_source_prefix_list(node),
        Rule::FwFromDestinationPrefixList => listener.exit_fw_from_destination_prefix_list(node),
        Rule::FwThen => listener.exit_fw_then(node),
        Rule::FwThenAccept => listener.exit_fw_then_accept(node),
        Rule::FwThenDiscard => listener.exit_fw_then_discard(node),
        Rule::FwThenReject => listener.exit_fw_then_reject(node),
        Rule::FwThenNextTerm => listener.exit_fw_then_next_term(node),
        Rule::FwThenLog => listener.exit_fw_then_log(node),
        Rule::FwThenCount => listener.exit_fw_then_count(node),
        Rule::Security => listener.exit_security(node),
        Rule::SecZones => listener.exit_sec_zones(node),
        Rule::SecZone => listener.exit_sec_zone(node),
        Rule::ZoneInterfaces => listener.exit_zone_interfaces(node),
        Rule::ZoneAddressBook => listener.exit_zone_address_book(node),
        Rule::ZoneAbAddress => listener.exit_zone_ab_address(node),
        Rule::ZoneAbAddressSet => listener.exit_zone_ab_address_set(node),
        Rule::ZoneHostInboundTraffic => listener.exit_zone_host_inbound_traffic(node),
        Rule::ZoneHitSystemServices => listener.exit_zone_hit_system_services(node),
        Rule::ZoneHitProtocols => listener.exit_zone_hit_protocols(node),
        Rule::SecPolicies => listener.exit_sec_policies(node),
        Rule::SecPoliciesFromTo => listener.exit_sec_policies_from_to(node),
        Rule::SecPolicy => listener.exit_sec_policy(node),
        Rule::SpMatch => listener.exit_sp_match(node),
        Rule::SpMatchSourceAddress => listener.exit_sp_match_source_address(node),
        Rule::SpMatchDestinationAddress => listener.exit_sp_match_destination_address(node),
        Rule::SpMatchApplication => listener.exit_sp_match_application(node),
        Rule::SpThen => listener.exit_sp_then(node),
        Rule::SpThenPermit => listener.exit_sp_then_permit(node),
        Rule::SpThenDeny => listener.exit_sp_then_deny(node),
        Rule::SpThenReject => listener.exit_sp_then_reject(node),
        Rule::SpThenLog => listener.exit_sp_then_log(node),
        Rule::RoutingOptions => listener.exit_routing_options(node),
        Rule::RoRouterId => listener.exit_ro_router_id(node),
        Rule::RoAutonomousSystem => listener.exit_ro_autonomous_system(node),
        Rule::RoStatic => listener.exit_ro_static(node),
        Rule::RoStaticRoute => listener.exit_ro_static_route(node),
        Rule::SrNextHop => listener.exit_sr_next_hop(node),
        Rule::SrDiscard => listener.exit_sr_discard(node),
        Rule::SrReject => listener.exit_sr_reject(node),
        Rule::SrMetric => listener.exit_sr_metric(node),
        Rule::SrPreference => listener.exit_sr_preference(node),
        Rule::SrTag => listener.exit_sr_tag(node),
        Rule::Applications => listener.exit_applications(node),
        Rule::Application => listener.exit_application(node),
        Rule::AppProtocol => listener.exit_app_protocol(node),
        Rule::AppSourcePort => listener.exit_app_source_port(node),
        Rule::AppDestinationPort => listener.exit_app_destination_port(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::tree::{line_span, ErrorNode, TerminalNode};
    use crate::walk::listener::FlatJunosListener;

    /// The base listener: every hook left at its default
    struct BaseListener;
    impl FlatJunosListener for BaseListener {}

    #[derive(Default)]
    struct TraceListener {
        events: Vec<String>,
    }

    impl FlatJunosListener for TraceListener {
        fn enter_every_rule(&mut self, node: &RuleNode) {
            self.events.push(format!("enter:{}", node.rule));
        }
        fn exit_every_rule(&mut self, node: &RuleNode) {
            self.events.push(format!("exit:{}", node.rule));
        }
        fn visit_terminal(&mut self, node: &TerminalNode) {
            self.events.push(format!("terminal:{}", node.text));
        }
        fn visit_error_node(&mut self, node: &ErrorNode) {
            self.events.push(format!("error:{}", node.text));
        }
    }

    fn sample_tree() -> RuleNode {
        let mut root = RuleNode::new(Rule::Configuration, line_span(1));
        let mut set_line = RuleNode::new(Rule::SetLine, line_span(1));
        let mut statement = RuleNode::new(Rule::Statement, line_span(1));
        let mut system = RuleNode::new(Rule::System, line_span(1));
        let mut host = RuleNode::new(Rule::SysHostName, line_span(1));
        host.push_terminal("r1", line_span(1));
        system.push_rule(host);
        statement.push_rule(system);
        set_line.push_rule(statement);
        root.push_rule(set_line);
        root
    }

    #[test]
    fn test_default_hooks_are_no_ops() {
        // Walking any tree with the base listener must do nothing and
        // return without effect for every hook.
        let mut listener = BaseListener;
        ParseTreeWalker::walk_rule(&mut listener, &sample_tree());
    }

    #[test]
    fn test_every_rule_dispatches_enter_and_exit() {
        // Each rule node, whatever its rule, fires the every-rule pair.
        let mut listener = TraceListener::default();
        for rule in Rule::all() {
            let node = RuleNode::new(*rule, line_span(1));
            ParseTreeWalker::walk_rule(&mut listener, &node);
        }
        let enters = listener.events.iter().filter(|e| e.starts_with("enter:")).count();
        let exits = listener.events.iter().filter(|e| e.starts_with("exit:")).count();
        assert_eq!(enters, Rule::all().len());
        assert_eq!(exits, Rule::all().len());
    }

    #[test]
    fn test_depth_first_order() {
        let mut listener = TraceListener::default();
        ParseTreeWalker::walk_rule(&mut listener, &sample_tree());
        assert_eq!(
            listener.events,
            vec![
                "enter:configuration",
                "enter:set_line",
                "enter:statement",
                "enter:system",
                "enter:sys_host_name",
                "terminal:r1",
                "exit:sys_host_name",
                "exit:system",
                "exit:statement",
                "exit:set_line",
                "exit:configuration",
            ]
        );
    }

    #[test]
    fn test_error_node_hook() {
        let mut statement = RuleNode::new(Rule::Statement, line_span(1));
        statement.push_error("vlans blue", line_span(1));

        let mut listener = TraceListener::default();
        ParseTreeWalker::walk_rule(&mut listener, &statement);
        assert!(listener.events.contains(&"error:vlans blue".to_string()));
    }

    #[test]
    fn test_specific_hook_dispatch() {
        #[derive(Default)]
        struct HostnameListener {
            hostname: Option<String>,
        }
        impl FlatJunosListener for HostnameListener {
            fn enter_sys_host_name(&mut self, node: &RuleNode) {
                self.hostname = node.first_terminal_text().map(str::to_string);
            }
        }

        let mut listener = HostnameListener::default();
        ParseTreeWalker::walk_rule(&mut listener, &sample_tree());
        assert_eq!(listener.hostname.as_deref(), Some("r1"));
    }
}
