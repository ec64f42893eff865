//! Listener interface for parse-tree walks
//!
//! For every grammar rule there is an `enter_*`/`exit_*` hook pair; the
//! default implementations do nothing, so an implementation overrides only
//! the hooks it cares about and the trait itself serves as the base
//! listener. `enter_every_rule`/`exit_every_rule` fire around every rule
//! dispatch; `visit_terminal`/`visit_error_node` fire on leaves. Hooks
//! observe the tree, they never alter it.

use crate::grammar::tree::{ErrorNode, RuleNode, TerminalNode};

#[allow(unused_variables)]
pub trait FlatJunosListener {
    /// Fires before the rule-specific enter hook of every rule node
    fn enter_every_rule(&mut self, node: &RuleNode) {}
    /// Fires after the rule-specific exit hook of every rule node
    fn exit_every_rule(&mut self, node: &RuleNode) {}
    /// Fires on every terminal (matched word) leaf
    fn visit_terminal(&mut self, node: &TerminalNode) {}
    /// Fires on every error (unmatched input) leaf
    fn visit_error_node(&mut self, node: &ErrorNode) {}

    fn enter_configuration(&mut self, _node: &RuleNode) {}
    fn exit_configuration(&mut self, _node: &RuleNode) {}

    fn enter_set_line(&mut self, _node: &RuleNode) {}
    fn exit_set_line(&mut self, _node: &RuleNode) {}

    fn enter_statement(&mut self, _node: &RuleNode) {}
    fn exit_statement(&mut self, _node: &RuleNode) {}

    fn enter_system(&mut self, _node: &RuleNode) {}
    fn exit_system(&mut self, _node: &RuleNode) {}

    fn enter_sys_host_name(&mut self, _node: &RuleNode) {}
    fn exit_sys_host_name(&mut self, _node: &RuleNode) {}

    fn enter_sys_domain_name(&mut self, _node: &RuleNode) {}
    fn exit_sys_domain_name(&mut self, _node: &RuleNode) {}

    fn enter_sys_name_server(&mut self, _node: &RuleNode) {}
    fn exit_sys_name_server(&mut self, _node: &RuleNode) {}

    fn enter_sys_ntp_server(&mut self, _node: &RuleNode) {}
    fn exit_sys_ntp_server(&mut self, _node: &RuleNode) {}

    fn enter_sys_syslog_host(&mut self, _node: &RuleNode) {}
    fn exit_sys_syslog_host(&mut self, _node: &RuleNode) {}

    fn enter_interfaces(&mut self, _node: &RuleNode) {}
    fn exit_interfaces(&mut self, _node: &RuleNode) {}

    fn enter_interface(&mut self, _node: &RuleNode) {}
    fn exit_interface(&mut self, _node: &RuleNode) {}

    fn enter_if_disable(&mut self, _node: &RuleNode) {}
    fn exit_if_disable(&mut self, _node: &RuleNode) {}

    fn enter_if_description(&mut self, _node: &RuleNode) {}
    fn exit_if_description(&mut self, _node: &RuleNode) {}

    fn enter_if_mtu(&mut self, _node: &RuleNode) {}
    fn exit_if_mtu(&mut self, _node: &RuleNode) {}

    fn enter_if_unit(&mut self, _node: &RuleNode) {}
    fn exit_if_unit(&mut self, _node: &RuleNode) {}

    fn enter_ifu_family_inet(&mut self, _node: &RuleNode) {}
    fn exit_ifu_family_inet(&mut self, _node: &RuleNode) {}

    fn enter_ifu_family_inet6(&mut self, _node: &RuleNode) {}
    fn exit_ifu_family_inet6(&mut self, _node: &RuleNode) {}

    fn enter_ifi_address(&mut self, _node: &RuleNode) {}
    fn exit_ifi_address(&mut self, _node: &RuleNode) {}

    fn enter_ifi_filter_input(&mut self, _node: &RuleNode) {}
    fn exit_ifi_filter_input(&mut self, _node: &RuleNode) {}

    fn enter_ifi_filter_output(&mut self, _node: &RuleNode) {}
    fn exit_ifi_filter_output(&mut self, _node: &RuleNode) {}

    fn enter_protocols(&mut self, _node: &RuleNode) {}
    fn exit_protocols(&mut self, _node: &RuleNode) {}

    fn enter_bgp(&mut self, _node: &RuleNode) {}
    fn exit_bgp(&mut self, _node: &RuleNode) {}

    fn enter_bgp_group(&mut self, _node: &RuleNode) {}
    fn exit_bgp_group(&mut self, _node: &RuleNode) {}

    fn enter_bgp_neighbor(&mut self, _node: &RuleNode) {}
    fn exit_bgp_neighbor(&mut self, _node: &RuleNode) {}

    fn enter_bgp_type(&mut self, _node: &RuleNode) {}
    fn exit_bgp_type(&mut self, _node: &RuleNode) {}

    fn enter_bgp_description(&mut self, _node: &RuleNode) {}
    fn exit_bgp_description(&mut self, _node: &RuleNode) {}

    fn enter_bgp_local_address(&mut self, _node: &RuleNode) {}
    fn exit_bgp_local_address(&mut self, _node: &RuleNode) {}

    fn enter_bgp_local_as(&mut self, _node: &RuleNode) {}
    fn exit_bgp_local_as(&mut self, _node: &RuleNode) {}

    fn enter_bgp_peer_as(&mut self, _node: &RuleNode) {}
    fn exit_bgp_peer_as(&mut self, _node: &RuleNode) {}

    fn enter_bgp_multihop(&mut self, _node: &RuleNode) {}
    fn exit_bgp_multihop(&mut self, _node: &RuleNode) {}

    fn enter_bgp_multipath(&mut self, _node: &RuleNode) {}
    fn exit_bgp_multipath(&mut self, _node: &RuleNode) {}

    fn enter_bgp_cluster_id(&mut self, _node: &RuleNode) {}
    fn exit_bgp_cluster_id(&mut self, _node: &RuleNode) {}

    fn enter_bgp_import(&mut self, _node: &RuleNode) {}
    fn exit_bgp_import(&mut self, _node: &RuleNode) {}

    fn enter_bgp_export(&mut self, _node: &RuleNode) {}
    fn exit_bgp_export(&mut self, _node: &RuleNode) {}

    fn enter_bgp_remove_private(&mut self, _node: &RuleNode) {}
    fn exit_bgp_remove_private(&mut self, _node: &RuleNode) {}

    fn enter_policy_options(&mut self, _node: &RuleNode) {}
    fn exit_policy_options(&mut self, _node: &RuleNode) {}

    fn enter_prefix_list(&mut self, _node: &RuleNode) {}
    fn exit_prefix_list(&mut self, _node: &RuleNode) {}

    fn enter_prefix_list_entry(&mut self, _node: &RuleNode) {}
    fn exit_prefix_list_entry(&mut self, _node: &RuleNode) {}

    fn enter_community(&mut self, _node: &RuleNode) {}
    fn exit_community(&mut self, _node: &RuleNode) {}

    fn enter_community_members(&mut self, _node: &RuleNode) {}
    fn exit_community_members(&mut self, _node: &RuleNode) {}

    fn enter_policy_statement(&mut self, _node: &RuleNode) {}
    fn exit_policy_statement(&mut self, _node: &RuleNode) {}

    fn enter_ps_term(&mut self, _node: &RuleNode) {}
    fn exit_ps_term(&mut self, _node: &RuleNode) {}

    fn enter_ps_from(&mut self, _node: &RuleNode) {}
    fn exit_ps_from(&mut self, _node: &RuleNode) {}

    fn enter_ps_from_protocol(&mut self, _node: &RuleNode) {}
    fn exit_ps_from_protocol(&mut self, _node: &RuleNode) {}

    fn enter_ps_from_prefix_list(&mut self, _node: &RuleNode) {}
    fn exit_ps_from_prefix_list(&mut self, _node: &RuleNode) {}

    fn enter_ps_from_community(&mut self, _node: &RuleNode) {}
    fn exit_ps_from_community(&mut self, _node: &RuleNode) {}

    fn enter_ps_from_neighbor(&mut self, _node: &RuleNode) {}
    fn exit_ps_from_neighbor(&mut self, _node: &RuleNode) {}

    fn enter_ps_from_route_filter(&mut self, _node: &RuleNode) {}
    fn exit_ps_from_route_filter(&mut self, _node: &RuleNode) {}

    fn enter_rf_exact(&mut self, _node: &RuleNode) {}
    fn exit_rf_exact(&mut self, _node: &RuleNode) {}

    fn enter_rf_longer(&mut self, _node: &RuleNode) {}
    fn exit_rf_longer(&mut self, _node: &RuleNode) {}

    fn enter_rf_orlonger(&mut self, _node: &RuleNode) {}
    fn exit_rf_orlonger(&mut self, _node: &RuleNode) {}

    fn enter_rf_upto(&mut self, _node: &RuleNode) {}
    fn exit_rf_upto(&mut self, _node: &RuleNode) {}

    fn enter_rf_prefix_length_range(&mut self, _node: &RuleNode) {}
    fn exit_rf_prefix_length_range(&mut self, _node: &RuleNode) {}

    fn enter_rf_through(&mut self, _node: &RuleNode) {}
    fn exit_rf_through(&mut self, _node: &RuleNode) {}

    fn enter_ps_then(&mut self, _node: &RuleNode) {}
    fn exit_ps_then(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_accept(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_accept(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_reject(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_reject(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_next_term(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_next_term(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_next_policy(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_next_policy(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_metric(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_metric(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_local_preference(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_local_preference(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_community_add(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_community_add(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_community_set(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_community_set(&mut self, _node: &RuleNode) {}

    fn enter_ps_then_community_delete(&mut self, _node: &RuleNode) {}
    fn exit_ps_then_community_delete(&mut self, _node: &RuleNode) {}

    fn enter_firewall(&mut self, _node: &RuleNode) {}
    fn exit_firewall(&mut self, _node: &RuleNode) {}

    fn enter_fw_family_inet(&mut self, _node: &RuleNode) {}
    fn exit_fw_family_inet(&mut self, _node: &RuleNode) {}

    fn enter_fw_filter(&mut self, _node: &RuleNode) {}
    fn exit_fw_filter(&mut self, _node: &RuleNode) {}

    fn enter_fw_term(&mut self, _node: &RuleNode) {}
    fn exit_fw_term(&mut self, _node: &RuleNode) {}

    fn enter_fw_from(&mut self, _node: &RuleNode) {}
    fn exit_fw_from(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_source_address(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_source_address(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_destination_address(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_destination_address(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_source_port(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_source_port(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_destination_port(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_destination_port(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_port(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_port(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_protocol(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_protocol(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_icmp_type(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_icmp_type(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_tcp_established(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_tcp_established(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_source_prefix_list(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_source_prefix_list(&mut self, _node: &RuleNode) {}

    fn enter_fw_from_destination_prefix_list(&mut self, _node: &RuleNode) {}
    fn exit_fw_from_destination_prefix_list(&mut self, _node: &RuleNode) {}

    fn enter_fw_then(&mut self, _node: &RuleNode) {}
    fn exit_fw_then(&mut self, _node: &RuleNode) {}

    fn enter_fw_then_accept(&mut self, _node: &RuleNode) {}
    fn exit_fw_then_accept(&mut self, _node: &RuleNode) {}

    fn enter_fw_then_discard(&mut self, _node: &RuleNode) {}
    fn exit_fw_then_discard(&mut self, _node: &RuleNode) {}

    fn enter_fw_then_reject(&mut self, _node: &RuleNode) {}
    fn exit_fw_then_reject(&mut self, _node: &RuleNode) {}

    fn enter_fw_then_next_term(&mut self, _node: &RuleNode) {}
    fn exit_fw_then_next_term(&mut self, _node: &RuleNode) {}

    fn enter_fw_then_log(&mut self, _node: &RuleNode) {}
    fn exit_fw_then_log(&mut self, _node: &RuleNode) {}

    fn enter_fw_then_count(&mut self, _node: &RuleNode) {}
    fn exit_fw_then_count(&mut self, _node: &RuleNode) {}

    fn enter_security(&mut self, _node: &RuleNode) {}
    fn exit_security(&mut self, _node: &RuleNode) {}

    fn enter_sec_zones(&mut self, _node: &RuleNode) {}
    fn exit_sec_zones(&mut self, _node: &RuleNode) {}

    fn enter_sec_zone(&mut self, _node: &RuleNode) {}
    fn exit_sec_zone(&mut self, _node: &RuleNode) {}

    fn enter_zone_interfaces(&mut self, _node: &RuleNode) {}
    fn exit_zone_interfaces(&mut self, _node: &RuleNode) {}

    fn enter_zone_address_book(&mut self, _node: &RuleNode) {}
    fn exit_zone_address_book(&mut self, _node: &RuleNode) {}

    fn enter_zone_ab_address(&mut self, _node: &RuleNode) {}
    fn exit_zone_ab_address(&mut self, _node: &RuleNode) {}

    fn enter_zone_ab_address_set(&mut self, _node: &RuleNode) {}
    fn exit_zone_ab_address_set(&mut self, _node: &RuleNode) {}

    fn enter_zone_host_inbound_traffic(&mut self, _node: &RuleNode) {}
    fn exit_zone_host_inbound_traffic(&mut self, _node: &RuleNode) {}

    fn enter_zone_hit_system_services(&mut self, _node: &RuleNode) {}
    fn exit_zone_hit_system_services(&mut self, _node: &RuleNode) {}

    fn enter_zone_hit_protocols(&mut self, _node: &RuleNode) {}
    fn exit_zone_hit_protocols(&mut self, _node: &RuleNode) {}

    fn enter_sec_policies(&mut self, _node: &RuleNode) {}
    fn exit_sec_policies(&mut self, _node: &RuleNode) {}

    fn enter_sec_policies_from_to(&mut self, _node: &RuleNode) {}
    fn exit_sec_policies_from_to(&mut self, _node: &RuleNode) {}

    fn enter_sec_policy(&mut self, _node: &RuleNode) {}
    fn exit_sec_policy(&mut self, _node: &RuleNode) {}

    fn enter_sp_match(&mut self, _node: &RuleNode) {}
    fn exit_sp_match(&mut self, _node: &RuleNode) {}

    fn enter_sp_match_source_address(&mut self, _node: &RuleNode) {}
    fn exit_sp_match_source_address(&mut self, _node: &RuleNode) {}

    fn enter_sp_match_destination_address(&mut self, _node: &RuleNode) {}
    fn exit_sp_match_destination_address(&mut self, _node: &RuleNode) {}

    fn enter_sp_match_application(&mut self, _node: &RuleNode) {}
    fn exit_sp_match_application(&mut self, _node: &RuleNode) {}

    fn enter_sp_then(&mut self, _node: &RuleNode) {}
    fn exit_sp_then(&mut self, _node: &RuleNode) {}

    fn enter_sp_then_permit(&mut self, _node: &RuleNode) {}
    fn exit_sp_then_permit(&mut self, _node: &RuleNode) {}

    fn enter_sp_then_deny(&mut self, _node: &RuleNode) {}
    fn exit_sp_then_deny(&mut self, _node: &RuleNode) {}

    fn enter_sp_then_reject(&mut self, _node: &RuleNode) {}
    fn exit_sp_then_reject(&mut self, _node: &RuleNode) {}

    fn enter_sp_then_log(&mut self, _node: &RuleNode) {}
    fn exit_sp_then_log(&mut self, _node: &RuleNode) {}

    fn enter_routing_options(&mut self, _node: &RuleNode) {}
    fn exit_routing_options(&mut self, _node: &RuleNode) {}

    fn enter_ro_router_id(&mut self, _node: &RuleNode) {}
    fn exit_ro_router_id(&mut self, _node: &RuleNode) {}

    fn enter_ro_autonomous_system(&mut self, _node: &RuleNode) {}
    fn exit_ro_autonomous_system(&mut self, _node: &RuleNode) {}

    fn enter_ro_static(&mut self, _node: &RuleNode) {}
    fn exit_ro_static(&mut self, _node: &RuleNode) {}

    fn enter_ro_static_route(&mut self, _node: &RuleNode) {}
    fn exit_ro_static_route(&mut self, _node: &RuleNode) {}

    fn enter_sr_next_hop(&mut self, _node: &RuleNode) {}
    fn exit_sr_next_hop(&mut self, _node: &RuleNode) {}

    fn enter_sr_discard(&mut self, _node: &RuleNode) {}
    fn exit_sr_discard(&mut self, _node: &RuleNode) {}

    fn enter_sr_reject(&mut self, _node: &RuleNode) {}
    fn exit_sr_reject(&mut self, _node: &RuleNode) {}

    fn enter_sr_metric(&mut self, _node: &RuleNode) {}
    fn exit_sr_metric(&mut self, _node: &RuleNode) {}

    fn enter_sr_preference(&mut self, _node: &RuleNode) {}
    fn exit_sr_preference(&mut self, _node: &RuleNode) {}

    fn enter_sr_tag(&mut self, _node: &RuleNode) {}
    fn exit_sr_tag(&mut self, _node: &RuleNode) {}

    fn enter_applications(&mut self, _node: &RuleNode) {}
    fn exit_applications(&mut self, _node: &RuleNode) {}

    fn enter_application(&mut self, _node: &RuleNode) {}
    fn exit_application(&mut self, _node: &RuleNode) {}

    fn enter_app_protocol(&mut self, _node: &RuleNode) {}
    fn exit_app_protocol(&mut self, _node: &RuleNode) {}

    fn enter_app_source_port(&mut self, _node: &RuleNode) {}
    fn exit_app_source_port(&mut self, _node: &RuleNode) {}

    fn enter_app_destination_port(&mut self, _node: &RuleNode) {}
    fn exit_app_destination_port(&mut self, _node: &RuleNode) {}
}
