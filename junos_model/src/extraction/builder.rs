//! The semantic extraction listener
//!
//! Implements the parse-tree listener over the flat-Junos grammar and
//! populates a `JunosConfiguration` during the walk. State is a cursor of
//! "current" objects (interface, unit, BGP scope, filter, term, zone, ...)
//! set by enter hooks and cleared when the statement's set line exits.
//! Malformed values and statements outside the modeled subset become
//! warnings, never failures.

use crate::extraction::warnings::Warnings;
use crate::model::{
    builtin_application, is_implicitly_defined, BgpGroupType, BgpSettings, FwAction, IpProtocol,
    JunosConfiguration, PsAction, RouteFilterLine, RouteFilterModifier, RoutingProtocol,
    SecPolicyAction,
};
use crate::types::{looks_like_ipv6, parse_port_word, Ip, Prefix};
use junos_parser::grammar::tree::{ErrorNode, RuleNode};
use junos_parser::walk::{FlatJunosListener, ParseTreeWalker};

/// Where BGP attribute statements currently apply
#[derive(Debug, Clone)]
enum BgpScope {
    Group(String),
    Neighbor { group: String, address: Ip },
    /// A scope that failed to establish; attribute statements under it
    /// are dropped but the enter/exit pairing stays balanced
    Invalid,
}

/// Builds the device model from a configuration parse tree
pub struct ConfigBuilder {
    config: JunosConfiguration,
    warnings: Warnings,

    current_line: u32,
    current_source_group: Option<String>,
    hostname_explicit: bool,

    current_interface: Option<String>,
    current_unit: Option<u32>,

    bgp_scopes: Vec<BgpScope>,

    current_filter: Option<String>,
    current_fw_term: Option<String>,

    current_policy: Option<String>,
    current_ps_term: Option<String>,
    current_route_filter: Option<(Prefix, RouteFilterModifier)>,

    current_prefix_list: Option<String>,
    current_community: Option<String>,

    current_zone: Option<String>,
    current_zone_pair: Option<(String, String)>,
    current_sec_policy: Option<String>,

    current_static_prefix: Option<Prefix>,
    current_application: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: JunosConfiguration::new(),
            warnings: Warnings::new(),
            current_line: 0,
            current_source_group: None,
            hostname_explicit: false,
            current_interface: None,
            current_unit: None,
            bgp_scopes: Vec::new(),
            current_filter: None,
            current_fw_term: None,
            current_policy: None,
            current_ps_term: None,
            current_route_filter: None,
            current_prefix_list: None,
            current_community: None,
            current_zone: None,
            current_zone_pair: None,
            current_sec_policy: None,
            current_static_prefix: None,
            current_application: None,
        }
    }

    /// Walk `tree` and return the populated model plus warnings
    pub fn build(tree: &RuleNode) -> (JunosConfiguration, Warnings) {
        let mut builder = Self::new();
        ParseTreeWalker::walk_rule(&mut builder, tree);
        builder.finish()
    }

    pub fn finish(self) -> (JunosConfiguration, Warnings) {
        (self.config, self.warnings)
    }

    // ------------------------------------------------------------------
    // VALUE HELPERS
    // ------------------------------------------------------------------

    fn line_of(&self, node: &RuleNode) -> u32 {
        let line = node.span.line();
        if line != 0 {
            line
        } else {
            self.current_line
        }
    }

    fn require_value<'a>(&mut self, node: &'a RuleNode, what: &str) -> Option<&'a str> {
        let line = self.line_of(node);
        match node.first_terminal_text() {
            Some(text) => Some(text),
            None => {
                self.warnings.red_flag(format!("missing {} value", what), line);
                None
            }
        }
    }

    fn parse_u32(&mut self, node: &RuleNode, what: &str) -> Option<u32> {
        let line = self.line_of(node);
        let text = self.require_value(node, what)?;
        match text.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.warnings
                    .red_flag(format!("invalid {} value '{}'", what, text), line);
                None
            }
        }
    }

    fn parse_ip(&mut self, node: &RuleNode, what: &str) -> Option<Ip> {
        let line = self.line_of(node);
        let text = self.require_value(node, what)?;
        if looks_like_ipv6(text) {
            self.warnings
                .unimplemented(format!("IPv6 {} '{}'", what, text), line);
            return None;
        }
        match text.parse() {
            Ok(ip) => Some(ip),
            Err(_) => {
                self.warnings
                    .red_flag(format!("invalid {} '{}'", what, text), line);
                None
            }
        }
    }

    fn parse_prefix(&mut self, node: &RuleNode, what: &str) -> Option<Prefix> {
        let line = self.line_of(node);
        let text = self.require_value(node, what)?;
        if looks_like_ipv6(text) {
            self.warnings
                .unimplemented(format!("IPv6 {} '{}'", what, text), line);
            return None;
        }
        // a bare address is a host prefix
        let parsed = if text.contains('/') {
            text.parse()
        } else {
            format!("{}/32", text).parse()
        };
        match parsed {
            Ok(prefix) => Some(prefix),
            Err(_) => {
                self.warnings
                    .red_flag(format!("invalid {} '{}'", what, text), line);
                None
            }
        }
    }

    fn parse_prefix_length(&mut self, node: &RuleNode, what: &str) -> Option<u8> {
        let line = self.line_of(node);
        let text = self.require_value(node, what)?;
        match text.trim_start_matches('/').parse::<u8>() {
            Ok(length) if length <= Prefix::MAX_LENGTH => Some(length),
            _ => {
                self.warnings
                    .red_flag(format!("invalid {} '{}'", what, text), line);
                None
            }
        }
    }

    fn parse_icmp_type(&mut self, node: &RuleNode) -> Option<u8> {
        let line = self.line_of(node);
        let text = self.require_value(node, "icmp-type")?;
        let value = match text {
            "echo-reply" => Some(0),
            "unreachable" => Some(3),
            "redirect" => Some(5),
            "echo-request" => Some(8),
            "router-advertisement" => Some(9),
            "time-exceeded" => Some(11),
            "parameter-problem" => Some(12),
            _ => text.parse::<u8>().ok(),
        };
        if value.is_none() {
            self.warnings
                .red_flag(format!("invalid icmp-type '{}'", text), line);
        }
        value
    }

    // ------------------------------------------------------------------
    // SCOPE HELPERS
    // ------------------------------------------------------------------

    fn bgp_settings_mut(&mut self) -> Option<&mut BgpSettings> {
        let scope = self.bgp_scopes.last().cloned();
        let bgp = self.config.bgp_mut();
        match scope {
            None => Some(&mut bgp.settings),
            Some(BgpScope::Group(name)) => Some(&mut bgp.group_mut(&name).settings),
            Some(BgpScope::Neighbor { group, address }) => {
                Some(&mut bgp.group_mut(&group).neighbor_mut(address).settings)
            }
            Some(BgpScope::Invalid) => None,
        }
    }

    fn fw_term_mut(&mut self) -> Option<&mut crate::model::FwTerm> {
        let filter = self.current_filter.clone()?;
        let term = self.current_fw_term.clone()?;
        Some(self.config.firewall_filter_mut(&filter).term_mut(&term))
    }

    fn ps_term_mut(&mut self) -> Option<&mut crate::model::PsTerm> {
        let policy = self.current_policy.clone()?;
        let term = self.current_ps_term.clone().unwrap_or_default();
        Some(self.config.policy_statement_mut(&policy).term_mut(&term))
    }

    fn sec_policy_mut(&mut self) -> Option<&mut crate::model::SecurityPolicy> {
        let (from_zone, to_zone) = self.current_zone_pair.clone()?;
        let name = self.current_sec_policy.clone()?;
        Some(
            self.config
                .zone_pair_mut(&from_zone, &to_zone)
                .policy_mut(&name),
        )
    }

    // ------------------------------------------------------------------
    // FINALIZATION
    // ------------------------------------------------------------------

    fn finalize(&mut self) {
        if let Some(bgp) = self.config.bgp.as_mut() {
            bgp.apply_inheritance();
        }
        self.check_references();
    }

    /// Post-walk reference validation: names used in one part of the
    /// configuration must be defined in another.
    fn check_references(&mut self) {
        let mut missing: Vec<String> = Vec::new();

        for interface in self.config.interfaces.values() {
            for unit in interface.units.values() {
                if let Some(family) = &unit.family_inet {
                    for filter in [&family.input_filter, &family.output_filter]
                        .into_iter()
                        .flatten()
                    {
                        if !self.config.firewall_filters.contains_key(filter) {
                            missing.push(format!(
                                "firewall filter '{}' referenced by {} is not defined",
                                filter,
                                interface.unit_name(unit.number)
                            ));
                        }
                    }
                }
            }
        }

        if let Some(bgp) = &self.config.bgp {
            let mut policy_refs: Vec<&String> = Vec::new();
            policy_refs.extend(&bgp.settings.import_policies);
            policy_refs.extend(&bgp.settings.export_policies);
            for group in bgp.groups.values() {
                policy_refs.extend(&group.settings.import_policies);
                policy_refs.extend(&group.settings.export_policies);
                for neighbor in group.neighbors.values() {
                    policy_refs.extend(&neighbor.settings.import_policies);
                    policy_refs.extend(&neighbor.settings.export_policies);
                }
            }
            policy_refs.sort();
            policy_refs.dedup();
            for name in policy_refs {
                if !self.config.policy_statements.contains_key(name) {
                    missing.push(format!("policy-statement '{}' referenced by bgp is not defined", name));
                }
            }
        }

        let mut prefix_list_refs: Vec<String> = Vec::new();
        for policy in self.config.policy_statements.values() {
            for term in &policy.terms {
                prefix_list_refs.extend(term.from.prefix_lists.iter().cloned());
            }
        }
        for filter in self.config.firewall_filters.values() {
            for term in &filter.terms {
                prefix_list_refs.extend(term.from.source_prefix_lists.iter().cloned());
                prefix_list_refs.extend(term.from.destination_prefix_lists.iter().cloned());
            }
        }
        prefix_list_refs.sort();
        prefix_list_refs.dedup();
        for name in prefix_list_refs {
            if !self.config.prefix_lists.contains_key(&name) {
                missing.push(format!("prefix-list '{}' is referenced but not defined", name));
            }
        }

        for pair in &self.config.zone_pair_policies {
            for zone in [&pair.from_zone, &pair.to_zone] {
                if !self.config.zones.contains_key(zone) {
                    missing.push(format!(
                        "security zone '{}' referenced by policies {}->{} is not defined",
                        zone, pair.from_zone, pair.to_zone
                    ));
                }
            }
            for policy in &pair.policies {
                for app in &policy.match_applications {
                    let defined = is_implicitly_defined(app)
                        || self.config.applications.contains_key(app)
                        || builtin_application(app).is_some();
                    if !defined {
                        missing.push(format!(
                            "application '{}' referenced by policy '{}' is not defined",
                            app, policy.name
                        ));
                    }
                }
            }
        }
        missing.sort();
        missing.dedup();

        for text in missing {
            self.warnings.red_flag(text, 0);
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatJunosListener for ConfigBuilder {
    // ------------------------------------------------------------------
    // STRUCTURE
    // ------------------------------------------------------------------

    fn enter_set_line(&mut self, node: &RuleNode) {
        self.current_line = node.span.line();
        self.current_source_group = node.source_group.clone();
    }

    fn exit_set_line(&mut self, _node: &RuleNode) {
        self.current_source_group = None;
        self.current_interface = None;
        self.current_unit = None;
        self.bgp_scopes.clear();
        self.current_filter = None;
        self.current_fw_term = None;
        self.current_policy = None;
        self.current_ps_term = None;
        self.current_route_filter = None;
        self.current_prefix_list = None;
        self.current_community = None;
        self.current_zone = None;
        self.current_zone_pair = None;
        self.current_sec_policy = None;
        self.current_static_prefix = None;
        self.current_application = None;
    }

    fn exit_configuration(&mut self, _node: &RuleNode) {
        self.finalize();
    }

    fn visit_error_node(&mut self, node: &ErrorNode) {
        let line = if node.span.line() != 0 {
            node.span.line()
        } else {
            self.current_line
        };
        self.warnings
            .red_flag(format!("unrecognized statement fragment '{}'", node.text), line);
    }

    // ------------------------------------------------------------------
    // SYSTEM
    // ------------------------------------------------------------------

    fn enter_sys_host_name(&mut self, node: &RuleNode) {
        let Some(value) = self.require_value(node, "host-name") else {
            return;
        };
        let value = value.to_string();
        if self.current_source_group.is_some() {
            // a group never overrides an explicitly configured hostname
            if !self.hostname_explicit {
                self.config.system.host_name = Some(value);
            }
        } else {
            self.config.system.host_name = Some(value);
            self.hostname_explicit = true;
        }
    }

    fn enter_sys_domain_name(&mut self, node: &RuleNode) {
        if let Some(value) = self.require_value(node, "domain-name") {
            self.config.system.domain_name = Some(value.to_string());
        }
    }

    fn enter_sys_name_server(&mut self, node: &RuleNode) {
        if let Some(ip) = self.parse_ip(node, "name-server") {
            self.config.system.name_servers.insert(ip);
        }
    }

    fn enter_sys_ntp_server(&mut self, node: &RuleNode) {
        if let Some(value) = self.require_value(node, "ntp server") {
            self.config.system.ntp_servers.insert(value.to_string());
        }
    }

    fn enter_sys_syslog_host(&mut self, node: &RuleNode) {
        if let Some(value) = self.require_value(node, "syslog host") {
            self.config.system.syslog_hosts.insert(value.to_string());
        }
    }

    // ------------------------------------------------------------------
    // INTERFACES
    // ------------------------------------------------------------------

    fn enter_interface(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "interface name") {
            let name = name.to_string();
            self.config.interface_mut(&name);
            self.current_interface = Some(name);
        }
    }

    fn enter_if_disable(&mut self, _node: &RuleNode) {
        let Some(name) = self.current_interface.clone() else {
            return;
        };
        let interface = self.config.interface_mut(&name);
        match self.current_unit {
            Some(unit) => interface.unit_mut(unit).disabled = true,
            None => interface.disabled = true,
        }
    }

    fn enter_if_description(&mut self, node: &RuleNode) {
        let Some(text) = node.first_terminal_text().map(str::to_string) else {
            return;
        };
        let Some(name) = self.current_interface.clone() else {
            return;
        };
        let interface = self.config.interface_mut(&name);
        match self.current_unit {
            Some(unit) => interface.unit_mut(unit).description = Some(text),
            None => interface.description = Some(text),
        }
    }

    fn enter_if_mtu(&mut self, node: &RuleNode) {
        let Some(mtu) = self.parse_u32(node, "mtu") else {
            return;
        };
        if let Some(name) = self.current_interface.clone() {
            self.config.interface_mut(&name).mtu = Some(mtu);
        }
    }

    fn enter_if_unit(&mut self, node: &RuleNode) {
        let Some(number) = self.parse_u32(node, "unit number") else {
            return;
        };
        if let Some(name) = self.current_interface.clone() {
            self.config.interface_mut(&name).unit_mut(number);
            self.current_unit = Some(number);
        }
    }

    fn exit_if_unit(&mut self, _node: &RuleNode) {
        self.current_unit = None;
    }

    fn enter_ifu_family_inet(&mut self, _node: &RuleNode) {
        if let (Some(name), Some(unit)) = (self.current_interface.clone(), self.current_unit) {
            self.config
                .interface_mut(&name)
                .unit_mut(unit)
                .family_inet_mut();
        }
    }

    fn enter_ifu_family_inet6(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        self.warnings.unimplemented("family inet6", line);
        if let (Some(name), Some(unit)) = (self.current_interface.clone(), self.current_unit) {
            self.config
                .interface_mut(&name)
                .unit_mut(unit)
                .family_inet6_present = true;
        }
    }

    fn enter_ifi_address(&mut self, node: &RuleNode) {
        let Some(prefix) = self.parse_prefix(node, "interface address") else {
            return;
        };
        let (Some(name), Some(unit)) = (self.current_interface.clone(), self.current_unit) else {
            return;
        };
        let mut address = crate::model::InterfaceAddress::new(prefix);
        for extra in node.terminal_texts().iter().skip(1) {
            match *extra {
                "primary" => address.primary = true,
                "preferred" => address.preferred = true,
                other => {
                    let line = self.line_of(node);
                    self.warnings
                        .unimplemented(format!("address option '{}'", other), line);
                }
            }
        }
        let family = self
            .config
            .interface_mut(&name)
            .unit_mut(unit)
            .family_inet_mut();
        if !family.addresses.iter().any(|a| a.prefix == prefix) {
            family.addresses.push(address);
        }
    }

    fn enter_ifi_filter_input(&mut self, node: &RuleNode) {
        let Some(filter) = self.require_value(node, "input filter") else {
            return;
        };
        let filter = filter.to_string();
        if let (Some(name), Some(unit)) = (self.current_interface.clone(), self.current_unit) {
            self.config
                .interface_mut(&name)
                .unit_mut(unit)
                .family_inet_mut()
                .input_filter = Some(filter);
        }
    }

    fn enter_ifi_filter_output(&mut self, node: &RuleNode) {
        let Some(filter) = self.require_value(node, "output filter") else {
            return;
        };
        let filter = filter.to_string();
        if let (Some(name), Some(unit)) = (self.current_interface.clone(), self.current_unit) {
            self.config
                .interface_mut(&name)
                .unit_mut(unit)
                .family_inet_mut()
                .output_filter = Some(filter);
        }
    }

    // ------------------------------------------------------------------
    // BGP
    // ------------------------------------------------------------------

    fn enter_bgp(&mut self, _node: &RuleNode) {
        self.config.bgp_mut();
    }

    fn enter_bgp_group(&mut self, node: &RuleNode) {
        match self.require_value(node, "bgp group name") {
            Some(name) => {
                let name = name.to_string();
                self.config.bgp_mut().group_mut(&name);
                self.bgp_scopes.push(BgpScope::Group(name));
            }
            None => self.bgp_scopes.push(BgpScope::Invalid),
        }
    }

    fn exit_bgp_group(&mut self, _node: &RuleNode) {
        self.bgp_scopes.pop();
    }

    fn enter_bgp_neighbor(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let group = match self.bgp_scopes.last() {
            Some(BgpScope::Group(name)) => Some(name.clone()),
            _ => None,
        };
        let Some(group) = group else {
            self.warnings
                .red_flag("bgp neighbor outside a group", line);
            self.bgp_scopes.push(BgpScope::Invalid);
            return;
        };
        match self.parse_ip(node, "neighbor address") {
            Some(address) => {
                self.config.bgp_mut().group_mut(&group).neighbor_mut(address);
                self.bgp_scopes.push(BgpScope::Neighbor { group, address });
            }
            None => self.bgp_scopes.push(BgpScope::Invalid),
        }
    }

    fn exit_bgp_neighbor(&mut self, _node: &RuleNode) {
        self.bgp_scopes.pop();
    }

    fn enter_bgp_type(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let Some(text) = self.require_value(node, "bgp type") else {
            return;
        };
        match BgpGroupType::parse(text) {
            Some(group_type) => {
                if let Some(settings) = self.bgp_settings_mut() {
                    settings.group_type = Some(group_type);
                }
            }
            None => self
                .warnings
                .red_flag(format!("invalid bgp type '{}'", text), line),
        }
    }

    fn enter_bgp_description(&mut self, node: &RuleNode) {
        let Some(text) = node.first_terminal_text().map(str::to_string) else {
            return;
        };
        if let Some(settings) = self.bgp_settings_mut() {
            settings.description = Some(text);
        }
    }

    fn enter_bgp_local_address(&mut self, node: &RuleNode) {
        if let Some(ip) = self.parse_ip(node, "local-address") {
            if let Some(settings) = self.bgp_settings_mut() {
                settings.local_address = Some(ip);
            }
        }
    }

    fn enter_bgp_local_as(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        if node.terminal_texts().len() > 1 {
            self.warnings.unimplemented("local-as options", line);
        }
        if let Some(asn) = self.parse_u32(node, "local-as") {
            if let Some(settings) = self.bgp_settings_mut() {
                settings.local_as = Some(asn);
            }
        }
    }

    fn enter_bgp_peer_as(&mut self, node: &RuleNode) {
        if let Some(asn) = self.parse_u32(node, "peer-as") {
            if let Some(settings) = self.bgp_settings_mut() {
                settings.peer_as = Some(asn);
            }
        }
    }

    fn enter_bgp_multihop(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let texts: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        let mut ttl = None;
        if let [marker, value] = texts.as_slice() {
            if marker == "ttl" {
                match value.parse::<u8>() {
                    Ok(parsed) => ttl = Some(parsed),
                    Err(_) => self
                        .warnings
                        .red_flag(format!("invalid multihop ttl '{}'", value), line),
                }
            }
        }
        if let Some(settings) = self.bgp_settings_mut() {
            settings.multihop = true;
            if ttl.is_some() {
                settings.multihop_ttl = ttl;
            }
        }
    }

    fn enter_bgp_multipath(&mut self, node: &RuleNode) {
        let multiple_as = node.first_terminal_text() == Some("multiple-as");
        if let Some(settings) = self.bgp_settings_mut() {
            settings.multipath = true;
            settings.multipath_multiple_as |= multiple_as;
        }
    }

    fn enter_bgp_cluster_id(&mut self, node: &RuleNode) {
        if let Some(ip) = self.parse_ip(node, "cluster id") {
            if let Some(settings) = self.bgp_settings_mut() {
                settings.cluster_id = Some(ip);
            }
        }
    }

    fn enter_bgp_import(&mut self, node: &RuleNode) {
        let policies: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        if let Some(settings) = self.bgp_settings_mut() {
            for policy in policies {
                if !settings.import_policies.contains(&policy) {
                    settings.import_policies.push(policy);
                }
            }
        }
    }

    fn enter_bgp_export(&mut self, node: &RuleNode) {
        let policies: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        if let Some(settings) = self.bgp_settings_mut() {
            for policy in policies {
                if !settings.export_policies.contains(&policy) {
                    settings.export_policies.push(policy);
                }
            }
        }
    }

    fn enter_bgp_remove_private(&mut self, _node: &RuleNode) {
        if let Some(settings) = self.bgp_settings_mut() {
            settings.remove_private = true;
        }
    }

    // ------------------------------------------------------------------
    // POLICY OPTIONS
    // ------------------------------------------------------------------

    fn enter_prefix_list(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "prefix-list name") {
            let name = name.to_string();
            self.config.prefix_list_mut(&name);
            self.current_prefix_list = Some(name);
        }
    }

    fn enter_prefix_list_entry(&mut self, node: &RuleNode) {
        let Some(prefix) = self.parse_prefix(node, "prefix-list entry") else {
            return;
        };
        if let Some(name) = self.current_prefix_list.clone() {
            self.config.prefix_list_mut(&name).add_prefix(prefix);
        }
    }

    fn enter_community(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "community name") {
            let name = name.to_string();
            self.config.community_mut(&name);
            self.current_community = Some(name);
        }
    }

    fn enter_community_members(&mut self, node: &RuleNode) {
        let members: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        if let Some(name) = self.current_community.clone() {
            let community = self.config.community_mut(&name);
            for member in members {
                if !community.members.contains(&member) {
                    community.members.push(member);
                }
            }
        }
    }

    fn enter_policy_statement(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "policy-statement name") {
            let name = name.to_string();
            self.config.policy_statement_mut(&name);
            self.current_policy = Some(name);
        }
    }

    fn enter_ps_term(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "term name") {
            self.current_ps_term = Some(name.to_string());
            self.ps_term_mut();
        }
    }

    fn enter_ps_from_protocol(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let texts: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        for text in texts {
            match RoutingProtocol::parse(&text) {
                Some(protocol) => {
                    if let Some(term) = self.ps_term_mut() {
                        if !term.from.protocols.contains(&protocol) {
                            term.from.protocols.push(protocol);
                        }
                    }
                }
                None => self
                    .warnings
                    .red_flag(format!("invalid from protocol '{}'", text), line),
            }
        }
    }

    fn enter_ps_from_prefix_list(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "from prefix-list") {
            let name = name.to_string();
            if let Some(term) = self.ps_term_mut() {
                term.from.prefix_lists.push(name);
            }
        }
    }

    fn enter_ps_from_community(&mut self, node: &RuleNode) {
        let names: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        if let Some(term) = self.ps_term_mut() {
            term.from.communities.extend(names);
        }
    }

    fn enter_ps_from_neighbor(&mut self, node: &RuleNode) {
        if let Some(ip) = self.parse_ip(node, "from neighbor") {
            if let Some(term) = self.ps_term_mut() {
                term.from.neighbors.push(ip);
            }
        }
    }

    fn enter_ps_from_route_filter(&mut self, node: &RuleNode) {
        if let Some(prefix) = self.parse_prefix(node, "route-filter prefix") {
            // modifier children refine this before the node exits
            self.current_route_filter = Some((prefix, RouteFilterModifier::Exact));
        }
    }

    fn exit_ps_from_route_filter(&mut self, _node: &RuleNode) {
        if let Some((prefix, modifier)) = self.current_route_filter.take() {
            if let Some(term) = self.ps_term_mut() {
                term.from.route_filters.push(RouteFilterLine { prefix, modifier });
            }
        }
    }

    fn enter_rf_exact(&mut self, _node: &RuleNode) {
        if let Some((_, modifier)) = self.current_route_filter.as_mut() {
            *modifier = RouteFilterModifier::Exact;
        }
    }

    fn enter_rf_longer(&mut self, _node: &RuleNode) {
        if let Some((_, modifier)) = self.current_route_filter.as_mut() {
            *modifier = RouteFilterModifier::Longer;
        }
    }

    fn enter_rf_orlonger(&mut self, _node: &RuleNode) {
        if let Some((_, modifier)) = self.current_route_filter.as_mut() {
            *modifier = RouteFilterModifier::OrLonger;
        }
    }

    fn enter_rf_upto(&mut self, node: &RuleNode) {
        if let Some(length) = self.parse_prefix_length(node, "upto length") {
            if let Some((_, modifier)) = self.current_route_filter.as_mut() {
                *modifier = RouteFilterModifier::Upto(length);
            }
        }
    }

    fn enter_rf_prefix_length_range(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let Some(text) = self.require_value(node, "prefix-length-range") else {
            return;
        };
        let parsed = text.split_once('-').and_then(|(min, max)| {
            let min = min.trim_start_matches('/').parse::<u8>().ok()?;
            let max = max.trim_start_matches('/').parse::<u8>().ok()?;
            (min <= max && max <= Prefix::MAX_LENGTH).then_some((min, max))
        });
        match parsed {
            Some((min, max)) => {
                if let Some((_, modifier)) = self.current_route_filter.as_mut() {
                    *modifier = RouteFilterModifier::PrefixLengthRange(min, max);
                }
            }
            None => self
                .warnings
                .red_flag(format!("invalid prefix-length-range '{}'", text), line),
        }
    }

    fn enter_rf_through(&mut self, node: &RuleNode) {
        if let Some(end) = self.parse_prefix(node, "through prefix") {
            if let Some((_, modifier)) = self.current_route_filter.as_mut() {
                *modifier = RouteFilterModifier::Through(end);
            }
        }
    }

    fn enter_ps_then_accept(&mut self, _node: &RuleNode) {
        if let Some(term) = self.ps_term_mut() {
            term.then.push(PsAction::Accept);
        }
    }

    fn enter_ps_then_reject(&mut self, _node: &RuleNode) {
        if let Some(term) = self.ps_term_mut() {
            term.then.push(PsAction::Reject);
        }
    }

    fn enter_ps_then_next_term(&mut self, _node: &RuleNode) {
        if let Some(term) = self.ps_term_mut() {
            term.then.push(PsAction::NextTerm);
        }
    }

    fn enter_ps_then_next_policy(&mut self, _node: &RuleNode) {
        if let Some(term) = self.ps_term_mut() {
            term.then.push(PsAction::NextPolicy);
        }
    }

    fn enter_ps_then_metric(&mut self, node: &RuleNode) {
        if let Some(metric) = self.parse_u32(node, "metric") {
            if let Some(term) = self.ps_term_mut() {
                term.then.push(PsAction::Metric(metric));
            }
        }
    }

    fn enter_ps_then_local_preference(&mut self, node: &RuleNode) {
        if let Some(pref) = self.parse_u32(node, "local-preference") {
            if let Some(term) = self.ps_term_mut() {
                term.then.push(PsAction::LocalPreference(pref));
            }
        }
    }

    fn enter_ps_then_community_add(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "community") {
            let name = name.to_string();
            if let Some(term) = self.ps_term_mut() {
                term.then.push(PsAction::CommunityAdd(name));
            }
        }
    }

    fn enter_ps_then_community_set(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "community") {
            let name = name.to_string();
            if let Some(term) = self.ps_term_mut() {
                term.then.push(PsAction::CommunitySet(name));
            }
        }
    }

    fn enter_ps_then_community_delete(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "community") {
            let name = name.to_string();
            if let Some(term) = self.ps_term_mut() {
                term.then.push(PsAction::CommunityDelete(name));
            }
        }
    }

    // ------------------------------------------------------------------
    // FIREWALL
    // ------------------------------------------------------------------

    fn enter_fw_filter(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "filter name") {
            let name = name.to_string();
            self.config.firewall_filter_mut(&name);
            self.current_filter = Some(name);
        }
    }

    fn enter_fw_term(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "term name") {
            self.current_fw_term = Some(name.to_string());
            self.fw_term_mut();
        }
    }

    fn enter_fw_from_source_address(&mut self, node: &RuleNode) {
        if let Some(prefix) = self.parse_prefix(node, "source-address") {
            if let Some(term) = self.fw_term_mut() {
                term.from.source_addresses.push(prefix);
            }
        }
    }

    fn enter_fw_from_destination_address(&mut self, node: &RuleNode) {
        if let Some(prefix) = self.parse_prefix(node, "destination-address") {
            if let Some(term) = self.fw_term_mut() {
                term.from.destination_addresses.push(prefix);
            }
        }
    }

    fn enter_fw_from_source_port(&mut self, node: &RuleNode) {
        self.add_fw_ports(node, "source-port", |term| &mut term.from.source_ports);
    }

    fn enter_fw_from_destination_port(&mut self, node: &RuleNode) {
        self.add_fw_ports(node, "destination-port", |term| {
            &mut term.from.destination_ports
        });
    }

    fn enter_fw_from_port(&mut self, node: &RuleNode) {
        self.add_fw_ports(node, "port", |term| &mut term.from.ports);
    }

    fn enter_fw_from_protocol(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let texts: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        for text in texts {
            match IpProtocol::parse(&text) {
                Some(protocol) => {
                    if let Some(term) = self.fw_term_mut() {
                        if !term.from.protocols.contains(&protocol) {
                            term.from.protocols.push(protocol);
                        }
                    }
                }
                None => self
                    .warnings
                    .red_flag(format!("invalid protocol '{}'", text), line),
            }
        }
    }

    fn enter_fw_from_icmp_type(&mut self, node: &RuleNode) {
        if let Some(icmp_type) = self.parse_icmp_type(node) {
            if let Some(term) = self.fw_term_mut() {
                if !term.from.icmp_types.contains(&icmp_type) {
                    term.from.icmp_types.push(icmp_type);
                }
            }
        }
    }

    fn enter_fw_from_tcp_established(&mut self, _node: &RuleNode) {
        if let Some(term) = self.fw_term_mut() {
            term.from.tcp_established = true;
        }
    }

    fn enter_fw_from_source_prefix_list(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "source-prefix-list") {
            let name = name.to_string();
            if let Some(term) = self.fw_term_mut() {
                term.from.source_prefix_lists.push(name);
            }
        }
    }

    fn enter_fw_from_destination_prefix_list(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "destination-prefix-list") {
            let name = name.to_string();
            if let Some(term) = self.fw_term_mut() {
                term.from.destination_prefix_lists.push(name);
            }
        }
    }

    fn enter_fw_then_accept(&mut self, _node: &RuleNode) {
        if let Some(term) = self.fw_term_mut() {
            term.then.push(FwAction::Accept);
        }
    }

    fn enter_fw_then_discard(&mut self, _node: &RuleNode) {
        if let Some(term) = self.fw_term_mut() {
            term.then.push(FwAction::Discard);
        }
    }

    fn enter_fw_then_reject(&mut self, _node: &RuleNode) {
        if let Some(term) = self.fw_term_mut() {
            term.then.push(FwAction::Reject);
        }
    }

    fn enter_fw_then_next_term(&mut self, _node: &RuleNode) {
        if let Some(term) = self.fw_term_mut() {
            term.then.push(FwAction::NextTerm);
        }
    }

    fn enter_fw_then_log(&mut self, _node: &RuleNode) {
        if let Some(term) = self.fw_term_mut() {
            term.then.push(FwAction::Log);
        }
    }

    fn enter_fw_then_count(&mut self, node: &RuleNode) {
        if let Some(counter) = self.require_value(node, "counter name") {
            let counter = counter.to_string();
            if let Some(term) = self.fw_term_mut() {
                term.then.push(FwAction::Count(counter));
            }
        }
    }

    // ------------------------------------------------------------------
    // SECURITY
    // ------------------------------------------------------------------

    fn enter_sec_zone(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "zone name") {
            let name = name.to_string();
            self.config.zone_mut(&name);
            self.current_zone = Some(name);
        }
    }

    fn enter_zone_interfaces(&mut self, node: &RuleNode) {
        let Some(interface) = self.require_value(node, "zone interface") else {
            return;
        };
        let interface = interface.to_string();
        if let Some(zone) = self.current_zone.clone() {
            self.config.zone_mut(&zone).interfaces.insert(interface);
        }
    }

    fn enter_zone_ab_address(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let texts: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        let (name, prefix_text) = match texts.as_slice() {
            [name, prefix] => (name.clone(), prefix.clone()),
            _ => {
                self.warnings
                    .red_flag("address-book address needs a name and a prefix", line);
                return;
            }
        };
        if looks_like_ipv6(&prefix_text) {
            self.warnings
                .unimplemented(format!("IPv6 address-book entry '{}'", prefix_text), line);
            return;
        }
        let parsed = if prefix_text.contains('/') {
            prefix_text.parse()
        } else {
            format!("{}/32", prefix_text).parse()
        };
        let Ok(prefix) = parsed else {
            self.warnings
                .red_flag(format!("invalid address-book prefix '{}'", prefix_text), line);
            return;
        };
        if let Some(zone) = self.current_zone.clone() {
            self.config.zone_mut(&zone).address_book.insert(name, prefix);
        }
    }

    fn enter_zone_ab_address_set(&mut self, node: &RuleNode) {
        let texts: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        let Some(zone) = self.current_zone.clone() else {
            return;
        };
        match texts.as_slice() {
            [set_name] => {
                self.config
                    .zone_mut(&zone)
                    .address_sets
                    .entry(set_name.clone())
                    .or_default();
            }
            [set_name, member] => {
                self.config
                    .zone_mut(&zone)
                    .address_sets
                    .entry(set_name.clone())
                    .or_default()
                    .insert(member.clone());
            }
            _ => {
                let line = self.line_of(node);
                self.warnings
                    .red_flag("address-set needs a name and optional member", line);
            }
        }
    }

    fn enter_zone_hit_system_services(&mut self, node: &RuleNode) {
        let Some(service) = self.require_value(node, "system service") else {
            return;
        };
        let service = service.to_string();
        if let Some(zone) = self.current_zone.clone() {
            self.config.zone_mut(&zone).inbound_services.insert(service);
        }
    }

    fn enter_zone_hit_protocols(&mut self, node: &RuleNode) {
        let Some(protocol) = self.require_value(node, "inbound protocol") else {
            return;
        };
        let protocol = protocol.to_string();
        if let Some(zone) = self.current_zone.clone() {
            self.config.zone_mut(&zone).inbound_protocols.insert(protocol);
        }
    }

    fn enter_sec_policies_from_to(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let texts: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        match texts.as_slice() {
            [from_zone, to_zone] => {
                self.config.zone_pair_mut(from_zone, to_zone);
                self.current_zone_pair = Some((from_zone.clone(), to_zone.clone()));
            }
            _ => self
                .warnings
                .red_flag("policies need both from-zone and to-zone", line),
        }
    }

    fn enter_sec_policy(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "policy name") {
            self.current_sec_policy = Some(name.to_string());
            self.sec_policy_mut();
        }
    }

    fn enter_sp_match_source_address(&mut self, node: &RuleNode) {
        let names: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        if let Some(policy) = self.sec_policy_mut() {
            policy.match_source_addresses.extend(names);
        }
    }

    fn enter_sp_match_destination_address(&mut self, node: &RuleNode) {
        let names: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        if let Some(policy) = self.sec_policy_mut() {
            policy.match_destination_addresses.extend(names);
        }
    }

    fn enter_sp_match_application(&mut self, node: &RuleNode) {
        let names: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        if let Some(policy) = self.sec_policy_mut() {
            policy.match_applications.extend(names);
        }
    }

    fn enter_sp_then_permit(&mut self, _node: &RuleNode) {
        if let Some(policy) = self.sec_policy_mut() {
            policy.action = Some(SecPolicyAction::Permit);
        }
    }

    fn enter_sp_then_deny(&mut self, _node: &RuleNode) {
        if let Some(policy) = self.sec_policy_mut() {
            policy.action = Some(SecPolicyAction::Deny);
        }
    }

    fn enter_sp_then_reject(&mut self, _node: &RuleNode) {
        if let Some(policy) = self.sec_policy_mut() {
            policy.action = Some(SecPolicyAction::Reject);
        }
    }

    fn enter_sp_then_log(&mut self, node: &RuleNode) {
        let options: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        if let Some(policy) = self.sec_policy_mut() {
            for option in options {
                if !policy.log.contains(&option) {
                    policy.log.push(option);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // ROUTING OPTIONS
    // ------------------------------------------------------------------

    fn enter_ro_router_id(&mut self, node: &RuleNode) {
        if let Some(ip) = self.parse_ip(node, "router-id") {
            self.config.routing.router_id = Some(ip);
        }
    }

    fn enter_ro_autonomous_system(&mut self, node: &RuleNode) {
        if let Some(asn) = self.parse_u32(node, "autonomous-system") {
            self.config.routing.autonomous_system = Some(asn);
        }
    }

    fn enter_ro_static_route(&mut self, node: &RuleNode) {
        if let Some(prefix) = self.parse_prefix(node, "static route prefix") {
            self.config.routing.static_route_mut(prefix);
            self.current_static_prefix = Some(prefix);
        }
    }

    fn enter_sr_next_hop(&mut self, node: &RuleNode) {
        let Some(prefix) = self.current_static_prefix else {
            return;
        };
        let line = self.line_of(node);
        let Some(text) = self.require_value(node, "next-hop") else {
            return;
        };
        match text.parse::<Ip>() {
            Ok(ip) => {
                self.config
                    .routing
                    .static_route_mut(prefix)
                    .next_hops
                    .insert(ip);
            }
            Err(_) => self
                .warnings
                .unimplemented(format!("non-address next-hop '{}'", text), line),
        }
    }

    fn enter_sr_discard(&mut self, _node: &RuleNode) {
        if let Some(prefix) = self.current_static_prefix {
            self.config.routing.static_route_mut(prefix).discard = true;
        }
    }

    fn enter_sr_reject(&mut self, _node: &RuleNode) {
        if let Some(prefix) = self.current_static_prefix {
            self.config.routing.static_route_mut(prefix).reject = true;
        }
    }

    fn enter_sr_metric(&mut self, node: &RuleNode) {
        if let Some(metric) = self.parse_u32(node, "metric") {
            if let Some(prefix) = self.current_static_prefix {
                self.config.routing.static_route_mut(prefix).metric = Some(metric);
            }
        }
    }

    fn enter_sr_preference(&mut self, node: &RuleNode) {
        if let Some(preference) = self.parse_u32(node, "preference") {
            if let Some(prefix) = self.current_static_prefix {
                self.config.routing.static_route_mut(prefix).preference = Some(preference);
            }
        }
    }

    fn enter_sr_tag(&mut self, node: &RuleNode) {
        if let Some(tag) = self.parse_u32(node, "tag") {
            if let Some(prefix) = self.current_static_prefix {
                self.config.routing.static_route_mut(prefix).tag = Some(tag);
            }
        }
    }

    // ------------------------------------------------------------------
    // APPLICATIONS
    // ------------------------------------------------------------------

    fn enter_application(&mut self, node: &RuleNode) {
        if let Some(name) = self.require_value(node, "application name") {
            let name = name.to_string();
            self.config.application_mut(&name);
            self.current_application = Some(name);
        }
    }

    fn enter_app_protocol(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let Some(text) = self.require_value(node, "application protocol") else {
            return;
        };
        match IpProtocol::parse(text) {
            Some(protocol) => {
                if let Some(name) = self.current_application.clone() {
                    self.config.application_mut(&name).protocol = Some(protocol);
                }
            }
            None => self
                .warnings
                .red_flag(format!("invalid application protocol '{}'", text), line),
        }
    }

    fn enter_app_source_port(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let Some(text) = self.require_value(node, "source-port") else {
            return;
        };
        match parse_port_word(text) {
            Some(range) => {
                if let Some(name) = self.current_application.clone() {
                    self.config.application_mut(&name).source_port = Some(range);
                }
            }
            None => self
                .warnings
                .red_flag(format!("invalid source-port '{}'", text), line),
        }
    }

    fn enter_app_destination_port(&mut self, node: &RuleNode) {
        let line = self.line_of(node);
        let Some(text) = self.require_value(node, "destination-port") else {
            return;
        };
        match parse_port_word(text) {
            Some(range) => {
                if let Some(name) = self.current_application.clone() {
                    self.config.application_mut(&name).destination_port = Some(range);
                }
            }
            None => self
                .warnings
                .red_flag(format!("invalid destination-port '{}'", text), line),
        }
    }
}

impl ConfigBuilder {
    /// Shared port-word handling for the three firewall port conditions
    fn add_fw_ports(
        &mut self,
        node: &RuleNode,
        what: &str,
        select: impl Fn(&mut crate::model::FwTerm) -> &mut Vec<crate::types::PortRange>,
    ) {
        let line = self.line_of(node);
        let texts: Vec<String> = node.terminal_texts().iter().map(|s| s.to_string()).collect();
        for text in texts {
            match parse_port_word(&text) {
                Some(range) => {
                    if let Some(term) = self.fw_term_mut() {
                        let ports = select(term);
                        if !ports.contains(&range) {
                            ports.push(range);
                        }
                    }
                }
                None => self
                    .warnings
                    .red_flag(format!("invalid {} '{}'", what, text), line),
            }
        }
    }
}
