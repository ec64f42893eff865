//! The vendor-specific device model populated by extraction

pub mod application;
pub mod bgp;
pub mod configuration;
pub mod firewall;
pub mod interface;
pub mod policy;
pub mod routing;
pub mod security;
pub mod system;

pub use application::{builtin_application, is_implicitly_defined, Application};
pub use bgp::{BgpGroup, BgpGroupType, BgpNeighbor, BgpProcess, BgpSettings};
pub use configuration::JunosConfiguration;
pub use firewall::{FirewallFilter, FwAction, FwFrom, FwTerm, IpProtocol};
pub use interface::{FamilyInet, Interface, InterfaceAddress, Unit};
pub use policy::{
    CommunityList, PolicyStatement, PrefixList, PsAction, PsFrom, PsTerm, RouteFilterLine,
    RouteFilterModifier, RoutingProtocol,
};
pub use routing::{RoutingSettings, StaticRoute};
pub use security::{SecPolicyAction, SecurityPolicy, Zone, ZonePairPolicies};
pub use system::SystemSettings;
