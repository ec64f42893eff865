//! `routing-options` model

use crate::types::{Ip, Prefix};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One static route; repeated lines for the same prefix merge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    pub prefix: Prefix,
    pub next_hops: BTreeSet<Ip>,
    pub discard: bool,
    pub reject: bool,
    pub metric: Option<u32>,
    pub preference: Option<u32>,
    pub tag: Option<u32>,
}

impl StaticRoute {
    pub fn new(prefix: Prefix) -> Self {
        Self {
            prefix,
            next_hops: BTreeSet::new(),
            discard: false,
            reject: false,
            metric: None,
            preference: None,
            tag: None,
        }
    }
}

/// Routing options of the default instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    pub router_id: Option<Ip>,
    pub autonomous_system: Option<u32>,
    pub static_routes: BTreeMap<Prefix, StaticRoute>,
}

impl RoutingSettings {
    pub fn static_route_mut(&mut self, prefix: Prefix) -> &mut StaticRoute {
        self.static_routes
            .entry(prefix)
            .or_insert_with(|| StaticRoute::new(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_route_merging() {
        let mut routing = RoutingSettings::default();
        let prefix: Prefix = "0.0.0.0/0".parse().unwrap();
        routing
            .static_route_mut(prefix)
            .next_hops
            .insert("10.0.0.1".parse().unwrap());
        routing.static_route_mut(prefix).metric = Some(10);

        assert_eq!(routing.static_routes.len(), 1);
        let route = &routing.static_routes[&prefix];
        assert_eq!(route.next_hops.len(), 1);
        assert_eq!(route.metric, Some(10));
    }
}
