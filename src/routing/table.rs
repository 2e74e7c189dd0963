//! Route table: the fixed allow-list of fragments for one page.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::config::{RouteSpec, validate_routes};
use crate::error::ClientError;

/// Validated, non-empty route table. The first route is the default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteSpec>,
}

impl RouteTable {
    /// Build a table from `routes`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an empty table or duplicate
    /// names/panel ids.
    pub fn new(routes: Vec<RouteSpec>) -> Result<Self, ClientError> {
        validate_routes(&routes)?;
        Ok(Self { routes })
    }

    pub fn default_route(&self) -> &RouteSpec {
        // `new` rejects empty tables.
        &self.routes[0]
    }

    pub fn get(&self, name: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Whether `fragment` names a route of this table.
    pub fn is_known(&self, fragment: &str) -> bool {
        fragment_name(fragment).is_some_and(|name| self.get(name).is_some())
    }

    /// Route for `fragment`, or the default route when it is absent or unknown.
    pub fn resolve(&self, fragment: &str) -> &RouteSpec {
        fragment_name(fragment)
            .and_then(|name| self.get(name))
            .unwrap_or_else(|| self.default_route())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteSpec> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Fragment string (`#name`) for a route name. A leading `#` is tolerated.
pub fn fragment_for(name: &str) -> String {
    format!("#{}", name.trim_start_matches('#'))
}

fn fragment_name(fragment: &str) -> Option<&str> {
    fragment.strip_prefix('#').filter(|name| !name.is_empty())
}
