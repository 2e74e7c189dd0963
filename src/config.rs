//! Page configuration: route tables, landing targets and login policies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both page scripts share one router and one preference store; what differs
//! per page is captured here. Each page starts from a built-in preset and the
//! host markup may override any field through an embedded JSON block:
//!
//! ```html
//! <script type="application/json" id="pageConfig">
//!   {"default_landing": "/scenes/", "reauth": "revalidate"}
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::util::validate::{DEFAULT_NAME_PATTERN, NamePattern};

/// Element id of the optional JSON override block.
pub const PAGE_CONFIG_ID: &str = "pageConfig";

/// Route names used by the built-in presets.
pub mod routes {
    pub const LANDING: &str = "landing";
    pub const SIGN_IN: &str = "signIn";
    pub const SCENE_SELECT: &str = "sceneSelect";
    pub const CLONE_SCENE: &str = "cloneScene";
}

/// How a routable panel is made visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelDisplay {
    /// Panel is a flex container (`d-flex`).
    #[default]
    Flex,
    /// Panel is a plain block (`d-block`).
    Block,
}

impl PanelDisplay {
    /// CSS class that shows a panel in this mode.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Flex => "d-flex",
            Self::Block => "d-block",
        }
    }
}

/// One entry of a page's route table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Symbolic route name; the URL fragment is `#{name}`.
    pub name: String,
    /// Id of the DOM panel shown for this route.
    pub panel_id: String,
    #[serde(default)]
    pub display: PanelDisplay,
}

impl RouteSpec {
    pub fn new(name: &str, panel_id: &str, display: PanelDisplay) -> Self {
        Self {
            name: name.to_owned(),
            panel_id: panel_id.to_owned(),
            display,
        }
    }

    /// Route whose panel id equals its name, shown as a flex container.
    pub fn flex(name: &str) -> Self {
        Self::new(name, name, PanelDisplay::Flex)
    }
}

/// What to do with a remembered display name on anonymous re-auth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReauthPolicy {
    /// Reuse the stored name as-is; it was validated when first saved.
    #[default]
    TrustStored,
    /// Re-check the stored name against the current pattern first.
    Revalidate,
}

/// Resolved configuration for one page script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Route table; the first entry is the default route.
    pub routes: Vec<RouteSpec>,
    /// Where to go after auth when no `request_uri` was stored.
    pub default_landing: String,
    pub reauth: ReauthPolicy,
    /// Display-name pattern (Rust `regex` syntax). `None` uses the default.
    pub name_pattern: Option<String>,
    /// Signed-in username, when the server renders it into the page.
    pub username: Option<String>,
}

/// Partial override parsed from the page's JSON block.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PageConfigOverride {
    routes: Option<Vec<RouteSpec>>,
    default_landing: Option<String>,
    reauth: Option<ReauthPolicy>,
    name_pattern: Option<String>,
    username: Option<String>,
}

impl PageConfig {
    /// Preset for the login page: a landing panel and a name-entry panel.
    pub fn login() -> Self {
        Self {
            routes: vec![RouteSpec::flex(routes::LANDING), RouteSpec::flex(routes::SIGN_IN)],
            default_landing: "/".to_owned(),
            reauth: ReauthPolicy::TrustStored,
            name_pattern: None,
            username: None,
        }
    }

    /// Preset for the scene-management page.
    pub fn scenes() -> Self {
        Self {
            routes: vec![
                RouteSpec::flex(routes::SCENE_SELECT),
                RouteSpec::flex(routes::CLONE_SCENE),
            ],
            default_landing: "/scenes/".to_owned(),
            reauth: ReauthPolicy::TrustStored,
            name_pattern: None,
            username: None,
        }
    }

    /// Apply a JSON override on top of this config.
    ///
    /// Blank input leaves the config untouched; malformed JSON is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `raw` is not a valid override object.
    pub fn with_overrides_json(mut self, raw: &str) -> Result<Self, ClientError> {
        if raw.trim().is_empty() {
            return Ok(self);
        }
        let overrides: PageConfigOverride = serde_json::from_str(raw)?;
        if let Some(routes) = overrides.routes {
            self.routes = routes;
        }
        if let Some(default_landing) = overrides.default_landing {
            self.default_landing = default_landing;
        }
        if let Some(reauth) = overrides.reauth {
            self.reauth = reauth;
        }
        if overrides.name_pattern.is_some() {
            self.name_pattern = overrides.name_pattern;
        }
        if let Some(username) = overrides.username {
            let username = username.trim();
            self.username = (!username.is_empty()).then(|| username.to_owned());
        }
        Ok(self)
    }

    /// Check the route table and name pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ClientError> {
        validate_routes(&self.routes)?;
        if self.default_landing.trim().is_empty() {
            return Err(ClientError::Config("default_landing must not be empty".to_owned()));
        }
        self.name_pattern()?;
        Ok(())
    }

    /// Compile the configured (or default) display-name pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the pattern does not compile.
    pub fn name_pattern(&self) -> Result<NamePattern, ClientError> {
        let source = self.name_pattern.as_deref().unwrap_or(DEFAULT_NAME_PATTERN);
        NamePattern::new(source).map_err(|e| ClientError::Config(format!("name_pattern: {e}")))
    }
}

pub(crate) fn validate_routes(routes: &[RouteSpec]) -> Result<(), ClientError> {
    if routes.is_empty() {
        return Err(ClientError::Config("route table is empty".to_owned()));
    }
    let mut names = HashSet::new();
    let mut panels = HashSet::new();
    for route in routes {
        if route.name.trim().is_empty() || route.panel_id.trim().is_empty() {
            return Err(ClientError::Config("route name and panel_id must not be empty".to_owned()));
        }
        if route.name.starts_with('#') {
            return Err(ClientError::Config(format!(
                "route name {:?} must not include the leading '#'",
                route.name
            )));
        }
        if !names.insert(route.name.as_str()) {
            return Err(ClientError::Config(format!("duplicate route name {:?}", route.name)));
        }
        if !panels.insert(route.panel_id.as_str()) {
            return Err(ClientError::Config(format!("duplicate panel id {:?}", route.panel_id)));
        }
    }
    Ok(())
}
