//! Client router: one validated dispatch point for panel visibility.
//!
//! DESIGN
//! ======
//! Buttons never show or hide panels themselves; they change the fragment
//! and let [`ClientRouter::dispatch`] run. Back/forward navigation and manual
//! edits of the URL therefore go through the same path as in-app actions,
//! and exactly one routable panel is visible after every pass.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::config::{PanelDisplay, RouteSpec};

use super::table::{RouteTable, fragment_for};

/// Show/hide side effects on the page's routable panels.
pub trait PanelHost {
    /// Ids of every panel carrying the routable marker.
    fn routable_panels(&self) -> Vec<String>;
    fn hide(&self, panel_id: &str);
    fn show(&self, panel_id: &str, display: PanelDisplay);
    /// Tell the newly shown panel (and only that panel) it became active.
    fn notify_activated(&self, panel_id: &str);
}

/// Read and assign the URL fragment.
pub trait FragmentLocation {
    /// Current fragment including the leading `#`, or `""`.
    fn fragment(&self) -> String;
    fn assign_fragment(&self, fragment: &str);
}

pub struct ClientRouter<H, L> {
    table: RouteTable,
    host: H,
    location: L,
}

impl<H: PanelHost, L: FragmentLocation> ClientRouter<H, L> {
    pub fn new(table: RouteTable, host: H, location: L) -> Self {
        Self { table, host, location }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Route the current fragment resolves to, without touching the page.
    pub fn active_route(&self) -> &RouteSpec {
        self.table.resolve(&self.location.fragment())
    }

    /// Resolve the current fragment and make its panel the only visible one.
    ///
    /// Runs once at startup and on every fragment change.
    pub fn dispatch(&self) -> &RouteSpec {
        let fragment = self.location.fragment();
        let target = self.table.resolve(&fragment);
        if !fragment.is_empty() && !self.table.is_known(&fragment) {
            log::debug!("unknown route {fragment:?}, using #{}", target.name);
        }

        for panel_id in self.host.routable_panels() {
            if panel_id != target.panel_id {
                self.host.hide(&panel_id);
            }
        }
        self.host.show(&target.panel_id, target.display);
        self.host.notify_activated(&target.panel_id);
        log::debug!("route activated: #{} -> {}", target.name, target.panel_id);
        target
    }

    /// Request navigation to `route`.
    ///
    /// Returns `false` without touching the location when the fragment
    /// already names `route`, so no redundant history entry is created.
    pub fn navigate(&self, route: &str) -> bool {
        let fragment = fragment_for(route);
        if self.location.fragment() == fragment {
            return false;
        }
        self.location.assign_fragment(&fragment);
        true
    }
}
