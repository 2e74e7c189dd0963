//! Fragment-driven panel routing.
//!
//! ARCHITECTURE
//! ============
//! `table` resolves a URL fragment to exactly one route, `router` applies the
//! result through the [`PanelHost`] / [`FragmentLocation`] seams, and
//! `browser` (hydrate only) implements those seams on the live DOM.

pub mod router;
pub mod table;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use router::{ClientRouter, FragmentLocation, PanelHost};
pub use table::{RouteTable, fragment_for};

/// Class marking a panel as taking part in routing.
pub const ROUTE_PAGE_CLASS: &str = "routePage";
/// Class hiding a panel.
pub const HIDDEN_CLASS: &str = "d-none";
/// Event dispatched on a panel each time it becomes the active route.
pub const ROUTE_PAGE_LOADED_EVENT: &str = "routePageLoaded";
