use std::cell::RefCell;
use std::collections::BTreeMap;

use super::*;
use crate::config::{PageConfig, PanelDisplay, RouteSpec, routes};

// =============================================================
// Helpers
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Hide(String),
    Show(String, PanelDisplay),
    Activated(String),
}

/// Panels keyed by id; `None` means hidden.
struct FakeHost {
    panels: RefCell<BTreeMap<String, Option<PanelDisplay>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeHost {
    fn with_panels(ids: &[&str]) -> Self {
        let panels = ids
            .iter()
            .map(|id| ((*id).to_owned(), Some(PanelDisplay::Block)))
            .collect();
        Self { panels: RefCell::new(panels), calls: RefCell::new(Vec::new()) }
    }

    fn visible(&self) -> Vec<(String, PanelDisplay)> {
        self.panels
            .borrow()
            .iter()
            .filter_map(|(id, display)| display.map(|d| (id.clone(), d)))
            .collect()
    }

    fn activations(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Activated(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }
}

impl PanelHost for FakeHost {
    fn routable_panels(&self) -> Vec<String> {
        self.panels.borrow().keys().cloned().collect()
    }

    fn hide(&self, panel_id: &str) {
        self.calls.borrow_mut().push(Call::Hide(panel_id.to_owned()));
        if let Some(slot) = self.panels.borrow_mut().get_mut(panel_id) {
            *slot = None;
        }
    }

    fn show(&self, panel_id: &str, display: PanelDisplay) {
        self.calls.borrow_mut().push(Call::Show(panel_id.to_owned(), display));
        self.panels.borrow_mut().insert(panel_id.to_owned(), Some(display));
    }

    fn notify_activated(&self, panel_id: &str) {
        self.calls.borrow_mut().push(Call::Activated(panel_id.to_owned()));
    }
}

#[derive(Default)]
struct FakeLocation {
    fragment: RefCell<String>,
    assignments: RefCell<Vec<String>>,
}

impl FakeLocation {
    fn at(fragment: &str) -> Self {
        Self { fragment: RefCell::new(fragment.to_owned()), assignments: RefCell::default() }
    }
}

impl FragmentLocation for FakeLocation {
    fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    fn assign_fragment(&self, fragment: &str) {
        self.assignments.borrow_mut().push(fragment.to_owned());
        *self.fragment.borrow_mut() = fragment.to_owned();
    }
}

fn router(fragment: &str, table: Vec<RouteSpec>, panels: &[&str]) -> ClientRouter<FakeHost, FakeLocation> {
    ClientRouter::new(
        RouteTable::new(table).unwrap(),
        FakeHost::with_panels(panels),
        FakeLocation::at(fragment),
    )
}

fn scenes_router(fragment: &str) -> ClientRouter<FakeHost, FakeLocation> {
    router(
        fragment,
        PageConfig::scenes().routes,
        &[routes::SCENE_SELECT, routes::CLONE_SCENE],
    )
}

// =============================================================
// dispatch
// =============================================================

#[test]
fn dispatch_shows_only_the_target_panel() {
    let router = scenes_router("#cloneScene");
    let route = router.dispatch();
    assert_eq!(route.name, routes::CLONE_SCENE);
    assert_eq!(
        router.host().visible(),
        vec![(routes::CLONE_SCENE.to_owned(), PanelDisplay::Flex)]
    );
}

#[test]
fn unknown_fragments_fall_back_to_default_with_one_visible_panel() {
    for fragment in ["", "#", "#missing", "#sceneselect", "#cloneScene?x=1"] {
        let router = scenes_router(fragment);
        assert_eq!(router.dispatch().name, routes::SCENE_SELECT, "fragment {fragment:?}");
        let visible = router.host().visible();
        assert_eq!(visible.len(), 1, "fragment {fragment:?}");
        assert_eq!(visible[0].0, routes::SCENE_SELECT);
    }
}

#[test]
fn dispatch_uses_registered_display_mode() {
    let router = router(
        "#about",
        vec![
            RouteSpec::new("home", "homePanel", PanelDisplay::Flex),
            RouteSpec::new("about", "aboutPanel", PanelDisplay::Block),
        ],
        &["homePanel", "aboutPanel"],
    );
    router.dispatch();
    assert_eq!(router.host().visible(), vec![("aboutPanel".to_owned(), PanelDisplay::Block)]);
}

#[test]
fn dispatch_hides_every_other_routable_panel() {
    let router = router(
        "#signIn",
        PageConfig::login().routes,
        &[routes::LANDING, routes::SIGN_IN, "legacyPanel"],
    );
    router.dispatch();
    let calls = router.host().calls.borrow().clone();
    assert!(calls.contains(&Call::Hide(routes::LANDING.to_owned())));
    assert!(calls.contains(&Call::Hide("legacyPanel".to_owned())));
    assert!(!calls.contains(&Call::Hide(routes::SIGN_IN.to_owned())));
}

#[test]
fn activation_event_fires_once_for_target_only() {
    let router = scenes_router("#cloneScene");
    router.dispatch();
    assert_eq!(router.host().activations(), vec![routes::CLONE_SCENE.to_owned()]);

    let calls = router.host().calls.borrow().clone();
    assert_eq!(calls.last(), Some(&Call::Activated(routes::CLONE_SCENE.to_owned())));
}

#[test]
fn each_dispatch_pass_activates_once() {
    let router = scenes_router("#sceneSelect");
    router.dispatch();
    router.location().assign_fragment("#cloneScene");
    router.dispatch();
    assert_eq!(
        router.host().activations(),
        vec![routes::SCENE_SELECT.to_owned(), routes::CLONE_SCENE.to_owned()]
    );
    assert_eq!(router.host().visible().len(), 1);
}

#[test]
fn target_panel_without_routable_marker_is_still_shown() {
    let router = scenes_router("#cloneScene");
    router.host().panels.borrow_mut().remove(routes::CLONE_SCENE);
    router.dispatch();
    assert!(router
        .host()
        .calls
        .borrow()
        .contains(&Call::Show(routes::CLONE_SCENE.to_owned(), PanelDisplay::Flex)));
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_assigns_new_fragment() {
    let router = scenes_router("#sceneSelect");
    assert!(router.navigate(routes::CLONE_SCENE));
    assert_eq!(*router.location().assignments.borrow(), vec!["#cloneScene".to_owned()]);
    assert_eq!(router.active_route().name, routes::CLONE_SCENE);
}

#[test]
fn navigate_to_current_route_is_noop() {
    let router = scenes_router("#cloneScene");
    assert!(!router.navigate(routes::CLONE_SCENE));
    assert!(!router.navigate("#cloneScene"));
    assert!(router.location().assignments.borrow().is_empty());
}

#[test]
fn navigate_to_default_from_empty_fragment_assigns() {
    let router = scenes_router("");
    assert!(router.navigate(routes::SCENE_SELECT));
    assert_eq!(router.location().assignments.borrow().len(), 1);
}

#[test]
fn active_route_does_not_touch_panels() {
    let router = scenes_router("#cloneScene");
    assert_eq!(router.active_route().name, routes::CLONE_SCENE);
    assert!(router.host().calls.borrow().is_empty());
}
