//! DOM implementations of the routing seams.
//!
//! Panels are found through the `routePage` class marker and shown/hidden by
//! swapping `d-none` with the route's display class.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Event, Window};

use crate::config::PanelDisplay;
use crate::error::ClientError;

use super::router::{ClientRouter, FragmentLocation, PanelHost};
use super::{HIDDEN_CLASS, ROUTE_PAGE_CLASS, ROUTE_PAGE_LOADED_EVENT};

const DISPLAY_CLASSES: [&str; 2] = ["d-flex", "d-block"];

/// Panel host over the live document.
#[derive(Clone, Debug)]
pub struct DomPanelHost {
    document: Document,
}

impl DomPanelHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn panel(&self, panel_id: &str) -> Option<Element> {
        let el = self.document.get_element_by_id(panel_id);
        if el.is_none() {
            log::warn!("route panel #{panel_id} not found");
        }
        el
    }
}

impl PanelHost for DomPanelHost {
    fn routable_panels(&self) -> Vec<String> {
        let list = self.document.get_elements_by_class_name(ROUTE_PAGE_CLASS);
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|el| el.id())
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn hide(&self, panel_id: &str) {
        let Some(el) = self.panel(panel_id) else {
            return;
        };
        let classes = el.class_list();
        let _ = classes.add_1(HIDDEN_CLASS);
        for class in DISPLAY_CLASSES {
            let _ = classes.remove_1(class);
        }
    }

    fn show(&self, panel_id: &str, display: PanelDisplay) {
        let Some(el) = self.panel(panel_id) else {
            return;
        };
        let classes = el.class_list();
        let _ = classes.remove_1(HIDDEN_CLASS);
        for class in DISPLAY_CLASSES {
            if class != display.class_name() {
                let _ = classes.remove_1(class);
            }
        }
        let _ = classes.add_1(display.class_name());
    }

    fn notify_activated(&self, panel_id: &str) {
        let Some(el) = self.panel(panel_id) else {
            return;
        };
        match Event::new(ROUTE_PAGE_LOADED_EVENT) {
            Ok(event) => {
                let _ = el.dispatch_event(&event);
            }
            Err(e) => log::warn!("could not create {ROUTE_PAGE_LOADED_EVENT} event: {e:?}"),
        }
    }
}

/// `window.location.hash`.
#[derive(Clone, Debug)]
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FragmentLocation for BrowserLocation {
    fn fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn assign_fragment(&self, fragment: &str) {
        if let Err(e) = self.window.location().set_hash(fragment) {
            log::warn!("setting location hash {fragment} failed: {e:?}");
        }
    }
}

/// Router over the live page.
pub type BrowserRouter = ClientRouter<DomPanelHost, BrowserLocation>;

/// Re-run `router.dispatch()` on every `hashchange`.
///
/// # Errors
///
/// Returns [`ClientError::Js`] if the listener cannot be registered.
pub fn install_hashchange<H, L>(window: &Window, router: std::rc::Rc<ClientRouter<H, L>>) -> Result<(), ClientError>
where
    H: PanelHost + 'static,
    L: FragmentLocation + 'static,
{
    let cb = Closure::wrap(Box::new(move |_ev: Event| {
        router.dispatch();
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("hashchange", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
