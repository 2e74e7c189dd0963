//! # scenes-client
//!
//! WASM page scripts for the scene-sharing portal.
//!
//! The server renders the login and scene-management pages; this crate
//! attaches to that markup. It owns fragment-based panel routing, the
//! persisted auth preferences, display-name validation, post-auth redirects,
//! scene selection and the clone-scene flow.
//!
//! Everything except the `mount` glue is plain Rust and is unit-tested
//! natively; browser bindings are behind the `hydrate` feature.

pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Entry point for the login page.
///
/// # Errors
///
/// Throws the initialization error message to the calling script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn start_login_page() -> Result<(), JsValue> {
    util::dom::init_runtime();
    pages::login::mount().map_err(|e| {
        log::error!("login page failed to start: {e}");
        JsValue::from(e)
    })
}

/// Entry point for the scene-management page.
///
/// # Errors
///
/// Throws the initialization error message to the calling script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn start_scenes_page() -> Result<(), JsValue> {
    util::dom::init_runtime();
    pages::scenes::mount().map_err(|e| {
        log::error!("scenes page failed to start: {e}");
        JsValue::from(e)
    })
}
