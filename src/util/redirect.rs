//! Post-auth destination.
//!
//! A page that bounced the user to login stores its URI under
//! `request_uri`; the first successful auth choice consumes it.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::state::prefs::PreferenceStore;
use crate::util::storage::KeyValueStore;

/// Where to send the user after a successful auth choice.
pub fn post_auth_destination<S: KeyValueStore>(prefs: &PreferenceStore<S>, default_landing: &str) -> String {
    match prefs.take_request_uri() {
        Some(uri) => {
            log::debug!("returning to requested page {uri}");
            uri
        }
        None => default_landing.to_owned(),
    }
}

/// Navigate the browser to `url`.
#[cfg(feature = "hydrate")]
pub fn redirect_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::error!("redirect to {url} failed: {e:?}");
    }
}
