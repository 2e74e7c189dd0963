//! REST helpers for the scene backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `None`/error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics; a failed clone
//! leaves the form editable and is reported with a notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CloneRequest, CloneResponse, UserState};

pub const USER_STATE_ENDPOINT: &str = "/user_state";

/// `/persist/{username}/{scene}`; segments must already be URI-encoded.
fn persist_endpoint(username: &str, scene: &str) -> String {
    format!("/persist/{username}/{scene}")
}

#[cfg(any(test, feature = "hydrate"))]
fn clone_failed_message(status: u16) -> String {
    format!("clone request failed: {status}")
}

#[cfg(feature = "hydrate")]
fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

/// Clone a scene into `/{username}/{new_scene}` via `POST /persist/...`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn clone_scene(username: &str, new_scene: &str, request: &CloneRequest) -> Result<CloneResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = persist_endpoint(&encode_segment(username), &encode_segment(new_scene));
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(clone_failed_message(resp.status()));
        }
        let text = resp.text().await.map_err(|e| e.to_string())?;
        parse_clone_response(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (persist_endpoint(username, new_scene), request);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the signed-in user's state from `/user_state`.
/// Returns `None` on failure or outside the browser.
pub async fn fetch_user_state() -> Option<UserState> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(USER_STATE_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserState>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// An empty success body counts as zero objects cloned.
#[cfg(any(test, feature = "hydrate"))]
fn parse_clone_response(text: &str) -> Result<CloneResponse, String> {
    if text.trim().is_empty() {
        return Ok(CloneResponse::default());
    }
    serde_json::from_str(text).map_err(|e| format!("invalid clone response: {e}"))
}
