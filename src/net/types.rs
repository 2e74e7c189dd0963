//! JSON bodies exchanged with the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const CLONE_ACTION: &str = "clone";

/// Body of `POST /persist/{username}/{newSceneName}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneRequest {
    pub action: String,
    /// Namespace owning the source scene.
    pub namespace: String,
    /// Source scene name within `namespace`.
    pub scene_id: String,
}

impl CloneRequest {
    pub fn new(namespace: &str, scene_id: &str) -> Self {
        Self {
            action: CLONE_ACTION.to_owned(),
            namespace: namespace.to_owned(),
            scene_id: scene_id.to_owned(),
        }
    }
}

/// Successful clone response. A missing count is read as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneResponse {
    #[serde(default)]
    pub objects_cloned: u64,
}

/// `GET /user_state` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Account type, e.g. `"arena"` or `"google"`.
    #[serde(default, rename = "type")]
    pub auth_type: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
}

impl UserState {
    /// Username of an authenticated user, if non-empty.
    pub fn signed_in_username(&self) -> Option<&str> {
        if !self.authenticated {
            return None;
        }
        self.username.as_deref().filter(|u| !u.trim().is_empty())
    }
}
