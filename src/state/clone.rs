//! Clone-scene panel state.
//!
//! Lifecycle: `reset` from a captured source -> `Editing` -> `begin_submit`
//! -> `Pending` -> `complete` -> `Created` (name locked) or `Failed`
//! (editable, may be resubmitted).
//!
//! Each draft carries a generation. A response is applied only while the
//! draft is still `Pending` under the generation its submission was sent
//! with; answers for a replaced draft are dropped.

#[cfg(test)]
#[path = "clone_test.rs"]
mod clone_test;

use std::fmt;

use crate::net::types::{CloneRequest, CloneResponse};
use crate::state::selection::PageOrigin;

/// `namespace/sceneId` reference to an existing scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneRef {
    pub namespace: String,
    pub scene_id: String,
}

impl SceneRef {
    /// Split `namespace/sceneId` at the first `/`; both halves must be non-empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let (namespace, scene_id) = raw.trim().split_once('/')?;
        if namespace.is_empty() || scene_id.is_empty() {
            return None;
        }
        Some(Self {
            namespace: namespace.to_owned(),
            scene_id: scene_id.to_owned(),
        })
    }
}

impl fmt::Display for SceneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.scene_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CloneStatus {
    #[default]
    Editing,
    Pending,
    Created {
        url: String,
        objects_cloned: u64,
    },
    Failed(String),
}

/// Why a clone submission was not sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CloneBlocked {
    #[error("no valid source scene selected")]
    NoSource,
    #[error("enter a name for the new scene")]
    EmptyName,
    #[error("not signed in")]
    NotSignedIn,
    #[error("a clone request is already in flight")]
    InFlight,
    #[error("scene already created")]
    AlreadyCreated,
}

/// Everything the network call needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloneSubmission {
    pub username: String,
    pub new_name: String,
    pub request: CloneRequest,
    /// Generation of the draft that sent this request.
    pub generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloneDraft {
    source: String,
    new_name: String,
    /// Namespace the clone is created in, fixed by `begin_submit`.
    owner: String,
    status: CloneStatus,
    generation: u64,
}

impl CloneDraft {
    /// Fresh draft for `source` with an empty name.
    pub fn reset(source: &str) -> Self {
        Self {
            source: source.to_owned(),
            ..Self::default()
        }
    }

    /// Fresh draft for `source` that supersedes `self`.
    pub fn replace(&self, source: &str) -> Self {
        Self {
            generation: self.generation.wrapping_add(1),
            ..Self::reset(source)
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_ref(&self) -> Option<SceneRef> {
        SceneRef::parse(&self.source)
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn status(&self) -> &CloneStatus {
        &self.status
    }

    /// Whether the name field accepts edits.
    pub fn is_editable(&self) -> bool {
        matches!(self.status, CloneStatus::Editing | CloneStatus::Failed(_))
    }

    /// Update the new-scene name; ignored once the form is locked.
    /// Returns whether submission is now possible.
    pub fn set_new_name(&mut self, name: &str) -> bool {
        if self.is_editable() {
            self.new_name = name.trim().to_owned();
        }
        self.can_submit()
    }

    pub fn can_submit(&self) -> bool {
        self.is_editable() && !self.new_name.is_empty()
    }

    /// Move to `Pending` and build the request.
    ///
    /// # Errors
    ///
    /// Returns [`CloneBlocked`] when the draft cannot be sent; the draft is
    /// left unchanged.
    pub fn begin_submit(&mut self, username: Option<&str>) -> Result<CloneSubmission, CloneBlocked> {
        match self.status {
            CloneStatus::Pending => return Err(CloneBlocked::InFlight),
            CloneStatus::Created { .. } => return Err(CloneBlocked::AlreadyCreated),
            CloneStatus::Editing | CloneStatus::Failed(_) => {}
        }
        let source = self.source_ref().ok_or(CloneBlocked::NoSource)?;
        if self.new_name.is_empty() {
            return Err(CloneBlocked::EmptyName);
        }
        let username = username
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(CloneBlocked::NotSignedIn)?;

        self.owner = username.to_owned();
        self.status = CloneStatus::Pending;
        Ok(CloneSubmission {
            username: username.to_owned(),
            new_name: self.new_name.clone(),
            request: CloneRequest::new(&source.namespace, &source.scene_id),
            generation: self.generation,
        })
    }

    /// `owner/new_name` of the scene being (or already) created.
    pub fn target_scene(&self) -> String {
        format!("{}/{}", self.owner, self.new_name)
    }

    /// Record the outcome of the request sent by `begin_submit` under
    /// `generation`. Returns `None` (draft untouched) when the draft is no
    /// longer waiting on that request.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<CloneResponse, String>,
        origin: &PageOrigin,
    ) -> Option<&CloneStatus> {
        if self.generation != generation || self.status != CloneStatus::Pending {
            log::debug!(
                "dropping clone response for generation {generation} (draft at {}, {:?})",
                self.generation,
                self.status
            );
            return None;
        }
        self.status = match result {
            Ok(resp) => {
                let target = self.target_scene();
                log::info!("cloned {} into {target} ({} objects)", self.source, resp.objects_cloned);
                CloneStatus::Created {
                    url: origin.scene_url(&target),
                    objects_cloned: resp.objects_cloned,
                }
            }
            Err(e) => {
                log::warn!("clone of {} failed: {e}", self.source);
                CloneStatus::Failed(e)
            }
        };
        Some(&self.status)
    }
}
