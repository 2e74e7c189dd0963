//! Scene-management page state: both selections plus the clone draft.

#[cfg(test)]
#[path = "scenes_test.rs"]
mod scenes_test;

use super::clone::CloneDraft;
use super::selection::{NO_VALID_SCENE, SceneSelection};

/// Which list a clone was started from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneSource {
    User,
    Public,
}

#[derive(Clone, Debug)]
pub struct ScenesState {
    pub user_scene: SceneSelection,
    pub public_scene: SceneSelection,
    pub draft: CloneDraft,
    username: Option<String>,
}

impl ScenesState {
    pub fn new(username: Option<String>) -> Self {
        Self {
            user_scene: SceneSelection::new(NO_VALID_SCENE),
            public_scene: SceneSelection::new(""),
            draft: CloneDraft::default(),
            username,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username.filter(|u| !u.trim().is_empty());
    }

    pub fn selection(&self, source: SceneSource) -> &SceneSelection {
        match source {
            SceneSource::User => &self.user_scene,
            SceneSource::Public => &self.public_scene,
        }
    }

    pub fn selection_mut(&mut self, source: SceneSource) -> &mut SceneSelection {
        match source {
            SceneSource::User => &mut self.user_scene,
            SceneSource::Public => &mut self.public_scene,
        }
    }

    /// Capture the current selection of `source` into a fresh clone draft.
    ///
    /// Returns `None` (draft untouched) when nothing valid is selected. The
    /// new draft supersedes the old one, so a request still in flight for
    /// the old draft no longer applies.
    pub fn start_clone(&mut self, source: SceneSource) -> Option<&CloneDraft> {
        let scene = self.selection(source).selected()?.to_owned();
        self.draft = self.draft.replace(&scene);
        Some(&self.draft)
    }

    /// Whether the clone panel has a source to work with.
    pub fn clone_ready(&self) -> bool {
        self.draft.source_ref().is_some()
    }
}
