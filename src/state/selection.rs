//! Scene selection against a server-supplied candidate list.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// URL-field text for the user-scene input when nothing valid is selected.
pub const NO_VALID_SCENE: &str = "No valid scene selected";

/// `{protocol}//{hostname}` of the page, used to build scene URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOrigin {
    pub protocol: String,
    pub hostname: String,
}

impl PageOrigin {
    /// `protocol` is taken as the browser reports it (`"https:"`).
    pub fn new(protocol: &str, hostname: &str) -> Self {
        Self {
            protocol: protocol.to_owned(),
            hostname: hostname.to_owned(),
        }
    }

    pub fn scene_url(&self, scene: &str) -> String {
        scene_url(&self.protocol, &self.hostname, scene)
    }
}

/// `{protocol}//{hostname}/{scene}`.
pub fn scene_url(protocol: &str, hostname: &str, scene: &str) -> String {
    format!("{protocol}//{hostname}/{scene}")
}

/// Result of re-checking an input against its candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// Selected scene, if the input exactly matched a candidate.
    pub selected: Option<String>,
    /// Text for the URL field (preview URL or placeholder).
    pub url_field: String,
}

impl SelectionChange {
    pub fn is_valid(&self) -> bool {
        self.selected.is_some()
    }
}

/// Currently selected scene for one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneSelection {
    invalid_text: String,
    selected: Option<String>,
}

impl SceneSelection {
    /// `invalid_text` is shown in the URL field while nothing is selected.
    pub fn new(invalid_text: &str) -> Self {
        Self {
            invalid_text: invalid_text.to_owned(),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Re-validate after the input changed.
    ///
    /// Valid iff `value` is non-empty and exactly equals one candidate;
    /// anything else, partial matches included, clears the selection.
    pub fn check<I, C>(&mut self, value: &str, candidates: I, origin: &PageOrigin) -> SelectionChange
    where
        I: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        let valid = !value.is_empty() && candidates.into_iter().any(|c| c.as_ref() == value);
        let was = self.selected.is_some();
        if valid {
            self.selected = Some(value.to_owned());
            if !was {
                log::debug!("scene selected: {value}");
            }
            SelectionChange {
                selected: self.selected.clone(),
                url_field: origin.scene_url(value),
            }
        } else {
            self.selected = None;
            if was {
                log::debug!("scene selection cleared by input {value:?}");
            }
            SelectionChange {
                selected: None,
                url_field: self.invalid_text.clone(),
            }
        }
    }
}
