//! Persisted auth preferences: display name and chosen sign-in method.
//!
//! DESIGN
//! ======
//! Every visit to the login page starts from "nothing persisted is still
//! valid": the auth choice and session token are dropped on load, while the
//! display name survives so it can prefill the form.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::fmt;

use crate::util::storage::KeyValueStore;

pub const AUTH_CHOICE_KEY: &str = "auth_choice";
pub const DISPLAY_NAME_KEY: &str = "display_name";
pub const REQUEST_URI_KEY: &str = "request_uri";
pub const JWT_KEY: &str = "jwt";

/// How the user chose to sign in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthChoice {
    Email,
    Anonymous,
    Arena,
    /// Third-party identity provider, by name (e.g. `"google"`).
    Provider(String),
}

impl AuthChoice {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "email",
            Self::Anonymous => "anonymous",
            Self::Arena => "arena",
            Self::Provider(name) => name,
        }
    }

    /// Parse a stored value. Unknown non-empty names are providers.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" => None,
            "email" => Some(Self::Email),
            "anonymous" => Some(Self::Anonymous),
            "arena" => Some(Self::Arena),
            other => Some(Self::Provider(other.to_owned())),
        }
    }
}

impl fmt::Display for AuthChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of what is currently persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthPreference {
    pub display_name: Option<String>,
    pub auth_choice: Option<AuthChoice>,
}

/// Typed access to the auth keys of a [`KeyValueStore`].
#[derive(Debug)]
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drop stale auth state at the start of a login-page visit and return
    /// the remembered display name, if any.
    pub fn begin_login_visit(&self) -> Option<String> {
        self.store.remove(AUTH_CHOICE_KEY);
        self.store.remove(JWT_KEY);
        self.display_name()
    }

    pub fn display_name(&self) -> Option<String> {
        self.store
            .get(DISPLAY_NAME_KEY)
            .filter(|name| !name.trim().is_empty())
    }

    pub fn auth_choice(&self) -> Option<AuthChoice> {
        self.store.get(AUTH_CHOICE_KEY).as_deref().and_then(AuthChoice::parse)
    }

    pub fn load(&self) -> AuthPreference {
        AuthPreference {
            display_name: self.display_name(),
            auth_choice: self.auth_choice(),
        }
    }

    /// Persist a validated display name together with the auth choice.
    pub fn save(&self, display_name: &str, choice: &AuthChoice) {
        self.store.set(DISPLAY_NAME_KEY, display_name);
        self.save_choice(choice);
    }

    /// Persist only the auth choice, keeping any stored name.
    pub fn save_choice(&self, choice: &AuthChoice) {
        self.store.set(AUTH_CHOICE_KEY, choice.as_str());
        log::info!("auth choice saved: {choice}");
    }

    /// Remove and return the originally requested URI (one-time use).
    pub fn take_request_uri(&self) -> Option<String> {
        let uri = self.store.get(REQUEST_URI_KEY)?;
        self.store.remove(REQUEST_URI_KEY);
        let uri = uri.trim();
        (!uri.is_empty()).then(|| uri.to_owned())
    }
}
