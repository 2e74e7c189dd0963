//! Display-name validation and normalization.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use regex::Regex;

/// Printable (non-control) characters only, with at least two letters
/// anywhere in the string.
pub const DEFAULT_NAME_PATTERN: &str = r"^\P{Cc}*\p{L}\P{Cc}*\p{L}\P{Cc}*$";

/// Why a submitted display name was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Please enter a name.")]
    Empty,
    #[error("Please use at least two letters in your name.")]
    Mismatch,
}

/// Compiled display-name pattern.
#[derive(Clone, Debug)]
pub struct NamePattern {
    re: Regex,
}

impl NamePattern {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the `regex` compile error for an invalid pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self { re: Regex::new(pattern)? })
    }

    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }

    /// Whether an already-normalized name matches.
    pub fn is_valid(&self, name: &str) -> bool {
        !name.is_empty() && self.re.is_match(name)
    }

    /// Normalize `raw` and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] with the message to surface on the input.
    pub fn check(&self, raw: &str) -> Result<String, NameError> {
        let name = normalize_display_name(raw);
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if !self.re.is_match(&name) {
            return Err(NameError::Mismatch);
        }
        Ok(name)
    }
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize_display_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
