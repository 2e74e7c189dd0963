//! Page scripts.
//!
//! ARCHITECTURE
//! ============
//! Each page keeps its flow logic in plain types that return outcomes, and a
//! hydrate-only `mount` that resolves the page's DOM hooks, wires listeners
//! and applies those outcomes.

pub mod login;
pub mod scenes;
