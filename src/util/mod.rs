//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so
//! the flows can be unit-tested without a DOM.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod notice;
pub mod redirect;
pub mod storage;
pub mod validate;
