//! Networking modules for the backend HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the requests, `types` defines the JSON bodies.

pub mod api;
pub mod types;
