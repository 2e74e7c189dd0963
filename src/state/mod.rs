//! Client-side state for the login and scene-management pages.
//!
//! DESIGN
//! ======
//! State lives in explicit objects owned by each page's mount function
//! rather than in window globals, so handlers only see what they are given.

pub mod clone;
pub mod prefs;
pub mod scenes;
pub mod selection;
