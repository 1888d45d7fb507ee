//! Role-based gating of the admin sections.
//!
//! Everything here is advisory: it decides what the UI shows, nothing more.
//! The backend re-checks authorization on every call it receives, so hiding
//! a section never stands in for real access control.

pub mod navigation;
pub mod policy;
