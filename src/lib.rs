//! Feedback Loop - Feedback collection backend
//!
//! Product owners register projects and share a public link; visitors
//! submit feedback through it without an account while the project's
//! submission window is open. Owners triage each item through a small
//! status workflow, and every status change is kept in an audit trail.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
