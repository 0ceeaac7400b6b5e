//! Sketch classifier web service
//!
//! HTTP surface for the classifier: a drawing page that returns top-5
//! predictions, and a guessing game where the server picks a target class
//! per session and checks the submitted drawing against it.

pub mod api;
pub mod config;
pub mod error;
pub mod sessions;
