//! HTTP handler functions, grouped by resource.

pub mod auth;
pub mod calendar;
pub mod events;
pub mod import;
pub mod marriages;
pub mod members;
pub mod relationships;
pub mod stats;
pub mod tree;
