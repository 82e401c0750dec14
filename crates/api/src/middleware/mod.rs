//! Request middleware: admin session extraction.

pub mod auth;
