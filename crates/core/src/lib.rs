//! Pure domain logic for the giapha genealogy service.
//!
//! Everything in this crate is synchronous and free of database or HTTP
//! dependencies: tree reconstruction, generation propagation planning,
//! field validation, calendar classification, and the admin session token
//! primitives. The `db` and `api` crates build on these pieces.

pub mod calendar;
pub mod error;
pub mod lineage;
pub mod member;
pub mod session;
pub mod tree;
pub mod types;
