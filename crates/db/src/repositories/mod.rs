//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod event_repo;
pub mod import_repo;
pub mod marriage_repo;
pub mod member_repo;
pub mod relationship_repo;
pub mod stats_repo;
pub mod tree_repo;

pub use event_repo::EventRepo;
pub use import_repo::ImportRepo;
pub use marriage_repo::MarriageRepo;
pub use member_repo::MemberRepo;
pub use relationship_repo::RelationshipRepo;
pub use stats_repo::StatsRepo;
pub use tree_repo::{TreeRepo, TreeSnapshot};
