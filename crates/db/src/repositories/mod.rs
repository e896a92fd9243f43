//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. All writes to the `projects`
//! and `project_history` tables go through these repositories.

pub mod history_repo;
pub mod project_repo;
pub mod stats_repo;

pub use history_repo::HistoryRepo;
pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
