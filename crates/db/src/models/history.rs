//! Change-history entity model.
//!
//! History entries are immutable pre-images: the values a project's
//! mutable fields held immediately before an update was applied. They are
//! created only from inside the update transaction and have no update DTO.

use serde::Serialize;
use sqlx::FromRow;
use tracker_core::types::{DbId, Timestamp};

/// A snapshot row from the `project_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHistoryEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub stage: i32,
    pub priority: String,
    pub roi: f64,
    pub effort: i32,
    pub budget: i64,
    pub changed_at: Timestamp,
}
