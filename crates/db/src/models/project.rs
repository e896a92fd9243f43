//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Open set of category tags (observed: sensores, rastreabilidade,
    /// inovacao). Not enforced as an enum.
    pub category: String,
    /// Lifecycle marker 1-5 by convention; stage 5 counts as completed in
    /// the statistics. Transitions are not validated.
    pub current_stage: i32,
    pub priority: String,
    pub roi: f64,
    /// Estimated effort in hours.
    pub effort: i32,
    /// Budget in whole currency units.
    pub budget: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// `name` is required and must be non-blank; handlers validate it before
/// the repository is reached. Every other field falls back to its column
/// default when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub current_stage: Option<i32>,
    pub priority: Option<String>,
    pub roi: Option<f64>,
    pub effort: Option<i32>,
    pub budget: Option<i64>,
}

impl CreateProject {
    /// The project name with surrounding whitespace stripped, if it is
    /// present and non-blank.
    pub fn trimmed_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// DTO for partially updating a project. Fields left `None` are preserved;
/// unknown keys in the incoming payload are ignored by serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub current_stage: Option<i32>,
    pub priority: Option<String>,
    pub roi: Option<f64>,
    pub effort: Option<i32>,
    pub budget: Option<i64>,
}
