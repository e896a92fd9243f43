//! Repository for the `project_history` table.

use sqlx::{PgConnection, PgPool};
use tracker_core::types::DbId;

use crate::models::history::ProjectHistoryEntry;
use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, stage, priority, roi, effort, budget, changed_at";

/// Snapshot capture and retrieval. The capture side is invoked exclusively
/// from [`ProjectRepo::update`]'s transaction.
///
/// [`ProjectRepo::update`]: crate::repositories::ProjectRepo::update
pub struct HistoryRepo;

impl HistoryRepo {
    /// Persist the pre-image of a project's mutable fields.
    ///
    /// Takes a connection rather than the pool: the caller is expected to
    /// pass its open transaction so the snapshot commits or rolls back
    /// together with the mutation it precedes.
    pub async fn record_snapshot(
        conn: &mut PgConnection,
        project: &Project,
    ) -> Result<ProjectHistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_history (project_id, stage, priority, roi, effort, budget)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectHistoryEntry>(&query)
            .bind(project.id)
            .bind(project.current_stage)
            .bind(&project.priority)
            .bind(project.roi)
            .bind(project.effort)
            .bind(project.budget)
            .fetch_one(conn)
            .await
    }

    /// List all snapshots for a project, most recent change first.
    ///
    /// A project with no recorded changes (or an unknown id) yields an
    /// empty list, not an error.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_history
             WHERE project_id = $1
             ORDER BY changed_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectHistoryEntry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
