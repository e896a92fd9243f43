//! Repository for the `projects` table.

use sqlx::PgPool;
use tracker_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectPatch};
use crate::repositories::HistoryRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, category, current_stage, \
    priority, roi, effort, budget, created_at, updated_at";

/// Provides CRUD operations for projects.
///
/// Every mutation is atomic: an update either commits its history snapshot
/// and field changes together or leaves the store untouched, and a delete
/// removes the project and its history rows in one statement.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Optional fields fall back to their column defaults (stage 1,
    /// priority 'média', category 'sensores', zero roi/effort/budget).
    /// No history entry is written for creation.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, category, current_stage, priority, roi, effort, budget)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, 'sensores'), COALESCE($4, 1),
                     COALESCE($5, 'média'), COALESCE($6, 0.0), COALESCE($7, 0), COALESCE($8, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.current_stage)
            .bind(&input.priority)
            .bind(input.roi)
            .bind(input.effort)
            .bind(input.budget)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Apply a partial update. Only non-`None` fields in `patch` are
    /// applied; `updated_at` is refreshed.
    ///
    /// The pre-update values of the mutable fields are snapshotted into
    /// `project_history` inside the same transaction, with the current row
    /// locked (`FOR UPDATE`) so a concurrent update of the same project
    /// cannot interleave between snapshot and mutation.
    ///
    /// Returns `None` if no row with the given `id` exists; nothing is
    /// written in that case.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &ProjectPatch,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 FOR UPDATE");
        let current = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        HistoryRepo::record_snapshot(&mut *tx, &current).await?;

        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                current_stage = COALESCE($5, current_stage),
                priority = COALESCE($6, priority),
                roi = COALESCE($7, roi),
                effort = COALESCE($8, effort),
                budget = COALESCE($9, budget),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.description)
            .bind(&patch.category)
            .bind(patch.current_stage)
            .bind(&patch.priority)
            .bind(patch.roi)
            .bind(patch.effort)
            .bind(patch.budget)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a project. History rows go with it via `ON DELETE CASCADE`.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of projects in the store.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert a batch of projects in one transaction. Used by the seed
    /// endpoint; returns the number of rows inserted.
    pub async fn insert_batch(
        pool: &PgPool,
        inputs: &[CreateProject],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query =
            "INSERT INTO projects (name, description, category, current_stage, priority, roi, effort, budget)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, 'sensores'), COALESCE($4, 1),
                     COALESCE($5, 'média'), COALESCE($6, 0.0), COALESCE($7, 0), COALESCE($8, 0))";
        for input in inputs {
            sqlx::query(query)
                .bind(&input.name)
                .bind(&input.description)
                .bind(&input.category)
                .bind(input.current_stage)
                .bind(&input.priority)
                .bind(input.roi)
                .bind(input.effort)
                .bind(input.budget)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(inputs.len() as u64)
    }
}
