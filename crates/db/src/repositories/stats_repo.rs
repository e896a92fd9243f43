//! Aggregate statistics over the `projects` table.

use sqlx::PgPool;
use tracker_core::stats::{round_to_tenth, ProjectStats, COMPLETED_STAGE};

/// Stateless aggregator: one SELECT per call, no caching.
pub struct StatsRepo;

impl StatsRepo {
    /// Compute summary metrics over the full project set.
    ///
    /// All four numbers come from a single SQL statement and therefore one
    /// consistent snapshot of the table. The COALESCEs turn the NULL
    /// aggregates of an empty table into zeroes, so an empty store yields
    /// all-zero metrics rather than an error.
    pub async fn compute(pool: &PgPool) -> Result<ProjectStats, sqlx::Error> {
        let row: (i64, i64, f64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE current_stage = $1), \
                    COALESCE(AVG(roi), 0.0)::FLOAT8, \
                    COALESCE(SUM(budget), 0)::BIGINT \
             FROM projects",
        )
        .bind(COMPLETED_STAGE)
        .fetch_one(pool)
        .await?;

        Ok(ProjectStats {
            total_projects: row.0,
            completed_projects: row.1,
            avg_roi: round_to_tenth(row.2),
            total_budget: row.3,
        })
    }
}
