pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                 list, create
/// /projects/stats           aggregate statistics
/// /projects/seed            populate sample data (POST)
/// /projects/{id}            get, update, delete
/// /projects/{id}/history    change history, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
