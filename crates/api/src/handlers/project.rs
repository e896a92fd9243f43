//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracker_core::error::CoreError;
use tracker_core::stats::ProjectStats;
use tracker_core::types::DbId;
use tracker_db::models::history::ProjectHistoryEntry;
use tracker_db::models::project::{CreateProject, Project, ProjectPatch};
use tracker_db::repositories::{HistoryRepo, ProjectRepo, StatsRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if input.trimmed_name().is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "project name is required".to_string(),
        )));
    }
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Applies only the fields present in the payload; the repository snapshots
/// the pre-update state into the history table in the same transaction.
/// A payload with no known fields (empty, or unknown keys only) is a valid
/// no-op update: it still records a snapshot and refreshes `updated_at`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<ProjectPatch>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// GET /api/v1/projects/{id}/history
///
/// Newest first. A project with no recorded changes (or an unknown id)
/// yields an empty array rather than a 404.
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectHistoryEntry>>> {
    let entries = HistoryRepo::list_for_project(&state.pool, id).await?;
    Ok(Json(entries))
}

/// GET /api/v1/projects/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<ProjectStats>> {
    let stats = StatsRepo::compute(&state.pool).await?;
    Ok(Json(stats))
}

/// POST /api/v1/projects/seed
///
/// Populates the table with the sample portfolio iff it is empty;
/// otherwise conflicts without writing anything.
pub async fn seed(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let existing = ProjectRepo::count(&state.pool).await?;
    if existing > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "projects already exist".to_string(),
        )));
    }

    let samples = sample_projects();
    let inserted = ProjectRepo::insert_batch(&state.pool, &samples).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("{inserted} sample projects created"),
        }),
    ))
}

/// The demo portfolio used by the seed endpoint.
fn sample_projects() -> Vec<CreateProject> {
    let sample = |name: &str,
                  category: &str,
                  description: &str,
                  stage: i32,
                  priority: &str,
                  roi: f64,
                  effort: i32,
                  budget: i64| CreateProject {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        current_stage: Some(stage),
        priority: Some(priority.to_string()),
        roi: Some(roi),
        effort: Some(effort),
        budget: Some(budget),
    };

    vec![
        sample(
            "Sistema de Monitoramento IoT",
            "sensores",
            "Implementação de sensores IoT para monitoramento de equipamentos industriais",
            2,
            "alta",
            85.0,
            120,
            45_000,
        ),
        sample(
            "Rastreamento de Veículos",
            "rastreabilidade",
            "Sistema de rastreamento GPS para frota de veículos da empresa",
            3,
            "média",
            75.0,
            150,
            60_000,
        ),
        sample(
            "Projeto de Inovação AI",
            "inovacao",
            "Desenvolvimento de solução com inteligência artificial para automação",
            1,
            "alta",
            90.0,
            200,
            80_000,
        ),
        sample(
            "Sensor de Temperatura",
            "sensores",
            "Monitoramento térmico de componentes críticos",
            4,
            "média",
            65.0,
            75,
            28_000,
        ),
        sample(
            "Gestão de Pneus",
            "rastreabilidade",
            "Sistema completo de controle de pneus da frota",
            3,
            "alta",
            80.0,
            130,
            48_000,
        ),
    ]
}
