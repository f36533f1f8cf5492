//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::queries::{get_job, insert_job, list_jobs, NewJob};
use crate::models::job::JobRow;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    #[serde(default)]
    pub skip: i64,
    pub limit: Option<i64>,
    pub skill: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub demand: Option<String>,
    pub avg_salary: Option<String>,
}

impl CreateJobRequest {
    fn validate(self) -> Result<NewJob, AppError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
        Ok(NewJob {
            title,
            description: self.description.trim().to_string(),
            skills: clean_list(self.skills),
            requirements: clean_list(self.requirements),
            demand: self.demand.filter(|d| !d.trim().is_empty()),
            avg_salary: self.avg_salary.filter(|s| !s.trim().is_empty()),
        })
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// GET /api/v1/jobs?skip=&limit=&skill=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListJobsQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let offset = params.skip.max(0);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let skill = params
        .skill
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let jobs = list_jobs(&state.db, skill, offset, limit).await?;
    info!("Fetched {} jobs (skill filter: {:?})", jobs.len(), skill);
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let job = get_job(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    let new_job = request.validate()?;
    let job = insert_job(&state.db, &new_job).await?;
    info!(job_id = %job.id, "Created job '{}'", job.title);
    Ok((StatusCode::CREATED, Json(job)))
}
