//! Axum route handlers for the Resumes API.

use std::future::Future;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_text_lenient, DocumentKind};
use crate::jobs::queries::{all_jobs, get_job};
use crate::matching::matcher::{match_skills, MatchResult};
use crate::matching::recommendation::{
    skill_gap_advice, summarize_against_jobs, JobMatchSummary, Recommendation,
};
use crate::models::resume::ResumeRow;
use crate::resumes::queries::{get_resume, insert_resume, list_resumes, NewResume};
use crate::resumes::rewrite::generate_improved_resume;
use crate::resumes::upload::{validate_file, UploadForm, UploadedFile};
use crate::state::AppState;
use crate::storage::{
    delete_resume_file, resume_object_key, sanitize_filename, upload_resume_file,
};

const UNKNOWN_ROLE: &str = "Unknown role";
const ONLY_PDF: &str = "Only PDF files are supported.";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub recommendations: Vec<Recommendation>,
    pub match_result: MatchResult,
    pub improved_resume: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub message: String,
    pub resume_id: Uuid,
    pub results: Vec<JobMatchSummary>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub resume_id: Uuid,
    pub recommendations: Vec<Recommendation>,
    pub suggestions: Vec<String>,
    pub skill_gaps: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/upload
///
/// Multipart: `file`, `job_id`, optional `uploaded_by`. Stores the file, matches its
/// text against the job's skills and persists the result with an improved draft.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let job_id = form.job_id()?;
    let uploaded_by = form.uploaded_by().map(str::to_string);
    let (file, kind) = validate_file(form.file, state.config.max_upload_bytes)?;

    let job = get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let resume_id = Uuid::new_v4();
    let s3_key = resume_object_key(resume_id, &file.filename);
    upload_resume_file(
        &state.s3,
        &state.config.s3_bucket,
        &s3_key,
        kind.content_type(),
        file.data.clone(),
    )
    .await?;

    let text = extract_in_background(kind, file.data).await;
    let match_result = match_skills(&job.skills, &text);
    let improved_resume =
        generate_improved_resume(&text, &job.title, &match_result.missing_skills);

    let inserted = insert_resume(
        &state.db,
        NewResume {
            id: resume_id,
            filename: &file.filename,
            text: &text,
            uploaded_by: uploaded_by.as_deref(),
            job_id: Some(job.id),
            s3_key: Some(&s3_key),
            match_result: Some(&match_result),
            analysis: None,
            improved_resume: Some(&improved_resume),
        },
    )
    .await
    .map_err(AppError::from);
    undo_on_error(inserted, || {
        delete_resume_file(&state.s3, &state.config.s3_bucket, &s3_key)
    })
    .await?;

    info!(
        resume_id = %resume_id,
        job_id = %job.id,
        score = match_result.score,
        "Resume uploaded and matched"
    );

    let recommendation =
        Recommendation::from_match(&job.title, &match_result, state.config.match_threshold);

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Resume analyzed successfully".to_string(),
            resume_id,
            job_id: job.id,
            recommendations: vec![recommendation],
            match_result,
            improved_resume,
        }),
    ))
}

/// POST /api/v1/resumes/analyze
///
/// Multipart: `file` (PDF only). Scores the resume against every job.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    ensure_pdf(form.file.as_ref())?;
    let (file, kind) = validate_file(form.file, state.config.max_upload_bytes)?;

    let text = extract_in_background(kind, file.data).await;
    let jobs = all_jobs(&state.db).await?;
    let results = summarize_against_jobs(&jobs, &text);

    let resume = insert_resume(
        &state.db,
        NewResume {
            id: Uuid::new_v4(),
            filename: &file.filename,
            text: &text,
            uploaded_by: None,
            job_id: None,
            s3_key: None,
            match_result: None,
            analysis: Some(&results),
            improved_resume: None,
        },
    )
    .await?;

    info!(
        resume_id = %resume.id,
        jobs = results.len(),
        "Resume analyzed against all jobs"
    );

    Ok(Json(AnalyzeResponse {
        message: "Resume analyzed successfully".to_string(),
        resume_id: resume.id,
        results,
    }))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    Ok(Json(list_resumes(&state.db).await?))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    Ok(Json(load_resume(&state, id).await?))
}

/// GET /api/v1/resumes/:id/suggestions
pub async fn handle_get_suggestions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let resume = load_resume(&state, id).await?;
    let match_result = resume
        .match_result
        .map(|json| json.0)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} has no match result")))?;

    let job_title = match resume.job_id {
        Some(job_id) => get_job(&state.db, job_id).await?.map(|job| job.title),
        None => None,
    }
    .unwrap_or_else(|| UNKNOWN_ROLE.to_string());

    Ok(Json(build_suggestions_response(
        id,
        &job_title,
        match_result,
        state.config.match_threshold,
    )))
}

/// GET /api/v1/resumes/:id/download
///
/// Serves the improved resume as a plain-text attachment.
pub async fn handle_download_improved(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let resume = load_resume(&state, id).await?;
    let improved = resume
        .improved_resume
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::NotFound("Improved resume not found".to_string()))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        improved_filename(&resume.filename)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        improved,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Runs `undo` when `result` failed, then hands the result back unchanged.
async fn undo_on_error<T, F, Fut>(result: Result<T, AppError>, undo: F) -> Result<T, AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    if result.is_err() {
        undo().await;
    }
    result
}

/// The all-jobs analysis only reads PDFs; any other name (known type or not) is a 400.
fn ensure_pdf(file: Option<&UploadedFile>) -> Result<(), AppError> {
    match file {
        Some(f) if DocumentKind::from_filename(&f.filename) != Some(DocumentKind::Pdf) => Err(
            AppError::Validation(ONLY_PDF.to_string()),
        ),
        _ => Ok(()),
    }
}

async fn load_resume(state: &AppState, id: Uuid) -> Result<ResumeRow, AppError> {
    get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// Runs extraction off the async executor. A failed or panicking extractor yields "".
async fn extract_in_background(kind: DocumentKind, data: Bytes) -> String {
    let text = tokio::task::spawn_blocking(move || extract_text_lenient(kind, &data))
        .await
        .unwrap_or_else(|e| {
            warn!("Text extraction task failed: {e}");
            String::new()
        });
    strip_nul(text)
}

/// Postgres TEXT cannot hold NUL.
fn strip_nul(text: String) -> String {
    if text.contains('\0') {
        text.replace('\0', "")
    } else {
        text
    }
}

fn build_suggestions_response(
    resume_id: Uuid,
    job_title: &str,
    match_result: MatchResult,
    threshold: u32,
) -> SuggestionsResponse {
    let recommendation = Recommendation::from_match(job_title, &match_result, threshold);
    let skill_gaps = skill_gap_advice(job_title, &match_result.missing_skills);
    SuggestionsResponse {
        resume_id,
        recommendations: vec![recommendation],
        suggestions: match_result.suggestions,
        skill_gaps,
    }
}

/// `cv.pdf` → `Improved_cv.txt`
fn improved_filename(original: &str) -> String {
    let safe = sanitize_filename(original);
    let stem = match safe.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => safe.as_str(),
    };
    format!("Improved_{stem}.txt")
}
