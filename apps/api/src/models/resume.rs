use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::matcher::MatchResult;
use crate::matching::recommendation::JobMatchSummary;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub filename: String,
    pub text: String,
    pub uploaded_by: Option<String>,
    pub job_id: Option<Uuid>,
    pub s3_key: Option<String>,
    /// Set by the single-job upload flow.
    pub match_result: Option<Json<MatchResult>>,
    /// Set by the all-jobs analysis flow.
    pub analysis: Option<Json<Vec<JobMatchSummary>>>,
    pub improved_resume: Option<String>,
    pub created_at: DateTime<Utc>,
}
