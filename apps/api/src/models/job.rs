use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub requirements: Vec<String>,
    pub demand: Option<String>,
    pub avg_salary: Option<String>,
    pub created_at: DateTime<Utc>,
}
