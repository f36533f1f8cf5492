use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::JobRow;

/// Validated input for a new job row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub requirements: Vec<String>,
    pub demand: Option<String>,
    pub avg_salary: Option<String>,
}

/// Lists jobs in creation order. `skill` filters by case-insensitive equality against
/// any entry of `skills`, applied before pagination.
pub async fn list_jobs(
    pool: &PgPool,
    skill: Option<&str>,
    offset: i64,
    limit: i64,
) -> sqlx::Result<Vec<JobRow>> {
    sqlx::query_as::<_, JobRow>(
        r#"
        SELECT * FROM jobs
        WHERE $1::TEXT IS NULL
           OR EXISTS (SELECT 1 FROM unnest(skills) AS s WHERE lower(s) = lower($1))
        ORDER BY created_at, id
        OFFSET $2
        LIMIT $3
        "#,
    )
    .bind(skill)
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn all_jobs(pool: &PgPool) -> sqlx::Result<Vec<JobRow>> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY created_at, id")
        .fetch_all(pool)
        .await
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<JobRow>> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn count_jobs(pool: &PgPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await
}

pub async fn insert_job(pool: &PgPool, job: &NewJob) -> sqlx::Result<JobRow> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (id, title, description, skills, requirements, demand, avg_salary)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&job.title)
    .bind(&job.description)
    .bind(&job.skills)
    .bind(&job.requirements)
    .bind(&job.demand)
    .bind(&job.avg_salary)
    .fetch_one(pool)
    .await
}
