use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::matching::matcher::MatchResult;
use crate::matching::recommendation::JobMatchSummary;
use crate::models::resume::ResumeRow;

/// Parameters for inserting a resume record.
pub struct NewResume<'a> {
    pub id: Uuid,
    pub filename: &'a str,
    pub text: &'a str,
    pub uploaded_by: Option<&'a str>,
    pub job_id: Option<Uuid>,
    pub s3_key: Option<&'a str>,
    pub match_result: Option<&'a MatchResult>,
    pub analysis: Option<&'a [JobMatchSummary]>,
    pub improved_resume: Option<&'a str>,
}

pub async fn insert_resume(pool: &PgPool, resume: NewResume<'_>) -> sqlx::Result<ResumeRow> {
    let NewResume {
        id,
        filename,
        text,
        uploaded_by,
        job_id,
        s3_key,
        match_result,
        analysis,
        improved_resume,
    } = resume;

    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (id, filename, text, uploaded_by, job_id, s3_key,
             match_result, analysis, improved_resume)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(filename)
    .bind(text)
    .bind(uploaded_by)
    .bind(job_id)
    .bind(s3_key)
    .bind(match_result.map(Json))
    .bind(analysis.map(Json))
    .bind(improved_resume)
    .fetch_one(pool)
    .await
}

pub async fn list_resumes(pool: &PgPool) -> sqlx::Result<Vec<ResumeRow>> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes ORDER BY created_at DESC, id")
        .fetch_all(pool)
        .await
}

pub async fn get_resume(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<ResumeRow>> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
