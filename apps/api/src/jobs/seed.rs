//! Startup seeding of the bundled job catalogue.

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use crate::jobs::queries::{count_jobs, insert_job, NewJob};

const SEED_JOBS_JSON: &str = include_str!("../../data/jobs.json");

#[derive(Debug, Deserialize)]
struct SeedJob {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    requirements: Vec<String>,
    demand: Option<String>,
    avg_salary: Option<String>,
}

impl From<SeedJob> for NewJob {
    fn from(s: SeedJob) -> Self {
        NewJob {
            title: s.title,
            description: s.description,
            skills: s.skills,
            requirements: s.requirements,
            demand: s.demand,
            avg_salary: s.avg_salary,
        }
    }
}

pub fn default_jobs() -> Result<Vec<NewJob>> {
    let jobs: Vec<SeedJob> =
        serde_json::from_str(SEED_JOBS_JSON).context("Bundled data/jobs.json is malformed")?;
    Ok(jobs.into_iter().map(NewJob::from).collect())
}

/// Inserts the default catalogue when the jobs table is empty. Returns the number inserted.
pub async fn seed_default_jobs(pool: &PgPool) -> Result<usize> {
    let existing = count_jobs(pool).await?;
    if existing > 0 {
        info!("Skipping job seeding: {existing} jobs already present");
        return Ok(0);
    }

    let jobs = default_jobs()?;
    for job in &jobs {
        insert_job(pool, job).await?;
        info!("Seeded job: {}", job.title);
    }
    info!("Job seeding complete ({} jobs)", jobs.len());
    Ok(jobs.len())
}
