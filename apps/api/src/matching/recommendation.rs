//! Presentation of match results: per-job recommendation cards and all-jobs summaries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::matcher::{match_skills, MatchResult};
use crate::models::job::JobRow;

/// User-facing view of one resume/job match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub match_percent: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// score ≥ configured MATCH_THRESHOLD
    pub strong_match: bool,
}

impl Recommendation {
    pub fn from_match(job_title: &str, result: &MatchResult, threshold: u32) -> Self {
        Self {
            title: job_title.to_string(),
            match_percent: result.score,
            matched_skills: result.matched_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            strong_match: result.score >= threshold,
        }
    }
}

/// One row of the all-jobs analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobMatchSummary {
    pub job_id: Uuid,
    pub job_title: String,
    pub match_score: u32,
    pub skills_matched: usize,
    pub total_skills: usize,
    pub demand: Option<String>,
    pub avg_salary: Option<String>,
}

/// Matches `resume_text` against every job. Sorted by score descending; ties keep job order.
pub fn summarize_against_jobs(jobs: &[JobRow], resume_text: &str) -> Vec<JobMatchSummary> {
    let mut summaries: Vec<JobMatchSummary> = jobs
        .iter()
        .map(|job| {
            let result = match_skills(&job.skills, resume_text);
            JobMatchSummary {
                job_id: job.id,
                job_title: job.title.clone(),
                match_score: result.score,
                skills_matched: result.matched_skills.len(),
                total_skills: result.total_skills(),
                demand: job.demand.clone(),
                avg_salary: job.avg_salary.clone(),
            }
        })
        .collect();

    // stable sort
    summaries.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    summaries
}

/// One improvement line per missing skill.
pub fn skill_gap_advice(job_title: &str, missing_skills: &[String]) -> Vec<String> {
    missing_skills
        .iter()
        .map(|skill| {
            format!("Improve your {skill} skill to increase compatibility with the {job_title} role.")
        })
        .collect()
}
