//! Skill Matcher — scores how well free resume text covers a job's required skills.
//!
//! Pure and synchronous: no I/O, no shared state. Safe to call from any number of
//! request tasks at once. Persistence of the result belongs to the caller.
//!
//! Algorithm:
//! 1. Resume text → `SkillSet`: lower-case, every char that is not `a-z`, `0-9` or
//!    whitespace becomes a space, split on whitespace, keep tokens longer than 1 char.
//! 2. Each required skill is lower-cased and trimmed, then split into words. It is
//!    matched iff every word is a token of the set (exact equality, not substring).
//! 3. score = round_half_even(100 × matched / max(1, required)).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Suggestion appended whenever the score is below 100.
pub const MISSING_SKILLS_SUGGESTION: &str = "Add missing skills listed above to improve match.";

/// Suggestion appended when a required skill mentions Python but the resume never does.
pub const PYTHON_SUGGESTION: &str = "Consider adding Python projects or experience.";

// ────────────────────────────────────────────────────────────────────────────
// SkillSet
// ────────────────────────────────────────────────────────────────────────────

/// Normalized word tokens of a resume. Duplicates are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    tokens: HashSet<String>,
}

impl SkillSet {
    pub fn from_text(text: &str) -> Self {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        let tokens = normalized
            .split_whitespace()
            // tokens are pure ASCII at this point, so byte length == char length
            .filter(|t| t.len() > 1)
            .map(str::to_string)
            .collect();

        Self { tokens }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// True when every whitespace-separated part of an already-normalized skill is a token.
    pub fn covers(&self, normalized_skill: &str) -> bool {
        normalized_skill
            .split_whitespace()
            .all(|part| self.contains(part))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MatchResult
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of matching one resume against one job's skill list.
///
/// `matched_skills` and `missing_skills` partition the (normalized) required skills,
/// each preserving input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: u32, // 0 – 100
    pub suggestions: Vec<String>,
}

impl MatchResult {
    pub fn total_skills(&self) -> usize {
        self.matched_skills.len() + self.missing_skills.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Matches `required_skills` against `resume_text`. Never fails: empty inputs and
/// non-ASCII text are handled by the normalization rules.
pub fn match_skills<S: AsRef<str>>(required_skills: &[S], resume_text: &str) -> MatchResult {
    let resume_tokens = SkillSet::from_text(resume_text);

    let required: Vec<String> = required_skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| resume_tokens.covers(skill));

    let score = percentage(matched_skills.len(), required.len());
    let suggestions = build_suggestions(score, &resume_tokens, &required);

    MatchResult {
        matched_skills,
        missing_skills,
        score,
        suggestions,
    }
}

/// round_half_even(100 × part / max(1, whole)), computed on integers so ties are exact.
pub fn percentage(part: usize, whole: usize) -> u32 {
    let numerator = 100 * part as u64;
    let denominator = whole.max(1) as u64;
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);

    let rounded = if twice_remainder > denominator
        || (twice_remainder == denominator && quotient % 2 == 1)
    {
        quotient + 1
    } else {
        quotient
    };
    rounded.min(100) as u32
}

fn build_suggestions(score: u32, resume_tokens: &SkillSet, required: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();
    if score < 100 {
        suggestions.push(MISSING_SKILLS_SUGGESTION.to_string());
    }
    if !resume_tokens.contains("python") && required.iter().any(|s| s.contains("python")) {
        suggestions.push(PYTHON_SUGGESTION.to_string());
    }
    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_example() {
        let result = match_skills(
            &["python", "sql", "excel"],
            "Experienced with Python and SQL queries",
        );
        assert_eq!(result.matched_skills, vec!["python", "sql"]);
        assert_eq!(result.missing_skills, vec!["excel"]);
        assert_eq!(result.score, 67);
        assert!(result
            .suggestions
            .contains(&MISSING_SKILLS_SUGGESTION.to_string()));
        assert!(!result.suggestions.contains(&PYTHON_SUGGESTION.to_string()));
    }

    #[test]
    fn test_empty_required_skills_scores_zero() {
        let result = match_skills::<&str>(&[], "Rust, Go and a lot of SQL");
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_resume_text_misses_everything() {
        let result = match_skills(&["rust", "go"], "");
        assert_eq!(result.missing_skills, vec!["rust", "go"]);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_case_insensitive_on_both_sides() {
        let result = match_skills(&["Python"], "I know python well");
        assert_eq!(result.matched_skills, vec!["python"]);
        assert_eq!(result.score, 100);

        let result = match_skills(&["python"], "I KNOW PYTHON WELL");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_multi_word_skill_needs_every_word() {
        let hit = match_skills(
            &["data analysis"],
            "I did some data processing and analysis work",
        );
        assert_eq!(hit.matched_skills, vec!["data analysis"]);

        let miss = match_skills(&["data analysis"], "I know analysis");
        assert_eq!(miss.missing_skills, vec!["data analysis"]);
    }

    #[test]
    fn test_token_equality_not_substring() {
        // "java" must not match inside "javascript"
        let result = match_skills(&["java"], "Five years of JavaScript");
        assert_eq!(result.missing_skills, vec!["java"]);
    }

    #[test]
    fn test_punctuation_acts_as_separator() {
        let result = match_skills(&["react", "sql"], "Skills: React/Redux,SQL;");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        let result = match_skills(&["python", "caf"], "Pythonéxpert — café");
        // "pythonéxpert" splits into "python" and "xpert"; "café" becomes "caf"
        assert_eq!(result.matched_skills, vec!["python", "caf"]);
    }

    #[test]
    fn test_single_char_tokens_are_dropped() {
        let tokens = SkillSet::from_text("C and R and Go");
        assert!(!tokens.contains("c"));
        assert!(!tokens.contains("r"));
        assert!(tokens.contains("go"));
        assert!(tokens.contains("and"));
        assert_eq!(tokens.tokens.len(), 2);
    }

    #[test]
    fn test_required_skills_are_trimmed_and_lowercased() {
        let result = match_skills(&["  Docker  ", "KUBERNETES"], "docker only");
        assert_eq!(result.matched_skills, vec!["docker"]);
        assert_eq!(result.missing_skills, vec!["kubernetes"]);
    }

    #[test]
    fn test_partition_preserves_input_order_and_duplicates() {
        let required = ["go", "rust", "go", "zig", "rust"];
        let result = match_skills(&required, "rust and go");
        assert_eq!(result.matched_skills, vec!["go", "rust", "go", "rust"]);
        assert_eq!(result.missing_skills, vec!["zig"]);
        assert_eq!(result.total_skills(), required.len());
    }

    #[test]
    fn test_blank_skill_is_vacuously_matched() {
        let result = match_skills(&["   "], "");
        assert_eq!(result.matched_skills, vec![""]);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_python_suggestion_when_required_but_absent() {
        let result = match_skills(&["Python scripting", "sql"], "SQL reporting");
        assert!(result.suggestions.contains(&PYTHON_SUGGESTION.to_string()));
        assert!(result
            .suggestions
            .contains(&MISSING_SKILLS_SUGGESTION.to_string()));
    }

    #[test]
    fn test_full_match_has_no_suggestions() {
        let result = match_skills(&["python", "pandas"], "python, pandas");
        assert_eq!(result.score, 100);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_matching_is_idempotent() {
        let required = ["python", "data analysis", "excel"];
        let text = "Data analysis in Excel with Python";
        assert_eq!(match_skills(&required, text), match_skills(&required, text));
    }

    #[test]
    fn test_percentage_rounds_half_to_even() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 12); // 12.5 → 12
        assert_eq!(percentage(3, 8), 38); // 37.5 → 38
        assert_eq!(percentage(1, 40), 2); // 2.5 → 2
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        for n in 0..=12 {
            for m in 0..=n {
                let score = percentage(m, n);
                assert!(score <= 100, "{m}/{n} gave {score}");
            }
        }
    }

    #[test]
    fn test_match_result_serializes_with_snake_case_fields() {
        let result = match_skills(&["rust"], "rust");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matched_skills"][0], "rust");
        assert_eq!(json["score"], 100);
        assert!(json["missing_skills"].as_array().unwrap().is_empty());
    }
}
