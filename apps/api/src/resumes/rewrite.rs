//! Improved-resume formatter — deterministic template that reorganizes extracted resume
//! text around a target role. Pure string work; no LLM, no I/O.

const RULE: &str = "=====================================================";
const BULLET: &str = "  • ";

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "responsibility",
    "developed",
    "managed",
    "project",
    "intern",
];

const EDUCATION_KEYWORDS: &[&str] = &["bachelor", "master", "degree"];

const ACTION_VERBS: &[&str] = &[
    "Developed",
    "Implemented",
    "Led",
    "Improved",
    "Managed",
    "Optimized",
    "Enhanced",
];

pub fn generate_improved_resume(
    original_text: &str,
    job_title: &str,
    missing_skills: &[String],
) -> String {
    let lines: Vec<&str> = original_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let skill_lines: Vec<String> = lines
        .iter()
        .filter(|l| l.to_lowercase().contains("skill"))
        .map(|l| l.to_string())
        .collect();

    let added_skills = if missing_skills.is_empty() {
        vec!["No missing skills — excellent match!".to_string()]
    } else {
        missing_skills.to_vec()
    };

    let sections = [
        format!("{RULE}\n        IMPROVED RESUME — Optimized for {job_title}\n{RULE}"),
        format!(
            "📌 PROFESSIONAL SUMMARY\n\
             Highly motivated candidate applying for the role of {job_title}.\n\
             Enhanced readability, aligns skills with job requirements."
        ),
        format!(
            "📌 KEY SKILLS & COMPETENCIES\nCore Skills:\n{}\n\nAdded Missing Skills:\n{}",
            format_bullets(&skill_lines),
            format_bullets(&added_skills)
        ),
        format!("📌 PROFESSIONAL EXPERIENCE\n{}", rewrite_experience(&lines)),
        format!("📌 EDUCATION\n{}", extract_education(&lines)),
        "📌 NOTES\n- ATS-friendly formatting\n- Structured for recruiter readability".to_string(),
        format!("{RULE}\n                 END OF IMPROVED RESUME\n{RULE}"),
    ];

    sections.join("\n\n")
}

fn format_bullets(items: &[String]) -> String {
    if items.is_empty() {
        return format!("{BULLET}No data found");
    }
    items
        .iter()
        .map(|i| format!("{BULLET}{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn contains_any(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

fn rewrite_experience(lines: &[&str]) -> String {
    let bullets: Vec<String> = lines
        .iter()
        .filter(|l| contains_any(l, EXPERIENCE_KEYWORDS))
        .map(|l| format!("{BULLET}{}", rewrite_sentence(l.replace('-', "").trim())))
        .collect();

    if bullets.is_empty() {
        format!("{BULLET}No experience details detected.")
    } else {
        bullets.join("\n")
    }
}

/// Swaps the leading word for an action verb picked by the sentence's char length.
fn rewrite_sentence(sentence: &str) -> String {
    if sentence.is_empty() {
        return String::new();
    }
    let verb = ACTION_VERBS[sentence.chars().count() % ACTION_VERBS.len()];
    let rest: Vec<&str> = sentence.split_whitespace().skip(1).collect();
    if rest.is_empty() {
        verb.to_string()
    } else {
        format!("{verb} {}", rest.join(" "))
    }
}

fn extract_education(lines: &[&str]) -> String {
    let bullets: Vec<String> = lines
        .iter()
        .filter(|l| contains_any(l, EDUCATION_KEYWORDS))
        .map(|l| format!("{BULLET}{l}"))
        .collect();

    if bullets.is_empty() {
        format!("{BULLET}No education details detected.")
    } else {
        bullets.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        Skills: Python, SQL\n\
        - Worked on a data project for sales\n\
        Managed a team of 4 interns\n\
        Bachelor of Science in Statistics\n";

    #[test]
    fn test_sections_are_filled_from_matching_lines() {
        let out = generate_improved_resume(RESUME, "Data Analyst", &["excel".to_string()]);
        assert!(out.starts_with(RULE));
        assert!(out.contains("Optimized for Data Analyst"));
        assert!(out.contains("  • Skills: Python, SQL"));
        assert!(out.contains("Added Missing Skills:\n  • excel"));
        assert!(out.contains("  • Bachelor of Science in Statistics"));
        assert!(out.ends_with(RULE));
    }

    #[test]
    fn test_no_missing_skills_message() {
        let out = generate_improved_resume(RESUME, "Data Analyst", &[]);
        assert!(out.contains("No missing skills — excellent match!"));
    }

    #[test]
    fn test_empty_text_uses_placeholders() {
        let out = generate_improved_resume("", "Designer", &[]);
        assert!(out.contains("Core Skills:\n  • No data found"));
        assert!(out.contains("No experience details detected."));
        assert!(out.contains("No education details detected."));
    }

    #[test]
    fn test_rewrite_sentence_is_deterministic() {
        // "Worked on it" has 12 chars → 12 % 7 = 5 → "Optimized"
        assert_eq!(rewrite_sentence("Worked on it"), "Optimized on it");
        assert_eq!(rewrite_sentence("Worked on it"), rewrite_sentence("Worked on it"));
        assert_eq!(rewrite_sentence(""), "");
    }

    #[test]
    fn test_single_word_sentence_becomes_verb() {
        // 7 chars → index 0
        assert_eq!(rewrite_sentence("Project"), "Developed");
    }

    #[test]
    fn test_experience_strips_dashes() {
        let out = rewrite_experience(&["- Led project-based work"]);
        assert!(!out.contains('-'));
        assert!(out.starts_with(BULLET));
    }
}
