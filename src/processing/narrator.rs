//! Human-readable strength and improvement narration
//!
//! Presentation text generation from fixed rule tables. Filler statements
//! are picked with a hash-seeded index so identical inputs always narrate
//! identically.

use crate::processing::job_matcher::{scan_job_skills, MatchedJob, UserPreferences};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

const MIN_STRENGTHS: usize = 4;
const MAX_STRENGTHS: usize = 5;
const TARGET_IMPROVEMENTS: usize = 3;

const GENERIC_STRENGTHS: &[&str] = &[
    "Adaptable to changing requirements and environments",
    "Capable of handling multiple responsibilities efficiently",
    "Committed to continuous learning and improvement",
    "Solid foundation for career growth and development",
];

const GENERIC_IMPROVEMENTS: &[&str] = &[
    "Could benefit from expanding professional network",
    "May need to demonstrate more quantifiable achievements",
    "Consider pursuing additional certifications or education",
    "Focus on developing a stronger personal brand",
];

const PROGRAMMING_STRENGTH_SKILLS: &[&str] =
    &["javascript", "python", "java", "c++", "react", "angular"];
const INTERPERSONAL_SKILLS: &[&str] = &["communication", "teamwork", "leadership"];
const ANALYTICAL_SKILLS: &[&str] = &["problem solving", "critical thinking", "analytical"];

#[derive(Debug, Default)]
pub struct RecommendationNarrator;

impl RecommendationNarrator {
    pub fn new() -> Self {
        Self
    }

    /// Four to five strength statements for the user's profile.
    pub fn strengths(&self, prefs: &UserPreferences, skills: &[String]) -> Vec<String> {
        let mut strengths = Vec::new();
        let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

        match prefs.job_preference.as_str() {
            "Software Development" => {
                strengths.push("Strong technical aptitude for software development".to_string());
                if contains_any(&lowered, PROGRAMMING_STRENGTH_SKILLS) {
                    strengths.push("Proficient in in-demand programming languages".to_string());
                }
            }
            "Data Science" => {
                strengths.push("Strong analytical and data interpretation skills".to_string());
            }
            "Marketing" => {
                strengths.push("Creative approach to marketing challenges".to_string());
            }
            "Finance" => {
                strengths.push("Strong numerical and analytical abilities".to_string());
            }
            _ => strengths.push("Valuable skill set for your chosen field".to_string()),
        }

        match prefs.experience_level.as_str() {
            "Entry Level" => strengths.push("Fresh perspective and eagerness to learn".to_string()),
            "Mid-Level" => {
                strengths.push("Balanced combination of skills and practical experience".to_string())
            }
            "Senior" => strengths.push("Extensive expertise and leadership potential".to_string()),
            "Executive" => {
                strengths.push("High-level strategic thinking capabilities".to_string())
            }
            _ => {}
        }

        match prefs.work_style.as_str() {
            "Remote" => {
                strengths.push("Self-motivated with strong remote work capabilities".to_string())
            }
            "Hybrid" => {
                strengths.push("Adaptable to both office and remote environments".to_string())
            }
            "On-Site" => strengths.push("Strong in-person collaboration skills".to_string()),
            _ => {}
        }

        if contains_any(&lowered, INTERPERSONAL_SKILLS) {
            strengths.push("Excellent interpersonal and communication skills".to_string());
        }
        if contains_any(&lowered, ANALYTICAL_SKILLS) {
            strengths.push("Strong problem-solving and analytical abilities".to_string());
        }

        pad_with_fillers(
            &mut strengths,
            GENERIC_STRENGTHS,
            MIN_STRENGTHS,
            seed(prefs, skills),
        );
        strengths.truncate(MAX_STRENGTHS);
        strengths
    }

    /// Up to three improvement statements, including a skill-gap hint drawn
    /// from the strongest matched jobs.
    pub fn improvements(&self, prefs: &UserPreferences, matched_jobs: &[MatchedJob]) -> Vec<String> {
        let mut improvements = Vec::new();

        match prefs.experience_level.as_str() {
            "Entry Level" => {
                improvements.push("Limited professional experience".to_string());
                improvements.push("May require additional training and mentorship".to_string());
            }
            "Mid-Level" => {
                improvements.push("May need to develop stronger leadership skills".to_string());
                improvements.push("Could benefit from more specialized expertise".to_string());
            }
            "Senior" => {
                improvements
                    .push("May face higher competition for leadership positions".to_string());
                improvements
                    .push("Need to demonstrate innovation and strategic thinking".to_string());
            }
            "Executive" => {
                improvements.push("Must excel in high-pressure decision-making roles".to_string());
                improvements
                    .push("Expected to deliver significant organization-wide impact".to_string());
            }
            _ => {}
        }

        if let Some(gap) = self.skill_gap_statement(matched_jobs) {
            improvements.push(gap);
        }

        pad_with_fillers(
            &mut improvements,
            GENERIC_IMPROVEMENTS,
            TARGET_IMPROVEMENTS,
            seed(prefs, &[]),
        );
        improvements.truncate(TARGET_IMPROVEMENTS);
        improvements
    }

    /// Skills demanded by the top three matched jobs, as one statement.
    fn skill_gap_statement(&self, matched_jobs: &[MatchedJob]) -> Option<String> {
        let top_skills: BTreeSet<&str> = matched_jobs
            .iter()
            .take(3)
            .flat_map(|m| scan_job_skills(&m.job))
            .collect();

        if top_skills.is_empty() {
            return None;
        }

        let listed: Vec<&str> = top_skills.into_iter().take(3).collect();
        Some(format!("Consider developing skills in: {}", listed.join(", ")))
    }
}

fn contains_any(skills: &[String], wanted: &[&str]) -> bool {
    skills.iter().any(|s| wanted.contains(&s.as_str()))
}

/// Deterministic seed derived from the narration inputs.
fn seed(prefs: &UserPreferences, skills: &[String]) -> u64 {
    let mut hasher = DefaultHasher::new();
    prefs.job_preference.hash(&mut hasher);
    prefs.experience_level.hash(&mut hasher);
    prefs.work_style.hash(&mut hasher);
    skills.hash(&mut hasher);
    hasher.finish()
}

/// Tops up `statements` to `target` with fillers, starting at a seeded
/// offset and skipping anything already present.
fn pad_with_fillers(statements: &mut Vec<String>, fillers: &[&str], target: usize, seed: u64) {
    let mut offset = seed as usize % fillers.len();
    let mut attempts = 0;
    while statements.len() < target && attempts < fillers.len() {
        let filler = fillers[offset % fillers.len()];
        if !statements.iter().any(|s| s == filler) {
            statements.push(filler.to_string());
        }
        offset += 1;
        attempts += 1;
    }
}
