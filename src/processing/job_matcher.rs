//! Preference-based job scoring and ranking

use crate::config::ScoringConfig;
use crate::processing::vocabulary::{related_terms, EXPERIENCE_LEVELS, JOB_SCAN_SKILLS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as provided by the job-board collaborator. The matcher
/// only reads these; ownership and persistence stay with the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    pub experience_level: String,
    pub remote: bool,
    pub date_posted: DateTime<Utc>,
}

/// Stated user preferences. Free-form strings, used only as matching input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    pub job_preference: String,
    pub experience_level: String,
    pub work_style: String,
    pub personal_values: String,
    pub career_goals: String,
}

impl UserPreferences {
    pub fn is_empty(&self) -> bool {
        self.job_preference.trim().is_empty()
            && self.experience_level.trim().is_empty()
            && self.work_style.trim().is_empty()
            && self.personal_values.trim().is_empty()
            && self.career_goals.trim().is_empty()
    }
}

/// A job posting with its transient match score attached. Recreated on
/// every matching invocation, never persisted by the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: u32,
    pub is_recommended: bool,
}

pub struct JobMatcher {
    recommendation_threshold: u32,
    skill_bonus_step: u32,
    skill_bonus_cap: u32,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new(&ScoringConfig {
            recommendation_threshold: 70,
            skill_bonus_step: 5,
            skill_bonus_cap: 15,
        })
    }
}

impl JobMatcher {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            recommendation_threshold: config.recommendation_threshold,
            skill_bonus_step: config.skill_bonus_step,
            skill_bonus_cap: config.skill_bonus_cap,
        }
    }

    /// Score one job against the user's preferences, 0 to 100.
    ///
    /// Weights: industry match 40 (related terms 25), experience level 30
    /// (adjacent level 15), work style up to 20, then small bonuses for
    /// personal-value (+5) and career-goal (+3) tokens found in the job
    /// description.
    pub fn score_job_match(&self, job: &JobPosting, prefs: &UserPreferences) -> u32 {
        let mut score: u32 = 0;

        let position = job.position.to_lowercase();
        let description = job.description.to_lowercase();
        let preference = prefs.job_preference.trim().to_lowercase();

        let related = related_terms(&prefs.job_preference);
        if !preference.is_empty()
            && (position.contains(&preference) || description.contains(&preference))
        {
            score += 40;
        } else if related.iter().any(|term| position.contains(term)) {
            // A related role keyword in the title counts as a full
            // industry/title match.
            score += 40;
        } else if related.iter().any(|term| description.contains(term)) {
            score += 25;
        }

        if job.experience_level == prefs.experience_level && !prefs.experience_level.is_empty() {
            score += 30;
        } else if level_distance(&job.experience_level, &prefs.experience_level) == Some(1) {
            score += 15;
        }

        match prefs.work_style.as_str() {
            "Remote" if job.remote => score += 20,
            "Hybrid" if job.remote => score += 10,
            "On-Site" if !job.remote => score += 15,
            _ => {}
        }

        score = add_token_bonus(score, &prefs.personal_values, &description, 5);
        score = add_token_bonus(score, &prefs.career_goals, &description, 3);

        score.min(100)
    }

    /// Score and rank every job. Results are sorted by descending score with
    /// the original relative order preserved for ties; jobs at or above the
    /// recommendation threshold are flagged.
    ///
    /// Callers without extracted skills pass an empty slice.
    pub fn match_jobs(
        &self,
        jobs: &[JobPosting],
        prefs: &UserPreferences,
        skills: &[String],
    ) -> Vec<MatchedJob> {
        if jobs.is_empty() || prefs.is_empty() {
            return Vec::new();
        }

        let mut matched: Vec<MatchedJob> = jobs
            .iter()
            .map(|job| {
                let base = self.score_job_match(job, prefs);
                let bonus = self.skill_overlap_bonus(job, skills);
                let match_score = (base + bonus).min(100);
                MatchedJob {
                    job: job.clone(),
                    match_score,
                    is_recommended: match_score >= self.recommendation_threshold,
                }
            })
            .collect();

        // sort_by is stable, so equal scores keep their input order.
        matched.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matched
    }

    fn skill_overlap_bonus(&self, job: &JobPosting, skills: &[String]) -> u32 {
        if skills.is_empty() {
            return 0;
        }

        let job_skills = scan_job_skills(job);
        let overlapping = skills
            .iter()
            .filter(|skill| {
                let skill = skill.to_lowercase();
                job_skills
                    .iter()
                    .any(|job_skill| job_skill.contains(&skill) || skill.contains(job_skill))
            })
            .count() as u32;

        (overlapping * self.skill_bonus_step).min(self.skill_bonus_cap)
    }
}

/// Fixed-vocabulary scan of a posting's combined title, description, and
/// requirements text. Plain substring containment, lowercased.
pub fn scan_job_skills(job: &JobPosting) -> Vec<&'static str> {
    let full_text = format!("{} {} {}", job.position, job.description, job.requirements)
        .to_lowercase();

    JOB_SCAN_SKILLS
        .iter()
        .filter(|skill| full_text.contains(*skill))
        .copied()
        .collect()
}

/// Distance between two levels on the ordered experience scale, or `None`
/// when either level is off the scale.
fn level_distance(a: &str, b: &str) -> Option<usize> {
    let a_idx = EXPERIENCE_LEVELS.iter().position(|l| *l == a)?;
    let b_idx = EXPERIENCE_LEVELS.iter().position(|l| *l == b)?;
    Some(a_idx.abs_diff(b_idx))
}

/// Add `points` for each token of `source` (split on commas/whitespace,
/// length over three) found in the job description. Bonus accumulation
/// stops once the running total passes 100; the caller clamps.
fn add_token_bonus(mut score: u32, source: &str, description: &str, points: u32) -> u32 {
    for token in source
        .to_lowercase()
        .split([',', ' ', '\t', '\n'])
        .filter(|t| t.len() > 3)
    {
        if description.contains(token) {
            score += points;
            if score > 100 {
                break;
            }
        }
    }
    score
}
