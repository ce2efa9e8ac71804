//! ATS compatibility scoring
//!
//! Five weighted sub-analyses (format 20, keywords 30, sections 25, contact
//! 10, experience/education formatting 15) summed and clamped to 100. The
//! public entry point never fails: empty input yields a zero score with
//! explanatory feedback, and an unexpected internal panic is downgraded to a
//! neutral mid-range result.

use crate::processing::contact::ContactExtractor;
use crate::processing::dates::DateRangeScanner;
use crate::processing::text_processor::{contains_word, TextProcessor};
use crate::processing::vocabulary::{
    is_stop_word, ACTION_VERBS, CRITICAL_SECTIONS, INDUSTRY_KEYWORDS, SECTION_SYNONYMS,
};
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};

const FORMAT_MAX: f32 = 20.0;
const KEYWORDS_MAX: f32 = 30.0;
const SECTIONS_MAX: f32 = 25.0;
const CONTACT_MAX: f32 = 10.0;
const EXPERIENCE_MAX: f32 = 15.0;

/// Job-description keywords can add at most this many points on top of the
/// industry keyword score, still capped at `KEYWORDS_MAX` combined.
const JOB_KEYWORD_BONUS_MAX: f32 = 15.0;

/// Fallback when an internal fault interrupts scoring.
const NEUTRAL_SCORE: u32 = 50;

/// One weighted sub-analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubScore {
    pub score: f32,
    pub max_possible: f32,
    pub feedback: Vec<String>,
}

/// Per-dimension breakdown of an ATS score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub format: SubScore,
    pub keywords: SubScore,
    pub sections: SubScore,
    pub contact_info: SubScore,
    pub experience: SubScore,
}

/// Overall ATS compatibility result.
///
/// `score` is `min(100, round(sum of sub-scores))`; each sub-score stays
/// within `[0, max_possible]`. `breakdown` is absent on the degraded paths
/// (unreadable input, recovered internal fault).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsResult {
    pub score: u32,
    pub feedback: Vec<String>,
    pub breakdown: Option<AtsBreakdown>,
}

pub struct AtsScorer {
    processor: TextProcessor,
    contact: ContactExtractor,
    dates: DateRangeScanner,
    table_regex: Regex,
    spacing_regex: Regex,
    odd_bullet_regex: Regex,
    header_regex: Regex,
    bullet_line_regex: Regex,
    action_verb_regex: Regex,
    github_regex: Regex,
    portfolio_regex: Regex,
    /// Lowercased industry keyword lists, in vocabulary order.
    industries: Vec<(&'static str, Vec<String>)>,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtsScorer {
    pub fn new() -> Self {
        let table_regex = Regex::new(r"\|\s+\|").expect("Invalid table regex");
        let spacing_regex = Regex::new(r" {4,}").expect("Invalid spacing regex");
        let odd_bullet_regex = Regex::new(r"[♦►▪◘○◦]").expect("Invalid bullet regex");
        let header_regex =
            Regex::new(r"(?m)^[A-Z][A-Za-z ]{2,30}$").expect("Invalid header regex");
        let bullet_line_regex =
            Regex::new(r"(?m)^[ \t]*(?:[•*\-]|\d+\.)[ \t]+\S").expect("Invalid bullet line regex");
        let action_verb_regex = Regex::new(&format!(
            r"(?im)^[ \t]*(?:[•*\-]|\d+\.)[ \t]+(?:{})\b",
            ACTION_VERBS.join("|")
        ))
        .expect("Invalid action verb regex");
        let github_regex =
            Regex::new(r"github\.com/[a-zA-Z0-9_-]+").expect("Invalid GitHub regex");
        let portfolio_regex = Regex::new(
            r"(?i)(?:portfolio|website|site):\s*(?:https?://)?(?:www\.)?[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.\S{2,}",
        )
        .expect("Invalid portfolio regex");

        let industries = INDUSTRY_KEYWORDS
            .iter()
            .map(|(name, keywords)| {
                let lowered = keywords.iter().map(|k| k.to_ascii_lowercase()).collect();
                (*name, lowered)
            })
            .collect();

        Self {
            processor: TextProcessor::new(),
            contact: ContactExtractor::new(),
            dates: DateRangeScanner::new(),
            table_regex,
            spacing_regex,
            odd_bullet_regex,
            header_regex,
            bullet_line_regex,
            action_verb_regex,
            github_regex,
            portfolio_regex,
            industries,
        }
    }

    /// Score a resume, optionally against a specific job description.
    ///
    /// Never fails: all inputs terminate in a well-formed result.
    pub fn score(&self, resume_text: &str, job_description: Option<&str>) -> AtsResult {
        if resume_text.trim().is_empty() {
            return AtsResult {
                score: 0,
                feedback: vec![
                    "Unable to process resume text. Please ensure your resume is text-based."
                        .to_string(),
                ],
                breakdown: None,
            };
        }

        match panic::catch_unwind(AssertUnwindSafe(|| {
            self.score_inner(resume_text, job_description)
        })) {
            Ok(result) => result,
            Err(_) => {
                warn!("ATS scoring hit an internal fault; returning neutral score");
                AtsResult {
                    score: NEUTRAL_SCORE,
                    feedback: vec![
                        "An error occurred while analyzing your resume. Please try again."
                            .to_string(),
                    ],
                    breakdown: None,
                }
            }
        }
    }

    fn score_inner(&self, resume_text: &str, job_description: Option<&str>) -> AtsResult {
        let normalized = self.processor.normalize(resume_text);

        let format = self.analyze_format(&normalized);
        let keywords = self.analyze_keywords(&normalized, job_description);
        let sections = self.analyze_sections(resume_text, &normalized);
        let contact_info = self.analyze_contact_info(resume_text);
        let experience = self.analyze_experience_education(resume_text);

        let total = format.score
            + keywords.score
            + sections.score
            + contact_info.score
            + experience.score;
        let score = (total.round() as u32).min(100);

        let mut feedback = Vec::new();
        for sub in [&format, &keywords, &sections, &contact_info, &experience] {
            feedback.extend(sub.feedback.iter().cloned());
        }

        AtsResult {
            score,
            feedback,
            breakdown: Some(AtsBreakdown {
                format,
                keywords,
                sections,
                contact_info,
                experience,
            }),
        }
    }

    /// Format compatibility: penalizes very short text, table artifacts,
    /// irregular spacing, and unusual bullet glyphs.
    fn analyze_format(&self, normalized: &str) -> SubScore {
        let mut score = FORMAT_MAX;
        let mut feedback = Vec::new();

        if normalized.chars().count() < 500 {
            score -= 10.0;
            feedback.push("Your resume appears too short. Ensure all sections are included.".to_string());
        }

        if self.table_regex.find_iter(normalized).count() > 2 {
            score -= 5.0;
            feedback.push(
                "Your resume may contain tables, which can confuse ATS systems. Use standard formats instead."
                    .to_string(),
            );
        }

        if self.spacing_regex.is_match(normalized) {
            score -= 3.0;
            feedback.push(
                "Inconsistent spacing detected. Use standard line breaks between sections."
                    .to_string(),
            );
        }

        if self.odd_bullet_regex.is_match(normalized) {
            score -= 2.0;
            feedback.push(
                "Unusual bullet points or characters detected. Use standard bullets for better compatibility."
                    .to_string(),
            );
        }

        score = score.max(0.0);
        if score == FORMAT_MAX {
            feedback.push("Good job! Your resume format appears ATS-friendly.".to_string());
        }

        SubScore {
            score,
            max_possible: FORMAT_MAX,
            feedback,
        }
    }

    /// Industry keyword coverage, with an optional bonus for keywords pulled
    /// from a concrete job description.
    fn analyze_keywords(&self, normalized: &str, job_description: Option<&str>) -> SubScore {
        let mut feedback = Vec::new();

        // First industry reaching the highest hit count wins.
        let mut detected = &self.industries[0];
        let mut highest = 0;
        for industry in &self.industries {
            let hits = industry
                .1
                .iter()
                .filter(|k| contains_word(normalized, k))
                .count();
            if hits > highest {
                highest = hits;
                detected = industry;
            }
        }

        let (industry_name, keywords) = detected;
        let matched = keywords
            .iter()
            .filter(|k| contains_word(normalized, k))
            .count();
        let ratio = matched as f32 / keywords.len() as f32;
        let mut score = (ratio * KEYWORDS_MAX).round();

        if ratio < 0.3 {
            feedback.push(format!(
                "Your resume lacks essential {} keywords. Consider adding more industry-specific terms.",
                industry_name
            ));
        } else if ratio < 0.5 {
            feedback.push(format!(
                "Your resume has some {} keywords, but could use more to improve ATS matching.",
                industry_name
            ));
        } else if ratio >= 0.7 {
            feedback.push(format!(
                "Great job incorporating {} keywords in your resume.",
                industry_name
            ));
        }

        if let Some(job_text) = job_description {
            let candidates: Vec<String> = self
                .processor
                .word_frequencies(job_text)
                .into_iter()
                .filter(|(word, count)| *count >= 3 && !is_stop_word(word))
                .map(|(word, _)| word)
                .collect();

            let job_matches = candidates
                .iter()
                .filter(|word| contains_word(normalized, word))
                .count();
            let job_ratio = job_matches as f32 / candidates.len().max(1) as f32;
            score = (score + (job_ratio * JOB_KEYWORD_BONUS_MAX).round()).min(KEYWORDS_MAX);

            if job_matches > 0 {
                feedback.push(format!(
                    "Your resume matches {} keywords from the job description.",
                    job_matches
                ));
            } else if !candidates.is_empty() {
                feedback.push(
                    "Your resume doesn't contain key terms from the job description. Consider customizing it for this position."
                        .to_string(),
                );
            }
        }

        SubScore {
            score,
            max_possible: KEYWORDS_MAX,
            feedback,
        }
    }

    /// Presence of the canonical resume sections plus a header-formatting
    /// check against the original-case text.
    fn analyze_sections(&self, original: &str, normalized: &str) -> SubScore {
        let mut feedback = Vec::new();

        let detected: Vec<&str> = SECTION_SYNONYMS
            .iter()
            .filter(|group| group.iter().any(|syn| contains_word(normalized, syn)))
            .map(|group| group[0])
            .collect();

        let critical_found: Vec<&str> = CRITICAL_SECTIONS
            .iter()
            .filter(|section| detected.contains(section))
            .copied()
            .collect();

        // 5 points per critical section, 2.5 per other section up to 10.
        let mut score = critical_found.len() as f32 * 5.0;
        let others = detected.len() - critical_found.len();
        score += (others as f32 * 2.5).min(10.0);

        let missing: Vec<&str> = CRITICAL_SECTIONS
            .iter()
            .filter(|section| !detected.contains(section))
            .copied()
            .collect();

        if missing.is_empty() {
            feedback.push("Great job including all essential resume sections!".to_string());
        } else {
            feedback.push(format!(
                "Your resume appears to be missing these key sections: {}.",
                missing.join(", ")
            ));
        }

        // Capitalized short lines are the usual visual cue for headers.
        if self.header_regex.find_iter(original).count() < 3 {
            score = (score - 5.0).max(0.0);
            feedback.push(
                "Your section headers may not be clearly formatted. Use clear, distinct headings for each section."
                    .to_string(),
            );
        }

        SubScore {
            score,
            max_possible: SECTIONS_MAX,
            feedback,
        }
    }

    /// Contact details: email and phone carry the most weight, online
    /// profiles and location fill out the rest.
    fn analyze_contact_info(&self, original: &str) -> SubScore {
        let mut score = 0.0;
        let mut feedback = Vec::new();

        if self.contact.has_email(original) {
            score += 3.0;
        } else {
            feedback.push("No email address detected. Include a professional email address.".to_string());
        }

        if self.contact.has_phone(original) {
            score += 3.0;
        } else {
            feedback.push("No phone number detected. Include your phone number for recruiter contact.".to_string());
        }

        let has_profile = self.contact.has_linkedin(original)
            || self.github_regex.is_match(original)
            || self.portfolio_regex.is_match(original);
        if has_profile {
            score += 2.0;
        } else {
            feedback.push(
                "Consider adding your LinkedIn profile or personal website to your contact information."
                    .to_string(),
            );
        }

        if self.contact.has_location(original) {
            score += 2.0;
        } else {
            feedback.push(
                "Include your location (city, state) to help with location-based job matching."
                    .to_string(),
            );
        }

        if score == CONTACT_MAX {
            feedback.push(
                "Excellent contact information section! All essential contact details are present."
                    .to_string(),
            );
        }

        SubScore {
            score,
            max_possible: CONTACT_MAX,
            feedback,
        }
    }

    /// Formatting quality of the experience/education content: date ranges,
    /// bullet usage, and action verbs opening the bullets.
    fn analyze_experience_education(&self, original: &str) -> SubScore {
        let mut score = 0.0;
        let mut feedback = Vec::new();

        let date_ranges = self.dates.count_ranges(original);
        if date_ranges >= 3 {
            score += 5.0;
        } else if date_ranges >= 1 {
            score += 3.0;
            feedback.push("Include consistent date ranges for all positions and education entries.".to_string());
        } else {
            feedback.push(
                "No clear date formatting found. Use consistent date ranges for all experiences and education."
                    .to_string(),
            );
        }

        let bullets = self.bullet_line_regex.find_iter(original).count();
        if bullets >= 5 {
            score += 5.0;
        } else if bullets >= 2 {
            score += 3.0;
            feedback.push("Use more bullet points to clearly present your achievements.".to_string());
        } else {
            feedback.push("Use bullet points to highlight your accomplishments and responsibilities.".to_string());
        }

        let action_verbs = self.action_verb_regex.find_iter(original).count();
        if action_verbs >= 4 {
            score += 5.0;
        } else if action_verbs >= 2 {
            score += 3.0;
            feedback.push("Use more strong action verbs at the beginning of your bullet points.".to_string());
        } else {
            feedback.push("Start achievement statements with strong action verbs.".to_string());
        }

        if score == EXPERIENCE_MAX {
            feedback.push("Excellent formatting of your experience and education sections!".to_string());
        }

        SubScore {
            score,
            max_possible: EXPERIENCE_MAX,
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_RESUME: &str = "John Smith\n\
        123 Main Street, New York, NY 10001\n\
        john.smith@example.com | (555) 123-4567 | linkedin.com/in/johnsmith\n\
        \n\
        SKILLS\n\
        • JavaScript, TypeScript, React, Angular\n\
        • Node.js, Express, Python, Docker, Kubernetes\n\
        • AWS, Azure, Git, GitHub, Agile, DevOps\n\
        \n\
        WORK EXPERIENCE\n\
        Senior Software Engineer\n\
        ABC Technologies | New York, NY | Jan 2020 - Present\n\
        • Led development of a customer-facing portal serving 50,000 users\n\
        • Implemented RESTful APIs using Node.js and Express\n\
        • Improved application performance, reducing load times by 40%\n\
        \n\
        Software Engineer\n\
        XYZ Corp | Boston, MA | Jun 2017 - Dec 2019\n\
        • Developed and maintained web applications using React\n\
        • Created unit and integration tests with 90% coverage\n\
        \n\
        EDUCATION\n\
        Bachelor of Science in Computer Science\n\
        State University | Cambridge, MA | 2013 - 2017\n\
        \n\
        PROJECTS\n\
        • Built an e-commerce platform with the MERN stack\n\
        \n\
        CERTIFICATIONS\n\
        AWS Certified Developer\n";

    fn scorer() -> AtsScorer {
        AtsScorer::new()
    }

    #[test]
    fn test_score_in_range() {
        let result = scorer().score(STRONG_RESUME, None);
        assert!(result.score <= 100);
        assert!(result.score > 0);
    }

    #[test]
    fn test_empty_input_is_zero_with_feedback() {
        let result = scorer().score("", None);
        assert_eq!(result.score, 0);
        assert!(!result.feedback.is_empty());
        assert!(result.breakdown.is_none());

        let whitespace = scorer().score("   \n  ", None);
        assert_eq!(whitespace.score, 0);
    }

    #[test]
    fn test_determinism() {
        let scorer = scorer();
        let first = scorer.score(STRONG_RESUME, None);
        let second = scorer.score(STRONG_RESUME, None);
        assert_eq!(first.score, second.score);
        assert_eq!(first.feedback, second.feedback);
    }

    #[test]
    fn test_total_equals_clamped_sum_of_subscores() {
        let result = scorer().score(STRONG_RESUME, None);
        let breakdown = result.breakdown.as_ref().unwrap();
        let sum = breakdown.format.score
            + breakdown.keywords.score
            + breakdown.sections.score
            + breakdown.contact_info.score
            + breakdown.experience.score;
        assert_eq!(result.score, (sum.round() as u32).min(100));

        for sub in [
            &breakdown.format,
            &breakdown.keywords,
            &breakdown.sections,
            &breakdown.contact_info,
            &breakdown.experience,
        ] {
            assert!(sub.score >= 0.0);
            assert!(sub.score <= sub.max_possible);
        }
    }

    #[test]
    fn test_full_contact_subscore() {
        let result = scorer().score(STRONG_RESUME, None);
        let contact = &result.breakdown.as_ref().unwrap().contact_info;
        assert_eq!(contact.score, contact.max_possible);
    }

    #[test]
    fn test_short_resume_format_penalty() {
        let short = "Jane Doe\njane@example.com\nSKILLS: Python";
        let result = scorer().score(short, None);
        let format = &result.breakdown.as_ref().unwrap().format;
        assert!(format.score <= format.max_possible - 10.0);
    }

    #[test]
    fn test_job_description_bonus_never_exceeds_max() {
        let job = "We need React React React and Node Node Node developers. \
                   React experience with Node required. React and Node daily.";
        let result = scorer().score(STRONG_RESUME, Some(job));
        let keywords = &result.breakdown.as_ref().unwrap().keywords;
        assert!(keywords.score <= keywords.max_possible);
    }

    #[test]
    fn test_job_description_bonus_helps() {
        let scorer = scorer();
        let without = scorer.score(STRONG_RESUME, None);
        let job = "Looking for react and node.js engineers with docker and kubernetes experience. \
                   Must know react, node.js, docker. Kubernetes and react daily. Docker and node.js always. \
                   Kubernetes required.";
        let with = scorer.score(STRONG_RESUME, Some(job));

        let without_kw = without.breakdown.as_ref().unwrap().keywords.score;
        let with_kw = with.breakdown.as_ref().unwrap().keywords.score;
        assert!(with_kw >= without_kw);
    }

    #[test]
    fn test_missing_sections_feedback() {
        let text = "Jane Doe\njane@example.com\nI have done many things over many years at many places.";
        let result = scorer().score(text, None);
        assert!(result
            .feedback
            .iter()
            .any(|f| f.contains("missing these key sections")));
    }

    #[test]
    fn test_unusual_bullets_penalized() {
        let plain = format!("{}\n", STRONG_RESUME.replace('•', "-"));
        let odd = plain.replace('-', "♦");

        let scorer = scorer();
        let plain_format = scorer.score(&plain, None).breakdown.unwrap().format.score;
        let odd_format = scorer.score(&odd, None).breakdown.unwrap().format.score;
        assert!(odd_format < plain_format);
    }
}
