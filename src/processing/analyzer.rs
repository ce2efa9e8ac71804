//! Analysis engine coordinating extraction, scoring, and matching

use crate::config::Config;
use crate::processing::ats_scorer::{AtsResult, AtsScorer};
use crate::processing::contact::ContactExtractor;
use crate::processing::document::{ResumeDocument, SectionExtractor};
use crate::processing::job_matcher::{JobMatcher, JobPosting, MatchedJob, UserPreferences};
use crate::processing::narrator::RecommendationNarrator;
use crate::processing::skills::SkillExtractor;
use log::info;
use serde::{Deserialize, Serialize};

/// Combined outcome of extracting and scoring one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub document: ResumeDocument,
    pub ats: AtsResult,
}

/// Ranked jobs with the narrated profile summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<MatchedJob>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Facade over the extraction and scoring components. All operations are
/// synchronous and pure with respect to their inputs; callers sequence
/// extraction before scoring or matching.
pub struct AnalysisEngine {
    contact: ContactExtractor,
    skills: SkillExtractor,
    sections: SectionExtractor,
    ats: AtsScorer,
    matcher: JobMatcher,
    narrator: RecommendationNarrator,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            contact: ContactExtractor::new(),
            skills: SkillExtractor::new(
                config.processing.min_section_skills,
                config.processing.skills_window,
            ),
            sections: SectionExtractor::new(
                config.processing.education_window,
                config.processing.experience_window,
            ),
            ats: AtsScorer::new(),
            matcher: JobMatcher::new(&config.scoring),
            narrator: RecommendationNarrator::new(),
        }
    }

    /// Build the structured view of a resume from its plain text.
    pub fn extract(&self, resume_text: &str) -> ResumeDocument {
        let document = ResumeDocument {
            raw_text: resume_text.to_string(),
            contact: self.contact.extract(resume_text),
            skills: self.skills.extract(resume_text),
            education: self.sections.extract_education(resume_text),
            experience: self.sections.extract_experience(resume_text),
        };
        info!(
            "Extracted {} skills, {} education entries, {} experience entries",
            document.skills.len(),
            document.education.len(),
            document.experience.len()
        );
        document
    }

    /// Extract and ATS-score a resume, optionally against a job description.
    pub fn analyze(&self, resume_text: &str, job_description: Option<&str>) -> ResumeAnalysis {
        let document = self.extract(resume_text);
        let ats = self.ats.score(resume_text, job_description);
        info!("ATS score: {}", ats.score);
        ResumeAnalysis { document, ats }
    }

    /// Score the resume text directly, without structured extraction.
    pub fn score(&self, resume_text: &str, job_description: Option<&str>) -> AtsResult {
        self.ats.score(resume_text, job_description)
    }

    /// Rank jobs against the user's preferences and extracted skills, and
    /// narrate the result.
    pub fn match_jobs(
        &self,
        jobs: &[JobPosting],
        prefs: &UserPreferences,
        skills: &[String],
    ) -> MatchReport {
        let matches = self.matcher.match_jobs(jobs, prefs, skills);
        info!(
            "Matched {} of {} jobs at or above the recommendation threshold",
            matches.iter().filter(|m| m.is_recommended).count(),
            jobs.len()
        );

        let strengths = self.narrator.strengths(prefs, skills);
        let improvements = self.narrator.improvements(prefs, &matches);

        MatchReport {
            matches,
            strengths,
            improvements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const RESUME: &str = "John Doe\n\
        john@x.com\n\
        555-123-4567\n\
        linkedin.com/in/johndoe\n\
        Austin, TX\n\
        \n\
        SKILLS\n\
        • JavaScript, React, Node.js\n\
        \n\
        EXPERIENCE\n\
        Software Engineer\n\
        CodeCraft Inc. | Austin, TX | Jan 2020 - Present\n\
        • Developed internal tooling\n";

    fn engine() -> AnalysisEngine {
        AnalysisEngine::default()
    }

    #[test]
    fn test_extraction_pipeline() {
        let document = engine().extract(RESUME);

        assert!(document.contact.is_complete());
        assert!(document.skills.iter().any(|s| s == "JavaScript"));
        assert!(document.skills.iter().any(|s| s == "React"));
        assert_eq!(document.experience.len(), 1);
    }

    #[test]
    fn test_analyze_produces_score_and_document() {
        let analysis = engine().analyze(RESUME, None);

        assert!(analysis.ats.score <= 100);
        assert!(analysis.ats.breakdown.is_some());
        assert_eq!(analysis.document.raw_text, RESUME);
    }

    #[test]
    fn test_match_report_narration() {
        let jobs = vec![JobPosting {
            id: "j1".to_string(),
            position: "Junior Developer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: "developer role using javascript and react".to_string(),
            requirements: "javascript".to_string(),
            experience_level: "Entry Level".to_string(),
            remote: true,
            date_posted: Utc::now(),
        }];
        let prefs = UserPreferences {
            job_preference: "Software Development".to_string(),
            experience_level: "Entry Level".to_string(),
            work_style: "Remote".to_string(),
            ..Default::default()
        };

        let document = engine().extract(RESUME);
        let report = engine().match_jobs(&jobs, &prefs, &document.skills);

        assert_eq!(report.matches.len(), 1);
        assert!(report.matches[0].is_recommended);
        assert!(report.strengths.len() >= 4);
        assert!(!report.improvements.is_empty());
    }
}
