//! Skill extraction: section-aware harvesting with a global keyword fallback

use crate::processing::text_processor::section_slice;
use crate::processing::vocabulary::{
    is_stop_word, INDUSTRY_KEYWORDS, PROGRAMMING_KEYWORDS, SKILLS_SECTION_STOPS,
};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use std::collections::HashSet;

const SKILLS_SECTION_SYNONYMS: &[&str] =
    &["skills", "technical skills", "core competencies", "proficiencies"];

pub struct SkillExtractor {
    /// Programming/tool keywords, scanned across the whole document.
    programming_matcher: AhoCorasick,
    /// Flattened industry vocabulary for the global fallback scan.
    vocabulary_matcher: AhoCorasick,
    vocabulary: Vec<&'static str>,
    paren_regex: Regex,
    candidate_regex: Regex,
    /// Below this many section skills the global fallback kicks in.
    min_section_skills: usize,
    section_window: usize,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(5, 500)
    }
}

impl SkillExtractor {
    pub fn new(min_section_skills: usize, section_window: usize) -> Self {
        let programming_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(PROGRAMMING_KEYWORDS)
            .expect("Failed to build programming keyword matcher");

        let mut vocabulary: Vec<&'static str> = Vec::new();
        let mut seen = HashSet::new();
        for (_, keywords) in INDUSTRY_KEYWORDS {
            for keyword in *keywords {
                if seen.insert(keyword.to_ascii_lowercase()) {
                    vocabulary.push(keyword);
                }
            }
        }

        let vocabulary_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&vocabulary)
            .expect("Failed to build vocabulary matcher");

        let paren_regex = Regex::new(r"\(([^)]{2,40})\)").expect("Invalid parenthetical regex");
        let candidate_regex =
            Regex::new(r"^[A-Za-z0-9#+/. \-]{2,40}$").expect("Invalid candidate regex");

        Self {
            programming_matcher,
            vocabulary_matcher,
            vocabulary,
            paren_regex,
            candidate_regex,
            min_section_skills,
            section_window,
        }
    }

    /// Extract a deduplicated, insertion-ordered skill list.
    ///
    /// Section-extracted skills keep their resume spelling; vocabulary hits
    /// keep the vocabulary spelling.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut skills: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        let section = section_slice(
            text,
            SKILLS_SECTION_SYNONYMS,
            SKILLS_SECTION_STOPS,
            self.section_window,
        );

        if let Some(section) = section {
            self.harvest_section(section, &mut skills, &mut seen);
            debug!("Skills section yielded {} candidates", skills.len());
        }

        // Sparse or missing section: scan the whole document against the
        // industry vocabulary instead.
        if skills.len() < self.min_section_skills {
            self.scan_matcher(&self.vocabulary_matcher, &self.vocabulary, text, &mut skills, &mut seen);
        }

        // Programming languages and tools are picked up everywhere,
        // regardless of how the section extraction went.
        self.scan_matcher(
            &self.programming_matcher,
            PROGRAMMING_KEYWORDS,
            text,
            &mut skills,
            &mut seen,
        );

        skills
    }

    /// Pull candidate skills out of a skills section via bullet lines,
    /// comma lists, and parentheticals. Plain prose lines are ignored.
    fn harvest_section(&self, section: &str, skills: &mut Vec<String>, seen: &mut HashSet<String>) {
        for line in section.lines() {
            let line = line.trim();
            let (is_bullet, body) = match line.strip_prefix(['•', '-', '*']) {
                Some(stripped) => (true, stripped.trim()),
                None => (false, line),
            };
            if !is_bullet && !body.contains(',') {
                continue;
            }

            for piece in body.split(',') {
                self.push_candidate(piece, skills, seen);
            }
        }

        for cap in self.paren_regex.captures_iter(section) {
            for piece in cap[1].split(',') {
                self.push_candidate(piece, skills, seen);
            }
        }
    }

    fn push_candidate(&self, piece: &str, skills: &mut Vec<String>, seen: &mut HashSet<String>) {
        let candidate = piece.trim();
        if candidate.len() < 2 || !self.candidate_regex.is_match(candidate) {
            return;
        }
        let lower = candidate.to_ascii_lowercase();
        if is_stop_word(&lower) || lower.chars().all(|c| c.is_ascii_digit() || c == ' ') {
            return;
        }
        if seen.insert(lower) {
            skills.push(candidate.to_string());
        }
    }

    /// Word-boundary scan of `text` with an Aho-Corasick matcher, pushing
    /// the vocabulary spelling of each hit.
    fn scan_matcher(
        &self,
        matcher: &AhoCorasick,
        patterns: &[&'static str],
        text: &str,
        skills: &mut Vec<String>,
        seen: &mut HashSet<String>,
    ) {
        for mat in matcher.find_iter(text) {
            if !on_word_boundary(text, mat.start(), mat.end()) {
                continue;
            }
            let keyword = patterns[mat.pattern().as_usize()];
            if seen.insert(keyword.to_ascii_lowercase()) {
                skills.push(keyword.to_string());
            }
        }
    }
}

/// Aho-Corasick matches are substring matches; only keep those whose
/// neighbors are not alphanumeric.
fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        SkillExtractor::default()
    }

    #[test]
    fn test_global_fallback_without_section() {
        let text = "Built dashboards in JavaScript and React for five years.";
        let skills = extractor().extract(text);

        assert!(skills.iter().any(|s| s == "JavaScript"));
        assert!(skills.iter().any(|s| s == "React"));
    }

    #[test]
    fn test_section_bullets() {
        let text = "SKILLS\n• JavaScript, TypeScript\n• Docker\n• PostgreSQL, MySQL\n\nEXPERIENCE\nEngineer";
        let skills = extractor().extract(text);

        assert!(skills.iter().any(|s| s == "JavaScript"));
        assert!(skills.iter().any(|s| s == "TypeScript"));
        assert!(skills.iter().any(|s| s == "Docker"));
        assert!(skills.iter().any(|s| s == "PostgreSQL"));
    }

    #[test]
    fn test_no_duplicates() {
        let text = "SKILLS\n• Python, Python\n\nPython projects in Python everywhere.";
        let skills = extractor().extract(text);

        let count = skills.iter().filter(|s| s.eq_ignore_ascii_case("python")).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_word_boundary_rejects_partial_hits() {
        // "Go" must not be found inside "Google".
        let text = "Worked at Google on search infrastructure.";
        let skills = extractor().extract(text);
        assert!(!skills.iter().any(|s| s == "Go"));
    }

    #[test]
    fn test_stop_words_and_numbers_rejected() {
        let text = "SKILLS\n• experience, 2019, communication tools\n\nEDUCATION\nMIT";
        let skills = extractor().extract(text);

        assert!(!skills.iter().any(|s| s.eq_ignore_ascii_case("experience")));
        assert!(!skills.iter().any(|s| s == "2019"));
    }

    #[test]
    fn test_empty_input() {
        assert!(extractor().extract("").is_empty());
    }
}
