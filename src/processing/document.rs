//! Resume document structures and education/experience segmentation

use crate::processing::contact::ContactInfo;
use crate::processing::dates::DateRangeScanner;
use crate::processing::text_processor::section_slice;
use crate::processing::vocabulary::{EDUCATION_SECTION_STOPS, EXPERIENCE_SECTION_STOPS};
use regex::Regex;
use serde::{Deserialize, Serialize};

const EDUCATION_SECTION_SYNONYMS: &[&str] = &[
    "education",
    "academic background",
    "educational background",
    "academic history",
];

const EXPERIENCE_SECTION_SYNONYMS: &[&str] = &[
    "work experience",
    "professional experience",
    "employment history",
    "work history",
    "experience",
];

/// Structured view of one uploaded resume. Built once per document by the
/// extraction pipeline and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub raw_text: String,
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}

/// One education entry assembled by zipping independent pattern sweeps.
///
/// The zip is positional: when the institution, degree, and date sweeps
/// return different counts, fields can attach to the wrong entry. Such
/// entries are flagged `low_confidence` rather than silently realigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub dates: Option<String>,
    pub low_confidence: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub dates: Option<String>,
    pub description: Vec<String>,
}

pub struct SectionExtractor {
    institution_regex: Regex,
    degree_regex: Regex,
    title_regex: Regex,
    company_regex: Regex,
    dates: DateRangeScanner,
    education_window: usize,
    experience_window: usize,
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new(1000, 2000)
    }
}

impl SectionExtractor {
    pub fn new(education_window: usize, experience_window: usize) -> Self {
        let institution_regex =
            Regex::new(r"[A-Z][A-Za-z&.' ]+(?:University|College|Institute|School|Academy)")
                .expect("Invalid institution regex");

        let degree_regex = Regex::new(
            r"(?:Bachelor|Master|Doctor|Associate)(?:'s)?(?: of| in)? [A-Z][A-Za-z ]+|(?:B\.?S\.?|M\.?S\.?|Ph\.?D\.?|B\.?A\.?|M\.?A\.?|M\.?B\.?A\.?|B\.?Tech|M\.?Tech)(?: in)? [A-Z][A-Za-z ]+",
        )
        .expect("Invalid degree regex");

        let title_regex = Regex::new(
            r"^(?:(?:Senior|Lead|Principal|Junior|Associate) )?(?:(?:Software|Systems|Data|Full Stack|Frontend|Backend|DevOps|Cloud|Security|Network|Database|QA|Test|Product|Project|Program|Business|Marketing|Sales|HR|Financial|Operations) )?(?:Engineer|Developer|Architect|Analyst|Scientist|Manager|Director|Consultant|Administrator|Specialist|Coordinator|Designer)\b",
        )
        .expect("Invalid job title regex");

        let company_regex = Regex::new(
            r"^[A-Z][A-Za-z&.' ]*(?:Inc\.?|LLC|Ltd\.?|Corp\.?|Corporation|Company|Technologies|Solutions|Systems|Group|International|Labs)",
        )
        .expect("Invalid company regex");

        Self {
            institution_regex,
            degree_regex,
            title_regex,
            company_regex,
            dates: DateRangeScanner::new(),
            education_window,
            experience_window,
        }
    }

    /// Segment the education section into entries.
    ///
    /// Institutions, degrees, and date ranges are collected by independent
    /// sweeps over the bounded section and zipped by index. This is a
    /// best-effort heuristic: misaligned sweep counts leave trailing fields
    /// empty and mark every entry low-confidence.
    pub fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        let section = match section_slice(
            text,
            EDUCATION_SECTION_SYNONYMS,
            EDUCATION_SECTION_STOPS,
            self.education_window,
        ) {
            Some(section) => section,
            None => return Vec::new(),
        };

        let institutions: Vec<String> = self
            .institution_regex
            .find_iter(section)
            .map(|m| m.as_str().trim().to_string())
            .collect();
        let degrees: Vec<String> = self
            .degree_regex
            .find_iter(section)
            .map(|m| m.as_str().trim().to_string())
            .collect();
        let dates = self.dates.find_all(section);

        let count = institutions.len().max(degrees.len()).max(dates.len());
        let aligned = institutions.len() == degrees.len() && degrees.len() == dates.len();

        (0..count)
            .map(|i| EducationEntry {
                institution: institutions.get(i).cloned(),
                degree: degrees.get(i).cloned(),
                dates: dates.get(i).cloned(),
                low_confidence: !aligned,
            })
            .collect()
    }

    /// Segment the experience section into entries, one per blank-line
    /// separated block. Blocks with neither a title nor a company match are
    /// dropped silently.
    pub fn extract_experience(&self, text: &str) -> Vec<ExperienceEntry> {
        let section = match section_slice(
            text,
            EXPERIENCE_SECTION_SYNONYMS,
            EXPERIENCE_SECTION_STOPS,
            self.experience_window,
        ) {
            Some(section) => section,
            None => return Vec::new(),
        };

        section
            .split("\n\n")
            .filter_map(|block| self.parse_experience_block(block))
            .collect()
    }

    fn parse_experience_block(&self, block: &str) -> Option<ExperienceEntry> {
        let mut entry = ExperienceEntry::default();

        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(stripped) = line.strip_prefix(['•', '*', '-']) {
                entry.description.push(stripped.trim().to_string());
                continue;
            }

            if entry.title.is_none() {
                if let Some(m) = self.title_regex.find(line) {
                    entry.title = Some(m.as_str().to_string());
                }
            }
            if entry.company.is_none() {
                entry.company = self.find_company(line);
            }
            if entry.dates.is_none() {
                entry.dates = self.dates.first_range(line);
            }
        }

        if entry.title.is_some() || entry.company.is_some() {
            Some(entry)
        } else {
            None
        }
    }

    /// A company is a capitalized phrase with a corporate suffix, or the
    /// leading segment of a "Company | Location | Dates" line.
    fn find_company(&self, line: &str) -> Option<String> {
        if let Some(m) = self.company_regex.find(line) {
            return Some(m.as_str().trim().to_string());
        }

        let (head, rest) = line.split_once('|')?;
        let head = head.trim();
        if head.starts_with(|c: char| c.is_ascii_uppercase())
            && rest.contains(',')
            && !self.title_regex.is_match(head)
        {
            return Some(head.to_string());
        }
        None
    }
}
