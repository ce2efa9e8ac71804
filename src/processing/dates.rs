//! Date-range recognition shared by section extraction and ATS scoring

use regex::Regex;

/// Recognizes the common resume date-range notations: "Jan 2020 - Present",
/// "03/2019 - 11/2021", "2017 - 2019".
pub struct DateRangeScanner {
    patterns: Vec<Regex>,
}

impl Default for DateRangeScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DateRangeScanner {
    pub fn new() -> Self {
        let month = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*";
        let patterns = vec![
            Regex::new(&format!(
                r"(?i)\b{m}\.?\s+\d{{4}}\s*[-–—]\s*(?:{m}\.?\s+\d{{4}}|present)",
                m = month
            ))
            .expect("Invalid month range regex"),
            Regex::new(r"(?i)\b\d{1,2}/\d{4}\s*[-–—]\s*(?:\d{1,2}/\d{4}|present)")
                .expect("Invalid numeric range regex"),
            Regex::new(r"(?i)\b\d{4}\s*[-–—]\s*(?:\d{4}|present)")
                .expect("Invalid year range regex"),
        ];
        Self { patterns }
    }

    /// All recognized ranges in document order. A span already covered by an
    /// earlier match is not reported again, so "Jan 2020 - Present" counts
    /// once even though two notations recognize parts of it.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let mut spans: Vec<(usize, usize, String)> = self
            .patterns
            .iter()
            .flat_map(|p| {
                p.find_iter(text)
                    .map(|m| (m.start(), m.end(), m.as_str().to_string()))
            })
            .collect();
        spans.sort_by_key(|(start, end, _)| (*start, std::cmp::Reverse(*end)));

        let mut ranges = Vec::new();
        let mut covered_until = 0;
        for (start, end, range) in spans {
            if start >= covered_until {
                ranges.push(range);
                covered_until = end;
            }
        }
        ranges
    }

    /// Total number of distinct recognized date ranges.
    pub fn count_ranges(&self, text: &str) -> usize {
        self.find_all(text).len()
    }

    /// The first recognized range in the text, if any.
    pub fn first_range(&self, text: &str) -> Option<String> {
        self.find_all(text).into_iter().next()
    }
}
