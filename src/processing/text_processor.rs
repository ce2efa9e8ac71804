//! Text normalization and shared text utilities

use regex::Regex;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

pub struct TextProcessor {
    word_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let word_regex = Regex::new(r"\b[a-z]{4,}\b").expect("Invalid word regex");
        Self { word_regex }
    }

    /// Case-folded copy of the text for case-insensitive matching.
    ///
    /// ASCII-only folding keeps byte offsets aligned with the original text,
    /// which the section locator relies on.
    pub fn normalize(&self, text: &str) -> String {
        text.chars().map(|c| c.to_ascii_lowercase()).collect()
    }

    /// Lowercase unicode word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_lowercase()).collect()
    }

    /// Frequencies of lowercase words of four or more letters.
    pub fn word_frequencies(&self, text: &str) -> HashMap<String, usize> {
        let normalized = self.normalize(text);
        let mut freq = HashMap::new();
        for m in self.word_regex.find_iter(&normalized) {
            *freq.entry(m.as_str().to_string()).or_insert(0) += 1;
        }
        freq
    }
}

/// Whether `needle` occurs in `haystack` on word boundaries. Both arguments
/// are expected to be lowercased already; a boundary is any position not
/// flanked by an alphanumeric character.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    for (idx, _) in haystack.match_indices(needle) {
        let before_ok = haystack[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[idx + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

/// Locate a section of `text` introduced by one of `synonyms` (earliest
/// heading occurrence wins) and bounded by the next heading from `stops`,
/// or by `window` characters when no stop heading follows.
///
/// Returns the section slice including its heading, or `None` when no
/// synonym occurs as a heading at all.
pub fn section_slice<'a>(
    text: &'a str,
    synonyms: &[&str],
    stops: &[&str],
    window: usize,
) -> Option<&'a str> {
    let lower: String = text.chars().map(|c| c.to_ascii_lowercase()).collect();

    let start = synonyms
        .iter()
        .filter_map(|s| heading_index(&lower, 0, s))
        .min()?;
    let search_from = start + 1;

    let end = next_heading_index(&lower, search_from, stops).unwrap_or_else(|| {
        let mut end = (start + window).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        end
    });

    Some(&text[start..end.max(start)])
}

fn next_heading_index(lower: &str, from: usize, stops: &[&str]) -> Option<usize> {
    stops
        .iter()
        .filter_map(|stop| heading_index(lower, from, stop))
        .min()
}

/// First occurrence of `term` that reads as a heading: nothing but
/// whitespace before it on its line, and no word character directly after.
/// Keeps "experience" from matching inside "Experienced engineer ...".
fn heading_index(lower: &str, from: usize, term: &str) -> Option<usize> {
    let mut search = from;
    while let Some(rel) = lower[search..].find(term) {
        let idx = search + rel;
        let line_start = lower[..idx].rfind('\n').map_or(0, |nl| nl + 1);
        let starts_line = lower[line_start..idx].trim().is_empty();
        let bounded = lower[idx + term.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if starts_line && bounded {
            return Some(idx);
        }
        search = idx + term.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let processor = TextProcessor::new();
        assert_eq!(processor.normalize("Rust AND C++"), "rust and c++");
        assert_eq!(processor.normalize(""), "");
    }

    #[test]
    fn test_tokenize() {
        let processor = TextProcessor::new();
        let tokens = processor.tokenize("Senior Rust Engineer");
        assert_eq!(tokens, vec!["senior", "rust", "engineer"]);
    }

    #[test]
    fn test_word_frequencies_skips_short_words() {
        let processor = TextProcessor::new();
        let freq = processor.word_frequencies("the cloud cloud cloud of ai");
        assert_eq!(freq.get("cloud"), Some(&3));
        assert_eq!(freq.get("the"), None);
        assert_eq!(freq.get("ai"), None);
    }

    #[test]
    fn test_contains_word_boundaries() {
        assert!(contains_word("knows java and sql", "java"));
        assert!(!contains_word("knows javascript", "java"));
        assert!(contains_word("c++ developer", "c++"));
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn test_section_slice_bounded_by_next_heading() {
        let text = "SKILLS\nRust, Python\n\nEXPERIENCE\nEngineer at Corp";
        let section = section_slice(text, &["skills"], &["experience"], 500).unwrap();
        assert!(section.contains("Rust, Python"));
        assert!(!section.contains("Engineer"));
    }

    #[test]
    fn test_section_slice_window_fallback() {
        let text = "SKILLS\nRust, Python, Docker";
        let section = section_slice(text, &["skills"], &["experience"], 12).unwrap();
        assert_eq!(section.len(), 12);
    }

    #[test]
    fn test_section_slice_missing() {
        assert!(section_slice("no headings here", &["skills"], &[], 500).is_none());
    }

    #[test]
    fn test_heading_must_start_line() {
        // "experience" mid-sentence must not terminate the section.
        let text = "SKILLS\nHands-on experience with Rust and Python\n\nEDUCATION\nMIT";
        let section = section_slice(text, &["skills"], &["education"], 500).unwrap();
        assert!(section.contains("Rust and Python"));
        assert!(!section.contains("MIT"));
    }
}
