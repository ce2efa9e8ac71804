//! Contact information extraction from raw resume text

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Contact details pulled out of a resume. Every field is optional; a
/// missing field is reported downstream as feedback, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
}

impl ContactInfo {
    /// True when all five fields were found.
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.email.is_some()
            && self.phone.is_some()
            && self.location.is_some()
            && self.linkedin.is_some()
    }
}

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    location_regex: Regex,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
                .expect("Invalid phone regex");

        let linkedin_regex =
            Regex::new(r"linkedin\.com/in/[a-zA-Z0-9_-]+").expect("Invalid LinkedIn regex");

        // "City, ST" with an optional ZIP; the state code is case-sensitive.
        let location_regex = Regex::new(r"[A-Z][a-zA-Z ]+,\s*[A-Z]{2}\b(?:\s*\d{5})?")
            .expect("Invalid location regex");

        Self {
            email_regex,
            phone_regex,
            linkedin_regex,
            location_regex,
        }
    }

    /// Extract contact fields using first-match semantics per pattern.
    pub fn extract(&self, text: &str) -> ContactInfo {
        ContactInfo {
            name: self.extract_name(text),
            email: self.first_match(&self.email_regex, text),
            phone: self.first_match(&self.phone_regex, text),
            location: self.first_match(&self.location_regex, text),
            linkedin: self.first_match(&self.linkedin_regex, text),
        }
    }

    pub fn has_email(&self, text: &str) -> bool {
        self.email_regex.is_match(text)
    }

    pub fn has_phone(&self, text: &str) -> bool {
        self.phone_regex.is_match(text)
    }

    pub fn has_linkedin(&self, text: &str) -> bool {
        self.linkedin_regex.is_match(text)
    }

    pub fn has_location(&self, text: &str) -> bool {
        self.location_regex.is_match(text)
    }

    fn first_match(&self, regex: &Regex, text: &str) -> Option<String> {
        regex.find(text).map(|m| m.as_str().trim().to_string())
    }

    /// The name is taken as the first short non-empty line that looks like
    /// neither an address nor a URL.
    fn extract_name(&self, text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .find(|line| {
                !line.is_empty()
                    && line.len() < 40
                    && !line.contains('@')
                    && !line.contains("http")
            })
            .map(|line| line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_contact_block() {
        let extractor = ContactExtractor::new();
        let text = "John Doe\njohn@x.com\n555-123-4567\nlinkedin.com/in/johndoe\nAustin, TX";
        let info = extractor.extract(text);

        assert_eq!(info.name.as_deref(), Some("John Doe"));
        assert_eq!(info.email.as_deref(), Some("john@x.com"));
        assert_eq!(info.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(info.linkedin.as_deref(), Some("linkedin.com/in/johndoe"));
        assert_eq!(info.location.as_deref(), Some("Austin, TX"));
        assert!(info.is_complete());
    }

    #[test]
    fn test_phone_variants() {
        let extractor = ContactExtractor::new();
        for text in [
            "(555) 123-4567",
            "555.123.4567",
            "+1 555 123 4567",
            "5551234567",
        ] {
            assert!(extractor.has_phone(text), "no phone found in {:?}", text);
        }
    }

    #[test]
    fn test_location_with_zip() {
        let extractor = ContactExtractor::new();
        let info = extractor.extract("123 Main Street, New York, NY 10001");
        assert_eq!(info.location.as_deref(), Some("New York, NY 10001"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let extractor = ContactExtractor::new();
        let info = extractor.extract("just some plain prose without contact details");

        assert!(info.email.is_none());
        assert!(info.phone.is_none());
        assert!(info.linkedin.is_none());
        assert!(info.location.is_none());
        // The only line is over the 40-character name cutoff.
        assert!(info.name.is_none());
    }

    #[test]
    fn test_name_skips_email_and_url_lines() {
        let extractor = ContactExtractor::new();
        let text = "jane@site.com\nhttps://janedoe.dev\nJane Doe\nSoftware Engineer";
        let info = extractor.extract(text);
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_empty_input() {
        let extractor = ContactExtractor::new();
        let info = extractor.extract("");
        assert_eq!(info, ContactInfo::default());
    }
}
