//! Console and JSON formatters for analysis and match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::{MatchReport, ResumeAnalysis};
use colored::Colorize;
use std::fmt::Write as _;

/// Formats reports for one output target.
pub trait OutputFormatter {
    fn format_analysis(&self, analysis: &ResumeAnalysis) -> Result<String>;
    fn format_matches(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human-oriented console output with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self {
            use_colors,
            detailed,
        }
    }

    fn score_label(&self, score: u32) -> String {
        let text = format!("{}/100", score);
        if !self.use_colors {
            return text;
        }
        if score >= 70 {
            text.green().bold().to_string()
        } else if score >= 40 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_analysis(&self, analysis: &ResumeAnalysis) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "{}", "ATS Compatibility Report".bold()).ok();
        writeln!(out, "Overall score: {}", self.score_label(analysis.ats.score)).ok();
        writeln!(out).ok();

        if let Some(breakdown) = &analysis.ats.breakdown {
            writeln!(out, "{}", "Breakdown".bold()).ok();
            for (name, sub) in [
                ("Format", &breakdown.format),
                ("Keywords", &breakdown.keywords),
                ("Sections", &breakdown.sections),
                ("Contact info", &breakdown.contact_info),
                ("Experience", &breakdown.experience),
            ] {
                writeln!(out, "  {:<13} {:>5.1} / {:>4.1}", name, sub.score, sub.max_possible)
                    .ok();
            }
            writeln!(out).ok();
        }

        writeln!(out, "{}", "Feedback".bold()).ok();
        for item in &analysis.ats.feedback {
            writeln!(out, "  - {}", item).ok();
        }

        if self.detailed {
            let document = &analysis.document;
            writeln!(out).ok();
            writeln!(out, "{}", "Extracted profile".bold()).ok();
            if let Some(name) = &document.contact.name {
                writeln!(out, "  Name: {}", name).ok();
            }
            if let Some(email) = &document.contact.email {
                writeln!(out, "  Email: {}", email).ok();
            }
            if !document.skills.is_empty() {
                writeln!(out, "  Skills: {}", document.skills.join(", ")).ok();
            }
            writeln!(out, "  Experience entries: {}", document.experience.len()).ok();
            writeln!(out, "  Education entries: {}", document.education.len()).ok();
        }

        Ok(out)
    }

    fn format_matches(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "{}", "Job Matches".bold()).ok();
        if report.matches.is_empty() {
            writeln!(out, "  No matching jobs found.").ok();
        }
        for matched in &report.matches {
            let marker = if matched.is_recommended { "*" } else { " " };
            writeln!(
                out,
                "{} {} at {} ({})  {}",
                marker,
                matched.job.position,
                matched.job.company,
                matched.job.location,
                self.score_label(matched.match_score)
            )
            .ok();
        }

        writeln!(out).ok();
        writeln!(out, "{}", "Strengths".bold()).ok();
        for strength in &report.strengths {
            writeln!(out, "  + {}", strength).ok();
        }

        writeln!(out).ok();
        writeln!(out, "{}", "Areas to improve".bold()).ok();
        for improvement in &report.improvements {
            writeln!(out, "  - {}", improvement).ok();
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// Structured JSON output for downstream tooling.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, analysis: &ResumeAnalysis) -> Result<String> {
        self.serialize(analysis)
    }

    fn format_matches(&self, report: &MatchReport) -> Result<String> {
        self.serialize(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
