//! Output formatters: console, JSON, and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ReportMetadata;
use crate::processing::match_scorer::MatchReport;
use crate::processing::quality::QualityReport;
use colored::{Color, Colorize};

/// Renders match and quality reports in one output format.
pub trait OutputFormatter {
    fn format_match(&self, report: &MatchReport, metadata: &ReportMetadata) -> Result<String>;
    fn format_quality(&self, report: &QualityReport, metadata: &ReportMetadata) -> Result<String>;
}

/// Console formatter with colored, score-banded presentation.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: u32) -> Color {
        match score {
            s if s >= 80 => Color::Green,
            s if s >= 60 => Color::Cyan,
            s if s >= 40 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn keyword_lines(keywords: &[String]) -> String {
        keywords
            .chunks(5)
            .map(|chunk| format!("  - {}", chunk.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_match(&self, report: &MatchReport, _metadata: &ReportMetadata) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "=".repeat(40)));
        out.push_str("        RESUME MATCH REPORT\n");
        out.push_str(&format!("{}\n\n", "=".repeat(40)));

        let score_line = format!("Match score: {}%", report.score);
        out.push_str(&self.colorize(&score_line, Self::score_color(report.score)));
        out.push('\n');

        out.push_str(&format!(
            "\n{}\n",
            self.colorize(
                &format!("{} keywords found in your resume:", report.found.len()),
                Color::Green
            )
        ));
        out.push_str(&Self::keyword_lines(&report.found));

        out.push_str(&format!(
            "\n\n{}\n",
            self.colorize(
                &format!("{} keywords missing from your resume:", report.missing.len()),
                Color::Red
            )
        ));
        out.push_str(&Self::keyword_lines(&report.missing));
        out.push('\n');

        if self.detailed {
            out.push_str(&format!(
                "\nAction verbs used ({}): {}\n",
                report.found_action_verbs.len(),
                report.found_action_verbs.join(", ")
            ));
        }

        Ok(out)
    }

    fn format_quality(&self, report: &QualityReport, _metadata: &ReportMetadata) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "=".repeat(40)));
        out.push_str("        RESUME QUALITY REPORT\n");
        out.push_str(&format!("{}\n\n", "=".repeat(40)));

        let total_line = format!("Total score: {}/100", report.total_score);
        out.push_str(&self.colorize(&total_line, Self::score_color(report.total_score)));
        out.push_str("\n\n");

        for (name, score) in &report.details {
            out.push_str(&format!("{:<28} {:>3}\n", name, score));
            if self.detailed {
                if let Some(feedback) = report.feedback.get(name) {
                    out.push_str(&format!("    {}\n", feedback));
                }
            }
        }

        if !report.found_action_verbs.is_empty() {
            out.push_str(&format!(
                "\nAction verbs used: {}\n",
                report.found_action_verbs.join(", ")
            ));
        }

        Ok(out)
    }
}

/// JSON formatter emitting the report's serialized contract shape.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_match(&self, report: &MatchReport, _metadata: &ReportMetadata) -> Result<String> {
        self.serialize(report)
    }

    fn format_quality(&self, report: &QualityReport, _metadata: &ReportMetadata) -> Result<String> {
        self.serialize(report)
    }
}

/// Markdown formatter for shareable reports.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn header(&self, title: &str, metadata: &ReportMetadata) -> String {
        let mut out = format!("# {}\n\n", title);
        out.push_str(&format!(
            "*Generated {} by resume-scorer v{}*\n\n",
            metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            metadata.version
        ));
        out.push_str(&format!("- Resume: `{}`\n", metadata.resume_file));
        if let Some(job) = &metadata.job_file {
            out.push_str(&format!("- Job description: `{}`\n", job));
        }
        out.push('\n');
        out
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_match(&self, report: &MatchReport, metadata: &ReportMetadata) -> Result<String> {
        let mut out = self.header("Resume Match Report", metadata);
        out.push_str(&format!("**Match score: {}%**\n\n", report.score));

        out.push_str(&format!("## Found keywords ({})\n\n", report.found.len()));
        for keyword in &report.found {
            out.push_str(&format!("- {}\n", keyword));
        }

        out.push_str(&format!("\n## Missing keywords ({})\n\n", report.missing.len()));
        for keyword in &report.missing {
            out.push_str(&format!("- {}\n", keyword));
        }

        out.push_str(&format!(
            "\n## Action verbs ({})\n\n{}\n",
            report.found_action_verbs.len(),
            report.found_action_verbs.join(", ")
        ));
        Ok(out)
    }

    fn format_quality(&self, report: &QualityReport, metadata: &ReportMetadata) -> Result<String> {
        let mut out = self.header("Resume Quality Report", metadata);
        out.push_str(&format!("**Total score: {}/100**\n\n", report.total_score));

        out.push_str("| Dimension | Score | Feedback |\n|---|---|---|\n");
        for (name, score) in &report.details {
            let feedback = report.feedback.get(name).map(String::as_str).unwrap_or("");
            out.push_str(&format!("| {} | {} | {} |\n", name, score, feedback));
        }

        if !report.found_action_verbs.is_empty() {
            out.push_str(&format!(
                "\n## Action verbs ({})\n\n{}\n",
                report.found_action_verbs.len(),
                report.found_action_verbs.join(", ")
            ));
        }
        Ok(out)
    }
}

/// Dispatches to the formatter for a configured output format.
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn formatter(
        format: &OutputFormat,
        use_colors: bool,
        detailed: bool,
    ) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
            OutputFormat::Json => Box::new(JsonFormatter::new(true)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn match_report() -> MatchReport {
        MatchReport {
            found: vec!["Docker".to_string()],
            missing: vec!["Kubernetes".to_string()],
            score: 75,
            found_action_verbs: vec!["built".to_string()],
        }
    }

    fn quality_report() -> QualityReport {
        let mut details = BTreeMap::new();
        let mut feedback = BTreeMap::new();
        details.insert("spelling".to_string(), 15);
        feedback.insert("spelling".to_string(), "Excellent! No spelling errors were found.".to_string());
        QualityReport {
            total_score: 15,
            details,
            feedback,
            found_action_verbs: vec![],
        }
    }

    fn metadata() -> ReportMetadata {
        ReportMetadata::new("resume.txt", Some("job.txt"))
    }

    #[test]
    fn test_console_format_match() {
        let formatter = ConsoleFormatter::new(false, true);
        let out = formatter.format_match(&match_report(), &metadata()).unwrap();

        assert!(out.contains("75%"));
        assert!(out.contains("Docker"));
        assert!(out.contains("Kubernetes"));
        assert!(out.contains("built"));
    }

    #[test]
    fn test_json_format_matches_contract() {
        let formatter = JsonFormatter::new(false);
        let out = formatter.format_match(&match_report(), &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["score"], 75);
        assert_eq!(value["found"][0], "Docker");
        assert_eq!(value["missing"][0], "Kubernetes");
        assert_eq!(value["found_action_verbs"][0], "built");
    }

    #[test]
    fn test_json_format_quality_contract() {
        let formatter = JsonFormatter::new(false);
        let out = formatter.format_quality(&quality_report(), &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["total_score"], 15);
        assert_eq!(value["details"]["spelling"], 15);
        assert!(value["feedback"]["spelling"].is_string());
    }

    #[test]
    fn test_markdown_format_quality() {
        let out = MarkdownFormatter
            .format_quality(&quality_report(), &metadata())
            .unwrap();

        assert!(out.starts_with("# Resume Quality Report"));
        assert!(out.contains("| spelling | 15 |"));
        assert!(out.contains("`resume.txt`"));
    }
}
