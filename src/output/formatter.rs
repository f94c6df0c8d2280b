//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::output::report::MatchReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and downstream tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_skill_list(&self, skills: &[String]) -> String {
        if skills.is_empty() {
            "(none)".to_string()
        } else {
            skills.join(", ")
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", self.heading("🔍 Comparison Results")));
        out.push_str(&format!(
            "  {} {}\n",
            self.paint("✅ Common Skills:", Color::Green),
            self.format_skill_list(&report.comparison.common_skills)
        ));
        out.push_str(&format!(
            "  {} {}\n",
            self.paint("❌ Missing Skills:", Color::Red),
            self.format_skill_list(&report.comparison.missing_skills)
        ));
        out.push_str(&format!(
            "  {} {:.2}%\n",
            self.paint("📊 Match Percentage:", Color::Cyan),
            report.comparison.match_percentage
        ));

        out.push_str(&format!("\n{}\n", self.heading("📆 Experience")));
        out.push_str(&format!("  Resume: {}\n", report.candidate.experience));
        out.push_str(&format!("  Required: {}\n", report.requirement.experience));

        out.push_str(&format!("\n{}\n", self.heading("🎓 Education")));
        out.push_str(&format!("  Resume: {}\n", report.candidate.education));
        out.push_str(&format!("  Required: {}\n", report.requirement.education));

        out.push_str(&format!("\n{}\n", self.heading("👤 Candidate")));
        out.push_str(&format!("  Name: {}\n", report.candidate.name));
        out.push_str(&format!("  Email: {}\n", report.candidate.email));
        out.push_str(&format!("  Phone: {}\n", report.candidate.phone));

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    fn format_skill_items(skills: &[String]) -> String {
        if skills.is_empty() {
            "- _(none)_\n".to_string()
        } else {
            skills.iter().map(|s| format!("- {}\n", s)).collect()
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Match Report\n\n");
        out.push_str(&format!(
            "Generated {} by {} for `{}` vs `{}`\n\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.model,
            report.metadata.resume_source,
            report.metadata.job_source
        ));

        out.push_str(&format!(
            "## Match Percentage: {:.2}%\n\n",
            report.comparison.match_percentage
        ));

        out.push_str("## Common Skills\n\n");
        out.push_str(&Self::format_skill_items(&report.comparison.common_skills));

        out.push_str("\n## Missing Skills\n\n");
        out.push_str(&Self::format_skill_items(&report.comparison.missing_skills));

        out.push_str("\n## Experience\n\n");
        out.push_str(&format!("| | |\n|---|---|\n| Resume | {} |\n| Required | {} |\n", report.candidate.experience, report.requirement.experience));

        out.push_str("\n## Education\n\n");
        out.push_str(&format!("| | |\n|---|---|\n| Resume | {} |\n| Required | {} |\n", report.candidate.education, report.requirement.education));

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn format_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_report(
        &self,
        report: &MatchReport,
        format: &OutputFormat,
        path: &Path,
    ) -> Result<()> {
        let content = self.format_report(report, format)?;
        std::fs::write(path, content).map_err(|e| {
            ResumeMatcherError::OutputFormatting(format!(
                "Failed to write report to '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::profile::{CandidateProfile, RequirementProfile};
    use crate::matching::{compare, normalize_skills};
    use crate::output::report::MatchReport;

    fn sample_report() -> MatchReport {
        let candidate = CandidateProfile {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1-555-0100".to_string(),
            skills: vec!["React".to_string(), "Node.js".to_string()],
            experience: "2 years".to_string(),
            education: "MCA (2022)".to_string(),
        };
        let requirement = RequirementProfile {
            skills: vec!["react".to_string(), "Express".to_string()],
            experience: "1.5 years".to_string(),
            education: "B.Tech or MCA".to_string(),
        };
        let comparison = compare(
            &normalize_skills(&candidate.skills),
            &normalize_skills(&requirement.skills),
        );
        MatchReport::new(
            candidate,
            requirement,
            comparison,
            "resume.pdf".to_string(),
            "job.txt".to_string(),
            "gemini-1.5-flash".to_string(),
        )
    }

    #[test]
    fn test_console_formatter_includes_all_sections() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("Comparison Results"));
        assert!(output.contains("react"));
        assert!(output.contains("express"));
        assert!(output.contains("50.00%"));
        assert!(output.contains("2 years"));
        assert!(output.contains("B.Tech or MCA"));
        assert!(output.contains("jane@example.com"));
    }

    #[test]
    fn test_console_formatter_empty_lists() {
        let mut report = sample_report();
        report.comparison.common_skills.clear();
        report.comparison.missing_skills.clear();

        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_report(&report).unwrap();
        assert!(output.contains("(none)"));
    }

    #[test]
    fn test_json_formatter_round_trips() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["comparison"]["match_percentage"], 50.0);
        assert_eq!(value["candidate"]["name"], "Jane Doe");
    }

    #[test]
    fn test_markdown_formatter_structure() {
        let output = MarkdownFormatter.format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# Resume Match Report"));
        assert!(output.contains("## Match Percentage: 50.00%"));
        assert!(output.contains("## Common Skills"));
        assert!(output.contains("- react"));
        assert!(output.contains("## Missing Skills"));
        assert!(output.contains("- express"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false, true);
        let report = sample_report();

        assert!(generator
            .format_report(&report, &OutputFormat::Console)
            .unwrap()
            .contains("Comparison Results"));
        assert!(generator
            .format_report(&report, &OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
        assert!(generator
            .format_report(&report, &OutputFormat::Markdown)
            .unwrap()
            .starts_with('#'));
    }
}
