//! Output formatters: console with per-domain gauges, JSON, and markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{CoverageReport, Rating};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering coverage reports
pub trait OutputFormatter {
    fn format_report(&self, report: &CoverageReport) -> Result<String>;
}

/// Console formatter with colors and text gauges standing in for the radar
/// chart
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for downstream tooling
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

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

    fn rating_color(rating: Rating) -> Color {
        match rating {
            Rating::Excellent => Color::Green,
            Rating::Good => Color::Cyan,
            Rating::Fair => Color::Yellow,
            Rating::NeedsWork => Color::Red,
        }
    }

    /// 20-step bar, e.g. `[=========           ]  45%`
    fn gauge(&self, percent: u8, rating: Rating) -> String {
        let filled = (percent as usize) / 5;
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(20 - filled));
        let value = format!("{:>3}%", percent);
        if self.use_colors {
            format!("{} {}", bar, value.color(Self::rating_color(rating)).bold())
        } else {
            format!("{} {}", bar, value)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &CoverageReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.colorize("\n█ RESUME COVERAGE REPORT\n", Color::Blue));
        out.push_str(&format!(
            "Field: {} | Generated: {}\n",
            report.metadata.field,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        if let Some(framework) = &report.metadata.framework {
            out.push_str(&format!("Framework filter: {}\n", framework));
        }

        out.push_str(&format!("\n{}\n", report.summary));
        out.push_str(&format!(
            "Overall: {}% [{}]\n",
            report.overall,
            self.colorize(
                &report.overall_rating.to_string(),
                Self::rating_color(report.overall_rating)
            )
        ));

        out.push_str(&self.colorize("\n▓ Domain Coverage\n", Color::Green));
        for domain in &report.domains {
            out.push_str(&format!(
                "  {} {} ({})\n",
                self.gauge(domain.match_percent, domain.rating),
                domain.name,
                domain.rating
            ));
        }

        if let Some(job) = &report.job {
            out.push_str(&self.colorize("\n▓ Job Description Coverage\n", Color::Green));
            for coverage in &job.domains {
                let rating = Rating::from_percent(coverage.match_percent);
                out.push_str(&format!(
                    "  {} {}\n",
                    self.gauge(coverage.match_percent, rating),
                    coverage.domain
                ));
            }
        }

        if self.detailed {
            out.push_str(&self.colorize("\n▓ Missing Keywords\n", Color::Yellow));
            for domain in &report.domains {
                if domain.missing.is_empty() {
                    continue;
                }
                out.push_str(&format!("  {}:\n", domain.name));
                for keyword in &domain.missing {
                    out.push_str(&format!("    • {}\n", keyword));
                }
            }
        }

        if !report.suggestions.is_empty() {
            out.push_str(&self.colorize("\n▓ Suggestions\n", Color::Cyan));
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, suggestion.text));
            }
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &CoverageReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &CoverageReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Coverage Report\n\n");
        out.push_str(&format!(
            "**Field:** {} | **Generated:** {}\n\n",
            report.metadata.field,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        if let Some(framework) = &report.metadata.framework {
            out.push_str(&format!("**Framework filter:** {}\n\n", framework));
        }
        out.push_str(&format!("{}\n\n", report.summary));
        out.push_str(&format!(
            "**Overall:** {}% ({})\n\n",
            report.overall, report.overall_rating
        ));

        out.push_str("## Domain Coverage\n\n");
        out.push_str("| Domain | Coverage | Rating | Missing |\n");
        out.push_str("| --- | --- | --- | --- |\n");
        for domain in &report.domains {
            out.push_str(&format!(
                "| {} | {}% | {} | {} |\n",
                domain.name,
                domain.match_percent,
                domain.rating,
                domain.missing.join(", ")
            ));
        }

        if let Some(job) = &report.job {
            out.push_str(&format!(
                "\n## Job Description Coverage ({}% overall)\n\n",
                job.overall
            ));
            for coverage in &job.domains {
                out.push_str(&format!(
                    "- {}: {}%\n",
                    coverage.domain, coverage.match_percent
                ));
            }
        }

        if !report.suggestions.is_empty() {
            out.push_str("\n## Suggestions\n\n");
            for suggestion in &report.suggestions {
                out.push_str(&format!("- {}\n", suggestion.text));
            }
        }

        Ok(out)
    }
}

/// Picks a formatter for the requested format and optionally writes the
/// rendered report to a file.
pub struct ReportWriter {
    detailed: bool,
    use_colors: bool,
}

impl ReportWriter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    pub fn render(&self, report: &CoverageReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(self.use_colors, self.detailed).format_report(report)
            }
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }

    /// Render without ANSI colors and write to `path`
    pub fn save(&self, report: &CoverageReport, format: OutputFormat, path: &Path) -> Result<()> {
        let rendered = match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(false, self.detailed).format_report(report)?
            }
            other => self.render(report, other)?,
        };
        std::fs::write(path, rendered)?;
        Ok(())
    }
}
