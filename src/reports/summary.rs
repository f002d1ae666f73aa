//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{fmt_score, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::quality::{QualityLevel, QualityReport, Weighting, ALL_CLEAR_MESSAGE};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn level_color(level: QualityLevel) -> &'static str {
    match level {
        QualityLevel::Strong => "green",
        QualityLevel::Moderate => "yellow",
        QualityLevel::Weak => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(
        &self,
        report: &QualityReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        let title = config.title.as_deref().unwrap_or("Software Quality Report");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        if let Some(name) = &report.scenario.name {
            lines.push(format!("{}  {}", self.color("Scenario:", "cyan"), name));
        }
        if let Some(path) = &config.metadata.input_path {
            lines.push(format!("{}     {}", self.color("Input:", "cyan"), path));
        }
        lines.push(String::new());

        // Overall score
        let overall_color = level_color(report.interpretation.level);
        lines.push(format!(
            "{} {} ({})",
            self.color("Overall Score:", "bold"),
            self.color(
                &format!("{}/100", fmt_score(report.overall_score)),
                overall_color
            ),
            report.interpretation.label
        ));
        match report.weighting {
            Weighting::Exact => {}
            Weighting::Renormalized { total_weight } => lines.push(self.color(
                &format!("  weights total {total_weight:.1}%, rescaled to 100"),
                "dim",
            )),
            Weighting::Unweighted => {
                lines.push(self.color("  no positive weights given", "dim"));
            }
        }
        lines.push(String::new());

        // Characteristic scores
        lines.push(self.color("Characteristic Scores:", "bold"));
        let width = report
            .breakdown
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0);
        for characteristic in &report.breakdown {
            let score = format!("{:>5}/100", fmt_score(characteristic.score));
            lines.push(format!(
                "  {:<width$}  {}  {:>5}%",
                characteristic.name,
                self.color(&score, level_color(characteristic.interpretation.level)),
                fmt_score(characteristic.weight),
            ));
            if config.show_metrics {
                for sub in &characteristic.sub_characteristics {
                    let sub_score = sub.score.map_or_else(|| "N/A".to_string(), fmt_score);
                    lines.push(format!("    {}: {}", sub.name, sub_score));
                    for metric in &sub.metrics {
                        let value = metric
                            .value
                            .map_or_else(|| "-".to_string(), |v| format!("{v} {}", metric.unit));
                        let normalized = metric
                            .normalized
                            .map_or_else(|| "N/A".to_string(), fmt_score);
                        lines.push(self.color(
                            &format!("      {} = {value} -> {normalized}", metric.name),
                            "dim",
                        ));
                    }
                }
            }
        }
        lines.push(String::new());

        // Gaps
        if report.gaps.is_empty() {
            lines.push(format!(
                "{} {}",
                self.color("✓", "green"),
                ALL_CLEAR_MESSAGE
            ));
        } else {
            lines.push(self.color(
                &format!(
                    "Gaps (threshold {}):",
                    fmt_score(report.gap_threshold)
                ),
                "bold",
            ));
            for (gap, rec) in report.gaps.iter().zip(&report.recommendations) {
                lines.push(format!(
                    "  {} {}",
                    self.color(&format!("-{}", fmt_score(gap.gap)), "red"),
                    rec.message
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
