//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_list, escape_markdown_table, escape_md_opt};
use super::{fmt_score, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::catalog;
use crate::quality::{QualityReport, Weighting, ALL_CLEAR_MESSAGE};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_report(
        &self,
        report: &QualityReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        let title = config.title.as_deref().unwrap_or("Software Quality Report");
        writeln!(md, "# {}\n", escape_markdown_inline(title))?;

        if let Some(name) = &report.scenario.name {
            writeln!(md, "**Scenario:** {}", escape_markdown_inline(name))?;
        }
        if let Some(description) = &report.scenario.description {
            writeln!(md, "**Description:** {}", escape_markdown_inline(description))?;
        }
        if let Some(path) = &config.metadata.input_path {
            writeln!(md, "**Input:** `{}`", path.replace('`', "'"))?;
        }
        writeln!(
            md,
            "**Scoring engine:** {}  ",
            escape_markdown_inline(&report.scoring_engine_version)
        )?;
        writeln!(md, "\n---\n")?;

        // Overall
        writeln!(md, "## Overall Quality\n")?;
        writeln!(
            md,
            "**Score:** {}/100 ({})\n",
            fmt_score(report.overall_score),
            report.interpretation.label
        )?;
        match report.weighting {
            Weighting::Exact => {}
            Weighting::Renormalized { total_weight } => writeln!(
                md,
                "> Weights total {total_weight:.1}% instead of 100%; the weighted sum was rescaled.\n"
            )?,
            Weighting::Unweighted => {
                writeln!(md, "> No positive weights were given; the overall score is 0.\n")?;
            }
        }

        // Characteristics
        writeln!(md, "## Characteristic Scores\n")?;
        writeln!(md, "| Characteristic | Score | Weight | Contribution | Assessment |")?;
        writeln!(md, "|----------------|-------|--------|--------------|------------|")?;
        for characteristic in &report.breakdown {
            writeln!(
                md,
                "| {} | {} | {}% | {} | {} |",
                escape_markdown_table(&characteristic.name),
                fmt_score(characteristic.score),
                fmt_score(characteristic.weight),
                fmt_score(characteristic.weighted),
                characteristic.interpretation.label
            )?;
        }
        writeln!(md)?;

        // Gaps
        writeln!(md, "## Gap Analysis\n")?;
        if report.gaps.is_empty() {
            writeln!(
                md,
                "No characteristic scores below {}.\n",
                fmt_score(report.gap_threshold)
            )?;
        } else {
            writeln!(md, "Threshold: {}\n", fmt_score(report.gap_threshold))?;
            writeln!(md, "| Characteristic | Score | Gap |")?;
            writeln!(md, "|----------------|-------|-----|")?;
            for gap in &report.gaps {
                writeln!(
                    md,
                    "| {} | {} | {} |",
                    escape_markdown_table(catalog::display_name(&gap.characteristic_id)),
                    fmt_score(gap.score),
                    fmt_score(gap.gap)
                )?;
            }
            writeln!(md)?;
        }

        // Recommendations
        writeln!(md, "## Recommendations\n")?;
        if report.recommendations.is_empty() {
            writeln!(md, "{ALL_CLEAR_MESSAGE}\n")?;
        } else {
            for (i, rec) in report.recommendations.iter().enumerate() {
                writeln!(md, "{}. {}", i + 1, escape_markdown_list(&rec.message))?;
            }
            writeln!(md)?;
        }

        if config.show_metrics {
            write_metric_details(&mut md, report)?;
        }

        writeln!(md, "---\n")?;
        writeln!(md, "*Generated by quality-eval {}*", config.metadata.tool_version)?;

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

fn write_metric_details(md: &mut String, report: &QualityReport) -> std::fmt::Result {
    writeln!(md, "## Metric Details\n")?;
    for characteristic in &report.breakdown {
        writeln!(md, "### {}\n", escape_markdown_inline(&characteristic.name))?;
        if characteristic.sub_characteristics.is_empty() {
            writeln!(md, "No metrics defined.\n")?;
            continue;
        }
        writeln!(
            md,
            "| Sub-characteristic | Metric | Code | Value | Unit | Direction | Target | Score |"
        )?;
        writeln!(
            md,
            "|--------------------|--------|------|-------|------|-----------|--------|-------|"
        )?;
        for sub in &characteristic.sub_characteristics {
            for metric in &sub.metrics {
                writeln!(
                    md,
                    "| {} | {} | {} | {} | {} | {} | {} | {} |",
                    escape_markdown_table(&sub.name),
                    escape_markdown_table(&metric.name),
                    escape_md_opt(metric.code.as_deref()),
                    opt_number(metric.value),
                    escape_markdown_table(&metric.unit),
                    metric.direction,
                    opt_number(metric.target),
                    metric.normalized.map_or_else(|| "-".to_string(), fmt_score)
                )?;
            }
        }
        writeln!(md)?;
    }
    Ok(())
}

fn opt_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
