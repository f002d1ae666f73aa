//! Catalog command handler.
//!
//! Lists the quality characteristics, their sub-characteristics and the
//! standard measures suggested for each.

use crate::model::catalog::{self, Characteristic, StandardMetric, SubCharacteristic};
use crate::pipeline::{write_output, OutputTarget};
use anyhow::{bail, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CatalogEntry {
    #[serde(flatten)]
    characteristic: &'static Characteristic,
    standard_metrics: Vec<SubCharacteristicEntry>,
}

#[derive(Serialize)]
struct SubCharacteristicEntry {
    sub_characteristic: &'static str,
    metrics: &'static [StandardMetric],
}

/// Run the catalog command
pub fn run_catalog(characteristic: Option<&str>, json: bool) -> Result<()> {
    let selected: Vec<&'static Characteristic> = match characteristic {
        Some(id) => match catalog::characteristic(id) {
            Some(c) => vec![c],
            None => {
                let ids: Vec<&str> = catalog::CHARACTERISTICS.iter().map(|c| c.id).collect();
                bail!("Unknown characteristic: {id}. Valid options: {}", ids.join(", "));
            }
        },
        None => catalog::CHARACTERISTICS.iter().collect(),
    };

    let content = if json {
        let entries: Vec<CatalogEntry> = selected
            .iter()
            .map(|&c| CatalogEntry {
                characteristic: c,
                standard_metrics: c
                    .sub_characteristics
                    .iter()
                    .map(|sub| SubCharacteristicEntry {
                        sub_characteristic: sub.id,
                        metrics: catalog::standard_metrics(sub.id),
                    })
                    .collect(),
            })
            .collect();
        serde_json::to_string_pretty(&entries)
            .map_err(|e| anyhow::anyhow!("Failed to serialize catalog: {e}"))?
    } else {
        format_catalog_text(&selected, characteristic.is_some())
    };

    write_output(&content, &OutputTarget::Stdout, true)
}

fn format_catalog_text(characteristics: &[&Characteristic], with_metrics: bool) -> String {
    let mut lines = Vec::new();
    for characteristic in characteristics {
        lines.push(format!("{} ({})", characteristic.name, characteristic.id));
        for sub in characteristic.sub_characteristics {
            lines.push(format!("  {} ({})", sub.name, sub.id));
            if with_metrics {
                lines.extend(format_metrics(sub));
            }
        }
        lines.push(String::new());
    }
    lines.join("\n").trim_end().to_string()
}

fn format_metrics(sub: &SubCharacteristic) -> Vec<String> {
    catalog::standard_metrics(sub.id)
        .iter()
        .map(|m| {
            let target = m
                .target
                .map_or_else(String::new, |t| format!(", target {t}"));
            format!(
                "    {:<8} {} [{}..{} {}, {}{}]",
                m.code, m.name, m.min, m.max, m.unit, m.direction, target
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lists_all_characteristics() {
        let all: Vec<&Characteristic> = catalog::CHARACTERISTICS.iter().collect();
        let text = format_catalog_text(&all, false);
        assert!(text.starts_with("Functional Suitability (functionalSuitability)"));
        assert!(text.contains("Security (security)"));
        assert!(!text.contains("RMa-1-G"));
    }

    #[test]
    fn test_text_with_metrics() {
        let reliability = catalog::characteristic("reliability").unwrap();
        let text = format_catalog_text(&[reliability], true);
        assert!(text.contains("RMa-1-G"));
    }

    #[test]
    fn test_unknown_characteristic_is_error() {
        let err = run_catalog(Some("speed"), false).unwrap_err();
        assert!(err.to_string().contains("Unknown characteristic: speed"));
    }
}
