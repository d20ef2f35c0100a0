// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of exports to the supported output formats

use super::formatter::{nickel_escape_string, TableFormatter};
use super::{LocationExport, TableExport};
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Nickel,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "nickel" | "ncl" => Some(OutputFormat::Nickel),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Nickel => "ncl",
        }
    }

    pub fn locations(&self, export: &LocationExport) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(TableFormatter::plain().locations(export)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(export)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(export)?),
            OutputFormat::Nickel => Ok(locations_as_nickel(export)),
        }
    }

    pub fn table(&self, export: &TableExport) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(TableFormatter::plain().table(export)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(export)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(export)?),
            OutputFormat::Nickel => Ok(table_as_nickel(export)),
        }
    }
}

fn locations_as_nickel(export: &LocationExport) -> String {
    let mut lines = Vec::new();
    lines.push("let locations = {".to_string());
    lines.push(format!("  schema = {};", nickel_escape_string(export.schema)));
    lines.push(format!(
        "  generated_at = {};",
        nickel_escape_string(&export.generated_at)
    ));
    lines.push(format!(
        "  version = {};",
        nickel_escape_string(&export.query.version.to_string())
    ));
    lines.push(format!("  format = {};", export.query.format));
    lines.push(format!("  egg = {};", export.query.egg));
    lines.push(format!("  lang = {};", nickel_escape_string(export.query.lang.code())));
    lines.push(format!(
        "  catalog = {};",
        nickel_escape_string(&export.plan.catalog.to_string())
    ));
    let entries: Vec<String> = export
        .entries
        .iter()
        .map(|entry| format!("    {{ id = {}, text = {} }}", entry.id, nickel_escape_string(&entry.text)))
        .collect();
    lines.push(format!("  entries = [\n{}\n  ];", entries.join(",\n")));
    lines.push("}".to_string());
    lines.push("in locations".to_string());
    lines.join("\n")
}

fn table_as_nickel(export: &TableExport) -> String {
    let entries: Vec<String> = export
        .entries
        .iter()
        .map(|text| format!("    {}", nickel_escape_string(text)))
        .collect();
    [
        "let table = {".to_string(),
        format!("  schema = {};", nickel_escape_string(export.schema)),
        format!("  table = {};", nickel_escape_string(&export.table)),
        format!("  lang = {};", nickel_escape_string(export.lang.code())),
        format!("  fallback = {};", export.fallback),
        format!("  entries = [\n{}\n  ];", entries.join(",\n")),
        "}".to_string(),
        "in table".to_string(),
    ]
    .join("\n")
}
