// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable rendering of exports

use super::{LocationExport, TableExport};
use colored::*;
use std::fmt::Write;

/// Renders exports as aligned text; colour is only used for terminals.
pub struct TableFormatter {
    color: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn locations(&self, export: &LocationExport) -> String {
        let query = &export.query;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            self.heading(&format!(
                "{} locations: version {} format {}{} ({})",
                export.plan.catalog,
                query.version,
                query.format,
                if query.egg { " egg" } else { "" },
                query.lang
            ))
        );
        let _ = writeln!(out, "{}", self.dim(&format!("rule: {:?}", export.plan.rule)));
        let width = export
            .entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        for entry in &export.entries {
            let _ = writeln!(out, "  {:>width$}  {}", entry.id, entry.text, width = width);
        }
        out
    }

    pub fn table(&self, export: &TableExport) -> String {
        let mut out = String::new();
        let mut title = format!("{} ({})", export.table, export.lang);
        if export.fallback {
            title.push_str(" [default language]");
        }
        let _ = writeln!(out, "{}", self.heading(&title));
        let width = export.entries.len().saturating_sub(1).to_string().len();
        for (index, text) in export.entries.iter().enumerate() {
            let _ = writeln!(out, "  {:>width$}  {}", index, text, width = width);
        }
        out
    }

    pub fn print_locations(&self, export: &LocationExport) {
        print!("{}", self.locations(export));
    }

    pub fn print_table(&self, export: &TableExport) {
        print!("{}", self.table(export));
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote `value` as a Nickel string literal.
pub fn nickel_escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '%' => escaped.push_str("\\%"),
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}
