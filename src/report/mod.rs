// SPDX-License-Identifier: PMPL-1.0-or-later

//! Export of resolved location lists and sanitized tables

pub mod formatter;
pub mod output;

use crate::i18n::Lang;
use crate::locations::Plan;
use crate::types::{GameVersion, LocationEntry};
use serde::Serialize;

pub use formatter::{nickel_escape_string, TableFormatter};
pub use output::OutputFormat;

pub const LOCATIONS_SCHEMA: &str = "game-strings.locations.v1";
pub const TABLE_SCHEMA: &str = "game-strings.table.v1";

/// The query a location list answers.
#[derive(Debug, Clone, Serialize)]
pub struct LocationQuery {
    pub version: GameVersion,
    pub format: u8,
    pub egg: bool,
    pub lang: Lang,
}

/// A resolved location list with enough context to be reproduced.
#[derive(Debug, Clone, Serialize)]
pub struct LocationExport {
    pub schema: &'static str,
    pub tool_version: &'static str,
    pub generated_at: String,
    pub query: LocationQuery,
    pub plan: Plan,
    pub entries: Vec<LocationEntry>,
}

impl LocationExport {
    pub fn new(query: LocationQuery, plan: Plan, entries: Vec<LocationEntry>) -> Self {
        Self {
            schema: LOCATIONS_SCHEMA,
            tool_version: env!("CARGO_PKG_VERSION"),
            generated_at: chrono::Utc::now().to_rfc3339(),
            query,
            plan,
            entries,
        }
    }
}

/// One sanitized table, index preserved.
#[derive(Debug, Clone, Serialize)]
pub struct TableExport {
    pub schema: &'static str,
    pub tool_version: &'static str,
    pub generated_at: String,
    pub table: String,
    pub lang: Lang,
    pub fallback: bool,
    pub entries: Vec<String>,
}

impl TableExport {
    pub fn new(table: &str, lang: Lang, fallback: bool, entries: Vec<String>) -> Self {
        Self {
            schema: TABLE_SCHEMA,
            tool_version: env!("CARGO_PKG_VERSION"),
            generated_at: chrono::Utc::now().to_rfc3339(),
            table: table.to_string(),
            lang,
            fallback,
            entries,
        }
    }
}
