// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for game-strings

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while building or querying catalogs.
///
/// Table-shape errors mean the static patch or bank definitions are out of
/// sync with the loaded resources; they are not expected at runtime.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("table {table} has {len} entries, slot {index} is required")]
    TableTooShort {
        table: &'static str,
        len: usize,
        index: usize,
    },

    #[error("bank {bank} has no slot {index} for location {id}")]
    MissingBankSlot {
        bank: &'static str,
        index: usize,
        id: u32,
    },

    #[error("invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Handle a table-definition error found during a build.
///
/// Debug builds panic so the mismatch is caught by tests; release builds log
/// the error and let the caller keep the degraded data it already has.
pub fn fatal_or_degrade(context: &str, err: &CatalogError) {
    if cfg!(debug_assertions) {
        panic!("{}: {}", context, err);
    }
    tracing::error!(error = %err, "{}; continuing with unpatched data", context);
}
