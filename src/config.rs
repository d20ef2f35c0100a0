// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog configuration file (YAML or JSON).

use crate::error::CatalogError;
use crate::i18n::Lang;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory holding `text_<key>_<lang>.txt` and CSV resources.
    pub resources: PathBuf,
    /// Language code; unknown codes fall back to English.
    pub language: String,
    /// Name shown for the Gen 3 e-Reader berry slot.
    pub ereader_berry: Option<String>,
    /// `tracing` filter directive, e.g. `game_strings=debug`.
    pub log_filter: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            resources: PathBuf::from("resources/text"),
            language: Lang::DEFAULT.code().to_string(),
            ereader_berry: None,
            log_filter: None,
        }
    }
}

impl CatalogConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            _ => {
                return Err(CatalogError::Config {
                    path: path.to_path_buf(),
                    reason: "config must be json/yaml/yml".to_string(),
                }
                .into())
            }
        };
        tracing::debug!(path = %path.display(), "loaded catalog config");
        Ok(config)
    }

    /// Load `path` if given, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn lang(&self) -> Lang {
        Lang::parse_or_default(&self.language)
    }
}
