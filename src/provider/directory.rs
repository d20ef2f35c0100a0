// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filesystem provider reading `text_<key>_<lang>.txt` resources

use super::StringTableProvider;
use crate::i18n::Lang;
use anyhow::{anyhow, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self, key: &str, lang: Lang) -> PathBuf {
        self.root.join(format!("text_{}_{}.txt", key, lang.code()))
    }

    /// Resource files present under the root, grouped by table key.
    pub fn inventory(&self) -> Result<Inventory> {
        if !self.root.is_dir() {
            return Err(anyhow!(
                "resource directory not found: {}",
                self.root.display()
            ));
        }
        let pattern = Regex::new(r"^text_(.+)_([a-z0-9]+)\.txt$")?;
        let mut inventory = Inventory::default();

        for entry in WalkDir::new(&self.root)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
        {
            let name = entry.file_name().to_string_lossy().to_string();
            let parsed = pattern.captures(&name).and_then(|caps| {
                let lang = Lang::from_code(&caps[2])?;
                Some((caps[1].to_string(), lang))
            });
            match parsed {
                Some((key, lang)) => {
                    inventory.tables.entry(key).or_default().insert(lang);
                }
                None => inventory.other.push(name),
            }
        }
        inventory.other.sort();
        Ok(inventory)
    }
}

impl StringTableProvider for DirectoryProvider {
    fn table(&self, key: &str, lang: Lang) -> Option<Vec<String>> {
        read_lines(&self.table_path(key, lang)).filter(|lines| !lines.is_empty())
    }

    fn resource(&self, name: &str) -> Option<Vec<String>> {
        read_lines(&self.root.join(format!("{}.txt", name)))
    }
}

/// Table keys found on disk with the languages each one is available in.
#[derive(Debug, Default, Serialize)]
pub struct Inventory {
    pub tables: BTreeMap<String, BTreeSet<Lang>>,
    pub other: Vec<String>,
}

impl Inventory {
    /// Keys for which `lang` has its own file.
    pub fn keys_for(&self, lang: Lang) -> Vec<&str> {
        self.tables
            .iter()
            .filter(|(_, langs)| langs.contains(&lang))
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

fn read_lines(path: &Path) -> Option<Vec<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "unreadable text resource");
            return None;
        }
    };
    // decode() strips a UTF-8 byte order mark when present.
    let (text, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        tracing::warn!(path = %path.display(), "text resource contains invalid UTF-8");
    }
    Some(
        text.lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_tables_and_strips_bom() {
        let dir = tempdir().unwrap();
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("None\r\nMaster Ball\r\n".as_bytes());
        fs::write(dir.path().join("text_items_en.txt"), bytes).unwrap();

        let provider = DirectoryProvider::new(dir.path());
        let lines = provider.table("items", Lang::En).unwrap();
        assert_eq!(lines, vec!["None", "Master Ball"]);
        assert_eq!(provider.table("items", Lang::Fr), None);
    }

    #[test]
    fn empty_file_counts_as_missing_table() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("text_types_de.txt"), "").unwrap();
        let provider = DirectoryProvider::new(dir.path());
        assert_eq!(provider.table("types", Lang::De), None);
    }

    #[test]
    fn inventory_groups_by_key() {
        let dir = tempdir().unwrap();
        for name in [
            "text_hgss_00000_en.txt",
            "text_hgss_00000_zh2.txt",
            "text_species_ja.txt",
            "countries.txt",
        ] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let inventory = DirectoryProvider::new(dir.path()).inventory().unwrap();
        let hgss = &inventory.tables["hgss_00000"];
        assert!(hgss.contains(&Lang::En) && hgss.contains(&Lang::Zh2));
        assert_eq!(inventory.keys_for(Lang::Ja), vec!["species"]);
        assert_eq!(inventory.other, vec!["countries.txt"]);
    }

    #[test]
    fn inventory_requires_directory() {
        let provider = DirectoryProvider::new("/nonexistent/game-strings");
        assert!(provider.inventory().is_err());
    }
}
