// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory provider, used by tests and by embedders that load text
//! resources themselves.

use super::StringTableProvider;
use crate::i18n::Lang;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    tables: HashMap<(String, Lang), Vec<String>>,
    resources: HashMap<String, Vec<String>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, S>(&mut self, key: &str, lang: Lang, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables.insert(
            (key.to_string(), lang),
            lines.into_iter().map(Into::into).collect(),
        );
    }

    pub fn with_table<I, S>(mut self, key: &str, lang: Lang, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, lang, lines);
        self
    }

    pub fn insert_resource<I, S>(&mut self, name: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources
            .insert(name.to_string(), lines.into_iter().map(Into::into).collect());
    }

    pub fn with_resource<I, S>(mut self, name: &str, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_resource(name, lines);
        self
    }
}

impl StringTableProvider for MemoryProvider {
    fn table(&self, key: &str, lang: Lang) -> Option<Vec<String>> {
        self.tables
            .get(&(key.to_string(), lang))
            .filter(|lines| !lines.is_empty())
            .cloned()
    }

    fn resource(&self, name: &str) -> Option<Vec<String>> {
        self.resources.get(name).cloned()
    }
}
