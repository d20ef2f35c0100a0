// SPDX-License-Identifier: PMPL-1.0-or-later

//! String table sources.
//!
//! A provider hands out raw, per-language string lists keyed by resource
//! name. Providers never apply fallback themselves; a missing or empty list
//! is reported as `None` and the catalog builder substitutes the default
//! language's table.

mod directory;
mod memory;

pub use directory::{DirectoryProvider, Inventory};
pub use memory::MemoryProvider;

use crate::i18n::Lang;
use serde::Serialize;
use std::ops::Index;
use std::sync::Arc;

/// Keyed source of ordered string lists.
pub trait StringTableProvider: Send + Sync {
    /// Lines of the resource `key` in `lang`, or `None` when absent.
    fn table(&self, key: &str, lang: Lang) -> Option<Vec<String>>;

    /// Language-independent resource (CSV lookups and the like).
    fn resource(&self, _name: &str) -> Option<Vec<String>> {
        None
    }
}

impl<P: StringTableProvider + ?Sized> StringTableProvider for Arc<P> {
    fn table(&self, key: &str, lang: Lang) -> Option<Vec<String>> {
        (**self).table(key, lang)
    }

    fn resource(&self, name: &str) -> Option<Vec<String>> {
        (**self).resource(name)
    }
}

impl<P: StringTableProvider + ?Sized> StringTableProvider for &P {
    fn table(&self, key: &str, lang: Lang) -> Option<Vec<String>> {
        (**self).table(key, lang)
    }

    fn resource(&self, name: &str) -> Option<Vec<String>> {
        (**self).resource(name)
    }
}

/// Ordered strings indexed by position. Empty entries are unused slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringTable(Vec<String>);

impl StringTable {
    pub fn new(entries: Vec<String>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<String> {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for StringTable {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}

impl<S: Into<String>> FromIterator<S> for StringTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Index<usize> for StringTable {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}
