// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixture tables shared by the integration tests

#![allow(dead_code)]

use game_strings::{Lang, MemoryProvider, TableKey};

#[path = "../../src/fixture_tables.rs"]
mod fixture_tables;

pub use fixture_tables::CXD_LOCATIONS as CXD;

pub fn fixture_len(key: TableKey) -> usize {
    fixture_tables::table_length(key.resource())
}

/// Slot `i` of table `key` in language `lang` reads `"<resource> <lang> <i>"`.
pub fn lines(key: TableKey, lang: Lang) -> Vec<String> {
    if key == TableKey::CxdMet {
        return CXD.iter().map(|s| s.to_string()).collect();
    }
    (0..fixture_len(key))
        .map(|i| format!("{} {} {}", key.resource(), lang.code(), i))
        .collect()
}

/// Every table in English only.
pub fn english() -> MemoryProvider {
    let mut provider = MemoryProvider::new();
    for key in TableKey::all() {
        provider.insert(key.resource(), Lang::En, lines(*key, Lang::En));
    }
    provider
}

/// English plus the listed tables in `lang`.
pub fn with_partial(lang: Lang, keys: &[TableKey]) -> MemoryProvider {
    let mut provider = english();
    for key in keys {
        provider.insert(key.resource(), lang, lines(*key, lang));
    }
    provider
}
