// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-language memoization of built catalogs.
//!
//! A [`CatalogCache`] owns its provider and builds each language at most
//! once per retained instance. Concurrent first requests may both build;
//! whichever inserts first is kept and every caller receives that one.

use crate::i18n::Lang;
use crate::locations::{LocationCatalogs, LocationResolver};
use crate::provider::StringTableProvider;
use crate::strings::LanguageCatalog;
use crate::types::{GameVersion, LocationEntry};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Sanitized strings plus the location catalogs derived from them.
#[derive(Debug, Clone)]
pub struct LocalizedCatalog {
    strings: LanguageCatalog,
    locations: LocationCatalogs,
}

impl LocalizedCatalog {
    pub fn build<P: StringTableProvider + ?Sized>(provider: &P, lang: Lang) -> Self {
        let strings = LanguageCatalog::build(provider, lang);
        let locations = LocationCatalogs::build(&strings);
        Self { strings, locations }
    }

    pub fn lang(&self) -> Lang {
        self.strings.lang()
    }

    pub fn strings(&self) -> &LanguageCatalog {
        &self.strings
    }

    pub fn locations(&self) -> &LocationCatalogs {
        &self.locations
    }

    pub fn resolver(&self) -> LocationResolver<'_> {
        self.locations.resolver()
    }

    pub fn resolve(&self, version: GameVersion, format: u8, egg: bool) -> Cow<'_, [LocationEntry]> {
        self.resolver().resolve(version, format, egg)
    }
}

pub struct CatalogCache<P> {
    provider: P,
    entries: RwLock<HashMap<Lang, Arc<LocalizedCatalog>>>,
}

impl<P: StringTableProvider> CatalogCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Catalog for `lang`, building it on first use.
    pub fn get(&self, lang: Lang) -> Arc<LocalizedCatalog> {
        if let Some(hit) = self.entries.read().get(&lang) {
            tracing::debug!(%lang, "catalog cache hit");
            return Arc::clone(hit);
        }

        // Built without holding the lock; a racing build is discarded.
        tracing::debug!(%lang, "building catalog");
        let built = Arc::new(LocalizedCatalog::build(&self.provider, lang));
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(lang).or_insert(built))
    }

    pub fn contains(&self, lang: Lang) -> bool {
        self.entries.read().contains_key(&lang)
    }

    /// Drop one language; returns whether it was cached.
    pub fn invalidate(&self, lang: Lang) -> bool {
        self.entries.write().remove(&lang).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<P> std::fmt::Debug for CatalogCache<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut langs: Vec<Lang> = self.entries.read().keys().copied().collect();
        langs.sort();
        f.debug_struct("CatalogCache").field("cached", &langs).finish()
    }
}
