// SPDX-License-Identifier: PMPL-1.0-or-later

//! game-strings: localized game reference tables and met-location catalogs.
//!
//! Data flows one way:
//!
//! 1. **Provider**: a [`provider::StringTableProvider`] hands out raw text
//!    tables per resource key and language.
//! 2. **Strings**: [`strings::LanguageCatalog`] loads every table, falling
//!    back to English per table, and applies the declarative patch set in
//!    [`strings::patch`].
//! 3. **Locations**: [`locations::LocationCatalogs`] merges the raw location
//!    banks into one catalog per generation.
//! 4. **Resolver**: [`locations::LocationResolver`] picks and stably reorders
//!    a catalog for a game version, save format and egg flag.
//!
//! [`cache::CatalogCache`] memoizes steps 2 and 3 per language.

pub mod cache;
pub mod config;
pub mod error;
pub mod geo;
pub mod i18n;
pub mod locations;
pub mod logging;
pub mod provider;
pub mod report;
pub mod strings;
pub mod types;

#[cfg(test)]
mod fixture_tables;
#[cfg(test)]
mod testing;

pub use cache::{CatalogCache, LocalizedCatalog};
pub use error::{CatalogError, Result};
pub use i18n::Lang;
pub use locations::{CatalogId, LocationCatalogs, LocationResolver};
pub use provider::{DirectoryProvider, MemoryProvider, StringTable, StringTableProvider};
pub use strings::{LanguageCatalog, TableKey};
pub use types::{GameVersion, LocationEntry};
