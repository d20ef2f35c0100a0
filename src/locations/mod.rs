// SPDX-License-Identifier: PMPL-1.0-or-later

//! Met-location catalogs.
//!
//! [`LocationCatalogs`] holds one merged catalog per [`CatalogId`], built
//! once per language from a [`LanguageCatalog`]. [`LocationResolver`] picks
//! and reorders a catalog for a (version, save format, egg) query.

pub mod bank;
pub mod resolver;

pub use bank::{merge_generation, BankLayout, Contribution, Selection, LAYOUTS};
pub use resolver::{promote_matching, LocationResolver, Ordering, Plan};

use crate::error::{fatal_or_degrade, Result};
use crate::strings::LanguageCatalog;
use crate::types::LocationEntry;
use serde::Serialize;
use std::fmt;

/// Identifies one merged catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CatalogId {
    Gen2,
    Gen3,
    /// Colosseum / XD
    Gen3Cxd,
    Gen4,
    Gen5,
    Gen6,
    Gen7,
}

impl CatalogId {
    pub fn all() -> &'static [CatalogId] {
        &[
            CatalogId::Gen2,
            CatalogId::Gen3,
            CatalogId::Gen3Cxd,
            CatalogId::Gen4,
            CatalogId::Gen5,
            CatalogId::Gen6,
            CatalogId::Gen7,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn generation(self) -> u8 {
        match self {
            CatalogId::Gen2 => 2,
            CatalogId::Gen3 | CatalogId::Gen3Cxd => 3,
            CatalogId::Gen4 => 4,
            CatalogId::Gen5 => 5,
            CatalogId::Gen6 => 6,
            CatalogId::Gen7 => 7,
        }
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogId::Gen3Cxd => write!(f, "gen3-cxd"),
            other => write!(f, "gen{}", other.generation()),
        }
    }
}

/// Every merged catalog for one language. Immutable once built.
#[derive(Debug, Clone)]
pub struct LocationCatalogs {
    catalogs: Vec<Vec<LocationEntry>>,
}

impl LocationCatalogs {
    /// Merge every layout. Never fails; see [`crate::error::fatal_or_degrade`].
    pub fn build(strings: &LanguageCatalog) -> Self {
        let catalogs = LAYOUTS
            .iter()
            .map(|layout| match layout.merge(strings) {
                Ok(entries) => entries,
                Err(err) => {
                    fatal_or_degrade(&format!("merging {} locations", layout.catalog), &err);
                    bank::merge_available(&layout.contributions(strings))
                }
            })
            .collect();
        Self { catalogs }
    }

    pub fn try_build(strings: &LanguageCatalog) -> Result<Self> {
        let catalogs = LAYOUTS
            .iter()
            .map(|layout| layout.merge(strings))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { catalogs })
    }

    pub fn get(&self, id: CatalogId) -> &[LocationEntry] {
        &self.catalogs[id.index()]
    }

    pub fn resolver(&self) -> LocationResolver<'_> {
        LocationResolver::new(self)
    }
}
