// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-language game text.
//!
//! A [`LanguageCatalog`] loads every table in [`TableKey::all`] for one
//! language, falls back to English table-by-table, and runs the
//! [`patch::PATCHES`] sanitization set over the result.

pub mod keys;
pub mod patch;

pub use keys::TableKey;

use crate::error::{fatal_or_degrade, CatalogError, Result};
use crate::i18n::Lang;
use crate::provider::{StringTable, StringTableProvider};
use crate::types::GameVersion;
use patch::{PatchContext, PATCHES};
use std::borrow::Cow;

/// Item IDs of the capture balls, in ball-index order.
const BALL_ITEMS: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 492, 493, 494, 495, 496, 497, 498,
    499, 576, 851,
];

/// First item slot used by the GameCube-only items.
const GAMECUBE_ITEM_BASE: usize = 500;

/// Gen 3 slot holding the e-Reader berry.
const EREADER_BERRY_SLOT: usize = 175;

#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    lang: Lang,
    tables: Vec<StringTable>,
    fallbacks: Vec<TableKey>,
    egg_name: String,
    colosseum_items: StringTable,
    xd_items: StringTable,
    ball_list: Vec<String>,
    degraded: bool,
}

impl LanguageCatalog {
    /// Build the catalog for `lang`. Never fails.
    ///
    /// Debug builds panic if the loaded tables are too short for the patch
    /// set; release builds log and keep the unpatched tables.
    pub fn build<P: StringTableProvider + ?Sized>(provider: &P, lang: Lang) -> Self {
        let mut catalog = Self::load(provider, lang);
        if let Err(err) = catalog.sanitize() {
            fatal_or_degrade(&format!("sanitizing {} game text", lang), &err);
            catalog.ball_list = ball_list(&catalog.tables[TableKey::Items.index()]);
            catalog.degraded = true;
        }
        catalog
    }

    /// Like [`LanguageCatalog::build`], but reports table-shape errors.
    pub fn try_build<P: StringTableProvider + ?Sized>(provider: &P, lang: Lang) -> Result<Self> {
        let mut catalog = Self::load(provider, lang);
        catalog.sanitize()?;
        Ok(catalog)
    }

    fn load<P: StringTableProvider + ?Sized>(provider: &P, lang: Lang) -> Self {
        let mut fallbacks = Vec::new();
        let tables: Vec<StringTable> = TableKey::all()
            .iter()
            .map(|key| {
                if let Some(lines) = provider.table(key.resource(), lang).filter(|l| !l.is_empty()) {
                    return StringTable::new(lines);
                }
                if lang != Lang::DEFAULT {
                    fallbacks.push(*key);
                    tracing::debug!(table = key.resource(), %lang, "using default language table");
                    if let Some(lines) = provider.table(key.resource(), Lang::DEFAULT) {
                        return StringTable::new(lines);
                    }
                }
                tracing::warn!(table = key.resource(), "table missing in the default language");
                StringTable::default()
            })
            .collect();

        let egg_name = tables[TableKey::Species.index()]
            .get(0)
            .unwrap_or_default()
            .to_string();
        let g3 = &tables[TableKey::ItemsG3.index()];
        let colosseum_items = gamecube_items(g3, &tables[TableKey::ItemsG3Colosseum.index()]);
        let xd_items = gamecube_items(g3, &tables[TableKey::ItemsG3Xd.index()]);

        Self {
            lang,
            tables,
            fallbacks,
            egg_name,
            colosseum_items,
            xd_items,
            ball_list: Vec::new(),
            degraded: false,
        }
    }

    /// Run the patch set on a copy; tables are replaced only on success.
    fn sanitize(&mut self) -> Result<()> {
        let mut patched = self.tables.clone();
        let ctx = PatchContext {
            lang: self.lang,
            egg_name: &self.egg_name,
            loaded: &self.tables,
        };
        patch::apply(&mut patched, PATCHES, &ctx)?;

        let items = &patched[TableKey::Items.index()];
        let last_ball = BALL_ITEMS[BALL_ITEMS.len() - 1];
        if items.len() <= last_ball {
            return Err(CatalogError::TableTooShort {
                table: TableKey::Items.resource(),
                len: items.len(),
                index: last_ball,
            });
        }
        self.ball_list = ball_list(items);
        self.tables = patched;
        Ok(())
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn table(&self, key: TableKey) -> &StringTable {
        &self.tables[key.index()]
    }

    pub fn species(&self) -> &StringTable {
        self.table(TableKey::Species)
    }

    pub fn moves(&self) -> &StringTable {
        self.table(TableKey::Moves)
    }

    pub fn items(&self) -> &StringTable {
        self.table(TableKey::Items)
    }

    pub fn abilities(&self) -> &StringTable {
        self.table(TableKey::Abilities)
    }

    /// Localised name of an egg (species slot 0 before it became `---`).
    pub fn egg_name(&self) -> &str {
        &self.egg_name
    }

    pub fn ball_list(&self) -> &[String] {
        &self.ball_list
    }

    /// Tables that came from the default language.
    pub fn fallbacks(&self) -> &[TableKey] {
        &self.fallbacks
    }

    pub fn used_fallback(&self, key: TableKey) -> bool {
        self.fallbacks.contains(&key)
    }

    /// True when sanitization failed and the tables are unpatched.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Item names as shown by games of `generation`.
    ///
    /// Gen 3 handheld games use the e-Reader berry name when one is given.
    pub fn item_strings(
        &self,
        generation: u8,
        version: GameVersion,
        ereader_berry: Option<&str>,
    ) -> Cow<'_, StringTable> {
        match generation {
            0 => Cow::Owned(StringTable::default()),
            1 => Cow::Borrowed(self.table(TableKey::ItemsG1)),
            2 => Cow::Borrowed(self.table(TableKey::ItemsG2)),
            3 => match version {
                GameVersion::Colosseum => Cow::Borrowed(&self.colosseum_items),
                GameVersion::Xd => Cow::Borrowed(&self.xd_items),
                _ => {
                    let items = self.table(TableKey::ItemsG3);
                    match ereader_berry {
                        Some(name) if items.len() > EREADER_BERRY_SLOT => {
                            let mut entries = items.entries().to_vec();
                            entries[EREADER_BERRY_SLOT] = name.to_string();
                            Cow::Owned(StringTable::new(entries))
                        }
                        _ => Cow::Borrowed(items),
                    }
                }
            },
            _ => Cow::Borrowed(self.items()),
        }
    }

    /// Raw location bank for a generation and bank number (the ten-thousands
    /// digit of the location ID; Gen 4 uses the thousands digit).
    pub fn location_names(&self, generation: u8, bank: u8) -> Option<&StringTable> {
        let key = match (generation, bank) {
            (2, _) => TableKey::GscMet,
            (3, _) => TableKey::RsefrlgMet,
            (4, 0) => TableKey::HgssMet0,
            (4, 2) => TableKey::HgssMet2,
            (4, 3) => TableKey::HgssMet3,
            (5, 0) => TableKey::Bw2Met0,
            (5, 3) => TableKey::Bw2Met3,
            (5, 4) => TableKey::Bw2Met4,
            (5, 6) => TableKey::Bw2Met6,
            (6, 0) => TableKey::XyMet0,
            (6, 3) => TableKey::XyMet3,
            (6, 4) => TableKey::XyMet4,
            (6, 6) => TableKey::XyMet6,
            (7, 0) => TableKey::SmMet0,
            (7, 3) => TableKey::SmMet3,
            (7, 4) => TableKey::SmMet4,
            (7, 6) => TableKey::SmMet6,
            _ => return None,
        };
        Some(self.table(key))
    }
}

/// Gen 3 items padded to the GameCube base slot, then the game's own items.
fn gamecube_items(g3: &StringTable, extra: &StringTable) -> StringTable {
    let mut items: Vec<String> = g3.iter().take(GAMECUBE_ITEM_BASE).map(String::from).collect();
    let filled = items.len();
    items.extend((filled..GAMECUBE_ITEM_BASE).map(|slot| format!("UNUSED {}", slot)));
    items.extend(extra.iter().map(String::from));
    StringTable::new(items)
}

fn ball_list(items: &StringTable) -> Vec<String> {
    BALL_ITEMS
        .iter()
        .map(|&item| items.get(item).unwrap_or_default().to_string())
        .collect()
}
