// SPDX-License-Identifier: PMPL-1.0-or-later

//! Merging raw location banks into per-generation catalogs.
//!
//! Each generation is described by a [`BankLayout`]: an ordered list of
//! slices, each naming a bank, the base that turns a local slot into a
//! global location ID, and which global IDs it contributes. Slices are
//! appended in declaration order; no two slices of a layout may claim the
//! same ID (checked by the tests below, not at runtime).

use super::CatalogId;
use crate::error::{CatalogError, Result};
use crate::provider::StringTable;
use crate::strings::{LanguageCatalog, TableKey};
use crate::types::LocationEntry;

/// Global IDs a slice contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Ids(&'static [u32]),
    /// `first..=last` stepping by `step`, minus `except`.
    Range {
        first: u32,
        last: u32,
        step: u32,
        except: &'static [u32],
    },
    /// Every slot with non-blank text.
    NonBlank,
}

impl Selection {
    pub const fn range(first: u32, last: u32) -> Self {
        Selection::Range {
            first,
            last,
            step: 1,
            except: &[],
        }
    }

    /// Global IDs selected from `bank` mounted at `base`.
    pub fn ids(&self, bank: &StringTable, base: u32) -> Vec<u32> {
        match *self {
            Selection::Ids(ids) => ids.to_vec(),
            Selection::Range {
                first,
                last,
                step,
                except,
            } => (first..=last)
                .step_by(step.max(1) as usize)
                .filter(|id| !except.contains(id))
                .collect(),
            Selection::NonBlank => bank
                .iter()
                .enumerate()
                .filter(|(_, text)| !text.trim().is_empty())
                .map(|(slot, _)| base + slot as u32)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankSlice {
    pub bank: TableKey,
    pub base: u32,
    pub select: Selection,
}

const fn slice(bank: TableKey, base: u32, select: Selection) -> BankSlice {
    BankSlice { bank, base, select }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankLayout {
    pub catalog: CatalogId,
    pub slices: &'static [BankSlice],
}

/// A bank paired with its base and selection, ready to merge.
#[derive(Debug, Clone, Copy)]
pub struct Contribution<'a> {
    pub name: &'static str,
    pub bank: &'a StringTable,
    pub base: u32,
    pub select: Selection,
}

impl<'a> Contribution<'a> {
    pub fn new(name: &'static str, bank: &'a StringTable, base: u32, select: Selection) -> Self {
        Self {
            name,
            bank,
            base,
            select,
        }
    }

    fn entries(&self, strict: bool) -> Result<Vec<LocationEntry>> {
        let mut entries = Vec::new();
        for id in self.select.ids(self.bank, self.base) {
            let text = id
                .checked_sub(self.base)
                .and_then(|slot| self.bank.get(slot as usize));
            match text {
                Some(text) => entries.push(LocationEntry::new(id, text)),
                None if strict => {
                    return Err(CatalogError::MissingBankSlot {
                        bank: self.name,
                        index: id.saturating_sub(self.base) as usize,
                        id,
                    })
                }
                None => {}
            }
        }
        Ok(entries)
    }
}

/// Primary contribution first, then each secondary in order.
pub fn merge_generation(
    primary: Contribution<'_>,
    secondary: &[Contribution<'_>],
) -> Result<Vec<LocationEntry>> {
    let mut merged = primary.entries(true)?;
    for contribution in secondary {
        merged.extend(contribution.entries(true)?);
    }
    Ok(merged)
}

/// Merge skipping IDs whose slot is missing, for degraded builds.
pub(crate) fn merge_available(contributions: &[Contribution<'_>]) -> Vec<LocationEntry> {
    contributions
        .iter()
        .flat_map(|c| c.entries(false).unwrap_or_default())
        .collect()
}

impl BankLayout {
    pub fn contributions<'a>(&self, strings: &'a LanguageCatalog) -> Vec<Contribution<'a>> {
        self.slices
            .iter()
            .map(|s| Contribution::new(s.bank.resource(), strings.table(s.bank), s.base, s.select))
            .collect()
    }

    pub fn merge(&self, strings: &LanguageCatalog) -> Result<Vec<LocationEntry>> {
        let contributions = self.contributions(strings);
        match contributions.split_first() {
            Some((primary, rest)) => merge_generation(*primary, rest),
            None => Ok(Vec::new()),
        }
    }
}

use Selection::{Ids, NonBlank};
use TableKey::*;

#[rustfmt::skip]
pub const LAYOUTS: &[BankLayout] = &[
    BankLayout {
        catalog: CatalogId::Gen2,
        slices: &[
            slice(GscMet, 0, Selection::range(0, 0x5E)),
            slice(GscMet, 0, Ids(&[0x7E, 0x7F])),
        ],
    },
    BankLayout {
        catalog: CatalogId::Gen3,
        slices: &[
            slice(RsefrlgMet, 0, Selection::range(0, 212)),
            slice(RsefrlgMet, 0, Ids(&[253, 254, 255])),
        ],
    },
    BankLayout {
        catalog: CatalogId::Gen3Cxd,
        slices: &[slice(CxdMet, 0, NonBlank)],
    },
    BankLayout {
        catalog: CatalogId::Gen4,
        slices: &[
            slice(HgssMet0, 0, Ids(&[0])),
            slice(HgssMet2, 2000, Ids(&[2000])),
            slice(HgssMet2, 2000, Ids(&[2002])),
            slice(HgssMet3, 3000, Ids(&[3001])),
            slice(HgssMet0, 0, Selection::range(1, 234)),
            slice(HgssMet2, 2000, Selection::Range { first: 2001, last: 2010, step: 1, except: &[2002] }),
            slice(HgssMet3, 3000, Selection::Range { first: 3000, last: 3076, step: 1, except: &[3001] }),
        ],
    },
    BankLayout {
        catalog: CatalogId::Gen5,
        slices: &[
            slice(Bw2Met0, 0, Ids(&[0])),
            slice(Bw2Met6, 60001, Ids(&[60002])),
            slice(Bw2Met3, 30001, Ids(&[30003])),
            slice(Bw2Met0, 0, Selection::range(1, 153)),
            slice(Bw2Met3, 30001, Selection::Range { first: 30001, last: 30015, step: 1, except: &[30003] }),
            slice(Bw2Met4, 40001, Selection::range(40001, 40110)),
            slice(Bw2Met6, 60001, Ids(&[60001, 60003])),
        ],
    },
    BankLayout {
        catalog: CatalogId::Gen6,
        slices: &[
            slice(XyMet0, 0, Ids(&[0])),
            slice(XyMet6, 60001, Ids(&[60002])),
            slice(XyMet3, 30001, Ids(&[30002])),
            slice(XyMet0, 0, Selection::Range { first: 2, last: 354, step: 2, except: &[] }),
            slice(XyMet3, 30001, Selection::Range { first: 30001, last: 30011, step: 1, except: &[30002] }),
            slice(XyMet4, 40001, Selection::range(40001, 40079)),
            slice(XyMet6, 60001, Ids(&[60001, 60003])),
        ],
    },
    BankLayout {
        catalog: CatalogId::Gen7,
        slices: &[
            slice(SmMet0, 0, Ids(&[0])),
            slice(SmMet6, 60001, Ids(&[60002])),
            slice(SmMet3, 30001, Ids(&[30002])),
            slice(SmMet0, 0, Selection::Range { first: 2, last: 232, step: 2, except: &[] }),
            slice(SmMet3, 30001, Selection::Range { first: 30001, last: 30016, step: 1, except: &[30002] }),
            slice(SmMet4, 40001, Selection::range(40001, 40088)),
            slice(SmMet6, 60001, Ids(&[60001, 60003, 60004])),
        ],
    },
];

/// Layout for a catalog; [`LAYOUTS`] is ordered like [`CatalogId::all`].
pub fn layout(catalog: CatalogId) -> &'static BankLayout {
    &LAYOUTS[catalog.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::testing::fixture_provider;
    use std::collections::HashSet;

    fn bank(prefix: &str, len: usize) -> StringTable {
        (0..len).map(|i| format!("{} {}", prefix, i)).collect()
    }

    #[test]
    fn primary_then_secondary_in_bank_order() {
        let rse = bank("loc", 256);
        let merged = merge_generation(
            Contribution::new("rse", &rse, 0, Selection::range(0, 212)),
            &[Contribution::new("rse", &rse, 0, Ids(&[253, 254, 255]))],
        )
        .unwrap();
        assert_eq!(merged.len(), 216);
        assert_eq!(merged[212], LocationEntry::new(212, "loc 212"));
        let tail: Vec<u32> = merged[213..].iter().map(|e| e.id).collect();
        assert_eq!(tail, vec![253, 254, 255]);
        assert_eq!(merged[215].text, "loc 255");
    }

    #[test]
    fn offsets_map_local_slots() {
        let npc = bank("npc", 4);
        let merged = merge_generation(
            Contribution::new("npc", &npc, 30001, Ids(&[30003])),
            &[Contribution::new("npc", &npc, 30001, Ids(&[30001, 30004]))],
        )
        .unwrap();
        assert_eq!(merged[0], LocationEntry::new(30003, "npc 2"));
        assert_eq!(merged[1], LocationEntry::new(30001, "npc 0"));
        assert_eq!(merged[2], LocationEntry::new(30004, "npc 3"));
    }

    #[test]
    fn missing_slot_is_an_error() {
        let short = bank("x", 2);
        let err = merge_generation(Contribution::new("x", &short, 0, Ids(&[5])), &[]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingBankSlot { id: 5, index: 5, .. }));
        let below_base = merge_generation(Contribution::new("x", &short, 100, Ids(&[5])), &[]);
        assert!(below_base.is_err());
    }

    #[test]
    fn lenient_merge_skips_missing_slots() {
        let short = bank("x", 2);
        let merged = merge_available(&[Contribution::new("x", &short, 0, Ids(&[0, 7, 1]))]);
        let ids: Vec<u32> = merged.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn non_blank_selection_drops_unused_slots() {
        let table: StringTable = ["", "Stand", " ", "Tower"].into_iter().collect();
        assert_eq!(NonBlank.ids(&table, 0), vec![1, 3]);
    }

    #[test]
    fn layouts_never_claim_an_id_twice() {
        let strings = LanguageCatalog::build(&fixture_provider(), Lang::En);
        for layout in LAYOUTS {
            let mut seen = HashSet::new();
            for slice in layout.slices {
                for id in slice.select.ids(strings.table(slice.bank), slice.base) {
                    assert!(seen.insert(id), "{:?} claims {} twice", layout.catalog, id);
                }
            }
        }
    }

    #[test]
    fn every_declared_id_lands_exactly_once() {
        let strings = LanguageCatalog::build(&fixture_provider(), Lang::En);
        for layout in LAYOUTS {
            let merged = layout.merge(&strings).unwrap();
            let declared: usize = layout
                .slices
                .iter()
                .map(|s| s.select.ids(strings.table(s.bank), s.base).len())
                .sum();
            assert_eq!(merged.len(), declared, "{:?}", layout.catalog);
            let unique: HashSet<u32> = merged.iter().map(|e| e.id).collect();
            assert_eq!(unique.len(), merged.len(), "{:?}", layout.catalog);
        }
    }

    #[test]
    fn layouts_are_ordered_like_catalog_ids() {
        assert_eq!(LAYOUTS.len(), CatalogId::all().len());
        for id in CatalogId::all() {
            assert_eq!(layout(*id).catalog, *id);
        }
    }
}
