// SPDX-License-Identifier: PMPL-1.0-or-later

//! Version-aware catalog selection and ordering.
//!
//! A query is turned into a [`Plan`] by walking the rule tables below in
//! precedence order; the plan names a catalog and how to reorder it. All
//! reordering goes through [`promote_matching`], a stable partition that
//! leaves a fixed prefix alone.

use super::{CatalogId, LocationCatalogs};
use crate::types::{GameVersion, LocationEntry};
use serde::Serialize;
use std::borrow::Cow;
use std::ops::RangeInclusive;

/// Oldest save format with met data; always served its own catalog.
pub const OLDEST_FORMAT: u8 = 2;

/// Catalog served when no rule matches.
pub const LAST_RESORT: CatalogId = CatalogId::Gen7;

/// Save formats a profile applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    Exactly(u8),
    Any,
}

impl FormatRule {
    pub fn matches(self, format: u8) -> bool {
        match self {
            FormatRule::Exactly(native) => format == native,
            FormatRule::Any => true,
        }
    }
}

/// Location IDs promoted to the front of a catalog's reorderable part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reorder {
    pub prefix: usize,
    pub promote: &'static [RangeInclusive<u32>],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionProfile {
    pub versions: &'static [GameVersion],
    pub format: FormatRule,
    pub catalog: CatalogId,
    pub reorder: Option<Reorder>,
}

/// Eggs from versions before `before` looked up in a save of `min_format`
/// or later keep the older generation's location semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EggTransferRule {
    pub before: GameVersion,
    pub min_format: u8,
    pub catalog: CatalogId,
}

/// Fallback for versions with no profile of their own: surface the
/// transfer location right after the catalog's special prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationDefault {
    pub generation: u8,
    /// Highest version id (inclusive) the default covers.
    pub through: GameVersion,
    pub formats: (u8, u8),
    pub catalog: CatalogId,
    pub prefix: usize,
    pub sentinel: u32,
}

impl GenerationDefault {
    fn matches(&self, version: GameVersion, format: u8) -> bool {
        // Colosseum and XD carry out-of-band ids but belong with CXD.
        let covered = !self.through.predates(version) || matches!(version, Colosseum | Xd);
        covered && (self.formats.0..=self.formats.1).contains(&format)
    }
}

pub const EGG_TRANSFER: EggTransferRule = EggTransferRule {
    before: GameVersion::W,
    min_format: 5,
    catalog: CatalogId::Gen4,
};

const fn promote(prefix: usize, promote: &'static [RangeInclusive<u32>]) -> Option<Reorder> {
    Some(Reorder { prefix, promote })
}

use GameVersion::*;

#[rustfmt::skip]
pub const PROFILES: &[VersionProfile] = &[
    VersionProfile { versions: &[CXD, Colosseum, Xd], format: FormatRule::Exactly(3), catalog: CatalogId::Gen3Cxd, reorder: None },
    VersionProfile { versions: &[R, S], format: FormatRule::Exactly(3), catalog: CatalogId::Gen3, reorder: promote(1, &[0..=87]) },
    // Trainer Hill
    VersionProfile { versions: &[E], format: FormatRule::Exactly(3), catalog: CatalogId::Gen3, reorder: promote(1, &[0..=87, 196..=212]) },
    // Celadon Dept.
    VersionProfile { versions: &[FR, LG], format: FormatRule::Exactly(3), catalog: CatalogId::Gen3, reorder: promote(1, &[88..=196]) },
    // Battle Park
    VersionProfile { versions: &[D, P], format: FormatRule::Exactly(4), catalog: CatalogId::Gen4, reorder: promote(4, &[0..=111]) },
    // Rock Peak Ruins
    VersionProfile { versions: &[Pt], format: FormatRule::Exactly(4), catalog: CatalogId::Gen4, reorder: promote(4, &[0..=125]) },
    VersionProfile { versions: &[HG, SS], format: FormatRule::Exactly(4), catalog: CatalogId::Gen4, reorder: promote(4, &[126..=233]) },
    VersionProfile { versions: &[B, W], format: FormatRule::Any, catalog: CatalogId::Gen5, reorder: None },
    // Abyssal Ruins
    VersionProfile { versions: &[B2, W2], format: FormatRule::Any, catalog: CatalogId::Gen5, reorder: promote(3, &[0..=116]) },
    // Unknown Dungeon
    VersionProfile { versions: &[X, Y], format: FormatRule::Any, catalog: CatalogId::Gen6, reorder: promote(3, &[0..=168]) },
    // Secret Base
    VersionProfile { versions: &[OR, AS], format: FormatRule::Any, catalog: CatalogId::Gen6, reorder: promote(3, &[169..=354]) },
    VersionProfile { versions: &[SN, MN, GO, RD, BU, GN, YW], format: FormatRule::Any, catalog: CatalogId::Gen7, reorder: promote(3, &[0..=199]) },
];

/// Declared per generation; generations 6 and 7 have none and fall
/// through to [`LAST_RESORT`].
#[rustfmt::skip]
pub const GENERATION_DEFAULTS: &[GenerationDefault] = &[
    // Pal Park
    GenerationDefault { generation: 4, through: CXD, formats: (4, 4), catalog: CatalogId::Gen4, prefix: 4, sentinel: 55 },
    // Poké Transfer
    GenerationDefault { generation: 5, through: B2, formats: (5, u8::MAX), catalog: CatalogId::Gen5, prefix: 3, sentinel: 30001 },
];

/// How a selected catalog is reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ordering {
    Unchanged,
    Promote {
        prefix: usize,
        #[serde(serialize_with = "serialize_ranges")]
        ranges: &'static [RangeInclusive<u32>],
    },
    Sentinel {
        prefix: usize,
        id: u32,
    },
}

/// Which rule answered a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    OldestFormat,
    EggTransfer,
    Profile,
    GenerationDefault,
    LastResort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub catalog: CatalogId,
    pub ordering: Ordering,
    pub rule: Rule,
}

impl Plan {
    /// Decide catalog and ordering for a query. Total: every input has a plan.
    pub fn for_query(version: GameVersion, format: u8, egg: bool) -> Plan {
        if format == OLDEST_FORMAT {
            return Plan::unchanged(CatalogId::Gen2, Rule::OldestFormat);
        }

        if egg && version.predates(EGG_TRANSFER.before) && format >= EGG_TRANSFER.min_format {
            return Plan::unchanged(EGG_TRANSFER.catalog, Rule::EggTransfer);
        }

        if let Some(profile) = PROFILES
            .iter()
            .find(|p| p.versions.contains(&version) && p.format.matches(format))
        {
            let ordering = match &profile.reorder {
                Some(reorder) => Ordering::Promote {
                    prefix: reorder.prefix,
                    ranges: reorder.promote,
                },
                None => Ordering::Unchanged,
            };
            return Plan {
                catalog: profile.catalog,
                ordering,
                rule: Rule::Profile,
            };
        }

        if let Some(default) = GENERATION_DEFAULTS.iter().find(|d| d.matches(version, format)) {
            return Plan {
                catalog: default.catalog,
                ordering: Ordering::Sentinel {
                    prefix: default.prefix,
                    id: default.sentinel,
                },
                rule: Rule::GenerationDefault,
            };
        }

        tracing::debug!(%version, format, egg, "no location rule matched; using last resort");
        Plan::unchanged(LAST_RESORT, Rule::LastResort)
    }

    fn unchanged(catalog: CatalogId, rule: Rule) -> Plan {
        Plan {
            catalog,
            ordering: Ordering::Unchanged,
            rule,
        }
    }

    /// Apply the ordering to `entries`; borrows when nothing moves.
    pub fn apply<'a>(&self, entries: &'a [LocationEntry]) -> Cow<'a, [LocationEntry]> {
        match &self.ordering {
            Ordering::Unchanged => Cow::Borrowed(entries),
            Ordering::Promote { prefix, ranges } => Cow::Owned(promote_matching(entries, *prefix, |e| {
                ranges.iter().any(|range| range.contains(&e.id))
            })),
            Ordering::Sentinel { prefix, id } => {
                Cow::Owned(promote_matching(entries, *prefix, |e| e.id == *id))
            }
        }
    }
}

/// Stable partition of `entries[prefix..]`: matches first, then the rest,
/// each group in its original order. The prefix is copied unchanged.
pub fn promote_matching<F>(entries: &[LocationEntry], prefix: usize, matches: F) -> Vec<LocationEntry>
where
    F: Fn(&LocationEntry) -> bool,
{
    let split = prefix.min(entries.len());
    let (head, tail) = entries.split_at(split);
    let (promoted, rest): (Vec<&LocationEntry>, Vec<&LocationEntry>) =
        tail.iter().partition(|entry| matches(entry));

    head.iter()
        .chain(promoted)
        .chain(rest)
        .cloned()
        .collect()
}

/// Read-only view answering location-list queries for one language.
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver<'a> {
    catalogs: &'a LocationCatalogs,
}

impl<'a> LocationResolver<'a> {
    pub fn new(catalogs: &'a LocationCatalogs) -> Self {
        Self { catalogs }
    }

    /// Ordered location list for a version, save format and egg context.
    pub fn resolve(&self, version: GameVersion, format: u8, egg: bool) -> Cow<'a, [LocationEntry]> {
        let plan = Plan::for_query(version, format, egg);
        plan.apply(self.catalogs.get(plan.catalog))
    }
}

fn serialize_ranges<S>(ranges: &&'static [RangeInclusive<u32>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(ranges.len()))?;
    for range in ranges.iter() {
        seq.serialize_element(&(*range.start(), *range.end()))?;
    }
    seq.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(ids: &[u32]) -> Vec<LocationEntry> {
        ids.iter().map(|id| LocationEntry::new(*id, format!("loc {}", id))).collect()
    }

    fn ids(entries: &[LocationEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn promote_keeps_prefix_and_relative_order() {
        let input = entries(&[0, 2000, 5, 300, 7, 400, 1]);
        let out = promote_matching(&input, 2, |e| e.id < 100);
        assert_eq!(ids(&out), vec![0, 2000, 5, 7, 1, 300, 400]);
    }

    #[test]
    fn promote_with_oversized_prefix_is_identity() {
        let input = entries(&[3, 1, 2]);
        assert_eq!(promote_matching(&input, 10, |_| true), input);
    }

    #[test]
    fn oldest_format_wins_over_everything() {
        for version in GameVersion::all() {
            for egg in [false, true] {
                let plan = Plan::for_query(*version, 2, egg);
                assert_eq!(plan.catalog, CatalogId::Gen2);
                assert_eq!(plan.ordering, Ordering::Unchanged);
            }
        }
    }

    #[test]
    fn old_eggs_in_new_saves_use_gen4() {
        let plan = Plan::for_query(Pt, 6, true);
        assert_eq!((plan.catalog, plan.rule), (CatalogId::Gen4, Rule::EggTransfer));
        assert_eq!(Plan::for_query(HG, 5, true).catalog, CatalogId::Gen4);
        assert_eq!(Plan::for_query(E, 7, true).catalog, CatalogId::Gen4);
        // Black/White eggs stay in their own generation.
        assert_eq!(Plan::for_query(B, 5, true).catalog, CatalogId::Gen5);
    }

    #[test]
    fn profiles_select_catalog_and_ranges() {
        let emerald = Plan::for_query(E, 3, false);
        assert_eq!(emerald.catalog, CatalogId::Gen3);
        assert_eq!(
            emerald.ordering,
            Ordering::Promote { prefix: 1, ranges: &[0..=87, 196..=212] }
        );
        assert_eq!(Plan::for_query(CXD, 3, false).catalog, CatalogId::Gen3Cxd);
        assert_eq!(Plan::for_query(W, 7, false).ordering, Ordering::Unchanged);
        assert_eq!(Plan::for_query(AS, 6, false).catalog, CatalogId::Gen6);
        assert_eq!(Plan::for_query(YW, 7, false).catalog, CatalogId::Gen7);
    }

    #[test]
    fn gen4_profiles_need_native_format() {
        assert_eq!(Plan::for_query(HG, 4, false).rule, Rule::Profile);
        // A Gen 4 origin in a Gen 5 save without egg context is a transfer.
        let transfer = Plan::for_query(HG, 5, false);
        assert_eq!(transfer.rule, Rule::GenerationDefault);
        assert_eq!(transfer.ordering, Ordering::Sentinel { prefix: 3, id: 30001 });
        // Eggs from those saves are answered by the egg transfer rule instead.
        assert_eq!(Plan::for_query(Pt, 5, true).rule, Rule::EggTransfer);
        assert_ne!(Plan::for_query(D, 5, false).rule, Rule::Profile);
    }

    #[test]
    fn gen3_origin_in_gen4_save_surfaces_pal_park() {
        let plan = Plan::for_query(FR, 4, false);
        assert_eq!(plan.catalog, CatalogId::Gen4);
        assert_eq!(plan.ordering, Ordering::Sentinel { prefix: 4, id: 55 });
    }

    #[test]
    fn unlisted_gen6_and_gen7_versions_fall_to_last_resort() {
        for version in [US, UM] {
            let plan = Plan::for_query(version, 7, false);
            assert_eq!(plan.catalog, LAST_RESORT, "{}", version);
            assert_eq!(plan.rule, Rule::LastResort);
        }
        assert_eq!(Plan::for_query(X, 3, false).catalog, CatalogId::Gen6);
        assert_eq!(Plan::for_query(R, 9, false).rule, Rule::GenerationDefault);
        assert_eq!(Plan::for_query(Xd, 4, false).catalog, CatalogId::Gen4);
    }

    #[test]
    fn virtual_console_gen2_versions_fall_to_last_resort() {
        for version in [GD, SV, C] {
            for format in [4, 5, 7] {
                let plan = Plan::for_query(version, format, false);
                assert_eq!(plan.rule, Rule::LastResort, "{} in format {}", version, format);
                assert_eq!(plan.catalog, LAST_RESORT);
            }
        }
        assert_eq!(Plan::for_query(Colosseum, 5, false).rule, Rule::GenerationDefault);
    }

    #[test]
    fn sentinel_follows_prefix() {
        let input = entries(&[0, 60002, 30003, 1, 2, 30001, 40001]);
        let plan = Plan {
            catalog: CatalogId::Gen5,
            ordering: Ordering::Sentinel { prefix: 3, id: 30001 },
            rule: Rule::GenerationDefault,
        };
        let out = plan.apply(&input);
        assert_eq!(ids(&out), vec![0, 60002, 30003, 30001, 1, 2, 40001]);
    }

    #[test]
    fn unchanged_plans_borrow() {
        let input = entries(&[0, 1]);
        let plan = Plan::for_query(B, 5, false);
        assert!(matches!(plan.apply(&input), Cow::Borrowed(_)));
    }
}
