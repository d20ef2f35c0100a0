// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text sanitization as data.
//!
//! [`PATCHES`] lists every fix applied to freshly loaded tables: which table,
//! which slot, and what happens to it. [`apply`] is the only code that knows
//! how to carry a patch out. Patches run in list order and the list is sorted
//! by [`Stage`]; later stages read the output of earlier ones.

use super::keys::TableKey;
use crate::error::{CatalogError, Result};
use crate::i18n::Lang;
use crate::provider::StringTable;
use std::collections::HashSet;

/// Sanitization phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Synthetic labels for slots with no modern name.
    Relabel,
    /// Suffixes that tell duplicate names apart.
    Disambiguate,
    /// Text assembled from other tables or from language data.
    CrossReference,
    /// Whole-slot rewrites.
    Override,
    /// Slot 0 of selectable tables rendered as `(<none>)`.
    NoneSlot,
}

/// A fragment of patched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Text(&'static str),
    /// The slot's own text before this patch.
    Current,
    /// Another slot, as patched so far.
    Slot(TableKey, usize),
    /// Another slot as loaded, before any patch.
    Original(TableKey, usize),
    /// Species slot 0 as loaded, before any patch.
    EggName,
    /// Localised transfer device name.
    Transporter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    /// `"<label> #<n> (<tag>)"` for each slot in `first..=last`, n from 1.
    RelabelRange {
        first: usize,
        last: usize,
        label: &'static str,
        tag: &'static str,
    },
    /// Copy of `source` with its last character moved `step` code points on.
    BumpLastChar {
        index: usize,
        source: usize,
        step: u32,
        suffix: &'static str,
    },
    Append {
        index: usize,
        pieces: &'static [Piece],
    },
    AppendRange {
        first: usize,
        last: usize,
        pieces: &'static [Piece],
    },
    /// `even` on even slots and `odd` on odd slots of `first..=last`.
    AlternateSuffix {
        first: usize,
        last: usize,
        even: &'static str,
        odd: &'static str,
    },
    Replace {
        index: usize,
        pieces: &'static [Piece],
    },
    /// Every repeat of an earlier non-blank entry gets ` [NNN]` (its index).
    DedupeIndexed,
    /// Even slots take the following odd slot as a qualifier, then a
    /// ` (n)` counter when the result still repeats an earlier entry.
    /// Entries already annotated this way are left alone.
    AnnotatePairs,
    /// Slot 0 becomes `(<source slot 0>)`.
    NoneLabel { source: TableKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    pub stage: Stage,
    pub table: TableKey,
    pub op: PatchOp,
}

/// Language-dependent inputs a patch may read.
#[derive(Debug, Clone, Copy)]
pub struct PatchContext<'a> {
    pub lang: Lang,
    pub egg_name: &'a str,
    /// Tables as loaded, indexed like the tables being patched.
    pub loaded: &'a [StringTable],
}

const fn patch(stage: Stage, table: TableKey, op: PatchOp) -> Patch {
    Patch { stage, table, op }
}

const fn append(stage: Stage, table: TableKey, index: usize, pieces: &'static [Piece]) -> Patch {
    patch(stage, table, PatchOp::Append { index, pieces })
}

const fn tag(table: TableKey, index: usize, pieces: &'static [Piece]) -> Patch {
    append(Stage::Disambiguate, table, index, pieces)
}

const NPC: &[Piece] = &[Piece::Text(" (NPC)")];
const EGG: &[Piece] = &[Piece::Text(" ("), Piece::EggName, Piece::Text(")")];
const HGSS: &[Piece] = &[Piece::Text(" (HG/SS)")];
const ORAS: &[Piece] = &[Piece::Text(" (OR/AS)")];
const XY: &[Piece] = &[Piece::Text(" (X/Y)")];
const N1: &[Piece] = &[Piece::Text(" (1)")];
const N2: &[Piece] = &[Piece::Text(" (2)")];
const N3: &[Piece] = &[Piece::Text(" (3)")];
const N4: &[Piece] = &[Piece::Text(" (4)")];

use PatchOp::*;
use Stage::*;
use TableKey::*;

#[rustfmt::skip]
pub const PATCHES: &[Patch] = &[
    // Gen 4 mail has no modern name.
    patch(Relabel, Items, RelabelRange { first: 137, last: 148, label: "Mail", tag: "G4" }),
    // Items
    patch(Disambiguate, Items, BumpLastChar { index: 426, source: 425, step: 1, suffix: " (G4)" }),
    patch(Disambiguate, Items, BumpLastChar { index: 427, source: 425, step: 2, suffix: " (G4)" }),
    tag(Items, 456, HGSS), // S.S. Ticket
    tag(Items, 736, ORAS),
    tag(Items, 463, &[Piece::Text(" (DPPt)")]), // Storage Key
    tag(Items, 734, ORAS),
    tag(Items, 478, HGSS), // Basement Key
    tag(Items, 621, &[Piece::Text(" (M)")]), // Xtransceiver
    tag(Items, 626, &[Piece::Text(" (F)")]),
    tag(Items, 629, N2), // DNA Splicers
    tag(Items, 637, N2), // Dropped Item
    tag(Items, 707, N2), // Travel Trunk
    tag(Items, 713, N2), // Alt Bike
    tag(Items, 714, N2), // Holo Caster
    tag(Items, 729, N1), // Meteorite
    tag(Items, 740, N2), // Contest Costume
    tag(Items, 751, N2),
    tag(Items, 771, N3),
    tag(Items, 772, N4),
    tag(Items, 842, &[Piece::Text(" (SM)")]), // Fishing Rod
    patch(Disambiguate, Items, AppendRange { first: 776, last: 835, pieces: &[Piece::Text(" [Z]")] }),
    patch(Disambiguate, Moves, AlternateSuffix { first: 622, last: 657, even: " (P)", odd: " (S)" }),
    // Locations
    patch(Disambiguate, CxdMet, DedupeIndexed),
    patch(Disambiguate, SmMet0, AnnotatePairs),
    tag(HgssMet2, 1, NPC),
    tag(Bw2Met0, 40, &[Piece::Text("(B/W)")]), // Victory Road
    tag(Bw2Met0, 134, &[Piece::Text("(B2/W2)")]),
    // Entralink
    patch(Disambiguate, Bw2Met0, AppendRange { first: 76, last: 105, pieces: &[Piece::Text("●")] }),
    tag(Bw2Met3, 1, NPC),
    tag(XyMet0, 104, XY), // Victory Road
    tag(XyMet0, 106, XY), // Pokémon League
    tag(XyMet0, 202, ORAS),
    tag(XyMet0, 298, ORAS),
    tag(XyMet3, 0, NPC),
    tag(SmMet3, 0, NPC),
    // Unused first set of regions.
    patch(Disambiguate, SmMet3, AppendRange { first: 2, last: 5, pieces: &[Piece::Text(" (-)")] }),
    // Link trade eggs and the transfer device
    append(CrossReference, HgssMet2, 2, EGG),
    patch(CrossReference, Bw2Met3, Replace { index: 0, pieces: &[Piece::Transporter] }),
    append(CrossReference, Bw2Met3, 2, EGG),
    // Celebi / Zorua / Zoroark events
    patch(CrossReference, Bw2Met3, Replace {
        index: 9,
        pieces: &[Piece::Slot(Species, 251), Piece::Text(" ("), Piece::Slot(Species, 570), Piece::Text(" 1)")],
    }),
    patch(CrossReference, Bw2Met3, Replace {
        index: 10,
        pieces: &[Piece::Slot(Species, 251), Piece::Text(" ("), Piece::Slot(Species, 570), Piece::Text(" 2)")],
    }),
    patch(CrossReference, Bw2Met3, Replace { index: 11, pieces: &[Piece::Slot(Species, 571), Piece::Text(" (1)")] }),
    patch(CrossReference, Bw2Met3, Replace { index: 12, pieces: &[Piece::Slot(Species, 571), Piece::Text(" (2)")] }),
    append(CrossReference, Bw2Met6, 2, EGG),
    append(CrossReference, XyMet3, 1, EGG),
    append(CrossReference, SmMet3, 1, EGG),
    // Cold Storage in BW is the PWT in BW2.
    patch(Override, Bw2Met0, Replace {
        index: 36,
        pieces: &[Piece::Original(Bw2Met0, 84), Piece::Text("/"), Piece::Current],
    }),
    patch(Override, Species, Replace { index: 0, pieces: &[Piece::Text("---")] }),
    // Items must stay last: the others read its slot 0.
    patch(NoneSlot, Abilities, NoneLabel { source: Items }),
    patch(NoneSlot, Moves, NoneLabel { source: Items }),
    patch(NoneSlot, GscMet, NoneLabel { source: Items }),
    patch(NoneSlot, RsefrlgMet, NoneLabel { source: Items }),
    patch(NoneSlot, HgssMet0, NoneLabel { source: Items }),
    patch(NoneSlot, Bw2Met0, NoneLabel { source: Items }),
    patch(NoneSlot, XyMet0, NoneLabel { source: Items }),
    patch(NoneSlot, SmMet0, NoneLabel { source: Items }),
    patch(NoneSlot, Items, NoneLabel { source: Items }),
];

/// Apply `patches` in order to `tables` (indexed by [`TableKey::index`]).
///
/// Stops at the first patch whose slot is missing; tables may then be
/// partially patched, so callers work on a copy.
pub fn apply(tables: &mut [StringTable], patches: &[Patch], ctx: &PatchContext<'_>) -> Result<()> {
    for patch in patches {
        apply_one(tables, patch, ctx)?;
    }
    Ok(())
}

fn apply_one(tables: &mut [StringTable], patch: &Patch, ctx: &PatchContext<'_>) -> Result<()> {
    let key = patch.table;
    match patch.op {
        RelabelRange { first, last, label, tag } => {
            require(tables, key, last)?;
            let entries = tables[key.index()].entries_mut();
            for (seq, slot) in (first..=last).enumerate() {
                entries[slot] = format!("{} #{} ({})", label, seq + 1, tag);
            }
        }
        BumpLastChar { index, source, step, suffix } => {
            require(tables, key, index.max(source))?;
            let text = bump_last_char(&tables[key.index()][source], step);
            tables[key.index()].entries_mut()[index] = format!("{}{}", text, suffix);
        }
        Append { index, pieces } => {
            require(tables, key, index)?;
            let extra = render(tables, key, index, pieces, ctx)?;
            tables[key.index()].entries_mut()[index].push_str(&extra);
        }
        AppendRange { first, last, pieces } => {
            require(tables, key, last)?;
            for index in first..=last {
                let extra = render(tables, key, index, pieces, ctx)?;
                tables[key.index()].entries_mut()[index].push_str(&extra);
            }
        }
        AlternateSuffix { first, last, even, odd } => {
            require(tables, key, last)?;
            let entries = tables[key.index()].entries_mut();
            for index in first..=last {
                entries[index].push_str(if index % 2 == 0 { even } else { odd });
            }
        }
        Replace { index, pieces } => {
            require(tables, key, index)?;
            let text = render(tables, key, index, pieces, ctx)?;
            tables[key.index()].entries_mut()[index] = text;
        }
        DedupeIndexed => dedupe_indexed(tables[key.index()].entries_mut()),
        AnnotatePairs => annotate_pairs(tables[key.index()].entries_mut()),
        NoneLabel { source } => {
            require(tables, key, 0)?;
            require(tables, source, 0)?;
            let label = format!("({})", &tables[source.index()][0]);
            tables[key.index()].entries_mut()[0] = label;
        }
    }
    Ok(())
}

fn require(tables: &[StringTable], key: TableKey, index: usize) -> Result<()> {
    let len = tables[key.index()].len();
    if index < len {
        Ok(())
    } else {
        Err(CatalogError::TableTooShort {
            table: key.resource(),
            len,
            index,
        })
    }
}

fn render(
    tables: &[StringTable],
    key: TableKey,
    index: usize,
    pieces: &[Piece],
    ctx: &PatchContext<'_>,
) -> Result<String> {
    let mut out = String::new();
    for piece in pieces {
        match *piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Current => out.push_str(&tables[key.index()][index]),
            Piece::Slot(other, slot) => {
                require(tables, other, slot)?;
                out.push_str(&tables[other.index()][slot]);
            }
            Piece::Original(other, slot) => {
                let text = ctx
                    .loaded
                    .get(other.index())
                    .and_then(|table| table.get(slot))
                    .ok_or(CatalogError::TableTooShort {
                        table: other.resource(),
                        len: ctx.loaded.get(other.index()).map_or(0, StringTable::len),
                        index: slot,
                    })?;
                out.push_str(text);
            }
            Piece::EggName => out.push_str(ctx.egg_name),
            Piece::Transporter => out.push_str(ctx.lang.transporter_name()),
        }
    }
    Ok(out)
}

fn bump_last_char(text: &str, step: u32) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if let Some(last) = chars.last_mut() {
        if let Some(bumped) = char::from_u32(*last as u32 + step) {
            *last = bumped;
        }
    }
    chars.into_iter().collect()
}

/// Suffix every repeat of an earlier entry with its bracketed index.
///
/// Blank slots are unused and left alone. A suffixed name that would
/// collide with another entry is suffixed again, so the output never holds
/// two equal non-blank entries and a second pass changes nothing.
pub fn dedupe_indexed(entries: &mut [String]) {
    let mut taken: HashSet<String> = entries
        .iter()
        .filter(|text| !text.trim().is_empty())
        .cloned()
        .collect();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, entry) in entries.iter_mut().enumerate() {
        if entry.trim().is_empty() {
            continue;
        }
        if seen.insert(entry.clone()) {
            continue;
        }
        let mut renamed = entry.clone();
        while taken.contains(&renamed) {
            renamed.push_str(&format!(" [{:03}]", index));
        }
        taken.insert(renamed.clone());
        seen.insert(renamed.clone());
        *entry = renamed;
    }
}

fn annotate_pairs(entries: &mut [String]) {
    let original = entries.to_vec();
    // Names before the occurrence counter, so a third repeat counts as 3.
    let mut bases = original.clone();
    for index in (0..entries.len()).step_by(2) {
        let qualifier = original
            .get(index + 1)
            .filter(|next| !next.trim().is_empty() && !next.starts_with('['))
            .map(|next| format!(" ({})", next));
        let earlier = index.saturating_sub(1);

        // Already annotated: the counter is the one this name would earn.
        if let Some((stem, counter)) = split_counter(&original[index]) {
            let qualified = qualifier.as_deref().map_or(true, |q| stem.ends_with(q));
            if qualified && occurrences(&bases[..earlier], stem) + 1 == counter {
                bases[index] = stem.to_string();
                continue;
            }
        }

        let mut base = original[index].clone();
        if let Some(q) = &qualifier {
            if !base.ends_with(q.as_str()) {
                base.push_str(q);
            }
        }
        let repeats = if base.trim().is_empty() {
            0
        } else {
            occurrences(&bases[..earlier], &base)
        };
        entries[index] = if repeats > 0 {
            format!("{} ({})", base, repeats + 1)
        } else {
            base.clone()
        };
        bases[index] = base;
    }
}

fn occurrences(names: &[String], name: &str) -> usize {
    names.iter().filter(|earlier| *earlier == name).count()
}

/// Split a trailing ` (N)` occurrence counter off `text`.
fn split_counter(text: &str) -> Option<(&str, usize)> {
    let inner = text.strip_suffix(')')?;
    let open = inner.rfind(" (")?;
    let digits = &inner[open + 2..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&text[..open], digits.parse().ok()?))
}
