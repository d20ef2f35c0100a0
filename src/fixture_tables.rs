// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixture table sizes and texts, shared by unit and integration tests.
//!
//! Keyed by resource name so this file can be compiled into either crate.

/// Entry count per resource, long enough for every patch and bank.
pub const TABLE_LENGTHS: &[(&str, usize)] = &[
    ("species", 810),
    ("moves", 730),
    ("items", 920),
    ("abilities", 240),
    ("ItemsG1", 256),
    ("ItemsG2", 256),
    ("ItemsG3", 377),
    ("ItemsG3Colosseum", 48),
    ("ItemsG3XD", 93),
    ("gsc_00000", 128),
    ("rsefrlg_00000", 256),
    ("hgss_00000", 235),
    ("hgss_02000", 11),
    ("hgss_03000", 77),
    ("bw2_00000", 154),
    ("bw2_30000", 15),
    ("bw2_40000", 110),
    ("bw2_60000", 3),
    ("xy_00000", 355),
    ("xy_30000", 11),
    ("xy_40000", 79),
    ("xy_60000", 3),
    ("sm_00000", 233),
    ("sm_30000", 16),
    ("sm_40000", 88),
    ("sm_60000", 4),
];

/// Length of every resource not listed above.
pub const DEFAULT_TABLE_LENGTH: usize = 20;

pub fn table_length(resource: &str) -> usize {
    TABLE_LENGTHS
        .iter()
        .find(|(name, _)| *name == resource)
        .map_or(DEFAULT_TABLE_LENGTH, |(_, len)| *len)
}

/// `cxd_00000` with blanks and repeated names.
pub const CXD_LOCATIONS: &[&str] = &[
    "",
    "Outskirt Stand",
    "Phenac City",
    "",
    "Pyrite Town",
    "Phenac City",
    "Agate Village",
    "Pyrite Town",
    "",
    "Realgam Tower",
];
