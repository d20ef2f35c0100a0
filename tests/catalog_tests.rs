// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language catalogs built through the public API

mod common;

use game_strings::strings::patch::dedupe_indexed;
use game_strings::{CatalogError, Lang, LanguageCatalog, MemoryProvider, TableKey};

#[test]
fn missing_tables_fall_back_to_default_language() {
    let provider = common::english();
    let default = LanguageCatalog::build(&provider, Lang::DEFAULT);
    for lang in Lang::all() {
        let catalog = LanguageCatalog::build(&provider, *lang);
        for key in TableKey::all() {
            let table = catalog.table(*key);
            assert!(!table.is_empty(), "{} {}", lang, key.resource());
            if *key == TableKey::Bw2Met3 {
                // Slot 0 names the transfer device in the catalog's own language.
                assert_eq!(table.get(0), Some(lang.transporter_name()));
                assert_eq!(table.entries()[1..], default.table(*key).entries()[1..]);
                continue;
            }
            assert_eq!(table, default.table(*key), "{} {}", lang, key.resource());
        }
        assert_eq!(catalog.used_fallback(TableKey::Species), *lang != Lang::DEFAULT);
    }
}

#[test]
fn partial_language_mixes_own_and_default_tables() {
    let provider = common::with_partial(Lang::De, &[TableKey::Items, TableKey::Bw2Met3]);
    let catalog = LanguageCatalog::build(&provider, Lang::De);

    assert!(!catalog.used_fallback(TableKey::Items));
    assert!(catalog.used_fallback(TableKey::Species));
    assert_eq!(catalog.items().get(1), Some("items de 1"));
    assert_eq!(catalog.items().get(0), Some("(items de 0)"));
    // Abilities come from English but their none slot follows German items.
    assert_eq!(catalog.abilities().get(0), Some("(items de 0)"));

    let bw2 = catalog.table(TableKey::Bw2Met3);
    assert_eq!(bw2.get(0), Some("Poképorter"));
    assert_eq!(bw2.get(1), Some("bw2_30000 de 1 (NPC)"));
    assert_eq!(bw2.get(2), Some("bw2_30000 de 2 (species en 0)"));
    assert_eq!(
        bw2.get(9),
        Some("species en 251 (species en 570 1)")
    );
    assert_eq!(bw2.get(12), Some("species en 571 (2)"));
}

#[test]
fn egg_name_is_read_before_patches() {
    let catalog = LanguageCatalog::build(&common::english(), Lang::En);
    assert_eq!(catalog.egg_name(), "species en 0");
    assert_eq!(catalog.species().get(0), Some("---"));
    assert_eq!(
        catalog.table(TableKey::HgssMet2).get(2),
        Some("hgss_02000 en 2 (species en 0)")
    );
}

#[test]
fn fixed_suffixes_and_relabels() {
    let catalog = LanguageCatalog::build(&common::english(), Lang::En);
    let items = catalog.items();
    assert_eq!(items.get(137), Some("Mail #1 (G4)"));
    assert_eq!(items.get(148), Some("Mail #12 (G4)"));
    assert_eq!(items.get(426), Some("items en 426 (G4)"));
    assert_eq!(items.get(427), Some("items en 427 (G4)"));
    assert_eq!(items.get(478), Some("items en 478 (HG/SS)"));
    assert_eq!(items.get(776), Some("items en 776 [Z]"));
    assert_eq!(items.get(836), Some("items en 836"));

    let moves = catalog.moves();
    assert_eq!(moves.get(622), Some("moves en 622 (P)"));
    assert_eq!(moves.get(657), Some("moves en 657 (S)"));
    assert_eq!(moves.get(0), Some("(items en 0)"));

    let bw2 = catalog.table(TableKey::Bw2Met0);
    assert_eq!(bw2.get(36), Some("bw2_00000 en 84/bw2_00000 en 36"));
    assert_eq!(bw2.get(84), Some("bw2_00000 en 84●"));
}

#[test]
fn annotated_pairs_name_the_following_slot() {
    let catalog = LanguageCatalog::build(&common::english(), Lang::En);
    let sm = catalog.table(TableKey::SmMet0);
    assert_eq!(sm.get(0), Some("(items en 0)"));
    assert_eq!(sm.get(2), Some("sm_00000 en 2 (sm_00000 en 3)"));
    assert_eq!(sm.get(3), Some("sm_00000 en 3"));
}

#[test]
fn duplicate_names_get_indexed_suffixes() {
    let mut bank: Vec<String> = ["Town", "Town", "Cave"].iter().map(|s| s.to_string()).collect();
    dedupe_indexed(&mut bank);
    assert_eq!(bank, vec!["Town", "Town [001]", "Cave"]);

    let catalog = LanguageCatalog::build(&common::english(), Lang::En);
    let cxd = catalog.table(TableKey::CxdMet);
    assert_eq!(cxd.get(5), Some("Phenac City [005]"));
    assert_eq!(cxd.get(0), Some(""));
}

#[test]
fn short_tables_are_reported() {
    let provider = MemoryProvider::new().with_table("items", Lang::En, ["None", "Master Ball"]);
    let err = LanguageCatalog::try_build(&provider, Lang::En).unwrap_err();
    assert!(matches!(err, CatalogError::TableTooShort { .. }), "{}", err);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "sanitizing en game text")]
fn short_tables_panic_in_debug_builds() {
    LanguageCatalog::build(&MemoryProvider::new(), Lang::En);
}

#[test]
fn item_strings_per_generation() {
    let catalog = LanguageCatalog::build(&common::english(), Lang::En);
    use game_strings::GameVersion;

    assert!(catalog.item_strings(0, GameVersion::Unknown, None).is_empty());
    assert_eq!(
        catalog.item_strings(1, GameVersion::RD, None).get(3),
        Some("ItemsG1 en 3")
    );
    let emerald = catalog.item_strings(3, GameVersion::E, Some("Enigma Berry"));
    assert_eq!(emerald.get(175), Some("Enigma Berry"));
    let xd = catalog.item_strings(3, GameVersion::Xd, Some("Enigma Berry"));
    assert_eq!(xd.get(175), Some("ItemsG3 en 175"));
    assert_eq!(xd.get(377), Some("UNUSED 377"));
    assert_eq!(xd.get(499), Some("UNUSED 499"));
    assert_eq!(xd.get(500), Some("ItemsG3XD en 0"));
    assert_eq!(
        catalog.item_strings(6, GameVersion::X, None).get(1),
        Some("items en 1")
    );
}

#[test]
fn location_names_by_bank() {
    let catalog = LanguageCatalog::build(&common::english(), Lang::En);
    assert_eq!(
        catalog.location_names(4, 2).and_then(|t| t.get(3)),
        Some("hgss_02000 en 3")
    );
    assert!(catalog.location_names(4, 3).is_some());
    assert!(catalog.location_names(5, 1).is_none());
    assert!(catalog.location_names(8, 0).is_none());
    assert_eq!(catalog.ball_list().len(), 27);
    assert_eq!(catalog.ball_list()[0], "(items en 0)");
}
