// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resource keys for every table a language catalog loads

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TableKey {
    // === Current generation ===
    Species,
    Moves,
    Items,
    Abilities,
    Types,
    Natures,
    Forms,
    Memories,
    GenLoc,
    TrainingBags,
    TrainingStages,
    Characteristics,
    EncounterTypes,
    Games,
    Pokeblocks,
    Puffs,
    Wallpapers,

    // === Past generation items ===
    ItemsG1,
    ItemsG2,
    ItemsG3,
    ItemsG3Colosseum,
    ItemsG3Xd,

    // === Met location banks ===
    GscMet,
    RsefrlgMet,
    CxdMet,
    HgssMet0,
    HgssMet2,
    HgssMet3,
    Bw2Met0,
    Bw2Met3,
    Bw2Met4,
    Bw2Met6,
    XyMet0,
    XyMet3,
    XyMet4,
    XyMet6,
    SmMet0,
    SmMet3,
    SmMet4,
    SmMet6,
}

impl TableKey {
    pub const COUNT: usize = 40;

    /// Resource identifier passed to the provider.
    pub fn resource(self) -> &'static str {
        match self {
            TableKey::Species => "species",
            TableKey::Moves => "moves",
            TableKey::Items => "items",
            TableKey::Abilities => "abilities",
            TableKey::Types => "types",
            TableKey::Natures => "natures",
            TableKey::Forms => "forms",
            TableKey::Memories => "memories",
            TableKey::GenLoc => "genloc",
            TableKey::TrainingBags => "trainingbag",
            TableKey::TrainingStages => "supertraining",
            TableKey::Characteristics => "character",
            TableKey::EncounterTypes => "encountertype",
            TableKey::Games => "games",
            TableKey::Pokeblocks => "pokeblock",
            TableKey::Puffs => "puff",
            TableKey::Wallpapers => "wallpaper",
            TableKey::ItemsG1 => "ItemsG1",
            TableKey::ItemsG2 => "ItemsG2",
            TableKey::ItemsG3 => "ItemsG3",
            TableKey::ItemsG3Colosseum => "ItemsG3Colosseum",
            TableKey::ItemsG3Xd => "ItemsG3XD",
            TableKey::GscMet => "gsc_00000",
            TableKey::RsefrlgMet => "rsefrlg_00000",
            TableKey::CxdMet => "cxd_00000",
            TableKey::HgssMet0 => "hgss_00000",
            TableKey::HgssMet2 => "hgss_02000",
            TableKey::HgssMet3 => "hgss_03000",
            TableKey::Bw2Met0 => "bw2_00000",
            TableKey::Bw2Met3 => "bw2_30000",
            TableKey::Bw2Met4 => "bw2_40000",
            TableKey::Bw2Met6 => "bw2_60000",
            TableKey::XyMet0 => "xy_00000",
            TableKey::XyMet3 => "xy_30000",
            TableKey::XyMet4 => "xy_40000",
            TableKey::XyMet6 => "xy_60000",
            TableKey::SmMet0 => "sm_00000",
            TableKey::SmMet3 => "sm_30000",
            TableKey::SmMet4 => "sm_40000",
            TableKey::SmMet6 => "sm_60000",
        }
    }

    pub fn from_resource(name: &str) -> Option<TableKey> {
        Self::all().iter().copied().find(|key| key.resource() == name)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> &'static [TableKey; TableKey::COUNT] {
        use TableKey::*;
        &[
            Species,
            Moves,
            Items,
            Abilities,
            Types,
            Natures,
            Forms,
            Memories,
            GenLoc,
            TrainingBags,
            TrainingStages,
            Characteristics,
            EncounterTypes,
            Games,
            Pokeblocks,
            Puffs,
            Wallpapers,
            ItemsG1,
            ItemsG2,
            ItemsG3,
            ItemsG3Colosseum,
            ItemsG3Xd,
            GscMet,
            RsefrlgMet,
            CxdMet,
            HgssMet0,
            HgssMet2,
            HgssMet3,
            Bw2Met0,
            Bw2Met3,
            Bw2Met4,
            Bw2Met6,
            XyMet0,
            XyMet3,
            XyMet4,
            XyMet6,
            SmMet0,
            SmMet3,
            SmMet4,
            SmMet6,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (position, key) in TableKey::all().iter().enumerate() {
            assert_eq!(key.index(), position);
        }
    }

    #[test]
    fn resource_names_are_unique_and_reversible() {
        for key in TableKey::all() {
            assert_eq!(TableKey::from_resource(key.resource()), Some(*key));
        }
        assert_eq!(TableKey::from_resource("nope"), None);
    }
}
