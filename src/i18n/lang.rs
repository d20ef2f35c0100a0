// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported game-text languages.
//!
//! The order of [`Lang::all`] is the index order used by save data, so
//! `Lang::from_index` must stay in step with it.

use serde::{Deserialize, Serialize};

/// Language code for which game text tables exist.
///
/// Unrecognised input always maps to [`Lang::DEFAULT`] through
/// [`Lang::parse_or_default`]; strict parsing is available via
/// [`Lang::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ja,
    En,
    Fr,
    It,
    De,
    Es,
    Ko,
    Zh,
    Zh2,
    Pt,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::En;

    /// Resource code for this language (`"zh2"` is traditional Chinese).
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::It => "it",
            Lang::De => "de",
            Lang::Es => "es",
            Lang::Ko => "ko",
            Lang::Zh => "zh",
            Lang::Zh2 => "zh2",
            Lang::Pt => "pt",
        }
    }

    /// Parse a language code. ASCII case-insensitive.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ja" => Some(Lang::Ja),
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            "it" => Some(Lang::It),
            "de" => Some(Lang::De),
            "es" => Some(Lang::Es),
            "ko" => Some(Lang::Ko),
            "zh" => Some(Lang::Zh),
            "zh2" => Some(Lang::Zh2),
            "pt" => Some(Lang::Pt),
            _ => None,
        }
    }

    pub fn parse_or_default(code: &str) -> Lang {
        Self::from_code(code).unwrap_or(Self::DEFAULT)
    }

    /// Language at a save-data index; out-of-range indices give the default.
    pub fn from_index(index: u32) -> Lang {
        Self::all()
            .get(index as usize)
            .copied()
            .unwrap_or(Self::DEFAULT)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// All supported languages, in save-data index order.
    pub fn all() -> &'static [Lang] {
        &[
            Lang::Ja,
            Lang::En,
            Lang::Fr,
            Lang::It,
            Lang::De,
            Lang::Es,
            Lang::Ko,
            Lang::Zh,
            Lang::Zh2,
            Lang::Pt,
        ]
    }

    /// Localised name of the Gen 5 transfer device (met location 30001).
    pub fn transporter_name(&self) -> &'static str {
        match self {
            Lang::Ja => "ポケシフター",
            Lang::En => "Poké Transfer",
            Lang::Fr => "Poké Fret",
            Lang::It => "Pokétrasporto",
            Lang::De => "Poképorter",
            Lang::Es => "Pokétransfer",
            Lang::Ko => "포케시프터",
            Lang::Zh => "宝可传送",
            Lang::Zh2 => "寶可傳送",
            // No localisation shipped; the Japanese hardware name is used.
            Lang::Pt => "ポケシフター",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::DEFAULT
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| format!("unsupported language code: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Lang::parse_or_default("xx"), Lang::En);
        assert_eq!(Lang::parse_or_default(""), Lang::En);
        assert_eq!(Lang::parse_or_default("ZH2"), Lang::Zh2);
    }

    #[test]
    fn index_order_matches_save_data() {
        assert_eq!(Lang::from_index(0), Lang::Ja);
        assert_eq!(Lang::from_index(8), Lang::Zh2);
        assert_eq!(Lang::from_index(10), Lang::En);
        assert_eq!(Lang::Pt.index(), 9);
    }

    #[test]
    fn transporter_names_are_localised() {
        assert_eq!(Lang::En.transporter_name(), "Poké Transfer");
        assert_eq!(Lang::De.transporter_name(), "Poképorter");
        assert_eq!(Lang::Pt.transporter_name(), Lang::Ja.transporter_name());
    }
}
