// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country and sub-region names.
//!
//! Flat CSV resources: `countries` for country names and `sr_NNN` for the
//! regions of country `NNN`. The first row is a header; columns are
//! `id,ja,en,fr,de,it,es,zh,ko`. A failed lookup yields [`ILLEGAL`] for
//! that half of the answer and never affects the other half.

use crate::i18n::Lang;
use crate::provider::StringTableProvider;

pub const ILLEGAL: &str = "Illegal";

/// CSV column holding `lang`'s name, counting the id column as 0.
fn column(lang: Lang) -> Option<usize> {
    let column = match lang {
        Lang::Ja => 1,
        Lang::En => 2,
        Lang::Fr => 3,
        Lang::De => 4,
        Lang::It => 5,
        Lang::Es => 6,
        Lang::Zh | Lang::Zh2 => 7,
        Lang::Ko => 8,
        Lang::Pt => return None,
    };
    Some(column)
}

/// Look up `id` in a CSV resource; `None` when anything is missing.
fn lookup<P: StringTableProvider + ?Sized>(
    provider: &P,
    resource: &str,
    id: u32,
    lang: Lang,
) -> Option<String> {
    let column = column(lang)?;
    let rows = provider.resource(resource)?;
    rows.iter().skip(1).find_map(|row| {
        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() <= 1 {
            return None;
        }
        let row_id: u32 = fields[0].trim().parse().ok()?;
        if row_id != id {
            return None;
        }
        fields.get(column).map(|name| name.trim().to_string())
    })
}

pub fn country_text<P: StringTableProvider + ?Sized>(provider: &P, country: u32, lang: Lang) -> String {
    lookup(provider, "countries", country, lang).unwrap_or_else(|| {
        tracing::debug!(country, %lang, "unknown country");
        ILLEGAL.to_string()
    })
}

pub fn region_text<P: StringTableProvider + ?Sized>(
    provider: &P,
    country: u32,
    region: u32,
    lang: Lang,
) -> String {
    let resource = format!("sr_{:03}", country);
    lookup(provider, &resource, region, lang).unwrap_or_else(|| {
        tracing::debug!(country, region, %lang, "unknown region");
        ILLEGAL.to_string()
    })
}

/// `(country, region)` display names.
pub fn country_region_text<P: StringTableProvider + ?Sized>(
    provider: &P,
    country: u32,
    region: u32,
    lang: Lang,
) -> (String, String) {
    (
        country_text(provider, country, lang),
        region_text(provider, country, region, lang),
    )
}
