// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared fixtures for unit tests

use crate::i18n::Lang;
use crate::provider::MemoryProvider;
use crate::strings::TableKey;

use crate::fixture_tables::CXD_LOCATIONS as CXD_FIXTURE;

pub fn fixture_len(key: TableKey) -> usize {
    crate::fixture_tables::table_length(key.resource())
}

/// English tables whose slots read `"<resource> <index>"`.
pub fn fixture_provider() -> MemoryProvider {
    let mut provider = MemoryProvider::new();
    for key in TableKey::all() {
        if *key == TableKey::CxdMet {
            provider.insert(key.resource(), Lang::En, CXD_FIXTURE.iter().copied());
            continue;
        }
        let lines = (0..fixture_len(*key)).map(|i| format!("{} {}", key.resource(), i));
        provider.insert(key.resource(), Lang::En, lines);
    }
    provider
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture_tables::TABLE_LENGTHS;
    use crate::provider::StringTableProvider;

    #[test]
    fn every_sized_resource_is_a_table_key() {
        for (resource, _) in TABLE_LENGTHS {
            assert!(TableKey::from_resource(resource).is_some(), "{}", resource);
        }
    }

    #[test]
    fn provider_follows_the_shared_lengths() {
        let provider = fixture_provider();
        let rsefrlg = provider.table(TableKey::RsefrlgMet.resource(), Lang::En).unwrap();
        assert_eq!(rsefrlg.len(), 256);
        let natures = provider.table(TableKey::Natures.resource(), Lang::En).unwrap();
        assert_eq!(natures.len(), crate::fixture_tables::DEFAULT_TABLE_LENGTH);
        let cxd = provider.table(TableKey::CxdMet.resource(), Lang::En).unwrap();
        assert_eq!(cxd.len(), CXD_FIXTURE.len());
    }
}
