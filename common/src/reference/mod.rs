//! Reference data
//!
//! `CountryMatchingMap` is the validated ISO2 -> country record table.
//! `ReferenceData` (see `store`) is the indexed, read-only form the
//! matchers run against.

mod builtin;
pub mod store;

pub use store::{AliasEntry, HistoricalEntry, NameEntry, PatternEntry, PatternSource, ReferenceData, RegionEntry};

use crate::error::{Error, Result};
use crate::normalizer::normalize_place;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

/// Closed year interval `[start, end]`, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange(pub i32, pub i32);

impl YearRange {
    pub fn start(&self) -> i32 {
        self.0
    }

    pub fn end(&self) -> i32 {
        self.1
    }

    pub fn contains(&self, year: i32) -> bool {
        self.0 <= year && year <= self.1
    }
}

/// Per-country record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryMatchingData {
    pub canonical: String,
    #[serde(default)]
    pub iso3: String,
    /// Earlier entries are considered more specific
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub historical_names: BTreeMap<String, YearRange>,
}

/// Validated ISO2 -> `CountryMatchingData` table, iterated in ISO2 order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CountryMatchingMap {
    countries: BTreeMap<String, CountryMatchingData>,
}

impl CountryMatchingMap {
    /// Build from `(iso2, record)` pairs, rejecting duplicates and malformed records.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, CountryMatchingData)>,
    {
        let mut countries = BTreeMap::new();

        for (raw_key, mut data) in entries {
            let iso2 = raw_key.trim().to_ascii_uppercase();
            if iso2.len() != 2 || !iso2.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(Error::Configuration(format!(
                    "invalid ISO2 code '{}'",
                    raw_key
                )));
            }

            data.iso3 = data.iso3.trim().to_ascii_uppercase();
            if countries.contains_key(&iso2) {
                return Err(Error::Configuration(format!(
                    "duplicate ISO2 key '{}'",
                    iso2
                )));
            }
            countries.insert(iso2, data);
        }

        let map = Self { countries };
        map.validate()?;
        Ok(map)
    }

    /// Object keyed by ISO2; duplicate keys in the text are reported, not collapsed.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: OrderedEntries = serde_json::from_str(json)?;
        Self::from_entries(entries.0)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Bundled table of the countries most common in genealogical records.
    pub fn builtin() -> Result<Self> {
        Self::from_entries(builtin::builtin_entries())
    }

    pub fn get(&self, iso2: &str) -> Option<&CountryMatchingData> {
        self.countries.get(&iso2.to_ascii_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CountryMatchingData)> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    fn validate(&self) -> Result<()> {
        // normalized canonical -> owning ISO2
        let mut canonicals: HashMap<String, &str> = HashMap::new();

        for (iso2, data) in &self.countries {
            let canonical = normalize_place(&data.canonical);
            if canonical.is_empty() {
                return Err(Error::Configuration(format!(
                    "{}: canonical name is empty",
                    iso2
                )));
            }
            canonicals.entry(canonical).or_insert(iso2.as_str());

            if !data.iso3.is_empty()
                && (data.iso3.len() != 3 || !data.iso3.chars().all(|c| c.is_ascii_alphabetic()))
            {
                return Err(Error::Configuration(format!(
                    "{}: invalid ISO3 code '{}'",
                    iso2, data.iso3
                )));
            }

            for (name, range) in &data.historical_names {
                if range.start() > range.end() {
                    return Err(Error::Configuration(format!(
                        "{}: historical name '{}' has start {} after end {}",
                        iso2,
                        name,
                        range.start(),
                        range.end()
                    )));
                }
                if normalize_place(name).is_empty() {
                    return Err(Error::Configuration(format!(
                        "{}: empty historical name",
                        iso2
                    )));
                }
            }

            for region in &data.regions {
                if normalize_place(region).is_empty() {
                    return Err(Error::Configuration(format!("{}: empty region tag", iso2)));
                }
            }
        }

        for (iso2, data) in &self.countries {
            let literals = data
                .aliases
                .iter()
                .map(|a| ("alias", a))
                .chain(data.patterns.iter().map(|p| ("pattern", p)));

            for (kind, literal) in literals {
                let key = normalize_place(literal);
                if key.is_empty() {
                    return Err(Error::Configuration(format!("{}: empty {}", iso2, kind)));
                }
                if let Some(owner) = canonicals.get(&key) {
                    if *owner != iso2.as_str() {
                        return Err(Error::Configuration(format!(
                            "{}: {} '{}' collides with the canonical name of {}",
                            iso2, kind, literal, owner
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

/// JSON object entries in document order, duplicates included.
struct OrderedEntries(Vec<(String, CountryMatchingData)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by ISO2 country code")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, CountryMatchingData>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(canonical: &str) -> CountryMatchingData {
        CountryMatchingData {
            canonical: canonical.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "DE": {
                "canonical": "Germany",
                "iso3": "DEU",
                "aliases": ["Deutschland"],
                "patterns": ["bavaria"],
                "regions": ["Central Europe"],
                "historicalNames": { "Prussia": [1701, 1918] }
            },
            "ie": { "canonical": "Ireland", "iso3": "irl", "patterns": ["cork"] }
        }"#;
        let map = CountryMatchingMap::from_json(json).unwrap();
        assert_eq!(map.len(), 2);

        let ie = map.get("IE").unwrap();
        assert_eq!(ie.iso3, "IRL");

        let de = map.get("de").unwrap();
        assert_eq!(de.historical_names["Prussia"], YearRange(1701, 1918));
        assert!(de.historical_names["Prussia"].contains(1850));
        assert!(!de.historical_names["Prussia"].contains(1919));
    }

    #[test]
    fn test_duplicate_iso2_in_json() {
        let json = r#"{
            "FR": { "canonical": "France" },
            "FR": { "canonical": "Francia" }
        }"#;
        let err = CountryMatchingMap::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate ISO2 key 'FR'"));
    }

    #[test]
    fn test_duplicate_iso2_case_insensitive() {
        let entries = vec![
            ("fr".to_string(), country("France")),
            ("FR".to_string(), country("France")),
        ];
        assert!(CountryMatchingMap::from_entries(entries).is_err());
    }

    #[test]
    fn test_reject_inverted_year_range() {
        let mut de = country("Germany");
        de.historical_names.insert("Prussia".to_string(), YearRange(1918, 1701));
        let err = CountryMatchingMap::from_entries(vec![("DE".to_string(), de)]).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("Prussia"));
    }

    #[test]
    fn test_reject_invalid_codes() {
        let err = CountryMatchingMap::from_entries(vec![("DEU".to_string(), country("Germany"))])
            .unwrap_err();
        assert!(err.to_string().contains("invalid ISO2"));

        let mut de = country("Germany");
        de.iso3 = "DE".to_string();
        let err = CountryMatchingMap::from_entries(vec![("DE".to_string(), de)]).unwrap_err();
        assert!(err.to_string().contains("invalid ISO3"));
    }

    #[test]
    fn test_reject_alias_colliding_with_other_canonical() {
        let mut nl = country("Netherlands");
        nl.aliases.push("Belgium".to_string());
        let entries = vec![
            ("BE".to_string(), country("Belgium")),
            ("NL".to_string(), nl),
        ];
        let err = CountryMatchingMap::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("collides"));
    }

    #[test]
    fn test_reject_empty_canonical() {
        let err = CountryMatchingMap::from_entries(vec![("XX".to_string(), country(" , "))])
            .unwrap_err();
        assert!(err.to_string().contains("canonical name is empty"));
    }

    #[test]
    fn test_builtin_is_valid() {
        let map = CountryMatchingMap::builtin().unwrap();
        assert!(map.len() > 40);
        let de = map.get("DE").unwrap();
        assert_eq!(de.canonical, "Germany");
        assert!(de.historical_names.contains_key("Prussia"));
        assert!(map.get("IE").unwrap().patterns.iter().any(|p| p == "Cork"));
    }

    #[test]
    fn test_serialize_roundtrip_preserves_order() {
        let map = CountryMatchingMap::builtin().unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let reloaded = CountryMatchingMap::from_json(&json).unwrap();
        assert_eq!(map, reloaded);
    }
}
