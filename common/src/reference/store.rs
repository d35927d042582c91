//! Reference Data Store
//!
//! Built once from a validated `CountryMatchingMap`. All lookup keys are
//! normalized here so the matchers only ever compare normalized strings.
//! Immutable after construction; share it behind an `Arc`.

use super::{CountryMatchingMap, YearRange};
use crate::normalizer::{normalize_place, token_key};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Alias-tier lookup hit.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub iso2: String,
    pub literal: String,
    /// Position in the country's alias list; historical names follow the aliases
    pub position: usize,
    pub historical: bool,
}

/// Where a token pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSource {
    Pattern,
    Historical,
}

impl PatternSource {
    pub fn label(&self) -> &'static str {
        match self {
            PatternSource::Pattern => "pattern",
            PatternSource::Historical => "historical name",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub iso2: String,
    /// Token key of the literal
    pub key: String,
    pub literal: String,
    pub position: usize,
    pub source: PatternSource,
}

/// One region tag and every country carrying it.
#[derive(Debug, Clone)]
pub struct RegionEntry {
    pub key: String,
    pub literal: String,
    /// ISO2 codes in lexical order
    pub members: Vec<String>,
}

/// Fuzzy scan target.
#[derive(Debug, Clone)]
pub struct NameEntry {
    pub iso2: String,
    pub normalized: String,
    pub literal: String,
    pub char_len: usize,
}

#[derive(Debug, Clone)]
pub struct HistoricalEntry {
    /// Token key of the historical name
    pub key: String,
    pub literal: String,
    pub range: YearRange,
}

/// Indexed, read-only view of the reference data.
#[derive(Debug)]
pub struct ReferenceData {
    map: CountryMatchingMap,
    canonical_index: HashMap<String, Vec<String>>,
    alias_index: HashMap<String, Vec<AliasEntry>>,
    patterns: Vec<PatternEntry>,
    regions: Vec<RegionEntry>,
    fuzzy_names: Vec<NameEntry>,
    historical: HashMap<String, Vec<HistoricalEntry>>,
}

impl ReferenceData {
    pub fn new(map: CountryMatchingMap) -> Self {
        let mut canonical_index: HashMap<String, Vec<String>> = HashMap::new();
        let mut alias_index: HashMap<String, Vec<AliasEntry>> = HashMap::new();
        let mut patterns = Vec::new();
        let mut regions: BTreeMap<String, RegionEntry> = BTreeMap::new();
        let mut fuzzy_names = Vec::new();
        let mut historical: HashMap<String, Vec<HistoricalEntry>> = HashMap::new();

        // BTreeMap iteration keeps every per-key list in ISO2 order
        for (iso2, data) in map.iter() {
            canonical_index
                .entry(normalize_place(&data.canonical))
                .or_default()
                .push(iso2.clone());

            for (position, alias) in data.aliases.iter().enumerate() {
                alias_index
                    .entry(normalize_place(alias))
                    .or_default()
                    .push(AliasEntry {
                        iso2: iso2.clone(),
                        literal: alias.clone(),
                        position,
                        historical: false,
                    });
            }

            let offset = data.aliases.len();
            for (i, (name, range)) in data.historical_names.iter().enumerate() {
                alias_index
                    .entry(normalize_place(name))
                    .or_default()
                    .push(AliasEntry {
                        iso2: iso2.clone(),
                        literal: name.clone(),
                        position: offset + i,
                        historical: true,
                    });
                historical.entry(iso2.clone()).or_default().push(HistoricalEntry {
                    key: token_key(&normalize_place(name)),
                    literal: name.clone(),
                    range: *range,
                });
            }

            // Patterns and historical names only; canonical names and aliases
            // would shadow region tags ("South America" vs "America").
            // First source wins when the same token key appears twice for one country.
            let mut seen: HashSet<String> = HashSet::new();
            let sources = data
                .patterns
                .iter()
                .map(|p| (PatternSource::Pattern, p))
                .chain(data.historical_names.keys().map(|h| (PatternSource::Historical, h)));
            for (position, (source, literal)) in sources.enumerate() {
                let key = token_key(&normalize_place(literal));
                if key.is_empty() || !seen.insert(key.clone()) {
                    continue;
                }
                patterns.push(PatternEntry {
                    iso2: iso2.clone(),
                    key,
                    literal: literal.clone(),
                    position,
                    source,
                });
            }

            for region in &data.regions {
                let key = token_key(&normalize_place(region));
                let entry = regions.entry(key.clone()).or_insert_with(|| RegionEntry {
                    key,
                    literal: region.clone(),
                    members: Vec::new(),
                });
                if !entry.members.contains(iso2) {
                    entry.members.push(iso2.clone());
                }
            }

            let names = std::iter::once(&data.canonical)
                .chain(data.aliases.iter())
                .chain(data.historical_names.keys());
            for literal in names {
                let normalized = normalize_place(literal);
                fuzzy_names.push(NameEntry {
                    iso2: iso2.clone(),
                    char_len: normalized.chars().count(),
                    normalized,
                    literal: literal.clone(),
                });
            }
        }

        tracing::debug!(
            countries = map.len(),
            aliases = alias_index.len(),
            patterns = patterns.len(),
            regions = regions.len(),
            fuzzy_names = fuzzy_names.len(),
            "reference data indexed"
        );

        Self {
            map,
            canonical_index,
            alias_index,
            patterns,
            regions: regions.into_values().collect(),
            fuzzy_names,
            historical,
        }
    }

    pub fn map(&self) -> &CountryMatchingMap {
        &self.map
    }

    pub fn country_count(&self) -> usize {
        self.map.len()
    }

    /// ISO2 codes whose canonical name normalizes to `key`, in lexical order.
    pub fn canonical_matches(&self, key: &str) -> &[String] {
        self.canonical_index
            .get(key)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn alias_matches(&self, key: &str) -> &[AliasEntry] {
        self.alias_index
            .get(key)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn patterns(&self) -> &[PatternEntry] {
        &self.patterns
    }

    pub fn regions(&self) -> &[RegionEntry] {
        &self.regions
    }

    pub fn fuzzy_names(&self) -> &[NameEntry] {
        &self.fuzzy_names
    }

    pub fn historical_names(&self, iso2: &str) -> &[HistoricalEntry] {
        self.historical
            .get(iso2)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
