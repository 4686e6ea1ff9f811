use crate::models::{CountryData, Language, LocalizedNames};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of countries on one continent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContinentCount {
    /// Continent name in all five languages (from the first country seen).
    pub continent: LocalizedNames,
    pub count: usize,
}

impl ContinentCount {
    pub fn label(&self, lang: Language) -> &str {
        self.continent.get(lang)
    }
}

/// Count countries per continent (English name), most populous first.
///
/// Ties are ordered by English name.
pub fn continent_counts(countries: &[CountryData]) -> Vec<ContinentCount> {
    let mut groups: BTreeMap<&str, ContinentCount> = BTreeMap::new();
    for c in countries {
        let names = &c.regions.continent;
        groups
            .entry(names.english.as_str())
            .or_insert_with(|| ContinentCount {
                continent: names.clone(),
                count: 0,
            })
            .count += 1;
    }

    let mut out: Vec<ContinentCount> = groups.into_values().collect();
    // stable: BTreeMap already yields English-name order
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// The `n` largest continents.
pub fn top_continents(countries: &[CountryData], n: usize) -> Vec<ContinentCount> {
    let mut out = continent_counts(countries);
    out.truncate(n);
    out
}
