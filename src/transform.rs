//! Reshape REST Countries records into the localized output format.
//!
//! Everything here is pure: no I/O, no errors. Missing data degrades to the
//! English value or to an empty string.
//!
//! ```
//! # use country_json::models::{ApiCountry, ApiName};
//! # use country_json::transform::convert;
//! let api = ApiCountry {
//!     cca2: Some("DE".into()),
//!     name: Some(ApiName { common: Some("Germany".into()), official: None }),
//!     ..Default::default()
//! };
//! let out = convert(&api);
//! assert_eq!(out.names.italian, "Germany");
//! assert_eq!(out.flag, "\u{1F1E9}\u{1F1EA}");
//! ```
use crate::models::{ApiCountry, ApiIdd, CountryData, CountryRegions, Language, LocalizedNames};
use crate::regions::localize_region;
use deunicode::deunicode;
use std::collections::HashSet;

/// First codepoint of the regional indicator block (🇦).
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// White flag + variation selector, used when no flag can be derived.
pub const PLACEHOLDER_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// A record is usable only if it carries a non-empty `cca2` code.
pub fn has_code(api: &ApiCountry) -> bool {
    api.cca2.as_deref().is_some_and(|c| !c.is_empty())
}

/// First element of an optional list, or `fallback`.
pub fn first_or<'a>(items: Option<&'a [String]>, fallback: &'a str) -> &'a str {
    items
        .and_then(|list| list.first())
        .map(String::as_str)
        .unwrap_or(fallback)
}

/// `None` for missing or whitespace-only strings.
fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|t| !t.trim().is_empty())
}

/// Translation if usable, else the English name, else `""`.
pub fn resolve_name(translation: Option<&str>, english: Option<&str>) -> String {
    non_blank(translation)
        .or(english)
        .unwrap_or_default()
        .to_owned()
}

/// Root followed by the first suffix; `""` when there is no root.
pub fn phone_code(idd: Option<&ApiIdd>) -> String {
    let Some(root) = idd.and_then(|i| i.root.as_deref()) else {
        return String::new();
    };
    let suffix = first_or(idd.and_then(|i| i.suffixes.as_deref()), "");
    format!("{root}{suffix}")
}

/// Flag emoji built from a two-letter code via regional indicator symbols.
///
/// Lower-case letters are accepted. Anything that is not exactly two ASCII
/// letters yields [`PLACEHOLDER_FLAG`].
pub fn flag_from_code(code: &str) -> String {
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
        return PLACEHOLDER_FLAG.to_owned();
    }
    bytes
        .iter()
        .map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b.to_ascii_uppercase() - b'A')))
        .collect::<Option<String>>()
        .unwrap_or_else(|| PLACEHOLDER_FLAG.to_owned())
}

fn localized_names(api: &ApiCountry) -> LocalizedNames {
    let english = api.common_name();
    let translated = |lang: Language| {
        let t = api.translations.as_ref().and_then(|t| t.common(lang));
        resolve_name(t, english)
    };
    LocalizedNames {
        german: translated(Language::German),
        english: english.unwrap_or_default().to_owned(),
        french: translated(Language::French),
        italian: translated(Language::Italian),
        spanish: translated(Language::Spanish),
    }
}

/// Convert one source record. Callers filter with [`has_code`] first.
pub fn convert(api: &ApiCountry) -> CountryData {
    let code = api.cca2.clone().unwrap_or_default();
    let flag = match api.flag.as_deref() {
        Some(glyph) => glyph.to_owned(),
        None => flag_from_code(&code),
    };
    let continent = first_or(api.continents.as_deref(), "");
    CountryData {
        phone_code: phone_code(api.idd.as_ref()),
        names: localized_names(api),
        regions: CountryRegions {
            continent: localize_region(continent),
            region: localize_region(api.region.as_deref().unwrap_or_default()),
            sub_region: localize_region(api.subregion.as_deref().unwrap_or_default()),
        },
        code,
        flag,
    }
}

/// Accent- and case-folded form of a name: `"Åland Islands"` becomes
/// `"aland islands"`.
pub fn fold_name(name: &str) -> String {
    deunicode(name).to_lowercase()
}

/// Sort key for a record: folded English name first, raw name second, so
/// "Åland Islands" sorts next to "Albania". Records without an English
/// name get `None` and sort first.
pub fn name_sort_key(api: &ApiCountry) -> Option<(String, &str)> {
    api.common_name().map(|name| (fold_name(name), name))
}

/// Filter, sort and convert a whole API response.
///
/// Output is ordered by English common name (see [`name_sort_key`]). The
/// sort is stable.
pub fn transform_all(records: &[ApiCountry]) -> Vec<CountryData> {
    let mut kept: Vec<&ApiCountry> = records.iter().filter(|r| has_code(r)).collect();
    let dropped = records.len() - kept.len();
    if dropped > 0 {
        log::debug!("dropped {dropped} record(s) without a country code");
    }
    kept.sort_by_cached_key(|&r| name_sort_key(r));

    let mut seen = HashSet::new();
    for r in &kept {
        if let Some(code) = r.cca2.as_deref()
            && !seen.insert(code)
        {
            log::warn!("duplicate country code {code}");
        }
    }

    kept.into_iter().map(convert).collect()
}
