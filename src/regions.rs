//! Static translations for the continent, region and subregion names the
//! REST Countries API uses.
//!
//! Keys are the exact English strings sent by the API (case-sensitive).
//! Names missing from the table are passed through untranslated.

use crate::models::{Language, LocalizedNames};
use std::collections::HashMap;
use std::sync::LazyLock;

/// German, French, Italian and Spanish rendering of one English region name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionTranslation {
    pub german: &'static str,
    pub french: &'static str,
    pub italian: &'static str,
    pub spanish: &'static str,
}

impl RegionTranslation {
    /// `None` for English, which is the key itself.
    pub fn get(&self, lang: Language) -> Option<&'static str> {
        match lang {
            Language::German => Some(self.german),
            Language::French => Some(self.french),
            Language::Italian => Some(self.italian),
            Language::Spanish => Some(self.spanish),
            Language::English => None,
        }
    }
}

// (english, german, french, italian, spanish)
const TABLE: &[(&str, &str, &str, &str, &str)] = &[
    ("Europe", "Europa", "Europe", "Europa", "Europa"),
    ("Asia", "Asien", "Asie", "Asia", "Asia"),
    ("Africa", "Afrika", "Afrique", "Africa", "África"),
    ("North America", "Nordamerika", "Amérique du Nord", "Nord America", "América del Norte"),
    ("South America", "Südamerika", "Amérique du Sud", "Sud America", "América del Sur"),
    ("Oceania", "Ozeanien", "Océanie", "Oceania", "Oceanía"),
    ("Antarctica", "Antarktis", "Antarctique", "Antartide", "Antártida"),
    ("Western Europe", "Westeuropa", "Europe occidentale", "Europa occidentale", "Europa occidental"),
    ("Northern Europe", "Nordeuropa", "Europe du Nord", "Europa settentrionale", "Europa del Norte"),
    ("Southern Europe", "Südeuropa", "Europe du Sud", "Europa meridionale", "Europa del Sur"),
    ("Eastern Europe", "Osteuropa", "Europe de l'Est", "Europa orientale", "Europa Oriental"),
    ("Central Europe", "Mitteleuropa", "Europe centrale", "Europa centrale", "Europa central"),
    ("Southeast Europe", "Südosteuropa", "Europe du Sud-Est", "Europa sud-orientale", "Europa Sudoriental"),
    ("Eastern Asia", "Ostasien", "Asie de l'Est", "Asia orientale", "Asia Oriental"),
    ("South-Eastern Asia", "Südostasien", "Asie du Sud-Est", "Asia sud-orientale", "Sudeste Asiático"),
    ("Southern Asia", "Südasien", "Asie du Sud", "Asia meridionale", "Asia del Sur"),
    ("Western Asia", "Westasien", "Asie occidentale", "Asia occidentale", "Asia Occidental"),
    ("Central Asia", "Zentralasien", "Asie centrale", "Asia centrale", "Asia Central"),
    ("Caribbean", "Karibik", "Caraïbes", "Caraibi", "Caribe"),
    ("Central America", "Mittelamerika", "Amérique centrale", "America centrale", "América Central"),
    ("Northern America", "Nordamerika", "Amérique du Nord", "America settentrionale", "América del Norte"),
];

static REGION_TRANSLATIONS: LazyLock<HashMap<&'static str, RegionTranslation>> =
    LazyLock::new(|| {
        TABLE
            .iter()
            .map(|&(en, german, french, italian, spanish)| {
                (
                    en,
                    RegionTranslation {
                        german,
                        french,
                        italian,
                        spanish,
                    },
                )
            })
            .collect()
    });

/// Look up the translations for an English region/continent name.
pub fn lookup(english: &str) -> Option<&'static RegionTranslation> {
    REGION_TRANSLATIONS.get(english)
}

/// Translate `english` into `lang`, falling back to `english` itself.
pub fn translate_region(english: &str, lang: Language) -> &str {
    lookup(english)
        .and_then(|t| t.get(lang))
        .unwrap_or(english)
}

/// All five renderings of a region name.
pub fn localize_region(english: &str) -> LocalizedNames {
    LocalizedNames {
        german: translate_region(english, Language::German).to_owned(),
        english: english.to_owned(),
        french: translate_region(english, Language::French).to_owned(),
        italian: translate_region(english, Language::Italian).to_owned(),
        spanish: translate_region(english, Language::Spanish).to_owned(),
    }
}
