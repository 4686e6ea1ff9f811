use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The five languages every output record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    German,
    English,
    French,
    Italian,
    Spanish,
}

impl Language {
    /// All languages in output field order.
    pub const ALL: [Language; 5] = [
        Language::German,
        Language::English,
        Language::French,
        Language::Italian,
        Language::Spanish,
    ];

    /// ISO 639-1 tag (`de`, `en`, ...).
    pub fn tag(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Spanish => "es",
        }
    }

    /// Map a user-provided tag to a language.
    ///
    /// Accepted (case-insensitive): `de`, `de_de`, `deu`, `german`, and the
    /// equivalents for the other languages. Anything else is English.
    pub fn from_tag(tag: &str) -> Language {
        match tag.trim().to_lowercase().replace('-', "_").as_str() {
            "de" | "de_de" | "de_at" | "de_ch" | "deu" | "german" | "deutsch" => Language::German,
            "fr" | "fr_fr" | "fr_ch" | "fra" | "french" | "francais" => Language::French,
            "it" | "it_it" | "it_ch" | "ita" | "italian" | "italiano" => Language::Italian,
            "es" | "es_es" | "spa" | "spanish" | "espanol" => Language::Spanish,
            _ => Language::English, // default
        }
    }
}

/// Serde helper: decode a field, or treat it as absent when it has the wrong shape.
///
/// The upstream API is not versioned strictly; a single odd field must not
/// fail the whole array.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `name` object of a source record (also used per translation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiName {
    #[serde(default, deserialize_with = "lenient")]
    pub common: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub official: Option<String>,
}

/// The subset of the `translations` map this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiTranslations {
    #[serde(default, deserialize_with = "lenient")]
    pub deu: Option<ApiName>,
    #[serde(default, deserialize_with = "lenient")]
    pub fra: Option<ApiName>,
    #[serde(default, deserialize_with = "lenient")]
    pub ita: Option<ApiName>,
    #[serde(default, deserialize_with = "lenient")]
    pub spa: Option<ApiName>,
}

impl ApiTranslations {
    /// Common name for `lang`, if the API sent one. English is not part of
    /// the translations map and always yields `None`.
    pub fn common(&self, lang: Language) -> Option<&str> {
        let name = match lang {
            Language::German => self.deu.as_ref(),
            Language::French => self.fra.as_ref(),
            Language::Italian => self.ita.as_ref(),
            Language::Spanish => self.spa.as_ref(),
            Language::English => None,
        };
        name.and_then(|n| n.common.as_deref())
    }
}

/// International dialing descriptor, e.g. root `"+4"` and suffixes `["9"]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiIdd {
    #[serde(default, deserialize_with = "lenient")]
    pub root: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub suffixes: Option<Vec<String>>,
}

/// Raw country record as returned by `restcountries.com/v3.1/all`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiCountry {
    #[serde(default, deserialize_with = "lenient")]
    pub cca2: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub flag: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<ApiName>,
    #[serde(default, deserialize_with = "lenient")]
    pub translations: Option<ApiTranslations>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub continents: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub idd: Option<ApiIdd>,
}

impl ApiCountry {
    /// English common name, if present.
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.common.as_deref())
    }
}

/// A string in each of the five output languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedNames {
    pub german: String,
    pub english: String,
    pub french: String,
    pub italian: String,
    pub spanish: String,
}

impl LocalizedNames {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::German => &self.german,
            Language::English => &self.english,
            Language::French => &self.french,
            Language::Italian => &self.italian,
            Language::Spanish => &self.spanish,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRegions {
    pub continent: LocalizedNames,
    pub region: LocalizedNames,
    pub sub_region: LocalizedNames,
}

/// Output record, one per country in `countries.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryData {
    pub code: String,
    pub flag: String,
    pub phone_code: String,
    pub names: LocalizedNames,
    pub regions: CountryRegions,
}
