use country_json::models::{ApiCountry, ApiTranslations, Language, LocalizedNames};

#[test]
fn language_tags_map_like_locales() {
    assert_eq!(Language::from_tag("de"), Language::German);
    assert_eq!(Language::from_tag("de-DE"), Language::German);
    assert_eq!(Language::from_tag("GERMAN"), Language::German);
    assert_eq!(Language::from_tag("fr_FR"), Language::French);
    assert_eq!(Language::from_tag("ita"), Language::Italian);
    assert_eq!(Language::from_tag(" es "), Language::Spanish);
    assert_eq!(Language::from_tag("en"), Language::English);
    // unknown tags default to English
    assert_eq!(Language::from_tag("pt"), Language::English);
    assert_eq!(Language::from_tag(""), Language::English);
}

#[test]
fn language_codes() {
    let tags: Vec<&str> = Language::ALL.iter().map(|l| l.tag()).collect();
    assert_eq!(tags, ["de", "en", "fr", "it", "es"]);
    for lang in Language::ALL {
        assert_eq!(Language::from_tag(lang.tag()), lang);
    }
}

#[test]
fn localized_names_get_each_field() {
    let n = LocalizedNames {
        german: "de".into(),
        english: "en".into(),
        french: "fr".into(),
        italian: "it".into(),
        spanish: "es".into(),
    };
    for lang in Language::ALL {
        assert_eq!(n.get(lang), lang.tag());
    }
}

#[test]
fn translations_expose_common_names() {
    let tr: ApiTranslations = serde_json::from_str(
        r#"{"deu": {"common": "Österreich"}, "fra": {"official": "République d'Autriche"}}"#,
    )
    .unwrap();
    assert_eq!(tr.common(Language::German), Some("Österreich"));
    assert_eq!(tr.common(Language::French), None);
    assert_eq!(tr.common(Language::Italian), None);
    assert_eq!(tr.common(Language::English), None);
}

#[test]
fn empty_object_decodes_to_default() {
    let api: ApiCountry = serde_json::from_str("{}").unwrap();
    assert_eq!(api, ApiCountry::default());
    assert_eq!(api.common_name(), None);
}
