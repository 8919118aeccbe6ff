/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use credit_core::{KnownLocales, RoleVocabulary, VocabularyError, VocabularyLoader};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONCEPTUALIZATION: &str = "https://credit.niso.org/contributor-roles/conceptualization/";

fn bundled_resources() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../resources")
}

fn bundled_loader() -> VocabularyLoader {
    VocabularyLoader::new(
        bundled_resources(),
        KnownLocales::new(["de", "fr", "es", "pt-BR"], "en"),
    )
}

#[test]
fn known_locale_returns_unique_non_empty_mapping() {
    let vocabulary = bundled_loader().load("en").expect("bundled English vocabulary");
    assert_eq!(vocabulary.locale(), "en");
    assert_eq!(vocabulary.len(), 14);

    let uris: HashSet<_> = vocabulary.iter().map(|r| r.uri.clone()).collect();
    assert_eq!(uris.len(), vocabulary.len());
    assert_eq!(vocabulary.label(CONCEPTUALIZATION), Some("Conceptualization"));
}

#[test]
fn json_is_preferred_and_xml_is_accepted() {
    let loader = bundled_loader();
    let french = loader.load("fr").unwrap();
    assert_eq!(french.locale(), "fr");
    assert_eq!(french.label(CONCEPTUALIZATION), Some("Conceptualisation"));

    let german = loader.load("de_DE").unwrap();
    assert_eq!(german.locale(), "de");
    assert_eq!(german.label(CONCEPTUALIZATION), Some("Konzeptualisierung"));
}

#[test]
fn unsupported_locale_matches_default_locale() {
    let loader = bundled_loader();
    let default = loader.load("en").unwrap();
    assert_eq!(loader.load("xx").unwrap(), default);
    assert_eq!(loader.load("not a locale").unwrap(), default);
    // Supported, but no resource of its own.
    assert_eq!(loader.load("es").unwrap(), default);
}

#[test]
fn schematron_table_is_the_last_resort() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("jats-schematrons")).unwrap();
    fs::copy(
        bundled_resources().join("jats-schematrons/credit-roles.xml"),
        dir.path().join("jats-schematrons/credit-roles.xml"),
    )
    .unwrap();

    let loader = VocabularyLoader::new(dir.path(), KnownLocales::default());
    let vocabulary = loader.load("fr").unwrap();
    assert_eq!(vocabulary.locale(), "en");
    // The schematron table lists the older http URIs.
    assert_eq!(
        vocabulary.label("http://credit.niso.org/contributor-roles/conceptualization/"),
        vocabulary.label(CONCEPTUALIZATION)
    );
    assert_eq!(vocabulary.label(CONCEPTUALIZATION), Some("Conceptualization"));
}

#[test]
fn missing_resources_fail_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let loader = VocabularyLoader::new(dir.path(), KnownLocales::default());
    match loader.load("en") {
        Err(VocabularyError::NotFound { locale, searched }) => {
            assert_eq!(locale, "en");
            assert_eq!(searched.len(), 3);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn broken_resource_is_an_error_not_a_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let translations = dir.path().join("translations");
    fs::create_dir_all(&translations).unwrap();
    fs::write(translations.join("credit-roles-de.json"), "{ not json").unwrap();
    fs::write(
        translations.join("credit-roles-en.xml"),
        r#"<credit-roles><item uri="r1" term="One"/></credit-roles>"#,
    )
    .unwrap();

    let loader = VocabularyLoader::new(dir.path(), KnownLocales::new(["de"], "en"));
    assert!(matches!(loader.load("de"), Err(VocabularyError::Json(_))));
    assert_eq!(loader.load("en").unwrap().label("r1"), Some("One"));
}

#[test]
fn empty_resource_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credit-roles-en.json");
    fs::write(&path, r#"{"translations": {}}"#).unwrap();
    assert!(matches!(
        RoleVocabulary::from_file("en", &path),
        Err(VocabularyError::Empty(_))
    ));
}
