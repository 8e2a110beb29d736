//! Loading and indexing the sample catalog

mod fixtures;
mod helpers;

use assert_matches::assert_matches;

use fixtures::*;
use helpers::*;
use lingo_engine::{
    catalog::{self, parse, CatalogFormat, CatalogIndex, DuplicatePolicy},
    utils::errors::{IndexError, ParseErrorKind},
    LingoError, Status,
};

#[test]
fn test_index_keeps_every_message() {
    let catalog = parse(FRENCH_CATALOG.as_bytes()).unwrap();
    let index = CatalogIndex::build(catalog.clone(), DuplicatePolicy::Reject).unwrap();

    assert_eq!(index.len(), catalog.message_count());
    for (context, message) in catalog.messages() {
        let found = index
            .get(context, &message.source, message.disambiguator.as_deref())
            .unwrap();
        assert_eq!(found.translation, message.translation);
        assert_eq!(found.status, message.status);
    }
}

#[test]
fn test_sample_catalog_stats() {
    let stats = index(FRENCH_CATALOG).catalog().stats();
    assert_eq!(stats.locale, "fr_FR");
    assert_eq!(stats.total.finished, 10);
    assert_eq!(stats.total.unfinished, 4);
    assert_eq!(stats.total.obsolete, 0);
    assert_eq!(stats.contexts.len(), 4);
}

#[test]
fn test_statuses_survive_parsing() {
    let index = index(FRENCH_CATALOG);
    assert_eq!(index.get("Property", "Sex", None).unwrap().status, Status::Finished);
    assert_eq!(index.get("Property", "Children", None).unwrap().status, Status::Unfinished);
}

#[test]
fn test_duplicates_follow_policy() {
    let raw = r#"{
        "version": "2.1",
        "language": "fr_FR",
        "contexts": [
            {"name": "Constant", "messages": [{"source": "Male", "translation": "Homme"}]},
            {"name": "Constant", "messages": [{"source": "Male", "translation": "Homme"}]}
        ]
    }"#;

    let merged = catalog::load(raw.as_bytes(), CatalogFormat::Json, DuplicatePolicy::Merge).unwrap();
    assert_eq!(merged.len(), 1);

    assert_matches!(
        catalog::load(raw.as_bytes(), CatalogFormat::Json, DuplicatePolicy::Reject),
        Err(LingoError::Index(IndexError::Duplicate { .. }))
    );
}

#[test]
fn test_utf8_bom_is_accepted() {
    let mut raw = vec![0xEF, 0xBB, 0xBF];
    raw.extend_from_slice(GERMAN_CATALOG.as_bytes());
    assert_eq!(parse(&raw).unwrap().locale, "de_DE");
}

#[test]
fn test_utf16_is_rejected() {
    let raw = [0xFF, 0xFE, b'{', 0x00];
    let error = parse(&raw).unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::EncodingError);
}

#[test]
fn test_ts_catalog_matches_json() {
    let from_ts = catalog::parse_with(FRENCH_TS.as_bytes(), CatalogFormat::Ts).unwrap();
    let from_json = parse(FRENCH_CATALOG.as_bytes()).unwrap();
    assert_eq!(from_ts, from_json);
}

#[test]
fn test_ts_catalog_resolves() {
    let translator = lingo_engine::Translator::builder()
        .format(CatalogFormat::Ts)
        .build();
    let index = translator.load(FRENCH_TS.as_bytes()).unwrap();
    translator.activate(index);

    assert_eq!(translator.resolve("Constant", "Male", None, &[], None), "Homme");
    assert_eq!(translator.resolve("ElementType", "Element", None, &[], None), "Élément");
    assert_eq!(translator.resolve("Property", "Parents", None, &[], None), "Parents");
}
