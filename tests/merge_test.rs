//! Merging freshly extracted strings into the sample catalog

mod fixtures;
mod helpers;

use fixtures::*;
use helpers::*;
use lingo_engine::{
    catalog::{merge, parse, serialize, ExtractedMessage},
    models::{Location, MessageKey, Status},
    CatalogFormat, Translator,
};

fn extracted() -> Vec<ExtractedMessage> {
    vec![
        ExtractedMessage::new("Constant", "Male")
            .with_location(Location::new("../Model/example/Constant.cpp", 6)),
        ExtractedMessage::new("Constant", "Female")
            .with_location(Location::new("../Model/example/Constant.cpp", 7)),
        ExtractedMessage::new("Property", "Children"),
        ExtractedMessage::new("Property", "Weight"),
        ExtractedMessage::new("Calendar", "%1 meeting(s)").plural(),
    ]
}

#[test]
fn test_merge_sample_catalog() {
    let old = index(FRENCH_CATALOG).into_catalog();
    let outcome = merge(&old, &extracted());
    let report = &outcome.report;

    assert_eq!(report.new.len(), 2);
    assert!(report.new.contains(&MessageKey::new("Property", "Weight")));
    assert!(report.new.contains(&MessageKey::new("Calendar", "%1 meeting(s)")));
    assert_eq!(report.retained.len(), 3);
    assert!(report.obsolete.contains(&MessageKey::new("Property", "Partner")));
    assert!(report.obsolete.contains(&MessageKey::new("QObject", " is a %1 year old %2")));
    assert_eq!(report.total(), old.message_count() + 2);

    let catalog = &outcome.catalog;
    let male = catalog.find(&MessageKey::new("Constant", "Male")).unwrap();
    assert_eq!(male.translation.primary(), Some("Homme"));
    assert_eq!(male.locations, vec![Location::new("../Model/example/Constant.cpp", 6)]);

    let children = catalog.find(&MessageKey::new("Property", "Children")).unwrap();
    assert_eq!(children.status, Status::Unfinished);
    assert_eq!(children.translation.primary(), Some("Enfants"));

    let partner = catalog.find(&MessageKey::new("Property", "Partner")).unwrap();
    assert_eq!(partner.status, Status::Obsolete);
    assert_eq!(partner.translation.primary(), Some("Partenaire"));

    let weight = catalog.find(&MessageKey::new("Property", "Weight")).unwrap();
    assert_eq!(weight.status, Status::Unfinished);
    assert!(weight.translation.is_empty());

    // French distinguishes one and other
    let meetings = catalog.find(&MessageKey::new("Calendar", "%1 meeting(s)")).unwrap();
    assert!(meetings.numerus());
    assert_matches::assert_matches!(
        &meetings.translation,
        lingo_engine::Translation::Plural(forms) if forms.len() == 2
    );
}

#[test]
fn test_merged_catalog_round_trips_and_resolves() {
    let old = index(FRENCH_CATALOG).into_catalog();
    let outcome = merge(&old, &extracted());

    let written = serialize(&outcome.catalog, CatalogFormat::Json).unwrap();
    let reparsed = parse(written.as_bytes()).unwrap();
    assert_eq!(reparsed, outcome.catalog);

    let translator = Translator::default();
    let index = translator.load(written.as_bytes()).unwrap();
    translator.activate(index);

    // Obsolete messages are kept in the catalog but never served
    assert_eq!(translator.resolve("Property", "Partner", None, &[], None), "Partner");
    assert_eq!(translator.resolve("Constant", "Male", None, &[], None), "Homme");
    assert_eq!(translator.resolve("Property", "Weight", None, &[], None), "Weight");
}

#[test]
fn test_merge_twice_is_stable() {
    let old = index(FRENCH_CATALOG).into_catalog();
    let first = merge(&old, &extracted());
    let second = merge(&first.catalog, &extracted());

    assert!(second.report.new.is_empty());
    assert_eq!(second.report.retained.len(), extracted().len());
    assert_eq!(second.catalog, first.catalog);
}
