//! End-to-end resolution tests against the sample French catalog

mod fixtures;
mod helpers;

use assert_matches::assert_matches;

use fixtures::*;
use helpers::*;
use lingo_engine::{
    resolver::{FallbackReason, TextOrigin},
    utils::errors::SubstitutionError,
    Arg, LingoError, MissingArgument, ResolutionPolicy, Translator,
};

#[test]
fn test_finished_translation() {
    let translator = active_translator(PARTNER_UNFINISHED);
    assert_eq!(translator.resolve("Constant", "Male", None, &[], None), "Homme");
}

#[test]
fn test_unfinished_empty_translation_falls_back() {
    let translator = active_translator(PARTNER_UNFINISHED);
    assert_eq!(translator.resolve("Property", "Partner", None, &[], None), "Partner");

    let preview = ResolutionPolicy::preview();
    let resolved = translator.resolve_detailed("Property", "Partner", None, &[], Some(&preview));
    assert_eq!(resolved.text, "Partner");
    assert_eq!(resolved.origin, TextOrigin::Fallback(FallbackReason::EmptyDraft));
}

#[test]
fn test_sample_catalog() {
    let translator = active_translator(FRENCH_CATALOG);

    assert_eq!(translator.resolve("ElementType", "Element", None, &[], None), "Élément");
    assert_eq!(translator.resolve("Property", "Age", None, &[], None), "Âge");
    assert_eq!(translator.resolve("Property", "Date and Time", None, &[], None), "Date et Heure");
    assert_eq!(translator.resolve("Property", "Parents", None, &[], None), "Parents");
    assert_eq!(translator.resolve("Property", "Children", None, &[], None), "Children");
    assert_eq!(translator.diagnostics().miss_count, 0);
}

#[test]
fn test_same_source_in_different_contexts() {
    let translator = active_translator(FRENCH_CATALOG);
    assert_eq!(translator.resolve("ElementType", "Meeting", None, &[], None), "Rendez-vous");
    assert_eq!(translator.resolve("Constant", "Meeting", None, &[], None), "Meeting");
}

#[test]
fn test_substitution_reorders_arguments() {
    let translator = active_translator(FRENCH_CATALOG);
    let args = [Arg::from(34), Arg::from("Homme")];

    assert_eq!(
        translator.resolve("QObject", " is a %1 year old %2", None, &args, None),
        " is a 34 year old Homme"
    );
    assert_eq!(
        translator.resolve(
            "QObject",
            " is a %1 year old %2",
            None,
            &args,
            Some(&ResolutionPolicy::preview())
        ),
        " est un Homme de 34 ans"
    );
}

#[test]
fn test_missing_argument_policies() {
    let translator = active_translator(FRENCH_CATALOG);
    let args = [Arg::from(34)];
    let empty = ResolutionPolicy::preview().with_missing_argument(MissingArgument::Empty);
    let strict = ResolutionPolicy::preview().with_missing_argument(MissingArgument::Error);

    assert_eq!(
        translator.resolve("QObject", " is a %1 year old %2", None, &args, Some(&empty)),
        " est un  de 34 ans"
    );
    assert_matches!(
        translator.try_resolve("QObject", " is a %1 year old %2", None, &args, Some(&strict)),
        Err(SubstitutionError::MissingArgument { index: 2, .. })
    );
    assert_eq!(translator.diagnostics().substitution_error_count, 2);
}

#[test]
fn test_detailed_result_respects_lenient_policy() {
    let translator = active_translator(FRENCH_CATALOG);
    let args = [Arg::from(34)];
    let preview = ResolutionPolicy::preview();

    let resolved =
        translator.resolve_detailed("QObject", " is a %1 year old %2", None, &args, Some(&preview));
    assert_eq!(resolved.substitution_errors.len(), 1);
    assert_eq!(resolved.into_result(), Ok(" est un %2 de 34 ans".to_string()));
}

#[test]
fn test_plural_selection() {
    let translator = active_translator(POLISH_PLURALS);
    let resolve = |count: u64| {
        translator.resolve("Calendar", "%1 meeting(s)", None, &[Arg::from(count)], None)
    };

    assert_eq!(resolve(1), "1 spotkanie");
    assert_eq!(resolve(3), "3 spotkania");
    assert_eq!(resolve(5), "5 spotkań");
    assert_eq!(resolve(22), "22 spotkania");
    assert_eq!(translator.diagnostics().plural_fallback_count, 0);
}

#[test]
fn test_toml_catalog() {
    let translator = Translator::builder()
        .format(lingo_engine::CatalogFormat::Toml)
        .build();
    let index = translator.load(FRENCH_TOML.as_bytes()).unwrap();
    translator.activate(index);

    assert_eq!(translator.resolve("Constant", "Female", None, &[], None), "Femme");
}

#[test]
fn test_invalid_catalog_is_rejected() {
    let translator = Translator::default();
    let raw = r#"{"version": "3.0", "language": "fr_FR", "contexts": []}"#;
    assert_matches!(translator.load(raw.as_bytes()), Err(LingoError::Parse(_)));
    assert!(translator.active_locale().is_none());
}

#[test]
fn test_missing_messages_are_counted() {
    let translator = active_translator(FRENCH_CATALOG);
    translator.resolve("Property", "Weight", None, &[], None);
    translator.resolve("Nowhere", "Male", None, &[], None);

    let snapshot = translator.reset_diagnostics();
    assert_eq!(snapshot.miss_count, 2);
    assert_eq!(translator.diagnostics().miss_count, 0);
}
