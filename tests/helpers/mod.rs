//! Test helpers module
//!
//! Shared setup for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use lingo_engine::{
    catalog::{self, CatalogFormat, CatalogIndex, DuplicatePolicy},
    services::Translator,
};

/// Parse and index a JSON catalog, panicking on failure
pub fn index(raw: &str) -> CatalogIndex {
    catalog::load(raw.as_bytes(), CatalogFormat::Json, DuplicatePolicy::Merge)
        .expect("fixture catalog should load")
}

/// A translator with `raw` already active
pub fn active_translator(raw: &str) -> Translator {
    let translator = Translator::default();
    let index = translator
        .load(raw.as_bytes())
        .expect("fixture catalog should load");
    translator.activate(index);
    translator
}

/// Same as [`active_translator`], behind an `Arc` for sharing across threads
pub fn shared_translator(raw: &str) -> Arc<Translator> {
    Arc::new(active_translator(raw))
}
