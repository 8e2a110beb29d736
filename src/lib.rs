//! Lingo Engine
//!
//! A runtime engine for translation catalogs: parse a catalog document,
//! index it by `(context, source, disambiguator)`, and resolve display text
//! with plural selection, `%N` argument substitution and source-text
//! fallback. The merge module keeps catalogs in sync with the strings an
//! application currently uses.

pub mod catalog;
pub mod config;
pub mod models;
pub mod resolver;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LingoError, Result};

// Re-export main components for easy access
pub use catalog::{CatalogFormat, CatalogIndex, DuplicatePolicy, MergeOutcome, MergeReport};
pub use models::{Catalog, Context, Message, MessageKey, Status, Translation};
pub use resolver::{Arg, MissingArgument, ResolutionPolicy, ResolvedText};
pub use services::Translator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
