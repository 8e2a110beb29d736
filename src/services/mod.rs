//! Services module
//!
//! Runtime services built on top of the catalog and resolver layers.

pub mod translator;

// Re-export commonly used services
pub use translator::{Translator, TranslatorBuilder};
