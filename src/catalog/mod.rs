//! Catalog module
//!
//! Parsing, indexing and merging of translation catalogs. Loading a locale
//! is `parse` followed by `CatalogIndex::build`; merging is an offline step
//! run when the application's source strings change.

pub mod index;
pub mod merge;
pub mod parser;
mod ts;

// Re-export commonly used catalog components
pub use index::{CatalogIndex, DuplicatePolicy};
pub use merge::{merge, merge_with_rules, ExtractedMessage, MergeOutcome, MergeReport};
pub use parser::{parse, parse_with, serialize, CatalogFormat, SUPPORTED_VERSIONS};

use crate::utils::errors::Result;

/// Parse a raw catalog and build its index
pub fn load(raw: &[u8], format: CatalogFormat, duplicates: DuplicatePolicy) -> Result<CatalogIndex> {
    let catalog = parse_with(raw, format)?;
    Ok(CatalogIndex::build(catalog, duplicates)?)
}
