//! Data models module
//!
//! This module contains the catalog data structures shared by the parser,
//! index, resolver and merge step.

pub mod catalog;
pub mod message;

// Re-export commonly used models
pub use catalog::{Catalog, CatalogStats, Context, ContextStats, StatusCounts, CURRENT_VERSION};
pub use message::{Location, Message, MessageKey, Status, Translation};
