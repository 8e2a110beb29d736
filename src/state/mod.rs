//! State management module
//!
//! This module holds the process-wide state shared between resolutions.

pub mod active;

pub use active::ActiveCatalog;
