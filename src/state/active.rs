//! Active catalog handle
//!
//! Holds the catalog every `resolve` call reads from. Readers take a
//! snapshot (`Arc`) at call start and finish against it even if the catalog
//! is replaced meanwhile; replacement is a single atomic pointer store, so
//! readers never block and never observe a mix of two catalogs.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::catalog::CatalogIndex;

/// Swappable reference to the currently active catalog
#[derive(Debug, Default)]
pub struct ActiveCatalog {
    current: ArcSwapOption<CatalogIndex>,
}

impl ActiveCatalog {
    /// An empty handle; lookups fall back to source text until the first swap
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::const_empty(),
        }
    }

    /// The catalog visible right now
    pub fn snapshot(&self) -> Option<Arc<CatalogIndex>> {
        self.current.load_full()
    }

    /// Make `catalog` visible to subsequent readers, returning the previous one
    pub fn swap(&self, catalog: Arc<CatalogIndex>) -> Option<Arc<CatalogIndex>> {
        self.current.swap(Some(catalog))
    }

    /// Drop the active catalog, returning it
    pub fn clear(&self) -> Option<Arc<CatalogIndex>> {
        self.current.swap(None)
    }

    pub fn is_active(&self) -> bool {
        self.current.load().is_some()
    }
}
