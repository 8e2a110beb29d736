//! Translator service
//!
//! The runtime entry point: loads catalogs, activates one at a time and
//! resolves display text against whichever catalog is active. A translator
//! is `Send + Sync` and is meant to be shared behind an `Arc`.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::catalog::{self, CatalogFormat, CatalogIndex, DuplicatePolicy};
use crate::config::Settings;
use crate::resolver::{
    Arg, BuiltinPluralRules, Diagnostics, DiagnosticsSnapshot, PluralRules, Request,
    ResolutionPolicy, ResolvedText, Resolver,
};
use crate::state::ActiveCatalog;
use crate::utils::errors::{Result, SubstitutionError};
use crate::utils::logging;

/// Catalog lifecycle and text resolution
#[derive(Debug)]
pub struct Translator {
    active: ActiveCatalog,
    resolver: Resolver,
    default_policy: ResolutionPolicy,
    duplicate_policy: DuplicatePolicy,
    format: CatalogFormat,
}

impl Default for Translator {
    fn default() -> Self {
        TranslatorBuilder::new().build()
    }
}

impl Translator {
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    /// Create a translator configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        TranslatorBuilder::new()
            .default_policy(settings.resolution_policy())
            .duplicate_policy(settings.catalog.duplicate_policy)
            .format(settings.catalog.effective_format())
            .build()
    }

    /// Parse and index a raw catalog without activating it
    pub fn load(&self, raw: &[u8]) -> Result<CatalogIndex> {
        let started = Instant::now();
        let index = catalog::load(raw, self.format, self.duplicate_policy)?;
        logging::log_catalog_loaded(
            &index.catalog().stats(),
            started.elapsed().as_millis() as u64,
        );
        Ok(index)
    }

    /// Make `index` the active catalog, returning the one it replaces
    ///
    /// Resolutions already in flight finish against the catalog they started with.
    pub fn activate(&self, index: CatalogIndex) -> Option<Arc<CatalogIndex>> {
        let locale = index.locale().to_string();
        let previous = self.active.swap(Arc::new(index));
        logging::log_catalog_activated(&locale, previous.as_deref().map(CatalogIndex::locale));
        previous
    }

    /// Release the active catalog; later lookups fall back to source text
    pub fn deactivate(&self) -> Option<Arc<CatalogIndex>> {
        let previous = self.active.clear();
        if let Some(previous) = &previous {
            info!(locale = previous.locale(), "Catalog deactivated");
        }
        previous
    }

    pub fn active_locale(&self) -> Option<String> {
        self.active.snapshot().map(|index| index.locale().to_string())
    }

    /// Resolve display text, falling back to `source` when no usable translation exists
    pub fn resolve(
        &self,
        context: &str,
        source: &str,
        disambiguator: Option<&str>,
        args: &[Arg],
        policy: Option<&ResolutionPolicy>,
    ) -> String {
        self.resolve_detailed(context, source, disambiguator, args, policy)
            .text
    }

    /// Resolve and report where the text came from
    pub fn resolve_detailed(
        &self,
        context: &str,
        source: &str,
        disambiguator: Option<&str>,
        args: &[Arg],
        policy: Option<&ResolutionPolicy>,
    ) -> ResolvedText {
        let snapshot = self.active.snapshot();
        let request = Request::new(context, source)
            .disambiguator(disambiguator)
            .args(args);
        self.resolver.resolve(
            snapshot.as_deref(),
            &request,
            policy.unwrap_or(&self.default_policy),
        )
    }

    /// Like `resolve`, but a missing argument is an error under `MissingArgument::Error`
    pub fn try_resolve(
        &self,
        context: &str,
        source: &str,
        disambiguator: Option<&str>,
        args: &[Arg],
        policy: Option<&ResolutionPolicy>,
    ) -> std::result::Result<String, SubstitutionError> {
        self.resolve_detailed(context, source, disambiguator, args, policy)
            .into_result()
    }

    pub fn diagnostics(&self) -> DiagnosticsSnapshot {
        self.resolver.diagnostics().snapshot()
    }

    /// Zero the counters, returning their values before the reset
    pub fn reset_diagnostics(&self) -> DiagnosticsSnapshot {
        let snapshot = self.resolver.diagnostics().reset();
        debug!(misses = snapshot.miss_count, "Diagnostics reset");
        snapshot
    }

    pub fn default_policy(&self) -> &ResolutionPolicy {
        &self.default_policy
    }
}

/// Builder for [`Translator`]
pub struct TranslatorBuilder {
    plural_rules: Arc<dyn PluralRules>,
    diagnostics: Arc<Diagnostics>,
    default_policy: ResolutionPolicy,
    duplicate_policy: DuplicatePolicy,
    format: CatalogFormat,
}

impl Default for TranslatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorBuilder {
    pub fn new() -> Self {
        Self {
            plural_rules: Arc::new(BuiltinPluralRules),
            diagnostics: Arc::new(Diagnostics::new()),
            default_policy: ResolutionPolicy::default(),
            duplicate_policy: DuplicatePolicy::default(),
            format: CatalogFormat::default(),
        }
    }

    pub fn plural_rules(mut self, plural_rules: Arc<dyn PluralRules>) -> Self {
        self.plural_rules = plural_rules;
        self
    }

    /// Share counters with another translator or a host-side reporter
    pub fn diagnostics(mut self, diagnostics: Arc<Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn default_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn format(mut self, format: CatalogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn build(self) -> Translator {
        Translator {
            active: ActiveCatalog::new(),
            resolver: Resolver::new(self.plural_rules, self.diagnostics),
            default_policy: self.default_policy,
            duplicate_policy: self.duplicate_policy,
            format: self.format,
        }
    }
}
