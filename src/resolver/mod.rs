//! Resolver module
//!
//! The resolver turns `(context, source, disambiguator, args)` into display
//! text against an indexed catalog. It is the only component on the render
//! path, so it never fails: missing messages, unusable drafts, absent plural
//! variants and missing arguments all degrade to a fallback and are counted
//! in [`Diagnostics`].

pub mod diagnostics;
pub mod plural;
pub mod substitution;

pub use diagnostics::{Diagnostics, DiagnosticsSnapshot};
pub use plural::{BuiltinPluralRules, PluralCategory, PluralRules};
pub use substitution::{substitute, Arg, MissingArgument};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::catalog::CatalogIndex;
use crate::models::{Message, Status, Translation};
use crate::utils::errors::SubstitutionError;

/// Per-call resolution behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolutionPolicy {
    /// Serve unfinished translations (preview and debugging)
    #[serde(default)]
    pub allow_draft: bool,
    #[serde(default)]
    pub missing_argument: MissingArgument,
}

impl ResolutionPolicy {
    /// Policy for translator previews: drafts are served
    pub fn preview() -> Self {
        Self {
            allow_draft: true,
            ..Self::default()
        }
    }

    pub fn with_missing_argument(mut self, missing_argument: MissingArgument) -> Self {
        self.missing_argument = missing_argument;
        self
    }
}

/// Why the source text was served instead of a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NoActiveCatalog,
    Missing,
    Obsolete,
    /// Unfinished and drafts are not allowed
    Unfinished,
    /// Unfinished, drafts allowed, but nothing translated yet
    EmptyDraft,
    /// Plural message without any usable variant
    NoPluralVariant,
}

/// Where the resolved text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    Translation,
    Draft,
    Fallback(FallbackReason),
}

/// Outcome of a single resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    pub text: String,
    pub origin: TextOrigin,
    pub substitution_errors: Vec<SubstitutionError>,
    /// Policy the text was substituted under
    pub missing_argument: MissingArgument,
}

impl ResolvedText {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, TextOrigin::Fallback(_))
    }

    /// The text, or the first substitution problem when resolved under
    /// [`MissingArgument::Error`]
    pub fn into_result(self) -> Result<String, SubstitutionError> {
        if self.missing_argument != MissingArgument::Error {
            return Ok(self.text);
        }
        match self.substitution_errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.text),
        }
    }
}

impl fmt::Display for ResolvedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<ResolvedText> for String {
    fn from(resolved: ResolvedText) -> Self {
        resolved.text
    }
}

/// A single lookup request
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub context: &'a str,
    pub source: &'a str,
    pub disambiguator: Option<&'a str>,
    pub args: &'a [Arg],
}

impl<'a> Request<'a> {
    pub fn new(context: &'a str, source: &'a str) -> Self {
        Self {
            context,
            source,
            disambiguator: None,
            args: &[],
        }
    }

    pub fn disambiguator(mut self, disambiguator: Option<&'a str>) -> Self {
        self.disambiguator = disambiguator;
        self
    }

    pub fn args(mut self, args: &'a [Arg]) -> Self {
        self.args = args;
        self
    }
}

/// Read-only resolution against an indexed catalog
#[derive(Clone)]
pub struct Resolver {
    plural_rules: Arc<dyn PluralRules>,
    diagnostics: Arc<Diagnostics>,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("diagnostics", &self.diagnostics.snapshot())
            .finish_non_exhaustive()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Arc::new(BuiltinPluralRules), Arc::new(Diagnostics::new()))
    }
}

impl Resolver {
    pub fn new(plural_rules: Arc<dyn PluralRules>, diagnostics: Arc<Diagnostics>) -> Self {
        Self {
            plural_rules,
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// Resolve a request; `index` is `None` before any catalog is active
    pub fn resolve(
        &self,
        index: Option<&CatalogIndex>,
        request: &Request<'_>,
        policy: &ResolutionPolicy,
    ) -> ResolvedText {
        let (chosen, origin) = match index {
            None => {
                self.diagnostics.record_miss();
                debug!(context = request.context, source = request.source, "No active catalog");
                (None, TextOrigin::Fallback(FallbackReason::NoActiveCatalog))
            }
            Some(index) => self.choose(index, request, policy),
        };

        let template = chosen.unwrap_or(request.source);
        let mut substitution_errors = Vec::new();
        let text = substitute(
            template,
            request.args,
            policy.missing_argument,
            &mut substitution_errors,
        );

        if !substitution_errors.is_empty() {
            self.diagnostics
                .record_substitution_errors(substitution_errors.len());
            debug!(
                context = request.context,
                source = request.source,
                errors = substitution_errors.len(),
                "Placeholders without arguments"
            );
        }

        ResolvedText {
            text,
            origin,
            substitution_errors,
            missing_argument: policy.missing_argument,
        }
    }

    /// Pick the template to substitute into; `None` means the source text
    fn choose<'i>(
        &self,
        index: &'i CatalogIndex,
        request: &Request<'_>,
        policy: &ResolutionPolicy,
    ) -> (Option<&'i str>, TextOrigin) {
        let message = match index.get(request.context, request.source, request.disambiguator) {
            Some(message) => message,
            None => {
                self.diagnostics.record_miss();
                debug!(context = request.context, source = request.source, "Translation missing");
                return (None, TextOrigin::Fallback(FallbackReason::Missing));
            }
        };

        let origin = match message.status {
            Status::Obsolete => {
                self.diagnostics.record_miss();
                debug!(context = request.context, source = request.source, "Translation obsolete");
                return (None, TextOrigin::Fallback(FallbackReason::Obsolete));
            }
            Status::Unfinished if !policy.allow_draft => {
                trace!(context = request.context, source = request.source, "Draft withheld");
                return (None, TextOrigin::Fallback(FallbackReason::Unfinished));
            }
            Status::Unfinished if message.translation.is_empty() => {
                return (None, TextOrigin::Fallback(FallbackReason::EmptyDraft));
            }
            Status::Unfinished => TextOrigin::Draft,
            Status::Finished => TextOrigin::Translation,
        };

        let text = match &message.translation {
            Translation::Singular(text) => Some(text.as_str()),
            Translation::Plural(forms) => self.select_variant(index.locale(), message, forms, request.args),
        };

        match text {
            Some(text) => {
                if origin == TextOrigin::Draft {
                    self.diagnostics.record_draft_served();
                }
                (Some(text), origin)
            }
            None => (None, TextOrigin::Fallback(FallbackReason::NoPluralVariant)),
        }
    }

    /// Variant for the first numeric argument, else the first non-empty one
    fn select_variant<'m>(
        &self,
        locale: &str,
        message: &Message,
        forms: &'m [String],
        args: &[Arg],
    ) -> Option<&'m str> {
        let selected = args
            .iter()
            .find_map(Arg::as_count)
            .and_then(|count| self.plural_rules.variant_index(locale, count))
            .and_then(|pos| forms.get(pos))
            .filter(|form| !form.is_empty());

        if let Some(form) = selected {
            return Some(form.as_str());
        }

        self.diagnostics.record_plural_fallback();
        debug!(locale = locale, source = %message.source, "Plural variant unavailable, using first variant");
        forms.iter().map(String::as_str).find(|form| !form.is_empty())
    }
}
