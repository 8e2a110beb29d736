//! Catalog parser
//!
//! Turns a serialized catalog document into a [`Catalog`]. The document
//! mirrors the translation-source layout: a locale, then contexts holding
//! messages with source text, optional translation (a string, or a list of
//! plural variants), an optional `type` marker (`unfinished`, `obsolete`;
//! finished when absent), locations and an optional `numerus` flag.
//!
//! ```json
//! {
//!   "version": "2.0",
//!   "language": "fr_FR",
//!   "contexts": [
//!     { "name": "Constant",
//!       "messages": [
//!         { "source": "Male", "translation": "Homme",
//!           "locations": [{ "filename": "Constant.cpp", "line": 4 }] }
//!       ] }
//!   ]
//! }
//! ```
//!
//! The same layout is accepted as TOML, and as Qt Linguist `.ts` XML (see
//! the `ts` module). Parsing is pure and all-or-nothing.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::models::{Catalog, Context, Location, Message, Status, Translation, CURRENT_VERSION};
use crate::utils::errors::{ParseError, Position, Result};

/// Catalog document versions this parser understands
pub const SUPPORTED_VERSIONS: &[&str] = &["2.0", "2.1"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}([_-][A-Za-z0-9]{2,8})*$").expect("locale tag pattern is valid")
});

/// Serialized form of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    #[default]
    Json,
    Toml,
    /// Qt Linguist XML
    Ts,
}

impl CatalogFormat {
    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => CatalogFormat::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("ts") || ext.eq_ignore_ascii_case("xml") => {
                CatalogFormat::Ts
            }
            _ => CatalogFormat::Json,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct CatalogDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) version: Option<String>,
    pub(super) language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) source_language: Option<String>,
    #[serde(default)]
    pub(super) contexts: Vec<ContextRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ContextRecord {
    pub(super) name: String,
    #[serde(default)]
    pub(super) messages: Vec<MessageRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct MessageRecord {
    pub(super) source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) disambiguation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) translation: Option<Translation>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub(super) status: Option<Status>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(super) numerus: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) translator_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(super) locations: Vec<Location>,
}

/// Parse a JSON catalog document
pub fn parse(raw: &[u8]) -> std::result::Result<Catalog, ParseError> {
    parse_with(raw, CatalogFormat::Json)
}

/// Parse a catalog document in the given format
pub fn parse_with(raw: &[u8], format: CatalogFormat) -> std::result::Result<Catalog, ParseError> {
    debug!(format = ?format, bytes = raw.len(), "Parsing catalog");

    let text = decode(raw)?;
    let document: CatalogDocument = match format {
        CatalogFormat::Json => serde_json::from_str(text).map_err(|e| json_error(&e))?,
        CatalogFormat::Toml => toml::from_str(text).map_err(|e| toml_error(text, &e))?,
        CatalogFormat::Ts => super::ts::read_document(text)?,
    };

    let catalog = into_catalog(document)?;
    debug!(
        locale = %catalog.locale,
        contexts = catalog.contexts.len(),
        messages = catalog.message_count(),
        "Catalog parsed"
    );
    Ok(catalog)
}

/// Write a catalog back in document form, keeping context and message order
pub fn serialize(catalog: &Catalog, format: CatalogFormat) -> Result<String> {
    let document = to_document(catalog);
    let text = match format {
        CatalogFormat::Json => serde_json::to_string_pretty(&document)?,
        CatalogFormat::Toml => toml::to_string_pretty(&document)?,
        CatalogFormat::Ts => super::ts::write_document(&document)?,
    };
    Ok(text)
}

fn decode(raw: &[u8]) -> std::result::Result<&str, ParseError> {
    if raw.starts_with(&[0xFF, 0xFE]) || raw.starts_with(&[0xFE, 0xFF]) {
        return Err(ParseError::encoding(
            "UTF-16 catalogs are not supported, re-encode as UTF-8",
            Position { line: 1, column: Some(1), byte: Some(0) },
        ));
    }

    let offset = if raw.starts_with(UTF8_BOM) { UTF8_BOM.len() } else { 0 };
    std::str::from_utf8(&raw[offset..]).map_err(|e| {
        let byte = offset + e.valid_up_to();
        let before = &raw[..byte];
        let line = before.iter().filter(|b| **b == b'\n').count() + 1;
        let line_start = before.iter().rposition(|b| *b == b'\n').map_or(0, |p| p + 1);
        ParseError::encoding(
            format!("invalid UTF-8 sequence: {}", e),
            Position {
                line,
                column: Some(byte - line_start + 1),
                byte: Some(byte),
            },
        )
    })
}

fn json_error(error: &serde_json::Error) -> ParseError {
    let parse_error = ParseError::malformed(error.to_string());
    if error.line() == 0 {
        return parse_error;
    }
    parse_error.at(Position {
        line: error.line(),
        column: Some(error.column()),
        byte: None,
    })
}

fn toml_error(text: &str, error: &toml::de::Error) -> ParseError {
    let parse_error = ParseError::malformed(error.message().to_string());
    match error.span() {
        Some(span) => parse_error.at(position_of(text, span)),
        None => parse_error,
    }
}

fn position_of(text: &str, span: Range<usize>) -> Position {
    let byte = span.start.min(text.len());
    let before = &text.as_bytes()[..byte];
    let line = before.iter().filter(|b| **b == b'\n').count() + 1;
    let line_start = before.iter().rposition(|b| *b == b'\n').map_or(0, |p| p + 1);
    Position {
        line,
        column: Some(byte - line_start + 1),
        byte: Some(byte),
    }
}

fn into_catalog(document: CatalogDocument) -> std::result::Result<Catalog, ParseError> {
    let version = document
        .version
        .unwrap_or_else(|| CURRENT_VERSION.to_string());
    if !SUPPORTED_VERSIONS.contains(&version.as_str()) {
        return Err(ParseError::unsupported_version(&version));
    }

    check_locale("language", &document.language)?;
    if let Some(source_language) = &document.source_language {
        check_locale("source_language", source_language)?;
    }

    let contexts = document
        .contexts
        .into_iter()
        .map(into_context)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Catalog {
        version,
        locale: document.language,
        source_locale: document.source_language,
        contexts,
    })
}

fn check_locale(field: &str, tag: &str) -> std::result::Result<(), ParseError> {
    if LOCALE_TAG.is_match(tag) {
        Ok(())
    } else {
        Err(ParseError::malformed(format!(
            "{} '{}' is not a language tag",
            field, tag
        )))
    }
}

fn into_context(record: ContextRecord) -> std::result::Result<Context, ParseError> {
    let name = record.name;
    let messages = record
        .messages
        .into_iter()
        .map(|message| into_message(&name, message))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    trace!(context = %name, messages = messages.len(), "Context parsed");
    Ok(Context { name, messages })
}

fn into_message(context: &str, record: MessageRecord) -> std::result::Result<Message, ParseError> {
    let translation = match (record.translation, record.numerus) {
        (None, false) => Translation::empty(),
        (None, true) => Translation::Plural(Vec::new()),
        (Some(Translation::Singular(text)), false) => Translation::Singular(text),
        (Some(Translation::Plural(forms)), true) => Translation::Plural(forms),
        (Some(Translation::Singular(_)), true) => {
            return Err(ParseError::malformed(format!(
                "{}::{:?} is marked numerus but has a single translation",
                context, record.source
            )));
        }
        (Some(Translation::Plural(_)), false) => {
            return Err(ParseError::malformed(format!(
                "{}::{:?} has plural variants but is not marked numerus",
                context, record.source
            )));
        }
    };

    let mut message = Message {
        source: record.source,
        disambiguator: record.disambiguation,
        translation,
        status: record.status.unwrap_or_default(),
        locations: Vec::with_capacity(record.locations.len()),
        comment: record.translator_comment,
    };
    message.add_locations(record.locations);

    message.validate().map_err(|reason| {
        ParseError::malformed(format!("{}::{:?}: {}", context, message.source, reason))
    })?;

    Ok(message)
}

fn to_document(catalog: &Catalog) -> CatalogDocument {
    CatalogDocument {
        version: Some(catalog.version.clone()),
        language: catalog.locale.clone(),
        source_language: catalog.source_locale.clone(),
        contexts: catalog
            .contexts
            .iter()
            .map(|context| ContextRecord {
                name: context.name.clone(),
                messages: context.messages.iter().map(to_record).collect(),
            })
            .collect(),
    }
}

fn to_record(message: &Message) -> MessageRecord {
    MessageRecord {
        source: message.source.clone(),
        disambiguation: message.disambiguator.clone(),
        translation: Some(message.translation.clone()),
        status: Some(message.status).filter(|status| !status.is_finished()),
        numerus: message.numerus(),
        translator_comment: message.comment.clone(),
        locations: message.locations.clone(),
    }
}
