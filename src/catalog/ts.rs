//! Qt Linguist `.ts` documents
//!
//! Reads and writes the XML translation-source layout (`<TS>`, `<context>`,
//! `<message>`) as the same record types the JSON and TOML formats use, so
//! version, locale and message validation stay in one place.
//!
//! Recognised message children are `location`, `source`, `comment`
//! (disambiguation), `translatorcomment` and `translation`; other children
//! such as `extracomment`, `oldsource` or `extra-*` are skipped. Numerus
//! translations hold one `numerusform` per plural category. When a form
//! carries `lengthvariant`s the first (longest) one is used.

use xmltree::{Element, EmitterConfig, ParserConfig, XMLNode};

use super::parser::{CatalogDocument, ContextRecord, MessageRecord};
use crate::models::{Location, Status, Translation};
use crate::utils::errors::{LingoError, ParseError, Result};

const TS: &str = "TS";
const CONTEXT: &str = "context";
const NAME: &str = "name";
const MESSAGE: &str = "message";
const LOCATION: &str = "location";
const SOURCE: &str = "source";
const COMMENT: &str = "comment";
const TRANSLATOR_COMMENT: &str = "translatorcomment";
const TRANSLATION: &str = "translation";
const NUMERUS_FORM: &str = "numerusform";
const LENGTH_VARIANT: &str = "lengthvariant";
const BYTE: &str = "byte";

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parse a `.ts` document into catalog records
pub(super) fn read_document(text: &str) -> ParseResult<CatalogDocument> {
    // Whitespace-only text is content: `<translation> </translation>` is a space
    let config = ParserConfig::new().whitespace_to_characters(true);
    let root = Element::parse_with_config(text.as_bytes(), config)
        .map_err(|e| ParseError::malformed(format!("invalid XML: {}", e)))?;

    if root.name != TS {
        return Err(ParseError::malformed(format!(
            "expected <{}> root element, found <{}>",
            TS, root.name
        )));
    }

    let language = root
        .attributes
        .get("language")
        .cloned()
        .ok_or_else(|| ParseError::malformed("<TS> has no language attribute"))?;

    let contexts = children(&root, CONTEXT)
        .map(read_context)
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(CatalogDocument {
        version: root.attributes.get("version").cloned(),
        language,
        source_language: root.attributes.get("sourcelanguage").cloned(),
        contexts,
    })
}

fn read_context(el: &Element) -> ParseResult<ContextRecord> {
    let name = child(el, NAME)
        .map(text_of)
        .ok_or_else(|| ParseError::malformed("<context> without <name>"))??;

    let messages = children(el, MESSAGE)
        .map(|message| read_message(&name, message))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(ContextRecord { name, messages })
}

fn read_message(context: &str, el: &Element) -> ParseResult<MessageRecord> {
    let source = child(el, SOURCE)
        .map(text_of)
        .ok_or_else(|| ParseError::malformed(format!("{}: <message> without <source>", context)))??;

    let numerus = match el.attributes.get("numerus").map(String::as_str) {
        None | Some("no") | Some("false") => false,
        Some("yes") | Some("true") => true,
        Some(other) => {
            return Err(ParseError::malformed(format!(
                "{}::{:?}: numerus must be yes or no, found {:?}",
                context, source, other
            )));
        }
    };

    let locations = children(el, LOCATION).map(read_location).collect::<ParseResult<Vec<_>>>()?;

    let (translation, status) = match child(el, TRANSLATION) {
        // Extraction output without a translation element is still untranslated
        None => (None, Some(Status::Unfinished)),
        Some(translation) => {
            let status = match translation.attributes.get("type").map(String::as_str) {
                None => None,
                Some("unfinished") => Some(Status::Unfinished),
                Some("obsolete") | Some("vanished") => Some(Status::Obsolete),
                Some(other) => {
                    return Err(ParseError::malformed(format!(
                        "{}::{:?}: unknown translation type {:?}",
                        context, source, other
                    )));
                }
            };
            (Some(read_translation(translation, numerus)?), status)
        }
    };

    Ok(MessageRecord {
        disambiguation: child(el, COMMENT).map(text_of).transpose()?,
        translator_comment: child(el, TRANSLATOR_COMMENT).map(text_of).transpose()?,
        source,
        translation,
        status,
        numerus,
        locations,
    })
}

fn read_location(el: &Element) -> ParseResult<Location> {
    let filename = el.attributes.get("filename").cloned().unwrap_or_default();
    let line = match el.attributes.get("line") {
        None => None,
        Some(line) => Some(line.parse::<u32>().map_err(|_| {
            ParseError::malformed(format!("{}: location line {:?} is not a number", filename, line))
        })?),
    };
    Ok(Location { filename, line })
}

fn read_translation(el: &Element, numerus: bool) -> ParseResult<Translation> {
    if !numerus {
        return first_variant(el).map(Translation::Singular);
    }
    children(el, NUMERUS_FORM)
        .map(first_variant)
        .collect::<ParseResult<Vec<_>>>()
        .map(Translation::Plural)
}

fn first_variant(el: &Element) -> ParseResult<String> {
    match child(el, LENGTH_VARIANT) {
        Some(variant) => text_of(variant),
        None => text_of(el),
    }
}

/// Character data of an element, with `<byte value="..."/>` escapes decoded
fn text_of(el: &Element) -> ParseResult<String> {
    let mut text = String::new();
    for node in &el.children {
        match node {
            XMLNode::Text(chunk) | XMLNode::CData(chunk) => text.push_str(chunk),
            XMLNode::Element(byte) if byte.name == BYTE => {
                if let Some(c) = decode_byte(byte)? {
                    text.push(c);
                }
            }
            _ => {}
        }
    }
    Ok(text)
}

fn decode_byte(el: &Element) -> ParseResult<Option<char>> {
    let value = el
        .attributes
        .get("value")
        .ok_or_else(|| ParseError::malformed("<byte> without value"))?;
    let (digits, radix) = match value.strip_prefix("0x").or_else(|| value.strip_prefix('x')) {
        Some(hex) => (hex, 16),
        None => (value.as_str(), 10),
    };
    let code = u32::from_str_radix(digits, radix)
        .map_err(|_| ParseError::malformed(format!("invalid byte value {:?}", value)))?;
    if code == 0 {
        return Ok(None);
    }
    char::from_u32(code)
        .map(Some)
        .ok_or_else(|| ParseError::malformed(format!("byte value {:?} is not a character", value)))
}

fn children<'a>(el: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    el.children.iter().filter_map(move |node| match node {
        XMLNode::Element(child) if child.name == name => Some(child),
        _ => None,
    })
}

fn child<'a>(el: &'a Element, name: &'a str) -> Option<&'a Element> {
    children(el, name).next()
}

/// Render catalog records as an indented `.ts` document
pub(super) fn write_document(document: &CatalogDocument) -> Result<String> {
    let mut root = Element::new(TS);
    set_attr(&mut root, "version", document.version.clone());
    set_attr(&mut root, "language", Some(document.language.clone()));
    set_attr(&mut root, "sourcelanguage", document.source_language.clone());

    for context in &document.contexts {
        let mut el = Element::new(CONTEXT);
        el.children.push(text_element(NAME, &context.name));
        for message in &context.messages {
            el.children.push(XMLNode::Element(message_element(message)));
        }
        root.children.push(XMLNode::Element(el));
    }

    let mut out = Vec::new();
    root.write_with_config(&mut out, EmitterConfig::new().perform_indent(true))
        .map_err(|e| LingoError::XmlSerialization(e.to_string()))?;
    String::from_utf8(out).map_err(|e| LingoError::XmlSerialization(e.to_string()))
}

fn message_element(message: &MessageRecord) -> Element {
    let mut el = Element::new(MESSAGE);
    if message.numerus {
        set_attr(&mut el, "numerus", Some("yes".to_string()));
    }

    for location in &message.locations {
        let mut loc = Element::new(LOCATION);
        set_attr(&mut loc, "filename", Some(location.filename.clone()));
        set_attr(&mut loc, "line", location.line.map(|line| line.to_string()));
        el.children.push(XMLNode::Element(loc));
    }

    el.children.push(text_element(SOURCE, &message.source));
    if let Some(disambiguation) = &message.disambiguation {
        el.children.push(text_element(COMMENT, disambiguation));
    }
    if let Some(comment) = &message.translator_comment {
        el.children.push(text_element(TRANSLATOR_COMMENT, comment));
    }

    let mut translation = Element::new(TRANSLATION);
    let marker = match message.status {
        Some(Status::Unfinished) => Some("unfinished"),
        Some(Status::Obsolete) => Some("obsolete"),
        Some(Status::Finished) | None => None,
    };
    set_attr(&mut translation, "type", marker.map(str::to_string));
    match &message.translation {
        Some(Translation::Singular(text)) if !text.is_empty() => {
            translation.children.push(XMLNode::Text(text.clone()));
        }
        Some(Translation::Plural(forms)) => {
            for form in forms {
                translation.children.push(text_element(NUMERUS_FORM, form));
            }
        }
        Some(Translation::Singular(_)) | None => {}
    }
    el.children.push(XMLNode::Element(translation));

    el
}

fn text_element(name: &str, text: &str) -> XMLNode {
    let mut el = Element::new(name);
    if !text.is_empty() {
        el.children.push(XMLNode::Text(text.to_string()));
    }
    XMLNode::Element(el)
}

fn set_attr(el: &mut Element, key: &str, value: Option<String>) {
    if let Some(value) = value {
        el.attributes.insert(key.to_string(), value);
    }
}
