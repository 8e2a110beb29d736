//! Message model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Finished,
    Unfinished,
    #[serde(alias = "vanished")]
    Obsolete,
}

impl Status {
    pub fn is_finished(self) -> bool {
        self == Status::Finished
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Finished => write!(f, "finished"),
            Status::Unfinished => write!(f, "unfinished"),
            Status::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// Translated content of a message
///
/// Plural messages carry one variant per plural category of the catalog
/// locale, in the order the locale's plural rules list those categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translation {
    Singular(String),
    Plural(Vec<String>),
}

impl Translation {
    pub fn empty() -> Self {
        Translation::Singular(String::new())
    }

    /// Empty plural content with `forms` blank variants
    pub fn empty_plural(forms: usize) -> Self {
        Translation::Plural(vec![String::new(); forms])
    }

    pub fn is_plural(&self) -> bool {
        matches!(self, Translation::Plural(_))
    }

    /// True when no variant carries any text
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Singular(text) => text.is_empty(),
            Translation::Plural(forms) => forms.iter().all(String::is_empty),
        }
    }

    /// The singular text, or the first non-empty plural variant
    pub fn primary(&self) -> Option<&str> {
        match self {
            Translation::Singular(text) => Some(text.as_str()).filter(|t| !t.is_empty()),
            Translation::Plural(forms) => forms.iter().map(String::as_str).find(|f| !f.is_empty()),
        }
    }
}

impl Default for Translation {
    fn default() -> Self {
        Translation::empty()
    }
}

impl From<&str> for Translation {
    fn from(text: &str) -> Self {
        Translation::Singular(text.to_string())
    }
}

impl From<String> for Translation {
    fn from(text: String) -> Self {
        Translation::Singular(text)
    }
}

/// Provenance of a source string inside the host application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Self {
            filename: filename.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.filename, line),
            None => write!(f, "{}", self.filename),
        }
    }
}

/// Identity of a message: context, source text and optional disambiguator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub disambiguator: Option<String>,
}

impl MessageKey {
    pub fn new(context: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            disambiguator: None,
        }
    }

    pub fn with_disambiguator(mut self, disambiguator: impl Into<String>) -> Self {
        self.disambiguator = Some(disambiguator.into());
        self
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{:?}", self.context, self.source)?;
        if let Some(disambiguator) = &self.disambiguator {
            write!(f, " ({})", disambiguator)?;
        }
        Ok(())
    }
}

/// One translatable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub source: String,
    pub disambiguator: Option<String>,
    pub translation: Translation,
    pub status: Status,
    pub locations: Vec<Location>,
    /// Note left for or by translators; never used for resolution.
    pub comment: Option<String>,
}

impl Message {
    /// A finished, singular message
    pub fn new(source: impl Into<String>, translation: impl Into<Translation>) -> Self {
        Self {
            source: source.into(),
            disambiguator: None,
            translation: translation.into(),
            status: Status::Finished,
            locations: Vec::new(),
            comment: None,
        }
    }

    /// An unfinished message without translation, as produced by extraction
    pub fn untranslated(source: impl Into<String>) -> Self {
        Self {
            status: Status::Unfinished,
            ..Self::new(source, Translation::empty())
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_disambiguator(mut self, disambiguator: impl Into<String>) -> Self {
        self.disambiguator = Some(disambiguator.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.add_locations([location]);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn numerus(&self) -> bool {
        self.translation.is_plural()
    }

    /// Whether the message may be served at all
    pub fn is_live(&self) -> bool {
        self.status != Status::Obsolete
    }

    pub fn key(&self, context: &str) -> MessageKey {
        MessageKey {
            context: context.to_string(),
            source: self.source.clone(),
            disambiguator: self.disambiguator.clone(),
        }
    }

    /// Append locations, keeping them an ordered set
    pub fn add_locations(&mut self, locations: impl IntoIterator<Item = Location>) {
        for location in locations {
            if !self.locations.contains(&location) {
                self.locations.push(location);
            }
        }
    }

    /// Same translation, status and plural shape; locations and comments may differ
    pub fn same_content(&self, other: &Message) -> bool {
        self.translation == other.translation && self.status == other.status
    }

    /// Check the construction invariants of a single message
    pub fn validate(&self) -> Result<(), String> {
        if self.source.is_empty() {
            return Err("source text is empty".to_string());
        }

        // An empty variant list counts as empty content.
        if self.status.is_finished() && self.translation.is_empty() {
            return Err("finished message has an empty translation".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_are_an_ordered_set() {
        let mut message = Message::new("Male", "Homme");
        message.add_locations([
            Location::new("Constant.cpp", 4),
            Location::new("Person.cpp", 10),
            Location::new("Constant.cpp", 4),
        ]);

        assert_eq!(
            message.locations,
            vec![Location::new("Constant.cpp", 4), Location::new("Person.cpp", 10)]
        );
    }

    #[test]
    fn test_validate_rejects_empty_finished() {
        let message = Message::new("Partner", "");
        assert!(message.validate().is_err());

        let draft = Message::untranslated("Partner");
        assert!(draft.validate().is_ok());

        let obsolete = Message::new("Old", "").with_status(Status::Obsolete);
        assert!(obsolete.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_source() {
        let message = Message::new("", "Rien");
        assert_eq!(message.validate(), Err("source text is empty".to_string()));
    }

    #[test]
    fn test_plural_emptiness() {
        assert!(Translation::empty_plural(2).is_empty());
        let forms = Translation::Plural(vec![String::new(), "%1 enfants".to_string()]);
        assert!(!forms.is_empty());
        assert_eq!(forms.primary(), Some("%1 enfants"));
    }

    #[test]
    fn test_message_key_display() {
        let key = MessageKey::new("Constant", "Male").with_disambiguator("noun");
        assert_eq!(key.to_string(), "Constant::\"Male\" (noun)");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Unfinished).unwrap(), "\"unfinished\"");
        let vanished: Status = serde_json::from_str("\"vanished\"").unwrap();
        assert_eq!(vanished, Status::Obsolete);
    }
}
