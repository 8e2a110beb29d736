//! Catalog model

use serde::{Deserialize, Serialize};

use super::message::{Message, MessageKey, Status};

/// Catalog format version written by default
pub const CURRENT_VERSION: &str = "2.1";

/// Logical grouping of related messages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub name: String,
    /// Insertion order, kept for stable re-serialization.
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn find(&self, source: &str, disambiguator: Option<&str>) -> Option<&Message> {
        self.messages
            .iter()
            .find(|m| m.source == source && m.disambiguator.as_deref() == disambiguator)
    }
}

/// All contexts of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub version: String,
    pub locale: String,
    pub source_locale: Option<String>,
    pub contexts: Vec<Context>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            locale: locale.into(),
            source_locale: None,
            contexts: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Linear lookup; resolution goes through `CatalogIndex` instead
    pub fn find(&self, key: &MessageKey) -> Option<&Message> {
        self.context(&key.context)?
            .find(&key.source, key.disambiguator.as_deref())
    }

    /// Iterate over `(context name, message)` pairs in document order
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Translation progress, in total and per context
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            locale: self.locale.clone(),
            ..CatalogStats::default()
        };

        for context in &self.contexts {
            let mut counts = StatusCounts::default();
            for message in &context.messages {
                counts.record(message);
            }
            stats.total.add(&counts);
            stats.contexts.push(ContextStats {
                name: context.name.clone(),
                counts,
            });
        }

        stats
    }
}

/// Message counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
    pub plural: usize,
}

impl StatusCounts {
    fn record(&mut self, message: &Message) {
        match message.status {
            Status::Finished => self.finished += 1,
            Status::Unfinished => self.unfinished += 1,
            Status::Obsolete => self.obsolete += 1,
        }
        if message.numerus() {
            self.plural += 1;
        }
    }

    fn add(&mut self, other: &StatusCounts) {
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.obsolete += other.obsolete;
        self.plural += other.plural;
    }

    /// Live messages, i.e. everything not obsolete
    pub fn live(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Share of live messages that are finished, 0.0 to 100.0
    pub fn completion_percent(&self) -> f32 {
        let live = self.live();
        if live == 0 {
            100.0
        } else {
            (self.finished as f32 / live as f32) * 100.0
        }
    }
}

/// Per-context statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextStats {
    pub name: String,
    pub counts: StatusCounts,
}

/// Catalog statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub locale: String,
    pub total: StatusCounts,
    pub contexts: Vec<ContextStats>,
}
