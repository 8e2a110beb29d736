//! Catalog merge
//!
//! Reconciles an existing catalog with the source strings found by a fresh
//! extraction run. Every message of either input lands in exactly one bucket:
//!
//! - **new**: extracted but unknown to the old catalog; added unfinished
//!   with an empty translation.
//! - **retained**: present in both; translation and status kept, locations
//!   replaced by the extracted ones.
//! - **obsolete**: known to the old catalog but no longer extracted; marked
//!   obsolete with translation and locations kept for reuse.
//!
//! The old catalog is never modified; the result is a new catalog.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Catalog, Context, Location, Message, MessageKey, Status, Translation};
use crate::resolver::plural::{BuiltinPluralRules, PluralRules};
use crate::utils::logging;

/// A source string reported by extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMessage {
    pub context: String,
    pub source: String,
    #[serde(default)]
    pub disambiguator: Option<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub numerus: bool,
}

impl ExtractedMessage {
    pub fn new(context: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            disambiguator: None,
            locations: Vec::new(),
            numerus: false,
        }
    }

    pub fn with_disambiguator(mut self, disambiguator: impl Into<String>) -> Self {
        self.disambiguator = Some(disambiguator.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn plural(mut self) -> Self {
        self.numerus = true;
        self
    }

    pub fn key(&self) -> MessageKey {
        MessageKey {
            context: self.context.clone(),
            source: self.source.clone(),
            disambiguator: self.disambiguator.clone(),
        }
    }
}

/// Which bucket each message landed in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    pub new: Vec<MessageKey>,
    pub retained: Vec<MessageKey>,
    pub obsolete: Vec<MessageKey>,
}

impl MergeReport {
    pub fn total(&self) -> usize {
        self.new.len() + self.retained.len() + self.obsolete.len()
    }
}

/// Result of a merge: the new catalog and its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub catalog: Catalog,
    pub report: MergeReport,
}

/// Merge using the built-in plural rules to size new plural messages
pub fn merge(old: &Catalog, extracted: &[ExtractedMessage]) -> MergeOutcome {
    merge_with_rules(old, extracted, &BuiltinPluralRules)
}

pub fn merge_with_rules(
    old: &Catalog,
    extracted: &[ExtractedMessage],
    rules: &dyn PluralRules,
) -> MergeOutcome {
    let fresh = collapse(extracted);
    let positions: HashMap<MessageKey, usize> = fresh
        .iter()
        .enumerate()
        .map(|(pos, entry)| (entry.key(), pos))
        .collect();

    let mut report = MergeReport::default();
    let mut matched: HashSet<usize> = HashSet::with_capacity(fresh.len());
    let mut contexts: Vec<Context> = Vec::with_capacity(old.contexts.len());
    let mut context_pos: HashMap<String, usize> = HashMap::with_capacity(old.contexts.len());

    for old_context in &old.contexts {
        let pos = *context_pos.entry(old_context.name.clone()).or_insert_with(|| {
            contexts.push(Context::new(old_context.name.clone()));
            contexts.len() - 1
        });

        for old_message in &old_context.messages {
            let key = old_message.key(&old_context.name);
            let mut message = old_message.clone();

            match positions.get(&key) {
                Some(&fresh_pos) => {
                    matched.insert(fresh_pos);
                    message.locations.clear();
                    message.add_locations(fresh[fresh_pos].locations.iter().cloned());
                    report.retained.push(key);
                }
                None => {
                    message.status = Status::Obsolete;
                    report.obsolete.push(key);
                }
            }

            contexts[pos].messages.push(message);
        }
    }

    for (fresh_pos, entry) in fresh.iter().enumerate() {
        if matched.contains(&fresh_pos) {
            continue;
        }

        let pos = *context_pos.entry(entry.context.clone()).or_insert_with(|| {
            contexts.push(Context::new(entry.context.clone()));
            contexts.len() - 1
        });

        let translation = if entry.numerus {
            Translation::empty_plural(rules.categories(&old.locale).len())
        } else {
            Translation::empty()
        };

        let mut message = Message {
            disambiguator: entry.disambiguator.clone(),
            translation,
            ..Message::untranslated(entry.source.clone())
        };
        message.add_locations(entry.locations.iter().cloned());

        contexts[pos].messages.push(message);
        report.new.push(entry.key());
    }

    logging::log_merge_report(&old.locale, &report);

    MergeOutcome {
        catalog: Catalog {
            version: old.version.clone(),
            locale: old.locale.clone(),
            source_locale: old.source_locale.clone(),
            contexts,
        },
        report,
    }
}

/// One entry per key, in first-seen order, with locations joined
fn collapse(extracted: &[ExtractedMessage]) -> Vec<ExtractedMessage> {
    let mut positions: HashMap<MessageKey, usize> = HashMap::with_capacity(extracted.len());
    let mut collapsed: Vec<ExtractedMessage> = Vec::with_capacity(extracted.len());

    for entry in extracted {
        match positions.get(&entry.key()) {
            Some(&pos) => {
                let target = &mut collapsed[pos];
                for location in &entry.locations {
                    if !target.locations.contains(location) {
                        target.locations.push(location.clone());
                    }
                }
                target.numerus |= entry.numerus;
            }
            None => {
                positions.insert(entry.key(), collapsed.len());
                collapsed.push(entry.clone());
            }
        }
    }

    collapsed
}
