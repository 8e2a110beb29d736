//! Catalog index
//!
//! Freezes a parsed catalog and indexes its messages by
//! `(context, source, disambiguator)`. Lookups borrow their key parts and
//! walk two hash maps plus a short list of disambiguators, so they never
//! scan the messages of a context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{Catalog, Context, Message};
use crate::utils::errors::IndexError;

/// How to treat two messages sharing one key inside a context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fold identical duplicates into one message, joining their locations
    #[default]
    Merge,
    /// Any duplicate fails the build
    Reject,
}

#[derive(Debug, Clone)]
struct Slot {
    disambiguator: Option<String>,
    context: usize,
    message: usize,
}

/// Immutable, indexed catalog
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    catalog: Catalog,
    entries: HashMap<String, HashMap<String, Vec<Slot>>>,
    len: usize,
}

impl CatalogIndex {
    /// Build the index, folding or rejecting duplicates according to `policy`
    ///
    /// Duplicates whose translation or status differ are always rejected.
    pub fn build(mut catalog: Catalog, policy: DuplicatePolicy) -> Result<Self, IndexError> {
        catalog.contexts = fold_contexts(std::mem::take(&mut catalog.contexts));

        for context in &mut catalog.contexts {
            let messages = std::mem::take(&mut context.messages);
            context.messages = fold_messages(&context.name, messages, policy)?;
        }

        let mut entries: HashMap<String, HashMap<String, Vec<Slot>>> =
            HashMap::with_capacity(catalog.contexts.len());
        let mut len = 0;

        for (context_pos, context) in catalog.contexts.iter().enumerate() {
            let by_source = entries.entry(context.name.clone()).or_default();
            for (message_pos, message) in context.messages.iter().enumerate() {
                by_source
                    .entry(message.source.clone())
                    .or_default()
                    .push(Slot {
                        disambiguator: message.disambiguator.clone(),
                        context: context_pos,
                        message: message_pos,
                    });
                len += 1;
            }
        }

        info!(
            locale = %catalog.locale,
            contexts = catalog.contexts.len(),
            messages = len,
            policy = ?policy,
            "Catalog index built"
        );

        Ok(Self { catalog, entries, len })
    }

    /// Look up a message, obsolete ones included
    pub fn get(&self, context: &str, source: &str, disambiguator: Option<&str>) -> Option<&Message> {
        let slot = self
            .entries
            .get(context)?
            .get(source)?
            .iter()
            .find(|slot| slot.disambiguator.as_deref() == disambiguator)?;

        Some(&self.catalog.contexts[slot.context].messages[slot.message])
    }

    /// Look up a message that may be served, i.e. not obsolete
    pub fn live(&self, context: &str, source: &str, disambiguator: Option<&str>) -> Option<&Message> {
        self.get(context, source, disambiguator)
            .filter(|message| message.is_live())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    pub fn locale(&self) -> &str {
        &self.catalog.locale
    }

    /// Number of indexed messages
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Join contexts that appear more than once under the same name
fn fold_contexts(contexts: Vec<Context>) -> Vec<Context> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(contexts.len());
    let mut folded: Vec<Context> = Vec::with_capacity(contexts.len());

    for context in contexts {
        match positions.get(&context.name) {
            Some(&pos) => {
                debug!(context = %context.name, "Joining repeated context block");
                folded[pos].messages.extend(context.messages);
            }
            None => {
                positions.insert(context.name.clone(), folded.len());
                folded.push(context);
            }
        }
    }

    folded
}

fn fold_messages(
    context: &str,
    messages: Vec<Message>,
    policy: DuplicatePolicy,
) -> Result<Vec<Message>, IndexError> {
    let mut seen: HashMap<(String, Option<String>), usize> = HashMap::with_capacity(messages.len());
    let mut kept: Vec<Message> = Vec::with_capacity(messages.len());

    for message in messages {
        if let Err(reason) = message.validate() {
            return Err(IndexError::InvalidMessage {
                key: message.key(context),
                reason,
            });
        }

        let id = (message.source.clone(), message.disambiguator.clone());
        let Some(&pos) = seen.get(&id) else {
            seen.insert(id, kept.len());
            kept.push(message);
            continue;
        };

        if policy == DuplicatePolicy::Reject {
            return Err(IndexError::Duplicate {
                key: message.key(context),
            });
        }
        if !kept[pos].same_content(&message) {
            return Err(IndexError::ConflictingDuplicate {
                key: message.key(context),
            });
        }

        warn!(
            context = context,
            source = %message.source,
            "Folding duplicate message into its first occurrence"
        );
        kept[pos].add_locations(message.locations);
    }

    Ok(kept)
}
