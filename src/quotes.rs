//! The quote collection: a user-editable list of affirmation lines.
//!
//! Persisted under its own storage key, independent of the journal record.
//! Two picking modes: uniform random (avoiding an immediate repeat) and a
//! ring walk that advances one past the last shown quote.

use crate::error::{ReframeError, Result};
use crate::storage::Storage;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Storage key for the serialized quote collection.
pub const QUOTES_KEY: &str = "reframe_quotes_v1";

/// Shown wherever no quote is available or the feature is disabled.
pub const QUOTE_PLACEHOLDER: &str = "—";

/// Built-in lines used whenever the persisted list is empty or absent.
pub const DEFAULT_QUOTES: [&str; 5] = [
    "Pausing for a moment is already a change.",
    "It does not have to be perfect, just not the same old road.",
    "You are not the reaction. You are the one who sees it.",
    "Ten percent counts. The system starts updating.",
    "Take the wheel back and things slowly get better.",
];

/// Display state plus the ordered list of quotes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteCollection {
    pub enabled: bool,
    pub list: Vec<String>,
    pub last: String,
}

impl Default for QuoteCollection {
    fn default() -> Self {
        Self {
            enabled: true,
            list: DEFAULT_QUOTES.iter().map(|s| s.to_string()).collect(),
            last: String::new(),
        }
    }
}

/// Lenient shape for rehydration: every field optional, types coerced by
/// serde, list falling back to the built-ins when empty.
#[derive(Deserialize, Default)]
struct PersistedQuotes {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    list: Vec<String>,
    #[serde(default)]
    last: String,
}

/// Owns the quote collection and its storage backend.
pub struct QuoteShelf<S: Storage> {
    storage: S,
    quotes: QuoteCollection,
}

impl<S: Storage> QuoteShelf<S> {
    /// Open the shelf, rehydrating from storage. A missing or malformed
    /// blob silently yields the defaults.
    pub fn open(storage: S) -> Self {
        let quotes = Self::load_from(&storage);
        Self { storage, quotes }
    }

    fn load_from(storage: &S) -> QuoteCollection {
        let raw = match storage.get(QUOTES_KEY) {
            Ok(Some(raw)) => raw,
            _ => return QuoteCollection::default(),
        };
        let persisted: PersistedQuotes = match serde_json::from_str(&raw) {
            Ok(persisted) => persisted,
            Err(_) => {
                debug!("persisted quotes malformed, starting from defaults");
                return QuoteCollection::default();
            }
        };
        let list = if persisted.list.is_empty() {
            DEFAULT_QUOTES.iter().map(|s| s.to_string()).collect()
        } else {
            persisted.list
        };
        QuoteCollection {
            enabled: persisted.enabled,
            list,
            last: persisted.last,
        }
    }

    pub fn quotes(&self) -> &QuoteCollection {
        &self.quotes
    }

    fn save(&mut self) -> Result<()> {
        let text = serde_json::to_string(&self.quotes)?;
        self.storage.set(QUOTES_KEY, &text)
    }

    /// Uniform pick, excluding the current `last` unless that would empty
    /// the pool.
    pub fn pick_random(&mut self) -> Result<String> {
        if self.quotes.list.is_empty() {
            return Ok(QUOTE_PLACEHOLDER.to_string());
        }
        let mut rng = rand::thread_rng();
        let pool: Vec<&String> = self
            .quotes
            .list
            .iter()
            .filter(|q| **q != self.quotes.last)
            .collect();
        let chosen = if pool.is_empty() {
            self.quotes.list.choose(&mut rng).cloned()
        } else {
            pool.choose(&mut rng).map(|q| (*q).clone())
        };
        // Non-empty list, so a choice always exists.
        let chosen = chosen.unwrap_or_default();
        self.quotes.last = chosen.clone();
        self.save()?;
        Ok(chosen)
    }

    /// Treat the list as a ring and advance one past `last`. When `last`
    /// is not in the list, the scan starts as if it sat at index 0.
    pub fn pick_next(&mut self) -> Result<String> {
        if self.quotes.list.is_empty() {
            return Ok(QUOTE_PLACEHOLDER.to_string());
        }
        let index = self
            .quotes
            .list
            .iter()
            .position(|q| *q == self.quotes.last)
            .unwrap_or(0);
        let next = (index + 1) % self.quotes.list.len();
        self.quotes.last = self.quotes.list[next].clone();
        self.save()?;
        Ok(self.quotes.last.clone())
    }

    /// Prepend a new quote and make it current. Empty or whitespace-only
    /// input is rejected with a missing-input error and no state change.
    pub fn add(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ReframeError::MissingInput("quote text"));
        }
        self.quotes.list.insert(0, text.to_string());
        self.quotes.last = text.to_string();
        self.save()
    }

    /// Remove the entry at `index`, clearing `last` if it matched so the
    /// next display re-picks.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if index >= self.quotes.list.len() {
            return Err(ReframeError::IndexOutOfBounds {
                index,
                len: self.quotes.list.len(),
            });
        }
        let removed = self.quotes.list.remove(index);
        if self.quotes.last == removed {
            self.quotes.last.clear();
        }
        self.save()
    }

    /// Toggle the display surface.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        self.quotes.enabled = enabled;
        self.save()
    }

    /// Text for the display surface: the placeholder when disabled, the
    /// held quote otherwise, re-picking when none is held.
    pub fn display_text(&mut self) -> Result<String> {
        if !self.quotes.enabled {
            return Ok(QUOTE_PLACEHOLDER.to_string());
        }
        if self.quotes.last.is_empty() {
            return self.pick_random();
        }
        Ok(self.quotes.last.clone())
    }
}
