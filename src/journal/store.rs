//! Journal persistence: load-merge, save, field writers, reset.

use crate::error::Result;
use crate::journal::merge::merge_with_defaults;
use crate::journal::record::Record;
use crate::storage::Storage;
use crate::types::LocalStamp;
use serde_json::Value;
use tracing::debug;

/// Storage key for the serialized reflection record.
pub const RECORD_KEY: &str = "reframe_record_v1";

/// Owns the in-memory record and its storage backend.
///
/// Every field writer is last-writer-wins and ends with an immediate
/// [`save`](JournalStore::save); there is no debouncing or batching.
pub struct JournalStore<S: Storage> {
    storage: S,
    record: Record,
}

impl<S: Storage> JournalStore<S> {
    /// Open the journal, rehydrating the record from storage.
    pub fn open(storage: S) -> Self {
        let record = Self::load_from(&storage);
        Self { storage, record }
    }

    /// The current in-memory record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Re-read and merge the persisted record.
    ///
    /// Missing key, parse failure, or a non-object value all fall back to
    /// fresh defaults; nothing is surfaced to the user.
    pub fn load(&self) -> Record {
        Self::load_from(&self.storage)
    }

    fn load_from(storage: &S) -> Record {
        let raw = match storage.get(RECORD_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Record::fresh(),
            Err(err) => {
                debug!(error = %err, "storage read failed, starting from defaults");
                return Record::fresh();
            }
        };

        let persisted = match serde_json::from_str::<Value>(&raw) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) | Err(_) => {
                debug!("persisted record malformed, starting from defaults");
                return Record::fresh();
            }
        };

        let defaults = Record::fresh();
        let defaults_value = match serde_json::to_value(&defaults) {
            Ok(value) => value,
            Err(_) => return defaults,
        };

        let merged = merge_with_defaults(defaults_value, persisted);
        match serde_json::from_value(merged) {
            Ok(record) => record,
            Err(err) => {
                debug!(error = %err, "merged record did not decode, starting from defaults");
                Record::fresh()
            }
        }
    }

    /// Persist the in-memory record, stamping `updatedAt`.
    pub fn save(&mut self) -> Result<()> {
        self.record.meta.updated_at = LocalStamp::now();
        let text = serde_json::to_string(&self.record)?;
        self.storage.set(RECORD_KEY, &text)
    }

    /// Replace the record with fresh defaults (new `createdAt`) and
    /// persist. Irreversible; callers confirm with the user first. The
    /// quote collection lives under its own key and is untouched.
    pub fn reset(&mut self) -> Result<&Record> {
        self.record = Record::fresh();
        self.save()?;
        Ok(&self.record)
    }

    // --- Field writers (step 1: pause) ---

    pub fn set_feel(&mut self, feel: impl Into<String>) -> Result<()> {
        self.record.step1.feel = feel.into();
        self.save()
    }

    pub fn set_pause_seconds(&mut self, seconds: u32) -> Result<()> {
        self.record.step1.seconds = seconds;
        self.save()
    }

    pub fn set_pause_note(&mut self, note: impl Into<String>) -> Result<()> {
        self.record.step1.note = note.into();
        self.save()
    }

    // --- Field writers (step 2: observe) ---

    pub fn set_thought(&mut self, thought: impl Into<String>) -> Result<()> {
        self.record.step2.thought = thought.into();
        self.save()
    }

    pub fn set_body(&mut self, body: impl Into<String>) -> Result<()> {
        self.record.step2.body = body.into();
        self.save()
    }

    /// Merge a body-sensation chip into step two, deduplicated and
    /// comma-joined. An empty chip is a no-op.
    pub fn add_body_sensation(&mut self, chip: &str) -> Result<()> {
        let chip = chip.trim();
        if chip.is_empty() {
            return Ok(());
        }
        let current = self.record.step2.body.trim();
        let mut parts: Vec<&str> = if current.is_empty() {
            Vec::new()
        } else {
            current
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect()
        };
        if !parts.contains(&chip) {
            parts.push(chip);
        }
        let joined = parts.join(", ");
        self.record.step2.body = joined;
        self.save()
    }

    pub fn set_score(&mut self, score: u8) -> Result<()> {
        self.record.step2.score = score;
        self.save()
    }

    pub fn set_observe_note(&mut self, note: impl Into<String>) -> Result<()> {
        self.record.step2.note = note.into();
        self.save()
    }

    // --- Field writers (step 3: redirect) ---

    pub fn set_old_reaction(&mut self, reaction: impl Into<String>) -> Result<()> {
        self.record.step3.old_reaction = reaction.into();
        self.save()
    }

    pub fn set_new_reaction(&mut self, reaction: impl Into<String>) -> Result<()> {
        self.record.step3.new_reaction = reaction.into();
        self.save()
    }

    pub fn set_tried_ten_percent(&mut self, tried: bool) -> Result<()> {
        self.record.step3.tried_ten_percent = tried;
        self.save()
    }

    pub fn set_redirect_note(&mut self, note: impl Into<String>) -> Result<()> {
        self.record.step3.note = note.into();
        self.save()
    }
}
