//! Shared types: local timestamps and normalized cache keys.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Local wall-clock stamp with minute precision (`YYYY-MM-DD HH:MM`).
///
/// Deliberately a plain string: the persisted record carries these stamps
/// verbatim and they are never parsed back.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalStamp(pub String);

impl LocalStamp {
    /// Current local time.
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    pub fn from_datetime(dt: DateTime<Local>) -> Self {
        LocalStamp(dt.format("%Y-%m-%d %H:%M").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LocalStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalStamp({})", self.0)
    }
}

impl fmt::Display for LocalStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cache key for a request URL with the query string and fragment
/// stripped, so `app.js?v=2` and `app.js` resolve to the same entry.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UrlKey(String);

impl UrlKey {
    pub fn from_url(url: &str) -> Self {
        let stripped = url.split(['?', '#']).next().unwrap_or(url);
        UrlKey(stripped.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest of the normalized URL, used as the entry file name.
    pub fn file_stem(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl fmt::Debug for UrlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UrlKey({})", self.0)
    }
}
