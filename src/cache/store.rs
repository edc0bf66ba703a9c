//! Versioned on-disk caches, one directory per version string.

use crate::cache::entry::CacheEntry;
use crate::error::Result;
use crate::types::UrlKey;
use lru::LruCache;
use parking_lot::Mutex;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// A single named cache generation under a shared root directory.
///
/// Lookups ignore query strings (see [`UrlKey`]). A small LRU of recently
/// served entries sits in front of the files.
pub struct CacheStore {
    root: PathBuf,
    name: String,
    recent: Mutex<LruCache<UrlKey, CacheEntry>>,
}

impl CacheStore {
    /// Open (or create) the cache named `name` under `root`.
    pub fn open(root: impl AsRef<Path>, name: &str, recent_size: usize) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join(name))?;

        let recent_size = NonZeroUsize::new(recent_size.max(1)).unwrap();

        Ok(Self {
            root,
            name: name.to_string(),
            recent: Mutex::new(LruCache::new(recent_size)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn dir(&self) -> PathBuf {
        self.root.join(&self.name)
    }

    fn entry_path(&self, key: &UrlKey) -> PathBuf {
        self.dir().join(key.file_stem())
    }

    /// Look up a URL, ignoring any query string.
    pub fn matching(&self, url: &str) -> Result<Option<CacheEntry>> {
        let key = UrlKey::from_url(url);

        if let Some(entry) = self.recent.lock().get(&key) {
            return Ok(Some(entry.clone()));
        }

        let path = self.entry_path(&key);
        if !path.exists() {
            return Ok(None);
        }

        let entry = CacheEntry::read_from(&path)?;
        self.recent.lock().put(key, entry.clone());
        Ok(Some(entry))
    }

    /// Store an entry under its normalized URL, replacing any previous one.
    pub fn put(&self, entry: CacheEntry) -> Result<()> {
        let key = UrlKey::from_url(&entry.url);
        entry.write_to(&self.entry_path(&key))?;
        self.recent.lock().put(key, entry);
        Ok(())
    }

    /// Names of every cache generation under `root`.
    pub fn list_caches(root: impl AsRef<Path>) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for dir_entry in fs::read_dir(root)? {
            let dir_entry = dir_entry?;
            if dir_entry.file_type()?.is_dir() {
                names.push(dir_entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    /// Delete the cache generation `name` under `root` entirely.
    pub fn delete_cache(root: impl AsRef<Path>, name: &str) -> Result<bool> {
        let dir = root.as_ref().join(name);
        if dir.exists() {
            fs::remove_dir_all(dir)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
