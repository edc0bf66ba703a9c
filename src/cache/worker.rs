//! The offline cache worker: install, activate, and fetch interception.

use crate::cache::entry::CacheEntry;
use crate::cache::store::CacheStore;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Cache-name version string. Bumping it is the entire invalidation
/// mechanism; a deploy that forgets keeps serving the old generation.
pub const CACHE_VERSION: &str = "reframe-v1.0.4";

/// Assets populated at install time. Renaming or adding an asset means
/// editing this list and bumping [`CACHE_VERSION`].
pub const ASSET_MANIFEST: [&str; 7] = [
    "./",
    "./index.html",
    "./style.css",
    "./app.js",
    "./manifest.json",
    "./assets/icons/icon-192.png",
    "./assets/icons/icon-512.png",
];

const RECENT_ENTRIES: usize = 32;

/// Request method; only GET is ever intercepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
}

/// Whether the request is a page navigation or a subresource load. Only
/// navigations get the cached-root-document fallback when offline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestMode {
    Navigate,
    Subresource,
}

#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub mode: RequestMode,
}

impl Request {
    /// A plain GET for a subresource.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            mode: RequestMode::Subresource,
        }
    }

    /// A page navigation.
    pub fn navigation(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            mode: RequestMode::Navigate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub url: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl From<CacheEntry> for Response {
    fn from(entry: CacheEntry) -> Self {
        Response {
            url: entry.url,
            content_type: entry.content_type,
            body: entry.body,
        }
    }
}

/// Stand-in for the live network.
pub trait Fetcher {
    fn fetch(&self, request: &Request) -> Result<Response>;
}

/// What the worker decided for a request.
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Non-GET requests pass through untouched.
    NotIntercepted,
    /// Served verbatim from the versioned cache, no revalidation.
    Cached(Response),
    /// Fetched live (and cached when same-origin).
    Network(Response),
    /// Live fetch failed; the cached root document stands in.
    Fallback(Response),
}

/// One worker generation: a versioned cache plus the interception policy.
pub struct CacheWorker {
    root: PathBuf,
    origin: String,
    cache: CacheStore,
}

impl CacheWorker {
    /// Open a worker for the given version string. The cache directory is
    /// created immediately; population happens in [`install`](Self::install).
    pub fn new(root: impl AsRef<Path>, origin: impl Into<String>, version: &str) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let cache = CacheStore::open(&root, &format!("cache-{version}"), RECENT_ENTRIES)?;
        Ok(Self {
            root,
            origin: origin.into(),
            cache,
        })
    }

    /// Worker for the crate's current deploy version.
    pub fn current(root: impl AsRef<Path>, origin: impl Into<String>) -> Result<Self> {
        Self::new(root, origin, CACHE_VERSION)
    }

    pub fn cache_name(&self) -> &str {
        self.cache.name()
    }

    fn asset_url(&self, asset: &str) -> String {
        format!("{}{}", self.origin, asset.trim_start_matches('.'))
    }

    /// Install phase: populate the cache from the asset manifest.
    ///
    /// All-or-nothing: every asset is fetched before anything is written,
    /// so one failed fetch leaves the cache unpopulated and fails the
    /// install. Completion marks the worker immediately eligible for
    /// activation (no waiting on existing clients).
    pub fn install<F: Fetcher>(&self, fetcher: &F) -> Result<()> {
        let mut fetched = Vec::with_capacity(ASSET_MANIFEST.len());
        for asset in ASSET_MANIFEST {
            let request = Request::get(self.asset_url(asset));
            fetched.push(fetcher.fetch(&request)?);
        }
        for response in fetched {
            self.cache.put(CacheEntry {
                url: response.url,
                content_type: response.content_type,
                body: response.body,
            })?;
        }
        debug!(cache = %self.cache.name(), "install complete");
        Ok(())
    }

    /// Activate phase: delete every cache generation except this one and
    /// take over (nothing beyond the sweep in this model).
    pub fn activate(&self) -> Result<()> {
        for name in CacheStore::list_caches(&self.root)? {
            if name != self.cache.name() {
                debug!(cache = %name, "removing stale cache generation");
                CacheStore::delete_cache(&self.root, &name)?;
            }
        }
        Ok(())
    }

    /// Fetch interception: cache-first with a live-network fallback, and
    /// the cached root document for failed navigations.
    ///
    /// Cache hits are served forever until the generation itself is
    /// replaced by a version bump. Cross-origin responses are returned but
    /// never cached. Non-navigation fetch failures propagate untouched.
    pub fn handle_fetch<F: Fetcher>(&self, request: &Request, fetcher: &F) -> Result<FetchOutcome> {
        if request.method != Method::Get {
            return Ok(FetchOutcome::NotIntercepted);
        }

        match self.cache.matching(&request.url) {
            Ok(Some(entry)) => {
                debug!(url = %request.url, "cache hit");
                return Ok(FetchOutcome::Cached(entry.into()));
            }
            Ok(None) => {}
            Err(err) => {
                warn!(url = %request.url, error = %err, "cache read failed, treating as miss");
            }
        }

        match fetcher.fetch(request) {
            Ok(response) => {
                if origin_of(&request.url) == Some(self.origin.as_str()) {
                    self.cache.put(CacheEntry {
                        url: response.url.clone(),
                        content_type: response.content_type.clone(),
                        body: response.body.clone(),
                    })?;
                }
                Ok(FetchOutcome::Network(response))
            }
            Err(err) => {
                if request.mode == RequestMode::Navigate {
                    let fallback = self
                        .cache
                        .matching(&self.asset_url("./index.html"))
                        .ok()
                        .flatten();
                    if let Some(entry) = fallback {
                        debug!(url = %request.url, "serving offline navigation fallback");
                        return Ok(FetchOutcome::Fallback(entry.into()));
                    }
                }
                Err(err)
            }
        }
    }
}

/// `scheme://authority` prefix of a URL, if it has one.
fn origin_of(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")?;
    let after = scheme_end + 3;
    match url[after..].find('/') {
        Some(i) => Some(&url[..after + i]),
        None => Some(url),
    }
}
