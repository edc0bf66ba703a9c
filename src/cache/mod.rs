//! Offline asset cache, keyed entirely by a version string.
//!
//! Mirrors a cache-first service worker: install populates a versioned
//! cache from a fixed asset manifest, activate garbage-collects older
//! generations, and fetch interception serves cached entries before the
//! network, with the cached root document as the offline navigation
//! fallback. There is no per-asset revalidation: a deploy that does not
//! bump the version string keeps serving what was cached.

pub mod entry;
pub mod store;
pub mod worker;

pub use entry::CacheEntry;
pub use store::CacheStore;
pub use worker::{
    CacheWorker, FetchOutcome, Fetcher, Method, Request, RequestMode, Response, ASSET_MANIFEST,
    CACHE_VERSION,
};
