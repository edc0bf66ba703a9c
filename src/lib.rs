//! # Reframe
//!
//! A local-first three-step reflection journal (pause, observe, redirect)
//! with a versioned, cache-first offline asset cache.
//!
//! ## Core Concepts
//!
//! - **Journal**: a singleton record persisted as plain JSON and
//!   rehydrated through a one-level merge, so older blobs pick up newly
//!   introduced defaults without losing what they carry
//! - **Quotes**: a user-editable affirmation list with ring and random
//!   pickers, persisted under its own key
//! - **Cache**: install/activate/fetch policy over versioned on-disk
//!   caches, invalidated only by bumping a version string
//! - **App**: intents in, effects out; all state explicitly owned
//!
//! ## Example
//!
//! ```ignore
//! use reframe::{AppContext, ClipboardChain, FileStorage, Intent, JournalStore, QuoteShelf};
//!
//! let journal = JournalStore::open(FileStorage::new("./data")?);
//! let quotes = QuoteShelf::open(FileStorage::new("./data")?);
//! let mut app = AppContext::new(journal, quotes, ClipboardChain::buffered());
//!
//! app.apply(Intent::SetFeel("tight chest".into()))?;
//! app.apply(Intent::ExportSummary)?;
//! ```

pub mod app;
pub mod cache;
pub mod error;
pub mod export;
pub mod journal;
pub mod quotes;
pub mod storage;
pub mod types;

// Re-exports
pub use app::clipboard::{BufferClipboard, Clipboard, ClipboardChain};
pub use app::install::{InstallChoice, InstallGate, InstallPrompt};
pub use app::timer::{PauseTimer, TimerEvent};
pub use app::{AppContext, Effect, Intent};
pub use cache::{
    CacheEntry, CacheStore, CacheWorker, FetchOutcome, Fetcher, Method, Request, RequestMode,
    Response, ASSET_MANIFEST, CACHE_VERSION,
};
pub use error::{ReframeError, Result};
pub use export::{export_file_name, export_to, summary_text};
pub use journal::{JournalStore, Meta, Record, StepOne, StepThree, StepTwo, RECORD_KEY};
pub use quotes::{QuoteCollection, QuoteShelf, DEFAULT_QUOTES, QUOTES_KEY, QUOTE_PLACEHOLDER};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use types::LocalStamp;
