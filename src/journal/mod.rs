//! The persisted reflection journal.
//!
//! One singleton record per storage key, holding the three guided steps
//! (pause, observe, redirect) plus metadata. Loading merges the persisted
//! blob over fresh defaults one level deep, so older blobs pick up newly
//! introduced fields without losing anything they already carry.

pub mod merge;
pub mod record;
pub mod store;

pub use record::{Meta, Record, StepOne, StepThree, StepTwo, APP_VERSION};
pub use store::{JournalStore, RECORD_KEY};
