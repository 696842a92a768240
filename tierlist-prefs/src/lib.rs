//! User preferences backed by a key/value store.
//!
//! Values are loaded once, validated, and replaced with their defaults when
//! missing or corrupt. Writes update memory first; a failing store is logged
//! and otherwise ignored so the in-memory state keeps working.

pub mod error;
mod persisted;
mod preferences;
mod store;

pub use error::{PrefsError, PrefsResult};
pub use persisted::{Persisted, PersistedValue};
pub use preferences::{CARD_LAYOUT_KEY, Preferences, TIER_ORDER_KEY, TOUR_DONE_KEY};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore};
