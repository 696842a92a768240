use crate::store::PreferenceStore;
use tierlist_types::{CardLayout, DisplayOrder};
use tracing::{debug, warn};

/// A value with a string encoding and a validating decoder.
pub trait PersistedValue: Sized {
    fn encode(&self) -> String;

    /// Decodes and validates; `None` rejects the stored data.
    fn decode(raw: &str) -> Option<Self>;
}

impl PersistedValue for DisplayOrder {
    fn encode(&self) -> String {
        self.to_json()
    }

    fn decode(raw: &str) -> Option<Self> {
        DisplayOrder::parse_json(raw).ok()
    }
}

impl PersistedValue for CardLayout {
    fn encode(&self) -> String {
        self.as_str().to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Flags persist as `"1"`; any non-empty value reads as set.
impl PersistedValue for bool {
    fn encode(&self) -> String {
        if *self { "1".into() } else { String::new() }
    }

    fn decode(raw: &str) -> Option<Self> {
        Some(!raw.is_empty())
    }
}

/// An in-memory value mirrored to one store key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persisted<T> {
    key: &'static str,
    value: T,
}

impl<T: PersistedValue> Persisted<T> {
    /// Restores `key` from the store. Missing, corrupt or invalid data, and
    /// store read failures, all yield `default`.
    pub fn load<S>(store: &S, key: &'static str, default: T) -> Self
    where
        S: PreferenceStore + ?Sized,
    {
        let value = match store.get(key) {
            Ok(Some(raw)) => T::decode(&raw).unwrap_or_else(|| {
                debug!(key, "stored preference rejected, using default");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!(key, error = %e, "failed to read preference");
                default
            }
        };
        Self { key, value }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value, then writes it through. Write failures are
    /// logged; the new value stays in memory either way.
    pub fn set<S>(&mut self, store: &mut S, value: T)
    where
        S: PreferenceStore + ?Sized,
    {
        self.value = value;
        if let Err(e) = store.set(self.key, &self.value.encode()) {
            warn!(key = self.key, error = %e, "failed to persist preference");
        }
    }
}
