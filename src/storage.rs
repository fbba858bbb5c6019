//! Persisted language preference.

use std::collections::HashMap;

/// Storage key of the persisted language (also the server's cookie name).
pub const STORAGE_KEY: &str = "portfolio-language";

/// Key/value storage holding the language preference.
///
/// Implemented by [`MemoryStorage`] and, with the `web` feature, by the
/// browser's `localStorage`.
pub trait LanguageStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a stored language value.
    pub fn with_language(value: &str) -> Self {
        let mut storage = Self::new();
        storage.set(STORAGE_KEY, value);
        storage
    }
}

impl LanguageStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
