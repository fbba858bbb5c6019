//! Localized text lookup with default-language fallback.

use crate::i18n::{content_for, Language};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Serialized content records, keyed by language code (built lazily)
static CONTENT_VALUES: OnceLock<HashMap<&'static str, Value>> = OnceLock::new();

fn content_value(language: Language) -> Option<&'static Value> {
    CONTENT_VALUES
        .get_or_init(|| {
            Language::all()
                .into_iter()
                .filter_map(|lang| {
                    serde_json::to_value(content_for(lang))
                        .ok()
                        .map(|value| (lang.code(), value))
                })
                .collect()
        })
        .get(language.code())
}

/// Walk a dotted key (`"index.techCategories.0.title"`) through a JSON value.
/// Numeric segments index into arrays.
fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Text lookup for one language.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Ordered lookup sources: the requested language, then the default.
    fn sources(&self) -> Vec<Language> {
        let default = Language::default_language();
        if self.language == default {
            vec![default]
        } else {
            vec![self.language, default]
        }
    }

    /// First string found at `key` across the lookup sources.
    pub fn text(&self, key: &str) -> Option<String> {
        self.sources().into_iter().find_map(|source| {
            content_value(source)
                .and_then(|root| lookup(root, key))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
    }

    /// Like [`Translator::text`], but an unknown key yields an empty string.
    pub fn text_or_empty(&self, key: &str) -> String {
        self.text(key).unwrap_or_default()
    }
}
