//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is built once on first access through a `OnceLock` and is
//! immutable thereafter. Exactly one language is marked as the default; it is
//! the final fallback for resolution, route lookup, and localized text.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "ja", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Japanese", "English")
    pub name: &'static str,

    /// Native name of the language, shown on the switcher (e.g., "日本語")
    pub native_name: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is exact: `"JA"` or `"ja-JP"` are not `"ja"`.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all supported languages, in declaration order.
    pub fn list(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one default language.
    /// The table is static, so this is a build-time data defect.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Supported languages. Japanese is the site's default.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_japanese() {
        let config = LanguageRegistry::get().get_by_code("ja").unwrap();
        assert_eq!(config.code, "ja");
        assert_eq!(config.name, "Japanese");
        assert_eq!(config.native_name, "日本語");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get().get_by_code("en").unwrap();
        assert_eq!(config.native_name, "English");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("JA").is_none());
        assert!(registry.get_by_code("ja-JP").is_none());
        assert!(registry.get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_preserves_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list()
            .iter()
            .map(|lang| lang.code)
            .collect();
        assert_eq!(codes, vec!["ja", "en"]);
    }

    #[test]
    fn test_default_language_is_japanese() {
        assert_eq!(LanguageRegistry::get().default_language().code, "ja");
    }
}
