//! Language-prefixed URL paths.

use crate::i18n::Language;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static SEPARATOR_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Collapse every run of two or more `/` into a single one.
fn collapse_separators(path: &str) -> String {
    let regex = SEPARATOR_RUN_REGEX.get_or_init(|| Regex::new(r"/{2,}").unwrap());
    regex.replace_all(path, "/").into_owned()
}

/// Path translated to `target`.
///
/// The path is normalized to start with a single `/`, and runs of `/` are
/// collapsed. When `show_default_language` is
/// false and `target` is the default language, the path stays unprefixed;
/// otherwise it is prefixed with `/<target>`.
pub fn translate_path(path: &str, target: Language, show_default_language: bool) -> String {
    let normalized = collapse_separators(&format!("/{}", path));

    if !show_default_language && target.is_default() {
        return normalized;
    }

    format!("/{}{}", target.code(), normalized)
}

/// Path translator bound to the page's current language.
#[derive(Debug, Clone, Copy)]
pub struct PathTranslator {
    current: Language,
    show_default_language: bool,
}

impl PathTranslator {
    pub fn new(current: Language, show_default_language: bool) -> Self {
        Self {
            current,
            show_default_language,
        }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Translate `path` into the current language.
    pub fn translate(&self, path: &str) -> String {
        self.translate_to(path, self.current)
    }

    pub fn translate_to(&self, path: &str, target: Language) -> String {
        translate_path(path, target, self.show_default_language)
    }
}

/// Route parameters for one language page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguagePath {
    pub lang: Language,
}

/// One entry per supported language.
pub fn language_static_paths() -> Vec<LanguagePath> {
    Language::all()
        .into_iter()
        .map(|lang| LanguagePath { lang })
        .collect()
}
