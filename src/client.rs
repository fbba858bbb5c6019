//! Client renderer: applies a language to a page and remembers the choice.

use crate::i18n::{content_for, resolve_language, Language};
use crate::render::{apply_plan, ApplyReport, RenderPlan, Surface};
use crate::storage::{LanguageStorage, STORAGE_KEY};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Write the language to storage
    pub persist: bool,
}

impl ApplyOptions {
    /// Options for initial resolution, which must not overwrite what it just read.
    pub fn transient() -> Self {
        Self { persist: false }
    }
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self { persist: true }
    }
}

/// The only runtime-mutable state: the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageState {
    current: Language,
    initialized: bool,
}

impl LanguageState {
    pub fn current(&self) -> Language {
        self.current
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self {
            current: Language::default_language(),
            initialized: false,
        }
    }
}

/// Renders content onto a surface and keeps storage in step with it.
pub struct I18nClient<S: Surface, T: LanguageStorage> {
    surface: S,
    storage: T,
    state: LanguageState,
    base_path: String,
}

impl<S: Surface, T: LanguageStorage> I18nClient<S, T> {
    pub fn new(surface: S, storage: T, base_path: impl Into<String>) -> Self {
        Self {
            surface,
            storage,
            state: LanguageState::default(),
            base_path: base_path.into(),
        }
    }

    pub fn current_language(&self) -> Language {
        self.state.current()
    }

    pub fn state(&self) -> LanguageState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn storage(&self) -> &T {
        &self.storage
    }

    pub fn into_parts(self) -> (S, T) {
        (self.surface, self.storage)
    }

    /// Language from storage, then the browser locale, then the default.
    pub fn detect_language(&self, browser_locale: Option<&str>) -> Language {
        let stored = self.storage.get(STORAGE_KEY);
        resolve_language(stored.as_deref(), browser_locale, None)
    }

    /// Resolve and apply the initial language once, without persisting it.
    ///
    /// Later calls return the current language unchanged.
    pub fn init_language(&mut self, browser_locale: Option<&str>) -> Language {
        if !self.state.initialized {
            let language = self.detect_language(browser_locale);
            self.apply(language, ApplyOptions::transient());
            self.state.initialized = true;
        }
        self.state.current
    }

    /// Apply the language named by `code`.
    ///
    /// An unsupported code logs one warning and leaves the page and state
    /// untouched; `None` is returned in that case.
    pub fn apply_language(&mut self, code: &str, options: ApplyOptions) -> Option<Language> {
        match Language::from_code(code) {
            Ok(language) => {
                self.apply(language, options);
                Some(language)
            }
            Err(e) => {
                warn!("Unsupported language: {} ({})", code, e);
                None
            }
        }
    }

    fn apply(&mut self, language: Language, options: ApplyOptions) -> ApplyReport {
        self.state.current = language;
        self.surface.set_document_language(language.code());

        if options.persist {
            self.storage.set(STORAGE_KEY, language.code());
        }

        let plan = RenderPlan::build(language, content_for(language), &self.base_path);
        let report = apply_plan(&mut self.surface, &plan);
        debug!(
            "Applied {} ({} regions painted, {} skipped)",
            language.code(),
            report.applied.len(),
            report.skipped.len()
        );
        report
    }
}
