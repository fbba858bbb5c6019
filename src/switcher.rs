//! Language switcher binding.
//!
//! The switcher root (`[data-language-switcher]`) holds buttons tagged with
//! `data-language-button="<code>"`. Clicking one applies and persists that
//! language, then restyles the buttons so only the active one is highlighted.

use crate::client::{ApplyOptions, I18nClient};
use crate::i18n::Language;
use crate::render::{Selector, Surface};
use crate::storage::LanguageStorage;
use tracing::warn;

pub const SWITCHER_ROOT_ATTRIBUTE: &str = "data-language-switcher";
pub const SWITCHER_BUTTON_ATTRIBUTE: &str = "data-language-button";

pub const ACTIVE_BUTTON_CLASSES: &[&str] = &["bg-white", "text-blue-600"];
pub const INACTIVE_BUTTON_CLASSES: &[&str] = &["bg-blue-500", "text-white/80"];

#[derive(Debug, Clone)]
pub struct SwitcherButton<H> {
    pub handle: H,

    /// Raw `data-language-button` value; may name an unsupported language
    pub language: Option<String>,
}

/// Buttons found under the switcher root.
#[derive(Debug, Clone)]
pub struct LanguageSwitcher<H> {
    buttons: Vec<SwitcherButton<H>>,
}

impl<H: Clone> LanguageSwitcher<H> {
    /// Localize the page and bind the switcher, if the page has one.
    ///
    /// The initial language comes from storage or the browser locale and is
    /// not persisted. Without a switcher root the page is still localized,
    /// a warning is logged, and `None` is returned.
    pub fn bind<S, T>(
        client: &mut I18nClient<S, T>,
        browser_locale: Option<&str>,
    ) -> Option<LanguageSwitcher<H>>
    where
        S: Surface<Handle = H>,
        T: LanguageStorage,
    {
        let root = client
            .surface()
            .query(None, &Selector::attr(SWITCHER_ROOT_ATTRIBUTE));

        let Some(root) = root else {
            client.init_language(browser_locale);
            warn!("Language switcher root not found.");
            return None;
        };

        let surface = client.surface();
        let buttons = surface
            .query_all(Some(&root), &Selector::attr(SWITCHER_BUTTON_ATTRIBUTE))
            .into_iter()
            .map(|handle| SwitcherButton {
                language: surface.attribute(&handle, SWITCHER_BUTTON_ATTRIBUTE),
                handle,
            })
            .collect();

        let switcher = LanguageSwitcher { buttons };
        let initial = client.init_language(browser_locale);
        switcher.update_button_styles(client.surface_mut(), initial);
        Some(switcher)
    }

    pub fn buttons(&self) -> &[SwitcherButton<H>] {
        &self.buttons
    }

    /// Handle a click on the button at `index`.
    ///
    /// Buttons without a language value are ignored. An unsupported value is
    /// rejected by the client (one warning, no change); the styles are
    /// refreshed against whatever language is current afterwards.
    pub fn click<S, T>(&self, client: &mut I18nClient<S, T>, index: usize) -> Option<Language>
    where
        S: Surface<Handle = H>,
        T: LanguageStorage,
    {
        let code = self.buttons.get(index)?.language.as_deref()?;
        let applied = client.apply_language(code, ApplyOptions::default());
        let active = client.current_language();
        self.update_button_styles(client.surface_mut(), active);
        applied
    }

    /// Mark the button for `active` and unmark all others.
    pub fn update_button_styles<S>(&self, surface: &mut S, active: Language)
    where
        S: Surface<Handle = H>,
    {
        for button in &self.buttons {
            if button.language.as_deref() == Some(active.code()) {
                surface.add_classes(&button.handle, ACTIVE_BUTTON_CLASSES);
                surface.remove_classes(&button.handle, INACTIVE_BUTTON_CLASSES);
            } else {
                surface.add_classes(&button.handle, INACTIVE_BUTTON_CLASSES);
                surface.remove_classes(&button.handle, ACTIVE_BUTTON_CLASSES);
            }
        }
    }
}
