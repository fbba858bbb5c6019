//! Internationalization (i18n) module.
//!
//! All language-related data and lookup logic lives here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and the default
//! - `language`: Validated `Language` type
//! - `content`: Per-language page content tables
//! - `routes`: Per-language route segments
//! - `resolve`: Active-language resolution (URL, storage, browser, default)
//! - `paths`: Language-prefixed path translation
//! - `translator`: Dotted-key text lookup with default-language fallback
//! - `validator`: Structural parity checks across languages
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_site::i18n::{resolve_language, translate_path, Language};
//!
//! let language = resolve_language(Some("en"), Some("ja-JP"), None);
//! assert_eq!(translate_path("/works", language, true), "/en/works");
//! ```

mod content;
mod language;
mod paths;
mod registry;
mod resolve;
mod routes;
mod translator;
mod validator;

pub use content::{
    content_for, AccountLink, BlogContent, BlogPost, IndexContent, MetaContent, NavContent,
    PageContent, TechCategory, TechItem, WorkImage, WorkItem, WorkLink, WorkSection,
    WorksContent, ENGLISH_CONTENT, JAPANESE_CONTENT,
};
pub use language::{Language, LanguageError};
pub use paths::{language_static_paths, translate_path, LanguagePath, PathTranslator};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolve::{
    browser_language, browser_locale_from_accept_language, language_from_path, resolve_language,
    strip_base_segments,
};
pub use routes::{routes_for, translate_route_segment, RouteTable, ENGLISH_ROUTES, JAPANESE_ROUTES};
pub use translator::Translator;
pub use validator::{ContentValidator, ValidationReport};
