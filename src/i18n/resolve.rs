//! Active-language resolution.
//!
//! Priority: explicit URL segment, stored preference, browser locale, default.
//! Invalid input at any tier is treated as absent.

use crate::i18n::Language;

/// Resolve the active language from its three optional sources.
pub fn resolve_language(
    stored: Option<&str>,
    browser_locale: Option<&str>,
    url_segment: Option<&str>,
) -> Language {
    url_segment
        .and_then(Language::parse)
        .or_else(|| stored.and_then(Language::parse))
        .or_else(|| browser_locale.and_then(browser_language))
        .unwrap_or_else(Language::default_language)
}

/// Language of a browser locale tag, matched on its first two characters.
///
/// `"en-US"` and `"EN"` both match English. Tags whose first two characters
/// are not a language subtag (e.g. `"x-klingon"`) do not match.
pub fn browser_language(locale: &str) -> Option<Language> {
    let primary: String = locale.chars().take(2).collect::<String>().to_lowercase();
    Language::parse(&primary)
}

/// Most preferred language tag of an HTTP `Accept-Language` header.
///
/// Tags are ranked by their `q` value (1.0 when absent or malformed); ties
/// keep header order. Wildcards and `q=0` tags are never chosen.
pub fn browser_locale_from_accept_language(header: &str) -> Option<&str> {
    let mut best: Option<(&str, f32)> = None;

    for part in header.split(',') {
        let mut pieces = part.split(';');
        let tag = pieces.next().unwrap_or("").trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }

        let quality = pieces
            .filter_map(|param| param.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        if quality <= 0.0 {
            continue;
        }

        if best.map_or(true, |(_, q)| quality > q) {
            best = Some((tag, quality));
        }
    }

    best.map(|(tag, _)| tag)
}

/// Path segments of `pathname` with the site base removed.
///
/// The base is only removed when all of its segments match as a prefix.
pub fn strip_base_segments<'a>(pathname: &'a str, base: &str) -> Vec<&'a str> {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    let base_segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    if base_segments.is_empty() {
        return segments;
    }

    let matches_base = segments.len() >= base_segments.len()
        && base_segments
            .iter()
            .zip(segments.iter())
            .all(|(expected, actual)| expected == actual);

    if matches_base {
        segments[base_segments.len()..].to_vec()
    } else {
        segments
    }
}

/// Language named by the first path segment after the base, if any.
pub fn language_from_path(pathname: &str, base: &str) -> Option<Language> {
    strip_base_segments(pathname, base)
        .first()
        .and_then(|segment| Language::parse(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== resolve_language Tests ====================

    #[test]
    fn test_url_segment_wins() {
        let lang = resolve_language(Some("ja"), Some("ja-JP"), Some("en"));
        assert_eq!(lang, Language::ENGLISH);
    }

    #[test]
    fn test_stored_beats_browser() {
        let lang = resolve_language(Some("en"), Some("ja-JP"), None);
        assert_eq!(lang, Language::ENGLISH);
    }

    #[test]
    fn test_invalid_url_segment_falls_through() {
        let lang = resolve_language(Some("en"), None, Some("works"));
        assert_eq!(lang, Language::ENGLISH);
    }

    #[test]
    fn test_invalid_stored_falls_through_to_browser() {
        let lang = resolve_language(Some("fr"), Some("en-GB"), None);
        assert_eq!(lang, Language::ENGLISH);
    }

    #[test]
    fn test_browser_locale_uppercase() {
        assert_eq!(resolve_language(None, Some("EN-us"), None), Language::ENGLISH);
    }

    #[test]
    fn test_everything_absent_is_default() {
        assert_eq!(resolve_language(None, None, None), Language::JAPANESE);
    }

    #[test]
    fn test_everything_invalid_is_default() {
        let lang = resolve_language(Some(""), Some("de-DE"), Some("xx"));
        assert_eq!(lang, Language::JAPANESE);
    }

    #[test]
    fn test_region_first_tag_is_not_matched() {
        // Only the first two characters are considered.
        assert_eq!(browser_language("x-en"), None);
    }

    #[test]
    fn test_browser_language_multibyte_input() {
        assert_eq!(browser_language("日本"), None);
    }

    // ==================== Accept-Language Tests ====================

    #[test]
    fn test_accept_language_first_tag() {
        let header = "en-US,en;q=0.9,ja;q=0.8";
        assert_eq!(browser_locale_from_accept_language(header), Some("en-US"));
    }

    #[test]
    fn test_accept_language_skips_wildcard_and_blanks() {
        assert_eq!(browser_locale_from_accept_language(" , *;q=0.1, ja"), Some("ja"));
        assert_eq!(browser_locale_from_accept_language(""), None);
    }

    #[test]
    fn test_accept_language_orders_by_quality() {
        let header = "ja;q=0.1, en;q=0.9";
        assert_eq!(browser_locale_from_accept_language(header), Some("en"));
        assert_eq!(
            resolve_language(None, browser_locale_from_accept_language(header), None),
            Language::ENGLISH
        );
    }

    #[test]
    fn test_accept_language_ties_keep_header_order() {
        assert_eq!(browser_locale_from_accept_language("en;q=0.5, ja;q=0.5"), Some("en"));
        assert_eq!(browser_locale_from_accept_language("fr, en"), Some("fr"));
    }

    #[test]
    fn test_accept_language_rejects_zero_quality() {
        assert_eq!(browser_locale_from_accept_language("en;q=0, ja;q=0.2"), Some("ja"));
        assert_eq!(browser_locale_from_accept_language("en;q=0"), None);
    }

    // ==================== Path Tests ====================

    #[test]
    fn test_strip_base_segments_root_base() {
        assert_eq!(strip_base_segments("/en/works/", "/"), vec!["en", "works"]);
    }

    #[test]
    fn test_strip_base_segments_matching_base() {
        assert_eq!(
            strip_base_segments("/portfolio/ja/blog", "/portfolio/"),
            vec!["ja", "blog"]
        );
    }

    #[test]
    fn test_strip_base_segments_non_matching_base() {
        assert_eq!(
            strip_base_segments("/other/ja/blog", "/portfolio/"),
            vec!["other", "ja", "blog"]
        );
    }

    #[test]
    fn test_language_from_path() {
        assert_eq!(
            language_from_path("/portfolio/en/", "/portfolio/"),
            Some(Language::ENGLISH)
        );
        assert_eq!(language_from_path("/works/", "/"), None);
        assert_eq!(language_from_path("/", "/"), None);
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn prop_url_segment_always_wins(
            stored in proptest::option::of("[a-z]{0,5}"),
            browser in proptest::option::of("[a-zA-Z-]{0,8}"),
            index in 0usize..2,
        ) {
            let language = Language::all()[index];
            let resolved = resolve_language(
                stored.as_deref(),
                browser.as_deref(),
                Some(language.code()),
            );
            prop_assert_eq!(resolved, language);
        }

        #[test]
        fn prop_unsupported_stored_is_never_returned(stored in "[a-z]{0,6}") {
            prop_assume!(Language::parse(&stored).is_none());
            let resolved = resolve_language(Some(&stored), None, None);
            prop_assert_ne!(resolved.code(), stored.as_str());
            prop_assert_eq!(resolved, Language::default_language());
        }
    }
}
