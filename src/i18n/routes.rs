//! Per-language route segments.

use crate::i18n::Language;
use serde::Serialize;

/// Route name → URL segment for one language. An empty segment is the site root.
#[derive(Debug, Clone, Serialize)]
pub struct RouteTable {
    entries: &'static [(&'static str, &'static str)],
}

impl RouteTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, route: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == route)
            .map(|(_, segment)| *segment)
    }

    /// Route names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

pub static JAPANESE_ROUTES: RouteTable = RouteTable::new(&[
    ("home", ""),
    ("blog", "blog"),
    ("works", "works"),
    ("posts", "posts"),
]);

pub static ENGLISH_ROUTES: RouteTable = RouteTable::new(&[
    ("home", ""),
    ("blog", "blog"),
    ("works", "works"),
    ("posts", "posts"),
]);

/// Route table for `language`.
pub fn routes_for(language: Language) -> &'static RouteTable {
    match language.code() {
        "en" => &ENGLISH_ROUTES,
        _ => &JAPANESE_ROUTES,
    }
}

/// URL segment of `route` in `language`.
///
/// Sources are consulted in order: the language's own table, then the default
/// language's table. An unknown route yields an empty segment.
pub fn translate_route_segment(route: &str, language: Language) -> &'static str {
    segment_from(
        &[routes_for(language), routes_for(Language::default_language())],
        route,
    )
}

/// Segment from the first table in `sources` that defines `route`, else `""`.
fn segment_from(sources: &[&RouteTable], route: &str) -> &'static str {
    sources
        .iter()
        .find_map(|table| table.get(route))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_routes() {
        assert_eq!(translate_route_segment("blog", Language::ENGLISH), "blog");
        assert_eq!(translate_route_segment("works", Language::JAPANESE), "works");
        assert_eq!(translate_route_segment("posts", Language::ENGLISH), "posts");
    }

    #[test]
    fn test_home_is_site_root() {
        assert_eq!(translate_route_segment("home", Language::ENGLISH), "");
    }

    #[test]
    fn test_unknown_route_is_empty() {
        assert_eq!(translate_route_segment("contact", Language::ENGLISH), "");
        assert_eq!(translate_route_segment("", Language::JAPANESE), "");
    }

    #[test]
    fn test_segment_from_falls_back_in_order() {
        static TARGET: RouteTable = RouteTable::new(&[("blog", "journal")]);
        static DEFAULT: RouteTable = RouteTable::new(&[("blog", "blog"), ("about", "about")]);

        let sources = [&TARGET, &DEFAULT];
        assert_eq!(segment_from(&sources, "blog"), "journal");
        assert_eq!(segment_from(&sources, "about"), "about");
        assert_eq!(segment_from(&sources, "contact"), "");
        assert_eq!(segment_from(&[], "blog"), "");
    }

    #[test]
    fn test_route_names_in_order() {
        let names: Vec<_> = JAPANESE_ROUTES.names().collect();
        assert_eq!(names, vec!["home", "blog", "works", "posts"]);
    }

    #[test]
    fn test_get_missing() {
        assert_eq!(ENGLISH_ROUTES.get("missing"), None);
    }
}
