//! Page skeletons and server-side rendering.
//!
//! Each page is a skeleton carrying the marker attributes the renderer looks
//! for. Rendering builds the skeleton into a [`Document`], paints the chosen
//! language onto it through [`I18nClient`], and serializes the result.

use crate::client::I18nClient;
use crate::dom::Document;
use crate::i18n::{content_for, translate_route_segment, Language, PathTranslator};
use crate::render::{Element, Node};
use crate::storage::MemoryStorage;
use crate::switcher::{LanguageSwitcher, SWITCHER_BUTTON_ATTRIBUTE, SWITCHER_ROOT_ATTRIBUTE};

/// Site-wide rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Always starts and ends with `/`
    pub base_path: String,
    pub show_default_language: bool,

    /// wasm-bindgen bundle started on every page (the browser switcher)
    pub client_script: Option<String>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            show_default_language: true,
            client_script: None,
        }
    }
}

impl SiteOptions {
    /// Absolute href of a site path, honoring the base path.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base_path.trim_end_matches('/'), path)
    }

    /// Href of a named route in `target`.
    pub fn route_href(&self, route: &str, target: Language) -> String {
        let translator = PathTranslator::new(target, self.show_default_language);
        let segment = translate_route_segment(route, target);
        let path = if segment.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", segment)
        };
        self.href(&translator.translate(&path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Works,
    Blog,

    /// A single blog post, by slug
    Post(&'static str),
}

impl Page {
    /// Pages served under every language prefix.
    pub const ALL: [Page; 3] = [Page::Home, Page::Works, Page::Blog];

    /// Route name in the route tables.
    pub fn route(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Works => "works",
            Page::Blog => "blog",
            Page::Post(_) => "posts",
        }
    }

    /// The post page for `slug`, if any language lists it.
    pub fn post(slug: &str) -> Option<Page> {
        Language::all()
            .into_iter()
            .flat_map(|language| content_for(language).blog.posts.iter())
            .find(|post| post.slug == slug)
            .map(|post| Page::Post(post.slug))
    }

    fn main(&self) -> Element {
        let main = Element::new("main").class("mx-auto max-w-3xl p-6");
        match self {
            Page::Home => main.child(index_section()),
            Page::Works => main.child(Element::new("section").attr("data-i18n-works", "")),
            Page::Blog => main
                .child(Element::new("h1").attr("data-i18n-blog-heading", ""))
                .child(
                    Element::new("div")
                        .class("mt-4 flex flex-col gap-2")
                        .attr("data-i18n-blog-posts", ""),
                ),
            Page::Post(slug) => main.child(
                Element::new("article")
                    .attr("data-i18n-post", "")
                    .child(
                        Element::new("h1")
                            .class("text-2xl font-bold")
                            .attr("data-post-slug", *slug),
                    ),
            ),
        }
    }
}

fn index_key(tag: &str, key: &str) -> Element {
    Element::new(tag).attr("data-index-key", key)
}

fn index_section() -> Element {
    Element::new("section")
        .attr("data-i18n-index", "")
        .child(index_key("h1", "name"))
        .child(index_key("p", "location"))
        .child(index_key("p", "affiliation"))
        .child(index_key("h2", "techStackTitle"))
        .child(
            Element::new("div")
                .class("grid gap-3 sm:grid-cols-3")
                .attr("data-i18n-tech-stack", ""),
        )
        .child(index_key("h2", "accountsTitle"))
        .child(Element::new("ul").attr("data-i18n-accounts", ""))
        .child(index_key("h2", "interestsTitle"))
        .child(
            Element::new("ul")
                .class("list-disc list-inside")
                .attr("data-i18n-interests", ""),
        )
        .child(index_key("p", "contact"))
}

fn head(options: &SiteOptions) -> Vec<Node> {
    let meta = |attribute: &str, key: &str| {
        Node::from(Element::new("meta").attr(attribute, key).attr("content", ""))
    };

    let mut nodes: Vec<Node> = vec![
        Element::new("meta").attr("charset", "utf-8").into(),
        Element::new("meta")
            .attr("name", "viewport")
            .attr("content", "width=device-width, initial-scale=1")
            .into(),
        Element::new("title").into(),
        meta("name", "description"),
        meta("property", "og:title"),
        meta("property", "og:description"),
        meta("name", "twitter:title"),
        meta("name", "twitter:description"),
    ];

    if let Some(script) = &options.client_script {
        nodes.push(
            Element::new("script")
                .attr("type", "module")
                .text(start_script(&options.href(script), &options.base_path))
                .into(),
        );
    }
    nodes
}

/// Module body that loads the wasm bundle and localizes the page.
fn start_script(bundle: &str, base_path: &str) -> String {
    let literal = |value: &str| serde_json::Value::from(value).to_string();
    format!(
        "import init, {{ start }} from {};\nawait init();\nstart({});",
        literal(bundle),
        literal(base_path)
    )
}

fn header(language: Language, options: &SiteOptions) -> Element {
    let nav_link = |route: &str| {
        Element::new("a")
            .class("hover:underline")
            .attr("data-nav-key", route)
            .attr("href", options.route_href(route, language))
    };

    let buttons = Language::all().into_iter().map(|lang| {
        Node::from(
            Element::new("button")
                .attr("type", "button")
                .class("rounded px-2 py-1 text-sm")
                .attr(SWITCHER_BUTTON_ATTRIBUTE, lang.code())
                .text(lang.native_name()),
        )
    });

    Element::new("header")
        .class("flex items-center justify-between bg-blue-500 p-4 text-white")
        .child(
            Element::new("nav")
                .class("flex gap-4")
                .attr("data-i18n-nav", "")
                .child(nav_link("home"))
                .child(nav_link("blog"))
                .child(nav_link("works")),
        )
        .child(
            Element::new("div")
                .class("flex gap-1")
                .attr(SWITCHER_ROOT_ATTRIBUTE, "")
                .children(buttons),
        )
}

/// Unpainted skeleton of `page`.
pub fn skeleton(page: Page, language: Language, options: &SiteOptions) -> Document {
    Document::new(
        head(options),
        vec![header(language, options).into(), page.main().into()],
    )
}

/// Fully rendered HTML of `page` in `language`, switcher buttons styled.
pub fn render_page(page: Page, language: Language, options: &SiteOptions) -> String {
    // Seeding storage makes initial resolution land on `language`.
    let mut client = I18nClient::new(
        skeleton(page, language, options),
        MemoryStorage::with_language(language.code()),
        options.base_path.clone(),
    );
    LanguageSwitcher::bind(&mut client, None);

    let mut html = client.into_parts().0.to_html();
    html.push('\n');
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Selector, Surface};

    fn options(base: &str, show_default: bool) -> SiteOptions {
        SiteOptions {
            base_path: base.to_string(),
            show_default_language: show_default,
            client_script: None,
        }
    }

    #[test]
    fn test_route_href() {
        let opts = options("/", true);
        assert_eq!(opts.route_href("home", Language::JAPANESE), "/ja/");
        assert_eq!(opts.route_href("blog", Language::ENGLISH), "/en/blog/");
    }

    #[test]
    fn test_route_href_hidden_default_with_base() {
        let opts = options("/portfolio/", false);
        assert_eq!(opts.route_href("works", Language::JAPANESE), "/portfolio/works/");
        assert_eq!(opts.route_href("works", Language::ENGLISH), "/portfolio/en/works/");
    }

    #[test]
    fn test_skeleton_regions() {
        let doc = skeleton(Page::Home, Language::ENGLISH, &SiteOptions::default());
        assert!(doc.query(None, &Selector::attr("data-i18n-index")).is_some());
        assert!(doc.query(None, &Selector::attr("data-i18n-works")).is_none());
        assert_eq!(doc.element_count(&Selector::attr(SWITCHER_BUTTON_ATTRIBUTE)), 2);
    }

    #[test]
    fn test_render_home_english() {
        let html = render_page(Page::Home, Language::ENGLISH, &SiteOptions::default());
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains("Name: Naoyuki Miyamoto"));
        assert!(html.contains("content=\"The portfolio site of Naoyuki Miyamoto.\""));
        assert!(html.contains("href=\"/en/works/\""));
        assert!(html.contains("class=\"rounded px-2 py-1 text-sm bg-white text-blue-600\" data-language-button=\"en\""));
    }

    #[test]
    fn test_render_blog_japanese() {
        let html = render_page(Page::Blog, Language::JAPANESE, &options("/portfolio/", true));
        assert!(html.contains("イベントなどの記録"));
        assert!(html.contains("href=\"/portfolio/posts/ns-business-plan-contest/\""));
        assert!(!html.contains("data-i18n-index"));
    }

    #[test]
    fn test_client_script_included() {
        let opts = SiteOptions {
            client_script: Some("/pkg/switcher.js".to_string()),
            ..options("/portfolio/", true)
        };
        let html = render_page(Page::Works, Language::ENGLISH, &opts);
        assert!(html.contains(
            "<script type=\"module\">import init, { start } from \"/portfolio/pkg/switcher.js\";\n\
             await init();\n\
             start(\"/portfolio/\");</script>"
        ));
    }

    #[test]
    fn test_no_client_script_by_default() {
        let html = render_page(Page::Home, Language::JAPANESE, &SiteOptions::default());
        assert!(!html.contains("<script"));
    }

    // ==================== Posts ====================

    #[test]
    fn test_post_lookup() {
        assert_eq!(
            Page::post("ns-business-plan-contest"),
            Some(Page::Post("ns-business-plan-contest"))
        );
        assert_eq!(Page::post("no-such-post"), None);
    }

    #[test]
    fn test_render_post_in_each_language() {
        let page = Page::post("ns-business-plan-contest").unwrap();

        let html = render_page(page, Language::ENGLISH, &SiteOptions::default());
        assert!(html.contains(
            "data-post-slug=\"ns-business-plan-contest\">We joined the N/S Entrepreneurship Business Plan Contest 2024!</h1>"
        ));

        let html = render_page(page, Language::JAPANESE, &SiteOptions::default());
        assert!(html.contains("N/S起業部ビジネスプランコンテスト2024に参加してきました！</h1>"));
    }

    #[test]
    fn test_blog_links_match_post_page() {
        let opts = options("/portfolio/", true);
        let html = render_page(Page::Blog, Language::ENGLISH, &opts);
        let href = crate::render::blog_post_href(&opts.base_path, "ns-business-plan-contest");
        assert!(html.contains(&format!("href=\"{}\"", href)));
        assert_eq!(href, "/portfolio/posts/ns-business-plan-contest/");
    }
}
