//! Pure render plan: which page regions receive which content.
//!
//! Building a plan touches no surface. The plan lists regions in paint order;
//! each region has a root selector and updates that target either the root
//! itself or a selector nested under it.

use crate::i18n::{
    BlogContent, IndexContent, Language, MetaContent, NavContent, PageContent, TechCategory,
    TechItem, WorkItem, WorksContent,
};
use crate::render::{Element, Node, Selector};

const TECH_CARD_CLASS: &str = "rounded border border-blue-200 bg-white p-3 shadow-sm";
const TECH_TITLE_CLASS: &str = "text-sm font-semibold text-blue-700";
const TECH_LIST_CLASS: &str = "mt-2 list-disc list-inside space-y-1 text-sm";
const BLOG_LINK_CLASS: &str = "text-black text-lg underline";

/// What to do with a targeted element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace all children with a single text node
    Text(String),

    /// Clear the element and rebuild it from these nodes
    Children(Vec<Node>),

    SetAttribute { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// Nested target under the region root; `None` targets the root
    pub target: Option<Selector>,
    pub action: Action,
}

impl Update {
    fn on_root(action: Action) -> Self {
        Self {
            target: None,
            action,
        }
    }

    fn on(target: Selector, action: Action) -> Self {
        Self {
            target: Some(target),
            action,
        }
    }
}

/// A designated page area, rendered only when its root exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub root: Selector,
    pub updates: Vec<Update>,
}

/// Everything needed to paint one language onto a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub language: Language,
    pub title: String,
    pub regions: Vec<Region>,
}

impl RenderPlan {
    /// Build the plan for `language` from its content record.
    ///
    /// `base_path` prefixes site-relative URLs (images, blog posts) and is
    /// expected to end with `/`.
    pub fn build(language: Language, content: &PageContent, base_path: &str) -> Self {
        let mut regions = vec![
            navigation_region(&content.navigation),
            index_region(&content.index, language),
            works_region(&content.works, base_path),
        ];
        regions.extend(blog_regions(&content.blog, base_path));
        regions.extend(meta_regions(&content.meta));

        Self {
            language,
            title: content.meta.title.to_string(),
            regions,
        }
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }
}

fn navigation_region(nav: &NavContent) -> Region {
    let label = |key: &str, value: &str| {
        Update::on(
            Selector::attr_eq("data-nav-key", key),
            Action::Text(value.to_string()),
        )
    };

    Region {
        name: "navigation",
        root: Selector::attr("data-i18n-nav"),
        updates: vec![
            label("home", nav.home),
            label("blog", nav.blog),
            label("works", nav.works),
        ],
    }
}

fn index_region(index: &IndexContent, language: Language) -> Region {
    let field = |key: &str, value: &str| {
        Update::on(
            Selector::attr_eq("data-index-key", key),
            Action::Text(value.to_string()),
        )
    };

    let tech_cards: Vec<Node> = index
        .tech_categories
        .iter()
        .map(|category| tech_card(category, language))
        .collect();

    let accounts: Vec<Node> = index
        .accounts
        .iter()
        .map(|account| {
            Node::from(
                Element::new("li")
                    .text(format!("{}: ", account.label))
                    .child(external_link(account.href, account.value)),
            )
        })
        .collect();

    Region {
        name: "index",
        root: Selector::attr("data-i18n-index"),
        updates: vec![
            field("name", index.name),
            field("location", index.location),
            field("affiliation", index.affiliation),
            field("accountsTitle", index.accounts_title),
            field("interestsTitle", index.interests_title),
            field("contact", index.contact),
            field("techStackTitle", index.tech_stack_title),
            Update::on(
                Selector::attr("data-i18n-tech-stack"),
                Action::Children(tech_cards),
            ),
            Update::on(Selector::attr("data-i18n-accounts"), Action::Children(accounts)),
            Update::on(
                Selector::attr("data-i18n-interests"),
                Action::Children(list_items(index.interests.iter().copied())),
            ),
        ],
    }
}

fn tech_card(category: &TechCategory, language: Language) -> Node {
    let items = category
        .items
        .iter()
        .map(|item| tech_item_text(item, language));

    Element::new("div")
        .class(TECH_CARD_CLASS)
        .child(Element::new("h3").class(TECH_TITLE_CLASS).text(category.title))
        .child(
            Element::new("ul")
                .class(TECH_LIST_CLASS)
                .children(list_items(items)),
        )
        .into()
}

/// `"Go"`, `"Go (1 yr 6 mos)"`, `"Go (1年6ヶ月) - note"`.
pub fn tech_item_text(item: &TechItem, language: Language) -> String {
    let mut text = item.name.to_string();
    if let Some(months) = item.experience_months {
        text.push_str(&format!(" ({})", format_experience(months, language)));
    }
    if let Some(note) = item.note {
        text.push_str(&format!(" - {}", note));
    }
    text
}

/// Experience duration in the language's own style.
pub fn format_experience(months: u32, language: Language) -> String {
    let (years, rest) = (months / 12, months % 12);

    match language.code() {
        "en" => {
            let mut parts = Vec::new();
            if years > 0 {
                parts.push(format!("{} {}", years, if years == 1 { "yr" } else { "yrs" }));
            }
            if rest > 0 || years == 0 {
                parts.push(format!("{} {}", rest, if rest == 1 { "mo" } else { "mos" }));
            }
            parts.join(" ")
        }
        _ => {
            let mut text = String::new();
            if years > 0 {
                text.push_str(&format!("{}年", years));
            }
            if rest > 0 || years == 0 {
                text.push_str(&format!("{}ヶ月", rest));
            }
            text
        }
    }
}

fn list_items<I, S>(items: I) -> Vec<Node>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(|item| Node::from(Element::new("li").text(item)))
        .collect()
}

fn external_link(href: &str, text: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(text)
}

fn works_region(works: &WorksContent, base_path: &str) -> Region {
    let mut nodes: Vec<Node> = vec![Element::new("h1").text(works.heading).into()];

    nodes.extend(works.sections.iter().map(|section| {
        Node::from(
            Element::new("div")
                .class("mt-6")
                .child(Element::new("h2").text(section.title))
                .children(section.items.iter().map(|item| work_article(item, base_path))),
        )
    }));

    Region {
        name: "works",
        root: Selector::attr("data-i18n-works"),
        updates: vec![Update::on_root(Action::Children(nodes))],
    }
}

fn work_article(item: &WorkItem, base_path: &str) -> Node {
    let mut article = Element::new("article")
        .class("mt-4 space-y-2")
        .child(Element::new("h3").text(item.name));

    if let Some(image) = &item.image {
        article = article.child(
            Element::new("img")
                .attr("src", format!("{}{}", base_path, image.src))
                .attr("alt", image.alt)
                .attr("width", image.width.to_string())
                .attr("height", image.height.to_string()),
        );
    }

    for link in item.links {
        article = article.child(
            Element::new("p")
                .text(format!("{}: ", link.label))
                .child(external_link(link.href, link.text)),
        );
    }

    article = article.child(Element::new("p").text(item.description));

    if let Some(details) = item.details {
        article = article.child(Element::new("p").text(details));
    }
    if let Some(tech) = item.tech {
        article = article.child(Element::new("p").text(tech));
    }

    article.into()
}

/// `<base>posts/<slug>/`
pub fn blog_post_href(base_path: &str, slug: &str) -> String {
    format!("{}posts/{}/", base_path, slug)
}

fn blog_regions(blog: &BlogContent, base_path: &str) -> Vec<Region> {
    let posts: Vec<Node> = blog
        .posts
        .iter()
        .map(|post| {
            Node::from(
                Element::new("a")
                    .class(BLOG_LINK_CLASS)
                    .attr("href", blog_post_href(base_path, post.slug))
                    .text(post.title),
            )
        })
        .collect();

    vec![
        Region {
            name: "blog-heading",
            root: Selector::attr("data-i18n-blog-heading"),
            updates: vec![Update::on_root(Action::Text(blog.heading.to_string()))],
        },
        Region {
            name: "blog-posts",
            root: Selector::attr("data-i18n-blog-posts"),
            updates: vec![Update::on_root(Action::Children(posts))],
        },
        // Post pages carry only their own slug's heading.
        Region {
            name: "blog-post",
            root: Selector::attr("data-i18n-post"),
            updates: blog
                .posts
                .iter()
                .map(|post| {
                    Update::on(
                        Selector::attr_eq("data-post-slug", post.slug),
                        Action::Text(post.title.to_string()),
                    )
                })
                .collect(),
        },
    ]
}

fn meta_regions(meta: &MetaContent) -> Vec<Region> {
    let tag = |name: &'static str, attribute: &str, key: &str, value: &str| Region {
        name,
        root: Selector::tag_attr_eq("meta", attribute, key),
        updates: vec![Update::on_root(Action::SetAttribute {
            name: "content".to_string(),
            value: value.to_string(),
        })],
    };

    vec![
        tag("meta-description", "name", "description", meta.description),
        tag("meta-og-title", "property", "og:title", meta.title),
        tag("meta-og-description", "property", "og:description", meta.description),
        tag("meta-twitter-title", "name", "twitter:title", meta.title),
        tag("meta-twitter-description", "name", "twitter:description", meta.description),
    ]
}
