//! Per-language page content.
//!
//! Every language has one complete `PageContent` record. The records must be
//! structurally identical: same keys, same optional fields populated, same
//! list lengths. `ContentValidator` checks this statically.

use crate::i18n::Language;
use serde::Serialize;

/// All localized content of the site for one language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub navigation: NavContent,
    pub index: IndexContent,
    pub works: WorksContent,
    pub blog: BlogContent,
    pub meta: MetaContent,
}

/// Navigation labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavContent {
    pub home: &'static str,
    pub blog: &'static str,
    pub works: &'static str,
}

/// The "about me" index page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexContent {
    pub name: &'static str,
    pub location: &'static str,
    pub affiliation: &'static str,
    pub tech_stack_title: &'static str,
    pub tech_categories: &'static [TechCategory],
    pub accounts_title: &'static str,
    pub accounts: &'static [AccountLink],
    pub interests_title: &'static str,
    pub interests: &'static [&'static str],
    pub contact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechCategory {
    pub title: &'static str,
    pub items: &'static [TechItem],
}

/// One entry of a tech-stack category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechItem {
    pub name: &'static str,

    /// Hands-on experience, in months
    pub experience_months: Option<u32>,

    pub note: Option<&'static str>,
}

impl TechItem {
    /// Item with neither experience nor note.
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            experience_months: None,
            note: None,
        }
    }
}

/// External account. `id` is a stable key and is never displayed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksContent {
    pub heading: &'static str,
    pub sections: &'static [WorkSection],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSection {
    pub title: &'static str,
    pub items: &'static [WorkItem],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub name: &'static str,
    pub description: &'static str,
    pub details: Option<&'static str>,
    pub tech: Option<&'static str>,
    pub image: Option<WorkImage>,
    pub links: &'static [WorkLink],
}

/// Screenshot of a work. `src` is relative to the site base path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLink {
    pub label: &'static str,
    pub text: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContent {
    pub heading: &'static str,
    pub posts: &'static [BlogPost],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaContent {
    pub title: &'static str,
    pub description: &'static str,
}

/// Content record for `language`.
pub fn content_for(language: Language) -> &'static PageContent {
    match language.code() {
        "en" => &ENGLISH_CONTENT,
        _ => &JAPANESE_CONTENT,
    }
}

// Shared between both languages: identical link targets and item names.
const ACCOUNTS: &[AccountLink] = &[
    AccountLink {
        id: "x",
        label: "X",
        href: "https://x.com/Msprzk",
        value: "Msprzk",
    },
    AccountLink {
        id: "github",
        label: "GitHub",
        href: "https://github.com/supurazako",
        value: "supurazako",
    },
];

const LANGUAGE_ITEMS: &[TechItem] = &[
    TechItem::plain("Java"),
    TechItem::plain("TypeScript"),
    TechItem::plain("JavaScript"),
    TechItem::plain("Go"),
    TechItem::plain("PHP"),
];

const FRAMEWORK_ITEMS: &[TechItem] = &[
    TechItem::plain("React"),
    TechItem::plain("Spring Framework"),
    TechItem::plain("Laravel"),
    TechItem::plain("Node.js"),
];

const PLATFORM_ITEMS: &[TechItem] = &[
    TechItem::plain("AWS"),
    TechItem::plain("Docker"),
    TechItem::plain("PostgreSQL"),
    TechItem::plain("Git"),
    TechItem::plain("GitHub Workflow"),
];

// ==================== Japanese Content ====================

/// Japanese content (default language)
pub static JAPANESE_CONTENT: PageContent = PageContent {
    navigation: NavContent {
        home: "ホーム",
        blog: "ブログ",
        works: "制作物",
    },
    index: IndexContent {
        name: "名前: 宮本 直幸",
        location: "活動拠点: 日本・札幌",
        affiliation: "所属: 北海道情報大学 システム情報学部",
        tech_stack_title: "技術スタック",
        tech_categories: &[
            TechCategory {
                title: "言語",
                items: LANGUAGE_ITEMS,
            },
            TechCategory {
                title: "Webフレームワーク",
                items: FRAMEWORK_ITEMS,
            },
            TechCategory {
                title: "DevOps & プラットフォーム",
                items: PLATFORM_ITEMS,
            },
        ],
        accounts_title: "アカウント",
        accounts: ACCOUNTS,
        interests_title: "興味分野",
        interests: &[
            "Web開発",
            "ネットワーク",
            "リアルタイム通信",
            "セキュリティ",
            "ソフトウェア開発",
        ],
        contact: "連絡先: mnaoyuki0228 at gmail.com",
    },
    works: WorksContent {
        heading: "制作物",
        sections: &[
            WorkSection {
                title: "// 共同開発",
                items: &[
                    WorkItem {
                        name: "Styraly（開発中）",
                        description: "「つながらないSNS」がキャッチコピーのクローズドなSNSです。繋がりすぎる時代に、少ないつながりを提供します。",
                        details: None,
                        tech: Some("使用技術: Java (Spring Framework)"),
                        image: None,
                        links: &[],
                    },
                    WorkItem {
                        name: "nicomado",
                        description: "YouTube、Twitchなどの動画やストリーミングを、一画面で同時に複数再生できるサイト。友人との二人チームで制作しています。",
                        details: None,
                        tech: Some("使用技術: React Router v7, React, TypeScript, CSS, Cloudflare Worker"),
                        image: Some(WorkImage {
                            src: "nicomado-image.png",
                            alt: "nicomadoのスクリーンショット",
                            width: 600,
                            height: 200,
                        }),
                        links: &[WorkLink {
                            label: "Webサイト",
                            text: "nicomado",
                            href: "https://nicomado.com",
                        }],
                    },
                ],
            },
            WorkSection {
                title: "// 個人開発",
                items: &[WorkItem {
                    name: "おにや配信通知bot",
                    description: "おにやさんの配信を通知するbotです。Xアカウント、Discord、メールで動作しています。",
                    details: None,
                    tech: Some("使用技術: Node.js, AWS EC2, GAS"),
                    image: None,
                    links: &[WorkLink {
                        label: "X",
                        text: "@oniya_stream",
                        href: "https://x.com/oniya_stream",
                    }],
                }],
            },
            WorkSection {
                title: "// コミュニティ",
                items: &[WorkItem {
                    name: "低レイヤーズさっぽろ",
                    description: "低レイヤー技術に関する知見や交流を目的としたコミュニティおよび勉強会です。私が立ち上げ、現在は新たに参加したメンバーを含む2名で運営しています。",
                    details: None,
                    tech: None,
                    image: None,
                    links: &[WorkLink {
                        label: "connpass",
                        text: "低レイヤーズさっぽろ",
                        href: "https://low-layers-sapporo.connpass.com/",
                    }],
                }],
            },
        ],
    },
    blog: BlogContent {
        heading: "イベントなどの記録",
        posts: &[BlogPost {
            slug: "ns-business-plan-contest",
            title: "N/S起業部ビジネスプランコンテスト2024に参加してきました！",
        }],
    },
    meta: MetaContent {
        title: "ポートフォリオ",
        description: "宮本直幸のポートフォリオサイトです。",
    },
};

// ==================== English Content ====================

/// English content
pub static ENGLISH_CONTENT: PageContent = PageContent {
    navigation: NavContent {
        home: "Home",
        blog: "Blog",
        works: "Works",
    },
    index: IndexContent {
        name: "Name: Naoyuki Miyamoto",
        location: "Location: Sapporo, Japan",
        affiliation: "Affiliation: Department of System Information, Hokkaido Information University",
        tech_stack_title: "Tech Stack",
        tech_categories: &[
            TechCategory {
                title: "Core Languages",
                items: LANGUAGE_ITEMS,
            },
            TechCategory {
                title: "Web Frameworks",
                items: FRAMEWORK_ITEMS,
            },
            TechCategory {
                title: "DevOps & Platforms",
                items: PLATFORM_ITEMS,
            },
        ],
        accounts_title: "Accounts",
        accounts: ACCOUNTS,
        interests_title: "Interests",
        interests: &[
            "Web Development",
            "Computer Networking",
            "Real-time Communication",
            "Security",
            "Software Engineering",
        ],
        contact: "Contact: mnaoyuki0228 at gmail.com",
    },
    works: WorksContent {
        heading: "Works",
        sections: &[
            WorkSection {
                title: "// Co-develop",
                items: &[
                    WorkItem {
                        name: "Styraly (in development)",
                        description: "A closed SNS with the tagline \"an SNS that keeps distance.\" It offers a calmer space in an always-connected era.",
                        details: None,
                        tech: Some("Tech: Java (Spring Framework)"),
                        image: None,
                        links: &[],
                    },
                    WorkItem {
                        name: "nicomado",
                        description: "A web app that plays multiple YouTube and Twitch streams on a single screen. Built as a two-person project with a friend.",
                        details: None,
                        tech: Some("Tech: React Router v7, React, TypeScript, CSS, Cloudflare Worker"),
                        image: Some(WorkImage {
                            src: "nicomado-image.png",
                            alt: "Screenshot of nicomado",
                            width: 600,
                            height: 200,
                        }),
                        links: &[WorkLink {
                            label: "Website",
                            text: "nicomado",
                            href: "https://nicomado.com",
                        }],
                    },
                ],
            },
            WorkSection {
                title: "// Personal",
                items: &[WorkItem {
                    name: "Oniya stream notifier bot",
                    description: "A bot that announces streamer Oniya's live sessions. It runs across X, Discord, and email.",
                    details: None,
                    tech: Some("Tech: Node.js, AWS EC2, Google Apps Script"),
                    image: None,
                    links: &[WorkLink {
                        label: "X",
                        text: "@oniya_stream",
                        href: "https://x.com/oniya_stream",
                    }],
                }],
            },
            WorkSection {
                title: "// Community",
                items: &[WorkItem {
                    name: "Low Layers Sapporo",
                    description: "A community and meetup for sharing insights about low-level technologies. I founded it and run it with one more member.",
                    details: None,
                    tech: None,
                    image: None,
                    links: &[WorkLink {
                        label: "connpass",
                        text: "Low Layers Sapporo",
                        href: "https://low-layers-sapporo.connpass.com/",
                    }],
                }],
            },
        ],
    },
    blog: BlogContent {
        heading: "Event and activity notes",
        posts: &[BlogPost {
            slug: "ns-business-plan-contest",
            title: "We joined the N/S Entrepreneurship Business Plan Contest 2024!",
        }],
    },
    meta: MetaContent {
        title: "Portfolio",
        description: "The portfolio site of Naoyuki Miyamoto.",
    },
};
