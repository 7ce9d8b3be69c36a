//! Page registry: the site's pages and the navigation graph between them.
//!
//! Pages are plain data. Render composition walks a descriptor's sections
//! and navigation groups generically, so adding a page or a link never needs
//! new control flow.

use crate::error::{Result, ToolkitError};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Severity of an inline notice box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Warning => "notice notice-warning",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

/// A downloadable PDF handout shown on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfAsset {
    /// Bold title above the buttons
    pub title: Option<&'static str>,
    /// File name under the assets directory (may contain spaces)
    pub file: &'static str,
    /// File name offered to the browser on download
    pub download_name: &'static str,
    pub view_label: &'static str,
    pub download_label: &'static str,
}

/// One block of page content. Every `&'static str` is a localization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Paragraph(&'static str),
    Heading(&'static str),
    Caption(&'static str),
    Bullets {
        label: Option<&'static str>,
        items: &'static [&'static str],
    },
    Steps {
        label: Option<&'static str>,
        items: &'static [&'static str],
    },
    Quote {
        label: &'static str,
        text: &'static str,
    },
    Notice {
        kind: NoticeKind,
        text: &'static str,
    },
    Divider,
    Expander {
        title: &'static str,
        open: bool,
        body: &'static [Section],
    },
    Pdf(PdfAsset),
    /// External feedback form: link button plus iframe embed
    FeedbackForm,
    /// Local fallback form exporting a CSV
    FeedbackExport,
    /// Contact email and response-time details
    ContactDetails,
    /// Email-draft form
    ContactForm,
}

impl Section {
    /// Localization keys this section (and any nested sections) renders.
    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            Section::Paragraph(key) | Section::Heading(key) | Section::Caption(key) => vec![key],
            Section::Bullets { label, items } | Section::Steps { label, items } => {
                label.iter().copied().chain(items.iter().copied()).collect()
            }
            Section::Quote { label, text } => vec![label, text],
            Section::Notice { text, .. } => vec![text],
            Section::Divider => Vec::new(),
            Section::Expander { title, body, .. } => std::iter::once(*title)
                .chain(body.iter().flat_map(Section::keys))
                .collect(),
            Section::Pdf(pdf) => pdf
                .title
                .iter()
                .copied()
                .chain([pdf.view_label, pdf.download_label, "asset_missing"])
                .collect(),
            Section::FeedbackForm => vec![
                "feedback_form_heading",
                "feedback_form_hint",
                "feedback_open_form",
                "feedback_embed_heading",
            ],
            Section::FeedbackExport => {
                let mut keys = vec![
                    "feedback_backup_title",
                    "feedback_backup_intro",
                    "feedback_name",
                    "feedback_role",
                    "feedback_rating",
                    "feedback_comment",
                    "feedback_submit",
                ];
                keys.extend(crate::feedback::ROLE_KEYS);
                keys
            }
            Section::ContactDetails => vec![
                "contact_reach_heading",
                "contact_email_line",
                "contact_response_time",
                "contact_for_schools",
            ],
            Section::ContactForm => {
                let mut keys = vec![
                    "contact_send_heading",
                    "contact_name",
                    "contact_affiliation",
                    "contact_email",
                    "contact_topic",
                    "contact_message",
                    "contact_placeholder",
                    "contact_consent",
                    "contact_submit",
                ];
                keys.extend(crate::contact::TOPIC_KEYS);
                keys
            }
        }
    }

    /// PDF assets referenced by this section, including nested ones.
    pub fn assets(&self) -> Vec<&PdfAsset> {
        match self {
            Section::Pdf(pdf) => vec![pdf],
            Section::Expander { body, .. } => body.iter().flat_map(Section::assets).collect(),
            _ => Vec::new(),
        }
    }
}

/// A directed navigation edge: a labelled shortcut to another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

/// A headed row of shortcuts (e.g. "Quick actions").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGroup {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

/// Static description of one navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Stable id, also the route path segment
    pub id: &'static str,
    /// Sidebar label key
    pub menu_label: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub sections: &'static [Section],
    pub nav_groups: &'static [NavGroup],
}

impl PageDescriptor {
    pub fn route(&self) -> String {
        format!("/{}", self.id)
    }

    /// All outbound links, in group order.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.nav_groups.iter().flat_map(|group| group.links.iter())
    }

    /// Every localization key this page renders.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.menu_label, self.title];
        keys.extend(self.subtitle);
        keys.extend(self.sections.iter().flat_map(Section::keys));
        for group in self.nav_groups {
            keys.push(group.heading);
            keys.extend(group.links.iter().map(|link| link.label));
        }
        keys
    }

    pub fn assets(&self) -> Vec<&PdfAsset> {
        self.sections.iter().flat_map(Section::assets).collect()
    }
}

/// Ordered, immutable set of pages with a distinguished root.
#[derive(Debug)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
    root: &'static str,
}

static REGISTRY: OnceLock<PageRegistry> = OnceLock::new();

impl PageRegistry {
    /// The site's pages.
    pub fn get() -> &'static PageRegistry {
        REGISTRY.get_or_init(|| PageRegistry::new(site_pages(), "home"))
    }

    pub fn new(pages: Vec<PageDescriptor>, root: &'static str) -> Self {
        Self { pages, root }
    }

    /// Pages in menu order.
    pub fn list_pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    pub fn get_page(&self, id: &str) -> Result<&PageDescriptor> {
        self.pages
            .iter()
            .find(|page| page.id == id)
            .ok_or_else(|| ToolkitError::UnknownPageId(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pages.iter().any(|page| page.id == id)
    }

    /// The landing page.
    pub fn root(&self) -> &PageDescriptor {
        self.get_page(self.root)
            .expect("Root page should be registered")
    }

    pub fn root_id(&self) -> &'static str {
        self.root
    }

    /// Links whose target is not registered, as `(source, target)` pairs.
    pub fn dangling_links(&self) -> Vec<(&'static str, &'static str)> {
        self.pages
            .iter()
            .flat_map(|page| page.links().map(move |link| (page.id, link.target)))
            .filter(|(_, target)| !self.contains(target))
            .collect()
    }

    /// Ids registered more than once.
    pub fn duplicate_ids(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.pages
            .iter()
            .filter(|page| !seen.insert(page.id))
            .map(|page| page.id)
            .collect()
    }

    /// The PDF asset registered under `file` on any page.
    pub fn asset(&self, file: &str) -> Option<&PdfAsset> {
        self.pages
            .iter()
            .flat_map(|page| page.assets())
            .find(|asset| asset.file == file)
    }
}

// ==================== Site Content ====================

const HOME_SECTIONS: &[Section] = &[Section::Paragraph("home_intro")];

const HOME_NAV: &[NavGroup] = &[
    NavGroup {
        heading: "home_quick_actions",
        links: &[
            NavLink { label: "qa_parents", target: "guides" },
            NavLink { label: "qa_students", target: "guides" },
            NavLink { label: "qa_colleagues", target: "guides" },
        ],
    },
    NavGroup {
        heading: "home_explore",
        links: &[
            NavLink { label: "ex_phrases", target: "phrases" },
            NavLink { label: "ex_visual", target: "visual-tools" },
            NavLink { label: "ex_guides", target: "guides" },
        ],
    },
];

const PHRASES_SECTIONS: &[Section] = &[
    Section::Paragraph("phrases_intro"),
    Section::Divider,
    Section::Heading("phrases_strengths_heading"),
    Section::Bullets {
        label: None,
        items: &["phrases_strengths_1", "phrases_strengths_2", "phrases_strengths_3"],
    },
    Section::Heading("phrases_needs_heading"),
    Section::Bullets {
        label: None,
        items: &["phrases_needs_1", "phrases_needs_2", "phrases_needs_3"],
    },
    Section::Heading("phrases_collab_heading"),
    Section::Bullets {
        label: None,
        items: &["phrases_collab_1", "phrases_collab_2", "phrases_collab_3"],
    },
    Section::Heading("phrases_closing_heading"),
    Section::Bullets {
        label: None,
        items: &["phrases_closing_1", "phrases_closing_2", "phrases_closing_3"],
    },
    Section::Divider,
    Section::Heading("support_card_heading"),
    Section::Caption("support_card_caption"),
    Section::Pdf(PdfAsset {
        title: None,
        file: "Conversation Support Card .pdf",
        download_name: "Conversation Support Card.pdf",
        view_label: "support_card_view",
        download_label: "support_card_download",
    }),
];

const fn narrative_pdf(title: &'static str, file: &'static str) -> Section {
    Section::Pdf(PdfAsset {
        title: Some(title),
        file,
        download_name: file,
        view_label: "pdf_view",
        download_label: "pdf_download",
    })
}

const VISUAL_SECTIONS: &[Section] = &[
    Section::Heading("metaphors_heading"),
    Section::Paragraph("metaphors_intro"),
    Section::Divider,
    Section::Expander {
        title: "dots_title",
        open: true,
        body: &[
            Section::Paragraph("dots_body"),
            Section::Bullets {
                label: None,
                items: &["dots_use_when", "dots_supports", "dots_avoids"],
            },
            narrative_pdf("dots_pdf", "Dots.pdf"),
        ],
    },
    Section::Expander {
        title: "waves_title",
        open: false,
        body: &[
            Section::Paragraph("waves_body"),
            Section::Bullets {
                label: None,
                items: &["waves_use_when", "waves_supports", "waves_avoids"],
            },
            narrative_pdf("waves_pdf", "Waves.pdf"),
        ],
    },
    Section::Expander {
        title: "pathways_title",
        open: false,
        body: &[
            Section::Paragraph("pathways_body"),
            Section::Bullets {
                label: None,
                items: &["pathways_use_when", "pathways_supports", "pathways_avoids"],
            },
            narrative_pdf("pathways_pdf", "Pathways.pdf"),
        ],
    },
    Section::Notice {
        kind: NoticeKind::Info,
        text: "metaphors_tip",
    },
    Section::Divider,
    Section::Heading("color_heading"),
    Section::Paragraph("color_intro"),
    Section::Expander {
        title: "color_palette_title",
        open: true,
        body: &[
            Section::Bullets {
                label: None,
                items: &["color_palette_1", "color_palette_2"],
            },
            Section::Bullets {
                label: Some("color_core_label"),
                items: &[
                    "color_core_blue",
                    "color_core_mint",
                    "color_core_peach",
                    "color_core_lavender",
                    "color_core_yellow",
                ],
            },
            Section::Paragraph("color_palette_note"),
        ],
    },
    Section::Expander {
        title: "color_rules_title",
        open: false,
        body: &[Section::Bullets {
            label: None,
            items: &["color_rules_1", "color_rules_2", "color_rules_3", "color_rules_4"],
        }],
    },
    Section::Expander {
        title: "color_avoid_title",
        open: false,
        body: &[
            Section::Bullets {
                label: None,
                items: &["color_avoid_1", "color_avoid_2", "color_avoid_3"],
            },
            Section::Paragraph("color_avoid_note"),
        ],
    },
    Section::Expander {
        title: "color_access_title",
        open: false,
        body: &[Section::Bullets {
            label: None,
            items: &["color_access_1", "color_access_2", "color_access_3"],
        }],
    },
    Section::Notice {
        kind: NoticeKind::Info,
        text: "color_summary",
    },
    narrative_pdf("color_pdf", "color_guidelines.pdf"),
    Section::Divider,
    Section::Heading("typography_heading"),
    Section::Paragraph("typography_intro"),
    Section::Expander {
        title: "typography_primary_title",
        open: true,
        body: &[
            Section::Bullets {
                label: Some("typography_fonts_label"),
                items: &["typography_font_en", "typography_font_ja"],
            },
            Section::Bullets {
                label: Some("typography_traits_label"),
                items: &[
                    "typography_trait_legible",
                    "typography_trait_calm",
                    "typography_trait_suitable",
                ],
            },
        ],
    },
];

const GUIDES_SECTIONS: &[Section] = &[
    Section::Paragraph("guides_intro"),
    Section::Divider,
    Section::Heading("guide_parents_heading"),
    Section::Bullets {
        label: Some("guide_keep_in_mind"),
        items: &["guide_parents_keep_1", "guide_parents_keep_2", "guide_parents_keep_3"],
    },
    Section::Steps {
        label: Some("guide_suggested"),
        items: &["guide_parents_step_1", "guide_parents_step_2", "guide_parents_step_3"],
    },
    Section::Quote {
        label: "guide_example_closing",
        text: "guide_parents_quote",
    },
    Section::Divider,
    Section::Heading("guide_students_heading"),
    Section::Bullets {
        label: Some("guide_keep_in_mind"),
        items: &["guide_students_keep_1", "guide_students_keep_2", "guide_students_keep_3"],
    },
    Section::Steps {
        label: Some("guide_suggested"),
        items: &["guide_students_step_1", "guide_students_step_2", "guide_students_step_3"],
    },
    Section::Quote {
        label: "guide_example_line",
        text: "guide_students_quote",
    },
    Section::Divider,
    Section::Heading("guide_colleagues_heading"),
    Section::Bullets {
        label: Some("guide_keep_in_mind"),
        items: &[
            "guide_colleagues_keep_1",
            "guide_colleagues_keep_2",
            "guide_colleagues_keep_3",
        ],
    },
    Section::Steps {
        label: Some("guide_suggested"),
        items: &[
            "guide_colleagues_step_1",
            "guide_colleagues_step_2",
            "guide_colleagues_step_3",
        ],
    },
    Section::Quote {
        label: "guide_example_line",
        text: "guide_colleagues_quote",
    },
    Section::Caption("guides_caption"),
];

const ABOUT_SECTIONS: &[Section] = &[
    Section::Paragraph("about_intro"),
    Section::Heading("about_framework_heading"),
    Section::Bullets {
        label: None,
        items: &[
            "about_layer_language",
            "about_layer_visual",
            "about_layer_interaction",
        ],
    },
    Section::Notice {
        kind: NoticeKind::Warning,
        text: "about_disclaimer",
    },
];

const FEEDBACK_SECTIONS: &[Section] = &[
    Section::FeedbackForm,
    Section::Divider,
    Section::FeedbackExport,
];

const CONTACT_SECTIONS: &[Section] = &[
    Section::ContactDetails,
    Section::Divider,
    Section::ContactForm,
    Section::Divider,
    Section::Caption("contact_footer"),
];

fn site_pages() -> Vec<PageDescriptor> {
    vec![
        PageDescriptor {
            id: "home",
            menu_label: "nav_home",
            title: "home_title",
            subtitle: Some("home_subtitle"),
            sections: HOME_SECTIONS,
            nav_groups: HOME_NAV,
        },
        PageDescriptor {
            id: "phrases",
            menu_label: "nav_phrases",
            title: "phrases_title",
            subtitle: Some("phrases_subtitle"),
            sections: PHRASES_SECTIONS,
            nav_groups: &[],
        },
        PageDescriptor {
            id: "visual-tools",
            menu_label: "nav_visual_tools",
            title: "visual_title",
            subtitle: Some("visual_subtitle"),
            sections: VISUAL_SECTIONS,
            nav_groups: &[],
        },
        PageDescriptor {
            id: "guides",
            menu_label: "nav_guides",
            title: "guides_title",
            subtitle: Some("guides_subtitle"),
            sections: GUIDES_SECTIONS,
            nav_groups: &[],
        },
        PageDescriptor {
            id: "about",
            menu_label: "nav_about",
            title: "about_title",
            subtitle: None,
            sections: ABOUT_SECTIONS,
            nav_groups: &[],
        },
        PageDescriptor {
            id: "feedback",
            menu_label: "nav_feedback",
            title: "feedback_title",
            subtitle: Some("feedback_subtitle"),
            sections: FEEDBACK_SECTIONS,
            nav_groups: &[],
        },
        PageDescriptor {
            id: "contact",
            menu_label: "nav_contact",
            title: "contact_title",
            subtitle: Some("contact_subtitle"),
            sections: CONTACT_SECTIONS,
            nav_groups: &[],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizationStore;

    fn page(id: &'static str, nav_groups: &'static [NavGroup]) -> PageDescriptor {
        PageDescriptor {
            id,
            menu_label: "nav",
            title: "title",
            subtitle: None,
            sections: &[],
            nav_groups,
        }
    }

    // ==================== Site Registry Tests ====================

    #[test]
    fn test_site_pages_in_menu_order() {
        let ids: Vec<_> = PageRegistry::get().list_pages().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec!["home", "phrases", "visual-tools", "guides", "about", "feedback", "contact"]
        );
    }

    #[test]
    fn test_root_is_home() {
        assert_eq!(PageRegistry::get().root().id, "home");
    }

    #[test]
    fn test_site_has_no_dangling_links() {
        assert!(PageRegistry::get().dangling_links().is_empty());
    }

    #[test]
    fn test_site_ids_unique() {
        assert!(PageRegistry::get().duplicate_ids().is_empty());
    }

    #[test]
    fn test_quick_actions_all_point_at_guides() {
        let home = PageRegistry::get().get_page("home").unwrap();
        let quick = &home.nav_groups[0];
        assert_eq!(quick.heading, "home_quick_actions");
        assert!(quick.links.iter().all(|link| link.target == "guides"));
        assert_eq!(quick.links.len(), 3);
    }

    #[test]
    fn test_every_page_key_is_in_shipped_store() {
        let store = LocalizationStore::shipped();
        for page in PageRegistry::get().list_pages() {
            for key in page.keys() {
                assert!(store.contains_key(key), "page '{}' uses unknown key '{}'", page.id, key);
            }
        }
    }

    #[test]
    fn test_visual_tools_assets() {
        let page = PageRegistry::get().get_page("visual-tools").unwrap();
        let files: Vec<_> = page.assets().iter().map(|a| a.file).collect();
        assert_eq!(
            files,
            vec!["Dots.pdf", "Waves.pdf", "Pathways.pdf", "color_guidelines.pdf"]
        );
    }

    #[test]
    fn test_support_card_keeps_download_name() {
        let page = PageRegistry::get().get_page("phrases").unwrap();
        let assets = page.assets();
        assert_eq!(assets[0].file, "Conversation Support Card .pdf");
        assert_eq!(assets[0].download_name, "Conversation Support Card.pdf");
    }

    #[test]
    fn test_asset_lookup_across_pages() {
        let registry = PageRegistry::get();
        assert_eq!(
            registry.asset("Pathways.pdf").map(|a| a.title),
            Some(Some("pathways_pdf"))
        );
        assert!(registry.asset("unknown.pdf").is_none());
    }

    // ==================== Graph Tests ====================

    #[test]
    fn test_get_page_unknown() {
        let result = PageRegistry::get().get_page("nonexistent");
        assert_eq!(
            result.unwrap_err(),
            ToolkitError::UnknownPageId("nonexistent".to_string())
        );
    }

    #[test]
    fn test_many_to_one_edges_preserved() {
        let linking: Vec<_> = PageRegistry::get()
            .list_pages()
            .iter()
            .filter(|page| page.links().any(|link| link.target == "guides"))
            .map(|page| page.id)
            .collect();
        assert_eq!(linking, vec!["home"]);

        let home = PageRegistry::get().get_page("home").unwrap();
        assert_eq!(home.links().filter(|l| l.target == "guides").count(), 4);
    }

    #[test]
    fn test_cycles_and_self_links_allowed() {
        const HOME_LINKS: &[NavGroup] = &[NavGroup {
            heading: "h",
            links: &[
                NavLink { label: "a", target: "guides" },
                NavLink { label: "b", target: "home" },
            ],
        }];
        const GUIDE_LINKS: &[NavGroup] = &[NavGroup {
            heading: "h",
            links: &[NavLink { label: "c", target: "home" }],
        }];
        let registry = PageRegistry::new(
            vec![page("home", HOME_LINKS), page("guides", GUIDE_LINKS)],
            "home",
        );
        assert!(registry.dangling_links().is_empty());
        let guides = registry.get_page("guides").unwrap();
        assert_eq!(guides.links().next().map(|link| link.target), Some("home"));
        let home = registry.get_page("home").unwrap();
        assert!(home.links().any(|link| link.target == "home"));
    }

    #[test]
    fn test_dangling_link_detected() {
        const LINKS: &[NavGroup] = &[NavGroup {
            heading: "h",
            links: &[NavLink { label: "a", target: "missing" }],
        }];
        let registry = PageRegistry::new(vec![page("home", LINKS)], "home");
        assert_eq!(registry.dangling_links(), vec![("home", "missing")]);
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let registry = PageRegistry::new(vec![page("home", &[]), page("home", &[])], "home");
        assert_eq!(registry.duplicate_ids(), vec!["home"]);
    }

    #[test]
    fn test_nested_section_keys() {
        let section = Section::Expander {
            title: "t",
            open: false,
            body: &[Section::Paragraph("p"), Section::Divider],
        };
        assert_eq!(section.keys(), vec!["t", "p"]);
    }

    #[test]
    fn test_route() {
        assert_eq!(PageRegistry::get().root().route(), "/home");
    }
}
