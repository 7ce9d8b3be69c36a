//! HTML composition.
//!
//! A page is rendered by walking its descriptor: header, sections in order,
//! then navigation groups. Every visible string goes through the request's
//! `Resolver`, so one response never mixes languages (apart from keys that
//! fall back to English). All interpolation is escaped by `maud`.

use crate::assets::AssetLinks;
use crate::contact::{ContactForm, ContactOutcome, TOPIC_KEYS};
use crate::feedback::{embed_url, DEFAULT_RATING, MAX_RATING, MIN_RATING, ROLE_KEYS};
use crate::i18n::{Language, Resolver};
use crate::pages::{NavGroup, NoticeKind, PageDescriptor, PageRegistry, PdfAsset, Section};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::collections::HashMap;

const STYLESHEET: &str = r#"
:root {
  --blue: #AFCBFF; --mint: #BFEAD6; --peach: #FFD8C7;
  --lavender: #D9CFFF; --yellow: #FFF3B0; --ink: #2F3A4A; --paper: #FBFCFE;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: "Inter", "Noto Sans JP", system-ui, sans-serif;
  color: var(--ink); background: var(--paper); line-height: 1.7; }
.shell { display: flex; min-height: 100vh; }
.sidebar { width: 260px; flex-shrink: 0; padding: 1.5rem 1rem; background: #F2F6FF;
  border-right: 1px solid #E3E8F2; }
.sidebar h2 { font-size: 1.1rem; margin-top: 0; }
.menu { list-style: none; padding: 0; }
.menu a { display: block; padding: 0.45rem 0.7rem; border-radius: 10px;
  color: var(--ink); text-decoration: none; }
.menu a:hover { background: var(--lavender); }
.menu a.active { background: var(--blue); font-weight: 600; }
.language-toggle { margin-top: 1.5rem; }
.language-toggle button { margin-right: 0.4rem; padding: 0.35rem 0.8rem; border-radius: 999px;
  border: 1px solid #C9D3E6; background: white; cursor: pointer; }
.language-toggle button.selected { background: var(--mint); font-weight: 600; }
.content { flex: 1; max-width: 860px; padding: 2rem 2.5rem; }
.caption { color: #5B6778; font-size: 0.95rem; }
.button-row { display: flex; flex-wrap: wrap; gap: 0.6rem; margin: 0.8rem 0 1.2rem; }
.button { display: inline-block; padding: 0.55rem 1rem; border-radius: 12px;
  background: var(--blue); color: var(--ink); text-decoration: none; }
.button:hover { background: var(--lavender); }
.notice { padding: 0.8rem 1rem; border-radius: 12px; margin: 1rem 0; }
.notice p { margin: 0.2rem 0; }
.notice-info { background: #EAF2FF; }
.notice-success { background: #E6F7EF; }
.notice-warning { background: #FFF6D6; }
.notice-error { background: #FFE5DC; }
blockquote { margin: 0.5rem 0 1rem; padding: 0.5rem 1rem; border-left: 4px solid var(--peach);
  background: #FFF8F4; }
details.expander { border: 1px solid #E3E8F2; border-radius: 12px; padding: 0.6rem 1rem;
  margin: 0.8rem 0; }
details.expander summary { cursor: pointer; font-weight: 600; }
form.stacked label { display: block; margin: 0.8rem 0; }
form.stacked input[type=text], form.stacked input[type=email], form.stacked input[type=number],
form.stacked select, form.stacked textarea { display: block; width: 100%; margin-top: 0.3rem;
  padding: 0.5rem; border-radius: 8px; border: 1px solid #C9D3E6; font: inherit; }
pre.draft { white-space: pre-wrap; background: #F4F6FA; padding: 1rem; border-radius: 12px; }
iframe.embedded-form { border: 0; width: 100%; min-height: 900px; }
hr { border: 0; border-top: 1px solid #E3E8F2; margin: 1.5rem 0; }
"#;

/// Result of a form post, shown on the page hosting the form.
#[derive(Debug, Clone)]
pub enum FormOutcome {
    /// The posted rating was outside 1..=5
    InvalidRating,
    /// The contact form was submitted; the posted values are kept so the
    /// form can be shown again filled in
    Contact {
        form: ContactForm,
        outcome: ContactOutcome,
    },
    /// The contact post could not be decoded as a form
    InvalidContact,
}

/// Everything a page render needs besides the descriptor itself.
pub struct RenderContext<'a> {
    pub resolver: Resolver<'a>,
    pub registry: &'a PageRegistry,
    pub feedback_form_url: &'a str,
    pub contact_email: &'a str,
    /// View/download links keyed by asset file name
    pub asset_links: HashMap<&'static str, AssetLinks>,
    pub outcome: Option<FormOutcome>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        resolver: Resolver<'a>,
        registry: &'a PageRegistry,
        feedback_form_url: &'a str,
        contact_email: &'a str,
    ) -> Self {
        Self {
            resolver,
            registry,
            feedback_form_url,
            contact_email,
            asset_links: HashMap::new(),
            outcome: None,
        }
    }

    pub fn with_asset_links(mut self, asset_links: HashMap<&'static str, AssetLinks>) -> Self {
        self.asset_links = asset_links;
        self
    }

    pub fn with_outcome(mut self, outcome: FormOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    fn t(&self, key: &'a str) -> &'a str {
        self.resolver.t(key)
    }
}

/// Full HTML document for a registered page.
pub fn render_page(ctx: &RenderContext<'_>, page: &PageDescriptor) -> Markup {
    let content = html! {
        header.page-header {
            h1 { (ctx.t(page.title)) }
            @if let Some(subtitle) = page.subtitle {
                p.caption { (ctx.t(subtitle)) }
            }
        }
        hr;
        @for section in page.sections {
            (render_section(ctx, section))
        }
        @for group in page.nav_groups {
            (nav_group(ctx, group))
        }
    };

    layout(ctx, Some(page.id), ctx.t(page.title), content)
}

/// Entry route for a session that has already been through the landing
/// redirect: only the sidebar and a pointer to Home.
pub fn render_boot_hint(ctx: &RenderContext<'_>) -> Markup {
    let content = html! {
        p.caption { (ctx.t("open_home_hint")) }
    };
    layout(ctx, None, ctx.t("app_title"), content)
}

/// Standalone notice page, e.g. for a missing asset.
pub fn render_notice(ctx: &RenderContext<'_>, kind: NoticeKind, text: &str) -> Markup {
    layout(ctx, None, ctx.t("app_title"), notice(kind, text))
}

fn layout(ctx: &RenderContext<'_>, active: Option<&str>, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.resolver.language().code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · " (ctx.t("app_title")) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div.shell {
                    (sidebar(ctx, active))
                    main.content { (content) }
                }
            }
        }
    }
}

fn sidebar(ctx: &RenderContext<'_>, active: Option<&str>) -> Markup {
    let current = ctx.resolver.language();
    let return_to = active
        .map(|id| format!("/{}", id))
        .unwrap_or_else(|| "/".to_string());

    html! {
        nav.sidebar {
            h2 { (ctx.t("menu_title")) }
            ul.menu {
                @for page in ctx.registry.list_pages() {
                    li {
                        a.active[Some(page.id) == active] href=(page.route()) {
                            (ctx.t(page.menu_label))
                        }
                    }
                }
            }
            form.language-toggle method="post" action="/language" {
                p.caption { (ctx.t("toggle_label")) }
                input type="hidden" name="return_to" value=(return_to);
                @for language in Language::all() {
                    button.selected[language == current]
                        type="submit"
                        name="lang"
                        value=(language.code())
                        aria-pressed=(if language == current { "true" } else { "false" }) {
                        (language.native_name())
                    }
                }
            }
        }
    }
}

fn render_section(ctx: &RenderContext<'_>, section: &Section) -> Markup {
    match *section {
        Section::Paragraph(key) => paragraphs(ctx.t(key)),
        Section::Heading(key) => html! { h3 { (ctx.t(key)) } },
        Section::Caption(key) => html! { p.caption { (ctx.t(key)) } },
        Section::Bullets { label, items } => html! {
            @if let Some(label) = label {
                p { strong { (ctx.t(label)) } }
            }
            ul {
                @for item in items {
                    li { (ctx.t(item)) }
                }
            }
        },
        Section::Steps { label, items } => html! {
            @if let Some(label) = label {
                p { strong { (ctx.t(label)) } }
            }
            ol {
                @for item in items {
                    li { (ctx.t(item)) }
                }
            }
        },
        Section::Quote { label, text } => html! {
            p { strong { (ctx.t(label)) } }
            blockquote { (ctx.t(text)) }
        },
        Section::Notice { kind, text } => notice(kind, ctx.t(text)),
        Section::Divider => html! { hr; },
        Section::Expander { title, open, body } => html! {
            details.expander open[open] {
                summary { (ctx.t(title)) }
                @for inner in body {
                    (render_section(ctx, inner))
                }
            }
        },
        Section::Pdf(pdf) => pdf_block(ctx, &pdf),
        Section::FeedbackForm => feedback_form(ctx),
        Section::FeedbackExport => feedback_export(ctx),
        Section::ContactDetails => contact_details(ctx),
        Section::ContactForm => contact_form(ctx),
    }
}

fn paragraphs(text: &str) -> Markup {
    html! {
        @for paragraph in text.split("\n\n") {
            p { (paragraph) }
        }
    }
}

fn notice(kind: NoticeKind, text: &str) -> Markup {
    html! {
        div class=(kind.css_class()) role="note" {
            (paragraphs(text))
        }
    }
}

fn nav_group(ctx: &RenderContext<'_>, group: &NavGroup) -> Markup {
    html! {
        h3 { (ctx.t(group.heading)) }
        div.button-row {
            @for link in group.links {
                a.button href={ "/" (link.target) } { (ctx.t(link.label)) }
            }
        }
    }
}

fn pdf_block(ctx: &RenderContext<'_>, pdf: &PdfAsset) -> Markup {
    let links = ctx.asset_links.get(pdf.file);
    let download_url = links.and_then(|links| links.download_url.as_deref());

    html! {
        div.pdf {
            @if let Some(title) = pdf.title {
                p { strong { (ctx.t(title)) } }
            }
            @match (links, download_url) {
                (Some(links), Some(download_url)) => {
                    div.button-row {
                        a.button href=(links.view_url) target="_blank" rel="noopener" {
                            (ctx.t(pdf.view_label))
                        }
                        a.button href=(download_url) download=(pdf.download_name) {
                            (ctx.t(pdf.download_label))
                        }
                    }
                }
                _ => {
                    (notice(
                        NoticeKind::Warning,
                        &ctx.resolver.t_with("asset_missing", &[("file", pdf.file)]),
                    ))
                }
            }
        }
    }
}

fn feedback_form(ctx: &RenderContext<'_>) -> Markup {
    html! {
        h3 { (ctx.t("feedback_form_heading")) }
        p.caption { (ctx.t("feedback_form_hint")) }
        div.button-row {
            a.button href=(ctx.feedback_form_url) target="_blank" rel="noopener" {
                (ctx.t("feedback_open_form"))
            }
        }
        h3 { (ctx.t("feedback_embed_heading")) }
        iframe.embedded-form
            src=(embed_url(ctx.feedback_form_url))
            title=(ctx.t("feedback_embed_heading"))
            loading="lazy" {}
    }
}

fn feedback_export(ctx: &RenderContext<'_>) -> Markup {
    let invalid = matches!(ctx.outcome, Some(FormOutcome::InvalidRating));

    html! {
        details.expander open[invalid] {
            summary { (ctx.t("feedback_backup_title")) }
            p { (ctx.t("feedback_backup_intro")) }
            @if invalid {
                (notice(NoticeKind::Error, ctx.t("feedback_invalid_rating")))
            }
            form.stacked method="post" action="/feedback/export" {
                label {
                    (ctx.t("feedback_name"))
                    input type="text" name="name";
                }
                label {
                    (ctx.t("feedback_role"))
                    select name="role" {
                        @for key in ROLE_KEYS {
                            option value=(key) { (ctx.t(key)) }
                        }
                    }
                }
                label {
                    (ctx.t("feedback_rating")) " (" (MIN_RATING) "–" (MAX_RATING) ")"
                    input type="number" name="rating"
                        min=(MIN_RATING) max=(MAX_RATING) value=(DEFAULT_RATING) required;
                }
                label {
                    (ctx.t("feedback_comment"))
                    textarea name="comment" rows="5" {}
                }
                button.button type="submit" { (ctx.t("feedback_submit")) }
            }
        }
    }
}

fn contact_details(ctx: &RenderContext<'_>) -> Markup {
    html! {
        h3 { (ctx.t("contact_reach_heading")) }
        ul {
            li { (ctx.resolver.t_with("contact_email_line", &[("email", ctx.contact_email)])) }
            li { (ctx.t("contact_response_time")) }
            li { (ctx.t("contact_for_schools")) }
        }
    }
}

fn contact_form(ctx: &RenderContext<'_>) -> Markup {
    let (posted, outcome) = match &ctx.outcome {
        Some(FormOutcome::Contact { form, outcome }) => (Some(form), Some(outcome)),
        _ => (None, None),
    };
    let unreadable = matches!(ctx.outcome, Some(FormOutcome::InvalidContact));
    let empty = ContactForm::default();
    let form = posted.unwrap_or(&empty);

    html! {
        h3 { (ctx.t("contact_send_heading")) }
        form.stacked method="post" action="/contact" {
            label {
                (ctx.t("contact_name"))
                input type="text" name="name" value=(form.name);
            }
            label {
                (ctx.t("contact_affiliation"))
                input type="text" name="affiliation" value=(form.affiliation);
            }
            label {
                (ctx.t("contact_email"))
                input type="email" name="email" value=(form.email);
            }
            label {
                (ctx.t("contact_topic"))
                select name="topic" {
                    @for key in TOPIC_KEYS {
                        option value=(key) selected[*key == form.topic] { (ctx.t(key)) }
                    }
                }
            }
            label {
                (ctx.t("contact_message"))
                textarea name="message" rows="6" placeholder=(ctx.t("contact_placeholder")) {
                    (form.message)
                }
            }
            label {
                input type="checkbox" name="consent" value="on" checked[form.has_consent()];
                " " (ctx.t("contact_consent"))
            }
            button.button type="submit" { (ctx.t("contact_submit")) }
        }
        @match outcome {
            Some(ContactOutcome::ConsentRequired) => {
                (notice(NoticeKind::Warning, ctx.t("contact_consent_required")))
            }
            Some(ContactOutcome::Draft(draft)) => {
                (notice(NoticeKind::Success, ctx.t("contact_draft_ready")))
                pre.draft { (draft.to_text()) }
                div.button-row {
                    a.button href=(draft.mailto_link()) { (ctx.t("contact_open_mail")) }
                }
            }
            None => {
                @if unreadable {
                    (notice(NoticeKind::Error, ctx.t("contact_invalid_form")))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::EmailDraft;
    use crate::i18n::LocalizationStore;

    const FORM_URL: &str = "https://forms.example/viewform?usp=send_form";
    const EMAIL: &str = "team@example.com";

    fn context(language: Language) -> RenderContext<'static> {
        RenderContext::new(
            Resolver::new(LocalizationStore::shipped(), language),
            PageRegistry::get(),
            FORM_URL,
            EMAIL,
        )
    }

    fn render(ctx: &RenderContext<'_>, id: &str) -> String {
        let page = PageRegistry::get().get_page(id).unwrap();
        render_page(ctx, page).into_string()
    }

    // ==================== Layout Tests ====================

    #[test]
    fn test_home_in_english() {
        let html = render(&context(Language::ENGLISH), "home");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("Neurodiversity Communication Toolkit"));
        assert!(html.contains("Quick actions"));
        assert!(html.contains("Phrases &amp; Scripts"));
    }

    #[test]
    fn test_home_in_japanese() {
        let html = render(&context(Language::JAPANESE), "home");

        assert!(html.contains(r#"<html lang="ja">"#));
        assert!(html.contains("ニューロダイバーシティ・コミュニケーション ツールキット"));
        assert!(html.contains("メニュー"));
        assert!(!html.contains("Quick actions"));
    }

    #[test]
    fn test_sidebar_lists_every_page_and_marks_active() {
        let html = render(&context(Language::ENGLISH), "guides");

        for page in PageRegistry::get().list_pages() {
            assert!(html.contains(&format!(r#"href="/{}""#, page.id)));
        }
        assert_eq!(html.matches(r#"class="active""#).count(), 1);
        assert!(html.contains(r#"name="return_to" value="/guides""#));
    }

    #[test]
    fn test_toggle_offers_each_language_by_native_name() {
        let html = render(&context(Language::JAPANESE), "home");

        assert!(html.contains(r#"value="ja""#));
        assert!(html.contains(r#"value="en""#));
        assert!(html.contains("日本語"));
        assert!(html.contains("English"));
        assert!(html.find("日本語").unwrap() < html.find(">English<").unwrap());
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
    }

    #[test]
    fn test_navigation_groups_render_links() {
        let html = render(&context(Language::ENGLISH), "home");

        assert!(html.contains("I’m talking to parents"));
        assert_eq!(html.matches(r#"class="button" href="/guides""#).count(), 4);
        assert!(html.contains(r#"class="button" href="/visual-tools""#));
    }

    #[test]
    fn test_multi_paragraph_text_splits() {
        let html = render(&context(Language::ENGLISH), "home");
        assert!(html.contains("<p>This toolkit supports educators"));
        assert!(html.contains("<p>It does not provide diagnoses"));
    }

    #[test]
    fn test_untranslated_key_falls_back_to_english() {
        let html = render(&context(Language::JAPANESE), "visual-tools");
        assert!(html.contains("Primary Typeface (Neutral Sans-Serif)"));
        assert!(html.contains("視覚ツール"));
    }

    #[test]
    fn test_boot_hint() {
        let html = render_boot_hint(&context(Language::ENGLISH)).into_string();
        assert!(html.contains("Open Home from the sidebar →"));
        assert!(html.contains(r#"name="return_to" value="/""#));
        assert_eq!(html.matches(r#"class="active""#).count(), 0);
    }

    #[test]
    fn test_text_is_escaped() {
        let store = LocalizationStore::builder()
            .text(Language::ENGLISH, "title", "<script>alert(1)</script>")
            .build()
            .unwrap();
        let page = PageDescriptor {
            id: "x",
            menu_label: "title",
            title: "title",
            subtitle: None,
            sections: &[],
            nav_groups: &[],
        };
        let registry = PageRegistry::new(vec![page], "x");
        let ctx = RenderContext::new(
            Resolver::new(&store, Language::ENGLISH),
            &registry,
            FORM_URL,
            EMAIL,
        );

        let html = render_page(&ctx, &page).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // ==================== Asset Tests ====================

    #[test]
    fn test_missing_asset_shows_notice() {
        let html = render(&context(Language::ENGLISH), "phrases");
        assert!(html.contains("PDF not found: assets/Conversation Support Card .pdf."));
        assert!(html.contains("notice notice-warning"));
    }

    #[test]
    fn test_available_asset_shows_links() {
        let mut links = HashMap::new();
        links.insert(
            "Dots.pdf",
            AssetLinks {
                view_url: "/assets/Dots.pdf".to_string(),
                download_url: Some("/assets/Dots.pdf/download".to_string()),
            },
        );
        let ctx = context(Language::ENGLISH).with_asset_links(links);
        let html = render(&ctx, "visual-tools");

        assert!(html.contains("Dots Narrative (PDF)"));
        assert!(html.contains(r#"href="/assets/Dots.pdf/download" download="Dots.pdf""#));
        assert!(html.contains("PDF not found: assets/Waves.pdf."));
    }

    // ==================== Feedback Tests ====================

    #[test]
    fn test_feedback_page_embeds_form() {
        let html = render(&context(Language::ENGLISH), "feedback");

        assert!(html.contains("viewform?usp=send_form&amp;embedded=true"));
        assert!(html.contains(r#"action="/feedback/export""#));
        assert!(html.contains(r#"value="feedback_role_teacher""#));
        assert!(!html.contains("Please choose a rating"));
    }

    #[test]
    fn test_feedback_invalid_rating_notice() {
        let ctx = context(Language::ENGLISH).with_outcome(FormOutcome::InvalidRating);
        let html = render(&ctx, "feedback");

        assert!(html.contains("Please choose a rating between 1 and 5."));
        assert!(html.contains("notice notice-error"));
    }

    // ==================== Contact Tests ====================

    #[test]
    fn test_contact_details_use_configured_email() {
        let html = render(&context(Language::ENGLISH), "contact");
        assert!(html.contains("Email: team@example.com"));
        assert!(html.contains(r#"action="/contact""#));
    }

    #[test]
    fn test_contact_consent_required_keeps_message() {
        let form = ContactForm {
            message: "Hello <team>".to_string(),
            topic: "contact_topic_school".to_string(),
            ..ContactForm::default()
        };
        let ctx = context(Language::ENGLISH).with_outcome(FormOutcome::Contact {
            form,
            outcome: ContactOutcome::ConsentRequired,
        });
        let html = render(&ctx, "contact");

        assert!(html.contains("Please tick the acknowledgement checkbox"));
        assert!(html.contains("Hello &lt;team&gt;"));
        assert!(html.contains(r#"value="contact_topic_school" selected"#));
    }

    #[test]
    fn test_contact_draft_rendered() {
        let draft = EmailDraft {
            to: EMAIL.to_string(),
            subject: "[Toolkit Contact] Other".to_string(),
            body: "Message:\nHi".to_string(),
        };
        let ctx = context(Language::ENGLISH).with_outcome(FormOutcome::Contact {
            form: ContactForm::default(),
            outcome: ContactOutcome::Draft(draft),
        });
        let html = render(&ctx, "contact");

        assert!(html.contains("Copy and paste the text below"));
        assert!(html.contains("Subject: [Toolkit Contact] Other"));
        assert!(html.contains("mailto:team@example.com?subject="));
    }

    #[test]
    fn test_contact_unreadable_post_notice() {
        let ctx = context(Language::JAPANESE).with_outcome(FormOutcome::InvalidContact);
        let html = render(&ctx, "contact");

        assert!(html.contains("送信内容を読み取れませんでした。"));
        assert!(html.contains(r#"action="/contact""#));
    }
}
