//! HTTP surface: routes, per-request session handling, and responses.

use crate::assets::{AssetError, AssetStore};
use crate::config::Config;
use crate::contact::{ContactForm, ContactOutcome};
use crate::feedback::{FeedbackForm, FeedbackSubmission, EXPORT_FILE_NAME};
use crate::i18n::{Language, LocalizationStore, Resolver};
use crate::pages::{NoticeKind, PageDescriptor, PageRegistry};
use crate::render::{render_boot_hint, render_notice, render_page, FormOutcome, RenderContext};
use crate::session::{session_cookie, session_id_from_cookie_header, SessionHandle, SessionStore};
use anyhow::{Context, Result};
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Utc;
use maud::Markup;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

const FEEDBACK_PAGE: &str = "feedback";
const CONTACT_PAGE: &str = "contact";

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
    pub store: &'static LocalizationStore,
    pub pages: &'static PageRegistry,
    pub assets: AssetStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(chrono::Duration::minutes(config.session_idle_minutes));
        let assets = AssetStore::from_config(&config);
        Self {
            config: Arc::new(config),
            sessions,
            store: LocalizationStore::shipped(),
            pages: PageRegistry::get(),
            assets,
        }
    }

    /// Resolve the session a request belongs to from its `Cookie` headers.
    fn session(&self, headers: &HeaderMap) -> SessionHandle {
        let cookie_id = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(session_id_from_cookie_header);
        self.sessions.resolve(cookie_id)
    }

    fn current_language(&self, session: &SessionHandle) -> Language {
        self.sessions
            .with_session(&session.id, |state| state.current_language())
    }

    fn context(&self, language: Language) -> RenderContext<'_> {
        RenderContext::new(
            Resolver::new(self.store, language),
            self.pages,
            &self.config.feedback_form_url,
            &self.config.contact_email,
        )
    }

    /// Render `page`, resolving the links of every asset it shows first.
    async fn render(
        &self,
        language: Language,
        page: &PageDescriptor,
        outcome: Option<FormOutcome>,
    ) -> Markup {
        let mut links = HashMap::new();
        for asset in page.assets() {
            links.insert(asset.file, self.assets.links(asset.file).await);
        }

        let mut ctx = self.context(language).with_asset_links(links);
        if let Some(outcome) = outcome {
            ctx = ctx.with_outcome(outcome);
        }
        render_page(&ctx, page)
    }

    fn redirect_root(&self) -> Redirect {
        Redirect::to(&format!("/{}", self.pages.root_id()))
    }
}

/// Attach the session cookie to a response when the session is new.
fn finish(session: &SessionHandle, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if session.is_new {
        match HeaderValue::from_str(&session_cookie(&session.id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => error!("Session cookie is not a valid header value: {}", e),
        }
    }
    response
}

/// Where to send the visitor after a language toggle: back to the page they
/// were on, or the landing page when `return_to` is not one of ours.
fn return_target(pages: &PageRegistry, return_to: Option<&str>) -> String {
    match return_to {
        Some("/") => "/".to_string(),
        Some(path) => match path.strip_prefix('/') {
            Some(id) if pages.contains(id) => path.to_string(),
            _ => format!("/{}", pages.root_id()),
        },
        None => format!("/{}", pages.root_id()),
    }
}

/// `Content-Disposition` value with an ASCII fallback and the exact UTF-8 name.
fn content_disposition(kind: &str, file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .filter(|c| (c.is_ascii_graphic() || *c == ' ') && *c != '"' && *c != '\\')
        .collect();
    format!(
        "{}; filename=\"{}\"; filename*=UTF-8''{}",
        kind,
        ascii,
        urlencoding::encode(file_name)
    )
}

/// `GET /` — the entry route. A fresh session lands on Home exactly once;
/// afterwards the bare entry route only points at the sidebar.
async fn entry(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = state.session(&headers);
    let (language, first_visit) = state
        .sessions
        .with_session(&session.id, |s| (s.current_language(), s.boot()));

    if first_visit {
        debug!("Session {} landing on root page", session.id);
        return finish(&session, state.redirect_root());
    }

    let ctx = state.context(language);
    finish(&session, render_boot_hint(&ctx))
}

/// `GET /:page_id` — render a registered page; unknown ids go to Home.
async fn page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    show_page(&state, &headers, &page_id).await
}

/// `GET /contact` — shares its path with the form post.
async fn contact_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    show_page(&state, &headers, CONTACT_PAGE).await
}

async fn show_page(state: &AppState, headers: &HeaderMap, page_id: &str) -> Response {
    let session = state.session(headers);

    let page = match state.pages.get_page(page_id) {
        Ok(page) => page,
        Err(e) => {
            debug!("{}, redirecting to root", e);
            return finish(&session, state.redirect_root());
        }
    };

    let language = state.sessions.with_session(&session.id, |s| {
        s.navigate();
        s.current_language()
    });

    let markup = state.render(language, page, None).await;
    finish(&session, markup)
}

#[derive(Debug, Deserialize)]
struct LanguageForm {
    #[serde(default)]
    lang: String,
    return_to: Option<String>,
}

/// `POST /language` — switch the session's language and re-render the
/// page the toggle was on. Unsupported codes leave the language unchanged.
async fn set_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LanguageForm>,
) -> Response {
    let session = state.session(&headers);

    match state
        .sessions
        .with_session(&session.id, |s| s.set_language_code(&form.lang))
    {
        Ok(language) => info!("Session {} switched to {}", session.id, language.name()),
        Err(e) => warn!("Ignoring language toggle: {}", e),
    }

    let target = return_target(state.pages, form.return_to.as_deref());
    finish(&session, Redirect::to(&target))
}

/// `GET /assets/:name` — serve a PDF for in-browser viewing.
async fn asset_inline(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    serve_asset(&state, &headers, &name, "inline").await
}

/// `GET /assets/:name/download` — serve a PDF as an attachment.
async fn asset_download(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    serve_asset(&state, &headers, &name, "attachment").await
}

async fn serve_asset(state: &AppState, headers: &HeaderMap, name: &str, disposition: &str) -> Response {
    let session = state.session(headers);
    let language = state.current_language(&session);

    match state.assets.fetch(name).await {
        Ok(bytes) => {
            let download_name = state
                .pages
                .asset(name)
                .map(|asset| asset.download_name)
                .unwrap_or(name);
            let response_headers = [
                (CONTENT_TYPE, "application/pdf".to_string()),
                (CONTENT_DISPOSITION, content_disposition(disposition, download_name)),
            ];
            finish(&session, (response_headers, bytes))
        }
        Err(e) => {
            // Remote failures look like a missing file to the visitor
            let status = match &e {
                AssetError::Io { .. } => {
                    error!("{}", e);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                _ => {
                    warn!("Asset unavailable: {}", e);
                    StatusCode::NOT_FOUND
                }
            };
            let ctx = state.context(language);
            let text = ctx.resolver.t_with("asset_missing", &[("file", name)]);
            finish(&session, (status, render_notice(&ctx, NoticeKind::Warning, &text)))
        }
    }
}

/// `POST /feedback/export` — turn the fallback form into a CSV download.
async fn export_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: std::result::Result<Form<FeedbackForm>, FormRejection>,
) -> Response {
    let session = state.session(&headers);
    let language = state.current_language(&session);
    let resolver = Resolver::new(state.store, language);

    let submission = match form {
        Ok(Form(form)) => FeedbackSubmission::from_form(form, &resolver, Utc::now())
            .inspect_err(|e| warn!("Rejected feedback export: {}", e))
            .ok(),
        Err(e) => {
            warn!("Rejected feedback export: {}", e);
            None
        }
    };

    match submission {
        Some(submission) => {
            info!("Exported feedback entry (rating {})", submission.rating);
            let response_headers = [
                (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    CONTENT_DISPOSITION,
                    content_disposition("attachment", EXPORT_FILE_NAME),
                ),
            ];
            finish(&session, (response_headers, submission.to_csv()))
        }
        None => match state.pages.get_page(FEEDBACK_PAGE) {
            Ok(page) => {
                let markup = state
                    .render(language, page, Some(FormOutcome::InvalidRating))
                    .await;
                finish(&session, (StatusCode::UNPROCESSABLE_ENTITY, markup))
            }
            Err(e) => {
                error!("{}", e);
                finish(&session, state.redirect_root())
            }
        },
    }
}

/// `POST /contact` — build an email draft and show it on the contact page.
async fn contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: std::result::Result<Form<ContactForm>, FormRejection>,
) -> Response {
    let session = state.session(&headers);

    let page = match state.pages.get_page(CONTACT_PAGE) {
        Ok(page) => page,
        Err(e) => {
            error!("{}", e);
            return finish(&session, state.redirect_root());
        }
    };

    let language = state.sessions.with_session(&session.id, |s| {
        s.navigate();
        s.current_language()
    });

    let Form(form) = match form {
        Ok(form) => form,
        Err(e) => {
            warn!("Rejected contact form: {}", e);
            let markup = state
                .render(language, page, Some(FormOutcome::InvalidContact))
                .await;
            return finish(&session, (StatusCode::UNPROCESSABLE_ENTITY, markup));
        }
    };

    let resolver = Resolver::new(state.store, language);
    let outcome = form.submit(&resolver, &state.config.contact_email);
    match &outcome {
        ContactOutcome::ConsentRequired => info!("Contact draft refused: acknowledgement not ticked"),
        ContactOutcome::Draft(_) => info!("Generated contact email draft"),
    }

    let markup = state
        .render(language, page, Some(FormOutcome::Contact { form, outcome }))
        .await;
    finish(&session, markup)
}

/// `GET /health` — liveness plus session and lookup counters.
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "sessions": state.sessions.len(),
        "localization": state.store.metrics().report(),
    }))
}

/// Anything unrouted lands on Home.
async fn fallback(State(state): State<AppState>) -> Redirect {
    state.redirect_root()
}

/// Build the axum router with shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(entry))
        .route("/health", get(health))
        .route("/language", post(set_language))
        .route("/feedback/export", post(export_feedback))
        .route("/contact", get(contact_page).post(contact))
        .route("/assets/:name", get(asset_inline))
        .route("/assets/:name/download", get(asset_download))
        .route("/:page_id", get(page))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and run the server until it fails.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_addr();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
