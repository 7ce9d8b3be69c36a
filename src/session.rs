//! Per-visitor session state.
//!
//! Each visitor gets a random session id (carried in a cookie) and a
//! `SessionState` that only that visitor's requests touch. The store is a
//! plain in-memory map; sessions expire after a period of inactivity.

use crate::error::Result;
use crate::i18n::Language;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use uuid::Uuid;

/// Name of the cookie holding the session id
pub const SESSION_COOKIE: &str = "dots_session";

/// State of one visitor's session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// `None` until first read or write
    language: Option<Language>,
    booted: bool,
    last_seen: DateTime<Utc>,
}

impl SessionState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            language: None,
            booted: false,
            last_seen: now,
        }
    }

    /// Current language; a fresh session is initialized to the default here.
    pub fn current_language(&mut self) -> Language {
        if !self.is_language_initialized() {
            debug!("Session language initialized to the default");
        }
        *self.language.get_or_insert_with(Language::canonical)
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    /// Set the language from a posted code. An unknown code leaves the
    /// current choice untouched.
    pub fn set_language_code(&mut self, code: &str) -> Result<Language> {
        let language = Language::from_code(code)?;
        self.set_language(language);
        Ok(language)
    }

    pub fn is_language_initialized(&self) -> bool {
        self.language.is_some()
    }

    /// Record the first-visit landing. Returns `true` exactly once per
    /// session, and only if nothing has been visited yet.
    pub fn boot(&mut self) -> bool {
        !std::mem::replace(&mut self.booted, true)
    }

    /// Record a page visit. Any navigation counts as history, so a later
    /// visit to the entry route does not redirect again.
    pub fn navigate(&mut self) {
        self.booted = true;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen = now;
    }

    fn is_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> bool {
        now - self.last_seen > max_idle
    }
}

/// In-memory map of live sessions, shared by the request handlers.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionState>>>,
    max_idle: Duration,
}

/// A session resolved for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub id: String,
    /// The id was minted for this request and must be sent back as a cookie
    pub is_new: bool,
}

impl SessionStore {
    pub fn new(max_idle: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_idle,
        }
    }

    /// Resolve the session for a request carrying `cookie_id`, creating a new
    /// one when the id is absent, unknown, or expired.
    pub fn resolve(&self, cookie_id: Option<&str>) -> SessionHandle {
        let now = Utc::now();
        let mut sessions = self.lock();

        if let Some(id) = cookie_id {
            if let Some(state) = sessions.get_mut(id) {
                if !state.is_idle(now, self.max_idle) {
                    state.touch(now);
                    return SessionHandle {
                        id: id.to_string(),
                        is_new: false,
                    };
                }
                debug!("Session {} expired", id);
                sessions.remove(id);
            }
        }

        let before = sessions.len();
        sessions.retain(|_, state| !state.is_idle(now, self.max_idle));
        let pruned = before - sessions.len();
        if pruned > 0 {
            info!("Pruned {} idle sessions", pruned);
        }

        let id = Uuid::new_v4().to_string();
        sessions.insert(id.clone(), SessionState::new(now));
        debug!("Created session {}", id);

        SessionHandle { id, is_new: true }
    }

    /// Run `f` against the session's state. The lock is held only for the
    /// duration of `f`, which must not block.
    pub fn with_session<R>(&self, id: &str, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut sessions = self.lock();
        let state = sessions
            .entry(id.to_string())
            .or_insert_with(|| SessionState::new(Utc::now()));
        f(state)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, SessionState>> {
        // A panic while holding the lock cannot leave a session half-written
        // in a way later requests care about; keep serving.
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::minutes(120))
    }
}

/// Extract the session id from a `Cookie` header value.
pub fn session_id_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` header value for a session id.
pub fn session_cookie(id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolkitError;

    // ==================== Language State Tests ====================

    #[test]
    fn test_fresh_session_defaults_to_english() {
        let mut state = SessionState::new(Utc::now());
        assert!(!state.is_language_initialized());
        assert_eq!(state.current_language(), Language::ENGLISH);
        assert!(state.is_language_initialized());
    }

    #[test]
    fn test_current_language_is_idempotent() {
        let mut state = SessionState::new(Utc::now());
        assert_eq!(state.current_language(), state.current_language());
    }

    #[test]
    fn test_first_write_before_read() {
        let mut state = SessionState::new(Utc::now());
        state.set_language(Language::JAPANESE);
        assert_eq!(state.current_language(), Language::JAPANESE);
    }

    #[test]
    fn test_latest_write_wins() {
        let mut state = SessionState::new(Utc::now());
        state.set_language(Language::JAPANESE);
        state.set_language(Language::ENGLISH);
        state.set_language(Language::JAPANESE);
        assert_eq!(state.current_language(), Language::JAPANESE);
    }

    #[test]
    fn test_invalid_code_keeps_prior_language() {
        let mut state = SessionState::new(Utc::now());
        state.set_language(Language::JAPANESE);

        let result = state.set_language_code("fr");
        assert_eq!(
            result,
            Err(ToolkitError::InvalidLanguageChoice("fr".to_string()))
        );
        assert_eq!(state.current_language(), Language::JAPANESE);
    }

    #[test]
    fn test_set_language_code_valid() {
        let mut state = SessionState::new(Utc::now());
        assert_eq!(state.set_language_code("ja"), Ok(Language::JAPANESE));
        assert_eq!(state.current_language(), Language::JAPANESE);
    }

    // ==================== Boot Tests ====================

    #[test]
    fn test_boot_happens_once() {
        let mut state = SessionState::new(Utc::now());
        assert!(state.boot());
        assert!(!state.boot());
        assert!(!state.boot());
    }

    #[test]
    fn test_navigation_before_boot_suppresses_landing() {
        let mut state = SessionState::new(Utc::now());
        state.navigate();
        assert!(!state.boot());
    }

    // ==================== Store Tests ====================

    #[test]
    fn test_resolve_without_cookie_creates_session() {
        let store = SessionStore::default();
        let handle = store.resolve(None);
        assert!(handle.is_new);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_resolve_known_cookie_reuses_session() {
        let store = SessionStore::default();
        let first = store.resolve(None);
        let second = store.resolve(Some(&first.id));

        assert!(!second.is_new);
        assert_eq!(first.id, second.id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_cookie_mints_new_id() {
        let store = SessionStore::default();
        let handle = store.resolve(Some("forged-id"));

        assert!(handle.is_new);
        assert_ne!(handle.id, "forged-id");
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let a = store.resolve(None);
        let b = store.resolve(None);

        store.with_session(&a.id, |s| s.set_language(Language::JAPANESE));

        assert_eq!(store.with_session(&a.id, |s| s.current_language()), Language::JAPANESE);
        assert_eq!(store.with_session(&b.id, |s| s.current_language()), Language::ENGLISH);
    }

    #[test]
    fn test_idle_sessions_expire() {
        let store = SessionStore::new(Duration::zero());
        let first = store.resolve(None);
        std::thread::sleep(std::time::Duration::from_millis(5));

        let second = store.resolve(Some(&first.id));
        assert!(second.is_new);
        assert_eq!(store.len(), 1);
    }

    // ==================== Cookie Tests ====================

    #[test]
    fn test_session_id_from_cookie_header() {
        assert_eq!(
            session_id_from_cookie_header("theme=calm; dots_session=abc-123; other=x"),
            Some("abc-123")
        );
        assert_eq!(session_id_from_cookie_header("dots_session="), None);
        assert_eq!(session_id_from_cookie_header("theme=calm"), None);
        assert_eq!(session_id_from_cookie_header(""), None);
    }

    #[test]
    fn test_session_cookie_format() {
        assert_eq!(
            session_cookie("abc"),
            "dots_session=abc; Path=/; HttpOnly; SameSite=Lax"
        );
    }
}
