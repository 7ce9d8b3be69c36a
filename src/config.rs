use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_FEEDBACK_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLScifOKrnjNajCSDbCwWBGdaw8HfZzH5lEaz9qZY5BZtysfJ_w/viewform?usp=send_form";
pub const DEFAULT_CONTACT_EMAIL: &str = "chawala.banda@keio.jp";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Assets
    pub assets_dir: PathBuf,
    /// Base URL the PDFs are also published under (e.g. a raw GitHub path).
    /// Enables the remote fallback and the in-browser viewer link.
    pub asset_remote_base: Option<String>,

    // External collaborators
    pub feedback_form_url: String,
    pub contact_email: String,

    // Sessions
    pub session_idle_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Assets
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets")),
            asset_remote_base: std::env::var("ASSET_REMOTE_BASE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| if v.ends_with('/') { v } else { format!("{}/", v) }),

            // External collaborators
            feedback_form_url: std::env::var("FEEDBACK_FORM_URL")
                .unwrap_or_else(|_| DEFAULT_FEEDBACK_FORM_URL.to_string()),
            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| DEFAULT_CONTACT_EMAIL.to_string()),

            // Sessions
            session_idle_minutes: std::env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|minutes: &i64| *minutes > 0)
                .unwrap_or(120),
        };

        if let Some(base) = &config.asset_remote_base {
            reqwest::Url::parse(base)
                .with_context(|| format!("ASSET_REMOTE_BASE is not a valid URL: {}", base))?;
        }

        Ok(config)
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "ASSETS_DIR",
        "ASSET_REMOTE_BASE",
        "FEEDBACK_FORM_URL",
        "CONTACT_EMAIL",
        "SESSION_IDLE_MINUTES",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.asset_remote_base.is_none());
        assert_eq!(config.feedback_form_url, DEFAULT_FEEDBACK_FORM_URL);
        assert_eq!(config.contact_email, DEFAULT_CONTACT_EMAIL);
        assert_eq!(config.session_idle_minutes, 120);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("ASSETS_DIR", "/srv/pdfs");
        std::env::set_var("ASSET_REMOTE_BASE", "https://raw.example.com/assets");
        std::env::set_var("SESSION_IDLE_MINUTES", "30");

        let config = Config::from_env().expect("overrides should load");
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.assets_dir, PathBuf::from("/srv/pdfs"));
        assert_eq!(
            config.asset_remote_base.as_deref(),
            Some("https://raw.example.com/assets/")
        );
        assert_eq!(config.session_idle_minutes, 30);
    }

    #[test]
    #[serial]
    fn test_from_env_unparsable_numbers_fall_back() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("SESSION_IDLE_MINUTES", "-5");

        let config = Config::from_env().expect("should load");
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.session_idle_minutes, 120);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_remote_base() {
        clear_env();
        std::env::set_var("ASSET_REMOTE_BASE", "not a url");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
