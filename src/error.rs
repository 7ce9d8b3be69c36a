use thiserror::Error;

/// Errors raised by the toolkit's library code.
///
/// None of these are fatal to the process: each is scoped to a single
/// request and the HTTP layer turns it into a redirect or a localized notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    /// A page id that is not in the registry.
    #[error("Unknown page id: '{0}'")]
    UnknownPageId(String),

    /// A language code outside the declared set, or a disabled language.
    #[error("Invalid language choice: '{0}'")]
    InvalidLanguageChoice(String),

    /// Feedback rating outside 1..=5.
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// Static content configuration error (detected when the store is built).
    #[error("Localization key '{key}' has a '{language}' value but no default-language value")]
    MissingDefaultText { key: String, language: String },
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
