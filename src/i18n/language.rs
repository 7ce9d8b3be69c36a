//! Language type: validated language representation.
//!
//! A `Language` can only be obtained from the registry (or the constants
//! below), so every value flowing through the resolver is one of the
//! declared languages. Unsupported codes are rejected at construction.

use crate::error::{Result, ToolkitError};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ja")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const JAPANESE: Language = Language { code: "ja" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err(ToolkitError::InvalidLanguageChoice)` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            _ => Err(ToolkitError::InvalidLanguageChoice(code.to_string())),
        }
    }

    /// The default language: what a fresh session reads in, and what every
    /// localization key must have a value for.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All enabled languages in toggle display order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Japanese").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "日本語").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_japanese_constant() {
        let japanese = Language::JAPANESE;
        assert_eq!(japanese.code(), "ja");
        assert_eq!(japanese.name(), "Japanese");
        assert_eq!(japanese.native_name(), "日本語");
        assert!(!japanese.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_declared_languages() {
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
        assert_eq!(Language::from_code("ja").unwrap(), Language::JAPANESE);
    }

    #[test]
    fn test_from_code_rejects_unsupported_language() {
        let result = Language::from_code("fr");
        assert_eq!(
            result,
            Err(ToolkitError::InvalidLanguageChoice("fr".to_string()))
        );
    }

    #[test]
    fn test_from_code_rejects_display_names() {
        // The toggle posts codes, never the labels it shows.
        assert!(Language::from_code("English").is_err());
        assert!(Language::from_code("日本語").is_err());
        assert!(Language::from_code("").is_err());
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_canonical_and_default_are_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_all_in_toggle_order() {
        assert_eq!(Language::all(), vec![Language::JAPANESE, Language::ENGLISH]);
    }

    #[test]
    fn test_display_writes_code() {
        assert_eq!(Language::JAPANESE.to_string(), "ja");
    }
}
