//! Localization store: content key → {language → text}.
//!
//! Lookups never fail. The fallback chain is
//! requested language → default language → the raw key.

use crate::error::{Result, ToolkitError};
use crate::i18n::metrics::ResolutionMetrics;
use crate::i18n::strings::{ENGLISH_TEXT, JAPANESE_TEXT};
use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Static text for every content key, per language.
#[derive(Debug)]
pub struct LocalizationStore {
    entries: HashMap<String, HashMap<Language, String>>,
    default_language: Language,
    metrics: ResolutionMetrics,
}

static SHIPPED: OnceLock<LocalizationStore> = OnceLock::new();

impl LocalizationStore {
    /// The store built from the string tables compiled into the binary.
    ///
    /// # Panics
    /// Panics if the tables are inconsistent (a non-default table defines a
    /// key the default table lacks). Covered by tests, so this indicates a
    /// broken build rather than a runtime condition.
    pub fn shipped() -> &'static LocalizationStore {
        SHIPPED.get_or_init(|| {
            LocalizationStore::from_tables(&[
                (Language::ENGLISH, ENGLISH_TEXT),
                (Language::JAPANESE, JAPANESE_TEXT),
            ])
            .expect("Shipped string tables should be consistent")
        })
    }

    /// Build a store from one `(key, text)` table per language.
    pub fn from_tables(tables: &[(Language, &[(&str, &str)])]) -> Result<Self> {
        let mut builder = Self::builder();
        for (language, table) in tables {
            for (key, text) in table.iter() {
                builder = builder.text(*language, key, text);
            }
        }
        builder.build()
    }

    pub fn builder() -> LocalizationStoreBuilder {
        LocalizationStoreBuilder {
            entries: HashMap::new(),
            default_language: Language::canonical(),
        }
    }

    /// Resolve `key` for `language`, degrading instead of failing.
    pub fn lookup<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        let Some(entry) = self.entries.get(key) else {
            self.metrics.record_missing_key();
            return key;
        };

        if let Some(text) = entry.get(&language) {
            self.metrics.record_direct_hit();
            return text;
        }

        match entry.get(&self.default_language) {
            Some(text) => {
                self.metrics.record_fallback();
                text
            }
            // Unreachable for a built store; keep the raw key as the last resort.
            None => {
                self.metrics.record_missing_key();
                key
            }
        }
    }

    /// Exact text for `key` in `language`, without fallback.
    pub fn text(&self, key: &str, language: Language) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|entry| entry.get(&language))
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn metrics(&self) -> &ResolutionMetrics {
        &self.metrics
    }
}

/// Collects entries and checks the default-language invariant on `build`.
#[derive(Debug)]
pub struct LocalizationStoreBuilder {
    entries: HashMap<String, HashMap<Language, String>>,
    default_language: Language,
}

impl LocalizationStoreBuilder {
    /// Add (or replace) the text of `key` in `language`.
    pub fn text(mut self, language: Language, key: &str, text: &str) -> Self {
        self.entries
            .entry(key.to_string())
            .or_default()
            .insert(language, text.to_string());
        self
    }

    pub fn build(self) -> Result<LocalizationStore> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();

        for key in keys {
            let entry = &self.entries[key];
            if !entry.contains_key(&self.default_language) {
                let language = entry
                    .keys()
                    .map(|lang| lang.code())
                    .next()
                    .unwrap_or_default();
                return Err(ToolkitError::MissingDefaultText {
                    key: key.clone(),
                    language: language.to_string(),
                });
            }
        }

        Ok(LocalizationStore {
            entries: self.entries,
            default_language: self.default_language,
            metrics: ResolutionMetrics::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn greeting_store() -> LocalizationStore {
        LocalizationStore::builder()
            .text(Language::ENGLISH, "greeting", "Hello")
            .text(Language::JAPANESE, "greeting", "こんにちは")
            .text(Language::ENGLISH, "farewell", "Goodbye")
            .build()
            .expect("store should build")
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_requested_language() {
        let store = greeting_store();
        assert_eq!(store.lookup("greeting", Language::JAPANESE), "こんにちは");
        assert_eq!(store.lookup("greeting", Language::ENGLISH), "Hello");
    }

    #[test]
    fn test_lookup_falls_back_to_default_language() {
        let store = greeting_store();
        assert_eq!(store.lookup("farewell", Language::JAPANESE), "Goodbye");
    }

    #[test]
    fn test_lookup_unknown_key_returns_key() {
        let store = greeting_store();
        assert_eq!(store.lookup("unknown_key", Language::ENGLISH), "unknown_key");
        assert_eq!(store.lookup("unknown_key", Language::JAPANESE), "unknown_key");
    }

    #[test]
    fn test_unsupported_language_never_reaches_lookup() {
        // "fr" is rejected when the Language is constructed.
        assert!(Language::from_code("fr").is_err());
    }

    #[test]
    fn test_lookup_records_metrics() {
        let store = greeting_store();
        store.lookup("greeting", Language::JAPANESE);
        store.lookup("farewell", Language::JAPANESE);
        store.lookup("nope", Language::ENGLISH);

        assert_eq!(store.metrics().direct_hits(), 1);
        assert_eq!(store.metrics().fallbacks(), 1);
        assert_eq!(store.metrics().missing_keys(), 1);
    }

    // ==================== Builder Tests ====================

    #[test]
    fn test_build_rejects_entry_without_default_text() {
        let result = LocalizationStore::builder()
            .text(Language::JAPANESE, "orphan", "孤立")
            .build();

        assert_eq!(
            result.unwrap_err(),
            ToolkitError::MissingDefaultText {
                key: "orphan".to_string(),
                language: "ja".to_string(),
            }
        );
    }

    #[test]
    fn test_later_text_replaces_earlier() {
        let store = LocalizationStore::builder()
            .text(Language::ENGLISH, "k", "first")
            .text(Language::ENGLISH, "k", "second")
            .build()
            .unwrap();
        assert_eq!(store.text("k", Language::ENGLISH), Some("second"));
    }

    #[test]
    fn test_text_has_no_fallback() {
        let store = greeting_store();
        assert_eq!(store.text("farewell", Language::JAPANESE), None);
        assert_eq!(store.text("farewell", Language::ENGLISH), Some("Goodbye"));
    }

    #[test]
    fn test_keys_sorted() {
        assert_eq!(greeting_store().keys(), vec!["farewell", "greeting"]);
    }

    // ==================== Shipped Store Tests ====================

    #[test]
    fn test_shipped_store_builds() {
        let store = LocalizationStore::shipped();
        assert!(!store.is_empty());
        assert_eq!(store.default_language(), Language::ENGLISH);
    }

    #[test]
    fn test_shipped_store_has_no_blank_translations() {
        let store = LocalizationStore::shipped();
        for key in store.keys() {
            for language in Language::all() {
                assert!(
                    !store.lookup(key, language).trim().is_empty(),
                    "'{}' resolves to blank text in {}",
                    key,
                    language
                );
            }
        }
    }

    #[test]
    fn test_shipped_missing_translations_match_default() {
        let store = LocalizationStore::shipped();
        for key in store.keys() {
            if store.text(key, Language::JAPANESE).is_none() {
                assert_eq!(
                    store.lookup(key, Language::JAPANESE),
                    store.lookup(key, Language::ENGLISH)
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_unknown_keys_resolve_to_themselves(key in "[a-z_]{1,24}") {
            let store = greeting_store();
            prop_assume!(!store.contains_key(&key));
            for language in Language::all() {
                prop_assert_eq!(store.lookup(&key, language), key.as_str());
            }
        }
    }
}
