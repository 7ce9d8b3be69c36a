//! Content resolver: the single path from a content key to visible text.

use crate::i18n::{Language, LocalizationStore};

/// Resolves keys against a store in one fixed language.
///
/// Built per request from the session's current language, so every string on
/// a rendered page comes out in the same language.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a LocalizationStore,
    language: Language,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a LocalizationStore, language: Language) -> Self {
        Self { store, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Localized text for `key`.
    pub fn t(&self, key: &'a str) -> &'a str {
        self.store.lookup(key, self.language)
    }

    /// Localized text with `{name}` placeholders substituted.
    pub fn t_with(&self, key: &'a str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}
