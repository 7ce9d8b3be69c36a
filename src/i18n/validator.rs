//! Content validation for the string tables and the page registry.
//!
//! Checks that every translation keeps the `{placeholders}` of its English
//! source, that no text is blank, and that every key, link and page the
//! navigation graph uses actually exists.

use crate::i18n::{Language, LocalizationStore};
use crate::pages::PageRegistry;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that break a rendered page
    pub errors: Vec<String>,

    /// Gaps that degrade gracefully (e.g. text falling back to English)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append another report's findings.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for localized content.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate one translation against its default-language source.
    pub fn validate(key: &str, original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.trim().is_empty() {
            report.errors.push(format!("'{}': translation is blank", key));
            return report;
        }

        let orig_placeholders = Self::extract_placeholders(original);
        let trans_placeholders = Self::extract_placeholders(translated);
        if orig_placeholders != trans_placeholders {
            report.errors.push(format!(
                "'{}': placeholder mismatch: original has {:?}, translation has {:?}",
                key, orig_placeholders, trans_placeholders
            ));
        }

        report
    }

    /// Validate every entry of a store.
    ///
    /// Blank default text and placeholder drift are errors. Keys with no
    /// text in a supported language are warnings, since lookups fall back to
    /// the default language.
    pub fn validate_store(store: &LocalizationStore) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default = store.default_language();

        for key in store.keys() {
            let Some(original) = store.text(key, default) else {
                report
                    .errors
                    .push(format!("'{}': no {} text", key, default.name()));
                continue;
            };
            if original.trim().is_empty() {
                report
                    .errors
                    .push(format!("'{}': {} text is blank", key, default.name()));
                continue;
            }

            for language in Language::all() {
                if language == default {
                    continue;
                }
                match store.text(key, language) {
                    Some(translated) => {
                        report.merge(Self::validate(key, original, translated));
                    }
                    None => report.warnings.push(format!(
                        "'{}': no {} translation, falls back to {}",
                        key,
                        language.name(),
                        default.name()
                    )),
                }
            }
        }

        report
    }

    /// Validate the navigation graph and the keys its pages render.
    pub fn validate_registry(registry: &PageRegistry, store: &LocalizationStore) -> ValidationReport {
        let mut report = ValidationReport::new();

        if !registry.contains(registry.root_id()) {
            report
                .errors
                .push(format!("Root page '{}' is not registered", registry.root_id()));
        }

        for id in registry.duplicate_ids() {
            report.errors.push(format!("Page id '{}' is registered twice", id));
        }

        for (source, target) in registry.dangling_links() {
            report.errors.push(format!(
                "Page '{}' links to unknown page '{}'",
                source, target
            ));
        }

        for page in registry.list_pages() {
            let unknown: BTreeSet<&str> = page
                .keys()
                .into_iter()
                .filter(|key| !store.contains_key(key))
                .collect();
            for key in unknown {
                report
                    .errors
                    .push(format!("Page '{}' uses unknown key '{}'", page.id, key));
            }
        }

        report
    }

    /// Extract `{name}` placeholders from text, sorted and deduplicated
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{NavGroup, NavLink, PageDescriptor, Section};

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let placeholders = TranslationValidator::extract_placeholders("Email: {email}");
        assert_eq!(placeholders, vec!["email"]);
    }

    #[test]
    fn test_extract_placeholders_sorted_and_unique() {
        let placeholders =
            TranslationValidator::extract_placeholders("{file} then {email} then {file}");
        assert_eq!(placeholders, vec!["email", "file"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TranslationValidator::extract_placeholders("No placeholders").is_empty());
    }

    // ==================== Single Translation Tests ====================

    #[test]
    fn test_validate_matching_translation() {
        let report = TranslationValidator::validate("k", "Email: {email}", "メール：{email}");
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_missing_placeholder() {
        let report = TranslationValidator::validate("k", "Email: {email}", "メール");
        assert!(report.has_errors());
        assert!(report.errors[0].contains("placeholder mismatch"));
    }

    #[test]
    fn test_validate_blank_translation() {
        let report = TranslationValidator::validate("k", "Hello", "   ");
        assert!(report.errors[0].contains("blank"));
    }

    // ==================== Store Tests ====================

    #[test]
    fn test_validate_store_warns_on_fallback() {
        let store = LocalizationStore::builder()
            .text(Language::ENGLISH, "greeting", "Hello")
            .text(Language::JAPANESE, "greeting", "こんにちは")
            .text(Language::ENGLISH, "farewell", "Goodbye")
            .build()
            .unwrap();

        let report = TranslationValidator::validate_store(&store);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'farewell'"));
    }

    #[test]
    fn test_validate_store_flags_blank_default() {
        let store = LocalizationStore::builder()
            .text(Language::ENGLISH, "empty", " ")
            .build()
            .unwrap();

        let report = TranslationValidator::validate_store(&store);
        assert!(report.has_errors());
    }

    #[test]
    fn test_shipped_store_has_no_errors() {
        let report = TranslationValidator::validate_store(LocalizationStore::shipped());
        assert!(!report.has_errors(), "{:?}", report.errors);
    }

    // ==================== Registry Tests ====================

    #[test]
    fn test_site_registry_is_valid() {
        let report =
            TranslationValidator::validate_registry(PageRegistry::get(), LocalizationStore::shipped());
        assert!(report.is_clean(), "{:?}", report.errors);
    }

    #[test]
    fn test_validate_registry_reports_broken_graph() {
        const LINKS: &[NavGroup] = &[NavGroup {
            heading: "title",
            links: &[NavLink { label: "title", target: "missing" }],
        }];
        let page = PageDescriptor {
            id: "start",
            menu_label: "title",
            title: "title",
            subtitle: None,
            sections: &[Section::Paragraph("unknown_key")],
            nav_groups: LINKS,
        };
        let registry = PageRegistry::new(vec![page, page], "home");
        let store = LocalizationStore::builder()
            .text(Language::ENGLISH, "title", "Title")
            .build()
            .unwrap();

        let report = TranslationValidator::validate_registry(&registry, &store);
        let errors = report.errors.join("\n");
        assert!(errors.contains("Root page 'home'"));
        assert!(errors.contains("registered twice"));
        assert!(errors.contains("unknown page 'missing'"));
        assert!(errors.contains("unknown key 'unknown_key'"));
    }
}
