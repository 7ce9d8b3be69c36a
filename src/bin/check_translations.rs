//! Translation check binary - validates the string tables and page content
//!
//! Usage:
//!   cargo run --bin check-translations            # Errors only
//!   cargo run --bin check-translations -- --all   # Also list keys falling back to English
//!
//! Exits non-zero when any error is found, so it can gate CI.

use anyhow::Result;
use dots_toolkit::i18n::{Language, LocalizationStore, TranslationValidator};
use dots_toolkit::pages::PageRegistry;

fn main() -> Result<()> {
    let show_warnings = std::env::args().any(|arg| arg == "--all");

    let store = LocalizationStore::shipped();
    let registry = PageRegistry::get();

    let mut report = TranslationValidator::validate_store(store);
    report.merge(TranslationValidator::validate_registry(registry, store));

    println!("Content keys: {}", store.len());
    for language in Language::all() {
        let translated = store
            .keys()
            .iter()
            .filter(|key| store.text(key, language).is_some())
            .count();
        println!(
            "  {} ({}): {}/{} translated",
            language.name(),
            language.code(),
            translated,
            store.len()
        );
    }
    println!("Pages: {}", registry.list_pages().len());
    println!();

    if show_warnings {
        for warning in &report.warnings {
            println!("WARN  {}", warning);
        }
    } else if report.has_warnings() {
        println!(
            "{} keys fall back to English (run with --all to list them)",
            report.warnings.len()
        );
    }

    for error in &report.errors {
        println!("ERROR {}", error);
    }

    if report.has_errors() {
        anyhow::bail!("{} content errors found", report.errors.len());
    }

    println!("All content checks passed");
    Ok(())
}
