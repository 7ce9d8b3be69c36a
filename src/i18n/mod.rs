//! Internationalization (i18n) for the toolkit's English and Japanese content.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe Language handle; unsupported codes are rejected
//! - `strings`: Per-language string tables compiled into the binary
//! - `catalog`: Localization store with the requested → default → raw-key fallback
//! - `resolver`: Per-request lookup in one fixed language
//! - `validator`: Checks the string tables and page content for gaps
//! - `metrics`: Counters for direct hits, fallbacks and missing keys
//!
//! # Example
//!
//! ```rust,ignore
//! use dots_toolkit::i18n::{Language, LocalizationStore, Resolver};
//!
//! let japanese = Language::from_code("ja")?;
//! let resolver = Resolver::new(LocalizationStore::shipped(), japanese);
//! let title = resolver.t("home_title");
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod resolver;
pub mod strings;
mod validator;

pub use catalog::{LocalizationStore, LocalizationStoreBuilder};
pub use language::Language;
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::Resolver;
pub use validator::{TranslationValidator, ValidationReport};
