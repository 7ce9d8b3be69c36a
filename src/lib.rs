//! DOTS Toolkit: a bilingual (English/Japanese) web toolkit that helps
//! educators talk about neurodiversity.
//!
//! Pages are static data rendered per request in the visitor's session
//! language, with English as the fallback for anything not yet translated.

pub mod assets;
pub mod config;
pub mod contact;
pub mod error;
pub mod feedback;
pub mod i18n;
pub mod pages;
pub mod render;
pub mod retry;
pub mod server;
pub mod session;
