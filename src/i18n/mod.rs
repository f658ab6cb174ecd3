//! Locale catalog, persisted language slot and the injected language context.

/// Flattened translation tables
pub mod catalog;
/// Language handle shared by every localized component
mod context;
/// Supported languages
mod language;
/// Persisted language slot
pub mod store;

use std::collections::BTreeMap;

use thiserror::Error;

pub use catalog::LocaleCatalog;
pub use context::LanguageContext;
pub use language::Language;
pub use store::{
    FileLanguageStore,
    LanguageStore,
    MemoryLanguageStore,
    StoreError,
};

/// Errors raised while building or addressing the locale catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A language code other than the supported ones
    #[error("Unsupported language code '{0}' (expected \"es\" or \"en\")")]
    UnknownLanguage(String),

    /// A locale source that is not a JSON object
    #[error("Failed to parse locale source for '{language}': {message}")]
    InvalidSource { language: Language, message: String },

    /// Keys present in one language but not in another, per language
    #[error("Locale tables differ:\n{}", format_missing_keys(.missing))]
    MissingKeys { missing: BTreeMap<Language, Vec<String>> },
}

fn format_missing_keys(missing: &BTreeMap<Language, Vec<String>>) -> String {
    missing
        .iter()
        .map(|(language, keys)| {
            format!("  '{language}' is missing {} key(s): {}", keys.len(), keys.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
