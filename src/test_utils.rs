//! Shared fixtures for unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::i18n::{
    Language,
    LanguageContext,
    LocaleCatalog,
    MemoryLanguageStore,
};

/// Context over the bundled catalog with an in-memory store.
///
/// # Arguments
/// * `language` - Language already saved in the store
///
/// # Returns
/// The context and the store it persists into
pub(crate) fn language_context(language: Language) -> (LanguageContext, Arc<MemoryLanguageStore>) {
    let catalog = Arc::new(LocaleCatalog::builtin().unwrap());
    let store = Arc::new(MemoryLanguageStore::with_value(language.code()));
    let context = LanguageContext::new(catalog, store.clone(), Language::Es);
    (context, store)
}
