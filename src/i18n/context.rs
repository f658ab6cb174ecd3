//! Language handle shared by every localized component

use std::sync::Arc;

use tokio::sync::watch;

use super::{
    Language,
    LanguageStore,
    LocaleCatalog,
};

/// Active language plus the catalog it indexes into.
///
/// Cloning is cheap and every clone observes the same active language.
/// Components receive this handle at construction instead of reaching for
/// ambient state, so there is no way to translate without one.
#[derive(Clone, Debug)]
pub struct LanguageContext {
    catalog: Arc<LocaleCatalog>,
    current: Arc<watch::Sender<Language>>,
    store: Arc<dyn LanguageStore>,
}

impl LanguageContext {
    /// Create a context, restoring the persisted language when the store holds
    /// a supported code and using `default` otherwise.
    #[must_use]
    pub fn new(catalog: Arc<LocaleCatalog>, store: Arc<dyn LanguageStore>, default: Language) -> Self {
        let initial = match store.load() {
            Ok(Some(code)) => code.parse().unwrap_or_else(|e| {
                tracing::debug!("Ignoring persisted language: {}", e);
                default
            }),
            Ok(None) => default,
            Err(e) => {
                tracing::warn!("Failed to restore persisted language: {}", e);
                default
            }
        };
        tracing::debug!(language = %initial, "Language context ready");

        let (current, _) = watch::channel(initial);
        Self { catalog, current: Arc::new(current), store }
    }

    #[must_use]
    pub fn current_language(&self) -> Language {
        *self.current.borrow()
    }

    /// Switch the active language and persist the choice.
    ///
    /// A persistence failure is logged; the switch itself still applies.
    pub fn set_language(&self, language: Language) {
        let previous = self.current.send_replace(language);
        if previous != language {
            tracing::info!(from = %previous, to = %language, "Language changed");
        }
        if let Err(e) = self.store.save(language.code()) {
            tracing::warn!("Failed to persist language '{}': {}", language, e);
        }
    }

    /// Switch to the other language, returning the new one.
    pub fn toggle_language(&self) -> Language {
        let next = self.current_language().toggled();
        self.set_language(next);
        next
    }

    /// Resolve a dotted key in the active language.
    ///
    /// Unknown keys come back unchanged.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.catalog.translate(self.current_language(), key)
    }

    /// Resolve a dotted key in a specific language, ignoring the active one.
    #[must_use]
    pub fn translate_in(&self, language: Language, key: &str) -> String {
        self.catalog.translate(language, key)
    }

    /// Receiver notified on every language switch.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.current.subscribe()
    }

    #[must_use]
    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::i18n::{
        MemoryLanguageStore,
        StoreError,
    };
    use crate::test_utils::language_context;

    /// Store whose writes always fail.
    #[derive(Debug)]
    struct ReadOnlyStore;

    impl LanguageStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<String>, StoreError> {
            Ok(Some("en".to_string()))
        }

        fn save(&self, _code: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[rstest]
    #[case(Some("en"), Language::En)]
    #[case(Some("es"), Language::Es)]
    #[case(Some("fr"), Language::Es)]
    #[case(Some(""), Language::Es)]
    #[case(None, Language::Es)]
    fn restores_persisted_language_or_default(
        #[case] persisted: Option<&str>,
        #[case] expected: Language,
    ) {
        let store = persisted.map_or_else(MemoryLanguageStore::new, MemoryLanguageStore::with_value);
        let catalog = Arc::new(LocaleCatalog::builtin().unwrap());

        let context = LanguageContext::new(catalog, Arc::new(store), Language::Es);

        assert_that!(context.current_language(), eq(expected));
    }

    #[googletest::test]
    fn switching_language_changes_subsequent_translations() {
        let (context, _store) = language_context(Language::Es);

        expect_that!(context.translate("nav.contact"), eq("Contáctanos"));
        context.set_language(Language::En);
        expect_that!(context.translate("nav.contact"), eq("Contact Us"));
        expect_that!(context.translate("nav.missing"), eq("nav.missing"));
    }

    #[googletest::test]
    fn set_language_persists_choice() {
        let (context, store) = language_context(Language::Es);

        context.set_language(Language::En);

        let persisted = store.load().unwrap();
        expect_that!(persisted.as_deref(), some(eq("en")));
    }

    #[googletest::test]
    fn clones_share_the_active_language() {
        let (context, _store) = language_context(Language::Es);
        let other = context.clone();

        let toggled = other.toggle_language();

        expect_that!(toggled, eq(Language::En));
        expect_that!(context.current_language(), eq(Language::En));
    }

    #[googletest::test]
    fn translate_in_ignores_active_language() {
        let (context, _store) = language_context(Language::Es);

        expect_that!(context.translate_in(Language::En, "footer.send"), eq("Send"));
        expect_that!(context.translate("footer.send"), eq("Enviar"));
    }

    #[googletest::test]
    fn persistence_failure_still_switches() {
        let catalog = Arc::new(LocaleCatalog::builtin().unwrap());
        let context = LanguageContext::new(catalog, Arc::new(ReadOnlyStore), Language::Es);
        expect_that!(context.current_language(), eq(Language::En));

        context.set_language(Language::Es);

        expect_that!(context.current_language(), eq(Language::Es));
    }

    #[tokio::test]
    async fn subscribers_observe_switches() {
        let (context, _store) = language_context(Language::Es);
        let mut receiver = context.subscribe();

        context.set_language(Language::En);

        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), Language::En);
    }
}
