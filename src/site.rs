//! Site wiring
//!
//! [`Site`] turns validated settings into the shared language context and
//! builds page instances on top of it.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{
    ConfigManager,
    SiteSettings,
};
use crate::error::SiteError;
use crate::forms::SimulatedSubmitter;
use crate::i18n::{
    FileLanguageStore,
    Language,
    LanguageContext,
    LanguageStore,
    LocaleCatalog,
    MemoryLanguageStore,
};
use crate::locations::{
    FinderOptions,
    LocationFinder,
    RecordingMap,
    sample_locations,
};
use crate::pages::{
    AboutPage,
    ContactPage,
    Footer,
    HomePage,
    Navigation,
    PageView,
    Route,
    ServicesPage,
};

#[derive(Debug, Clone)]
pub struct Site {
    settings: SiteSettings,
    context: LanguageContext,
}

impl Site {
    /// Load the settings of `root` and build the site from them.
    ///
    /// # Errors
    /// - The settings cannot be loaded or are invalid
    /// - The bundled locale catalog is inconsistent
    pub fn load(root: Option<PathBuf>) -> Result<Self, SiteError> {
        let mut manager = ConfigManager::new();
        manager.load_settings(root)?;
        Self::from_manager(&manager)
    }

    /// Build the site from already loaded settings. A relative language file
    /// is resolved against the manager's site root.
    ///
    /// # Errors
    /// Returns an error if the bundled locale catalog is inconsistent.
    pub fn from_manager(manager: &ConfigManager) -> Result<Self, SiteError> {
        let settings = manager.get_settings().clone();
        let store: Arc<dyn LanguageStore> = match &settings.language_file {
            Some(path) => Arc::new(FileLanguageStore::new(manager.resolve_path(path))),
            None => Arc::new(MemoryLanguageStore::new()),
        };
        Ok(Self::with_store(settings, Arc::new(LocaleCatalog::builtin()?), store))
    }

    #[must_use]
    pub fn with_store(
        settings: SiteSettings,
        catalog: Arc<LocaleCatalog>,
        store: Arc<dyn LanguageStore>,
    ) -> Self {
        let context = LanguageContext::new(catalog, store, settings.default_language);
        tracing::debug!(language = %context.current_language(), "Site ready");
        Self { settings, context }
    }

    #[must_use]
    pub const fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    #[must_use]
    pub const fn context(&self) -> &LanguageContext {
        &self.context
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.context.current_language()
    }

    pub fn set_language(&self, language: Language) {
        self.context.set_language(language);
    }

    /// Submitter with the configured round-trip delay.
    #[must_use]
    pub const fn submitter(&self) -> SimulatedSubmitter {
        SimulatedSubmitter::new(self.settings.forms.submit_delay())
    }

    #[must_use]
    pub fn navigation(&self, current: Route) -> Navigation {
        Navigation::new(self.context.clone(), current)
    }

    #[must_use]
    pub fn footer(&self) -> Footer {
        Footer::new(self.context.clone())
    }

    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn home(&self) -> HomePage {
        HomePage::new(self.context.clone(), &self.settings)
    }

    #[must_use]
    pub fn services(&self) -> ServicesPage {
        ServicesPage::new(self.context.clone())
    }

    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn about(&self) -> AboutPage {
        AboutPage::new(self.context.clone(), &self.settings)
    }

    #[must_use]
    pub fn contact(&self) -> ContactPage<RecordingMap> {
        ContactPage::new(self.context.clone(), &self.settings, RecordingMap::new())
    }

    #[must_use]
    pub fn location_finder(&self) -> LocationFinder<RecordingMap> {
        LocationFinder::new(
            self.context.clone(),
            sample_locations(),
            RecordingMap::new(),
            FinderOptions::from_config(&self.settings.maps),
        )
    }

    /// Render the page at `path` with every animation settled, between the
    /// navigation bar and the footer.
    ///
    /// Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if no page is served at `path`.
    pub fn render(&self, path: &str) -> Result<PageView, SiteError> {
        let route = Route::from_path(path).ok_or_else(|| SiteError::UnknownRoute(path.to_string()))?;
        tracing::debug!(%route, "Rendering page");

        let mut view = match route {
            Route::Home => {
                let mut page = self.home();
                page.settle();
                page.view()
            }
            Route::Services => {
                let mut page = self.services();
                page.settle();
                page.view()
            }
            Route::About => self.about().view(),
            Route::Contact => self.contact().view(),
        };

        view.sections.insert(0, self.navigation(route).section());
        view.sections.push(self.footer().section());
        Ok(view)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    #[tokio::test]
    async fn render_wraps_page_in_navigation_and_footer() {
        let site = Site::load(None).unwrap();

        let view = site.render("/servicios/").unwrap();

        assert_eq!(view.title, "Nuestras Soluciones Logísticas");
        assert_eq!(view.sections.first().map(|s| s.heading.as_str()), Some("Taurel"));
        assert_eq!(
            view.sections.last().map(|s| s.heading.as_str()),
            Some("Impulsamos tu negocio de principio a fin.")
        );
    }

    #[tokio::test]
    async fn render_unknown_path_fails() {
        let site = Site::load(None).unwrap();

        let result = site.render("/blog");

        assert!(matches!(result, Err(SiteError::UnknownRoute(path)) if path == "/blog"));
    }

    #[googletest::test]
    fn default_language_comes_from_settings() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"defaultLanguage": "en"}"#).unwrap();

        let site = Site::load(Some(temp_dir.path().to_path_buf())).unwrap();

        expect_that!(site.language(), eq(Language::En));
    }

    #[googletest::test]
    fn language_choice_persists_in_language_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"languageFile": "lang.json"}"#)
            .unwrap();
        let root = Some(temp_dir.path().to_path_buf());

        Site::load(root.clone()).unwrap().set_language(Language::En);
        let reopened = Site::load(root).unwrap();

        expect_that!(reopened.language(), eq(Language::En));
        expect_that!(temp_dir.path().join("lang.json").exists(), eq(true));
    }

    #[googletest::test]
    fn submitter_uses_configured_delay() {
        let mut settings = SiteSettings::default();
        settings.forms.submit_delay_ms = 250;
        let site = Site::with_store(
            settings,
            Arc::new(LocaleCatalog::builtin().unwrap()),
            Arc::new(MemoryLanguageStore::new()),
        );

        expect_that!(site.submitter().delay(), eq(std::time::Duration::from_millis(250)));
    }
}
