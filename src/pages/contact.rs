//! Contact page

use super::{
    PageView,
    Section,
};
use crate::config::SiteSettings;
use crate::forms::{
    CONTACT_FORM,
    FormState,
    SubmitOutcome,
    Submitter,
};
use crate::i18n::LanguageContext;
use crate::locations::{
    FinderOptions,
    LocationFinder,
    MapError,
    MapProvider,
    MapStatus,
    ScriptLoader,
    sample_locations,
};

/// An entry of the office directory beside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Office {
    pub city: &'static str,
    pub phone: &'static str,
}

const MAIN_LINE: &str = "+58212-5584563";

const fn office(city: &'static str) -> Office {
    Office { city, phone: MAIN_LINE }
}

/// Every office answers on the main line.
pub static CONTACT_OFFICES: [Office; 10] = [
    office("Caracas, Dtto. Capital"),
    office("La Guaira, Edo. Vargas"),
    office("Catia La Mar, Vargas"),
    office("Valencia, Edo. Carabobo"),
    office("El Guamache, Nueva Esparta"),
    office("Maracaibo, Edo. Zulia"),
    office("Barquisimeto, Edo. Lara"),
    office("Pto. Cabello, Edo. Carabobo"),
    office("San Antonio del táchira, Edo. Táchira"),
    office("Santa Elena de Uairén, Bolívar"),
];

#[derive(Debug)]
pub struct ContactPage<P> {
    context: LanguageContext,
    form: FormState,
    finder: LocationFinder<P>,
}

impl<P: MapProvider> ContactPage<P> {
    #[must_use]
    pub fn new(context: LanguageContext, settings: &SiteSettings, provider: P) -> Self {
        let form = FormState::new(&CONTACT_FORM, context.clone());
        let finder = LocationFinder::new(
            context.clone(),
            sample_locations(),
            provider,
            FinderOptions::from_config(&settings.maps),
        );
        Self { context, form, finder }
    }

    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    pub const fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub async fn submit<S: Submitter>(&mut self, submitter: &S) -> SubmitOutcome {
        self.form.submit(submitter).await
    }

    #[must_use]
    pub const fn finder(&self) -> &LocationFinder<P> {
        &self.finder
    }

    pub const fn finder_mut(&mut self) -> &mut LocationFinder<P> {
        &mut self.finder
    }

    /// Mount the embedded map. A failure leaves the rest of the page usable.
    ///
    /// # Errors
    /// Same as [`LocationFinder::mount`].
    pub async fn mount_map<L: ScriptLoader>(&mut self, loader: &L) -> Result<(), MapError> {
        self.finder.mount(loader).await
    }

    fn form_section(&self) -> Section {
        let t = |key: &str| self.context.translate(key);
        let fields = CONTACT_FORM.fields.iter().map(|field| {
            let label = t(field.label);
            let value = self.form.value(field.name).unwrap_or_default();
            match self.form.error(field.name) {
                Some(error) => format!("{label}: {value} ({error})"),
                None => format!("{label}: {value}"),
            }
        });
        let button = if self.form.is_submitting() {
            t("contact.sendingButton")
        } else {
            t("contact.sendButton")
        };

        Section::new(t("contact.formTitle"))
            .line(t("contact.formDescription"))
            .lines(fields)
            .line(format!("[{button}]"))
    }

    fn finder_section(&self) -> Section {
        let t = |key: &str| self.context.translate(key);
        let mut section = Section::new(t("contact.mapTitle"))
            .line(t("contact.mapSubtitle"))
            .line(format!("{}: {}", t("locations.searchPlaceholder"), self.finder.term()));

        let entries = self.finder.list();
        if entries.is_empty() {
            section = section.line(t("locations.empty"));
        }
        section = section.lines(entries.iter().map(|entry| {
            let mark = if entry.selected { '>' } else { '*' };
            format!("{mark} {}, {}", entry.location.name, entry.location.address)
        }));

        section = section.line(self.finder.details_title());
        if let Some(location) = self.finder.details() {
            section = section.line(location.address.clone());
            if let Some(phone) = &location.phone {
                section = section.line(format!("{}: {phone}", t("locations.phone")));
            }
        }

        if matches!(self.finder.status(), MapStatus::Failed { .. }) {
            section = section
                .line(format!("{} [{}]", t("locations.mapUnavailable"), t("locations.retry")));
        }
        section
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        let t = |key: &str| self.context.translate(key);

        PageView::new(t("contact.title"))
            .section(self.form_section())
            .section(
                Section::new(t("nav.contact"))
                    .lines(CONTACT_OFFICES.iter().map(|o| format!("{}: {}", o.city, o.phone))),
            )
            .section(self.finder_section())
            .section(
                Section::new(t("contact.officeHours").trim_end())
                    .line(t("contact.officeHoursDetails")),
            )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use googletest::prelude::*;

    use super::*;
    use crate::forms::SimulatedSubmitter;
    use crate::i18n::Language;
    use crate::locations::{
        OfflineScriptLoader,
        RecordingMap,
    };
    use crate::test_utils::language_context;

    fn contact(language: Language, api_key: Option<&str>) -> ContactPage<RecordingMap> {
        let (context, _store) = language_context(language);
        let mut settings = SiteSettings::default();
        settings.maps.api_key = api_key.map(str::to_string);
        settings.maps.api_key_env = "TAUREL_SITE_TEST_UNSET_VARIABLE".to_string();
        ContactPage::new(context, &settings, RecordingMap::new())
    }

    #[googletest::test]
    fn lists_ten_offices_on_the_main_line() {
        let page = contact(Language::Es, None);
        let view = page.view();
        let offices = view.sections.get(1).unwrap();

        expect_that!(offices.lines.len(), eq(10));
        expect_that!(offices.lines.first().unwrap(), eq("Caracas, Dtto. Capital: +58212-5584563"));
    }

    #[tokio::test]
    async fn missing_key_shows_unavailable_map_and_keeps_list() {
        let mut page = contact(Language::Es, None);

        let result = page.mount_map(&OfflineScriptLoader::new()).await;

        assert_eq!(result, Err(MapError::MissingApiKey));
        let view = page.view();
        let finder = view.find("Taurel va a donde tú estés").unwrap();
        assert!(finder.lines.contains(&"No se pudo cargar el mapa. [Reintentar]".to_string()));
        assert_eq!(page.finder().visible().len(), page.finder().locations().len());
    }

    #[tokio::test]
    async fn search_and_select_show_in_view() {
        let mut page = contact(Language::En, Some("key"));
        page.mount_map(&OfflineScriptLoader::new()).await.unwrap();

        page.finder_mut().set_search_term("caracas");
        let id = page.finder().visible().first().unwrap().id.clone();
        assert!(page.finder_mut().select(&id));

        let view = page.view();
        let finder = view.sections.get(2).unwrap();
        assert!(finder.lines.iter().any(|line| line.starts_with("> ")));
        assert_eq!(finder.lines.get(1).map(String::as_str), Some("Find your city: caracas"));
    }

    #[tokio::test]
    async fn empty_search_result_is_reported() {
        let mut page = contact(Language::Es, None);

        page.finder_mut().set_search_term("Madrid");

        let view = page.view();
        let finder = view.sections.get(2).unwrap();
        assert!(finder.lines.contains(&"No se encontraron ubicaciones".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn form_errors_render_next_to_fields() {
        let mut page = contact(Language::Es, None);

        let outcome = page.submit(&SimulatedSubmitter::new(Duration::from_secs(1))).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        let view = page.view();
        let form = view.sections.first().unwrap();
        assert!(form.lines.contains(&"Empresa:  (El nombre de la empresa es requerido)".to_string()));
    }
}
