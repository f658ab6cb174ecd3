//! Footer with the quick-contact form, contact links and language picker

use super::Section;
use crate::forms::{
    FormState,
    NEWSLETTER_FORM,
    SubmitOutcome,
    Submitter,
};
use crate::i18n::{
    Language,
    LanguageContext,
};

pub const WHATSAPP_LINKS: [&str; 2] = ["https://wa.me/584241665906", "https://wa.me/584242584353"];

pub const LOCATION_LINK: &str = "https://maps.app.goo.gl/c9y35v4JSKUY3s5N8";

pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://www.linkedin.com/company/taurel-operador-logistico/"),
    ("Facebook", "https://www.facebook.com/share/1DVDQCVnjk/?mibextid=wwXIfr"),
    ("Instagram", "https://www.instagram.com/taurel.ve?igsh=dXhlYW5zZGJ5MzZ6"),
];

/// Recent-post tiles all point at the same profile until a feed is wired.
pub const RECENT_POSTS_LINK: &str = "https://www.instagram.com/taurel_oficial/";

#[derive(Debug)]
pub struct Footer {
    context: LanguageContext,
    form: FormState,
}

impl Footer {
    #[must_use]
    pub fn new(context: LanguageContext) -> Self {
        let form = FormState::new(&NEWSLETTER_FORM, context.clone());
        Self { context, form }
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

    /// Picker at the bottom of the page.
    pub fn set_language(&self, language: Language) {
        self.context.set_language(language);
    }

    fn field_lines(&self) -> Vec<String> {
        NEWSLETTER_FORM
            .fields
            .iter()
            .map(|field| {
                let label = self.context.translate(field.label);
                let value = self.form.value(field.name).unwrap_or_default();
                match self.form.error(field.name) {
                    Some(error) => format!("{label}: {value} ({error})"),
                    None => format!("{label}: {value}"),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn section(&self) -> Section {
        let t = |key: &str| self.context.translate(key);
        let button = if self.form.is_submitting() { t("footer.sending") } else { t("footer.send") };
        let picker = match self.context.current_language() {
            Language::Es => "[ESP] | ENG",
            Language::En => "ESP | [ENG]",
        };

        Section::new(t("footer.tagline"))
            .lines(WHATSAPP_LINKS.iter().map(|link| format!("{}: {link}", t("footer.contactWhatsApp"))))
            .line(format!("{}: {LOCATION_LINK}", t("footer.viewLocation")))
            .lines(SOCIAL_LINKS.iter().map(|(name, link)| format!("{name}: {link}")))
            .line(format!("{}: {RECENT_POSTS_LINK}", t("footer.recentPosts")))
            .line(t("footer.quickContact"))
            .lines(self.field_lines())
            .line(format!("[{button}]"))
            .line(picker)
            .line(t("footer.copyright"))
    }
}
