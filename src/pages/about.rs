//! About page

use super::view::{
    marquee_section,
    slide_section,
};
use super::{
    CertificationModal,
    PageView,
    Section,
};
use crate::config::SiteSettings;
use crate::i18n::LanguageContext;
use crate::slider::{
    ABOUT_SLIDES,
    AutoSlider,
    Marquee,
    brands_marquee,
    chambers_marquee,
};

/// Title and text keys of the six company values.
pub const VALUES: [(&str, &str); 6] = [
    ("aboutUs.values.value1.title", "aboutUs.values.value1.text"),
    ("aboutUs.values.value2.title", "aboutUs.values.value2.text"),
    ("aboutUs.values.value3.title", "aboutUs.values.value3.text"),
    ("aboutUs.values.value4.title", "aboutUs.values.value4.text"),
    ("aboutUs.values.value5.title", "aboutUs.values.value5.text"),
    ("aboutUs.values.value6.title", "aboutUs.values.value6.text"),
];

#[derive(Debug)]
pub struct AboutPage {
    context: LanguageContext,
    slider: AutoSlider,
    brands: Marquee,
    chambers: Marquee,
    certification: CertificationModal,
}

impl AboutPage {
    /// Must be called inside a tokio runtime; the mission/vision slider
    /// starts rotating right away.
    #[must_use]
    pub fn new(context: LanguageContext, settings: &SiteSettings) -> Self {
        Self {
            context,
            slider: AutoSlider::start(ABOUT_SLIDES.len(), settings.slider.interval()),
            brands: brands_marquee(),
            chambers: chambers_marquee(),
            certification: CertificationModal::new(),
        }
    }

    #[must_use]
    pub const fn slider(&self) -> &AutoSlider {
        &self.slider
    }

    #[must_use]
    pub const fn brands(&self) -> &Marquee {
        &self.brands
    }

    pub const fn brands_mut(&mut self) -> &mut Marquee {
        &mut self.brands
    }

    #[must_use]
    pub const fn chambers(&self) -> &Marquee {
        &self.chambers
    }

    pub const fn chambers_mut(&mut self) -> &mut Marquee {
        &mut self.chambers
    }

    #[must_use]
    pub const fn certification(&self) -> &CertificationModal {
        &self.certification
    }

    pub const fn certification_mut(&mut self) -> &mut CertificationModal {
        &mut self.certification
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        let t = |key: &str| self.context.translate(key);

        let mut chambers = marquee_section(t("aboutUs.chambers.title"), &self.chambers);
        chambers.lines.insert(0, t("aboutUs.chambers.subtitle"));

        PageView::new(t("nav.aboutUs"))
            .section(slide_section(&self.context, &self.slider, &ABOUT_SLIDES))
            .section(marquee_section(t("aboutUs.brands.title"), &self.brands))
            .section(
                Section::new(t("aboutUs.values.header"))
                    .line(t("aboutUs.values.subtitle"))
                    .lines(VALUES.iter().map(|(title, text)| format!("{}: {}", t(title), t(text)))),
            )
            .section(chambers)
            .section(Section::new(t("home.certification.title")))
    }
}
