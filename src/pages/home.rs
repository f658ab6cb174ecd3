//! Home page

use std::time::Duration;

use super::view::{
    marquee_section,
    slide_section,
};
use super::{
    CertificationModal,
    PageView,
    Route,
    Section,
};
use crate::animation::{
    CountUp,
    CountUpTask,
};
use crate::config::{
    CountUpConfig,
    SiteSettings,
};
use crate::i18n::LanguageContext;
use crate::slider::{
    AutoSlider,
    Marquee,
    SERVICES_SLIDES,
    chambers_marquee,
};

/// Company history, oldest first.
pub const TIMELINE: [(u16, &str); 6] = [
    (1911, "home.timeline.year1911"),
    (1945, "home.timeline.year1945"),
    (1994, "home.timeline.year1994"),
    (1999, "home.timeline.year1999"),
    (2002, "home.timeline.year2002"),
    (2024, "home.timeline.year2024"),
];

/// One animated figure of the stats band.
#[derive(Debug)]
pub struct Stat {
    pub label: &'static str,
    counter: CountUp,
    task: Option<CountUpTask>,
}

impl Stat {
    fn new(end: u64, duration_ms: u64, label: &'static str) -> Self {
        Self {
            label,
            counter: CountUp::new(end, Duration::from_millis(duration_ms)).with_prefix("+"),
            task: None,
        }
    }

    #[must_use]
    pub const fn counter(&self) -> &CountUp {
        &self.counter
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.task.is_some()
    }

    /// Latest value, from the running animation if there is one.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.task.as_ref().map_or_else(|| self.counter.value(), CountUpTask::value)
    }

    #[must_use]
    pub fn display(&self) -> String {
        self.counter.format(self.value())
    }
}

#[derive(Debug)]
pub struct HomePage {
    context: LanguageContext,
    slider: AutoSlider,
    stats: Vec<Stat>,
    timing: CountUpConfig,
    partners: Marquee,
    certification: CertificationModal,
}

impl HomePage {
    /// Must be called inside a tokio runtime; the services slider starts
    /// rotating right away.
    #[must_use]
    pub fn new(context: LanguageContext, settings: &SiteSettings) -> Self {
        Self {
            context,
            slider: AutoSlider::start(SERVICES_SLIDES.len(), settings.slider.interval()),
            stats: vec![
                Stat::new(9, 2500, "home.stats.offices"),
                Stat::new(180, 2800, "home.stats.partners"),
                Stat::new(200, 3000, "home.stats.employees"),
                Stat::new(2000, 3200, "home.stats.clients"),
            ],
            timing: settings.count_up,
            partners: chambers_marquee(),
            certification: CertificationModal::new(),
        }
    }

    /// Where the hero call to action leads.
    #[must_use]
    pub const fn cta_target() -> Route {
        Route::Services
    }

    #[must_use]
    pub const fn slider(&self) -> &AutoSlider {
        &self.slider
    }

    #[must_use]
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Report whether the stats band is in view. Counters revealed by this
    /// sample start animating; returns how many started.
    pub fn observe_stats(&mut self, in_view: bool) -> usize {
        let start_delay = Duration::from_millis(self.timing.start_delay_ms);
        let frame_interval = Duration::from_millis(self.timing.frame_interval_ms);
        let mut started = 0;
        for stat in &mut self.stats {
            if stat.task.is_none() && stat.counter.observe(in_view) {
                stat.task =
                    Some(CountUpTask::spawn(stat.counter.clone(), start_delay, frame_interval));
                started += 1;
            }
        }
        if started > 0 {
            tracing::debug!(started, "Stats revealed");
        }
        started
    }

    /// Stop any running animation and show every final value.
    pub fn settle(&mut self) {
        for stat in &mut self.stats {
            stat.task = None;
            stat.counter.complete();
        }
    }

    #[must_use]
    pub const fn certification(&self) -> &CertificationModal {
        &self.certification
    }

    pub const fn certification_mut(&mut self) -> &mut CertificationModal {
        &mut self.certification
    }

    #[must_use]
    pub const fn partners(&self) -> &Marquee {
        &self.partners
    }

    pub const fn partners_mut(&mut self) -> &mut Marquee {
        &mut self.partners
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        let t = |key: &str| self.context.translate(key);

        PageView::new(t("nav.home"))
            .section(
                Section::new(t("home.hero.title"))
                    .line(format!("[{}] -> {}", t("home.hero.cta"), Self::cta_target())),
            )
            .section(
                Section::new(t("home.stats.title")).line(t("home.stats.subtitle")).lines(
                    self.stats.iter().map(|stat| format!("{} {}", stat.display(), t(stat.label))),
                ),
            )
            .section(slide_section(&self.context, &self.slider, &SERVICES_SLIDES))
            .section(
                Section::new(t("home.timeline.title"))
                    .lines(TIMELINE.iter().map(|(year, key)| format!("{year}: {}", t(key)))),
            )
            .section(Section::new(t("home.certification.title")))
            .section(Section::new(t("locationsBanner.tagline")))
            .section(marquee_section(t("aboutUs.chambers.title"), &self.partners))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use tokio::time::sleep;

    use super::*;
    use crate::i18n::Language;
    use crate::test_utils::language_context;

    fn home(language: Language) -> HomePage {
        let (context, _store) = language_context(language);
        HomePage::new(context, &SiteSettings::default())
    }

    fn displays(page: &HomePage) -> Vec<String> {
        page.stats().iter().map(Stat::display).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn stats_start_hidden_at_zero() {
        let page = home(Language::Es);

        assert_eq!(displays(&page), ["+0", "+0", "+0", "+0"]);
        assert!(page.stats().iter().all(|stat| !stat.is_animating()));
    }

    #[tokio::test(start_paused = true)]
    async fn stats_animate_once_revealed() {
        let mut page = home(Language::Es);

        assert_eq!(page.observe_stats(false), 0);
        assert_eq!(page.observe_stats(true), 4);
        assert_eq!(page.observe_stats(true), 0);

        sleep(Duration::from_secs(4)).await;

        assert_eq!(displays(&page), ["+9", "+180", "+200", "+2,000"]);
    }

    #[tokio::test(start_paused = true)]
    async fn settle_shows_final_values_immediately() {
        let mut page = home(Language::En);
        page.observe_stats(true);

        page.settle();

        assert_eq!(displays(&page), ["+9", "+180", "+200", "+2,000"]);
        assert!(page.stats().iter().all(|stat| !stat.is_animating()));
    }

    #[googletest::test]
    #[tokio::test(start_paused = true)]
    async fn view_lists_timeline_and_stats() {
        let mut page = home(Language::Es);
        page.settle();

        let view = page.view();

        expect_that!(view.title, eq("Inicio"));
        let timeline = view.find("Nuestra Historia, Tu Confianza...").unwrap();
        expect_that!(timeline.lines.len(), eq(6));
        expect_that!(timeline.lines.first().unwrap(), starts_with("1911: "));
        let stats = view.find("Taurel: un legado de más de 100 años").unwrap();
        expect_that!(stats.lines, contains(eq("+2,000 Clientes que confían en nuestras soluciones innovadoras")));
    }

    #[googletest::test]
    #[tokio::test(start_paused = true)]
    async fn services_slide_in_view_follows_timer() {
        let page = home(Language::En);
        let first = page.view().sections.get(2).unwrap().heading.clone();

        sleep(Duration::from_millis(7001)).await;

        let second = page.view().sections.get(2).unwrap().heading.clone();
        expect_that!(first, eq("Technical Advisory"));
        expect_that!(second, not(eq(&first)));
    }

    #[googletest::test]
    #[tokio::test(start_paused = true)]
    async fn certification_modal_opens_from_page() {
        let mut page = home(Language::Es);

        page.certification_mut().open();

        expect_that!(page.certification().is_open(), eq(true));
    }
}
