//! Top navigation bar
//!
//! Holds the scroll-shadow flag, the mobile menu, and the job application
//! dialog that the "jobs" link opens.

use super::{
    Modal,
    Route,
    Section,
};
use crate::forms::{
    FormState,
    JOB_APPLICATION_FORM,
    SubmitOutcome,
    Submitter,
};
use crate::i18n::{
    Language,
    LanguageContext,
};

/// Scroll offset past which the bar switches to its compact look.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// What a navigation entry does when followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Route(Route),
    /// External tracking link, not wired to anything yet
    TrackShipment,
    /// Opens the job application dialog
    Jobs,
}

impl NavTarget {
    /// Every entry, in bar order.
    pub const ALL: [Self; 6] = [
        Self::Route(Route::Home),
        Self::Route(Route::Services),
        Self::Route(Route::About),
        Self::Route(Route::Contact),
        Self::TrackShipment,
        Self::Jobs,
    ];

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Route(route) => route.nav_key(),
            Self::TrackShipment => "nav.trackShipment",
            Self::Jobs => "nav.jobs",
        }
    }
}

/// A rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
    pub active: bool,
}

#[derive(Debug)]
pub struct Navigation {
    context: LanguageContext,
    current: Route,
    scrolled: bool,
    menu_open: bool,
    jobs: Modal,
    job_form: FormState,
}

impl Navigation {
    #[must_use]
    pub fn new(context: LanguageContext, current: Route) -> Self {
        let job_form = FormState::new(&JOB_APPLICATION_FORM, context.clone());
        Self {
            context,
            current,
            scrolled: false,
            menu_open: false,
            jobs: Modal::new(),
            job_form,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Route {
        self.current
    }

    /// Report the page's vertical scroll offset. Returns whether the
    /// scrolled flag changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub const fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Follow an entry. Every entry closes the mobile menu; only route
    /// entries change the current route, which is returned.
    pub fn follow(&mut self, target: NavTarget) -> Option<Route> {
        self.menu_open = false;
        match target {
            NavTarget::Route(route) => {
                tracing::debug!(%route, "Navigating");
                self.current = route;
                Some(route)
            }
            NavTarget::TrackShipment => None,
            NavTarget::Jobs => {
                self.jobs.open();
                None
            }
        }
    }

    pub const fn close_jobs(&mut self) {
        self.jobs.close();
    }

    #[must_use]
    pub const fn jobs_open(&self) -> bool {
        self.jobs.is_open()
    }

    #[must_use]
    pub const fn job_form(&self) -> &FormState {
        &self.job_form
    }

    pub const fn job_form_mut(&mut self) -> &mut FormState {
        &mut self.job_form
    }

    /// Submit the job application. The dialog stays open to show the
    /// outcome.
    pub async fn submit_job_application<S: Submitter>(&mut self, submitter: &S) -> SubmitOutcome {
        self.job_form.submit(submitter).await
    }

    /// Switch language from the bar's picker; closes the mobile menu.
    pub fn set_language(&mut self, language: Language) {
        self.menu_open = false;
        self.context.set_language(language);
    }

    #[must_use]
    pub fn items(&self) -> Vec<NavItem> {
        NavTarget::ALL
            .into_iter()
            .map(|target| NavItem {
                label: self.context.translate(target.label_key()),
                target,
                active: target == NavTarget::Route(self.current),
            })
            .collect()
    }

    #[must_use]
    pub fn section(&self) -> Section {
        let language = self.context.current_language();
        let picker = Language::ALL
            .iter()
            .map(|&l| {
                let code = l.code().to_uppercase();
                if l == language { format!("[{code}]") } else { code }
            })
            .collect::<Vec<_>>()
            .join(" | ");

        Section::new("Taurel")
            .lines(self.items().into_iter().map(|item| {
                if item.active { format!("> {}", item.label) } else { format!("  {}", item.label) }
            }))
            .line(picker)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::forms::SimulatedSubmitter;
    use crate::test_utils::language_context;

    fn navigation(language: Language) -> Navigation {
        let (context, _store) = language_context(language);
        Navigation::new(context, Route::Home)
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(10.0, false)]
    #[case(10.5, true)]
    #[case(400.0, true)]
    fn scrolled_past_threshold(#[case] offset: f64, #[case] expected: bool) {
        let mut nav = navigation(Language::Es);

        nav.on_scroll(offset);

        assert_that!(nav.is_scrolled(), eq(expected));
    }

    #[googletest::test]
    fn on_scroll_reports_changes_only() {
        let mut nav = navigation(Language::Es);

        expect_that!(nav.on_scroll(50.0), eq(true));
        expect_that!(nav.on_scroll(80.0), eq(false));
        expect_that!(nav.on_scroll(0.0), eq(true));
    }

    #[googletest::test]
    fn following_any_entry_closes_menu() {
        let mut nav = navigation(Language::Es);

        nav.toggle_menu();
        expect_that!(nav.follow(NavTarget::Route(Route::Contact)), some(eq(Route::Contact)));
        expect_that!(nav.is_menu_open(), eq(false));
        expect_that!(nav.current(), eq(Route::Contact));

        nav.toggle_menu();
        expect_that!(nav.follow(NavTarget::TrackShipment), none());
        expect_that!(nav.is_menu_open(), eq(false));
    }

    #[googletest::test]
    fn jobs_entry_opens_dialog() {
        let mut nav = navigation(Language::Es);
        nav.toggle_menu();

        nav.follow(NavTarget::Jobs);

        expect_that!(nav.jobs_open(), eq(true));
        expect_that!(nav.is_menu_open(), eq(false));
        expect_that!(nav.current(), eq(Route::Home));

        nav.close_jobs();
        expect_that!(nav.jobs_open(), eq(false));
    }

    #[googletest::test]
    fn labels_follow_language() {
        let mut nav = navigation(Language::Es);
        nav.toggle_menu();

        nav.set_language(Language::En);

        let labels: Vec<String> = nav.items().into_iter().map(|item| item.label).collect();
        expect_that!(
            labels,
            elements_are![
                eq("Home"),
                anything(),
                anything(),
                anything(),
                anything(),
                anything()
            ]
        );
        expect_that!(nav.is_menu_open(), eq(false));
    }

    #[googletest::test]
    fn section_marks_active_route_and_language() {
        let nav = navigation(Language::Es);

        let section = nav.section();

        expect_that!(section.lines.first().map(String::as_str), some(eq("> Inicio")));
        expect_that!(section.lines.last().map(String::as_str), some(eq("[ES] | EN")));
    }

    #[tokio::test(start_paused = true)]
    async fn job_application_is_validated_before_sending() {
        let mut nav = navigation(Language::Es);
        nav.follow(NavTarget::Jobs);

        let outcome =
            nav.submit_job_application(&SimulatedSubmitter::new(Duration::from_secs(1))).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(nav.job_form().error("pais").as_deref(), Some("País es requerido"));
        assert!(nav.jobs_open());
    }
}
