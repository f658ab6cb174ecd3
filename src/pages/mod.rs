//! Route-level assemblies of the site's stateful units.

/// About page
mod about;
/// Contact page
mod contact;
/// Footer with the quick-contact form
pub mod footer;
/// Home page
mod home;
/// Modal open state and the certificate viewer
pub mod modal;
/// Top navigation bar
mod navigation;
/// Services page
pub mod services;
/// Plain-text page model
mod view;

use std::fmt;

pub use about::{
    AboutPage,
    VALUES,
};
pub use contact::{
    CONTACT_OFFICES,
    ContactPage,
    Office,
};
pub use footer::Footer;
pub use home::{
    HomePage,
    Stat,
    TIMELINE,
};
pub use modal::{
    CertificationModal,
    Modal,
};
pub use navigation::{
    NavItem,
    NavTarget,
    Navigation,
    SCROLL_THRESHOLD,
};
pub use services::ServicesPage;
pub use view::{
    PageView,
    Section,
};

/// The four routes of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    About,
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Services, Self::About, Self::Contact];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Services => "/servicios",
            Self::About => "/sobre-nosotros",
            Self::Contact => "/contactanos",
        }
    }

    /// Route served at `path`. Trailing slashes are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Translation key of the navigation label.
    #[must_use]
    pub const fn nav_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Services => "nav.services",
            Self::About => "nav.aboutUs",
            Self::Contact => "nav.contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
