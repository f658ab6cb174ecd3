//! taurel-site
//!
//! Stateful core of the Taurel logistics website: locale catalog and language
//! context, form validation, sliders, count-up counters, the office finder
//! and the route-level page assemblies built from them.

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod locations;
pub mod pages;
pub mod site;
pub mod slider;

#[cfg(test)]
mod test_utils;

pub use error::SiteError;
pub use i18n::{
    Language,
    LanguageContext,
};
pub use site::Site;
