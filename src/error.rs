//! Top-level error of the site

use thiserror::Error;

use crate::config::ConfigError;
use crate::forms::{
    FormError,
    SubmitError,
};
use crate::i18n::{
    I18nError,
    StoreError,
};
use crate::locations::MapError;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("No page at '{0}'")]
    UnknownRoute(String),

    #[error("No office with id '{0}'")]
    UnknownLocation(String),
}
