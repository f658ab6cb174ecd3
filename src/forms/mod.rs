//! Form state, field validation and simulated submission.

/// Field schemas of the site's forms
pub mod schemas;
/// Per-form values, errors and submission
mod state;
/// Submission back ends
mod submit;
/// Field validation predicates
pub mod validation;

use thiserror::Error;

pub use schemas::{
    CONTACT_FORM,
    FieldSpec,
    FormSchema,
    JOB_APPLICATION_FORM,
    NEWSLETTER_FORM,
    RequiredMessage,
};
pub use state::{
    FormState,
    SubmitOutcome,
};
pub use submit::{
    FormSubmission,
    SimulatedSubmitter,
    SubmitError,
    Submitter,
};
pub use validation::{
    FieldError,
    FieldRules,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Form '{form}' has no field named '{field}'")]
    UnknownField { form: &'static str, field: String },
}
