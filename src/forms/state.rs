//! Per-form values, errors and submission

use std::collections::BTreeMap;

use super::{
    FieldError,
    FieldSpec,
    FormError,
    FormSchema,
    FormSubmission,
    RequiredMessage,
    Submitter,
};
use crate::i18n::LanguageContext;

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Some field failed validation; nothing was sent.
    Invalid,
    /// Delivered; the form was cleared.
    Sent { message: String },
    /// Delivery failed; values were kept for another attempt.
    Failed { message: String },
}

/// Live state of one form instance.
///
/// Errors are stored as kinds and rendered on read, so a language switch
/// re-localizes messages that are already showing.
#[derive(Debug)]
pub struct FormState {
    schema: &'static FormSchema,
    context: LanguageContext,
    values: Vec<String>,
    errors: Vec<Option<FieldError>>,
    submitting: bool,
}

impl FormState {
    #[must_use]
    pub fn new(schema: &'static FormSchema, context: LanguageContext) -> Self {
        let len = schema.fields.len();
        Self {
            schema,
            context,
            values: vec![String::new(); len],
            errors: vec![None; len],
            submitting: false,
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    fn index_of(&self, name: &str) -> Result<usize, FormError> {
        self.schema
            .position(name)
            .ok_or_else(|| FormError::UnknownField { form: self.schema.id, field: name.to_string() })
    }

    fn message_for(&self, field: &FieldSpec, error: FieldError) -> String {
        match (error, field.required_message, field.invalid_email_message) {
            (FieldError::Required, Some(RequiredMessage::Key(key)), _) => {
                self.context.translate(key)
            }
            (FieldError::Required, Some(RequiredMessage::LabelWithSuffix { label, suffix }), _) => {
                format!("{} {}", self.context.translate(label), self.context.translate(suffix))
            }
            (FieldError::InvalidEmail, _, Some(key)) => self.context.translate(key),
            // A rule without a message still blocks submission.
            (FieldError::Required, None, _) | (FieldError::InvalidEmail, _, None) => {
                field.name.to_string()
            }
        }
    }

    /// Validate `value` against the rules of field `name` without storing
    /// anything. An empty string means valid.
    ///
    /// # Errors
    /// Returns an error if the form has no such field.
    pub fn validate_field(&self, name: &str, value: &str) -> Result<String, FormError> {
        let index = self.index_of(name)?;
        let Some(field) = self.schema.fields.get(index) else {
            return Err(FormError::UnknownField { form: self.schema.id, field: name.to_string() });
        };
        Ok(field.rules.check(value).map(|e| self.message_for(field, e)).unwrap_or_default())
    }

    /// Store a keystroke's worth of input and revalidate that field only.
    ///
    /// Returns the field's message, empty when valid.
    ///
    /// # Errors
    /// Returns an error if the form has no such field.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<String, FormError> {
        let index = self.index_of(name)?;
        let value = value.into();
        let error = self.schema.fields.get(index).and_then(|field| field.rules.check(&value));

        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
        if let Some(slot) = self.errors.get_mut(index) {
            *slot = error;
        }
        Ok(self.error(name).unwrap_or_default())
    }

    /// Revalidate every field, storing the results. Returns whether all pass.
    pub fn validate_all(&mut self) -> bool {
        for ((field, value), error) in
            self.schema.fields.iter().zip(&self.values).zip(self.errors.iter_mut())
        {
            *error = field.rules.check(value);
        }
        self.errors.iter().all(Option::is_none)
    }

    /// Whether the current values would pass a full validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .all(|(field, value)| field.rules.check(value).is_none())
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(self.schema.position(name)?).map(String::as_str)
    }

    /// Localized message of the stored error of `name`, `None` when valid.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<String> {
        let index = self.schema.position(name)?;
        let error = (*self.errors.get(index)?)?;
        let field = self.schema.fields.get(index)?;
        Some(self.message_for(field, error))
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn snapshot(&self) -> FormSubmission {
        let fields: BTreeMap<&'static str, String> = self
            .schema
            .fields
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name, value.clone()))
            .collect();
        FormSubmission { form: self.schema.id, fields }
    }

    fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.errors.iter_mut().for_each(|error| *error = None);
    }

    /// Validate everything and, when valid, hand the values to `submitter`.
    pub async fn submit<S: Submitter>(&mut self, submitter: &S) -> SubmitOutcome {
        if !self.validate_all() {
            tracing::debug!(form = self.schema.id, "Submission blocked by validation");
            return SubmitOutcome::Invalid;
        }

        let submission = self.snapshot();
        self.submitting = true;
        tracing::info!(form = self.schema.id, "Submitting form");
        let result = submitter.submit(&submission).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.clear();
                tracing::info!(form = self.schema.id, "Form submitted");
                SubmitOutcome::Sent { message: self.context.translate(self.schema.success_message) }
            }
            Err(e) => {
                tracing::error!(form = self.schema.id, "Form submission failed: {}", e);
                SubmitOutcome::Failed { message: self.context.translate(self.schema.error_message) }
            }
        }
    }
}
