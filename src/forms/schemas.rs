//! Field schemas of the site's forms
//!
//! Each form is a static list of fields with their rules and the translation
//! keys of their messages.

use super::FieldRules;

/// How the "required" message of a field is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredMessage {
    /// A dedicated translation
    Key(&'static str),
    /// The field label followed by a shared suffix, e.g. "Email is required"
    LabelWithSuffix { label: &'static str, suffix: &'static str },
}

/// One input of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name used to address the field
    pub name: &'static str,
    /// Placeholder / label translation key
    pub label: &'static str,
    pub rules: FieldRules,
    pub required_message: Option<RequiredMessage>,
    pub invalid_email_message: Option<&'static str>,
}

impl FieldSpec {
    const fn required(name: &'static str, label: &'static str, message: &'static str) -> Self {
        Self {
            name,
            label,
            rules: FieldRules::REQUIRED,
            required_message: Some(RequiredMessage::Key(message)),
            invalid_email_message: None,
        }
    }

    const fn email(
        name: &'static str,
        label: &'static str,
        required: &'static str,
        invalid: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            rules: FieldRules::REQUIRED_EMAIL,
            required_message: Some(RequiredMessage::Key(required)),
            invalid_email_message: Some(invalid),
        }
    }

    const fn optional(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            rules: FieldRules::OPTIONAL,
            required_message: None,
            invalid_email_message: None,
        }
    }
}

/// A form: its fields in display order and its outcome messages.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub id: &'static str,
    pub fields: &'static [FieldSpec],
    pub success_message: &'static str,
    pub error_message: &'static str,
}

impl FormSchema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

/// Footer quick-contact form.
pub static NEWSLETTER_FORM: FormSchema = FormSchema {
    id: "newsletter",
    fields: &[
        FieldSpec {
            name: "nombre",
            label: "footer.name",
            rules: FieldRules::REQUIRED,
            required_message: Some(RequiredMessage::LabelWithSuffix {
                label: "footer.name",
                suffix: "footer.errorRequired",
            }),
            invalid_email_message: None,
        },
        FieldSpec {
            name: "email",
            label: "footer.email",
            rules: FieldRules::REQUIRED_EMAIL,
            required_message: Some(RequiredMessage::LabelWithSuffix {
                label: "footer.email",
                suffix: "footer.errorRequired",
            }),
            invalid_email_message: Some("footer.errorInvalidEmail"),
        },
    ],
    success_message: "footer.successMessage",
    error_message: "footer.errorMessage",
};

/// Contact page form.
pub static CONTACT_FORM: FormSchema = FormSchema {
    id: "contact",
    fields: &[
        FieldSpec::required(
            "solicitud",
            "contact.requestPlaceholder",
            "contact.errors.requestRequired",
        ),
        FieldSpec::required("nombre", "contact.namePlaceholder", "contact.errors.nameRequired"),
        FieldSpec::email(
            "email",
            "contact.emailPlaceholder",
            "contact.errors.emailRequired",
            "contact.errors.emailInvalid",
        ),
        FieldSpec::required(
            "telefono",
            "contact.phonePlaceholder",
            "contact.errors.phoneRequired",
        ),
        FieldSpec::required(
            "empresa",
            "contact.companyPlaceholder",
            "contact.errors.companyRequired",
        ),
    ],
    success_message: "contact.successMessage",
    error_message: "contact.errorMessage",
};

/// Job application modal.
pub static JOB_APPLICATION_FORM: FormSchema = FormSchema {
    id: "job-application",
    fields: &[
        FieldSpec::required("nombre", "modals.job.namePlaceholder", "modals.job.errors.nameRequired"),
        FieldSpec::required(
            "pais",
            "modals.job.countryPlaceholder",
            "modals.job.errors.countryRequired",
        ),
        FieldSpec::required("ciudad", "modals.job.cityPlaceholder", "modals.job.errors.cityRequired"),
        FieldSpec::email(
            "correo",
            "modals.job.emailPlaceholder",
            "modals.job.errors.emailRequired",
            "modals.job.errors.emailInvalid",
        ),
        FieldSpec::required(
            "mensaje",
            "modals.job.messagePlaceholder",
            "modals.job.errors.messageRequired",
        ),
        FieldSpec::optional("cv", "modals.job.attachCV"),
    ],
    success_message: "modals.job.successMessage",
    error_message: "modals.job.errorMessage",
};
