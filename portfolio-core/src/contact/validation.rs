use std::fmt;
use std::sync::LazyLock;

use constants::contact::{
    EMAIL_PATTERN, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Raw contact form values as read from the page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Build from `(field name, value)` pairs, ignoring unknown names.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut form = Self::default();
        for (name, value) in pairs {
            match ContactField::from_name(name) {
                Some(ContactField::Name) => form.name = value,
                Some(ContactField::Email) => form.email = value,
                Some(ContactField::Company) => form.company = value,
                Some(ContactField::Service) => form.service = value,
                Some(ContactField::Message) => form.message = value,
                None => {}
            }
        }
        form
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Service,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "company" => Some(Self::Company),
            "service" => Some(Self::Service),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Service => "service",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(ContactField),
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name is too long")]
    NameTooLong,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Message is too long (max 1000 characters)")]
    MessageTooLong,
    #[error("Please select a service")]
    MissingService,
}

/// A form that passed [`validate_submission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact(ContactForm);

impl ValidatedContact {
    pub fn form(&self) -> &ContactForm {
        &self.0
    }

    pub fn into_inner(self) -> ContactForm {
        self.0
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn check_name(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < NAME_MIN_CHARS {
        Err(ValidationError::NameTooShort)
    } else if len > NAME_MAX_CHARS {
        Err(ValidationError::NameTooLong)
    } else {
        Ok(())
    }
}

fn check_message(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < MESSAGE_MIN_CHARS {
        Err(ValidationError::MessageTooShort)
    } else if len > MESSAGE_MAX_CHARS {
        Err(ValidationError::MessageTooLong)
    } else {
        Ok(())
    }
}

/// Whole-form check run on submit. Values are checked as typed, without trimming.
pub fn validate_submission(form: ContactForm) -> Result<ValidatedContact, ValidationError> {
    let required = [
        (ContactField::Name, &form.name),
        (ContactField::Email, &form.email),
        (ContactField::Service, &form.service),
        (ContactField::Message, &form.message),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::Missing(*field));
    }

    check_name(&form.name)?;
    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    check_message(&form.message)?;

    Ok(ValidatedContact(form))
}

/// Live check of a single field on input. The value is trimmed first.
pub fn validate_field(field: ContactField, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    match field {
        ContactField::Name => check_name(value),
        ContactField::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        ContactField::Message => check_message(value),
        ContactField::Service if value.is_empty() => Err(ValidationError::MissingService),
        _ => Ok(()),
    }
}

/// Error to display next to a field, if any.
///
/// Empty fields never show an error while typing; the submit check covers them.
pub fn field_feedback(field: ContactField, raw: &str) -> Option<ValidationError> {
    match validate_field(field, raw) {
        Err(err) if !raw.trim().is_empty() => Some(err),
        _ => None,
    }
}
