//! Contact form state and validation.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Same shape the browser-side check used: local part and domain split by a
// single `@`, domain containing a dot, no whitespace anywhere.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

/// Raw field values as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub newsletter: bool,
}

/// A submission that passed validation, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub newsletter: bool,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingField,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactForm {
    /// Checks the form and hands back a trimmed [`Submission`], or the first
    /// reason it cannot be sent.
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingField);
        }

        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Submission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            newsletter: self.newsletter,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The submit button: disabled and relabeled while a submission is in
/// flight, restored afterwards whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    enabled: bool,
    label: &'static str,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL,
        }
    }
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn begin_sending(&mut self) {
        self.enabled = false;
        self.label = SENDING_LABEL;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
