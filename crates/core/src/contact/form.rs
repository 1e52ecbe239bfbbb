//! # Contact Form Fields
//!
//! Field values, per-field errors and the validation rules. Subject is
//! free-form; name, email and message are required.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// `local@domain.tld`, nothing stricter
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// The four fields, serialized as the JSON body of the delivery request
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Error text per required field; empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Error for `field`, if any. Subject never has one.
    pub fn get(&self, field: Field) -> Option<&str> {
        let text = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::Subject => return None,
        };
        (!text.is_empty()).then_some(text.as_str())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Compute the full error map for `form`
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = NAME_REQUIRED.to_string();
    }

    if form.email.trim().is_empty() {
        errors.email = EMAIL_REQUIRED.to_string();
    } else if !is_valid_email(&form.email) {
        errors.email = EMAIL_INVALID.to_string();
    }

    if form.message.trim().is_empty() {
        errors.message = MESSAGE_REQUIRED.to_string();
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: String::new(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&jane()).is_empty());
    }

    #[test]
    fn test_empty_form_flags_required_fields() {
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.name, NAME_REQUIRED);
        assert_eq!(errors.email, EMAIL_REQUIRED);
        assert_eq!(errors.message, MESSAGE_REQUIRED);
        assert_eq!(errors.get(Field::Subject), None);
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let mut form = jane();
        form.name = "   ".to_string();
        form.message = "\n\t".to_string();
        let errors = validate(&form);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn test_malformed_email() {
        let mut form = jane();
        form.email = "not-an-email".to_string();
        assert_eq!(validate(&form).email, EMAIL_INVALID);
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.co"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
    }

    #[test]
    fn test_json_body_shape() {
        let body = serde_json::to_value(jane()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "subject": "",
                "message": "Hello"
            })
        );
    }

    #[test]
    fn test_set_and_clear_fields() {
        let mut form = ContactForm::default();
        form.set(Field::Subject, "Project Inquiry");
        assert_eq!(form.get(Field::Subject), "Project Inquiry");
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
