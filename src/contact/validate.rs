use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::{Field, FormFields};

// U+FEFF is whitespace for browsers but not for `\s` or `char::is_whitespace`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is valid")
});

/// Minimum message length in UTF-16 code units, as a browser counts it.
const MIN_MESSAGE_LEN: usize = 10;

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// A validation failure attached to a single input. The `Display` text is
/// what gets rendered under the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Drops the error for `field`, returning whether one was set.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

fn check(field: Field, value: &str) -> Option<FieldError> {
    let trimmed = value.trim_matches(is_blank);
    match field {
        Field::Name if trimmed.is_empty() => Some(FieldError::NameRequired),
        Field::Email if trimmed.is_empty() => Some(FieldError::EmailRequired),
        Field::Email if !EMAIL_RE.is_match(value) => Some(FieldError::EmailInvalid),
        Field::Subject if trimmed.is_empty() => Some(FieldError::SubjectRequired),
        Field::Message if trimmed.is_empty() => Some(FieldError::MessageRequired),
        Field::Message if trimmed.encode_utf16().count() < MIN_MESSAGE_LEN => {
            Some(FieldError::MessageTooShort)
        }
        _ => None,
    }
}

/// Checks every field and returns the full set of errors; an empty result
/// means the form can be sent.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Some(err) = check(field, fields.get(field)) {
            errors.insert(field, err);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormFields {
        FormFields {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there, this is long enough.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn test_all_fields_invalid() {
        let fields = FormFields {
            name: "".to_string(),
            email: "bad".to_string(),
            subject: "".to_string(),
            message: "hi".to_string(),
        };
        let errors = validate(&fields);
        assert_eq!(errors.len(), 4);
        let rendered = Field::ALL
            .iter()
            .map(|f| errors.get(*f).unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            rendered,
            vec![
                "Name is required",
                "Email is invalid",
                "Subject is required",
                "Message must be at least 10 characters",
            ]
        );
    }

    #[test]
    fn test_invalid_email_only() {
        let mut fields = valid();
        fields.email = "not-an-email".to_string();
        let errors = validate(&fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalid));
    }

    #[test]
    fn test_short_message() {
        let mut fields = valid();
        fields.message = "short".to_string();
        let errors = validate(&fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let fields = FormFields {
            name: "   ".to_string(),
            email: "\t".to_string(),
            subject: " \n ".to_string(),
            message: "          ".to_string(),
        };
        let errors = validate(&fields);
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailRequired));
        assert_eq!(errors.get(Field::Subject), Some(FieldError::SubjectRequired));
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageRequired));
    }

    #[test]
    fn test_message_length_uses_trimmed_value() {
        let mut fields = valid();
        fields.message = "   123456789   ".to_string();
        assert_eq!(
            validate(&fields).get(Field::Message),
            Some(FieldError::MessageTooShort)
        );
        fields.message = "1234567890".to_string();
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        let mut fields = valid();
        // each emoji is a surrogate pair
        fields.message = "😀😀😀😀😀".to_string();
        assert!(validate(&fields).is_empty());
        fields.message = "😀😀😀😀".to_string();
        assert_eq!(
            validate(&fields).get(Field::Message),
            Some(FieldError::MessageTooShort)
        );
        fields.message = "héllo wörl".to_string();
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        let mut fields = valid();
        fields.name = "\u{FEFF}".to_string();
        fields.subject = " \u{FEFF} ".to_string();
        let errors = validate(&fields);
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(Field::Subject), Some(FieldError::SubjectRequired));

        fields = valid();
        fields.email = "a\u{FEFF}b@x.com".to_string();
        assert_eq!(validate(&fields).get(Field::Email), Some(FieldError::EmailInvalid));
    }

    #[test]
    fn test_email_patterns() {
        let cases = [
            ("a@b.co", true),
            ("first.last@sub.domain.org", true),
            ("no-at.example.com", false),
            ("two@@example.com", false),
            ("missing@tld", false),
            ("space in@example.com", false),
            (" ann@x.com", false),
        ];
        for (email, ok) in cases {
            let mut fields = valid();
            fields.email = email.to_string();
            assert_eq!(validate(&fields).is_empty(), ok, "email: {email:?}");
        }
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = validate(&FormFields::default());
        assert_eq!(errors.len(), 4);
        assert!(errors.clear(Field::Email));
        assert!(!errors.clear(Field::Email));
        assert_eq!(errors.len(), 3);
        assert!(errors.get(Field::Name).is_some());
    }
}
