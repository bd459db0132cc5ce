//! Validation rules for contact and quote form fields
//!
//! Rules are applied in order and the first failing rule wins:
//! required-and-empty, then the email pattern, then the phone pattern.

use std::sync::LazyLock;

use regex::Regex;

use super::i18n::{self, Locale};

/// Email shape: something, `@`, something, `.`, something, no whitespace
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Phone shape: optional leading `+`, then at least 8 digits, spaces,
/// hyphens or parentheses
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[0-9\s\-()]{8,}$").expect("phone pattern is valid")
});

/// Declared kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Plain,
    Email,
    Phone,
}

impl FieldKind {
    /// HTML `type` attribute for inputs of this kind
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Plain => "text",
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
        }
    }
}

/// Field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Required field left empty
    #[error("This field is required")]
    Required,
    /// Value does not look like an email address
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// Value does not look like a phone number
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

impl FieldError {
    /// Message shown next to the field
    pub fn message(&self, locale: Locale) -> &'static str {
        match self {
            FieldError::Required => i18n::REQUIRED_FIELD.get(locale),
            FieldError::InvalidEmail => i18n::INVALID_EMAIL.get(locale),
            FieldError::InvalidPhone => i18n::INVALID_PHONE.get(locale),
        }
    }
}

/// Validates a single field value.
///
/// The value is trimmed before any rule runs; the byte order mark counts as
/// whitespace, as it does for browser `trim()`. Pattern checks only apply to
/// non-empty values, so an empty optional email or phone field is valid.
pub fn validate_field(value: &str, kind: FieldKind, required: bool) -> Result<(), FieldError> {
    let value = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    if required && value.is_empty() {
        return Err(FieldError::Required);
    }

    if value.is_empty() {
        return Ok(());
    }

    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Phone if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Check a value against the email pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a value against the phone pattern
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty_fails_for_every_kind() {
        for kind in [FieldKind::Plain, FieldKind::Email, FieldKind::Phone] {
            assert_eq!(validate_field("", kind, true), Err(FieldError::Required));
            assert_eq!(validate_field("   ", kind, true), Err(FieldError::Required));
            assert_eq!(validate_field("\t\n", kind, true), Err(FieldError::Required));
        }
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        assert_eq!(validate_field("\u{FEFF}", FieldKind::Plain, true), Err(FieldError::Required));
        assert_eq!(
            validate_field(" \u{FEFF}\u{00A0}", FieldKind::Phone, true),
            Err(FieldError::Required)
        );
        assert_eq!(validate_field("\u{FEFF}", FieldKind::Email, false), Ok(()));
        assert!(validate_field("\u{FEFF}a@b.com\u{FEFF}", FieldKind::Email, true).is_ok());
    }

    #[test]
    fn test_optional_empty_is_valid() {
        for kind in [FieldKind::Plain, FieldKind::Email, FieldKind::Phone] {
            assert_eq!(validate_field("", kind, false), Ok(()));
            assert_eq!(validate_field("  ", kind, false), Ok(()));
        }
    }

    #[test]
    fn test_plain_accepts_anything_non_empty() {
        assert!(validate_field("Fibre", FieldKind::Plain, true).is_ok());
        assert!(validate_field("@@@", FieldKind::Plain, true).is_ok());
        assert!(validate_field("12", FieldKind::Plain, false).is_ok());
    }

    #[test]
    fn test_email_examples() {
        assert_eq!(
            validate_field("a@b", FieldKind::Email, true),
            Err(FieldError::InvalidEmail)
        );
        assert!(validate_field("a@b.com", FieldKind::Email, true).is_ok());
        assert!(validate_field("  sales@fibre.example.org ", FieldKind::Email, true).is_ok());
    }

    #[test]
    fn test_email_rejections() {
        for value in ["plain", "@b.com", "a@.com", "a b@c.com", "a@b@c.com", "a@b.", "a@bcom"] {
            assert_eq!(
                validate_field(value, FieldKind::Email, true),
                Err(FieldError::InvalidEmail),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_result_matches_pattern() {
        for value in ["x@y.z", "a@b", "first.last@mail.co", "no-at.com", "a@b.c.d", "é@ü.ß"] {
            let expected = is_valid_email(value);
            assert_eq!(
                validate_field(value, FieldKind::Email, false).is_ok(),
                expected,
                "{value}"
            );
        }
    }

    #[test]
    fn test_phone_examples() {
        assert_eq!(
            validate_field("12345", FieldKind::Phone, true),
            Err(FieldError::InvalidPhone)
        );
        assert!(validate_field("+1 234-5678", FieldKind::Phone, true).is_ok());
        assert!(validate_field("(02) 1234 5678", FieldKind::Phone, true).is_ok());
        assert!(validate_field("01012345678", FieldKind::Phone, true).is_ok());
    }

    #[test]
    fn test_phone_length_boundary() {
        assert!(!is_valid_phone("1234567"));
        assert!(is_valid_phone("12345678"));
        assert!(!is_valid_phone("+1234567"));
        assert!(is_valid_phone("+12345678"));
    }

    #[test]
    fn test_phone_rejections() {
        for value in ["1234abcd5678", "++12345678", "12345678+", "phone: 12345678", "1234.5678.90"] {
            assert_eq!(
                validate_field(value, FieldKind::Phone, true),
                Err(FieldError::InvalidPhone),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_required_rule_wins_over_pattern() {
        assert_eq!(
            validate_field(" ", FieldKind::Email, true),
            Err(FieldError::Required)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(
            FieldError::InvalidEmail.message(Locale::Arabic),
            "يرجى إدخال بريد إلكتروني صحيح"
        );
        assert_eq!(
            FieldError::InvalidPhone.message(Locale::English),
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn test_input_types() {
        assert_eq!(FieldKind::Plain.input_type(), "text");
        assert_eq!(FieldKind::Email.input_type(), "email");
        assert_eq!(FieldKind::Phone.input_type(), "tel");
    }
}
