use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `local@domain.tld` shape: no whitespace, one `@`, a dot after it.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

const NAME_MIN_CHARS: usize = 2;
const SUBJECT_MIN_CHARS: usize = 3;
const MESSAGE_MIN_CHARS: usize = 10;

/// The four inputs of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// DOM id of the input element
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// DOM id of the error slot rendered under the input
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Subject => "subjectError",
            Field::Message => "messageError",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }

    /// Run this field's validator against `value`.
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Subject => validate_subject(value),
            Field::Message => validate_message(value),
        }
    }
}

/// A single field's validation failure. `Display` is the inline message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least {min} characters long")]
    NameTooShort { min: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least {min} characters long")]
    SubjectTooShort { min: usize },
    #[error("Message must be at least {min} characters long")]
    MessageTooShort { min: usize },
}

/// Length in UTF-16 code units, the way the browser measures input values.
fn trimmed_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if trimmed_len(value) < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort { min: NAME_MIN_CHARS });
    }
    Ok(())
}

/// The raw value is matched; surrounding whitespace makes it invalid.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if !EMAIL_SHAPE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_subject(value: &str) -> Result<(), FieldError> {
    if trimmed_len(value) < SUBJECT_MIN_CHARS {
        return Err(FieldError::SubjectTooShort {
            min: SUBJECT_MIN_CHARS,
        });
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    if trimmed_len(value) < MESSAGE_MIN_CHARS {
        return Err(FieldError::MessageTooShort {
            min: MESSAGE_MIN_CHARS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_name_boundaries() {
        assert!(validate_name("").is_err());
        assert!(validate_name("A").is_err());
        assert!(validate_name("  A  ").is_err());
        assert!(validate_name("Al").is_ok());
        assert!(validate_name(" Al ").is_ok());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // "é" is two bytes but one UTF-16 unit
        assert!(validate_name("é").is_err());
        assert!(validate_name("Zoë").is_ok());
        // Astral characters take a surrogate pair each
        assert!(validate_name("\u{1F600}").is_ok());
        assert!(validate_subject("\u{1F600}").is_err());
        assert!(validate_subject("\u{1F600}\u{1F600}").is_ok());
        assert!(validate_message("\u{1F600}\u{1F600}\u{1F600}\u{1F600}").is_err());
        assert!(validate_message("\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}").is_ok());
    }

    #[test]
    fn test_email_accepts_well_formed() {
        for ok in ["a@b.co", "x@y.com", "first.last@sub.example.org", "a+tag@b.c"] {
            assert!(validate_email(ok).is_ok(), "{ok} should be valid");
        }
    }

    #[test]
    fn test_email_rejects_malformed() {
        for bad in [
            "",
            "plain",
            "@b.co",
            "a@",
            "a@b",
            "a@@b.co",
            "a b@c.de",
            " a@b.co",
            "a@b.co ",
            "a@b.",
        ] {
            assert_eq!(validate_email(bad), Err(FieldError::InvalidEmail), "{bad:?}");
        }
    }

    #[test]
    fn test_subject_and_message_boundaries() {
        assert!(validate_subject("Hi").is_err());
        assert!(validate_subject("Hey").is_ok());
        assert!(validate_message("123456789").is_err());
        assert!(validate_message("1234567890").is_ok());
        assert!(validate_message("   123456789   ").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            validate_name("A").unwrap_err().to_string(),
            "Name must be at least 2 characters long"
        );
        assert_eq!(
            validate_email("nope").unwrap_err().to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            validate_subject("").unwrap_err().to_string(),
            "Subject must be at least 3 characters long"
        );
        assert_eq!(
            validate_message("short").unwrap_err().to_string(),
            "Message must be at least 10 characters long"
        );
    }

    #[test]
    fn test_field_dispatch_matches_validators() {
        assert_eq!(Field::Name.validate("A"), validate_name("A"));
        assert_eq!(Field::Email.validate("a@b.co"), Ok(()));
        assert_eq!(Field::Subject.validate("Hi"), validate_subject("Hi"));
        assert_eq!(Field::Message.validate(""), validate_message(""));
    }

    #[test]
    fn test_field_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = Field::ALL
            .iter()
            .flat_map(|f| [f.input_id(), f.error_id()])
            .collect();
        assert_eq!(ids.len(), 8);
        for (i, f) in Field::ALL.iter().enumerate() {
            assert_eq!(f.index(), i);
        }
    }

    proptest! {
        #[test]
        fn prop_name_valid_iff_two_chars(s in "[a-zA-Z ]{0,12}") {
            let len = s.trim().encode_utf16().count();
            prop_assert_eq!(validate_name(&s).is_ok(), len >= 2);
        }

        #[test]
        fn prop_subject_valid_iff_three_chars(s in "[a-z \t]{0,12}") {
            let len = s.trim().encode_utf16().count();
            prop_assert_eq!(validate_subject(&s).is_ok(), len >= 3);
        }

        #[test]
        fn prop_message_valid_iff_ten_chars(s in "[a-z0-9 ]{0,24}") {
            let len = s.trim().encode_utf16().count();
            prop_assert_eq!(validate_message(&s).is_ok(), len >= 10);
        }

        #[test]
        fn prop_email_without_at_is_invalid(s in "[a-z.]{0,20}") {
            prop_assert!(validate_email(&s).is_err());
        }

        #[test]
        fn prop_email_well_formed_is_valid(
            local in "[a-z0-9]{1,8}",
            domain in "[a-z]{1,8}",
            tld in "[a-z]{2,4}",
        ) {
            let addr = format!("{local}@{domain}.{tld}");
            prop_assert!(validate_email(&addr).is_ok());
        }
    }
}
