//! Contact submission validation rules.
//!
//! Rule table:
//! - name: at least 2 characters after trimming
//! - email: matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`
//! - phone: at least 10 digits after stripping non-digits
//! - message: at least 10 characters after trimming
//!
//! All failing rules are reported together so the form can show every
//! problem at once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::models::ContactSubmission;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Minimum name length after trimming, inclusive.
const MIN_NAME_CHARS: usize = 2;
/// Minimum digits in a phone number, inclusive.
const MIN_PHONE_DIGITS: usize = 10;
/// Minimum message length after trimming, inclusive.
const MIN_MESSAGE_CHARS: usize = 10;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The submission field that failed.
    pub field: String,
    /// Human-readable message for the field.
    pub message: String,
}

/// All validation failures for one contact submission.
///
/// Displays as the field messages joined with "; " for single-line
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactValidationErrors {
    /// The failed rules, in field order.
    pub errors: Vec<FieldError>,
}

impl std::fmt::Display for ContactValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&joined.join("; "))
    }
}

/// Validates a contact submission against the rule table.
///
/// Every rule is checked and every failure collected; the result is `Ok`
/// only when all rules pass. Boundary values are inclusive: a 2-character
/// name, 10-digit phone, and 10-character message all pass.
///
/// # Examples
///
/// ```
/// use quote_engine::models::ContactSubmission;
/// use quote_engine::validation::validate_contact;
///
/// let submission = ContactSubmission {
///     name: "Jo".to_string(),
///     email: "jo@example.com".to_string(),
///     phone: "(555) 123-4567".to_string(),
///     message: "Twelve chars.".to_string(),
/// };
/// assert!(validate_contact(&submission).is_ok());
/// ```
pub fn validate_contact(
    submission: &ContactSubmission,
) -> Result<(), ContactValidationErrors> {
    let mut errors = Vec::new();

    if submission.name.trim().chars().count() < MIN_NAME_CHARS {
        errors.push(FieldError {
            field: "name".to_string(),
            message: "Please enter your name".to_string(),
        });
    }

    if !EMAIL_RE.is_match(&submission.email) {
        errors.push(FieldError {
            field: "email".to_string(),
            message: "Please enter a valid email address".to_string(),
        });
    }

    let digit_count = submission.phone.chars().filter(char::is_ascii_digit).count();
    if digit_count < MIN_PHONE_DIGITS {
        errors.push(FieldError {
            field: "phone".to_string(),
            message: "Please enter a valid phone number".to_string(),
        });
    }

    if submission.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        errors.push(FieldError {
            field: "message".to_string(),
            message: "Please enter a message (at least 10 characters)".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ContactValidationErrors { errors })
    }
}

/// Formats the digits of a phone input as `(xxx) xxx-xxxx`.
///
/// Partial inputs format as far as their digits reach, matching the
/// as-you-type formatting on the contact form; digits past the tenth are
/// dropped.
///
/// # Examples
///
/// ```
/// use quote_engine::validation::format_phone;
///
/// assert_eq!(format_phone("4075550134"), "(407) 555-0134");
/// assert_eq!(format_phone("407555"), "(407) 555");
/// assert_eq!(format_phone("40"), "(40");
/// ```
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return String::new();
    }

    if digits.len() <= 3 {
        format!("({}", digits)
    } else if digits.len() <= 6 {
        format!("({}) {}", &digits[..3], &digits[3..])
    } else {
        let end = digits.len().min(10);
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..end])
    }
}
