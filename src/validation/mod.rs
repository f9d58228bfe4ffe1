//! Contact-form validation for the Quote Engine.
//!
//! This module applies the contact-form rule table, collecting every field
//! failure instead of short-circuiting, and provides the display-side
//! phone formatting helper.

mod contact;

pub use contact::{ContactValidationErrors, FieldError, format_phone, validate_contact};
