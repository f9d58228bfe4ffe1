//! Contact submission model.

use serde::{Deserialize, Serialize};

/// A contact-form submission awaiting validation.
///
/// Fields arrive exactly as typed; trimming and digit-stripping happen in
/// the validation rules, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// The submitter's name.
    pub name: String,
    /// The submitter's email address.
    pub email: String,
    /// The submitter's phone number, in any common format.
    pub phone: String,
    /// The message body.
    pub message: String,
}
