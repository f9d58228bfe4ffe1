//! Request types for the Quote Engine API.
//!
//! This module defines the JSON request structures for the `/quote` and
//! `/contact/validate` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PropertyType, QuoteRequest};

/// Request body for the `/quote` endpoint.
///
/// Contains the quote parameters plus an optional quote date used to select
/// the pricing policy; when omitted the current date is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteApiRequest {
    /// Number of dwelling units covered by the contract.
    pub unit_count: u32,
    /// Collection nights per week.
    pub nights_per_week: u8,
    /// The type of property.
    pub property_type: PropertyType,
    /// Optional date for pricing-policy selection (defaults to today).
    #[serde(default)]
    pub quote_date: Option<NaiveDate>,
}

impl From<QuoteApiRequest> for QuoteRequest {
    fn from(req: QuoteApiRequest) -> Self {
        QuoteRequest {
            unit_count: req.unit_count,
            nights_per_week: req.nights_per_week,
            property_type: req.property_type,
        }
    }
}
