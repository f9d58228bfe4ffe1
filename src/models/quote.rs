//! Quote request model and related types.
//!
//! This module defines the QuoteRequest struct and PropertyType enum
//! describing a single price estimation request.

use serde::{Deserialize, Serialize};

/// Represents the type of residential property being quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Apartment complex.
    Apartment,
    /// Condominium community.
    Condo,
    /// Townhome community.
    Townhome,
    /// Homeowners-association neighborhood.
    Hoa,
}

impl PropertyType {
    /// Returns the lowercase wire name of the property type.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_engine::models::PropertyType;
    ///
    /// assert_eq!(PropertyType::Townhome.as_str(), "townhome");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhome => "townhome",
            PropertyType::Hoa => "hoa",
        }
    }

    /// All property types the estimator can be asked about.
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhome,
        PropertyType::Hoa,
    ];
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single price estimation request.
///
/// Requests are transient: one is constructed fresh per calculation and has
/// no identity or lifecycle beyond that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Number of dwelling units covered by the contract (at least 1).
    pub unit_count: u32,
    /// Collection nights per week.
    pub nights_per_week: u8,
    /// The type of property.
    pub property_type: PropertyType,
}
