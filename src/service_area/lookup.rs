//! ZIP code parsing and service-area range lookup.

use serde::{Deserialize, Serialize};

use crate::config::ServiceAreaConfig;
use crate::error::{QuoteError, QuoteResult};

/// The outcome of a service-area lookup.
///
/// A ZIP outside every range is a normal outcome, not an error; only a
/// malformed ZIP is rejected (by [`parse_zip`], before lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServiceAreaResult {
    /// The ZIP falls inside a serviceable range.
    Serviceable {
        /// City name of the matched range, when the range is city-granular.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        city: Option<String>,
    },
    /// The ZIP is outside every serviceable range.
    NotServiceable,
}

impl ServiceAreaResult {
    /// Returns true if the lookup matched a serviceable range.
    pub fn is_serviceable(&self) -> bool {
        matches!(self, ServiceAreaResult::Serviceable { .. })
    }
}

/// Parses a ZIP code string, requiring exactly 5 ASCII digits.
///
/// # Examples
///
/// ```
/// use quote_engine::service_area::parse_zip;
///
/// assert_eq!(parse_zip("32801").unwrap(), 32801);
/// assert!(parse_zip("328").is_err());
/// assert!(parse_zip("3280a").is_err());
/// ```
pub fn parse_zip(input: &str) -> QuoteResult<u32> {
    if input.len() != 5 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QuoteError::InvalidZip {
            input: input.to_string(),
        });
    }

    input.parse::<u32>().map_err(|_| QuoteError::InvalidZip {
        input: input.to_string(),
    })
}

/// Looks up a ZIP code against the configured serviceable ranges.
///
/// The ranges are scanned in list order and the first range containing the
/// ZIP wins, so overlapping ranges resolve deterministically by position.
/// Given the same configuration and ZIP, the result is constant.
///
/// # Arguments
///
/// * `zip` - A parsed 5-digit ZIP code (see [`parse_zip`])
/// * `config` - The service-area configuration
pub fn find_service_area(zip: u32, config: &ServiceAreaConfig) -> ServiceAreaResult {
    match config
        .areas
        .iter()
        .find(|range| zip >= range.min && zip <= range.max)
    {
        Some(range) => ServiceAreaResult::Serviceable {
            city: range.city.clone(),
        },
        None => ServiceAreaResult::NotServiceable,
    }
}
