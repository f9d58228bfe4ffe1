//! Estimate result models for the Quote Engine.
//!
//! This module contains the [`QuoteEstimate`] type and the [`PricingStep`]
//! trace entries that record how a price was arrived at, so the display
//! layer can show a full breakdown next to the number.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::QuoteRequest;

/// A single step in the pricing trace recording one rule application.
///
/// Each step captures the input, output, and reasoning for the rule, in the
/// order the rules were applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The result of a price estimation.
///
/// # Example
///
/// ```
/// use quote_engine::models::{PropertyType, QuoteEstimate, QuoteRequest};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let estimate = QuoteEstimate::new(
///     QuoteRequest {
///         unit_count: 100,
///         nights_per_week: 5,
///         property_type: PropertyType::Apartment,
///     },
///     NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     1125,
///     Decimal::new(112500, 2),
///     vec![],
/// );
/// assert_eq!(estimate.monthly_price, 1125);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteEstimate {
    /// Unique identifier for this estimate.
    pub quote_id: Uuid,
    /// When the estimate was generated.
    pub generated_at: DateTime<Utc>,
    /// The request the estimate was computed from.
    pub request: QuoteRequest,
    /// Effective date of the pricing policy that was applied.
    pub policy_effective_date: NaiveDate,
    /// Estimated monthly price in whole dollars, rounded half-up.
    pub monthly_price: u64,
    /// The exact price before rounding.
    pub exact_price: Decimal,
    /// The ordered trace of pricing rules that produced the price.
    pub steps: Vec<PricingStep>,
}

impl QuoteEstimate {
    /// Creates a new estimate with a fresh quote ID and timestamp.
    pub fn new(
        request: QuoteRequest,
        policy_effective_date: NaiveDate,
        monthly_price: u64,
        exact_price: Decimal,
        steps: Vec<PricingStep>,
    ) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            request,
            policy_effective_date,
            monthly_price,
            exact_price,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use std::str::FromStr;

    fn create_test_estimate() -> QuoteEstimate {
        QuoteEstimate::new(
            QuoteRequest {
                unit_count: 100,
                nights_per_week: 5,
                property_type: PropertyType::Apartment,
            },
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            1125,
            Decimal::from_str("1125.00").unwrap(),
            vec![PricingStep {
                step_number: 1,
                rule_id: "frequency_multiplier".to_string(),
                rule_name: "Frequency Multiplier".to_string(),
                input: serde_json::json!({ "nights_per_week": 5 }),
                output: serde_json::json!({ "multiplier": "1.00" }),
                reasoning: "5 nights/week uses multiplier 1.00".to_string(),
            }],
        )
    }

    #[test]
    fn test_new_assigns_unique_quote_ids() {
        let a = create_test_estimate();
        let b = create_test_estimate();
        assert_ne!(a.quote_id, b.quote_id);
    }

    #[test]
    fn test_serialize_estimate_round_trip() {
        let estimate = create_test_estimate();
        let json = serde_json::to_string(&estimate).unwrap();

        let deserialized: QuoteEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(estimate, deserialized);
    }

    #[test]
    fn test_steps_preserve_order() {
        let estimate = create_test_estimate();
        assert_eq!(estimate.steps[0].step_number, 1);
        assert_eq!(estimate.steps[0].rule_id, "frequency_multiplier");
    }
}
