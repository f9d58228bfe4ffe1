//! Price estimate orchestration.
//!
//! This module combines the pricing rules into a monthly price estimate:
//!
//! ```text
//! price = unit_count x base_price_per_unit
//!         x frequency_multiplier x property_multiplier x volume_discount
//! ```
//!
//! rounded half-up to a whole dollar.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PricingPolicy;
use crate::error::{QuoteError, QuoteResult};
use crate::models::{PricingStep, QuoteEstimate, QuoteRequest};

use super::{frequency_multiplier, property_multiplier, volume_discount};

/// Computes a monthly price estimate for a quote request under a policy.
///
/// Each rule application is recorded as a [`PricingStep`] in the returned
/// estimate, in application order, so the caller can display the full
/// breakdown. The estimator is a pure function of its inputs: identical
/// request and policy always produce the identical price.
///
/// # Arguments
///
/// * `request` - The quote request
/// * `policy` - The pricing policy in effect for the quote date
///
/// # Returns
///
/// Returns the [`QuoteEstimate`], or an error if:
/// - The unit count is zero (`InvalidQuote`)
/// - The frequency has no multiplier in the policy (`FrequencyNotCovered`)
/// - The property type has no multiplier (`PropertyTypeNotCovered`)
///
/// # Examples
///
/// ```no_run
/// use quote_engine::calculation::estimate_price;
/// use quote_engine::config::ConfigLoader;
/// use quote_engine::models::{PropertyType, QuoteRequest};
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/fl-central")?;
/// let policy = loader.policy_for(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())?;
/// let estimate = estimate_price(
///     &QuoteRequest {
///         unit_count: 100,
///         nights_per_week: 5,
///         property_type: PropertyType::Apartment,
///     },
///     policy,
/// )?;
/// assert_eq!(estimate.monthly_price, 1125);
/// # Ok::<(), quote_engine::error::QuoteError>(())
/// ```
pub fn estimate_price(
    request: &QuoteRequest,
    policy: &PricingPolicy,
) -> QuoteResult<QuoteEstimate> {
    if request.unit_count == 0 {
        return Err(QuoteError::InvalidQuote {
            field: "unit_count".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    let mut steps: Vec<PricingStep> = Vec::new();
    let mut step_number: u32 = 1;

    let units = Decimal::from(request.unit_count);
    let base = units * policy.base_price_per_unit;
    steps.push(PricingStep {
        step_number,
        rule_id: "base_price".to_string(),
        rule_name: "Base Price".to_string(),
        input: serde_json::json!({
            "unit_count": request.unit_count,
            "base_price_per_unit": policy.base_price_per_unit.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_price": base.normalize().to_string()
        }),
        reasoning: format!(
            "{} units x ${}/unit = ${}",
            request.unit_count,
            policy.base_price_per_unit.normalize(),
            base.normalize()
        ),
    });
    step_number += 1;

    let frequency = frequency_multiplier(policy, request.nights_per_week, step_number)?;
    steps.push(frequency.pricing_step);
    step_number += 1;

    let property = property_multiplier(policy, request.property_type, step_number)?;
    steps.push(property.pricing_step);
    step_number += 1;

    let discount = volume_discount(policy, request.unit_count, step_number);
    steps.push(discount.pricing_step);

    let exact_price = base * frequency.multiplier * property.multiplier * discount.factor;
    let rounded = exact_price.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let monthly_price = rounded
        .to_u64()
        .ok_or_else(|| QuoteError::InvalidQuote {
            field: "unit_count".to_string(),
            message: "computed price is out of range".to_string(),
        })?;

    Ok(QuoteEstimate::new(
        *request,
        policy.effective_date,
        monthly_price,
        exact_price,
        steps,
    ))
}
