//! Property-type multiplier lookup.
//!
//! This module resolves the price multiplier for the property type being
//! quoted from the pricing policy.

use rust_decimal::Decimal;

use crate::config::PricingPolicy;
use crate::error::{QuoteError, QuoteResult};
use crate::models::{PricingStep, PropertyType};

/// The result of a property multiplier lookup, including the trace step.
#[derive(Debug, Clone)]
pub struct PropertyMultiplierResult {
    /// The multiplier for the property type.
    pub multiplier: Decimal,
    /// The pricing step recording this lookup.
    pub pricing_step: PricingStep,
}

/// Looks up the price multiplier for a property type.
///
/// A property type with no table entry in the policy yields
/// [`QuoteError::PropertyTypeNotCovered`].
///
/// # Arguments
///
/// * `policy` - The pricing policy in effect for the quote
/// * `property_type` - The property type being quoted
/// * `step_number` - The step number for trace sequencing
pub fn property_multiplier(
    policy: &PricingPolicy,
    property_type: PropertyType,
    step_number: u32,
) -> QuoteResult<PropertyMultiplierResult> {
    let multiplier = policy
        .property_multipliers
        .get(&property_type)
        .copied()
        .ok_or_else(|| QuoteError::PropertyTypeNotCovered {
            property_type: property_type.to_string(),
        })?;

    let pricing_step = PricingStep {
        step_number,
        rule_id: "property_multiplier".to_string(),
        rule_name: "Property Type Multiplier".to_string(),
        input: serde_json::json!({
            "property_type": property_type.as_str()
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string()
        }),
        reasoning: format!(
            "Property type '{}' uses multiplier {}",
            property_type,
            multiplier.normalize()
        ),
    };

    Ok(PropertyMultiplierResult {
        multiplier,
        pricing_step,
    })
}
