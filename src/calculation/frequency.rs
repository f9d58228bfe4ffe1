//! Frequency multiplier lookup.
//!
//! This module resolves the price multiplier for a requested number of
//! collection nights per week from the pricing policy.

use rust_decimal::Decimal;

use crate::config::PricingPolicy;
use crate::error::{QuoteError, QuoteResult};
use crate::models::PricingStep;

/// The result of a frequency multiplier lookup, including the trace step.
#[derive(Debug, Clone)]
pub struct FrequencyMultiplierResult {
    /// The multiplier for the requested frequency.
    pub multiplier: Decimal,
    /// The pricing step recording this lookup.
    pub pricing_step: PricingStep,
}

/// Looks up the price multiplier for a collection frequency.
///
/// The policy's frequency table must cover every frequency the UI can
/// submit. A frequency with no table entry is a configuration fault and
/// yields [`QuoteError::FrequencyNotCovered`] rather than an undefined
/// price.
///
/// # Arguments
///
/// * `policy` - The pricing policy in effect for the quote
/// * `nights_per_week` - The requested collection nights per week
/// * `step_number` - The step number for trace sequencing
pub fn frequency_multiplier(
    policy: &PricingPolicy,
    nights_per_week: u8,
    step_number: u32,
) -> QuoteResult<FrequencyMultiplierResult> {
    let multiplier = policy
        .frequency_multipliers
        .get(&nights_per_week)
        .copied()
        .ok_or(QuoteError::FrequencyNotCovered { nights_per_week })?;

    let pricing_step = PricingStep {
        step_number,
        rule_id: "frequency_multiplier".to_string(),
        rule_name: "Frequency Multiplier".to_string(),
        input: serde_json::json!({
            "nights_per_week": nights_per_week
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string()
        }),
        reasoning: format!(
            "{} nights/week uses multiplier {}",
            nights_per_week,
            multiplier.normalize()
        ),
    };

    Ok(FrequencyMultiplierResult {
        multiplier,
        pricing_step,
    })
}
