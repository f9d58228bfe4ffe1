//! Volume discount tier selection.
//!
//! This module selects the volume discount factor for a unit count. Tiers
//! are evaluated highest threshold first; when no tier matches, or the
//! policy configures no tiers at all, the factor is 1.0 and the trace step
//! records that no discount applied.

use rust_decimal::Decimal;

use crate::config::PricingPolicy;
use crate::models::PricingStep;

/// The result of a volume discount selection, including the trace step.
#[derive(Debug, Clone)]
pub struct VolumeDiscountResult {
    /// The discount factor to apply (1.0 when no discount).
    pub factor: Decimal,
    /// The pricing step recording this selection.
    pub pricing_step: PricingStep,
}

/// Selects the volume discount factor for a unit count.
///
/// The policy's tiers are kept sorted highest `min_units` first, so the
/// first tier whose threshold is at or below `unit_count` wins. This rule
/// is infallible: absence of a matching tier means a factor of 1.0.
///
/// # Arguments
///
/// * `policy` - The pricing policy in effect for the quote
/// * `unit_count` - The number of units being quoted
/// * `step_number` - The step number for trace sequencing
pub fn volume_discount(
    policy: &PricingPolicy,
    unit_count: u32,
    step_number: u32,
) -> VolumeDiscountResult {
    let matched = policy
        .volume_discounts
        .iter()
        .find(|tier| unit_count >= tier.min_units);

    match matched {
        Some(tier) => {
            let pricing_step = PricingStep {
                step_number,
                rule_id: "volume_discount".to_string(),
                rule_name: "Volume Discount".to_string(),
                input: serde_json::json!({
                    "unit_count": unit_count
                }),
                output: serde_json::json!({
                    "factor": tier.factor.normalize().to_string(),
                    "discount_applied": true,
                    "tier_min_units": tier.min_units
                }),
                reasoning: format!(
                    "{} units qualifies for the {}+ unit tier, factor {}",
                    unit_count,
                    tier.min_units,
                    tier.factor.normalize()
                ),
            };

            VolumeDiscountResult {
                factor: tier.factor,
                pricing_step,
            }
        }
        None => {
            let pricing_step = PricingStep {
                step_number,
                rule_id: "volume_discount".to_string(),
                rule_name: "Volume Discount".to_string(),
                input: serde_json::json!({
                    "unit_count": unit_count
                }),
                output: serde_json::json!({
                    "factor": "1",
                    "discount_applied": false
                }),
                reasoning: format!("No volume discount tier matches {} units", unit_count),
            };

            VolumeDiscountResult {
                factor: Decimal::ONE,
                pricing_step,
            }
        }
    }
}
