//! Calculation logic for the Quote Engine.
//!
//! This module contains the pricing rules that make up a price estimate:
//! frequency multiplier lookup, property-type multiplier lookup, volume
//! discount tier selection, and the estimate orchestration that combines
//! them and rounds the result.

mod estimate;
mod frequency;
mod property;
mod volume_discount;

pub use estimate::estimate_price;
pub use frequency::{FrequencyMultiplierResult, frequency_multiplier};
pub use property::{PropertyMultiplierResult, property_multiplier};
pub use volume_discount::{VolumeDiscountResult, volume_discount};
