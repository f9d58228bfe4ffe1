//! Configuration types for the Quote Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The historically
//! inlined pricing constants and ZIP tables live here as data, so each
//! observed variant of the pricing script is a config instance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::PropertyType;

/// Metadata about the service region.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceMetadata {
    /// Short code for the service region (e.g., "FL-CENTRAL").
    pub code: String,
    /// The human-readable name of the service.
    pub name: String,
    /// The version or effective date of this configuration set.
    pub version: String,
    /// URL of the marketing site this configuration backs.
    pub source_url: String,
}

/// One volume discount tier.
///
/// Tiers are evaluated highest `min_units` first; the first tier at or
/// below the requested unit count supplies the discount factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VolumeDiscountTier {
    /// Minimum unit count (inclusive) for this tier to apply.
    pub min_units: u32,
    /// The price factor applied at this tier (e.g., 0.90 for 10% off).
    pub factor: Decimal,
}

/// A pricing policy effective from a specific date.
///
/// A policy holds every constant the estimator consumes. The multiplier
/// tables must cover every frequency and property type the UI can submit;
/// an uncovered key surfaces as a typed error at calculation time.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingPolicy {
    /// The date from which this policy applies.
    pub effective_date: NaiveDate,
    /// Base monthly price per unit, in dollars.
    pub base_price_per_unit: Decimal,
    /// Map of collection nights per week to price multiplier.
    pub frequency_multipliers: HashMap<u8, Decimal>,
    /// Map of property type to price multiplier.
    pub property_multipliers: HashMap<PropertyType, Decimal>,
    /// Volume discount tiers; empty means no volume discount.
    #[serde(default)]
    pub volume_discounts: Vec<VolumeDiscountTier>,
}

/// A serviceable ZIP code range.
#[derive(Debug, Clone, Deserialize)]
pub struct ZipRange {
    /// Lowest ZIP in the range (inclusive).
    pub min: u32,
    /// Highest ZIP in the range (inclusive).
    pub max: u32,
    /// City name for the range, when the range is city-granular.
    #[serde(default)]
    pub city: Option<String>,
}

/// Service-area configuration from service_area.yaml.
///
/// Ranges are an ordered list and may overlap; lookup returns the first
/// match in list order.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAreaConfig {
    /// The ordered serviceable ZIP ranges.
    pub areas: Vec<ZipRange>,
}

/// The complete engine configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from a configuration
/// directory.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Service metadata.
    metadata: ServiceMetadata,
    /// Pricing policies by effective date (sorted oldest first).
    policies: Vec<PricingPolicy>,
    /// Serviceable ZIP ranges.
    service_area: ServiceAreaConfig,
}

impl QuoteConfig {
    /// Creates a new QuoteConfig from its component parts.
    ///
    /// Policies are sorted by effective date, and each policy's discount
    /// tiers are sorted by threshold descending so tier evaluation can scan
    /// front to back.
    pub fn new(
        metadata: ServiceMetadata,
        policies: Vec<PricingPolicy>,
        service_area: ServiceAreaConfig,
    ) -> Self {
        let mut sorted_policies = policies;
        sorted_policies.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        for policy in &mut sorted_policies {
            policy
                .volume_discounts
                .sort_by(|a, b| b.min_units.cmp(&a.min_units));
        }
        Self {
            metadata,
            policies: sorted_policies,
            service_area,
        }
    }

    /// Returns the service metadata.
    pub fn metadata(&self) -> &ServiceMetadata {
        &self.metadata
    }

    /// Returns all pricing policies, oldest effective date first.
    pub fn policies(&self) -> &[PricingPolicy] {
        &self.policies
    }

    /// Returns the service-area configuration.
    pub fn service_area(&self) -> &ServiceAreaConfig {
        &self.service_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn metadata() -> ServiceMetadata {
        ServiceMetadata {
            code: "FL-CENTRAL".to_string(),
            name: "Central Florida Trash Valet".to_string(),
            version: "2025-07-01".to_string(),
            source_url: "https://example.com".to_string(),
        }
    }

    fn policy(effective: NaiveDate, tiers: Vec<VolumeDiscountTier>) -> PricingPolicy {
        PricingPolicy {
            effective_date: effective,
            base_price_per_unit: dec("10.00"),
            frequency_multipliers: HashMap::from([(5, dec("1.00"))]),
            property_multipliers: HashMap::from([(PropertyType::Apartment, dec("1.00"))]),
            volume_discounts: tiers,
        }
    }

    #[test]
    fn test_policies_sorted_by_effective_date() {
        let newer = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let older = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let config = QuoteConfig::new(
            metadata(),
            vec![policy(newer, vec![]), policy(older, vec![])],
            ServiceAreaConfig { areas: vec![] },
        );

        assert_eq!(config.policies()[0].effective_date, older);
        assert_eq!(config.policies()[1].effective_date, newer);
    }

    #[test]
    fn test_discount_tiers_sorted_highest_threshold_first() {
        let effective = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let tiers = vec![
            VolumeDiscountTier {
                min_units: 50,
                factor: dec("0.95"),
            },
            VolumeDiscountTier {
                min_units: 200,
                factor: dec("0.85"),
            },
            VolumeDiscountTier {
                min_units: 100,
                factor: dec("0.90"),
            },
        ];
        let config = QuoteConfig::new(
            metadata(),
            vec![policy(effective, tiers)],
            ServiceAreaConfig { areas: vec![] },
        );

        let sorted: Vec<u32> = config.policies()[0]
            .volume_discounts
            .iter()
            .map(|t| t.min_units)
            .collect();
        assert_eq!(sorted, vec![200, 100, 50]);
    }

    #[test]
    fn test_yaml_policy_deserializes_numeric_frequency_keys() {
        let yaml = r#"
effective_date: 2025-01-01
base_price_per_unit: "10.00"
frequency_multipliers:
  3: "0.90"
  4: "0.80"
  5: "1.00"
  6: "1.15"
  7: "1.20"
property_multipliers:
  apartment: "1.00"
  condo: "1.05"
  townhome: "1.10"
  hoa: "1.20"
"#;
        let policy: PricingPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.base_price_per_unit, dec("10.00"));
        assert_eq!(policy.frequency_multipliers[&4], dec("0.80"));
        assert_eq!(
            policy.property_multipliers[&PropertyType::Hoa],
            dec("1.20")
        );
        assert!(policy.volume_discounts.is_empty());
    }

    #[test]
    fn test_yaml_zip_range_city_is_optional() {
        let yaml = r#"
areas:
  - min: 32801
    max: 32899
    city: Orlando
  - min: 32000
    max: 34999
"#;
        let area: ServiceAreaConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(area.areas[0].city.as_deref(), Some("Orlando"));
        assert!(area.areas[1].city.is_none());
    }
}
