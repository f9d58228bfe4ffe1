//! Property-based tests for the pricing estimator.
//!
//! Over the whole UI-reachable input space (1-500 units, 3-7 nights/week,
//! all property types) the estimator must succeed, stay non-negative, and
//! be a pure function of its inputs.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use quote_engine::calculation::estimate_price;
use quote_engine::config::{PricingPolicy, VolumeDiscountTier};
use quote_engine::models::{PropertyType, QuoteRequest};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn shipped_policy(with_discounts: bool) -> PricingPolicy {
    let volume_discounts = if with_discounts {
        vec![
            VolumeDiscountTier {
                min_units: 200,
                factor: dec("0.85"),
            },
            VolumeDiscountTier {
                min_units: 100,
                factor: dec("0.90"),
            },
            VolumeDiscountTier {
                min_units: 50,
                factor: dec("0.95"),
            },
        ]
    } else {
        vec![]
    };

    PricingPolicy {
        effective_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        base_price_per_unit: if with_discounts {
            dec("12.50")
        } else {
            dec("10.00")
        },
        frequency_multipliers: HashMap::from([
            (3, dec("0.90")),
            (4, dec("0.80")),
            (5, dec("1.00")),
            (6, dec("1.15")),
            (7, dec("1.20")),
        ]),
        property_multipliers: HashMap::from([
            (PropertyType::Apartment, dec("1.00")),
            (PropertyType::Condo, dec("1.05")),
            (PropertyType::Townhome, dec("1.10")),
            (PropertyType::Hoa, dec("1.20")),
        ]),
        volume_discounts,
    }
}

fn any_property_type() -> impl Strategy<Value = PropertyType> {
    prop_oneof![
        Just(PropertyType::Apartment),
        Just(PropertyType::Condo),
        Just(PropertyType::Townhome),
        Just(PropertyType::Hoa),
    ]
}

proptest! {
    #[test]
    fn estimator_succeeds_over_ui_input_space(
        unit_count in 1u32..=500,
        nights in 3u8..=7,
        property_type in any_property_type(),
        with_discounts in any::<bool>(),
    ) {
        let policy = shipped_policy(with_discounts);
        let request = QuoteRequest {
            unit_count,
            nights_per_week: nights,
            property_type,
        };

        let estimate = estimate_price(&request, &policy).unwrap();

        // An integer dollar amount, and never below zero even at the
        // deepest discount.
        prop_assert!(estimate.exact_price >= Decimal::ZERO);
        // Rounded price stays within half a dollar of the exact price.
        let rounded = Decimal::from(estimate.monthly_price);
        prop_assert!((rounded - estimate.exact_price).abs() <= dec("0.5"));
    }

    #[test]
    fn estimator_is_idempotent(
        unit_count in 1u32..=500,
        nights in 3u8..=7,
        property_type in any_property_type(),
    ) {
        let policy = shipped_policy(true);
        let request = QuoteRequest {
            unit_count,
            nights_per_week: nights,
            property_type,
        };

        let first = estimate_price(&request, &policy).unwrap();
        let second = estimate_price(&request, &policy).unwrap();

        prop_assert_eq!(first.monthly_price, second.monthly_price);
        prop_assert_eq!(first.exact_price, second.exact_price);
    }

    #[test]
    fn discount_never_raises_the_price(
        unit_count in 1u32..=500,
        nights in 3u8..=7,
        property_type in any_property_type(),
    ) {
        let discounted = shipped_policy(true);
        let mut flat = shipped_policy(true);
        flat.volume_discounts.clear();

        let request = QuoteRequest {
            unit_count,
            nights_per_week: nights,
            property_type,
        };

        let with_discount = estimate_price(&request, &discounted).unwrap();
        let without_discount = estimate_price(&request, &flat).unwrap();

        prop_assert!(with_discount.monthly_price <= without_discount.monthly_price);
    }

    #[test]
    fn more_units_never_cost_less_per_tier_band(
        unit_count in 1u32..=499,
        nights in 3u8..=7,
        property_type in any_property_type(),
    ) {
        // Within the no-discount policy the price is strictly monotone in
        // unit count.
        let policy = shipped_policy(false);

        let smaller = estimate_price(
            &QuoteRequest { unit_count, nights_per_week: nights, property_type },
            &policy,
        )
        .unwrap();
        let larger = estimate_price(
            &QuoteRequest { unit_count: unit_count + 1, nights_per_week: nights, property_type },
            &policy,
        )
        .unwrap();

        prop_assert!(larger.exact_price > smaller.exact_price);
    }
}
