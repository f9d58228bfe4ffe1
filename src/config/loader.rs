//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{QuoteError, QuoteResult};

use super::types::{PricingPolicy, QuoteConfig, ServiceAreaConfig, ServiceMetadata};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query pricing policies and the service area.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fl-central/
/// ├── service.yaml        # Service metadata
/// ├── service_area.yaml   # Serviceable ZIP ranges
/// └── policies/
///     ├── 2025-01-01.yaml # Pricing policy effective from this date
///     └── 2025-07-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use quote_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/fl-central").unwrap();
///
/// // Get the pricing policy for a quote date
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let policy = loader.policy_for(date).unwrap();
/// println!("Base price per unit: ${}", policy.base_price_per_unit);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: QuoteConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/fl-central")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use quote_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/fl-central")?;
    /// # Ok::<(), quote_engine::error::QuoteError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> QuoteResult<Self> {
        let path = path.as_ref();

        // Load service.yaml
        let service_path = path.join("service.yaml");
        let metadata = Self::load_yaml::<ServiceMetadata>(&service_path)?;

        // Load service_area.yaml
        let area_path = path.join("service_area.yaml");
        let service_area = Self::load_yaml::<ServiceAreaConfig>(&area_path)?;

        // Load all policy files from the policies directory
        let policies_dir = path.join("policies");
        let policies = Self::load_policies(&policies_dir)?;

        let config = QuoteConfig::new(metadata, policies, service_area);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> QuoteResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| QuoteError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| QuoteError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all pricing policy files from the policies directory.
    fn load_policies(policies_dir: &Path) -> QuoteResult<Vec<PricingPolicy>> {
        let policies_dir_str = policies_dir.display().to_string();

        if !policies_dir.exists() {
            return Err(QuoteError::ConfigNotFound {
                path: policies_dir_str,
            });
        }

        let entries = fs::read_dir(policies_dir).map_err(|_| QuoteError::ConfigNotFound {
            path: policies_dir_str.clone(),
        })?;

        let mut policies = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| QuoteError::ConfigNotFound {
                path: policies_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let policy = Self::load_yaml::<PricingPolicy>(&path)?;
                policies.push(policy);
            }
        }

        if policies.is_empty() {
            return Err(QuoteError::ConfigNotFound {
                path: format!("{} (no policy files found)", policies_dir_str),
            });
        }

        Ok(policies)
    }

    /// Returns the underlying quote configuration.
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Returns the service metadata.
    pub fn metadata(&self) -> &ServiceMetadata {
        self.config.metadata()
    }

    /// Returns the service-area configuration.
    pub fn service_area(&self) -> &ServiceAreaConfig {
        self.config.service_area()
    }

    /// Gets the pricing policy applicable on a given date.
    ///
    /// The method finds the most recent policy whose effective date is on or
    /// before the given date.
    ///
    /// # Arguments
    ///
    /// * `date` - The date for which to select a policy
    ///
    /// # Returns
    ///
    /// Returns the policy if one is effective, or `PolicyNotFound` if the
    /// date precedes every configured policy.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use quote_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/fl-central")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    /// let policy = loader.policy_for(date)?;
    /// println!("Base price: ${}", policy.base_price_per_unit);
    /// # Ok::<(), quote_engine::error::QuoteError>(())
    /// ```
    pub fn policy_for(&self, date: NaiveDate) -> QuoteResult<&PricingPolicy> {
        self.config
            .policies()
            .iter()
            .rfind(|p| p.effective_date <= date)
            .ok_or(QuoteError::PolicyNotFound { date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/fl-central"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "FL-CENTRAL");
        assert_eq!(loader.metadata().name, "Central Florida Trash Valet");
    }

    #[test]
    fn test_policy_for_picks_most_recent_effective() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let policy = loader.policy_for(date).unwrap();

        assert_eq!(
            policy.effective_date,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
        assert_eq!(policy.base_price_per_unit, dec("12.50"));
    }

    #[test]
    fn test_policy_for_earlier_date_uses_older_policy() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let policy = loader.policy_for(date).unwrap();

        assert_eq!(
            policy.effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(policy.base_price_per_unit, dec("10.00"));
        assert!(policy.volume_discounts.is_empty());
    }

    #[test]
    fn test_policy_for_date_before_all_policies_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let result = loader.policy_for(date);

        assert!(result.is_err());
        match result {
            Err(QuoteError::PolicyNotFound { date: d }) => {
                assert_eq!(d, date);
            }
            _ => panic!("Expected PolicyNotFound error"),
        }
    }

    #[test]
    fn test_multiplier_tables_cover_ui_values() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        for policy in loader.config().policies() {
            for nights in 3..=7u8 {
                assert!(
                    policy.frequency_multipliers.contains_key(&nights),
                    "policy {} missing frequency {}",
                    policy.effective_date,
                    nights
                );
            }
            for property_type in PropertyType::ALL {
                assert!(
                    policy.property_multipliers.contains_key(&property_type),
                    "policy {} missing property type {}",
                    policy.effective_date,
                    property_type
                );
            }
        }
    }

    #[test]
    fn test_service_area_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let areas = &loader.service_area().areas;
        assert!(!areas.is_empty());
        assert_eq!(areas[0].city.as_deref(), Some("Orlando"));
        assert_eq!(areas[0].min, 32801);
        assert_eq!(areas[0].max, 32899);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(QuoteError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_discount_tiers_loaded_for_current_policy() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let policy = loader.policy_for(date).unwrap();

        let thresholds: Vec<u32> = policy.volume_discounts.iter().map(|t| t.min_units).collect();
        assert_eq!(thresholds, vec![200, 100, 50]);
        assert_eq!(policy.volume_discounts[0].factor, dec("0.85"));
    }
}
