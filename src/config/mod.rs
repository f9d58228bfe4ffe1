//! Configuration loading and management for the Quote Engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files, including service metadata, dated pricing policies, and the
//! serviceable ZIP ranges.
//!
//! # Example
//!
//! ```no_run
//! use quote_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fl-central").unwrap();
//! println!("Loaded service: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PricingPolicy, QuoteConfig, ServiceAreaConfig, ServiceMetadata, VolumeDiscountTier, ZipRange,
};
