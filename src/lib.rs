//! Quote Engine for a residential trash-valet service
//!
//! This crate provides the pricing estimator, service-area ZIP lookup, and
//! contact-form validation backing the customer-facing quote flow. Pricing
//! policy and serviceable ZIP ranges are versioned configuration, not code,
//! so regional or promotional variants become config instances.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service_area;
pub mod validation;
