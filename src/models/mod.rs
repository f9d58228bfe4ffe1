//! Core data models for the Quote Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contact;
mod estimate;
mod quote;

pub use contact::ContactSubmission;
pub use estimate::{PricingStep, QuoteEstimate};
pub use quote::{PropertyType, QuoteRequest};
