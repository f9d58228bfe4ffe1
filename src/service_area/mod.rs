//! Service-area ZIP lookup for the Quote Engine.
//!
//! This module determines whether a 5-digit ZIP code falls inside any of
//! the configured serviceable ranges.

mod lookup;

pub use lookup::{ServiceAreaResult, find_service_area, parse_zip};
