//! HTTP API module for the Quote Engine.
//!
//! This module provides the REST API endpoints for price estimation,
//! service-area lookup, and contact validation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteApiRequest;
pub use response::{ApiError, ContactValidationResponse};
pub use state::AppState;
