//! HTTP request handlers for the Quote Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::estimate_price;
use crate::models::{ContactSubmission, QuoteRequest};
use crate::service_area::{find_service_area, parse_zip};
use crate::validation::validate_contact;

use super::request::QuoteApiRequest;
use super::response::{ApiError, ApiErrorResponse, ContactValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/service-area/:zip", get(service_area_handler))
        .route("/contact/validate", post(contact_handler))
        .with_state(state)
}

/// Converts an axum JSON rejection into an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /quote endpoint.
///
/// Accepts a quote request, selects the pricing policy for the quote date,
/// and returns the computed estimate with its pricing trace.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteApiRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let api_request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let quote_date = api_request
        .quote_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let request: QuoteRequest = api_request.into();

    let policy = match state.config().policy_for(quote_date) {
        Ok(policy) => policy,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                quote_date = %quote_date,
                "No pricing policy for quote date"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match estimate_price(&request, policy) {
        Ok(estimate) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                quote_id = %estimate.quote_id,
                unit_count = request.unit_count,
                monthly_price = estimate.monthly_price,
                duration_us = duration.as_micros(),
                "Quote estimated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(estimate),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote estimation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /service-area/:zip endpoint.
///
/// A ZIP outside every range is a 200 with a `not_serviceable` status;
/// only a malformed ZIP is a 400.
async fn service_area_handler(
    State(state): State<AppState>,
    Path(zip): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let zip = match parse_zip(&zip) {
        Ok(zip) => zip,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid ZIP input");
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let result = find_service_area(zip, state.config().service_area());
    info!(
        correlation_id = %correlation_id,
        zip = zip,
        serviceable = result.is_serviceable(),
        "Service-area lookup"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /contact/validate endpoint.
///
/// Returns every failing field rule together rather than stopping at the
/// first failure.
async fn contact_handler(
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match validate_contact(&submission) {
        Ok(()) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ContactValidationResponse { valid: true }),
        )
            .into_response(),
        Err(errors) => {
            info!(
                correlation_id = %correlation_id,
                failed_fields = errors.errors.len(),
                "Contact submission failed validation"
            );
            (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::contact_validation(errors)),
            )
                .into_response()
        }
    }
}
