// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::warn;

use crate::utils::response_format::ResponseFormat;

/// Maps layer errors to an HTTP status wrapped in the JSON envelope
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    let status: StatusCode = classify_error(&*err);
    let wrapped: ResponseFormat = ResponseFormat::new(status).message(describe(status, &*err));

    match serde_json::to_string_pretty(&wrapped) {
        Ok(spaced_json) => warn!(%status, "Request failed in middleware:\n{}", spaced_json),
        Err(json_err) => warn!(%status, "Request failed in middleware: {} ({:?})", err, json_err),
    }

    wrapped
}

/// 408 for timeouts anywhere in the chain, 500 otherwise
pub fn classify_error(err: &(dyn Error + 'static)) -> StatusCode {
    if err.is::<Elapsed>() || find_cause::<Elapsed>(err).is_some() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    StatusCode::INTERNAL_SERVER_ERROR
}

fn describe(status: StatusCode, err: &dyn Error) -> String {
    match status {
        StatusCode::REQUEST_TIMEOUT => format!("Request timeout: {}", err),
        _ => format!("Unhandled internal error: {}", err),
    }
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
