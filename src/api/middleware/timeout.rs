use axum::BoxError;

use crate::api::errors::ApiError;

/// Converts a request-timeout or other layer failure into the generic 500
///
/// Used with `HandleErrorLayer` in front of `tower::timeout::TimeoutLayer`.
/// Dropping the timed-out handler future also drops its in-flight store call.
pub async fn handle_timeout(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::error!("request timed out");
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
    }

    ApiError::internal_server_error()
}
