use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::errors::{Error, ErrorKind};

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json; charset=UTF-8";

const INTERNAL_TITLE: &str = "internal server error";
const INTERNAL_DETAIL: &str =
    "the server encountered an unexpected condition that prevented it from fulfilling the request";

/// Problem-detail body returned for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    pub title: String,
    pub detail: String,
}

/// API error type with HTTP status code and problem details
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub problem: ProblemDetails,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            problem: ProblemDetails {
                title: title.into(),
                detail: detail.into(),
            },
        }
    }

    /// Creates the generic 500 error; internal detail is never exposed
    pub fn internal_server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_TITLE,
            INTERNAL_DETAIL,
        )
    }
}

/// Maps an error kind to its response status; `None` means unclassified
pub fn status_for(kind: ErrorKind) -> Option<StatusCode> {
    match kind {
        ErrorKind::InvalidBody => Some(StatusCode::BAD_REQUEST),
        ErrorKind::DuplicateKey => Some(StatusCode::BAD_REQUEST),
        ErrorKind::InvalidArgument => Some(StatusCode::BAD_REQUEST),
        ErrorKind::NotFound => Some(StatusCode::NOT_FOUND),
        ErrorKind::Unknown => None,
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match status_for(err.kind()) {
            Some(status) => Self::new(status, err.kind().to_string(), err.message()),
            None => {
                tracing::error!(error = %err, "unexpected error handling request");
                Self::internal_server_error()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.problem)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}
