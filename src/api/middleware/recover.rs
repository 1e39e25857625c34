use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::api::errors::ApiError;

/// Converts a panic raised while handling a request into the generic 500
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// payload is logged server-side only.
pub fn recover_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %message, "error recovered");

    ApiError::internal_server_error().into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn panic_payloads_become_internal_server_errors() {
        let payloads: Vec<Box<dyn Any + Send>> = vec![
            Box::new("static str"),
            Box::new(String::from("owned")),
            Box::new(42_u8),
        ];

        for payload in payloads {
            let response = recover_panic(payload);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
