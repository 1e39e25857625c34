// API layer module (HTTP adapter)
// Translates requests into service calls and classified errors into responses

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    routing::{get, post},
    Router,
};
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{info, teams};
pub use state::AppState;

/// Builds the application router with request timeout, panic recovery,
/// tracing and CORS
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(info::info))
        .route("/teams", post(teams::create_team).get(teams::get_teams))
        .route(
            "/teams/:id",
            get(teams::get_team).delete(teams::delete_team),
        )
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(middleware::handle_timeout))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(CatchPanicLayer::custom(middleware::recover_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
