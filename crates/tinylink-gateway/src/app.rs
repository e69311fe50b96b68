use crate::auth::require_api_key;
use crate::handlers::{health_handler, redirect_handler, resolve_handler};
use crate::state::AppState;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Path of the resolve endpoint; short URLs live under it.
pub const RESOLVE_PATH: &str = "/s";

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(health_handler))
            .route("/health", get(health_handler))
            .route(
                RESOLVE_PATH,
                post(resolve_handler)
                    .route_layer(from_fn_with_state(state.clone(), require_api_key)),
            )
            .route("/s/{short_code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
