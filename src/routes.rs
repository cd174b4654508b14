use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::dashboard_get))
        .route("/controls/:control_id", post(handlers::dashboard::control_post))
        .route("/refresh", post(handlers::dashboard::refresh_post))
        .route("/panels/:deploy_method", get(handlers::dashboard::panel_get))
        .route("/healthz", get(handlers::dashboard::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
