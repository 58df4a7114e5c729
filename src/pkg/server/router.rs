use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, patch, post};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    let admin = from_fn_with_state(state.clone(), authn::require_admin);
    Router::new()
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs", post(handlers::jobs::create).route_layer(admin.clone()))
        .route("/jobs/:id", get(handlers::jobs::retrieve))
        .route("/jobs/:id", patch(handlers::jobs::update).route_layer(admin.clone()))
        .route("/jobs/:id", delete(handlers::jobs::remove).route_layer(admin))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
