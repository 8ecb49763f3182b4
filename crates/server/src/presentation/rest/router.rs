use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::WardenService;

/// Application state shared across handlers
pub struct AppState {
    pub service: Arc<WardenService>,
}

impl AppState {
    pub fn new(service: Arc<WardenService>) -> Self {
        AppState { service }
    }
}

/// Create the REST API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Symbols
        .route("/api/v1/symbols", get(handlers::list_symbols))
        .route(
            "/api/v1/symbols/{symbol}/prepare",
            post(handlers::prepare_symbol),
        )
        .route(
            "/api/v1/symbols/{symbol}/start",
            post(handlers::start_symbol),
        )
        .route("/api/v1/symbols/{symbol}/stop", post(handlers::stop_symbol))
        .route(
            "/api/v1/symbols/{symbol}/suspend",
            post(handlers::suspend_symbol),
        )
        .route(
            "/api/v1/symbols/{symbol}/resume",
            post(handlers::resume_symbol),
        )
        .route("/api/v1/balances", get(handlers::get_balances))
        .route(
            "/api/v1/limits",
            get(handlers::get_limits).put(handlers::set_limits),
        )
        // Deals
        .route("/api/v1/deals/active", get(handlers::list_active_deals))
        .route(
            "/api/v1/deals/potential",
            get(handlers::list_potential_deals),
        )
        .route("/api/v1/deals/close", post(handlers::close_deals))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
