//! Router configuration for the HTTP API.
//!
//! Sets up all routes under the configured base path together with CORS,
//! compression and tracing middleware.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let base = state.config.base_path.clone();

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        // Front end
        .route(&format!("{base}/"), get(handlers::home))
        .route(&format!("{base}/static/js/sun-chart.js"), get(handlers::sun_chart_js))
        // Solar calculations
        .route(&format!("{base}/api/sun-position"), get(handlers::sun_position))
        .route(&format!("{base}/api/sun-path"), get(handlers::sun_path))
        // City directory
        .route(&format!("{base}/api/countries"), get(handlers::list_countries))
        .route(&format!("{base}/api/cities"), get(handlers::list_cities));

    if !base.is_empty() {
        router = router.route(&base, get(handlers::redirect_home));
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
