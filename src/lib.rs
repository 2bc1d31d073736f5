pub mod config;
pub mod modules;
pub mod services;

use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use modules::api::api_routes;
use modules::metrics::metrics_routes;
use services::metrics::{metrics_middleware, MetricsRegistry};

/// Assemble the application router.
///
/// The business routes are wrapped by the instrumentation middleware, with
/// panic recovery layered inside it so a crashed handler is observed as the
/// 500 it becomes. `/metrics` is mounted outside the instrumented routes so
/// scrapes do not count themselves.
pub fn create_app(metrics: Arc<MetricsRegistry>) -> Router {
    let instrumented = api_routes()
        .route_layer(CatchPanicLayer::new())
        .route_layer(middleware::from_fn_with_state(
            metrics.clone(),
            metrics_middleware,
        ));

    Router::new()
        .merge(metrics_routes(metrics))
        .merge(instrumented)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
