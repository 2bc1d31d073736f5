use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::MetricsRegistry;

/// Middleware to count completed HTTP requests.
///
/// Captures method and route before dispatch, lets the handler run to
/// completion, then records the final status against the registry. Runs
/// outside the panic-recovery layer, so a handler panic is observed here as
/// the 500 it was converted into.
pub async fn metrics_middleware(
    State(metrics): State<Arc<MetricsRegistry>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    // The matched route pattern, never the raw query string.
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    metrics.record_request(&path, &method, response.status());

    response
}
