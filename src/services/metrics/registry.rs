use axum::http::StatusCode;
use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Central metrics registry for the telemetry service.
///
/// Holds the two labeled request counters. Built once at startup and shared
/// by `Arc` with the middleware and the exposition endpoint; tests build
/// their own isolated instances.
pub struct MetricsRegistry {
    registry: Registry,

    pub http_requests_total: CounterVec,
    pub http_errors_total: CounterVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "The total number of HTTP requests"),
            &["path", "method", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_errors_total = CounterVec::new(
            Opts::new("http_errors_total", "The total number of HTTP errors"),
            &["path", "method", "status"],
        )?;
        registry.register(Box::new(http_errors_total.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_errors_total,
        }))
    }

    /// Record one completed request. Increments the request counter, and the
    /// error counter as well when the status is 4xx/5xx. Safe for unbounded
    /// concurrent callers.
    pub fn record_request(&self, path: &str, method: &str, status: StatusCode) {
        let status_label = status_text(status);
        self.http_requests_total
            .with_label_values(&[path, method, status_label])
            .inc();
        if status.is_client_error() || status.is_server_error() {
            self.http_errors_total
                .with_label_values(&[path, method, status_label])
                .inc();
        }
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Standard reason phrase for a status code, used as the `status` label
/// value. Codes without a canonical phrase map to the empty string.
pub fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}
