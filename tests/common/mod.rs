use axum_test::TestServer;
use std::sync::Arc;

use telemetry_lab::services::metrics::MetricsRegistry;

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
    pub metrics: Arc<MetricsRegistry>,
}

#[allow(dead_code)]
impl TestContext {
    /// Builds an app with its own isolated metrics registry, so tests never
    /// observe each other's counts.
    pub fn new() -> Self {
        let metrics = MetricsRegistry::new().expect("Failed to initialize metrics registry");
        let app = telemetry_lab::create_app(metrics.clone());
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, metrics }
    }
}

/// Value of a counter series parsed out of the text exposition, matched by
/// metric name and label fragments regardless of label order. Series not yet
/// observed read as zero.
#[allow(dead_code)]
pub fn counter_value(exposition: &str, name: &str, labels: &[(&str, &str)]) -> f64 {
    exposition
        .lines()
        .filter(|line| line.starts_with(&format!("{name}{{")))
        .find(|line| {
            labels
                .iter()
                .all(|(k, v)| line.contains(&format!("{k}=\"{v}\"")))
        })
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0.0)
}
