use telemetry_lab::config::environment::Config;
use telemetry_lab::services::metrics::MetricsRegistry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "telemetry_lab=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");

    // Duplicate counter registration is a programming error; fail before
    // serving any traffic.
    let metrics = MetricsRegistry::new().expect("Failed to initialize metrics registry");

    let app = telemetry_lab::create_app(metrics);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("Server running on http://{}", config.listen_addr);
    axum::serve(listener, app).await.expect("Server error");
}
