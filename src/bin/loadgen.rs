use telemetry_lab::services::loadgen::{default_classes, LoadConfig, LoadGenerator};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loadgen=info,telemetry_lab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LoadConfig::from_env().expect("Failed to load load generator configuration");

    let (stop_tx, stop_rx) = watch::channel(false);
    let generator = LoadGenerator::new(
        config.base_url.clone(),
        config.clients_per_url,
        default_classes(),
    );
    let handles = generator.spawn(stop_rx);

    tracing::info!(
        target = %config.base_url,
        clients = handles.len(),
        "Simulating requests... Press Ctrl+C to stop."
    );

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for interrupt signal");

    tracing::info!("Shutting down...");
    // Signal every client; in-flight requests and sleeps are abandoned, not
    // drained, since clients hold no resources worth flushing.
    let _ = stop_tx.send(true);
}
