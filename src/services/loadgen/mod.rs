pub mod client;
pub mod config;
pub mod scenario;

pub use config::LoadConfig;
pub use scenario::{default_classes, TrafficClass};

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Spawns the synthetic clients for every configured traffic class.
///
/// Each client is an independent tokio task reading the shared shutdown
/// signal; no client is cancelled individually. One `reqwest::Client` is
/// shared across all of them for connection pooling.
pub struct LoadGenerator {
    http: reqwest::Client,
    base_url: String,
    clients_per_url: usize,
    classes: Vec<TrafficClass>,
}

impl LoadGenerator {
    pub fn new(base_url: String, clients_per_url: usize, classes: Vec<TrafficClass>) -> Self {
        // No request timeout: a hung request stalls one client, never the run.
        Self {
            http: reqwest::Client::new(),
            base_url,
            clients_per_url,
            classes,
        }
    }

    /// Spawn every client task and hand back their join handles. Total tasks
    /// = URLs per class x clients_per_url, summed over classes.
    pub fn spawn(&self, shutdown: watch::Receiver<bool>) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::new();

        for class in &self.classes {
            let urls = class.urls(&self.base_url);
            for url in &urls {
                for _ in 0..self.clients_per_url {
                    handles.push(tokio::spawn(client::run_client(
                        self.http.clone(),
                        url.clone(),
                        class.delay,
                        shutdown.clone(),
                    )));
                }
            }
            tracing::info!(
                class = class.name,
                urls = urls.len(),
                clients_per_url = self.clients_per_url,
                delay_secs = class.delay.as_secs(),
                "traffic class started"
            );
        }

        handles
    }
}
