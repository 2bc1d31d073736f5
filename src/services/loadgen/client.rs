use std::time::Duration;
use tokio::sync::watch;

/// One synthetic client bound to a single target URL.
///
/// Loops request → sleep until the shared shutdown signal flips. Transport
/// errors are swallowed and the loop continues after the normal delay; there
/// is no backoff and no retry state.
pub async fn run_client(
    http: reqwest::Client,
    url: String,
    delay: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        if *shutdown.borrow() {
            break;
        }

        tracing::debug!(%url, "sending request");
        tokio::select! {
            result = http.get(&url).send() => {
                if let Err(e) = result {
                    tracing::debug!(%url, error = %e, "request failed");
                }
            }
            _ = shutdown.changed() => break,
        }

        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shutdown.changed() => break,
        }
    }
}
