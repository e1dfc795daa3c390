use tokio::time::{interval, Duration};
use tracing::info;
use veranda_store::{ChangeEvent, ChangeFeed};

/// Polling fallback for the dashboard: publish a synthetic refresh event at a
/// fixed interval so subscribers re-pull a snapshot even when a push was
/// missed. Idempotent for consumers, who overwrite local state either way.
pub async fn start_refresh_worker(changes: ChangeFeed, period_seconds: u64) {
    info!(
        "Dashboard refresh worker started, period {}s",
        period_seconds
    );

    let mut ticker = interval(Duration::from_secs(period_seconds));
    // The first tick fires immediately; skip it so the interval is honest.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        changes.publish(ChangeEvent::Refresh);
    }
}
