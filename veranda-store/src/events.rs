use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

/// The three logical collections the dashboard watches.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Rooms,
    Reservations,
    Contacts,
}

/// A best-effort push notification to live dashboard subscribers. Consumers
/// treat every event as "re-fetch the full snapshot", never as a delta.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    Changed { collection: Collection },
    /// Synthetic tick from the refresh worker, the polling fallback against
    /// missed push events.
    Refresh,
}

/// In-process fan-out of change events to SSE subscribers.
#[derive(Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: ChangeEvent) {
        match self.tx.send(event) {
            Ok(n) => debug!("Change event {:?} delivered to {} subscribers", event, n),
            Err(_) => debug!("Change event {:?} had no subscribers", event),
        }
    }

    pub fn changed(&self, collection: Collection) {
        self.publish(ChangeEvent::Changed { collection });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_published_events() {
        let feed = ChangeFeed::new(16);
        let mut rx = feed.subscribe();

        feed.changed(Collection::Reservations);
        feed.publish(ChangeEvent::Refresh);

        assert_eq!(
            rx.recv().await.unwrap(),
            ChangeEvent::Changed {
                collection: Collection::Reservations
            }
        );
        assert_eq!(rx.recv().await.unwrap(), ChangeEvent::Refresh);
    }

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let feed = ChangeFeed::new(16);
        feed.changed(Collection::Contacts);
    }
}
