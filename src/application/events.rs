//! In-process domain event dispatch
//!
//! `FriendsMet` events have no persisted lifecycle; they are pushed over
//! an mpsc channel to a background consumer that records them. Losing the
//! consumer costs the notification, never the request.

use crate::domain::DomainEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Sending half handed to request handlers.
#[derive(Debug, Clone)]
pub struct EventPublisher {
    tx: mpsc::UnboundedSender<DomainEvent>,
}

impl EventPublisher {
    /// Create the channel pair. The receiver is handed to
    /// [`spawn_consumer`] in production and read directly in tests.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DomainEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn publish(&self, event: DomainEvent) {
        if self.tx.send(event).is_err() {
            warn!("event consumer is gone; notification dropped");
        }
    }
}

/// Consume events until every publisher is dropped.
pub fn spawn_consumer(mut rx: mpsc::UnboundedReceiver<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                DomainEvent::FriendsMet { friends } => {
                    info!(?friends, "met friends on a walk");
                }
            }
        }
    })
}
