//! Shutdown coordination for the gateway.

use tokio::sync::broadcast;

use crate::lifecycle::signals;

/// Coordinator for graceful shutdown.
///
/// Tests and embedding code call [`Shutdown::trigger`]; the binary relies on
/// OS signals alone.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for either an OS termination signal or a broadcast trigger.
///
/// A closed channel (every `Shutdown` dropped) is not treated as a trigger.
pub async fn wait_for_shutdown(mut rx: broadcast::Receiver<()>) {
    let triggered = async move {
        loop {
            match rx.recv().await {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => break,
                Err(broadcast::error::RecvError::Closed) => std::future::pending::<()>().await,
            }
        }
    };

    tokio::select! {
        _ = signals::terminate() => tracing::info!("Shutdown signal received"),
        _ = triggered => tracing::info!("Shutdown triggered"),
    }
}
