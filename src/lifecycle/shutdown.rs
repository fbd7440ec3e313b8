//! Shutdown coordination between a server and whoever owns it.

use tokio::sync::broadcast;

/// Owner side of the shutdown channel.
///
/// Dropping it counts as a trigger, so a server never outlives its handle.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

/// Server side of the shutdown channel.
pub struct ShutdownListener {
    rx: broadcast::Receiver<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A listener that resolves on the next trigger. Create it before
    /// triggering; earlier triggers are not replayed.
    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        // No listeners is fine
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownListener {
    /// Resolve once the owner triggers or drops its `Shutdown`.
    pub async fn wait(mut self) {
        match self.rx.recv().await {
            Ok(()) => tracing::info!("Shutdown requested"),
            Err(_) => tracing::info!("Shutdown handle dropped"),
        }
    }
}
