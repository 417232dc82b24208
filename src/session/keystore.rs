//! Keystore-change listener: reconnects the session when the user switches
//! account in the wallet extension.

use super::{SessionStatus, SessionStore};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

/// Listener guard. Dropping it aborts the listener; `join` waits for it to
/// stop on its own after shutdown.
pub struct KeystoreSubscription {
    handle: Option<JoinHandle<()>>,
}

impl KeystoreSubscription {
    pub fn is_active(&self) -> bool { self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false) }

    /// Waits for the listener to exit. A reconnect already running completes first.
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Keystore listener ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for KeystoreSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl SessionStore {
    /// Reconnects on every keystore event while the session is not Idle.
    /// Ends on shutdown or when the event source closes.
    pub fn watch_keystore(
        self: &Arc<Self>,
        mut events: broadcast::Receiver<()>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> KeystoreSubscription {
        let store = self.clone();
        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    event = events.recv() => match event {
                        Ok(()) | Err(RecvError::Lagged(_)) => {
                            if store.snapshot().status == SessionStatus::Idle {
                                tracing::debug!("Keystore changed while idle, ignoring");
                                continue;
                            }
                            tracing::info!("Keystore changed, reconnecting wallet");
                            store.reconnect().await;
                        }
                        Err(RecvError::Closed) => break,
                    },
                }
            }
            tracing::debug!("Keystore listener stopped");
        });
        KeystoreSubscription { handle: Some(handle) }
    }
}
