//! Session - the single wallet connection of a page session
//!
//! # States
//!
//! ```text
//!            connect()                 ok
//!   Idle ───────────────► Connecting ──────► Connected
//!    ▲                        │                  │
//!    │                        │ err              │
//!    │                        ▼                  │
//!    └──── disconnect() ── Errored ◄─────────────┘ (disconnect() from either)
//! ```
//!
//! | Command | Effect |
//! |---------|--------|
//! | `Connect` | Start an attempt, or join the one in flight |
//! | `Disconnect` | Close the client, clear to Idle, void any in-flight attempt |
//! | `Reconnect` | Disconnect, then connect |
//! | `Toggle` | Connect when no address, disconnect otherwise |

mod keystore;
mod store;

pub use keystore::KeystoreSubscription;
pub use store::SessionStore;

use crate::client::SigningClient;
use crate::error::WalletError;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Connecting,
    Connected,
    Errored,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Connecting => "connecting",
            SessionStatus::Connected => "connected",
            SessionStatus::Errored => "errored",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Connect,
    Disconnect,
    Reconnect,
    Toggle,
}

/// Address and client are only ever set together, and only when Connected.
#[derive(Clone, Default)]
pub struct Session {
    pub status: SessionStatus,
    pub wallet_address: String,
    pub signing_client: Option<Arc<dyn SigningClient>>,
    pub error: Option<WalletError>,
}

impl Session {
    fn connecting() -> Self { Self { status: SessionStatus::Connecting, ..Default::default() } }

    fn connected(wallet_address: String, client: Arc<dyn SigningClient>) -> Self {
        Self { status: SessionStatus::Connected, wallet_address, signing_client: Some(client), error: None }
    }

    fn errored(error: WalletError) -> Self {
        Self { status: SessionStatus::Errored, error: Some(error), ..Default::default() }
    }

    pub fn loading(&self) -> bool { self.status == SessionStatus::Connecting }
    pub fn is_connected(&self) -> bool { self.status == SessionStatus::Connected }

    /// Address and client of a connected session.
    pub fn connection(&self) -> Option<(&str, &Arc<dyn SigningClient>)> {
        match (&self.signing_client, self.wallet_address.is_empty()) {
            (Some(client), false) => Some((&self.wallet_address, client)),
            _ => None,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("status", &self.status)
            .field("wallet_address", &self.wallet_address)
            .field("signing_client", &self.signing_client.as_ref().map(|_| "<client>"))
            .field("error", &self.error)
            .finish()
    }
}
