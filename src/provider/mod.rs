//! Wallet provider gateway
//!
//! # Architecture
//!
//! ```text
//! PageEnvironment (injected slot, load signal, keystore events)
//!     │
//!     ▼
//! ProviderGateway ──► ProviderCache (owned, reset in tests)
//!     │
//!     ├── acquire_provider() → Arc<dyn WalletProvider>
//!     └── register_chain()   → provider.suggest_chain(ChainInfo)
//! ```

mod gateway;

pub use gateway::{ProviderCache, ProviderGateway};

use crate::chain::{AccountData, ChainInfo};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Browser-injected wallet extension.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Grant this page access to `chain_id`. May prompt the user.
    async fn enable(&self, chain_id: &str) -> Result<()>;
    async fn offline_signer(&self, chain_id: &str) -> Result<Arc<dyn OfflineSigner>>;
    /// Resolves without prompting when the chain is already known.
    async fn suggest_chain(&self, info: &ChainInfo) -> Result<()>;
}

#[async_trait]
pub trait OfflineSigner: Send + Sync {
    async fn accounts(&self) -> Result<Vec<AccountData>>;
}

/// The page the provider is injected into.
#[async_trait]
pub trait PageEnvironment: Send + Sync {
    /// Contents of the well-known provider slot right now.
    fn injected_provider(&self) -> Option<Arc<dyn WalletProvider>>;
    fn is_loaded(&self) -> bool;
    /// Resolves once the page reports load completion.
    async fn wait_for_load(&self);
    /// Fires whenever the user switches account or keystore in the extension.
    fn keystore_changes(&self) -> broadcast::Receiver<()>;
}
