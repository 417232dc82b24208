//! Remote chain client seam
//!
//! ```text
//! ClientFactory
//!     ├── connect(rpc)                         → QueryClient   (read-only)
//!     └── connect_with_signer(rpc, signer, gp) → SigningClient (QueryClient + tx)
//! ```
//!
//! Errors are whatever the remote side reported; callers flatten them into
//! [`WalletError::RemoteCallFailure`](crate::WalletError::RemoteCallFailure).

#[cfg(feature = "lcd")]
mod lcd;

#[cfg(feature = "lcd")]
pub use lcd::{LcdClient, LcdConfig};

use crate::chain::{Coin, Fee, GasPrice, TxResponse};
use crate::provider::OfflineSigner;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

#[async_trait]
pub trait QueryClient: Send + Sync {
    async fn balance(&self, address: &str, denom: &str) -> Result<Coin>;
    async fn query_contract_smart(&self, contract: &str, query: &Value) -> Result<Value>;
}

#[async_trait]
pub trait SigningClient: QueryClient {
    async fn send_tokens(
        &self,
        sender: &str,
        recipient: &str,
        amount: Vec<Coin>,
        fee: Fee,
        memo: &str,
    ) -> Result<TxResponse>;

    async fn execute(
        &self,
        sender: &str,
        contract: &str,
        msg: &Value,
        fee: Fee,
        funds: Vec<Coin>,
    ) -> Result<TxResponse>;

    /// Close the underlying connection. Must be safe to call more than once.
    fn disconnect(&self);
}

#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn connect(&self, rpc_endpoint: &str) -> Result<Arc<dyn QueryClient>>;

    async fn connect_with_signer(
        &self,
        rpc_endpoint: &str,
        signer: Arc<dyn OfflineSigner>,
        gas_price: GasPrice,
    ) -> Result<Arc<dyn SigningClient>>;
}
