//! Wallet and page-flow failures. Stored in the session and rendered as-is.

use crate::config::ConfigError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum WalletError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Wallet provider not found")]
    ProviderUnavailable,
    #[error("Failed to suggest the chain: {0}")]
    ChainRegistrationRejected(String),
    #[error("Wallet provider error: {0}")]
    Provider(String),
    #[error("Wallet has no accounts")]
    NoAccounts,
    #[error("{0}")]
    RemoteCallFailure(String),
    #[error("Wallet not connected")]
    NotConnected,
    #[error("Invalid transfer: {0}")]
    InvalidTransfer(String),
}

pub type WalletResult<T> = Result<T, WalletError>;

impl WalletError {
    pub fn provider(err: anyhow::Error) -> Self { WalletError::Provider(format!("{:#}", err)) }
    pub fn remote(err: anyhow::Error) -> Self { WalletError::RemoteCallFailure(format!("{:#}", err)) }
    pub fn rejected(err: anyhow::Error) -> Self { WalletError::ChainRegistrationRejected(format!("{:#}", err)) }

    /// Serialized detail for plain-text rendering.
    pub fn detail(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}
