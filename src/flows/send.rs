//! Send funds to a recipient, then refresh the balance.

use super::balance::{BalanceFlow, BalanceView};
use crate::chain::{Coin, Fee, TxResponse};
use crate::config::{Config, ConfigKey};
use crate::conversion::{display_denom, to_minimal_units, Amount};
use crate::error::{WalletError, WalletResult};
use crate::session::SessionStore;
use std::sync::Arc;

/// What the user typed on the send page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub recipient: String,
    /// Display units, as entered.
    pub amount: String,
}

/// A transfer ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTransfer {
    pub recipient: String,
    pub amount: Vec<Coin>,
    pub fee: Fee,
}

impl TransferRequest {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self { recipient: recipient.into(), amount: amount.into() }
    }

    pub fn resolve(&self, denom: &str, bech32_prefix: &str, fee: Fee) -> WalletResult<ResolvedTransfer> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() {
            return Err(WalletError::InvalidTransfer("recipient address is empty".into()));
        }
        if !recipient.starts_with(&format!("{bech32_prefix}1")) {
            return Err(WalletError::InvalidTransfer(format!("recipient is not a {bech32_prefix} address")));
        }

        let display = self.amount.as_f64();
        if !display.is_finite() || display <= 0.0 {
            return Err(WalletError::InvalidTransfer(format!("amount must be positive, got '{}'", self.amount)));
        }
        let minimal = to_minimal_units(&self.amount);
        if minimal == "0" {
            return Err(WalletError::InvalidTransfer(format!("amount '{}' is below one {}", self.amount, denom)));
        }

        Ok(ResolvedTransfer {
            recipient: recipient.to_string(),
            amount: vec![Coin::new(minimal, denom)],
            fee,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SendReceipt {
    pub message: String,
    pub tx: TxResponse,
    /// Balance reloaded after the acknowledgment.
    pub balance: WalletResult<BalanceView>,
}

#[derive(Clone)]
pub struct SendFlow {
    session: Arc<SessionStore>,
    balance: BalanceFlow,
    denom: String,
    bech32_prefix: String,
    fee: Fee,
}

impl SendFlow {
    pub fn new(session: Arc<SessionStore>, config: &Config) -> WalletResult<Self> {
        let denom = config.get(ConfigKey::CoinDenom)?.to_string();
        Ok(Self {
            balance: BalanceFlow::new(session.clone(), config)?,
            session,
            bech32_prefix: config.get(ConfigKey::Bech32Prefix)?.to_string(),
            fee: Fee::default_execute(&denom),
            denom,
        })
    }

    /// Let the client estimate the fee instead of the fixed envelope.
    pub fn with_auto_fee(mut self) -> Self { self.fee = Fee::Auto; self }

    pub async fn send(&self, request: &TransferRequest) -> WalletResult<SendReceipt> {
        let session = self.session.snapshot();
        let (sender, client) = session.connection().ok_or(WalletError::NotConnected)?;
        let transfer = request.resolve(&self.denom, &self.bech32_prefix, self.fee.clone())?;

        let tx = client
            .send_tokens(sender, &transfer.recipient, transfer.amount, transfer.fee, "")
            .await
            .map_err(|e| {
                tracing::warn!("Transfer to {} failed: {:#}", transfer.recipient, e);
                WalletError::remote(e)
            })?;
        tracing::info!("Sent {} {} to {} ({})", request.amount.trim(), self.denom, transfer.recipient, tx.transaction_hash);

        let message = format!(
            "Success! Sent {} {} to {}.",
            request.amount.trim(),
            display_denom(&self.denom),
            transfer.recipient
        );
        let balance = self.balance.load().await;
        Ok(SendReceipt { message, tx, balance })
    }
}
