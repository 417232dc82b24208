//! Balance display for the connected wallet.

use crate::chain::Coin;
use crate::config::{Config, ConfigKey};
use crate::conversion::{display_denom, to_display_units};
use crate::error::{WalletError, WalletResult};
use crate::session::SessionStore;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceView {
    pub amount: f64,
    pub denom: String,
    pub raw: Coin,
    pub loaded_at: DateTime<Utc>,
}

impl BalanceView {
    pub fn from_coin(coin: Coin) -> Self {
        Self {
            amount: to_display_units(&coin.amount),
            denom: display_denom(&coin.denom),
            raw: coin,
            loaded_at: Utc::now(),
        }
    }
}

impl fmt::Display for BalanceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.denom)
    }
}

#[derive(Clone)]
pub struct BalanceFlow {
    session: Arc<SessionStore>,
    denom: String,
}

impl BalanceFlow {
    pub fn new(session: Arc<SessionStore>, config: &Config) -> WalletResult<Self> {
        Ok(Self { session, denom: config.get(ConfigKey::CoinDenom)?.to_string() })
    }

    pub fn denom(&self) -> &str { &self.denom }

    pub async fn load(&self) -> WalletResult<BalanceView> {
        let session = self.session.snapshot();
        let (address, client) = session.connection().ok_or(WalletError::NotConnected)?;
        let coin = client.balance(address, &self.denom).await.map_err(|e| {
            tracing::warn!("Balance query for {} failed: {:#}", address, e);
            WalletError::remote(e)
        })?;
        Ok(BalanceView::from_coin(coin))
    }
}
