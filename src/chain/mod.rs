//! Chain value types: registration descriptor, coins, gas price and fees.

mod info;

pub use info::{Bech32Config, Bip44, ChainInfo, Currency, GasPriceStep, COSMOS_COIN_TYPE, GAS_PRICE_STEP};

use crate::config::{Config, ConfigKey, ConfigResult};
use serde::{Deserialize, Serialize};

/// Gas limit of the default execute fee.
pub const DEFAULT_EXECUTE_GAS: &str = "1000000";
/// Amount (minimal units) of the default execute fee.
pub const DEFAULT_EXECUTE_FEE_AMOUNT: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl ToString, denom: impl Into<String>) -> Self {
        Self { denom: denom.into(), amount: amount.to_string() }
    }
}

/// `coins(5000, "ujuno")`
pub fn coins(amount: u64, denom: &str) -> Vec<Coin> {
    vec![Coin::new(amount, denom)]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

/// Fee envelope attached to a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fee {
    /// The client simulates and prices the transaction itself.
    Auto,
    Fixed(StdFee),
}

impl Fee {
    pub fn default_execute(denom: &str) -> Self { Fee::Fixed(default_execute_fee(denom)) }
}

pub fn default_execute_fee(denom: &str) -> StdFee {
    StdFee { amount: coins(DEFAULT_EXECUTE_FEE_AMOUNT, denom), gas: DEFAULT_EXECUTE_GAS.into() }
}

/// Price per unit of gas, e.g. `0.025ujuno`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasPrice {
    pub amount: f64,
    pub denom: String,
}

impl GasPrice {
    pub fn new(amount: f64, denom: impl Into<String>) -> Self { Self { amount, denom: denom.into() } }

    /// Configured price in the configured denomination.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        Ok(Self::new(config.gas_price()?, config.get(ConfigKey::CoinDenom)?))
    }
}

impl std::fmt::Display for GasPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Acknowledgment of a broadcast transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResponse {
    pub transaction_hash: String,
    pub height: u64,
    #[serde(default)]
    pub gas_used: u64,
    #[serde(default)]
    pub gas_wanted: u64,
}

/// One account exposed by an offline signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    pub address: String,
    pub algo: String,
    #[serde(default)]
    pub pubkey: Vec<u8>,
}

impl AccountData {
    pub fn secp256k1(address: impl Into<String>) -> Self {
        Self { address: address.into(), algo: "secp256k1".into(), pubkey: Vec::new() }
    }
}
