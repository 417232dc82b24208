//! Chain registration descriptor handed to the wallet provider.

use crate::config::{Config, ConfigKey, ConfigResult};
use crate::conversion::display_denom;
use serde::{Deserialize, Serialize};

pub const COSMOS_COIN_TYPE: u32 = 118;

pub const GAS_PRICE_STEP: GasPriceStep = GasPriceStep { low: 0.01, average: 0.025, high: 0.03 };

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: String,
    pub chain_name: String,
    pub rpc: String,
    pub rest: String,
    pub bip44: Bip44,
    pub bech32_config: Bech32Config,
    pub currencies: Vec<Currency>,
    pub fee_currencies: Vec<Currency>,
    pub stake_currency: Currency,
    pub coin_type: u32,
    pub gas_price_step: GasPriceStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bip44 {
    pub coin_type: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bech32Config {
    pub bech32_prefix_acc_addr: String,
    pub bech32_prefix_acc_pub: String,
    pub bech32_prefix_val_addr: String,
    pub bech32_prefix_val_pub: String,
    pub bech32_prefix_cons_addr: String,
    pub bech32_prefix_cons_pub: String,
}

impl Bech32Config {
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            bech32_prefix_acc_addr: prefix.to_string(),
            bech32_prefix_acc_pub: format!("{prefix}pub"),
            bech32_prefix_val_addr: format!("{prefix}valoper"),
            bech32_prefix_val_pub: format!("{prefix}valoperpub"),
            bech32_prefix_cons_addr: format!("{prefix}valcons"),
            bech32_prefix_cons_pub: format!("{prefix}valconspub"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub coin_denom: String,
    pub coin_minimal_denom: String,
    pub coin_decimals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasPriceStep {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

impl ChainInfo {
    /// Built fresh on every registration; nothing is cached here.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let prefix = config.get(ConfigKey::Bech32Prefix)?;
        let coin_minimal_denom = config.get(ConfigKey::CoinDenom)?.to_string();
        let currency = Currency {
            coin_denom: display_denom(&coin_minimal_denom),
            coin_minimal_denom,
            coin_decimals: config.coin_decimals()?,
        };

        Ok(Self {
            chain_id: config.get(ConfigKey::ChainId)?.into(),
            chain_name: config.get(ConfigKey::ChainName)?.into(),
            rpc: config.get(ConfigKey::RpcEndpoint)?.into(),
            rest: config.get(ConfigKey::RestEndpoint)?.into(),
            bip44: Bip44 { coin_type: COSMOS_COIN_TYPE },
            bech32_config: Bech32Config::from_prefix(prefix),
            currencies: vec![currency.clone()],
            fee_currencies: vec![currency.clone()],
            stake_currency: currency,
            coin_type: COSMOS_COIN_TYPE,
            gas_price_step: GAS_PRICE_STEP,
        })
    }
}
