//! Config - named chain settings, resolved fail-fast
//!
//! | Key | Environment | Example |
//! |-----|-------------|---------|
//! | `chainId` | `POLLFRONT_CHAIN_ID` | `uni-3` |
//! | `chainName` | `POLLFRONT_CHAIN_NAME` | `Juno Testnet` |
//! | `rpcEndpoint` | `POLLFRONT_CHAIN_RPC_ENDPOINT` | `https://rpc.uni.junonetwork.io` |
//! | `restEndpoint` | `POLLFRONT_CHAIN_REST_ENDPOINT` | `https://api.uni.junonetwork.io` |
//! | `coinDenom` | `POLLFRONT_STAKING_DENOM` | `ujunox` |
//! | `bech32Prefix` | `POLLFRONT_CHAIN_BECH32_PREFIX` | `juno` |
//! | `coinDecimals` | `POLLFRONT_COIN_DECIMALS` | `6` |
//! | `gasPrice` | `POLLFRONT_GAS_PRICE` | `0.025` |
//!
//! Site settings (`POLLFRONT_SITE_TITLE`, `POLLFRONT_SITE_ICON_URL`,
//! `POLLFRONT_CONTRACT_ADDRESS`) are optional and only read by page flows.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

pub const ENV_PREFIX: &str = "POLLFRONT_";

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Missing config for {key}")]
    Missing { key: String },
    #[error("Invalid config for {key}: '{value}' ({reason})")]
    Invalid { key: String, value: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// The closed set of required chain settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ChainId,
    ChainName,
    RpcEndpoint,
    RestEndpoint,
    CoinDenom,
    Bech32Prefix,
    CoinDecimals,
    GasPrice,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 8] = [
        ConfigKey::ChainId,
        ConfigKey::ChainName,
        ConfigKey::RpcEndpoint,
        ConfigKey::RestEndpoint,
        ConfigKey::CoinDenom,
        ConfigKey::Bech32Prefix,
        ConfigKey::CoinDecimals,
        ConfigKey::GasPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ChainId => "chainId",
            ConfigKey::ChainName => "chainName",
            ConfigKey::RpcEndpoint => "rpcEndpoint",
            ConfigKey::RestEndpoint => "restEndpoint",
            ConfigKey::CoinDenom => "coinDenom",
            ConfigKey::Bech32Prefix => "bech32Prefix",
            ConfigKey::CoinDecimals => "coinDecimals",
            ConfigKey::GasPrice => "gasPrice",
        }
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            ConfigKey::ChainId => "POLLFRONT_CHAIN_ID",
            ConfigKey::ChainName => "POLLFRONT_CHAIN_NAME",
            ConfigKey::RpcEndpoint => "POLLFRONT_CHAIN_RPC_ENDPOINT",
            ConfigKey::RestEndpoint => "POLLFRONT_CHAIN_REST_ENDPOINT",
            ConfigKey::CoinDenom => "POLLFRONT_STAKING_DENOM",
            ConfigKey::Bech32Prefix => "POLLFRONT_CHAIN_BECH32_PREFIX",
            ConfigKey::CoinDecimals => "POLLFRONT_COIN_DECIMALS",
            ConfigKey::GasPrice => "POLLFRONT_GAS_PRICE",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value.trim())
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cosmetic settings consumed by page flows only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub icon_url: Option<String>,
    pub contract_address: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            title: read_env("POLLFRONT_SITE_TITLE"),
            icon_url: read_env("POLLFRONT_SITE_ICON_URL"),
            contract_address: read_env("POLLFRONT_CONTRACT_ADDRESS"),
        }
    }

    pub fn contract_address(&self) -> ConfigResult<&str> {
        self.contract_address
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::Missing { key: "contractAddress".into() })
    }
}

/// Resolved configuration. Higher layers construct this once per page session.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: HashMap<ConfigKey, String>,
    pub site: SiteConfig,
}

impl Config {
    pub fn new() -> Self { Self::default() }

    /// Reads every known key from the process environment. Absent keys stay
    /// absent; they fail when requested, not here.
    pub fn from_env() -> Self {
        let values = ConfigKey::ALL
            .into_iter()
            .filter_map(|key| read_env(key.env_var()).map(|v| (key, v)))
            .collect();
        Self { values, site: SiteConfig::from_env() }
    }

    pub fn with(mut self, key: ConfigKey, value: impl Into<String>) -> Self { self.values.insert(key, value.into()); self }
    pub fn with_site(mut self, site: SiteConfig) -> Self { self.site = site; self }
    pub fn with_contract_address(mut self, address: impl Into<String>) -> Self { self.site.contract_address = Some(address.into()); self }

    pub fn get(&self, key: ConfigKey) -> ConfigResult<&str> {
        match self.values.get(&key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::Missing { key: key.as_str().into() }),
        }
    }

    /// Resolves all keys or none.
    pub fn get_many(&self, keys: &[ConfigKey]) -> ConfigResult<HashMap<ConfigKey, String>> {
        keys.iter()
            .map(|&key| self.get(key).map(|v| (key, v.to_string())))
            .collect()
    }

    pub fn coin_decimals(&self) -> ConfigResult<u8> {
        let raw = self.get(ConfigKey::CoinDecimals)?;
        raw.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
            key: ConfigKey::CoinDecimals.as_str().into(),
            value: raw.into(),
            reason: e.to_string(),
        })
    }

    pub fn gas_price(&self) -> ConfigResult<f64> {
        let raw = self.get(ConfigKey::GasPrice)?;
        match raw.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
            _ => Err(ConfigError::Invalid {
                key: ConfigKey::GasPrice.as_str().into(),
                value: raw.into(),
                reason: "expected a non-negative decimal".into(),
            }),
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
