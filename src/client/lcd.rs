//! LcdClient - read-only queries over the chain's REST gateway

use super::QueryClient;
use crate::chain::Coin;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const BALANCE_PATH: &str = "/cosmos/bank/v1beta1/balances";
const SMART_QUERY_PATH: &str = "/cosmwasm/wasm/v1/contract";

#[derive(Debug, Clone)]
pub struct LcdConfig {
    pub timeout_ms: u64,
}

impl Default for LcdConfig {
    fn default() -> Self { Self { timeout_ms: 30_000 } }
}

#[derive(Debug, Clone)]
pub struct LcdClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct BalanceResponse { balance: Option<Coin> }

#[derive(Deserialize)]
struct SmartQueryResponse { data: Value }

#[derive(Deserialize)]
struct ErrorResponse { message: String }

impl LcdClient {
    pub fn new(rest_endpoint: impl Into<String>) -> Result<Self> {
        Self::with_config(rest_endpoint, LcdConfig::default())
    }

    pub fn with_config(rest_endpoint: impl Into<String>, config: LcdConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("build LCD HTTP client")?;
        Ok(Self { base_url: rest_endpoint.into().trim_end_matches('/').to_string(), client })
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).query(query).send().await.with_context(|| format!("GET {url}"))?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(anyhow!("{} ({})", message, status));
        }
        serde_json::from_str(&body).with_context(|| format!("decode {url}"))
    }
}

#[async_trait]
impl QueryClient for LcdClient {
    async fn balance(&self, address: &str, denom: &str) -> Result<Coin> {
        let url = format!("{}{}/{}/by_denom", self.base_url, BALANCE_PATH, address);
        let response: BalanceResponse = self.get_json(&url, &[("denom", denom)]).await?;
        Ok(response.balance.unwrap_or_else(|| Coin::new(0u64, denom)))
    }

    async fn query_contract_smart(&self, contract: &str, query: &Value) -> Result<Value> {
        let encoded = base64::engine::general_purpose::URL_SAFE.encode(serde_json::to_vec(query)?);
        let url = format!("{}{}/{}/smart/{}", self.base_url, SMART_QUERY_PATH, contract, encoded);
        let response: SmartQueryResponse = self.get_json(&url, &[]).await?;
        Ok(response.data)
    }
}
