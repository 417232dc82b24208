//! ProviderGateway - resolves the injected wallet and suggests the chain.

use super::{PageEnvironment, WalletProvider};
use crate::chain::ChainInfo;
use crate::config::Config;
use crate::error::{WalletError, WalletResult};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Memoized provider handle, plus the chains suggested this page session.
#[derive(Default)]
pub struct ProviderCache {
    provider: Mutex<Option<Arc<dyn WalletProvider>>>,
    registered: Mutex<HashSet<String>>,
}

impl ProviderCache {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self) -> Option<Arc<dyn WalletProvider>> {
        self.provider.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn store(&self, provider: Arc<dyn WalletProvider>) {
        *self.provider.lock().unwrap_or_else(|p| p.into_inner()) = Some(provider);
    }

    fn is_registered(&self, chain_id: &str) -> bool {
        self.registered.lock().unwrap_or_else(|p| p.into_inner()).contains(chain_id)
    }

    fn mark_registered(&self, chain_id: &str) {
        self.registered.lock().unwrap_or_else(|p| p.into_inner()).insert(chain_id.to_string());
    }

    /// Forget everything, as a full page reload would.
    pub fn reset(&self) {
        *self.provider.lock().unwrap_or_else(|p| p.into_inner()) = None;
        self.registered.lock().unwrap_or_else(|p| p.into_inner()).clear();
    }
}

pub struct ProviderGateway {
    page: Arc<dyn PageEnvironment>,
    cache: Arc<ProviderCache>,
    config: Arc<Config>,
}

impl ProviderGateway {
    pub fn new(page: Arc<dyn PageEnvironment>, cache: Arc<ProviderCache>, config: Arc<Config>) -> Self {
        Self { page, cache, config }
    }

    pub fn cache(&self) -> &Arc<ProviderCache> { &self.cache }
    pub fn page(&self) -> &Arc<dyn PageEnvironment> { &self.page }

    pub async fn acquire_provider(&self) -> WalletResult<Arc<dyn WalletProvider>> {
        if let Some(provider) = self.cache.get() {
            return Ok(provider);
        }

        let found = match self.page.injected_provider() {
            Some(provider) => Some(provider),
            None if self.page.is_loaded() => None,
            None => {
                tracing::debug!("Wallet provider not injected yet, waiting for page load");
                self.page.wait_for_load().await;
                self.page.injected_provider()
            }
        };

        let provider = found.ok_or(WalletError::ProviderUnavailable)?;
        self.cache.store(provider.clone());
        Ok(provider)
    }

    pub async fn register_chain(&self) -> WalletResult<()> {
        let info = ChainInfo::from_config(&self.config)?;
        if self.cache.is_registered(&info.chain_id) {
            tracing::debug!("Chain {} already suggested", info.chain_id);
            return Ok(());
        }
        let provider = self.acquire_provider().await?;
        provider.suggest_chain(&info).await.map_err(WalletError::rejected)?;
        tracing::info!("Chain {} registered with wallet provider", info.chain_id);
        self.cache.mark_registered(&info.chain_id);
        Ok(())
    }
}
