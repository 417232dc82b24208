//! App - owns the one SessionStore of a page session and lends it out.
//!
//! ```text
//! App::start(config, page, clients)
//!   ├── ProviderGateway (page + ProviderCache)
//!   ├── SessionStore ──► lent as Arc to every flow
//!   ├── KeystoreSubscription (page.keystore_changes → reconnect)
//!   └── Shutdown (stops the listener on close)
//! ```

use crate::client::{ClientFactory, QueryClient};
use crate::config::{Config, ConfigKey};
use crate::error::{WalletError, WalletResult};
use crate::flows::{BalanceFlow, PollsFlow, SendFlow};
use crate::provider::{PageEnvironment, ProviderCache, ProviderGateway};
use crate::runtime::Shutdown;
use crate::session::{KeystoreSubscription, SessionStore};
use std::sync::{Arc, Mutex};

pub struct App {
    config: Arc<Config>,
    clients: Arc<dyn ClientFactory>,
    session: Arc<SessionStore>,
    shutdown: Shutdown,
    keystore: Mutex<Option<KeystoreSubscription>>,
}

impl App {
    /// Wires the page together and starts listening for keystore changes.
    /// Must be called inside a tokio runtime.
    pub fn start(config: Config, page: Arc<dyn PageEnvironment>, clients: Arc<dyn ClientFactory>) -> Self {
        Self::start_with_cache(config, page, clients, Arc::new(ProviderCache::new()))
    }

    pub fn start_with_cache(
        config: Config,
        page: Arc<dyn PageEnvironment>,
        clients: Arc<dyn ClientFactory>,
        cache: Arc<ProviderCache>,
    ) -> Self {
        let config = Arc::new(config);
        let gateway = Arc::new(ProviderGateway::new(page.clone(), cache, config.clone()));
        let session = Arc::new(SessionStore::new(gateway, clients.clone(), config.clone()));
        let shutdown = Shutdown::new();
        let keystore = session.watch_keystore(page.keystore_changes(), shutdown.subscribe());
        tracing::info!("Page session started");
        Self { config, clients, session, shutdown, keystore: Mutex::new(Some(keystore)) }
    }

    pub fn config(&self) -> &Arc<Config> { &self.config }

    /// The page-wide session. Shared, never copied.
    pub fn session(&self) -> Arc<SessionStore> { self.session.clone() }

    /// Fresh non-signing client against the configured RPC endpoint.
    pub async fn query_client(&self) -> WalletResult<Arc<dyn QueryClient>> {
        let rpc = self.config.get(ConfigKey::RpcEndpoint)?;
        self.clients.connect(rpc).await.map_err(WalletError::remote)
    }

    pub fn balance(&self) -> WalletResult<BalanceFlow> { BalanceFlow::new(self.session(), &self.config) }
    pub fn send(&self) -> WalletResult<SendFlow> { SendFlow::new(self.session(), &self.config) }

    pub async fn polls(&self) -> WalletResult<PollsFlow> {
        let reader = self.query_client().await?;
        PollsFlow::new(reader, self.session(), &self.config)
    }

    pub fn is_listening(&self) -> bool {
        self.keystore
            .lock()
            .map(|k| k.as_ref().map(|s| s.is_active()).unwrap_or(false))
            .unwrap_or(false)
    }

    /// Tears the page session down: stops listeners, disconnects the wallet.
    /// Later calls return immediately.
    pub async fn close(&self) {
        if !self.shutdown.trigger() {
            return;
        }
        let subscription = self.keystore.lock().ok().and_then(|mut k| k.take());
        if let Some(subscription) = subscription {
            subscription.join().await;
        }
        self.session.disconnect();
        tracing::info!("Page session closed");
    }
}
