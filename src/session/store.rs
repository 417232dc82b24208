//! SessionStore - sole writer of the Session
//!
//! Every connect attempt carries a generation. `disconnect()` bumps it, so an
//! attempt that resolves afterwards is dropped (and its client closed) instead
//! of resurrecting a cleared session. An attempt whose future is dropped
//! before it resolves clears the session back to Idle.

use super::{Session, SessionCommand, SessionStatus};
use crate::chain::GasPrice;
use crate::client::{ClientFactory, SigningClient};
use crate::config::{Config, ConfigKey};
use crate::error::{WalletError, WalletResult};
use crate::provider::ProviderGateway;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

pub struct SessionStore {
    gateway: Arc<ProviderGateway>,
    clients: Arc<dyn ClientFactory>,
    config: Arc<Config>,
    state: watch::Sender<Session>,
    generation: Mutex<u64>,
}

impl SessionStore {
    pub fn new(gateway: Arc<ProviderGateway>, clients: Arc<dyn ClientFactory>, config: Arc<Config>) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self { gateway, clients, config, state, generation: Mutex::new(0) }
    }

    pub fn gateway(&self) -> &Arc<ProviderGateway> { &self.gateway }

    // get / subscribe / dispatch
    pub fn snapshot(&self) -> Session { self.state.borrow().clone() }
    pub fn subscribe(&self) -> watch::Receiver<Session> { self.state.subscribe() }

    pub async fn dispatch(&self, command: SessionCommand) -> Session {
        match command {
            SessionCommand::Connect => self.connect().await,
            SessionCommand::Disconnect => {
                self.disconnect();
                self.snapshot()
            }
            SessionCommand::Reconnect => self.reconnect().await,
            SessionCommand::Toggle => {
                if self.snapshot().wallet_address.is_empty() {
                    self.connect().await
                } else {
                    self.disconnect();
                    self.snapshot()
                }
            }
        }
    }

    /// Runs one attempt to completion and returns the resolved session.
    /// Joins the in-flight attempt when one exists; no-op when Connected.
    pub async fn connect(&self) -> Session {
        let generation = {
            let mut generation = self.lock_generation();
            let status = self.state.borrow().status;
            match status {
                SessionStatus::Connected => return self.snapshot(),
                SessionStatus::Connecting => None,
                SessionStatus::Idle | SessionStatus::Errored => {
                    *generation += 1;
                    self.state.send_replace(Session::connecting());
                    Some(*generation)
                }
            }
        };

        let Some(generation) = generation else {
            tracing::debug!("Connect already in flight, joining it");
            return self.await_resolution().await;
        };

        tracing::info!("Connecting wallet (attempt {})", generation);
        let attempt = AttemptGuard { store: self, generation, resolved: false };
        let outcome = self.establish().await;
        attempt.resolve();
        self.commit(generation, outcome)
    }

    /// Closes the signing client, then clears to Idle. Safe to repeat.
    pub fn disconnect(&self) {
        let mut generation = self.lock_generation();
        *generation += 1;

        let client = self.state.borrow().signing_client.clone();
        if let Some(client) = client {
            client.disconnect();
        }

        let cleared = self.state.send_if_modified(|session| {
            if session.status == SessionStatus::Idle {
                return false;
            }
            *session = Session::default();
            true
        });
        if cleared {
            tracing::info!("Wallet disconnected");
        }
    }

    pub async fn reconnect(&self) -> Session {
        self.disconnect();
        self.connect().await
    }

    async fn await_resolution(&self) -> Session {
        let mut rx = self.state.subscribe();
        let resolved = rx
            .wait_for(|session| session.status != SessionStatus::Connecting)
            .await
            .map(|session| (*session).clone());
        resolved.unwrap_or_else(|_| self.snapshot())
    }

    /// Provider → chain → enable → signer → client → account, strictly in order.
    async fn establish(&self) -> WalletResult<(String, Arc<dyn SigningClient>)> {
        let chain_id = self.config.get(ConfigKey::ChainId)?;

        let provider = self.gateway.acquire_provider().await?;
        self.gateway.register_chain().await?;

        provider.enable(chain_id).await.map_err(WalletError::provider)?;
        tracing::debug!("Wallet enabled for {}", chain_id);
        let signer = provider.offline_signer(chain_id).await.map_err(WalletError::provider)?;

        let gas_price = GasPrice::from_config(&self.config)?;
        let rpc = self.config.get(ConfigKey::RpcEndpoint)?;
        let client = self
            .clients
            .connect_with_signer(rpc, signer.clone(), gas_price)
            .await
            .map_err(WalletError::remote)?;

        let address = match signer.accounts().await {
            Ok(accounts) => accounts.into_iter().next().map(|a| a.address).filter(|a| !a.is_empty()),
            Err(e) => {
                client.disconnect();
                return Err(WalletError::provider(e));
            }
        };
        match address {
            Some(address) => Ok((address, client)),
            None => {
                client.disconnect();
                Err(WalletError::NoAccounts)
            }
        }
    }

    fn commit(&self, generation: u64, outcome: WalletResult<(String, Arc<dyn SigningClient>)>) -> Session {
        let stale = {
            let current = self.lock_generation();
            if *current == generation {
                let next = match outcome {
                    Ok((address, client)) => {
                        tracing::info!("Wallet connected: {}", address);
                        Session::connected(address, client)
                    }
                    Err(e) => {
                        tracing::warn!("Wallet connect failed: {}", e);
                        Session::errored(e)
                    }
                };
                self.state.send_replace(next.clone());
                return next;
            }
            outcome.ok().map(|(_, client)| client)
        };

        tracing::warn!("Discarding stale connect attempt {}", generation);
        if let Some(client) = stale {
            client.disconnect();
        }
        self.snapshot()
    }

    /// Clears a Connecting session whose attempt was dropped before resolving.
    fn abandon(&self, generation: u64) {
        let mut current = self.lock_generation();
        if *current != generation {
            return;
        }
        *current += 1;
        let cleared = self.state.send_if_modified(|session| {
            if session.status != SessionStatus::Connecting {
                return false;
            }
            *session = Session::default();
            true
        });
        if cleared {
            tracing::warn!("Connect attempt {} dropped before resolving", generation);
        }
    }

    fn lock_generation(&self) -> MutexGuard<'_, u64> {
        self.generation.lock().unwrap_or_else(|p| p.into_inner())
    }
}

/// Held across `establish()`. If the caller's future is dropped mid-attempt
/// the session goes back to Idle instead of staying Connecting.
struct AttemptGuard<'a> {
    store: &'a SessionStore,
    generation: u64,
    resolved: bool,
}

impl AttemptGuard<'_> {
    fn resolve(mut self) { self.resolved = true; }
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            self.store.abandon(self.generation);
        }
    }
}
