//! In-memory page, wallet provider and chain clients for driving the store.

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use pollfront::chain::{AccountData, ChainInfo, Coin, Fee, GasPrice, TxResponse};
use pollfront::{
    ClientFactory, Config, ConfigKey, OfflineSigner, PageEnvironment, QueryClient, SigningClient, WalletProvider,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, Notify};

pub const ADDR_A: &str = "juno1aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const ADDR_B: &str = "juno1bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
pub const CONTRACT: &str = "juno1pollcontract";

pub fn test_config() -> Config {
    Config::new()
        .with(ConfigKey::ChainId, "uni-3")
        .with(ConfigKey::ChainName, "Juno Testnet")
        .with(ConfigKey::RpcEndpoint, "https://rpc.uni.example")
        .with(ConfigKey::RestEndpoint, "https://api.uni.example")
        .with(ConfigKey::CoinDenom, "ujunox")
        .with(ConfigKey::Bech32Prefix, "juno")
        .with(ConfigKey::CoinDecimals, "6")
        .with(ConfigKey::GasPrice, "0.025")
        .with_contract_address(CONTRACT)
}

// =============================================================================
// Wallet provider
// =============================================================================

#[derive(Default)]
pub struct MockWallet {
    pub accounts: Mutex<Vec<String>>,
    pub reject_chain: AtomicBool,
    pub fail_enable: AtomicBool,
    pub enable_gate: Mutex<Option<Arc<Notify>>>,
    pub calls: Mutex<Vec<String>>,
    pub suggested: Mutex<Vec<ChainInfo>>,
}

impl MockWallet {
    pub fn with_account(address: &str) -> Arc<Self> {
        let wallet = Self::default();
        *wallet.accounts.lock().unwrap() = vec![address.to_string()];
        Arc::new(wallet)
    }

    pub fn set_accounts(&self, accounts: &[&str]) {
        *self.accounts.lock().unwrap() = accounts.iter().map(|a| a.to_string()).collect();
    }

    /// Blocks `enable` until the returned gate is notified.
    pub fn gate_enable(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.enable_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<String> { self.calls.lock().unwrap().clone() }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) { self.calls.lock().unwrap().push(call); }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn enable(&self, chain_id: &str) -> Result<()> {
        self.record(format!("enable:{chain_id}"));
        let gate = self.enable_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        tokio::task::yield_now().await;
        if self.fail_enable.load(Ordering::SeqCst) {
            return Err(anyhow!("Request rejected"));
        }
        Ok(())
    }

    async fn offline_signer(&self, chain_id: &str) -> Result<Arc<dyn OfflineSigner>> {
        self.record(format!("signer:{chain_id}"));
        let accounts = self.accounts.lock().unwrap().clone();
        Ok(Arc::new(MockSigner { accounts }))
    }

    async fn suggest_chain(&self, info: &ChainInfo) -> Result<()> {
        self.record(format!("suggest:{}", info.chain_id));
        if self.reject_chain.load(Ordering::SeqCst) {
            return Err(anyhow!("Request rejected"));
        }
        self.suggested.lock().unwrap().push(info.clone());
        Ok(())
    }
}

pub struct MockSigner {
    accounts: Vec<String>,
}

#[async_trait]
impl OfflineSigner for MockSigner {
    async fn accounts(&self) -> Result<Vec<AccountData>> {
        Ok(self.accounts.iter().map(|a| AccountData::secp256k1(a.as_str())).collect())
    }
}

// =============================================================================
// Page
// =============================================================================

pub struct MockPage {
    pub injected: Mutex<Option<Arc<dyn WalletProvider>>>,
    /// Injected when the load signal fires.
    pub inject_on_load: Mutex<Option<Arc<dyn WalletProvider>>>,
    pub loaded: AtomicBool,
    pub load_waits: AtomicUsize,
    pub keystore: broadcast::Sender<()>,
}

impl MockPage {
    fn build(injected: Option<Arc<dyn WalletProvider>>, loaded: bool) -> Arc<Self> {
        let (keystore, _) = broadcast::channel(8);
        Arc::new(Self {
            injected: Mutex::new(injected),
            inject_on_load: Mutex::new(None),
            loaded: AtomicBool::new(loaded),
            load_waits: AtomicUsize::new(0),
            keystore,
        })
    }

    /// Loaded page with the wallet already injected.
    pub fn with_wallet(wallet: Arc<MockWallet>) -> Arc<Self> {
        Self::build(Some(wallet as Arc<dyn WalletProvider>), true)
    }

    /// Loaded page without any wallet extension.
    pub fn without_wallet() -> Arc<Self> { Self::build(None, true) }

    /// Page still loading; the wallet appears once load completes.
    pub fn loading_then(wallet: Option<Arc<MockWallet>>) -> Arc<Self> {
        let page = Self::build(None, false);
        *page.inject_on_load.lock().unwrap() = wallet.map(|w| w as Arc<dyn WalletProvider>);
        page
    }

    pub fn change_keystore(&self) { let _ = self.keystore.send(()); }
}

#[async_trait]
impl PageEnvironment for MockPage {
    fn injected_provider(&self) -> Option<Arc<dyn WalletProvider>> { self.injected.lock().unwrap().clone() }

    fn is_loaded(&self) -> bool { self.loaded.load(Ordering::SeqCst) }

    async fn wait_for_load(&self) {
        self.load_waits.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let late = self.inject_on_load.lock().unwrap().take();
        if late.is_some() {
            *self.injected.lock().unwrap() = late;
        }
        self.loaded.store(true, Ordering::SeqCst);
    }

    fn keystore_changes(&self) -> broadcast::Receiver<()> { self.keystore.subscribe() }
}

// =============================================================================
// Chain clients
// =============================================================================

pub struct MockSigningClient {
    pub owner: String,
    pub gas_price: GasPrice,
    pub balance: Mutex<u64>,
    pub disconnected: AtomicBool,
    pub fail_send: Mutex<Option<String>>,
    pub sent: Mutex<Vec<(String, String, Vec<Coin>, Fee)>>,
    pub executed: Mutex<Vec<(String, String, Value, Fee)>>,
}

impl MockSigningClient {
    pub fn is_disconnected(&self) -> bool { self.disconnected.load(Ordering::SeqCst) }
}

#[async_trait]
impl QueryClient for MockSigningClient {
    async fn balance(&self, address: &str, denom: &str) -> Result<Coin> {
        if address != self.owner {
            return Err(anyhow!("unknown account {address}"));
        }
        Ok(Coin::new(*self.balance.lock().unwrap(), denom))
    }

    async fn query_contract_smart(&self, _contract: &str, query: &Value) -> Result<Value> {
        poll_contract_response(query)
    }
}

#[async_trait]
impl SigningClient for MockSigningClient {
    async fn send_tokens(&self, sender: &str, recipient: &str, amount: Vec<Coin>, fee: Fee, _memo: &str) -> Result<TxResponse> {
        if let Some(reason) = self.fail_send.lock().unwrap().clone() {
            return Err(anyhow!(reason));
        }
        let spent: u64 = amount.iter().map(|c| c.amount.parse::<u64>().unwrap_or(0)).sum();
        {
            let mut balance = self.balance.lock().unwrap();
            *balance = balance.saturating_sub(spent);
        }
        self.sent.lock().unwrap().push((sender.into(), recipient.into(), amount, fee));
        Ok(TxResponse { transaction_hash: "A1B2C3".into(), height: 42, gas_used: 80_000, gas_wanted: 100_000 })
    }

    async fn execute(&self, sender: &str, contract: &str, msg: &Value, fee: Fee, _funds: Vec<Coin>) -> Result<TxResponse> {
        self.executed.lock().unwrap().push((sender.into(), contract.into(), msg.clone(), fee));
        Ok(TxResponse { transaction_hash: "E1E2E3".into(), height: 43, gas_used: 150_000, gas_wanted: 1_000_000 })
    }

    fn disconnect(&self) { self.disconnected.store(true, Ordering::SeqCst); }
}

pub struct MockQueryClient {
    pub queries: Mutex<Vec<Value>>,
}

#[async_trait]
impl QueryClient for MockQueryClient {
    async fn balance(&self, _address: &str, denom: &str) -> Result<Coin> { Ok(Coin::new(0u64, denom)) }

    async fn query_contract_smart(&self, contract: &str, query: &Value) -> Result<Value> {
        if contract != CONTRACT {
            return Err(anyhow!("contract: not found"));
        }
        self.queries.lock().unwrap().push(query.clone());
        poll_contract_response(query)
    }
}

fn poll_contract_response(query: &Value) -> Result<Value> {
    let poll = json!({"creator": ADDR_A, "question": "Best chain?", "options": [["juno", 5], ["osmo", 2]]});
    if query.get("all_polls").is_some() {
        Ok(json!({"polls": [poll]}))
    } else if let Some(q) = query.get("poll") {
        Ok(if q["poll_id"] == "p1" { json!({"poll": poll}) } else { json!({"poll": null}) })
    } else if let Some(q) = query.get("vote") {
        Ok(if q["address"] == ADDR_A { json!({"vote": {"option": "juno"}}) } else { json!({"vote": null}) })
    } else {
        Err(anyhow!("Error parsing into type QueryMsg: unknown variant"))
    }
}

#[derive(Default)]
pub struct MockClients {
    pub signing: Mutex<Vec<Arc<MockSigningClient>>>,
    pub readers: AtomicUsize,
    pub fail_connect: AtomicBool,
    pub starting_balance: Mutex<u64>,
}

impl MockClients {
    pub fn new() -> Arc<Self> {
        let clients = Self::default();
        *clients.starting_balance.lock().unwrap() = 2_500_000;
        Arc::new(clients)
    }

    pub fn signing_count(&self) -> usize { self.signing.lock().unwrap().len() }

    pub fn all(&self) -> Vec<Arc<MockSigningClient>> { self.signing.lock().unwrap().clone() }

    pub fn last(&self) -> Arc<MockSigningClient> {
        self.signing.lock().unwrap().last().cloned().expect("no signing client built")
    }

    /// The mock behind a session's client handle.
    pub fn find(&self, client: &Arc<dyn SigningClient>) -> Option<Arc<MockSigningClient>> {
        let target = Arc::as_ptr(client) as *const ();
        self.all().into_iter().find(|c| Arc::as_ptr(c) as *const () == target)
    }
}

#[async_trait]
impl ClientFactory for MockClients {
    async fn connect(&self, _rpc_endpoint: &str) -> Result<Arc<dyn QueryClient>> {
        self.readers.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(MockQueryClient { queries: Mutex::new(Vec::new()) }))
    }

    async fn connect_with_signer(
        &self,
        _rpc_endpoint: &str,
        signer: Arc<dyn OfflineSigner>,
        gas_price: GasPrice,
    ) -> Result<Arc<dyn SigningClient>> {
        if self.fail_connect.load(Ordering::SeqCst) {
            return Err(anyhow!("socket hang up"));
        }
        let owner = signer.accounts().await?.first().map(|a| a.address.clone()).unwrap_or_default();
        let client = Arc::new(MockSigningClient {
            owner,
            gas_price,
            balance: Mutex::new(*self.starting_balance.lock().unwrap()),
            disconnected: AtomicBool::new(false),
            fail_send: Mutex::new(None),
            sent: Mutex::new(Vec::new()),
            executed: Mutex::new(Vec::new()),
        });
        self.signing.lock().unwrap().push(client.clone());
        Ok(client)
    }
}
