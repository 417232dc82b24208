//! Pollfront: wallet session core for a CosmWasm poll frontend.
//!
//! # Architecture
//!
//! ```text
//! App (one per page session)
//!   │
//!   ├── SessionStore (Idle → Connecting → Connected | Errored)
//!   │     ├── ProviderGateway ──► WalletProvider (injected extension)
//!   │     │     └── ProviderCache (memoized handle, registered chains)
//!   │     └── ClientFactory ──► SigningClient
//!   │
//!   ├── KeystoreSubscription (keystore change → reconnect)
//!   │
//!   └── Flows (loader, balance, send, polls)
//!         └── QueryClient / SigningClient
//! ```
//!
//! # Features
//!
//! - `lcd` (default) - [`client::LcdClient`], a read-only client over the REST gateway
//!
//! # Usage
//!
//! ```ignore
//! use pollfront::{App, Config, SessionCommand};
//!
//! let app = App::start(Config::from_env(), page, clients);
//! let session = app.session().dispatch(SessionCommand::Connect).await;
//! let balance = app.balance()?.load().await?;
//! let polls = app.polls().await?.all_polls().await?;
//! ```

pub mod app;
pub mod chain;
pub mod client;
pub mod config;
pub mod contract;
pub mod conversion;
pub mod error;
pub mod flows;
pub mod logging;
pub mod provider;
pub mod runtime;
pub mod session;

pub use app::App;
pub use chain::{AccountData, ChainInfo, Coin, Fee, GasPrice, StdFee, TxResponse};
pub use client::{ClientFactory, QueryClient, SigningClient};
#[cfg(feature = "lcd")]
pub use client::{LcdClient, LcdConfig};
pub use config::{Config, ConfigError, ConfigKey, SiteConfig};
pub use error::{WalletError, WalletResult};
pub use flows::{BalanceFlow, BalanceView, LoaderView, PollsFlow, SendFlow, SendReceipt, TransferRequest};
pub use provider::{OfflineSigner, PageEnvironment, ProviderCache, ProviderGateway, WalletProvider};
pub use runtime::Shutdown;
pub use session::{KeystoreSubscription, Session, SessionCommand, SessionStatus, SessionStore};
