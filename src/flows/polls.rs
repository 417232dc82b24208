//! Poll listing (read-only client) and poll writes (signing client).

use crate::chain::{Fee, TxResponse};
use crate::client::QueryClient;
use crate::config::{Config, ConfigKey};
use crate::contract::{AllPollsResponse, Ballot, ExecuteMsg, Poll, PollResponse, QueryMsg, VoteResponse};
use crate::error::{WalletError, WalletResult};
use crate::session::SessionStore;
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[derive(Clone)]
pub struct PollsFlow {
    reader: Arc<dyn QueryClient>,
    session: Arc<SessionStore>,
    contract: String,
    denom: String,
}

impl PollsFlow {
    pub fn new(reader: Arc<dyn QueryClient>, session: Arc<SessionStore>, config: &Config) -> WalletResult<Self> {
        Ok(Self {
            reader,
            session,
            contract: config.site.contract_address()?.to_string(),
            denom: config.get(ConfigKey::CoinDenom)?.to_string(),
        })
    }

    pub fn contract(&self) -> &str { &self.contract }

    pub async fn all_polls(&self) -> WalletResult<Vec<Poll>> {
        let response: AllPollsResponse = self.query(&QueryMsg::AllPolls {}).await?;
        tracing::debug!("Loaded {} polls from {}", response.polls.len(), self.contract);
        Ok(response.polls)
    }

    pub async fn poll(&self, poll_id: &str) -> WalletResult<Option<Poll>> {
        let response: PollResponse = self.query(&QueryMsg::Poll { poll_id: poll_id.into() }).await?;
        Ok(response.poll)
    }

    pub async fn ballot(&self, poll_id: &str, address: &str) -> WalletResult<Option<Ballot>> {
        let msg = QueryMsg::Vote { poll_id: poll_id.into(), address: address.into() };
        let response: VoteResponse = self.query(&msg).await?;
        Ok(response.vote)
    }

    pub async fn create_poll(&self, poll_id: &str, question: &str, options: &[&str]) -> WalletResult<TxResponse> {
        self.execute(&ExecuteMsg::CreatePoll {
            poll_id: poll_id.into(),
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        })
        .await
    }

    pub async fn vote(&self, poll_id: &str, option: &str) -> WalletResult<TxResponse> {
        self.execute(&ExecuteMsg::Vote { poll_id: poll_id.into(), vote: option.into() }).await
    }

    async fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> WalletResult<T> {
        let query = serde_json::to_value(msg).map_err(|e| WalletError::remote(e.into()))?;
        let data = self
            .reader
            .query_contract_smart(&self.contract, &query)
            .await
            .map_err(WalletError::remote)?;
        serde_json::from_value(data).map_err(|e| WalletError::remote(e.into()))
    }

    async fn execute(&self, msg: &ExecuteMsg) -> WalletResult<TxResponse> {
        let session = self.session.snapshot();
        let (sender, client) = session.connection().ok_or(WalletError::NotConnected)?;
        let msg = serde_json::to_value(msg).map_err(|e| WalletError::remote(e.into()))?;
        let tx = client
            .execute(sender, &self.contract, &msg, Fee::default_execute(&self.denom), Vec::new())
            .await
            .map_err(WalletError::remote)?;
        tracing::info!("Executed on {}: {}", self.contract, tx.transaction_hash);
        Ok(tx)
    }
}
