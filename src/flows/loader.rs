//! Wallet loader gate shown around every page.

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderView {
    /// Connect in flight, or the page itself is busy.
    Loading,
    /// No wallet yet: show the connect prompt.
    Disconnected,
    /// Last connect failed; serialized error detail.
    Failed(String),
    Ready { address: String },
}

impl LoaderView {
    pub fn from_session(session: &Session, page_busy: bool) -> Self {
        if page_busy || session.loading() {
            return LoaderView::Loading;
        }
        if let Some(error) = &session.error {
            return LoaderView::Failed(error.detail());
        }
        if session.wallet_address.is_empty() {
            return LoaderView::Disconnected;
        }
        LoaderView::Ready { address: session.wallet_address.clone() }
    }
}
