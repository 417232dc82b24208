//! Page flows: what each page does with the session.
//!
//! | Flow | Client | Calls |
//! |------|--------|-------|
//! | [`LoaderView`] | none | gates pages on session state |
//! | [`BalanceFlow`] | signing | `balance` |
//! | [`SendFlow`] | signing | `send_tokens`, then `balance` |
//! | [`PollsFlow`] | read-only / signing | `query_contract_smart`, `execute` |

mod balance;
mod loader;
mod polls;
mod send;

pub use balance::{BalanceFlow, BalanceView};
pub use loader::LoaderView;
pub use polls::PollsFlow;
pub use send::{ResolvedTransfer, SendFlow, SendReceipt, TransferRequest};

use crate::error::WalletError;

/// How pages print a failed remote call.
pub fn error_message(err: &WalletError) -> String {
    format!("Error! {}", err)
}
