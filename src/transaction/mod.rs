//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `NewTransaction`
//! - Database functions for storing, querying and summing transactions
//! - Route handlers for the transactions API

mod core;
mod create_endpoint;
mod get_endpoint;
mod list_endpoint;
mod state;
mod summary_endpoint;

pub use core::{
    NewTransaction, Summary, Transaction, TransactionId, TransactionTitle, TransactionType,
    create_transaction, create_transaction_table, get_summary,
};
pub use create_endpoint::create_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use state::TransactionState;
pub use summary_endpoint::get_summary_endpoint;

#[cfg(test)]
pub use core::get_transactions_by_session;
#[cfg(test)]
pub use get_endpoint::TransactionResponse;
#[cfg(test)]
pub use list_endpoint::TransactionsResponse;
#[cfg(test)]
pub use summary_endpoint::SummaryResponse;
