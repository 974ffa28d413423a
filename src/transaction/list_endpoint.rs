//! Defines the endpoint for listing the transactions of the current session.
use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::SessionId,
    transaction::{Transaction, TransactionState, core::get_transactions_by_session},
};

/// The response body for listing transactions.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction created by the session.
    pub transactions: Vec<Transaction>,
}

/// A route handler that returns all of the session's transactions.
///
/// **Note**: This handler must be behind [crate::session::session_guard].
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<TransactionsResponse>, Error> {
    let transactions = get_transactions_by_session(&session_id, &*state.connection()?)?;

    Ok(Json(TransactionsResponse { transactions }))
}
