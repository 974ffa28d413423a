//! Defines the endpoint for fetching a single transaction.
use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::SessionId,
    transaction::{Transaction, TransactionId, TransactionState, core::get_transaction},
};

/// The response body for fetching a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// The transaction, or `None` if the session has no transaction with the requested ID.
    pub transaction: Option<Transaction>,
}

/// A route handler for getting one of the session's transactions by its ID.
///
/// Responds with 400 if the ID is not a UUID. A transaction that does not
/// exist, or belongs to another session, is returned as `null` with status 200.
///
/// **Note**: This handler must be behind [crate::session::session_guard].
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<TransactionResponse>, Error> {
    let Path(transaction_id) = transaction_id?;
    let transaction = get_transaction(transaction_id, &session_id, &*state.connection()?)?;

    Ok(Json(TransactionResponse { transaction }))
}
