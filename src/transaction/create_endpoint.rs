//! Defines the endpoint for creating a new transaction.
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::{SessionId, get_session_id_from_cookies, set_session_cookie},
    transaction::{
        NewTransaction, TransactionState, TransactionTitle, TransactionType,
        core::create_transaction,
    },
};

/// The plain text body sent back when a transaction is created.
pub const CREATED_MESSAGE: &str = "created successfully";

/// The JSON body for creating a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionData {
    /// Text detailing the transaction.
    pub title: String,
    /// The magnitude of the transaction, the sign is set by `transaction_type`.
    pub amount: f64,
    /// Whether the transaction is a credit or a debit.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// A route handler for creating a new transaction.
///
/// The session cookie is optional: if the request does not have one, a new
/// session is started and its cookie is set on the response. An existing
/// session cookie is never replaced.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    jar: CookieJar,
    body: Result<Json<TransactionData>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, &'static str), Error> {
    let Json(data) = body?;
    let transaction = NewTransaction::new(
        TransactionTitle::new(&data.title)?,
        data.amount,
        data.transaction_type,
    )?;

    let (session_id, jar) = match get_session_id_from_cookies(&jar) {
        Some(session_id) => (session_id, jar),
        None => {
            let session_id = SessionId::new_random();
            tracing::debug!("Starting new session {session_id}");
            let jar = set_session_cookie(jar, &session_id, state.session_duration);
            (session_id, jar)
        }
    };

    let transaction = create_transaction(transaction, &session_id, &*state.connection()?)?;
    tracing::debug!(
        "Created transaction {} with amount {}",
        transaction.id,
        transaction.amount
    );

    Ok((StatusCode::CREATED, jar, CREATED_MESSAGE))
}
