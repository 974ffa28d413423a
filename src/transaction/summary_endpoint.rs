//! Defines the endpoint for the total of the session's transactions.
use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::SessionId,
    transaction::{Summary, TransactionState, core::get_summary},
};

/// The response body for the summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The total of the session's transactions.
    pub summary: Summary,
}

/// A route handler that sums the amounts of the session's transactions.
///
/// **Note**: This handler must be behind [crate::session::session_guard].
pub async fn get_summary_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<SummaryResponse>, Error> {
    let summary = get_summary(&session_id, &*state.connection()?)?;

    Ok(Json(SummaryResponse { summary }))
}
