//! Application router configuration with guarded and unguarded route definitions.

use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState, Error, endpoints,
    session::session_guard,
    transaction::{
        create_transaction_endpoint, get_summary_endpoint, get_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The session guard is layered onto each method route that needs it, before
/// any unguarded method is added to the same path, so that creating a
/// transaction works without a session cookie.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint)
                .route_layer(middleware::from_fn(session_guard))
                .post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_SUMMARY,
            get(get_summary_endpoint).route_layer(middleware::from_fn(session_guard)),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint).route_layer(middleware::from_fn(session_guard)),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
