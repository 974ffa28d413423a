//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The session cookie is missing from a request to a route that needs it.
    #[error("unauthorized")]
    Unauthorized,

    /// The request could not be parsed, e.g., the body is not valid JSON, a
    /// field is missing or has the wrong type, or a path parameter is not a
    /// valid UUID.
    ///
    /// Holds the status code chosen by the extractor that rejected the request
    /// and the rejection message.
    #[error("{1}")]
    InvalidRequest(StatusCode, String),

    /// An empty string was used as the title of a transaction.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// A negative number was used as the amount of a transaction.
    ///
    /// The amount is a magnitude, the transaction type decides its sign.
    #[error("{0} is a negative amount, use the transaction type to record a debit")]
    NegativeAmount(f64),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::InvalidRequest(status_code, _) => *status_code,
            Error::EmptyTitle | Error::NegativeAmount(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            // Any errors that are not handled above are not intended to be shown to the client.
            Error::SqlError(_) | Error::DatabaseLockError => {
                tracing::error!("An unexpected error occurred: {}", self);

                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response();
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
