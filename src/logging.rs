//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{
        HeaderMap, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{Error, session::COOKIE_SESSION_ID};

/// The maximum number of bytes of a body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
/// The value of the session cookie is never logged.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return Error::InvalidRequest(
                StatusCode::BAD_REQUEST,
                "could not read request body".to_owned(),
            )
            .into_response();
        }
    };

    log_message(
        &format!("Received request: {} {}", parts.method, parts.uri),
        &parts.headers,
        &String::from_utf8_lossy(&body_bytes),
    );

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return Error::InvalidRequest(
                StatusCode::INTERNAL_SERVER_ERROR,
                "could not read response body".to_owned(),
            )
            .into_response();
        }
    };

    log_message(
        &format!("Sending response: {}", parts.status),
        &parts.headers,
        &String::from_utf8_lossy(&body_bytes),
    );

    Response::from_parts(parts, Body::from(body_bytes))
}

async fn read_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, usize::MAX).await
}

fn log_message(summary: &str, headers: &HeaderMap, body: &str) {
    let headers = redact_headers(headers);

    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "{summary}\nheaders: {headers:#?}\nbody: {}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{summary}\nheaders: {headers:#?}\nbody: {body:?}");
    }
}

/// Cut `text` to at most `limit` bytes without splitting a character.
fn truncate(text: &str, limit: usize) -> &str {
    let mut end = limit.min(text.len());

    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

fn redact_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes());
            let value = if name == COOKIE || name == SET_COOKIE {
                redact_session_id(&value)
            } else {
                value.to_string()
            };

            (name.to_string(), value)
        })
        .collect()
}

fn redact_session_id(cookie_text: &str) -> String {
    let key = format!("{COOKIE_SESSION_ID}=");

    let Some(start) = cookie_text.find(&key) else {
        return cookie_text.to_owned();
    };

    let end = cookie_text[start..]
        .find(';')
        .map(|end| start + end)
        .unwrap_or(cookie_text.len());

    format!(
        "{}{key}********{}",
        &cookie_text[..start],
        &cookie_text[end..]
    )
}
