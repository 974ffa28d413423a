//! Defines functions for reading and issuing the session cookie.

use std::fmt::Display;

use axum_extra::extract::{CookieJar, cookie::Cookie};
use serde::{Deserialize, Serialize};
use time::Duration;
use uuid::Uuid;

/// The name of the cookie that holds the session ID.
pub const COOKIE_SESSION_ID: &str = "sessionId";
/// The default duration for which a newly issued session cookie is kept by the client.
pub const DEFAULT_SESSION_DURATION: Duration = Duration::days(7);

/// An opaque token that groups transactions by anonymous client.
///
/// This is not a verified identity, any non-empty cookie value is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new, random session ID.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing token without checking it.
    pub fn new_unchecked(token: &str) -> Self {
        Self(token.to_owned())
    }

    /// The raw token, as stored in the cookie and the database.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Get the session ID from the cookie jar.
///
/// Returns `None` if the cookie is missing or its value is empty.
pub fn get_session_id_from_cookies(jar: &CookieJar) -> Option<SessionId> {
    jar.get(COOKIE_SESSION_ID)
        .map(|cookie| cookie.value_trimmed())
        .filter(|value| !value.is_empty())
        .map(SessionId::new_unchecked)
}

/// Add the session cookie to the cookie jar.
///
/// The cookie is valid for the whole site and is kept by the client for
/// `duration`, see [DEFAULT_SESSION_DURATION].
pub fn set_session_cookie(jar: CookieJar, session_id: &SessionId, duration: Duration) -> CookieJar {
    jar.add(
        Cookie::build((COOKIE_SESSION_ID, session_id.as_str().to_owned()))
            .path("/")
            .max_age(duration),
    )
}
