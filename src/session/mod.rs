//! Anonymous sessions identified by a cookie.
//!
//! A session is nothing more than an opaque token that groups transactions
//! together. Possession of the cookie is the only check made.

mod cookie;
mod middleware;

pub use cookie::{
    COOKIE_SESSION_ID, DEFAULT_SESSION_DURATION, SessionId, get_session_id_from_cookies,
    set_session_cookie,
};
pub use middleware::session_guard;
