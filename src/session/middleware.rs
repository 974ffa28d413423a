//! Session middleware that rejects requests without a session cookie.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{Error, session::get_session_id_from_cookies};

/// Middleware function that checks for the session cookie.
///
/// The session ID is placed into the request and then the request executed
/// normally if the cookie is present, otherwise a 401 response is returned
/// and the route handler is never called.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(session_id): Extension<SessionId>` to receive the session ID.
pub async fn session_guard(jar: CookieJar, mut request: Request, next: Next) -> Response {
    let Some(session_id) = get_session_id_from_cookies(&jar) else {
        tracing::debug!(
            "Rejecting request to {} without a session cookie.",
            request.uri().path()
        );
        return Error::Unauthorized.into_response();
    };

    request.extensions_mut().insert(session_id);
    next.run(request).await
}

#[cfg(test)]
mod session_guard_tests {
    use axum::{Extension, Router, middleware, routing::get};
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::session::{COOKIE_SESSION_ID, SessionId, session_guard};

    async fn echo_session_id(Extension(session_id): Extension<SessionId>) -> String {
        session_id.to_string()
    }

    const TEST_PROTECTED_ROUTE: &str = "/protected";

    fn get_test_server() -> TestServer {
        let app = Router::new()
            .route(TEST_PROTECTED_ROUTE, get(echo_session_id))
            .route_layer(middleware::from_fn(session_guard));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn get_protected_route_with_cookie() {
        let server = get_test_server();

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(Cookie::new(COOKIE_SESSION_ID, "foobar"))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "foobar");
    }

    #[tokio::test]
    async fn get_protected_route_without_cookie_is_unauthorized() {
        let server = get_test_server();

        let response = server.get(TEST_PROTECTED_ROUTE).await;

        response.assert_status_unauthorized();
        response.assert_json(&json!({ "error": "unauthorized" }));
    }

    #[tokio::test]
    async fn get_protected_route_with_empty_cookie_is_unauthorized() {
        let server = get_test_server();

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(Cookie::new(COOKIE_SESSION_ID, ""))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn other_cookies_are_not_a_session() {
        let server = get_test_server();

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(Cookie::new("user_id", "1"))
            .await;

        response.assert_status_unauthorized();
    }
}
