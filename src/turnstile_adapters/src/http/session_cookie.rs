use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use turnstile_core::{SessionContext, SessionId};

use crate::config::SESSION_COOKIE_NAME;

/// Reads the caller's session claim out of the cookie jar.
///
/// Anything other than a well-formed session id, including an absent cookie,
/// yields an anonymous context. Whether the claimed id still maps to a live
/// session is for the session store to decide.
pub fn session_context(jar: &CookieJar) -> SessionContext {
    jar.get(*SESSION_COOKIE_NAME)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok())
        .map(SessionContext::resuming)
        .unwrap_or_else(SessionContext::anonymous)
}

// Create cookie carrying the session id
pub fn session_cookie(session: &SessionId) -> Cookie<'static> {
    Cookie::build((*SESSION_COOKIE_NAME, session.to_string()))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .same_site(SameSite::Lax) // the browser still sends the cookie on top-level navigations
        .build()
}

/// Cookie handed to [`CookieJar::remove`] when a session ends. The path must
/// match [`session_cookie`] or the browser keeps the original.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(*SESSION_COOKIE_NAME).path("/").build()
}
