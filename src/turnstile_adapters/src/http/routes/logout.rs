use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;

use turnstile_application::LogoutUseCase;
use turnstile_core::{PasswordScheme, SessionStore, UserDirectory, paths};

use crate::http::session_cookie::{removal_cookie, session_context};

use super::{error::FlowApiError, found};

/// GET /logout.
///
/// Closes the caller's session, clears the cookie, and redirects to `/`.
/// Anonymous callers get the same redirect; there is nothing to close.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<D, S, P>(
    State((_, session_store, _)): State<(D, S, P)>,
    jar: CookieJar,
) -> Result<impl IntoResponse, FlowApiError>
where
    D: UserDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
    P: PasswordScheme + Clone + 'static,
{
    let use_case = LogoutUseCase::new(session_store);

    let context = session_context(&jar);

    use_case.execute(&context).await?;

    let jar = jar.remove(removal_cookie());

    Ok((jar, found(paths::LANDING)))
}
