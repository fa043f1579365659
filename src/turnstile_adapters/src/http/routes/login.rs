use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use turnstile_application::{DashboardAccess, LoginResponse, LoginUseCase, ViewDashboardUseCase};
use turnstile_core::{Credentials, PasswordScheme, SessionStore, UserDirectory, paths};

use crate::http::pages::LoginPage;
use crate::http::session_cookie::{session_cookie, session_context};

use super::{error::FlowApiError, found};

#[derive(Debug, Deserialize)]
pub struct LoginFormData {
    pub email: String,
    pub password: Secret<String>,
}

/// POST /login.
///
/// Success opens a session and sets the session cookie. A wrong password or
/// an unknown email answers with the same redirect to `/` and leaves the jar
/// untouched; the two outcomes differ only in session state.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<D, S, P>(
    State((user_directory, session_store, password_scheme)): State<(D, S, P)>,
    jar: CookieJar,
    Form(form): Form<LoginFormData>,
) -> Result<Response, FlowApiError>
where
    D: UserDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
    P: PasswordScheme + Clone + 'static,
{
    let use_case = LoginUseCase::new(user_directory, session_store, password_scheme);

    let context = session_context(&jar);

    let credentials = match Credentials::parse(form.email, form.password) {
        Ok(credentials) => credentials,
        Err(error) => {
            return render_login_page(StatusCode::UNPROCESSABLE_ENTITY, &error.to_string());
        }
    };

    match use_case.execute(&context, credentials).await? {
        LoginResponse::Authenticated { session } => {
            let jar = jar.add(session_cookie(&session));

            Ok((jar, found(paths::LANDING)).into_response())
        }
        LoginResponse::Rejected => Ok(found(paths::LANDING)),
    }
}

/// GET /login. Signed-in visitors have no business here and are sent to the
/// dashboard instead.
#[tracing::instrument(name = "Login form", skip_all)]
pub async fn login_form<D, S, P>(
    State((_, session_store, _)): State<(D, S, P)>,
    jar: CookieJar,
) -> Result<Response, FlowApiError>
where
    D: UserDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
    P: PasswordScheme + Clone + 'static,
{
    let use_case = ViewDashboardUseCase::new(session_store);

    let context = session_context(&jar);

    if let DashboardAccess::Granted(_) = use_case.execute(&context).await? {
        return Ok(found(paths::DASHBOARD));
    }

    render_login_page(StatusCode::OK, "")
}

fn render_login_page(status: StatusCode, error: &str) -> Result<Response, FlowApiError> {
    let page = LoginPage { error };

    Ok((status, Html(page.render()?)).into_response())
}
