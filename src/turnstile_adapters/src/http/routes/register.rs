use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use turnstile_application::{
    DashboardAccess, RegisterError, RegisterUseCase, ViewDashboardUseCase,
};
use turnstile_core::{PasswordScheme, Registration, SessionStore, UserDirectory, paths};

use crate::http::pages::RegisterPage;
use crate::http::session_cookie::{session_cookie, session_context};

use super::{error::FlowApiError, found};

#[derive(Debug, Deserialize)]
pub struct RegisterFormData {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
    pub password_confirmation: Secret<String>,
}

/// POST /register.
///
/// A valid submission creates the account, signs the caller in, and redirects
/// to `/`. Validation failures and taken emails re-render the form instead;
/// no account and no session come out of those.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<D, S, P>(
    State((user_directory, session_store, password_scheme)): State<(D, S, P)>,
    jar: CookieJar,
    Form(form): Form<RegisterFormData>,
) -> Result<Response, FlowApiError>
where
    D: UserDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
    P: PasswordScheme + Clone + 'static,
{
    let use_case = RegisterUseCase::new(user_directory, session_store, password_scheme);

    let context = session_context(&jar);

    let registration = match Registration::parse(
        form.name,
        form.email,
        form.password,
        form.password_confirmation,
    ) {
        Ok(registration) => registration,
        Err(error) => {
            return render_register_page(StatusCode::UNPROCESSABLE_ENTITY, &error.to_string());
        }
    };

    match use_case.execute(&context, registration).await {
        Ok(session) => {
            let jar = jar.add(session_cookie(&session));

            Ok((jar, found(paths::LANDING)).into_response())
        }
        Err(error @ RegisterError::AlreadyRegistered) => {
            render_register_page(StatusCode::UNPROCESSABLE_ENTITY, &error.to_string())
        }
        Err(error) => Err(error.into()),
    }
}

/// GET /register. Like the login form, signed-in visitors are sent to the
/// dashboard rather than shown the form.
#[tracing::instrument(name = "Register form", skip_all)]
pub async fn register_form<D, S, P>(
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

    render_register_page(StatusCode::OK, "")
}

fn render_register_page(status: StatusCode, error: &str) -> Result<Response, FlowApiError> {
    let page = RegisterPage { error };

    Ok((status, Html(page.render()?)).into_response())
}
