use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use turnstile_application::{DashboardAccess, ViewDashboardUseCase};
use turnstile_core::{PasswordScheme, SessionStore, UserDirectory, paths};

use crate::http::pages::DashboardPage;
use crate::http::session_cookie::session_context;

use super::{error::FlowApiError, found};

/// GET /home, the protected page of the flow.
///
/// A visitor with a live session gets the dashboard; everyone else is sent to
/// the login page with a 302.
#[tracing::instrument(name = "Dashboard", skip_all)]
pub async fn home<D, S, P>(
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

    match use_case.execute(&context).await? {
        DashboardAccess::Granted(user) => {
            let page = DashboardPage {
                display_name: user.display_name(),
                email: user.email().as_str(),
            };

            Ok(Html(page.render()?).into_response())
        }
        DashboardAccess::SignedOut => Ok(found(paths::LOGIN)),
    }
}
