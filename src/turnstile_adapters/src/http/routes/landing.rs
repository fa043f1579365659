use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::http::pages::LandingPage;

use super::error::FlowApiError;

/// The public landing page. Everyone sees the same page, signed in or not;
/// it is also where every redirect in the flow points.
#[tracing::instrument(name = "Landing page", skip_all)]
pub async fn landing() -> Result<impl IntoResponse, FlowApiError> {
    Ok(Html(LandingPage.render()?))
}
