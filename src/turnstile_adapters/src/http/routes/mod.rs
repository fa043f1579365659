pub mod error;
pub mod home;
pub mod landing;
pub mod login;
pub mod logout;
pub mod register;

pub use error::{ErrorResponse, FlowApiError};
pub use home::home;
pub use landing::landing;
pub use login::{LoginFormData, login, login_form};
pub use logout::logout;
pub use register::{RegisterFormData, register, register_form};

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// A 302 FOUND pointing at `target`.
///
/// The flow pins 302 for every redirect it issues, so the responses are built
/// by hand; [`axum::response::Redirect::to`] would emit 303 SEE OTHER.
pub(crate) fn found(target: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
}
