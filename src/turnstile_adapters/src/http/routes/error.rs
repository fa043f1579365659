use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use turnstile_application::{LoginError, LogoutError, RegisterError, ViewDashboardError};
use turnstile_core::{PasswordSchemeError, SessionStoreError, UserDirectoryError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum FlowApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for FlowApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            FlowApiError::InvalidInput(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),

            FlowApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<SessionStoreError> for FlowApiError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            SessionStoreError::UnexpectedError(e) => FlowApiError::UnexpectedError(e),
        }
    }
}

impl From<UserDirectoryError> for FlowApiError {
    fn from(error: UserDirectoryError) -> Self {
        match error {
            UserDirectoryError::AlreadyRegistered | UserDirectoryError::UnknownUser => {
                FlowApiError::InvalidInput(error.to_string())
            }
            UserDirectoryError::UnexpectedError(e) => FlowApiError::UnexpectedError(e),
        }
    }
}

impl From<PasswordSchemeError> for FlowApiError {
    fn from(error: PasswordSchemeError) -> Self {
        FlowApiError::UnexpectedError(error.to_string())
    }
}

impl From<ViewDashboardError> for FlowApiError {
    fn from(error: ViewDashboardError) -> Self {
        match error {
            ViewDashboardError::SessionStoreError(e) => e.into(),
        }
    }
}

impl From<LoginError> for FlowApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserDirectoryError(e) => e.into(),
            LoginError::SessionStoreError(e) => e.into(),
            LoginError::PasswordSchemeError(e) => e.into(),
        }
    }
}

impl From<LogoutError> for FlowApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::SessionStoreError(e) => e.into(),
        }
    }
}

impl From<RegisterError> for FlowApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::AlreadyRegistered => FlowApiError::InvalidInput(error.to_string()),
            RegisterError::UserDirectoryError(e) => e.into(),
            RegisterError::SessionStoreError(e) => e.into(),
            RegisterError::PasswordSchemeError(e) => e.into(),
        }
    }
}

impl From<askama::Error> for FlowApiError {
    fn from(error: askama::Error) -> Self {
        FlowApiError::UnexpectedError(error.to_string())
    }
}
