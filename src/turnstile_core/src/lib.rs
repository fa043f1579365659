pub mod dispatch;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::{Credentials, CredentialsError},
    email::{Email, EmailError},
    password::{Password, PasswordError, PasswordHash},
    registration::{Registration, RegistrationError},
    session::{SessionContext, SessionId},
    user::{SessionUser, User},
};

pub use ports::{
    repositories::{SessionStore, SessionStoreError, UserDirectory, UserDirectoryError},
    services::{PasswordScheme, PasswordSchemeError},
};

pub use dispatch::{Method, Operation, ROUTES, Route, paths, resolve};
