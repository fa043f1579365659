mod auth_service;
mod helpers;
mod tracing;

pub use auth_service::AuthFlowService;
pub use helpers::{configure_postgresql, configure_redis, get_postgres_pool, get_redis_client};
pub use crate::tracing::init_tracing;

// Re-export commonly used types
pub use turnstile_core::{PasswordScheme, SessionStore, UserDirectory};
