pub mod config;
pub mod hashing;
pub mod http;
pub mod persistence;

// Re-export the pieces a composition root wires together
pub use config::settings::AuthFlowSetting;
pub use hashing::Argon2PasswordScheme;
pub use http::routes::FlowApiError;
pub use persistence::{
    HashMapSessionStore, HashMapUserDirectory, PostgresUserDirectory, RedisSessionStore,
};
