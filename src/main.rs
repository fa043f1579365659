use std::sync::Arc;

use tokio::sync::RwLock;
use turnstile::{
    Argon2PasswordScheme, AuthFlowService, PostgresUserDirectory, RedisSessionStore,
    adapters::config::AuthFlowSetting, configure_postgresql, configure_redis, init_tracing,
};

/// Runs the authentication flow against the production adapters: a
/// PostgreSQL user directory, a Redis session store, and Argon2 hashing.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");

    // A missing .env file is fine; settings fall back to their defaults.
    let _ = dotenvy::dotenv();

    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let config = AuthFlowSetting::load();

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql().await;
    let user_directory = PostgresUserDirectory::new(pg_pool);

    // Setup Redis-backed sessions
    let redis_conn = Arc::new(RwLock::new(configure_redis()));
    let session_store = RedisSessionStore::new(redis_conn, config.session.ttl_seconds);

    // Create the flow service
    let service = AuthFlowService::new(user_directory, session_store, Argon2PasswordScheme::new());

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(config.application.address()).await?;
    service.run_standalone(listener).await?;

    Ok(())
}
