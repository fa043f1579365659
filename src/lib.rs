//! # Turnstile - Session Authentication Flow Library
//!
//! This is a facade crate that re-exports all public APIs from the flow's
//! component crates. Use this crate to get access to the whole
//! authentication flow in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! turnstile = { path = "../turnstile" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `SessionContext`, etc.
//! - **Port traits**: `UserDirectory`, `SessionStore`, `PasswordScheme`
//! - **Use cases**: `LoginUseCase`, `RegisterUseCase`, etc.
//! - **Adapters**: `PostgresUserDirectory`, `RedisSessionStore`, `Argon2PasswordScheme`, etc.
//! - **Service**: `AuthFlowService` - The main entry point for the flow

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, ports, and the dispatch table
pub mod core {
    pub use turnstile_core::*;
}

// Re-export most commonly used core types at the root level
pub use turnstile_core::{
    Credentials, CredentialsError, Email, EmailError, Password, PasswordError, PasswordHash,
    Registration, RegistrationError, SessionContext, SessionId, SessionUser, User,
};

// The routing contract as data
pub use turnstile_core::{Method, Operation, ROUTES, Route, paths, resolve};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use turnstile_core::{
        PasswordScheme, PasswordSchemeError, SessionStore, SessionStoreError, UserDirectory,
        UserDirectoryError,
    };
}

// Re-export port traits at root level
pub use turnstile_core::{
    PasswordScheme, PasswordSchemeError, SessionStore, SessionStoreError, UserDirectory,
    UserDirectoryError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use turnstile_application::*;
}

// Re-export use cases at root level
pub use turnstile_application::{
    DashboardAccess, LoginResponse, LoginUseCase, LogoutUseCase, RegisterUseCase,
    ViewDashboardUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP handlers, session cookie plumbing, and pages
    pub mod http {
        pub use turnstile_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use turnstile_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use turnstile_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use turnstile_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use turnstile_adapters::{
    Argon2PasswordScheme, FlowApiError, HashMapSessionStore, HashMapUserDirectory,
    PostgresUserDirectory, RedisSessionStore,
};

// ============================================================================
// Auth Flow Service (Main Entry Point)
// ============================================================================

/// Main flow service
pub use turnstile_auth_service::{
    AuthFlowService, configure_postgresql, configure_redis, get_postgres_pool, get_redis_client,
    init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
