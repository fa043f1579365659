pub mod argon2_scheme;

pub use argon2_scheme::Argon2PasswordScheme;
