use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres, Row};

use turnstile_core::{Email, PasswordHash, User, UserDirectory, UserDirectoryError};

/// User directory backed by the `users` table.
///
/// Queries are bound at runtime rather than through the compile-time
/// checked macros, so the crate builds without a database at hand; the
/// migration in `migrations/` is the schema contract.
#[derive(Clone)]
pub struct PostgresUserDirectory {
    pool: sqlx::PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserDirectory { pool }
    }
}

#[async_trait::async_trait]
impl UserDirectory for PostgresUserDirectory {
    #[tracing::instrument(name = "Creating user in PostgreSQL", skip_all)]
    async fn create_user(&self, user: User) -> Result<(), UserDirectoryError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (email, name, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.email().as_str())
        .bind(user.name())
        .bind(user.password_hash().as_ref().expose_secret());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserDirectoryError::AlreadyRegistered;
                }
            }
            UserDirectoryError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Looking up user in PostgreSQL", skip_all)]
    async fn find_user(&self, email: &Email) -> Result<User, UserDirectoryError> {
        let query = sqlx::query(
            r#"
                SELECT email, name, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserDirectoryError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserDirectoryError::UnknownUser);
        };

        let email: String = row
            .try_get("email")
            .map_err(|e| UserDirectoryError::UnexpectedError(e.to_string()))?;
        let name: Option<String> = row
            .try_get("name")
            .map_err(|e| UserDirectoryError::UnexpectedError(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| UserDirectoryError::UnexpectedError(e.to_string()))?;

        let email = Email::try_from(email)
            .map_err(|e| UserDirectoryError::UnexpectedError(e.to_string()))?;

        Ok(User::new(
            email,
            name,
            PasswordHash::new(Secret::new(password_hash)),
        ))
    }
}
