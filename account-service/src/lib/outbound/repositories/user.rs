use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::domain::user::models::Handle;
use crate::domain::user::models::Secret;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::FieldError;
use crate::user::errors::UserError;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    handle: String,
    secret: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt =
            move |e: FieldError| UserError::StoreFault(format!("Corrupt user row {}: {}", id, e));

        Ok(User {
            id: UserId(id),
            handle: Handle::new(row.handle).map_err(corrupt)?,
            secret: Secret::new(row.secret).map_err(corrupt)?,
        })
    }
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url` and apply the embedded migrations.
    ///
    /// In-memory databases live as long as their connection, so they get a
    /// single connection that is never recycled.
    pub async fn connect(url: &str) -> Result<Self, anyhow::Error> {
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 5 })
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;
        tracing::info!(
            database = "sqlite",
            in_memory,
            "Database connection pool created"
        );

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(database = "sqlite", "Database migrations completed");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, handle: &Handle, secret: &Secret) -> Result<UserId, UserError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (handle, secret)
            VALUES (?1, ?2)
            "#,
        )
        .bind(handle.as_str())
        .bind(secret.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::DuplicateHandle(handle.to_string());
                }
            }
            UserError::StoreFault(e.to_string())
        })?;

        Ok(UserId(result.last_insert_rowid()))
    }

    async fn find_by_credentials(
        &self,
        handle: &Handle,
        secret: &Secret,
    ) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, handle, secret
            FROM users
            WHERE handle = ?1 AND secret = ?2
            "#,
        )
        .bind(handle.as_str())
        .bind(secret.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::StoreFault(e.to_string()))?;

        row.map(User::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> SqliteUserRepository {
        SqliteUserRepository::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database")
    }

    fn handle(value: &str) -> Handle {
        Handle::new(value.to_string()).unwrap()
    }

    fn secret(value: &str) -> Secret {
        Secret::new(value.to_string()).unwrap()
    }

    async fn count_handle(repository: &SqliteUserRepository, value: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE handle = ?1")
            .bind(value)
            .fetch_one(&repository.pool)
            .await
            .expect("Failed to count users")
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repository = repository().await;

        let first = repository
            .create(&handle("alice"), &secret("p1"))
            .await
            .unwrap();
        let second = repository
            .create(&handle("bob"), &secret("p2"))
            .await
            .unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_create_duplicate_handle() {
        let repository = repository().await;

        repository
            .create(&handle("alice"), &secret("p1"))
            .await
            .unwrap();
        let result = repository.create(&handle("alice"), &secret("p2")).await;

        assert_eq!(result, Err(UserError::DuplicateHandle("alice".to_string())));
        assert_eq!(count_handle(&repository, "alice").await, 1);
    }

    #[tokio::test]
    async fn test_handles_are_case_sensitive() {
        let repository = repository().await;

        repository
            .create(&handle("alice"), &secret("p1"))
            .await
            .unwrap();
        let result = repository.create(&handle("Alice"), &secret("p1")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_find_by_credentials_requires_both_fields() {
        let repository = repository().await;

        let id = repository
            .create(&handle("alice"), &secret("p1"))
            .await
            .unwrap();

        let found = repository
            .find_by_credentials(&handle("alice"), &secret("p1"))
            .await
            .unwrap()
            .expect("User should be found");
        assert_eq!(found.id, id);
        assert_eq!(found.handle.as_str(), "alice");

        let wrong_secret = repository
            .find_by_credentials(&handle("alice"), &secret("wrong"))
            .await
            .unwrap();
        let unknown_handle = repository
            .find_by_credentials(&handle("mallory"), &secret("p1"))
            .await
            .unwrap();
        assert_eq!(wrong_secret, None);
        assert_eq!(unknown_handle, None);
    }
}
