use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub created_at: OffsetDateTime,
}

impl User {
    /// Find a user by email. Used by the signup duplicate check.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, confirm_password, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user by username. Used by login.
    pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, confirm_password, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    /// Persist a new user exactly as submitted. Passwords are stored in
    /// plaintext: this mirrors the deployed system and must not be "fixed"
    /// without a coordinated data migration.
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password, confirm_password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password, confirm_password, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password)
        .bind(confirm_password)
        .fetch_one(db)
        .await
    }
}
