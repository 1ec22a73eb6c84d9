use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A candidate profile. `cv` is the raw uploaded file; there is no
/// uniqueness constraint, repeated submissions simply add rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserDetails {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub exp: String,
    pub cv: Vec<u8>,
    pub approved: bool,
    pub created_at: OffsetDateTime,
}

impl UserDetails {
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        exp: &str,
        cv: &[u8],
    ) -> Result<UserDetails, sqlx::Error> {
        sqlx::query_as::<_, UserDetails>(
            r#"
            INSERT INTO user_details (name, email, exp, cv)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, exp, cv, approved, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(exp)
        .bind(cv)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_name(db: &PgPool, name: &str) -> Result<Option<UserDetails>, sqlx::Error> {
        sqlx::query_as::<_, UserDetails>(
            r#"
            SELECT id, name, email, exp, cv, approved, created_at
            FROM user_details
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<UserDetails>, sqlx::Error> {
        sqlx::query_as::<_, UserDetails>(
            r#"
            SELECT id, name, email, exp, cv, approved, created_at
            FROM user_details
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Set approved on a record. A miss updates nothing and is not an error;
    /// calling this twice on the same id is safe.
    pub async fn approve(db: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE user_details
            SET approved = TRUE
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Full collection scan, CV blobs included.
    pub async fn list_all(db: &PgPool) -> Result<Vec<UserDetails>, sqlx::Error> {
        sqlx::query_as::<_, UserDetails>(
            r#"
            SELECT id, name, email, exp, cv, approved, created_at
            FROM user_details
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
