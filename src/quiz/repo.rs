use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One quiz question as stored. Rows are serialized to the client as-is,
/// answer included; the bank is pre-seeded and read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub question: String,
    pub options: serde_json::Value,
    pub answer: String,
}

impl Question {
    /// Uniformly random sample of up to `size` questions. With fewer rows
    /// than `size` in the bank, every row comes back.
    pub async fn sample(db: &PgPool, size: i64) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, options, answer
            FROM questions
            ORDER BY RANDOM()
            LIMIT $1
            "#,
        )
        .bind(size)
        .fetch_all(db)
        .await
    }
}
