//! Repository for the `faqs` table.

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};

const COLUMNS: &str = "id, question, answer, created_at, updated_at";

/// Provides CRUD operations for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question, answer)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .fetch_one(pool)
            .await
    }

    /// List FAQ entries, most recently edited first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
