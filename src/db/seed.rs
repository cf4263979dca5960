use color_eyre::Result;

use super::Db;
use crate::models::SeedData;

impl Db {
    /// Import categories and questions in a single transaction.
    /// Does nothing and returns `false` when categories already exist.
    pub async fn seed(&self, data: SeedData) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tracing::info!("database already has categories, skipping seed");
            return Ok(false);
        }

        for category in &data.categories {
            sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
                .bind(category.id)
                .bind(&category.kind)
                .execute(&mut *tx)
                .await?;
        }

        for question in &data.questions {
            sqlx::query(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
            )
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            categories = data.categories.len(),
            questions = data.questions.len(),
            "seeded database"
        );
        Ok(true)
    }
}
