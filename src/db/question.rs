use color_eyre::Result;

use super::models::Question;
use super::Db;
use crate::models::NewQuestion;

impl Db {
    pub async fn questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn category_questions(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE category = ? ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Insert a question and return the id assigned by the store.
    pub async fn create_question(&self, question: &NewQuestion) -> Result<i64> {
        let question_id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new question created with id: {question_id}");
        Ok(question_id)
    }

    /// Returns `false` when no question had the given id.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("question deleted with id: {question_id}");
        }
        Ok(deleted)
    }
}
