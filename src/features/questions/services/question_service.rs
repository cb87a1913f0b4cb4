use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::NewQuestion;
use crate::features::questions::models::Question;

/// Service for question CRUD and lookups. One explicit parameterized query
/// per access pattern; no dynamic query construction.
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every question ordered by id
    pub async fn list_all(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, created_at
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(questions)
    }

    /// Overall question count
    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(total)
    }

    /// Insert a new question and return the stored row
    pub async fn insert(&self, new: NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty, created_at
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(&new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Question created: id={}", question.id);

        Ok(question)
    }

    /// Delete a question by id; NotFound if no such row exists
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);

        Ok(())
    }

    /// Case-insensitive substring search on question text, ordered by id
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let pattern = format!("%{}%", term);

        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, created_at
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(questions)
    }

    /// List the questions of one category, ordered by id. The category
    /// column stores the id as text.
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, created_at
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to list questions for category {}: {:?}",
                category_id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(questions)
    }
}
