use std::sync::Arc;

use crate::core::error::Result;
use crate::features::questions::dtos::QuestionDto;
use crate::features::questions::services::QuestionService;
use crate::features::quizzes::selector;

/// Category id that selects the full candidate pool
pub const ALL_CATEGORIES: i32 = 0;

/// Service for quiz rounds. No server-side session state: the caller
/// resubmits the previously-served id set on every call.
pub struct QuizService {
    questions: Arc<QuestionService>,
}

impl QuizService {
    pub fn new(questions: Arc<QuestionService>) -> Self {
        Self { questions }
    }

    /// Pick a random unseen question from the category's candidate pool,
    /// or from all questions when `category_id` is 0. `None` once the
    /// pool is exhausted.
    pub async fn next_question(
        &self,
        category_id: i32,
        previous: &[i32],
    ) -> Result<Option<QuestionDto>> {
        let candidates = if category_id == ALL_CATEGORIES {
            self.questions.list_all().await?
        } else {
            self.questions.list_by_category(category_id).await?
        };

        let pool: Vec<QuestionDto> = candidates.into_iter().map(|q| q.into()).collect();
        let picked = selector::choose_unseen(&pool, previous, &mut rand::thread_rng()).cloned();

        if picked.is_none() {
            tracing::debug!(
                "Quiz pool exhausted: category_id={}, previous={}",
                category_id,
                previous.len()
            );
        }

        Ok(picked)
    }
}
