use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;

/// Serve the next random unseen quiz question
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = QuizResponseDto),
        (status = 400, description = "Missing previous_questions or quiz_category"),
        (status = 500, description = "Unexpected failure")
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let (previous, category_id) = dto.validate()?;

    let question = service
        .next_question(category_id, &previous)
        .await
        .map_err(|e| e.db_as(AppError::Internal))?;

    Ok(Json(QuizResponseDto {
        success: true,
        question,
    }))
}
