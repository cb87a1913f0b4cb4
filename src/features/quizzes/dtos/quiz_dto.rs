use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionDto;

/// Category filter for a quiz round. Id `0` means all categories. Clients
/// also send a `type` label; only the id matters here.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    pub id: i32,
}

/// Request body for `POST /quizzes`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategoryDto>,
}

impl QuizRequestDto {
    /// Both fields must be present; empty previous_questions is fine.
    pub fn validate(self) -> Result<(Vec<i32>, i32)> {
        let previous = self
            .previous_questions
            .ok_or_else(|| AppError::BadRequest("previous_questions is required".to_string()))?;
        let category = self
            .quiz_category
            .ok_or_else(|| AppError::BadRequest("quiz_category is required".to_string()))?;

        Ok((previous, category.id))
    }
}

/// Response for `POST /quizzes`; `question` is null once the pool is exhausted
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    pub question: Option<QuestionDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_request() {
        let body = r#"{"previous_questions":[1,4],"quiz_category":{"id":2,"type":"Art"}}"#;
        let parsed: QuizRequestDto = serde_json::from_str(body).unwrap();
        let (previous, category) = parsed.validate().unwrap();
        assert_eq!(previous, vec![1, 4]);
        assert_eq!(category, 2);
    }

    #[test]
    fn missing_previous_questions_is_bad_request() {
        let body = r#"{"quiz_category":{"id":0}}"#;
        let parsed: QuizRequestDto = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn missing_quiz_category_is_bad_request() {
        let body = r#"{"previous_questions":[]}"#;
        let parsed: QuizRequestDto = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn null_question_serializes_as_null() {
        let json = serde_json::to_value(QuizResponseDto {
            success: true,
            question: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "question": null}));
    }
}
