use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::Question;

/// Wire shape of a question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Category reference as submitted by clients: an id or a label, stored
/// loosely as text either way.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Label(String),
}

impl CategoryRef {
    fn into_text(self) -> String {
        match self {
            CategoryRef::Id(id) => id.to_string(),
            CategoryRef::Label(s) => s,
        }
    }
}

/// Validated insert payload
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

/// Request body for `POST /questions`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryRef>,
    pub difficulty: Option<i32>,
}

impl CreateQuestionDto {
    /// Presence check only: every field must be supplied and non-empty.
    pub fn validate(self) -> Result<NewQuestion> {
        let question = non_empty(self.question, "question")?;
        let answer = non_empty(self.answer, "answer")?;

        let category = self
            .category
            .map(CategoryRef::into_text)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("category is required".to_string()))?;

        let difficulty = self
            .difficulty
            .ok_or_else(|| AppError::BadRequest("difficulty is required".to_string()))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn non_empty(value: Option<String>, field: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
}

/// Request body for `POST /questions/search`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchQuestionsDto {
    /// An absent or empty term is unprocessable, matching the original API.
    pub fn term(self) -> Result<String> {
        self.search_term
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unprocessable("empty search term".to_string()))
    }
}

/// Distinct category values of the returned page, for `current_category`
pub fn distinct_categories(page: &[QuestionDto]) -> Vec<String> {
    page.iter()
        .map(|q| q.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Response for `GET /questions`
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub current_category: Vec<String>,
}

/// Response for `DELETE /questions/{id}`
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
}

/// Response for `POST /questions`
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponseDto {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub message: String,
}

/// Response for `POST /questions/search`; `current_category` is always null
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub current_category: Option<String>,
}

/// Response for `GET /categories/{id}/questions`
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub current_category: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(question: &str, answer: &str) -> CreateQuestionDto {
        CreateQuestionDto {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            category: Some(CategoryRef::Id(3)),
            difficulty: Some(2),
        }
    }

    #[test]
    fn create_accepts_numeric_category() {
        let new = dto("Who?", "Me").validate().unwrap();
        assert_eq!(new.category, "3");
        assert_eq!(new.difficulty, 2);
    }

    #[test]
    fn create_accepts_string_category() {
        let body = r#"{"question":"Q","answer":"A","category":"5","difficulty":1}"#;
        let parsed: CreateQuestionDto = serde_json::from_str(body).unwrap();
        let new = parsed.validate().unwrap();
        assert_eq!(new.category, "5");
    }

    #[test]
    fn create_rejects_missing_fields() {
        let mut d = dto("Q", "A");
        d.question = None;
        assert!(matches!(d.validate(), Err(AppError::BadRequest(_))));

        let mut d = dto("Q", "A");
        d.difficulty = None;
        assert!(matches!(d.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn create_rejects_empty_or_blank_fields() {
        let d = dto("", "A");
        assert!(matches!(d.validate(), Err(AppError::BadRequest(_))));

        let d = dto("Q", "   ");
        assert!(matches!(d.validate(), Err(AppError::BadRequest(_))));

        let mut d = dto("Q", "A");
        d.category = Some(CategoryRef::Label(String::new()));
        assert!(matches!(d.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn search_term_must_be_present_and_non_empty() {
        let d = SearchQuestionsDto {
            search_term: Some("title".to_string()),
        };
        assert_eq!(d.term().unwrap(), "title");

        let d = SearchQuestionsDto { search_term: None };
        assert!(matches!(d.term(), Err(AppError::Unprocessable(_))));

        let d = SearchQuestionsDto {
            search_term: Some(String::new()),
        };
        assert!(matches!(d.term(), Err(AppError::Unprocessable(_))));
    }

    #[test]
    fn distinct_categories_deduplicates() {
        let page: Vec<QuestionDto> = ["4", "2", "4"]
            .iter()
            .enumerate()
            .map(|(i, c)| QuestionDto {
                id: i as i32,
                question: "q".to_string(),
                answer: "a".to_string(),
                category: c.to_string(),
                difficulty: 1,
            })
            .collect();

        assert_eq!(distinct_categories(&page), vec!["2", "4"]);
    }
}
