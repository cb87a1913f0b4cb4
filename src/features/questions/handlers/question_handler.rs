use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::category_map;
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::{
    distinct_categories, CategoryQuestionsResponseDto, CreateQuestionDto,
    CreateQuestionResponseDto, DeleteQuestionResponseDto, QuestionDto, QuestionListResponseDto,
    SearchQuestionsDto, SearchQuestionsResponseDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::pagination::{paginate, PageQuery};

/// State for question handlers
#[derive(Clone)]
pub struct QuestionState {
    pub question_service: Arc<QuestionService>,
    pub category_service: Arc<CategoryService>,
}

async fn current_page(
    service: &QuestionService,
    page: i64,
) -> Result<(Vec<QuestionDto>, i64)> {
    let questions = service.list_all().await?;
    let total = questions.len() as i64;
    let dtos: Vec<QuestionDto> = questions.into_iter().map(|q| q.into()).collect();
    Ok((paginate(&dtos, page).to_vec(), total))
}

/// List questions, paginated 10 per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Page is past the data")
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(state): State<QuestionState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let (page, total) = current_page(&state.question_service, query.page).await?;

    if page.is_empty() {
        return Err(AppError::NotFound(format!(
            "no questions on page {}",
            query.page
        )));
    }

    let categories = state.category_service.list().await?;

    Ok(Json(QuestionListResponseDto {
        success: true,
        current_category: distinct_categories(&page),
        questions: page,
        total_questions: total,
        categories: category_map(&categories),
    }))
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponseDto),
        (status = 404, description = "Question not found"),
        (status = 422, description = "Delete failed")
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(state): State<QuestionState>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<DeleteQuestionResponseDto>> {
    state
        .question_service
        .delete(id)
        .await
        .map_err(|e| e.db_as(AppError::Unprocessable))?;

    let (page, total) = current_page(&state.question_service, query.page)
        .await
        .map_err(|e| e.db_as(AppError::Unprocessable))?;

    Ok(Json(DeleteQuestionResponseDto {
        success: true,
        deleted: id,
        questions: page,
        total_questions: total,
    }))
}

/// Create a new question
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponseDto),
        (status = 400, description = "Missing/empty fields or write failure")
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(state): State<QuestionState>,
    Query(query): Query<PageQuery>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<CreateQuestionResponseDto>> {
    let new = dto.validate()?;

    let created = state
        .question_service
        .insert(new)
        .await
        .map_err(|e| e.db_as(AppError::BadRequest))?;

    let (page, total) = current_page(&state.question_service, query.page)
        .await
        .map_err(|e| e.db_as(AppError::BadRequest))?;

    Ok(Json(CreateQuestionResponseDto {
        success: true,
        created: created.id,
        questions: page,
        total_questions: total,
        message: "Question successfully created!".to_string(),
    }))
}

/// Search questions by a case-insensitive substring of their text
#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageQuery),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponseDto),
        (status = 404, description = "No matches"),
        (status = 422, description = "Empty search term")
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(state): State<QuestionState>,
    Query(query): Query<PageQuery>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<SearchQuestionsResponseDto>> {
    let term = dto.term()?;

    let matches = state
        .question_service
        .search(&term)
        .await
        .map_err(|e| e.db_as(AppError::Unprocessable))?;

    if matches.is_empty() {
        return Err(AppError::NotFound(format!("no questions match '{}'", term)));
    }

    // total_questions reports the overall count, not the match count
    let total = state
        .question_service
        .count()
        .await
        .map_err(|e| e.db_as(AppError::Unprocessable))?;

    let dtos: Vec<QuestionDto> = matches.into_iter().map(|q| q.into()).collect();

    Ok(Json(SearchQuestionsResponseDto {
        success: true,
        questions: paginate(&dtos, query.page).to_vec(),
        total_questions: total,
        current_category: None,
    }))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponseDto),
        (status = 404, description = "No questions on the requested page"),
        (status = 422, description = "Lookup failed")
    ),
    tag = "questions"
)]
pub async fn list_category_questions(
    State(state): State<QuestionState>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let matches = state
        .question_service
        .list_by_category(id)
        .await
        .map_err(|e| e.db_as(AppError::Unprocessable))?;

    let total = matches.len() as i64;
    let dtos: Vec<QuestionDto> = matches.into_iter().map(|q| q.into()).collect();
    let page = paginate(&dtos, query.page).to_vec();

    if page.is_empty() {
        return Err(AppError::NotFound(format!(
            "no questions for category {}",
            id
        )));
    }

    Ok(Json(CategoryQuestionsResponseDto {
        success: true,
        questions: page,
        total_questions: total,
        current_category: id,
    }))
}
