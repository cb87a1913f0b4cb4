use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryListResponseDto;
use crate::features::categories::services::CategoryService;

/// List all available categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Map of category id to type", body = CategoryListResponseDto),
        (status = 404, description = "No categories exist")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponseDto>> {
    let categories = service.list().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories exist".to_string()));
    }

    Ok(Json(CategoryListResponseDto::new(&categories)))
}
