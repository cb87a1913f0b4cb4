use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub category_type: String,
}
