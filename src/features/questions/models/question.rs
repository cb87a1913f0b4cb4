use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for question
///
/// `category` stores the category id loosely as text; no foreign key is
/// enforced at the API layer. `created_at` never appears on the wire.
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
    pub created_at: DateTime<Utc>,
}
