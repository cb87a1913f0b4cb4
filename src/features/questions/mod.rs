//! Trivia questions: paginated listing, creation, deletion, substring
//! search, and per-category listing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | One 10-question page plus the category map |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/questions/search` | Case-insensitive substring search |
//! | GET | `/categories/{id}/questions` | Questions of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
