//! Quiz rounds: random selection of an unseen question.
//!
//! Selection is a stateless single-shot computation; clients track quiz
//! progress by resubmitting the previously-served id set each round.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next random unseen question for a category |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod selector;
pub mod services;

pub use services::QuizService;
