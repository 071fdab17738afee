//! Trivia questions: listing, search, per-category listing, create and delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions` | Page of all questions with the category mapping |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/questions/search` | Substring search on question text |
//! | GET | `/categories/{id}/questions` | Page of one category's questions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
