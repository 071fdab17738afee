//! Storage seam between the services and the relational database.

use async_trait::async_trait;
use thiserror::Error;

use crate::features::categories::models::Category;
use crate::features::questions::models::{CreateQuestion, Question};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The row addressed by a mutation does not exist
    #[error("{0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Queries the trivia API needs from its backing store.
///
/// Listing methods return rows in the store's natural order unless the name
/// says otherwise.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>>;

    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn list_questions_by_id(&self) -> StoreResult<Vec<Question>>;

    async fn count_questions(&self) -> StoreResult<i64>;

    /// Case-insensitive literal substring match on the question text
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn questions_in_category(&self, category_id: i32) -> StoreResult<Vec<Question>>;

    /// Questions not in `exclude`, optionally restricted to one category
    async fn quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>>;

    async fn insert_question(&self, data: CreateQuestion) -> StoreResult<Question>;

    /// Fails with [`StoreError::NotFound`] when no row has `id`
    async fn delete_question(&self, id: i32) -> StoreResult<()>;
}
