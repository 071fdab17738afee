use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::CategoryService;
use crate::features::questions::dtos::{
    to_dtos, CategoryQuestionsDto, QuestionCreatedDto, QuestionPageDto, SearchResultsDto,
};
use crate::features::questions::models::CreateQuestion;
use crate::modules::storage::{StoreError, TriviaStore};
use crate::shared::types::paginate;

/// Service for question listing, search and mutation
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
    categories: Arc<CategoryService>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>, categories: Arc<CategoryService>) -> Self {
        Self { store, categories }
    }

    /// One page of all questions plus the category mapping
    pub async fn list_page(
        &self,
        page: u32,
        requested_category: Option<String>,
    ) -> Result<QuestionPageDto> {
        let questions = self.store.list_questions().await?;
        let total_questions = questions.len() as i64;

        let page_questions = paginate(questions, page);
        if page_questions.is_empty() {
            return Err(AppError::NotFound(format!("No questions on page {}", page)));
        }

        Ok(QuestionPageDto {
            questions: to_dtos(page_questions),
            total_questions,
            current_category: requested_category,
            categories: self.categories.mapping().await?,
        })
    }

    /// Deletes a question, returning its id
    pub async fn delete(&self, id: i32) -> Result<i32> {
        match self.store.delete_question(id).await {
            Ok(()) => Ok(id),
            Err(StoreError::NotFound(what)) => Err(AppError::NotFound(what)),
            Err(StoreError::Database(e)) => Err(AppError::Unprocessable(format!(
                "Failed to delete question {}: {}",
                id, e
            ))),
        }
    }

    /// Persists a question and returns page `page` of all questions ordered by id
    pub async fn create(&self, data: CreateQuestion, page: u32) -> Result<QuestionCreatedDto> {
        let unprocessable =
            |e: StoreError| AppError::Unprocessable(format!("Failed to create question: {}", e));

        let question = self
            .store
            .insert_question(data)
            .await
            .map_err(unprocessable)?;

        let questions = self
            .store
            .list_questions_by_id()
            .await
            .map_err(unprocessable)?;
        let total_questions = self.store.count_questions().await.map_err(unprocessable)?;

        Ok(QuestionCreatedDto {
            created: question.id,
            question_created: question.question,
            questions: to_dtos(paginate(questions, page)),
            total_questions,
        })
    }

    /// Case-insensitive substring search; no term matches everything.
    ///
    /// Zero matches is a successful, empty result.
    pub async fn search(&self, search_term: Option<String>, page: u32) -> Result<SearchResultsDto> {
        let matches = match search_term.as_deref().filter(|term| !term.is_empty()) {
            Some(term) => self.store.search_questions(term).await,
            None => self.store.list_questions().await,
        }
        .map_err(|e| AppError::NotFound(format!("Search failed: {}", e)))?;

        let total_questions = matches.len() as i64;

        Ok(SearchResultsDto {
            questions: to_dtos(paginate(matches, page)),
            search_term,
            total_questions,
            current_category: None,
        })
    }

    /// One page of the questions in a category
    pub async fn list_by_category(
        &self,
        category_id: i32,
        page: u32,
    ) -> Result<CategoryQuestionsDto> {
        let category = self.categories.get_for_filter(category_id).await?;

        let questions = self
            .store
            .questions_in_category(category.id)
            .await
            .map_err(|e| {
                AppError::BadRequest(format!(
                    "Failed to load questions for category {}: {}",
                    category.id, e
                ))
            })?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "Category {} has no questions",
                category.id
            )));
        }

        let page_questions = paginate(questions, page);

        Ok(CategoryQuestionsDto {
            total_questions: page_questions.len() as i64,
            questions: to_dtos(page_questions),
            current_category: category.kind,
        })
    }
}
