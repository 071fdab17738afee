use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionDto;
use crate::features::quizzes::dtos::{QuizCategoryDto, QuizQuestionDto};
use crate::modules::storage::TriviaStore;

/// Service for serving quiz questions
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Picks a random question from the category that was not asked yet
    pub async fn next_question(
        &self,
        quiz_category: &QuizCategoryDto,
        previous_questions: &[i32],
    ) -> Result<QuizQuestionDto> {
        let category_id = if quiz_category.is_all_categories() {
            None
        } else {
            let id = quiz_category.id.ok_or_else(|| {
                AppError::Unprocessable(format!(
                    "quiz_category '{}' has no id",
                    quiz_category.kind
                ))
            })?;
            Some(id)
        };

        let candidates = self
            .store
            .quiz_candidates(category_id, previous_questions)
            .await
            .map_err(|e| AppError::Unprocessable(format!("Failed to load quiz questions: {}", e)))?;

        let question = candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .map(QuestionDto::from);

        tracing::debug!(
            "Quiz draw: category={:?}, candidates={}, picked={:?}",
            category_id,
            candidates.len(),
            question.as_ref().map(|q| q.id)
        );

        Ok(QuizQuestionDto { question })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seeded_store, MemoryStore};

    fn category(kind: &str, id: Option<i32>) -> QuizCategoryDto {
        QuizCategoryDto {
            kind: kind.to_string(),
            id,
        }
    }

    #[tokio::test]
    async fn test_never_repeats_previous_questions() {
        let service = QuizService::new(Arc::new(seeded_store()));
        let all = category("click", None);
        let mut previous = Vec::new();

        for _ in 0..12 {
            let drawn = service.next_question(&all, &previous).await.unwrap();
            let id = drawn.question.map(|q| q.id).unwrap();
            assert!(!previous.contains(&id));
            previous.push(id);
        }

        let exhausted = service.next_question(&all, &previous).await.unwrap();
        assert!(exhausted.question.is_none());
    }

    #[tokio::test]
    async fn test_restricted_to_category() {
        let service = QuizService::new(Arc::new(seeded_store()));

        for _ in 0..20 {
            let drawn = service
                .next_question(&category("Art", Some(2)), &[])
                .await
                .unwrap();
            let question = drawn.question.unwrap();
            assert!(question.id == 11 || question.id == 12);
            assert_eq!(question.category, 2);
        }

        let last = service
            .next_question(&category("Art", Some(2)), &[11])
            .await
            .unwrap();
        assert_eq!(last.question.map(|q| q.id), Some(12));
    }

    #[tokio::test]
    async fn test_category_without_id_is_unprocessable() {
        let service = QuizService::new(Arc::new(seeded_store()));
        assert!(matches!(
            service.next_question(&category("Art", None), &[]).await,
            Err(AppError::Unprocessable(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failure_is_unprocessable() {
        let service = QuizService::new(Arc::new(MemoryStore::failing()));
        assert!(matches!(
            service.next_question(&category("click", None), &[]).await,
            Err(AppError::Unprocessable(_))
        ));
    }
}
