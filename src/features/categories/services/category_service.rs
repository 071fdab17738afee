use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{category_map, CategoryMap};
use crate::features::categories::models::Category;
use crate::modules::storage::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Id-to-type mapping of every category, possibly empty
    pub async fn mapping(&self) -> Result<CategoryMap> {
        let categories = self.store.list_categories().await?;
        Ok(category_map(categories))
    }

    /// Id-to-type mapping; an empty catalogue is reported as not found
    pub async fn list(&self) -> Result<CategoryMap> {
        let categories = self.mapping().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }
        Ok(categories)
    }

    /// Looks a category up; unknown ids are a malformed reference (400)
    pub async fn get_for_filter(&self, id: i32) -> Result<Category> {
        let category = self.store.find_category(id).await.map_err(|e| {
            tracing::warn!("Category lookup {} failed: {}", id, e);
            AppError::BadRequest(format!("Category {} could not be loaded", id))
        })?;

        category.ok_or_else(|| AppError::BadRequest(format!("Category {} does not exist", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seeded_store, MemoryStore};

    #[tokio::test]
    async fn test_list_returns_every_category() {
        let service = CategoryService::new(Arc::new(seeded_store()));
        let categories = service.list().await.unwrap();

        assert_eq!(categories.len(), 3);
        assert_eq!(categories.get(&3).map(String::as_str), Some("History"));
    }

    #[tokio::test]
    async fn test_list_empty_is_not_found() {
        let service = CategoryService::new(Arc::new(MemoryStore::new()));
        assert!(matches!(service.list().await, Err(AppError::NotFound(_))));
        assert!(service.mapping().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let service = CategoryService::new(Arc::new(seeded_store()));
        assert!(matches!(
            service.get_for_filter(42).await,
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(service.get_for_filter(2).await.unwrap().kind, "Art");
    }

    #[tokio::test]
    async fn test_store_failure_on_list_is_internal() {
        let service = CategoryService::new(Arc::new(MemoryStore::failing()));
        assert!(matches!(service.list().await, Err(AppError::Database(_))));
    }
}
