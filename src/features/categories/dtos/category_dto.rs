use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Category id to category type, serialized as a JSON object keyed by id
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response DTO for the category listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoriesDto {
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}
