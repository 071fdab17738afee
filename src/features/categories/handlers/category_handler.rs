use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoriesDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List all categories
///
/// Returns every category as an `{id: type}` object.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category mapping", body = ApiResponse<CategoriesDto>),
        (status = 404, description = "No categories exist", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoriesDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(CategoriesDto { categories })))
}
