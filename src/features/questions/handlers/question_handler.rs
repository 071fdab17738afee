use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CategoryQuestionsDto, CreateQuestionDto, ListQuestionsQuery, QuestionCreatedDto,
    QuestionDeletedDto, QuestionPageDto, SearchQuestionsDto, SearchResultsDto,
};
use crate::features::questions::models::CreateQuestion;
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, ErrorResponse, PaginationQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(ListQuestionsQuery),
    responses(
        (status = 200, description = "Page of questions", body = ApiResponse<QuestionPageDto>),
        (status = 404, description = "Page is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<ListQuestionsQuery>,
) -> Result<Json<ApiResponse<QuestionPageDto>>> {
    let page = service.list_page(query.page(), query.category).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = ApiResponse<QuestionDeletedDto>),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<QuestionDeletedDto>>> {
    let deleted_question_id = service.delete(id).await?;
    Ok(Json(ApiResponse::success(QuestionDeletedDto {
        deleted_question_id,
    })))
}

/// Create a question
///
/// All four fields must be present. The response carries the requested page
/// of all questions, ordered by id.
#[utoipa::path(
    post,
    path = "/questions",
    params(PaginationQuery),
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = ApiResponse<QuestionCreatedDto>),
        (status = 422, description = "Missing field or insert failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<ApiResponse<QuestionCreatedDto>>> {
    let created = service
        .create(CreateQuestion::try_from(dto)?, pagination.page())
        .await?;
    Ok(Json(ApiResponse::success(created)))
}

/// Search question text
#[utoipa::path(
    post,
    path = "/questions/search",
    params(PaginationQuery),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions (possibly none)", body = ApiResponse<SearchResultsDto>),
        (status = 404, description = "Search failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<ApiResponse<SearchResultsDto>>> {
    let results = service.search(dto.search_term, pagination.page()).await?;
    Ok(Json(ApiResponse::success(results)))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Page of the category's questions", body = ApiResponse<CategoryQuestionsDto>),
        (status = 400, description = "Unknown category", body = ErrorResponse),
        (status = 404, description = "Category has no questions", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_category_questions(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<CategoryQuestionsDto>>> {
    let questions = service.list_by_category(id, pagination.page()).await?;
    Ok(Json(ApiResponse::success(questions)))
}
