use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizQuestionDto, QuizRequestDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Draw the next quiz question
///
/// Returns a random question from the chosen category (or any category for
/// type `"click"`) that is not in `previous_questions`. `question` is null
/// when none are left.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = ApiResponse<QuizQuestionDto>),
        (status = 422, description = "Malformed request or store failure", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    AppJson(request): AppJson<QuizRequestDto>,
) -> Result<Json<ApiResponse<QuizQuestionDto>>> {
    let next = service
        .next_question(&request.quiz_category, &request.previous_questions)
        .await?;
    Ok(Json(ApiResponse::success(next)))
}
