use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::{ApiResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_question,
        questions_handlers::delete_question,
        questions_handlers::search_questions,
        questions_handlers::list_category_questions,
        // Quizzes
        quizzes_handlers::next_quiz_question,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoriesDto,
            ApiResponse<categories_dtos::CategoriesDto>,
            // Questions
            questions_dtos::QuestionDto,
            questions_dtos::QuestionPageDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::QuestionCreatedDto,
            questions_dtos::QuestionDeletedDto,
            questions_dtos::SearchQuestionsDto,
            questions_dtos::SearchResultsDto,
            questions_dtos::CategoryQuestionsDto,
            ApiResponse<questions_dtos::QuestionPageDto>,
            ApiResponse<questions_dtos::QuestionCreatedDto>,
            ApiResponse<questions_dtos::QuestionDeletedDto>,
            ApiResponse<questions_dtos::SearchResultsDto>,
            ApiResponse<questions_dtos::CategoryQuestionsDto>,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizQuestionDto,
            ApiResponse<quizzes_dtos::QuizQuestionDto>,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories"),
        (name = "questions", description = "Question listing, search, creation and deletion"),
        (name = "quizzes", description = "Quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "API documentation for the trivia game",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
