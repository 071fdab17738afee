use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::{CreateQuestion, Question};
use crate::shared::constants::DEFAULT_PAGE;
use crate::shared::deserializers::{deserialize_lenient_page, deserialize_optional_id};

/// A question as served to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

pub fn to_dtos(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(QuestionDto::from).collect()
}

/// Query params for the question listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuestionsQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    #[param(value_type = Option<u32>, minimum = 0)]
    pub page: Option<u32>,

    /// Category the client is currently showing; echoed back untouched
    pub category: Option<String>,
}

impl ListQuestionsQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}

/// One page of the full question list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionPageDto {
    pub questions: Vec<QuestionDto>,
    /// Count of all questions, not just this page
    pub total_questions: i64,
    /// The `category` query parameter, echoed back.
    ///
    /// `null` when the parameter is absent; older clients that compared
    /// against the string `"None"` must check for `null` instead.
    #[serde(rename = "curret_category")]
    pub current_category: Option<String>,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// Request DTO for creating a question; all four keys are required
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(required(message = "question is required"))]
    pub question: Option<String>,

    #[validate(required(message = "answer is required"))]
    pub answer: Option<String>,

    /// Number or numeric string
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "difficulty is required"))]
    #[schema(value_type = i32)]
    pub difficulty: Option<i32>,

    /// Category id, number or numeric string
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "category is required"))]
    #[schema(value_type = i32)]
    pub category: Option<i32>,
}

impl TryFrom<CreateQuestionDto> for CreateQuestion {
    type Error = AppError;

    fn try_from(dto: CreateQuestionDto) -> Result<Self> {
        dto.validate()
            .map_err(|e| AppError::Unprocessable(e.to_string()))?;

        match (dto.question, dto.answer, dto.category, dto.difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(Self {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(AppError::Unprocessable(
                "question, answer, difficulty and category are required".to_string(),
            )),
        }
    }
}

/// Response DTO after creating a question
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionCreatedDto {
    /// Id of the new question
    pub created: i32,
    pub question_created: String,
    /// Requested page of all questions, ordered by id
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionDeletedDto {
    pub deleted_question_id: i32,
}

/// Request DTO for searching questions
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    /// Substring to look for; absent or empty matches every question
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResultsDto {
    pub questions: Vec<QuestionDto>,
    pub search_term: Option<String>,
    /// Count of all matches, not just this page
    pub total_questions: i64,
    /// Always null; searches span every category
    pub current_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryQuestionsDto {
    pub questions: Vec<QuestionDto>,
    /// Number of questions on this page
    pub total_questions: i64,
    /// Type of the requested category
    pub current_category: String,
}
