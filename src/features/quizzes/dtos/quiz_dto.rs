use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionDto;
use crate::shared::constants::ALL_CATEGORIES_SENTINEL;
use crate::shared::deserializers::deserialize_optional_id;

/// Category selection made on the quiz start screen
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category type, or `"click"` to play across all categories
    #[serde(rename = "type")]
    pub kind: String,

    /// Category id, number or numeric string; ignored for `"click"`
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<i32>,
}

impl QuizCategoryDto {
    pub fn is_all_categories(&self) -> bool {
        self.kind == ALL_CATEGORIES_SENTINEL
    }
}

/// Request DTO for drawing the next quiz question
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    pub quiz_category: QuizCategoryDto,
    /// Ids already asked in this round
    pub previous_questions: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuizQuestionDto {
    /// Null once every candidate has been asked
    pub question: Option<QuestionDto>,
}
