mod question_dto;

pub use question_dto::{
    to_dtos, CategoryQuestionsDto, CreateQuestionDto, ListQuestionsQuery, QuestionCreatedDto,
    QuestionDeletedDto, QuestionDto, QuestionPageDto, SearchQuestionsDto, SearchResultsDto,
};
