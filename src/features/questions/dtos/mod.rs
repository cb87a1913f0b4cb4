mod question_dto;

pub use question_dto::{
    distinct_categories, CategoryQuestionsResponseDto, CategoryRef, CreateQuestionDto,
    CreateQuestionResponseDto, DeleteQuestionResponseDto, NewQuestion, QuestionDto,
    QuestionListResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
