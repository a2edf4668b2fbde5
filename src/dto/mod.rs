pub mod explain_dto;
pub mod question_dto;
