pub mod ai_service;
pub mod question_service;
