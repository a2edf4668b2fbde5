use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ExplainTopicPayload {
    #[validate(required(message = "Topic is required"))]
    pub topic: Option<String>,
    /// Question text the student is working on, passed through to the prompt.
    pub question: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExplainTopicResponse {
    pub success: bool,
    pub explanation: String,
    pub topic: String,
}
