use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::explain_dto::{ExplainTopicPayload, ExplainTopicResponse},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/explain-topic",
    request_body = ExplainTopicPayload,
    responses(
        (status = 200, description = "Generated explanation", body = ExplainTopicResponse),
        (status = 400, description = "Missing topic or malformed body"),
        (status = 503, description = "AI service not configured"),
        (status = 500, description = "AI service call failed")
    )
)]
#[axum::debug_handler]
pub async fn explain_topic(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ExplainTopicPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    // Availability is reported before the body is looked at.
    let ai_service = state.ai_service.as_ref().ok_or_else(|| {
        Error::ServiceUnavailable(
            "AI service not configured. Set OPENAI_API_KEY to enable explanations.".to_string(),
        )
    })?;

    let Json(payload) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;
    payload.validate()?;

    let topic = payload
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::BadRequest("Topic is required".to_string()))?;

    let explanation = ai_service
        .explain_topic(topic, payload.question.as_deref())
        .await?;

    Ok(Json(ExplainTopicResponse {
        success: true,
        explanation,
        topic: topic.to_string(),
    }))
}
