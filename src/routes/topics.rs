use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::question_dto::{StatsResponse, TopicsResponse},
    error::Result,
    services::question_service::{collect_topics, topic_breakdown},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "Sorted list of distinct topics", body = TopicsResponse),
        (status = 500, description = "Pack directories could not be read")
    )
)]
#[axum::debug_handler]
pub async fn list_topics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let questions = state.question_service.load_all().await?;
    let topics = collect_topics(&questions);

    Ok(Json(TopicsResponse {
        success: true,
        total: topics.len(),
        topics,
    }))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Question counts per topic", body = StatsResponse),
        (status = 500, description = "Pack directories could not be read")
    )
)]
#[axum::debug_handler]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let questions = state.question_service.load_all().await?;
    let breakdown = topic_breakdown(&questions);

    Ok(Json(StatsResponse {
        success: true,
        total_questions: questions.len(),
        total_topics: breakdown.len(),
        topic_breakdown: breakdown,
    }))
}
