use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json},
};

use crate::{
    dto::question_dto::{QuestionsQuery, QuestionsResponse},
    error::{Error, Result},
    AppState,
};

type RawQuery = std::result::Result<Query<Vec<(String, String)>>, QueryRejection>;

fn questions_query(raw: RawQuery) -> Result<QuestionsQuery> {
    let Query(pairs) = raw.map_err(|e| Error::BadRequest(e.body_text()))?;
    Ok(QuestionsQuery::from_pairs(&pairs))
}

#[utoipa::path(
    get,
    path = "/api/questions/all",
    params(
        ("limit" = Option<i64>, Query, description = "Return at most this many questions; ignored unless positive"),
        ("shuffle" = Option<bool>, Query, description = "Shuffle before applying the limit")
    ),
    responses(
        (status = 200, description = "Questions from every pack file", body = QuestionsResponse),
        (status = 500, description = "Pack directories could not be read")
    )
)]
#[axum::debug_handler]
pub async fn list_all_questions(
    State(state): State<AppState>,
    query: RawQuery,
) -> Result<impl IntoResponse> {
    let query = questions_query(query)?;
    let questions = state.question_service.query(&query.for_topic(None)).await?;
    Ok(Json(QuestionsResponse::from(questions)))
}

#[utoipa::path(
    get,
    path = "/api/questions/{topic}",
    params(
        ("topic" = String, Path, description = "Topic to match case-insensitively, or `all`"),
        ("limit" = Option<i64>, Query, description = "Return at most this many questions; ignored unless positive"),
        ("shuffle" = Option<bool>, Query, description = "Shuffle before applying the limit")
    ),
    responses(
        (status = 200, description = "Questions for the topic", body = QuestionsResponse),
        (status = 400, description = "Topic is not valid UTF-8"),
        (status = 500, description = "Pack directories could not be read")
    )
)]
#[axum::debug_handler]
pub async fn list_questions_by_topic(
    State(state): State<AppState>,
    topic: std::result::Result<Path<String>, PathRejection>,
    query: RawQuery,
) -> Result<impl IntoResponse> {
    let Path(topic) = topic.map_err(|e| Error::BadRequest(e.body_text()))?;
    let query = questions_query(query)?;

    tracing::debug!(%topic, "Listing questions by topic");
    let questions = state
        .question_service
        .query(&query.for_topic(Some(topic)))
        .await?;
    Ok(Json(QuestionsResponse::from(questions)))
}
