use axum::Json;
use utoipa::OpenApi;

use crate::dto::explain_dto::{ExplainTopicPayload, ExplainTopicResponse};
use crate::dto::question_dto::{FilesResponse, QuestionsResponse, StatsResponse, TopicsResponse};
use crate::models::pack_file::PackFile;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::questions::list_all_questions,
        crate::routes::questions::list_questions_by_topic,
        crate::routes::topics::list_topics,
        crate::routes::topics::get_stats,
        crate::routes::files::list_files,
        crate::routes::explain::explain_topic,
    ),
    components(schemas(
        QuestionsResponse,
        TopicsResponse,
        StatsResponse,
        FilesResponse,
        PackFile,
        ExplainTopicPayload,
        ExplainTopicResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
