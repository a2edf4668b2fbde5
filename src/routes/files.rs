use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{dto::question_dto::FilesResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/files",
    responses(
        (status = 200, description = "Pack files with their question counts", body = FilesResponse),
        (status = 500, description = "Pack directories could not be read")
    )
)]
#[axum::debug_handler]
pub async fn list_files(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let files = state.question_service.list_files().await?;

    Ok(Json(FilesResponse {
        success: true,
        total: files.len(),
        files,
    }))
}
