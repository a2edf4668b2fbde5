pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    ai_service::AIService,
    question_service::{PackDir, QuestionService},
};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub const PACK_DIR_LABEL: &str = "pack";
pub const JSON_PACK_DIR_LABEL: &str = "json pack";

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
    /// `None` when no AI credential was configured at startup.
    pub ai_service: Option<AIService>,
}

impl AppState {
    pub fn new(question_service: QuestionService, ai_service: Option<AIService>) -> Self {
        Self {
            question_service,
            ai_service,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let question_service = QuestionService::new(vec![
            PackDir::new(PACK_DIR_LABEL, &config.pack_dir),
            PackDir::new(JSON_PACK_DIR_LABEL, &config.json_pack_dir),
        ]);
        let ai_service = AIService::from_config(config)?;

        Ok(Self::new(question_service, ai_service))
    }
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/questions/all", get(routes::questions::list_all_questions))
        .route(
            "/api/questions/:topic",
            get(routes::questions::list_questions_by_topic),
        )
        .route("/api/topics", get(routes::topics::list_topics))
        .route("/api/stats", get(routes::topics::get_stats))
        .route("/api/files", get(routes::files::list_files))
        .route("/api/explain-topic", post(routes::explain::explain_topic))
        .route("/api/openapi.json", get(routes::docs::openapi_json))
}

/// Full application: API routes, with everything else served from
/// `static_dir` (`/` maps to `index.html`).
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    api_router()
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(middleware::cors::api_cors())
        .layer(TraceLayer::new_for_http())
}
