use quiz_backend::{app, config::Config, services::question_service, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let app_state = AppState::from_config(&config)?;

    app_state.question_service.ensure_directories().await?;
    for dir in app_state.question_service.pack_dirs() {
        info!("Pack directory ({}): {}", dir.label, dir.path.display());
    }

    let questions = app_state.question_service.load_all().await?;
    let topics = question_service::topic_breakdown(&questions);
    info!(
        "Loaded {} questions across {} topics",
        questions.len(),
        topics.len()
    );

    if config.ai_enabled() {
        info!("AI explanations enabled (model {})", config.ai_model);
    } else {
        warn!("OPENAI_API_KEY not set; /api/explain-topic will return 503");
    }

    info!("Serving static assets from: {}", config.static_dir.display());
    let app = app(app_state, &config.static_dir);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
