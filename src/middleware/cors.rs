use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// The quiz UI may be served from another origin during development; the
/// API only needs simple GETs and JSON POSTs.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any)
}
