use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use quiz_backend::{
    services::{
        ai_service::AIService,
        question_service::{PackDir, QuestionService},
    },
    AppState,
};
use serde_json::{json, Value as JsonValue};
use tempfile::TempDir;
use tower::ServiceExt;

/// Stands in for the completion API: replies with the auth header and the
/// prompt it received so tests can inspect both.
async fn echo_completion(headers: HeaderMap, Json(body): Json<JsonValue>) -> Json<JsonValue> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let prompt = body["messages"][0]["content"].as_str().unwrap_or("").to_string();
    let content = format!(
        "auth={} model={} max_tokens={}\n{}",
        auth, body["model"], body["max_tokens"], prompt
    );
    Json(json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
}

async fn failing_completion() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

fn test_app(ai_service: Option<AIService>) -> (TempDir, Router) {
    let root = tempfile::tempdir().unwrap();
    let service = QuestionService::new(vec![PackDir::new("pack", root.path().join("pack"))]);
    let app = quiz_backend::app(AppState::new(service, ai_service), root.path().join("static"));
    (root, app)
}

fn ai_service(base_url: String) -> AIService {
    AIService::new(
        "sk-test".to_string(),
        reqwest::Client::new(),
        base_url,
        "test-model".to_string(),
        123,
    )
}

async fn post_explain(app: &Router, body: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/explain-topic")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn explain_without_credential_is_unavailable() {
    let (_root, app) = test_app(None);

    for body in [
        r#"{"topic": "Fractions"}"#,
        r#"{"topic": "Fractions", "question": "What is 1/2 + 1/4?"}"#,
        r#"{}"#,
        "not json at all",
    ] {
        let (status, resp) = post_explain(&app, body).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{}", body);
        assert_eq!(resp["success"], false);
        assert!(resp["error"].as_str().unwrap().contains("not configured"));
    }
}

#[tokio::test]
async fn explain_requires_topic() {
    let base_url = spawn_mock(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
    let (_root, app) = test_app(Some(ai_service(base_url)));

    for body in [
        r#"{}"#,
        r#"{"question": "What is 1/2 + 1/4?"}"#,
        r#"{"topic": null}"#,
        r#"{"topic": "   "}"#,
        "not json at all",
    ] {
        let (status, resp) = post_explain(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(resp["success"], false, "{}", body);
        assert!(resp["error"].is_string());
    }
}

#[tokio::test]
async fn explain_relays_generated_text() {
    let base_url = spawn_mock(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
    let (_root, app) = test_app(Some(ai_service(base_url)));

    let (status, resp) = post_explain(
        &app,
        r#"{"topic": "Fractions", "question": "What is 1/2 + 1/4?"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], true);
    assert_eq!(resp["topic"], "Fractions");

    let explanation = resp["explanation"].as_str().unwrap();
    assert!(explanation.starts_with("auth=Bearer sk-test model=\"test-model\" max_tokens=123"));
    assert!(explanation.contains("\"Fractions\""));
    assert!(explanation.contains("What is 1/2 + 1/4?"));

    let (status, resp) = post_explain(&app, r#"{"topic": "Photosynthesis"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["topic"], "Photosynthesis");
    let explanation = resp["explanation"].as_str().unwrap();
    assert!(explanation.contains("\"Photosynthesis\""));
}

#[tokio::test]
async fn explain_reports_upstream_failure() {
    let base_url =
        spawn_mock(Router::new().route("/v1/chat/completions", post(failing_completion))).await;
    let (_root, app) = test_app(Some(ai_service(base_url)));

    let (status, resp) = post_explain(&app, r#"{"topic": "Fractions"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp["success"], false);
    let error = resp["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to generate explanation"));
    assert!(error.contains("upstream exploded"));
}

#[tokio::test]
async fn explain_reports_unreachable_service() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (_root, app) = test_app(Some(ai_service(format!("http://{}/v1", addr))));

    let (status, resp) = post_explain(&app, r#"{"topic": "Fractions"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp["success"], false);
    assert!(resp["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to generate explanation"));
}
