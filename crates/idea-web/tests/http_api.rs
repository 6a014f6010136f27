//! End-to-end HTTP tests against a server bound to a random local port.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::post;
use axum::{Json, Router};
use database::Database;
use idea_client::{IdeaClientConfig, RemoteIdeaClient};
use idea_web::{app, AppState};
use ideation_core::{fallback, Category, IdeaGenerator};
use mock_generator::{FailingGenerator, FailureMode, FixedGenerator};
use reqwest::StatusCode;
use scm_assistant::{AssistantConfig, SupplyChainAssistant};
use serde_json::{json, Value};

struct TestServer {
    base: String,
    db: Database,
    http: reqwest::Client,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.http.get(self.url(path)).send().await.unwrap()
    }

    async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.http.post(self.url(path)).json(&body).send().await.unwrap()
    }
}

async fn test_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.migrate().await.unwrap();
    db
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_server(
    generator: Arc<dyn IdeaGenerator>,
    assistant: Option<SupplyChainAssistant>,
) -> TestServer {
    let db = test_db().await;
    let state = AppState::new(db.clone(), generator, 100, assistant);
    let addr = serve(app(state)).await;

    TestServer {
        base: format!("http://{}", addr),
        db,
        http: reqwest::Client::new(),
    }
}

fn idea_form(email: &str) -> Value {
    json!({
        "name": "Dana Ruiz",
        "email": email,
        "title": "Dock appointment slots",
        "description": "Let carriers book unloading slots a day ahead.",
        "category": "manhattan"
    })
}

#[tokio::test]
async fn health_and_categories() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    let health: Value = server.get("/health").await.json().await.unwrap();
    assert_eq!(health["status"], "ok");

    let categories: Value = server.get("/api/categories").await.json().await.unwrap();
    let categories = categories.as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[1]["id"], "blue_yonder");
    assert_eq!(categories[1]["label"], "Blue Yonder");
}

#[tokio::test]
async fn submit_ideas_and_read_stats() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    let response = server.post("/api/ideas", idea_form("dana@example.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first: Value = response.json().await.unwrap();
    assert_eq!(first["created_user"], true);
    assert_eq!(first["counter_updated"], true);

    let second: Value = server
        .post("/api/ideas", idea_form("dana@example.com"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(second["created_user"], false);
    assert_eq!(second["user_id"], first["user_id"]);

    let stats: Value = server.get("/api/stats").await.json().await.unwrap();
    assert_eq!(stats["total_users"], 1);
    assert_eq!(stats["total_ideas"], 2);
    assert_eq!(stats["categories"], 6);
}

#[tokio::test]
async fn invalid_submission_is_rejected() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    let response = server.post("/api/ideas", idea_form("not-an-email")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid email"));
}

#[tokio::test]
async fn store_failure_returns_generic_message() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;
    sqlx::query("DROP TABLE ideas")
        .execute(server.db.pool())
        .await
        .unwrap();

    let response = server.post("/api/ideas", idea_form("erin@example.com")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "There was an error submitting your idea. Please try again."
    );
}


#[tokio::test]
async fn best_idea_spotlight() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    let response = server.get("/api/ideas/best").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let receipt: Value = server
        .post("/api/ideas", idea_form("dana@example.com"))
        .await
        .json()
        .await
        .unwrap();
    database::idea::set_votes(server.db.pool(), receipt["idea_id"].as_str().unwrap(), 4)
        .await
        .unwrap();

    let best: Value = server.get("/api/ideas/best").await.json().await.unwrap();
    assert_eq!(best["id"], receipt["idea_id"]);
    assert_eq!(best["votes"], 4);
    assert_eq!(best["author_name"], "Dana Ruiz");
    assert_eq!(best["author_email"], "dana@example.com");
}

#[tokio::test]
async fn analytics_dashboard() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    for _ in 0..2 {
        let response = server.post("/api/analytics/visit", json!({})).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
    server.post("/api/ideas", idea_form("dana@example.com")).await;
    database::analytics::increment_idea_count(server.db.pool(), "legacy_bucket")
        .await
        .unwrap();

    let dashboard: Value = server.get("/api/analytics").await.json().await.unwrap();
    assert_eq!(dashboard["today_visitors"], 2);
    assert_eq!(dashboard["visitors"].as_array().unwrap().len(), 1);
    assert_eq!(dashboard["total_users"], 1);
    assert_eq!(dashboard["total_ideas"], 1);
    assert_eq!(dashboard["total_submissions"], 2);

    let by_category = dashboard["ideas_by_category"].as_array().unwrap();
    let labels: Vec<&str> = by_category
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert!(labels.contains(&"Manhattan"));
    assert!(labels.contains(&"legacy_bucket"));
}

#[tokio::test]
async fn article_author_must_exist() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    let receipt: Value = server
        .post("/api/ideas", idea_form("dana@example.com"))
        .await
        .json()
        .await
        .unwrap();

    let response = server
        .post(
            "/api/articles",
            json!({
                "user_id": receipt["user_id"],
                "title": "Dock scheduling lessons",
                "content": "Book slots a day ahead.",
                "category": "logistics"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let article: Value = response.json().await.unwrap();
    assert_eq!(article["user_id"], receipt["user_id"]);

    let response = server
        .post(
            "/api/articles",
            json!({
                "user_id": "no-such-user",
                "title": "Orphan",
                "content": "Nobody wrote this.",
                "category": "general"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn knowledge_base_flow() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    let response = server
        .post(
            "/api/articles",
            json!({
                "title": "Yard management basics",
                "content": "Keep trailers moving toward the right doors.",
                "category": "logistics"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let article: Value = response.json().await.unwrap();
    assert_eq!(article["article_type"], "user_submitted");
    assert_eq!(article["status"], "published");

    let response = server
        .post(
            "/api/articles",
            json!({ "title": "No body", "content": "", "category": "logistics" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    server.post("/api/ideas", idea_form("dana@example.com")).await;

    let all: Value = server.get("/api/knowledge").await.json().await.unwrap();
    assert_eq!(all["articles"].as_array().unwrap().len(), 1);
    assert_eq!(all["ideas"].as_array().unwrap().len(), 1);

    let hits: Value = server.get("/api/knowledge?q=TRAILERS").await.json().await.unwrap();
    assert_eq!(hits["articles"].as_array().unwrap().len(), 1);
    assert!(hits["ideas"].as_array().unwrap().is_empty());

    let response = server.get("/api/knowledge/export").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"knowledge_base_export.csv\""
    );
    let csv = response.text().await.unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Type,Title,Content,Category,Votes,Author,Date");
    assert!(lines[1].starts_with("\"Article\",\"Yard management basics\""));
    assert!(lines[2].starts_with("\"Idea\",\"Dock appointment slots\""));
}

#[tokio::test]
async fn brainstorm_session_generates_then_refines() {
    let generator = FixedGenerator::new("Use RFID tagging");
    let recorder = generator.recorder();
    let server = spawn_server(Arc::new(generator), None).await;

    let response = server
        .post("/api/brainstorm/sessions", json!({ "category": "manhattan" }))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["label"], "Manhattan");
    assert_eq!(created["remote_available"], true);
    assert!(created["welcome"]
        .as_str()
        .unwrap()
        .starts_with("Hello! I'm your AI brainstorming assistant for Manhattan."));

    let id = created["session_id"].as_str().unwrap().to_string();
    let messages = format!("/api/brainstorm/sessions/{}/messages", id);

    let first: Value = server
        .post(&messages, json!({ "message": "Pallets go missing" }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(first["reply"], "Use RFID tagging");
    assert_eq!(first["source"], "remote");
    assert_eq!(first["refined"], false);
    assert_eq!(first["current_idea"], "Use RFID tagging");

    let second: Value = server
        .post(&messages, json!({ "message": "Too expensive" }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(second["refined"], true);

    let requests = recorder.requests().await;
    assert_eq!(requests.len(), 2);
    assert!(requests[1].message.contains("User Feedback: Too expensive"));

    let response = server.post(&messages, json!({ "message": "  " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let path = server.url(&format!("/api/brainstorm/sessions/{}", id));
    let response = server.http.delete(&path).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = server.http.delete(&path).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.post(&messages, json!({ "message": "Hello?" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn brainstorm_session_falls_back_when_remote_fails() {
    let server = spawn_server(Arc::new(FailingGenerator::new(FailureMode::Network)), None).await;

    let created: Value = server
        .post("/api/brainstorm/sessions", json!({ "category": "no_such_category" }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(created["category"], "other_scm");

    let path = format!(
        "/api/brainstorm/sessions/{}/messages",
        created["session_id"].as_str().unwrap()
    );
    let reply: Value = server
        .post(&path, json!({ "message": "Stockouts every Monday" }))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(reply["source"], "fallback");
    assert_eq!(
        reply["reply"],
        fallback::generate(Category::OtherScm, "Stockouts every Monday")
    );
}

#[tokio::test]
async fn endpoint_without_api_key_answers_500() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    let response = server
        .post(
            "/functions/v1/supply-chain-ai",
            json!({ "message": "x", "category": "Kinaxis", "context": [] }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("OPENAI_API_KEY"));
}

/// Minimal chat completion API that always answers with `text`.
async fn spawn_chat_api(text: &'static str) -> SocketAddr {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(move |Json(_body): Json<Value>| async move {
            Json(json!({
                "choices": [{ "message": { "role": "assistant", "content": text } }]
            }))
        }),
    );
    serve(router).await
}

#[tokio::test]
async fn session_reaches_chat_api_through_own_endpoint() {
    let chat_addr = spawn_chat_api("Schedule dock appointments by carrier ETA").await;
    let assistant = SupplyChainAssistant::new(
        AssistantConfig::builder()
            .api_key("sk-test")
            .api_url(format!("http://{}", chat_addr))
            .build(),
    )
    .unwrap();

    // Bind first so the idea client can point at this server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let client = RemoteIdeaClient::new(
        IdeaClientConfig::builder()
            .endpoint_url(format!("http://{}/functions/v1/supply-chain-ai", addr))
            .build(),
    )
    .unwrap();

    let state = AppState::new(test_db().await, Arc::new(client), 10, Some(assistant));
    let router = app(state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let http = reqwest::Client::new();
    let created: Value = http
        .post(format!("http://{}/api/brainstorm/sessions", addr))
        .json(&json!({ "category": "manhattan" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let reply: Value = http
        .post(format!(
            "http://{}/api/brainstorm/sessions/{}/messages",
            addr,
            created["session_id"].as_str().unwrap()
        ))
        .json(&json!({ "message": "Trucks arrive late" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(reply["source"], "remote");
    assert_eq!(reply["reply"], "Schedule dock appointments by carrier ETA");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let server = spawn_server(Arc::new(FixedGenerator::new("idea")), None).await;

    let response = server
        .http
        .request(reqwest::Method::OPTIONS, server.url("/functions/v1/supply-chain-ai"))
        .header("Origin", "https://hub.example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "apikey, content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
