#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use roster_api::config::{CorsOrigins, ServerConfig};
use roster_api::router::build_app_router;
use roster_api::state::AppState;
use roster_db::store::MemoryStore;

/// Origin allowed by [`test_config`].
pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows `http://localhost:5173` as CORS origin and serves the frontend from
/// the workspace `public/` directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec![TEST_ORIGIN.parse().unwrap()]),
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../public"),
        seed_demo_data: false,
    }
}

/// Build the full application router over `store`.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery) that
/// production uses. Keep a clone of the `Arc` to inspect or poison the store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

/// A fresh, empty store.
pub fn empty_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw (possibly malformed) body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a department through the API and return its id.
pub async fn create_department(store: &Arc<MemoryStore>, name: &str) -> String {
    let response = post_json(
        build_test_app(Arc::clone(store)),
        "/api/departamentos",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), 201, "creating department {name}");
    body_json(response).await["id"].as_str().unwrap().to_string()
}

/// Create an employee through the API and return its id.
pub async fn create_employee(
    store: &Arc<MemoryStore>,
    name: &str,
    role: &str,
    department_id: &str,
) -> String {
    let response = post_json(
        build_test_app(Arc::clone(store)),
        "/api/funcionarios",
        serde_json::json!({ "name": name, "role": role, "departmentId": department_id }),
    )
    .await;
    assert_eq!(response.status(), 201, "creating employee {name}");
    body_json(response).await["id"].as_str().unwrap().to_string()
}
