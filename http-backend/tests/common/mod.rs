//! Shared helpers for http-backend integration tests.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_backend::config::{BackendConfig, MongoConfig};
use http_backend::services::{InMemoryUserRepository, UserRepository};
use http_backend::{build_router, AppState, Application};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// Router wired to an in-memory repository, driven with `oneshot`.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not UTF-8")
    }
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let repo: Arc<dyn UserRepository> = users.clone();
        let router = build_router(AppState::new(repo));
        Self { router, users }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.post_raw(uri, Some("application/json"), body.to_string())
            .await
    }

    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        self.send(builder.body(body.into()).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse {
            status,
            content_type,
            body,
        }
    }
}

pub fn test_config(uri: Option<String>, database: Option<String>) -> BackendConfig {
    BackendConfig {
        common: CoreConfig { port: 0 },
        mongodb: MongoConfig { uri, database },
        otlp_endpoint: None,
    }
}

/// Real server against a local MongoDB, on a random port and throwaway database.
pub struct MongoTestApp {
    pub address: String,
    pub db_name: String,
    pub guard: Arc<http_backend::services::MongoConnectionGuard>,
}

impl MongoTestApp {
    pub async fn spawn() -> Self {
        let uri = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("http_backend_test_{}", Uuid::new_v4().simple());

        let app = Application::build(test_config(Some(uri), Some(db_name.clone())))
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());
        let guard = app.guard();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(format!("{}/health", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        MongoTestApp {
            address,
            db_name,
            guard,
        }
    }

    pub async fn cleanup(&self) {
        if let Ok(db) = self.guard.connect(None).await {
            let _ = db.client().database(&self.db_name).drop(None).await;
        }
    }
}
