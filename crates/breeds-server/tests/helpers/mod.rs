//! Shared helpers for the server integration tests
//!
//! Each test gets its own SQLite file in a temporary directory, so tests can
//! run in parallel without seeing each other's rows.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use breeds_server::{api, config::Config, BreedStore};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// A router over a fresh database. Keep `_dir` alive for the whole test.
pub struct TestApp {
    pub router: Router,
    pub store: BreedStore,
    _dir: TempDir,
}

impl TestApp {
    /// Migrated and seeded with the three starter breeds
    pub async fn seeded() -> Self {
        let app = Self::empty().await;
        app.store.seed_if_empty().await.unwrap();
        app
    }

    /// Migrated with no rows
    pub async fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config::default();
        config.database.url = format!("sqlite://{}", dir.path().join("breeds.db").display());
        config.database.max_connections = 2;
        config.server.enable_state_setup = true;

        let store = BreedStore::open(&config.database).await.unwrap();
        store.migrate().await.unwrap();

        let router = api::create_router(store.clone(), &config);

        Self {
            router,
            store,
            _dir: dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, body.to_string())).await
    }

    /// Send a raw, possibly malformed, body
    pub async fn put_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .uri(uri)
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Send a request and return the status with the body parsed as JSON
    /// (`Value::Null` for an empty body, a string for plain text).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        };

        (status, value)
    }
}

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// A complete, valid create payload
pub fn beagle() -> Value {
    json!({
        "name": "Beagle",
        "breed_group": "Hound",
        "temperament": "Merry, Curious, Friendly",
        "life_span": "12-15 years",
        "height_cm": { "min": 33, "max": 41 },
        "weight_kg": { "min": 9, "max": 11 },
        "description": "A small scent hound with a great nose and a big voice.",
        "image_url": "https://example.com/beagle.jpg"
    })
}

/// `beagle()` with one top-level field replaced
pub fn beagle_with(field: &str, value: Value) -> Value {
    let mut payload = beagle();
    payload[field] = value;
    payload
}
