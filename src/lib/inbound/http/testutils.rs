//! Helpers to drive the full router against a private in-memory database.

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use crate::domain::brand::service::Service as BrandServiceImpl;
use crate::domain::device::service::Service as DeviceServiceImpl;
use crate::inbound::http::router;
use crate::outbound::sqlite::Sqlite;

pub struct TestContext {
    router: Router,
}

impl TestContext {
    pub async fn setup() -> Self {
        let sqlite = Sqlite::in_memory().await.unwrap();
        let router = router(
            BrandServiceImpl::new(sqlite.clone()),
            DeviceServiceImpl::new(sqlite),
        );

        Self { router }
    }

    /// Sends one request and returns the status with the decoded JSON body, `Value::Null` when
    /// the body is empty.
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn send_json(&self, method: Method, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json(Method::POST, uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send_json(Method::POST, uri, body.to_string()).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json(Method::PUT, uri, body.to_string()).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json(Method::PATCH, uri, body.to_string()).await
    }

    /// Creates a device through the API and returns its `data` object.
    pub async fn create_device(&self, name: &str, brand: &str) -> Value {
        let (status, body) = self
            .post(
                "/api/v1/user/devices",
                serde_json::json!({"name": name, "brand": brand}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);

        body["data"].clone()
    }

    /// Creates a brand through the API and returns its `data` object.
    pub async fn create_brand(&self, name: &str) -> Value {
        let (status, body) = self
            .post("/api/v1/user/brands", serde_json::json!({"name": name}))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);

        body["data"].clone()
    }
}
