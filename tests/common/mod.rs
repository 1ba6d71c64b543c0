//! Shared setup for HTTP tests: the production router over an in-memory database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use carshare::server::{
    config::{Config, Environment},
    router,
    state::AppState,
    util::jwt::{self, JwtConfig},
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub db: DatabaseConnection,
    pub jwt: JwtConfig,
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "http-test-secret".to_string(),
        jwt_expiry_hours: 1,
        port: 0,
        environment: Environment::Development,
        cors_origin: None,
    }
}

/// Builds the full application, with every middleware layer `main` uses.
pub async fn test_app() -> TestApp {
    let context = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .expect("test database should build");
    let db = context.db.expect("test context should hold a connection");

    let config = test_config();
    let jwt = JwtConfig::from_config(&config);
    let app = router::app(AppState::new(db.clone(), jwt.clone()), &config)
        .expect("router should build");

    TestApp { app, db, jwt }
}

impl TestApp {
    pub fn token_for(&self, user: &entity::user::Model) -> String {
        jwt::generate_token(user.id, user.role, &self.jwt).expect("token should sign")
    }

    /// Sends a request and returns the status with the JSON body (`Null` when empty).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body should be JSON")
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }
}
