use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{data::api_token::hash_token, router::app, state::AppState};
use test_utils::{builder::TestBuilder, context::TestContext, factory};


/// Full application over a fresh in-memory database.
struct TestApp {
    app: Router,
    context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_review_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        Self {
            app: app(AppState::new(db)),
            context,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    /// Creates a user holding the given bearer token.
    async fn user_with_token(&self, token: &str) -> entity::user::Model {
        let user = factory::user::create_user(self.db()).await.unwrap();
        factory::api_token::create_token(self.db(), user.id, hash_token(token))
            .await
            .unwrap();
        user
    }

    /// Sends a request and returns the status with the parsed JSON body.
    async fn send(
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
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    /// Adds a book through the API and returns its id.
    async fn add_book(&self, token: &str, title: &str, author: &str) -> i64 {
        let (status, body) = self
            .send(
                Method::POST,
                "/books",
                Some(token),
                Some(book_body(title, author)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["book"]["id"].as_i64().unwrap()
    }
}

fn book_body(title: &str, author: &str) -> Value {
    json!({
        "title": title,
        "author": author,
        "genre": "SciFi",
        "description": "A book used by the HTTP tests.",
        "publishedYear": 1965
    })
}

fn error_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}
