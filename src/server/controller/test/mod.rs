//! Request-level tests driving the full router with `tower::ServiceExt::oneshot`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    middleware::{api_key::API_KEY_HEADER, session::SESSION_HEADER},
    router::router,
    service::sms::test::RecordingSmsGateway,
    state::AppState,
};

mod admin;

const TEST_API_KEY: &str = "test-api-key";

/// A router wired to an in-memory database and a recording SMS gateway.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
    sms: Arc<RecordingSmsGateway>,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        let env: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_URL", "sqlite::memory:"),
            ("API_KEY", TEST_API_KEY),
            ("SMS_GATEWAY_URL", "http://sms.invalid/send"),
            ("SMS_GATEWAY_TOKEN", "sms-token"),
            ("COOKIE_SECURE", "false"),
        ]);
        let config = Config::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();

        let sms = Arc::new(RecordingSmsGateway::new());
        let state = AppState::new(db.clone(), Arc::new(config), sms.clone());

        Self {
            router: router(state),
            db,
            sms,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Logs in through the OTP flow and returns the session token.
    async fn login(&self, phone_number: &str) -> String {
        let requested = self
            .send(json_request(
                Method::POST,
                "/api/auth/otp/request",
                json!({ "phoneNumber": phone_number }),
            ))
            .await;
        assert_eq!(requested.status, StatusCode::OK);

        let code = self.sms.last_code_for(phone_number).unwrap();
        let verified = self
            .send(json_request(
                Method::POST,
                "/api/auth/otp/verify",
                json!({ "phoneNumber": phone_number, "otpCode": code }),
            ))
            .await;
        assert_eq!(verified.status, StatusCode::OK);

        verified.body["sessionId"].as_str().unwrap().to_string()
    }
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_session(mut request: Request<Body>, token: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(SESSION_HEADER, token.parse().unwrap());
    request
}

fn with_api_key(mut request: Request<Body>) -> Request<Body> {
    request
        .headers_mut()
        .insert(API_KEY_HEADER, TEST_API_KEY.parse().unwrap());
    request
}
