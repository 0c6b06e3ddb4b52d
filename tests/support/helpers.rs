// tests/support/helpers.rs
use super::mocks;
use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use memo_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
        util::{SlugGenerator, Transliterator},
    },
    services::ApplicationServices,
    settings::MemoSettings,
};
use memo_core::domain::{
    memo::{MemoReadRepository, MemoWriteRepository},
    user::UserRepository,
};
use memo_core::infrastructure::{
    security::session_store::InMemorySessionRevocationStore,
    util::{DefaultSlugGenerator, KanaTransliterator},
};
use memo_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router plus handles on the in-memory stores behind it.
pub struct TestApp {
    pub router: Router,
    pub memos: Arc<mocks::InMemoryMemoRepo>,
    pub users: Arc<mocks::InMemoryUserRepo>,
}

pub fn build_services(
    memos: Arc<mocks::InMemoryMemoRepo>,
    users: Arc<mocks::InMemoryUserRepo>,
    transliterator: Arc<dyn Transliterator>,
) -> Arc<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = users;
    let memo_write: Arc<dyn MemoWriteRepository> = memos.clone();
    let memo_read: Arc<dyn MemoReadRepository> = memos;
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(mocks::DummyPasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(mocks::DummyTokenManager);
    let revocations: Arc<dyn SessionRevocationStore> =
        Arc::new(InMemorySessionRevocationStore::new());
    let clock: Arc<dyn Clock> = Arc::new(mocks::SteppingClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        user_repo,
        memo_write,
        memo_read,
        password_hasher,
        token_manager,
        revocations,
        clock,
        slugger,
        transliterator,
        MemoSettings::default(),
    ))
}

pub fn build_test_state() -> (HttpState, Arc<mocks::InMemoryMemoRepo>, Arc<mocks::InMemoryUserRepo>) {
    let memos = Arc::new(mocks::InMemoryMemoRepo::new());
    let users = Arc::new(mocks::InMemoryUserRepo::with_testers());
    let services = build_services(
        Arc::clone(&memos),
        Arc::clone(&users),
        Arc::new(KanaTransliterator::new()),
    );
    (HttpState { services }, memos, users)
}

pub fn make_test_app() -> TestApp {
    let (state, memos, users) = build_test_state();
    TestApp {
        router: build_router(state, &[]),
        memos,
        users,
    }
}

pub async fn make_test_router() -> Router {
    make_test_app().router
}

/// Send one request through the router. `body` is sent as JSON when present.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    router.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Send a request and return its status with the decoded JSON body
/// (`Value::Null` for empty bodies).
pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let resp = send(router, method, uri, token, body).await;
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).expect("expected valid json body"))
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

/// Assert a 400 naming `field`.
pub async fn assert_field_error(resp: Response, field: &str) {
    let json = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(json["field"], field, "unexpected field in {json}");
}
