//! Integration tests driving the real HTTP gateway against a mock backend.

use serde_json::json;
use shelfmark_client::{
    ApiClient, BookController, FileTokenStore, Gateway, RegistrationController, RouteHistory,
    StaticToken, LOGIN_ROUTE,
};
use shelfmark_client::gateway::Method;
use shelfmark_core::{messages, BookField, RegistrationField, SubmissionOutcome};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fill_registration(controller: &mut RegistrationController<ApiClient>) {
    controller.update_field(RegistrationField::Email, "reader@example.com");
    controller.update_field(RegistrationField::Password, "hunter22");
    controller.update_field(RegistrationField::PasswordConfirm, "hunter22");
    controller.update_field(RegistrationField::Name, "Kim Reader");
}

fn fill_book(controller: &mut BookController<ApiClient>) {
    controller.update_field(BookField::Title, "작별하지 않는다");
    controller.update_field(BookField::Description, "Jeju, 1948.");
    controller.update_field(BookField::Genre, "역사/문화");
}

#[tokio::test]
async fn test_send_returns_status_and_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/echo"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "ping": 1 })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let response = client
        .send(Method::POST, "/api/v1/echo", Some(&json!({ "ping": 1 })), None)
        .await
        .unwrap();

    assert_eq!(response.status, 202);
    assert_eq!(response.body, Some(json!({ "ok": true })));
}

#[tokio::test]
async fn test_send_tolerates_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let response = client
        .send(Method::POST, "/api/v1/books", Some(&json!({})), None)
        .await
        .unwrap();

    assert_eq!(response.status, 500);
    assert!(response.body.is_none());
}

#[tokio::test]
async fn test_registration_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .and(body_json(json!({
            "email": "reader@example.com",
            "password": "hunter22",
            "name": "Kim Reader",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = RegistrationController::new(ApiClient::new(&server.uri()).unwrap());
    fill_registration(&mut controller);
    let mut history = RouteHistory::new();

    let outcome = controller.submit(&mut history).await;

    assert!(outcome.is_success());
    assert_eq!(history.visited(), [LOGIN_ROUTE.to_string()]);

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_registration_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let mut controller = RegistrationController::new(ApiClient::new(&server.uri()).unwrap());
    fill_registration(&mut controller);
    let mut history = RouteHistory::new();

    let outcome = controller.submit(&mut history).await;

    assert!(matches!(outcome, SubmissionOutcome::Conflict { .. }));
    assert_eq!(controller.message(), Some(messages::EMAIL_IN_USE));
    assert!(history.current().is_none());
}

#[tokio::test]
async fn test_invalid_registration_never_hits_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = RegistrationController::new(ApiClient::new(&server.uri()).unwrap());
    fill_registration(&mut controller);
    controller.update_field(RegistrationField::PasswordConfirm, "different");
    let mut history = RouteHistory::new();

    let outcome = controller.submit(&mut history).await;

    assert!(matches!(outcome, SubmissionOutcome::ValidationFailed { .. }));
}

#[tokio::test]
async fn test_book_creation_with_token_file() {
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("token");
    std::fs::write(&token_path, "secret-token\n").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/books"))
        .and(header("authorization", "Bearer secret-token"))
        .and(body_json(json!({
            "title": "작별하지 않는다",
            "author": "",
            "description": "Jeju, 1948.",
            "genre": "역사/문화",
            "coverUrl": "",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = BookController::new(
        ApiClient::new(&server.uri()).unwrap(),
        Box::new(FileTokenStore::new(token_path)),
    );
    fill_book(&mut controller);

    let outcome = controller.submit().await;

    assert!(outcome.is_success());
    assert_eq!(controller.message(), Some(messages::BOOK_CREATED));
    assert!(controller.form().title.is_empty());
    assert!(controller.form().genre.is_empty());
}

#[tokio::test]
async fn test_book_creation_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "expired" })))
        .mount(&server)
        .await;

    let mut controller = BookController::new(
        ApiClient::new(&server.uri()).unwrap(),
        Box::new(StaticToken::default()),
    );
    fill_book(&mut controller);

    let outcome = controller.submit().await;

    assert!(matches!(outcome, SubmissionOutcome::Unauthorized { .. }));
    assert_eq!(controller.message(), Some("로그인이 필요합니다."));
    assert!(!controller.is_submitting());

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on the discard port.
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let mut controller = BookController::new(client, Box::new(StaticToken::default()));
    fill_book(&mut controller);

    let outcome = controller.submit().await;

    assert!(matches!(outcome, SubmissionOutcome::NetworkError { .. }));
    assert_eq!(controller.message(), Some(messages::BOOK_CREATE_FAILED));
    assert!(!controller.is_submitting());
    assert_eq!(controller.form().title, "작별하지 않는다");
}
