use super::*;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
};
use mockito::{Matcher, Server};
use tower::ServiceExt;

const ORIGIN: &str = "https://reviews.example.com";
const SUBMISSION: &str = r#"{
    "recaptcha": {"token": "tok"},
    "details": {
        "course": "CPSC 110",
        "user": "Alice",
        "review": "Great course",
        "reference": "https://example.com",
        "difficulty": "4",
        "quality": "10",
        "sessionTaken": "2023W1"
    }
}"#;

fn state(server: &Server) -> Arc<AppState> {
    let yaml = format!(
        "server:\n  allowed_origin: {origin}\nrecaptcha:\n  verify_url: {url}/siteverify\ngithub:\n  api_url: {url}\n  owner: acme\n  repo: courses\n",
        origin = ORIGIN,
        url = server.url()
    );
    let mut config = Config::parse(&yaml).unwrap();
    config.recaptcha.secret = "test_secret".to_owned();
    config.github.token = "test_token".to_owned();

    Arc::new(AppState::new(&config, Client::new()).unwrap())
}

fn post(content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn send(state: Arc<AppState>, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

async fn mock_recaptcha(server: &mut Server, response: &str) -> mockito::Mock {
    server
        .mock("POST", "/siteverify")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("secret".into(), "test_secret".into()),
            Matcher::UrlEncoded("response".into(), "tok".into()),
        ]))
        .with_body(response)
        .create_async()
        .await
}

#[tokio::test]
async fn should_reject_other_methods() {
    let server = Server::new_async().await;

    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let request = Request::builder()
            .method(method)
            .uri("/anything")
            .body(Body::empty())
            .unwrap();

        let (status, headers, body) = send(state(&server), request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn should_answer_preflight() {
    let server = Server::new_async().await;
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let (status, headers, body) = send(state(&server), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert!(body.is_empty());
}

#[tokio::test]
async fn should_reject_non_json_content_type() {
    let server = Server::new_async().await;

    let (status, headers, _) = send(state(&server), post("text/plain", SUBMISSION)).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
}

#[tokio::test]
async fn should_keep_cors_headers_on_oversized_body() {
    let mut server = Server::new_async().await;
    let recaptcha = server
        .mock("POST", "/siteverify")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let oversized = format!("\"{}\"", "a".repeat(3 * 1024 * 1024));

    let (status, headers, _) = send(state(&server), post("application/json", &oversized)).await;

    recaptcha.assert_async().await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
}

#[tokio::test]
async fn should_reject_unparsable_body() {
    let server = Server::new_async().await;

    let (status, headers, body) =
        send(state(&server), post("application/json", "{\"recaptcha\":")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(body, "JSON parse failure");
}

#[tokio::test]
async fn should_reject_blank_course_before_verification() {
    let mut server = Server::new_async().await;
    let recaptcha = server
        .mock("POST", "/siteverify")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (status, _, body) = send(
        state(&server),
        post("application/json", r#"{"details": {"course": "", "user": "Alice"}}"#),
    )
    .await;

    recaptcha.assert_async().await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "course must not be empty");
}

#[tokio::test]
async fn should_return_provider_errors_when_unverified() {
    let mut server = Server::new_async().await;
    let _recaptcha = mock_recaptcha(
        &mut server,
        r#"{"success": false, "error-codes": ["invalid-input-response"]}"#,
    )
    .await;
    let github = server
        .mock("GET", Matcher::Regex("^/repos/".to_owned()))
        .expect(0)
        .create_async()
        .await;

    let (status, headers, body) = send(state(&server), post("application/json", SUBMISSION)).await;

    github.assert_async().await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(body, r#"{"errors":["invalid-input-response"]}"#);
}

#[tokio::test]
async fn should_publish_verified_review() {
    let mut server = Server::new_async().await;
    let _recaptcha = mock_recaptcha(&mut server, r#"{"success": true}"#).await;
    let _base = server
        .mock("GET", "/repos/acme/courses/git/ref/heads/main")
        .with_body(r#"{"ref": "refs/heads/main", "object": {"sha": "base-sha", "type": "commit"}}"#)
        .create_async()
        .await;
    let _branch = server
        .mock("POST", "/repos/acme/courses/git/refs")
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;
    let _read = server
        .mock("GET", "/repos/acme/courses/contents/data/courseReviews/cpsc110.yaml")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/repos/acme/courses/contents/data/courseReviews/cpsc110.yaml")
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;
    let pull = server
        .mock("POST", "/repos/acme/courses/pulls")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("New review for CPSC 110 by Alice".to_owned()),
            Matcher::Regex("Difficulty: 4/5".to_owned()),
            Matcher::Regex("Quality: 5/5".to_owned()),
        ]))
        .with_status(201)
        .with_body(r#"{"number": 42, "html_url": "https://github.com/acme/courses/pull/42"}"#)
        .create_async()
        .await;

    let (status, headers, body) = send(state(&server), post("application/json", SUBMISSION)).await;

    write.assert_async().await;
    pull.assert_async().await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(body, r#"{"url":"https://github.com/acme/courses/pull/42"}"#);
}

#[tokio::test]
async fn should_serialize_publishing_failure() {
    let mut server = Server::new_async().await;
    let _recaptcha = mock_recaptcha(&mut server, r#"{"success": true}"#).await;
    let _base = server
        .mock("GET", "/repos/acme/courses/git/ref/heads/main")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let (status, headers, body) = send(state(&server), post("application/json", SUBMISSION)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["kind"], "not_found");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("resolve base branch failed"));
}

#[test]
fn should_refuse_invalid_allowed_origin() {
    let mut config = Config::parse(
        "server:\n  allowed_origin: \"https://a.example.com\\n\"\ngithub:\n  owner: acme\n  repo: courses\n",
    )
    .unwrap();
    config.github.token = "test_token".to_owned();

    assert!(AppState::new(&config, Client::new()).is_err());
}
