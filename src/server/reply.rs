use super::{
    cors::{Cors, ALLOWED_METHODS},
    validate::Rejection,
};
use crate::{publish, recaptcha::VerificationResult};
use axum::{
    extract::rejection::BytesRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use handlebars::RenderError;
use serde::Serialize;

/// How one non-OPTIONS request ended.
#[derive(Debug)]
pub enum Outcome {
    Created(String),
    MethodNotAllowed,
    Unreadable(BytesRejection),
    Rejected(Rejection),
    Unverified(VerificationResult),
    Failed { kind: &'static str, message: String },
}

#[derive(Serialize)]
struct CreatedBody {
    url: String,
}

#[derive(Serialize)]
struct FailureBody {
    error: FailureDetail,
}

#[derive(Serialize)]
struct FailureDetail {
    kind: &'static str,
    message: String,
}

impl Outcome {
    pub fn into_response(self, cors: &Cors) -> Response {
        let mut response = match self {
            Outcome::Created(url) => (StatusCode::CREATED, Json(CreatedBody { url })).into_response(),
            Outcome::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, ALLOWED_METHODS)],
            )
                .into_response(),
            Outcome::Unreadable(rejection) => {
                (rejection.status(), rejection.body_text()).into_response()
            }
            Outcome::Rejected(Rejection::UnsupportedMediaType) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response()
            }
            Outcome::Rejected(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.to_string()).into_response()
            }
            Outcome::Unverified(verification) => {
                (StatusCode::BAD_REQUEST, Json(verification)).into_response()
            }
            Outcome::Failed { kind, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureBody {
                    error: FailureDetail { kind, message },
                }),
            )
                .into_response(),
        };

        cors.apply(response.headers_mut());
        response
    }
}

impl From<publish::Error> for Outcome {
    fn from(err: publish::Error) -> Self {
        Outcome::Failed {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<RenderError> for Outcome {
    fn from(err: RenderError) -> Self {
        Outcome::Failed {
            kind: "template",
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn cors() -> Cors {
        Cors::new("https://reviews.example.com").unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_reply_created_with_url() {
        let response = Outcome::Created("https://github.com/acme/courses/pull/42".to_owned())
            .into_response(&cors());

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://reviews.example.com"
        );
        assert_eq!(
            body_text(response).await,
            r#"{"url":"https://github.com/acme/courses/pull/42"}"#
        );
    }

    #[tokio::test]
    async fn should_reply_with_provider_error_codes() {
        let response = Outcome::Unverified(VerificationResult {
            success: false,
            errors: vec!["invalid-input-response".to_owned()],
        })
        .into_response(&cors());

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            r#"{"errors":["invalid-input-response"]}"#
        );
    }

    #[tokio::test]
    async fn should_reply_plain_text_for_malformed_body() {
        let response = Outcome::Rejected(Rejection::Malformed).into_response(&cors());

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_text(response).await, "JSON parse failure");
    }

    #[tokio::test]
    async fn should_reply_without_body_for_method_and_media_type() {
        let method = Outcome::MethodNotAllowed.into_response(&cors());
        assert_eq!(method.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(method.headers()[header::ALLOW], "POST, OPTIONS");
        assert!(method.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert_eq!(body_text(method).await, "");

        let media = Outcome::Rejected(Rejection::UnsupportedMediaType).into_response(&cors());
        assert_eq!(media.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(media.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert_eq!(body_text(media).await, "");
    }

    #[tokio::test]
    async fn should_reply_serialized_failure() {
        let response = Outcome::Failed {
            kind: "conflict",
            message: "create pull request failed".to_owned(),
        }
        .into_response(&cors());

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            r#"{"error":{"kind":"conflict","message":"create pull request failed"}}"#
        );
    }
}
