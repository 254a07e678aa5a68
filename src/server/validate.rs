use crate::{recaptcha::PARSE_FAILURE, review::Submission};
use axum::http::{header, HeaderMap};
use thiserror::Error;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Why a POST never reached verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Content-Type must be {}", JSON_CONTENT_TYPE)]
    UnsupportedMediaType,
    #[error("{}", PARSE_FAILURE)]
    Malformed,
    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

pub fn submission(headers: &HeaderMap, body: &[u8]) -> Result<Submission, Rejection> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if content_type != Some(JSON_CONTENT_TYPE) {
        return Err(Rejection::UnsupportedMediaType);
    }

    let submission: Submission = serde_json::from_slice(body).map_err(|err| {
        log::debug!("unparsable submission: {}", err);
        Rejection::Malformed
    })?;

    match submission.details.missing_field() {
        Some(field) => Err(Rejection::MissingField(field)),
        None => Ok(submission),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn should_require_exact_json_content_type() {
        let body = br#"{"details": {"course": "CPSC 110", "user": "Alice"}}"#;

        assert_eq!(
            submission(&HeaderMap::new(), body).unwrap_err(),
            Rejection::UnsupportedMediaType
        );
        assert_eq!(
            submission(&json_headers("application/json; charset=utf-8"), body).unwrap_err(),
            Rejection::UnsupportedMediaType
        );
        assert!(submission(&json_headers("application/json"), body).is_ok());
    }

    #[test]
    fn should_reject_unparsable_body() {
        let headers = json_headers("application/json");

        for body in ["{not json", "", "null", "[1, 2]"] {
            let rejection = submission(&headers, body.as_bytes()).unwrap_err();
            assert_eq!(rejection, Rejection::Malformed);
            assert_eq!(rejection.to_string(), "JSON parse failure");
        }
    }

    #[test]
    fn should_accept_nulls_and_numbers_in_text_fields() {
        let headers = json_headers("application/json");
        let body = br#"{
            "recaptcha": {"token": null},
            "details": {"course": 110, "user": "Alice", "review": "ok", "reference": null, "sessionTaken": null}
        }"#;

        let submission = submission(&headers, body).unwrap();

        assert_eq!(submission.details.course, "110");
        assert!(submission.details.reference.is_empty());
        assert!(submission.recaptcha.token.is_empty());
    }

    #[test]
    fn should_reject_blank_course_or_user() {
        let headers = json_headers("application/json");

        assert_eq!(
            submission(&headers, br#"{"details": {"course": " ", "user": "Alice"}}"#).unwrap_err(),
            Rejection::MissingField("course")
        );
        assert_eq!(
            submission(&headers, br#"{"details": {"course": "CPSC 110"}}"#).unwrap_err(),
            Rejection::MissingField("user")
        );
    }
}
