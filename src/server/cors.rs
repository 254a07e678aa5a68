use axum::{
    http::{header, header::InvalidHeaderValue, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Cross-origin policy for the single allowed front-end origin.
#[derive(Debug, Clone)]
pub struct Cors {
    allowed_origin: HeaderValue,
}

impl Cors {
    pub fn new(allowed_origin: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Cors {
            allowed_origin: HeaderValue::from_str(allowed_origin)?,
        })
    }

    /// Answers an OPTIONS request. Only a complete pre-flight gets the
    /// policy headers, anything else is told which methods exist.
    pub fn options(&self, headers: &HeaderMap) -> Response {
        let mut response = StatusCode::OK.into_response();

        if is_preflight(headers) {
            self.apply(response.headers_mut());
        } else {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        }

        response
    }

    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allowed_origin.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

fn is_preflight(headers: &HeaderMap) -> bool {
    [
        header::ORIGIN,
        header::ACCESS_CONTROL_REQUEST_METHOD,
        header::ACCESS_CONTROL_REQUEST_HEADERS,
    ]
    .iter()
    .all(|name| headers.contains_key(name))
}
