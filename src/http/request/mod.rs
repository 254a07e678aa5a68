mod branch_ref_request;
mod committer_request;
mod issue_request;
mod labels_request;
mod pull_request_request;
mod reviewers_request;
mod upsert_file_request;

pub use branch_ref_request::BranchRefRequest;
pub use issue_request::IssueRequest;
pub use labels_request::LabelsRequest;
pub use pull_request_request::PullRequestRequest;
pub use reviewers_request::ReviewersRequest;
pub use upsert_file_request::UpsertFileRequest;

use super::Error;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    Json(serde_json::Value),
}

/// A fully described outbound request, executed by [`super::Client::send`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        HttpRequest {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn bearer_auth(&mut self, token: impl AsRef<str>) -> &mut Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    pub fn query(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn body(&mut self, body: Body) -> &mut Self {
        self.body = Some(body);
        self
    }
}

pub trait SerializeRequest {
    fn into_body(self) -> Result<Body, Error>
    where
        Self: Serialize + Sized,
    {
        let value = serde_json::to_value(&self).map_err(|cause| Error::SerializeRequest { cause })?;

        Ok(Body::Json(value))
    }
}

impl SerializeRequest for BranchRefRequest {}
impl SerializeRequest for IssueRequest {}
impl SerializeRequest for LabelsRequest {}
impl SerializeRequest for PullRequestRequest {}
impl SerializeRequest for ReviewersRequest {}
impl SerializeRequest for UpsertFileRequest {}
