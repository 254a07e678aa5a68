use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct IssueRequest {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl IssueRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            labels,
        }
    }
}
