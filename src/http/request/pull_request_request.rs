use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PullRequestRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
}

impl PullRequestRequest {
    pub fn new(
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
        body: impl Into<String>,
        draft: bool,
    ) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            body: body.into(),
            draft,
        }
    }
}
