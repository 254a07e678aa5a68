use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Object {
    pub sha: String,
}

/// Body of `GET /repos/{owner}/{repo}/git/ref/heads/{branch}`.
#[derive(Debug, Deserialize)]
pub struct RefResponse {
    #[serde(rename = "ref")]
    pub reference: String,
    pub object: Object,
}
