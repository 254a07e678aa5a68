use serde::Deserialize;

/// Body of `GET /repos/{owner}/{repo}/contents/{path}` for a single file.
#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    pub sha: String,
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}
