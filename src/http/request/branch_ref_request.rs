use serde::Serialize;

const HEADS_PREFIX: &str = "refs/heads/";

#[derive(Debug, Serialize)]
pub struct BranchRefRequest {
    #[serde(rename = "ref")]
    pub reference: String,
    pub sha: String,
}

impl BranchRefRequest {
    pub fn new(branch: &str, sha: impl Into<String>) -> Self {
        let reference = if branch.starts_with(HEADS_PREFIX) {
            branch.to_owned()
        } else {
            format!("{}{}", HEADS_PREFIX, branch)
        };

        Self {
            reference,
            sha: sha.into(),
        }
    }
}
