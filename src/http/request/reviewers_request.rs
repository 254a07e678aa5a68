use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReviewersRequest {
    pub reviewers: Vec<String>,
    pub team_reviewers: Vec<String>,
}

impl ReviewersRequest {
    pub fn new(reviewers: Vec<String>, team_reviewers: Vec<String>) -> Self {
        Self {
            reviewers,
            team_reviewers,
        }
    }
}
