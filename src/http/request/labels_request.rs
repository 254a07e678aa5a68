use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LabelsRequest {
    pub labels: Vec<String>,
}

impl LabelsRequest {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }
}
