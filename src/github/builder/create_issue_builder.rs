use super::BuilderExecutor;
use crate::{
    github::github_client::GithubClient,
    http::{request::IssueRequest, response::Issue, Error},
};

pub struct CreateIssueBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    title: String,
    body: String,
    labels: Vec<String>,
}

impl<'a> CreateIssueBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreateIssueBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            title: String::new(),
            body: String::new(),
            labels: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }
}

impl BuilderExecutor for CreateIssueBuilder<'_> {
    type Output = Issue;

    async fn execute(self) -> Result<Self::Output, Error> {
        let request = IssueRequest::new(self.title, self.body, self.labels);

        self.client
            .create_issue(&self.owner, &self.repo, request)
            .await
    }
}
