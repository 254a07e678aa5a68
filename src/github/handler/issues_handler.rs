use crate::github::{builder::create_issue_builder::CreateIssueBuilder, github_client::GithubClient};

pub struct IssuesHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> IssuesHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        IssuesHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreateIssueBuilder<'a> {
        CreateIssueBuilder::new(self.client, &self.owner, &self.repo)
    }
}
