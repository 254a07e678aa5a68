use crate::{
    github::{
        builder::create_pull_request_builder::CreatePullRequestBuilder, github_client::GithubClient,
    },
    http::Error,
};

pub struct PullRequestHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> PullRequestHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        PullRequestHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreatePullRequestBuilder<'a> {
        CreatePullRequestBuilder::new(self.client, &self.owner, &self.repo)
    }

    pub async fn add_labels(&self, number: u64, labels: Vec<String>) -> Result<(), Error> {
        self.client
            .add_labels(&self.owner, &self.repo, number, labels)
            .await
    }

    pub async fn request_reviewers(
        &self,
        number: u64,
        reviewers: Vec<String>,
        team_reviewers: Vec<String>,
    ) -> Result<(), Error> {
        self.client
            .request_reviewers(&self.owner, &self.repo, number, reviewers, team_reviewers)
            .await
    }
}
