use super::BuilderExecutor;
use crate::{github::github_client::GithubClient, http::Error};

pub struct CreateBranchBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    branch: String,
    sha: String,
}

impl<'a> CreateBranchBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreateBranchBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            branch: String::new(),
            sha: String::new(),
        }
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = sha.into();
        self
    }
}

impl BuilderExecutor for CreateBranchBuilder<'_> {
    type Output = ();

    async fn execute(self) -> Result<Self::Output, Error> {
        self.client
            .create_branch(&self.owner, &self.repo, &self.branch, &self.sha)
            .await
    }
}
