use crate::{
    github::{builder::create_branch_builder::CreateBranchBuilder, github_client::GithubClient},
    http::Error,
};

pub struct BranchesHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> BranchesHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        BranchesHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreateBranchBuilder<'a> {
        CreateBranchBuilder::new(self.client, &self.owner, &self.repo)
    }

    /// SHA of the commit at the tip of `branch`.
    pub async fn head_sha(&self, branch: &str) -> Result<String, Error> {
        self.client
            .get_branch_sha(&self.owner, &self.repo, branch)
            .await
    }

    pub async fn delete(&self, branch: &str) -> Result<(), Error> {
        self.client
            .delete_branch(&self.owner, &self.repo, branch)
            .await
    }
}
