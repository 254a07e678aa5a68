use crate::{
    github::{
        builder::upsert_file_builder::UpsertFileBuilder, dto::remote_file::RemoteFile,
        github_client::GithubClient,
    },
    http::Error,
};

pub struct ContentsHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> ContentsHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ContentsHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Reads `path` on `branch`; `Ok(None)` when the file does not exist yet.
    pub async fn get(&self, path: &str, branch: &str) -> Result<Option<RemoteFile>, Error> {
        self.client
            .get_file(&self.owner, &self.repo, path, branch)
            .await
    }

    pub fn upsert(&self, branch: impl Into<String>) -> UpsertFileBuilder<'a> {
        UpsertFileBuilder::new(self.client, &self.owner, &self.repo, branch)
    }
}
