use super::BuilderExecutor;
use crate::{
    github::{committer::Committer, dto::commit_info_dto::CommitInfoDto, github_client::GithubClient},
    http::Error,
};

pub struct UpsertFileBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    path: String,
    commit_message: String,
    content: String,
    sha: Option<String>,
    committer: Option<Committer>,
    branch: String,
}

impl<'a> UpsertFileBuilder<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        UpsertFileBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            path: String::new(),
            commit_message: String::new(),
            content: String::new(),
            sha: None,
            committer: None,
            branch: branch.into(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Blob SHA of the file being replaced; `None` creates the file.
    pub fn sha(mut self, sha: Option<String>) -> Self {
        self.sha = sha;
        self
    }

    pub fn committer(mut self, committer: Option<&Committer>) -> Self {
        self.committer = committer.cloned();
        self
    }
}

impl BuilderExecutor for UpsertFileBuilder<'_> {
    type Output = ();

    async fn execute(self) -> Result<Self::Output, Error> {
        let commit_info = CommitInfoDto::new(&self.commit_message, self.committer.as_ref());

        self.client
            .upsert_file(
                &self.owner,
                &self.repo,
                &self.path,
                &self.content,
                self.branch,
                self.sha,
                commit_info,
            )
            .await
    }
}
