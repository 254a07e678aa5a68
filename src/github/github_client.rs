use super::{
    dto::{commit_info_dto::CommitInfoDto, pull_request_dto::PullRequestDto, remote_file::RemoteFile},
    handler::repository_handler::RepositoryHandler,
};
use crate::http::{
    request::{
        BranchRefRequest, IssueRequest, LabelsRequest, PullRequestRequest, ReviewersRequest,
        SerializeRequest, UpsertFileRequest,
    },
    response::{ContentResponse, Issue, PullRequest, RefResponse},
    Client, ClientRequestBuilder, Error,
};
use base64::{prelude::BASE64_STANDARD, Engine};

/// REST client for one GitHub installation, built once from configuration.
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(http: Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            http,
            api_url: api_url.trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    fn repo_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_url, owner, repo, path)
    }

    pub(super) async fn get_branch_sha(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<String, Error> {
        let uri = self.repo_url(owner, repo, &format!("git/ref/heads/{}", branch));

        let reference: RefResponse = self
            .http
            .get(uri)
            .github_headers(&self.token)
            .send()
            .await?
            .collect()?;

        log::debug!("{} points at {}", reference.reference, reference.object.sha);

        Ok(reference.object.sha)
    }

    pub(super) async fn create_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<(), Error> {
        let uri = self.repo_url(owner, repo, "git/refs");

        let body = BranchRefRequest::new(branch, sha).into_body()?;

        self.http
            .post(uri)
            .github_headers(&self.token)
            .body(body)
            .send()
            .await?
            .discard()
    }

    pub(super) async fn delete_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<(), Error> {
        let uri = self.repo_url(owner, repo, &format!("git/refs/heads/{}", branch));

        self.http
            .delete(uri)
            .github_headers(&self.token)
            .send()
            .await?
            .discard()
    }

    pub(super) async fn get_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Option<RemoteFile>, Error> {
        let uri = self.repo_url(owner, repo, &format!("contents/{}", path));

        let content: Option<ContentResponse> = self
            .http
            .get(uri)
            .github_headers(&self.token)
            .query("ref", branch)
            .send()
            .await?
            .collect_optional()?;

        Ok(content.map(|c| RemoteFile::new(c.sha, c.path, c.encoding, c.content)))
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) async fn upsert_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        content: &str,
        branch: String,
        sha: Option<String>,
        commit_info: CommitInfoDto,
    ) -> Result<(), Error> {
        let uri = self.repo_url(owner, repo, &format!("contents/{}", path));

        if sha.is_some() {
            log::debug!("updating {}", path);
        } else {
            log::debug!("creating {}", path);
        }

        let request = UpsertFileRequest::new(
            commit_info.message,
            BASE64_STANDARD.encode(content.as_bytes()),
            Some(branch),
            sha,
            commit_info.committer.map(Into::into),
        );

        self.http
            .put(uri)
            .github_headers(&self.token)
            .body(request.into_body()?)
            .send()
            .await?
            .discard()
    }

    pub(super) async fn create_pull_request(
        &self,
        pull_request: PullRequestDto,
    ) -> Result<PullRequest, Error> {
        let uri = self.repo_url(&pull_request.owner, &pull_request.repo, "pulls");

        let request = PullRequestRequest::new(
            pull_request.title,
            pull_request.head,
            pull_request.base,
            pull_request.pr_body,
            pull_request.draft,
        );

        self.http
            .post(uri)
            .github_headers(&self.token)
            .body(request.into_body()?)
            .send()
            .await?
            .collect()
    }

    pub(super) async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: Vec<String>,
    ) -> Result<(), Error> {
        let uri = self.repo_url(owner, repo, &format!("issues/{}/labels", number));

        let body = LabelsRequest::new(labels).into_body()?;

        self.http
            .post(uri)
            .github_headers(&self.token)
            .body(body)
            .send()
            .await?
            .discard()
    }

    pub(super) async fn request_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        reviewers: Vec<String>,
        team_reviewers: Vec<String>,
    ) -> Result<(), Error> {
        let uri = self.repo_url(owner, repo, &format!("pulls/{}/requested_reviewers", number));

        let body = ReviewersRequest::new(reviewers, team_reviewers).into_body()?;

        self.http
            .post(uri)
            .github_headers(&self.token)
            .body(body)
            .send()
            .await?
            .discard()
    }

    pub(super) async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        request: IssueRequest,
    ) -> Result<Issue, Error> {
        let uri = self.repo_url(owner, repo, "issues");

        self.http
            .post(uri)
            .github_headers(&self.token)
            .body(request.into_body()?)
            .send()
            .await?
            .collect()
    }
}
