use super::{
    branches_handler::BranchesHandler, contents_handler::ContentsHandler,
    issues_handler::IssuesHandler, pull_request_handler::PullRequestHandler,
};
use crate::github::github_client::GithubClient;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn branches(&self) -> BranchesHandler<'a> {
        BranchesHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn contents(&self) -> ContentsHandler<'a> {
        ContentsHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn pull_requests(&self) -> PullRequestHandler<'a> {
        PullRequestHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn issues(&self) -> IssuesHandler<'a> {
        IssuesHandler::new(self.client, &self.owner, &self.repo)
    }
}
