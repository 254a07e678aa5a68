mod file;

pub use file::compose_file;

use crate::{
    config::{GithubConfig, PublishMode},
    github::{
        committer::Committer,
        dto::remote_file::ContentError,
        handler::repository_handler::RepositoryHandler,
        BuilderExecutor, GithubClient,
    },
    http,
    review::FormattedReview,
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

const BRANCH_PREFIX: &str = "new-review";

#[derive(Debug, Error)]
pub enum Error {
    #[error("{step} failed: {cause}")]
    Remote {
        step: &'static str,
        #[source]
        cause: http::Error,
    },
    #[error("existing review file is unreadable: {0}")]
    Content(#[from] ContentError),
}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Remote { cause, .. } => cause.kind(),
            Error::Content(_) => "content",
        }
    }
}

fn remote(step: &'static str) -> impl FnOnce(http::Error) -> Error {
    move |cause| Error::Remote { step, cause }
}

/// The file edit carried by one review branch.
#[derive(Debug)]
pub struct BranchChange {
    pub branch_name: String,
    pub base_sha: String,
    pub file_path: String,
    pub file_sha: Option<String>,
    pub content_before: Option<String>,
    pub content_after: String,
}

/// What gets submitted as the pull request, once.
#[derive(Debug)]
pub struct PullRequestRecord {
    pub title: String,
    pub body: String,
    pub head_branch: String,
    pub base_branch: String,
    pub labels: Vec<String>,
    pub reviewers: Vec<String>,
    pub team_reviewers: Vec<String>,
}

/// Files formatted reviews into the configured repository.
pub struct Publisher {
    github: GithubClient,
    config: GithubConfig,
    committer: Option<Committer>,
}

impl Publisher {
    pub fn new(github: GithubClient, config: GithubConfig) -> Self {
        let committer = config.committer.clone().map(Committer::from);

        Publisher {
            github,
            config,
            committer,
        }
    }

    pub fn file_path(&self, course_slug: &str) -> String {
        format!(
            "{}/{}.yaml",
            self.config.data_dir.trim_end_matches('/'),
            course_slug
        )
    }

    /// Publishes `review` and returns the public URL of what was created.
    pub async fn publish(&self, course_slug: &str, review: &FormattedReview) -> Result<String, Error> {
        match self.config.publish_mode {
            PublishMode::PullRequest => self.open_pull_request(course_slug, review).await,
            PublishMode::Issue => self.open_issue(review).await,
        }
    }

    async fn open_issue(&self, review: &FormattedReview) -> Result<String, Error> {
        let issue = self
            .repo()
            .issues()
            .create()
            .title(&review.title)
            .body(&review.body)
            .labels(self.config.labels.clone())
            .execute()
            .await
            .map_err(remote("create issue"))?;

        log::info!("opened issue #{}", issue.number);

        Ok(issue.html_url)
    }

    async fn open_pull_request(
        &self,
        course_slug: &str,
        review: &FormattedReview,
    ) -> Result<String, Error> {
        let repo = self.repo();

        log::debug!("resolving {}", self.config.base_branch);
        let base_sha = repo
            .branches()
            .head_sha(&self.config.base_branch)
            .await
            .map_err(remote("resolve base branch"))?;

        let branch_name = branch_name(Utc::now());
        repo.branches()
            .create()
            .branch(&branch_name)
            .sha(&base_sha)
            .execute()
            .await
            .map_err(remote("create branch"))?;
        log::debug!("created branch {} at {}", branch_name, base_sha);

        let record = PullRequestRecord {
            title: review.title.to_owned(),
            body: review.body.to_owned(),
            head_branch: branch_name.to_owned(),
            base_branch: self.config.base_branch.to_owned(),
            labels: self.config.labels.clone(),
            reviewers: self.config.reviewers.clone(),
            team_reviewers: self.config.team_reviewers.clone(),
        };

        let pull_request = match self
            .write_and_open(&repo, branch_name, base_sha, course_slug, review, &record)
            .await
        {
            Ok(pull_request) => pull_request,
            Err(err) => {
                log::error!("publishing {} failed: {}", record.head_branch, err);
                if self.config.cleanup_orphaned_branch {
                    self.delete_branch(&repo, &record.head_branch).await;
                }
                return Err(err);
            }
        };
        log::info!("opened pull request #{}", pull_request.number);

        if !record.labels.is_empty() {
            repo.pull_requests()
                .add_labels(pull_request.number, record.labels)
                .await
                .map_err(remote("add labels"))?;
        }

        if !record.reviewers.is_empty() || !record.team_reviewers.is_empty() {
            repo.pull_requests()
                .request_reviewers(pull_request.number, record.reviewers, record.team_reviewers)
                .await
                .map_err(remote("request reviewers"))?;
        }

        Ok(pull_request.html_url)
    }

    async fn write_and_open(
        &self,
        repo: &RepositoryHandler<'_>,
        branch_name: String,
        base_sha: String,
        course_slug: &str,
        review: &FormattedReview,
        record: &PullRequestRecord,
    ) -> Result<http::response::PullRequest, Error> {
        let file_path = self.file_path(course_slug);

        let existing = repo
            .contents()
            .get(&file_path, &branch_name)
            .await
            .map_err(remote("read review file"))?;

        let (file_sha, content_before) = match existing {
            Some(file) => {
                log::debug!("found {} at blob {}", file.path, file.sha);
                let text = file.text()?;
                (Some(file.sha), Some(text))
            }
            None => (None, None),
        };

        let change = BranchChange {
            content_after: compose_file(content_before.as_deref(), &review.entry),
            branch_name,
            base_sha,
            file_path,
            file_sha,
            content_before,
        };
        match &change.content_before {
            Some(before) => log::debug!(
                "updating {} on {} ({} -> {} bytes)",
                change.file_path,
                change.branch_name,
                before.len(),
                change.content_after.len()
            ),
            None => log::debug!(
                "creating {} on {} from {}",
                change.file_path,
                change.branch_name,
                change.base_sha
            ),
        }

        repo.contents()
            .upsert(&change.branch_name)
            .path(&change.file_path)
            .message(&review.commit_message)
            .content(&change.content_after)
            .sha(change.file_sha)
            .committer(self.committer.as_ref())
            .execute()
            .await
            .map_err(remote("write review file"))?;

        repo.pull_requests()
            .create()
            .title(&record.title)
            .body(&record.body)
            .head(&record.head_branch)
            .base(&record.base_branch)
            .draft(self.config.draft)
            .execute()
            .await
            .map_err(remote("create pull request"))
    }

    async fn delete_branch(&self, repo: &RepositoryHandler<'_>, branch: &str) {
        match repo.branches().delete(branch).await {
            Ok(()) => log::info!("deleted orphaned branch {}", branch),
            Err(err) => log::warn!("could not delete orphaned branch {}: {}", branch, err),
        }
    }

    fn repo(&self) -> RepositoryHandler<'_> {
        self.github.repo(&self.config.owner, &self.config.repo)
    }
}

fn branch_name(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();

    format!("{}-{}-{}", BRANCH_PREFIX, now.timestamp_millis(), &suffix[..8])
}
