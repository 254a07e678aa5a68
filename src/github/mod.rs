pub mod builder;
pub mod committer;
pub mod dto;
pub mod github_client;
pub mod handler;

pub use builder::BuilderExecutor;
pub use github_client::GithubClient;
