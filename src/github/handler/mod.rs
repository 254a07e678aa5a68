pub mod branches_handler;
pub mod contents_handler;
pub mod issues_handler;
pub mod pull_request_handler;
pub mod repository_handler;
