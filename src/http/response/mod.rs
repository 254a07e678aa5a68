mod content_response;
mod issue_response;
mod pull_request_response;
mod ref_response;
mod state;

pub use content_response::ContentResponse;
pub use issue_response::Issue;
pub use pull_request_response::PullRequest;
pub use ref_response::RefResponse;
pub use state::Response;
