pub mod format;
pub mod rating;
pub mod submission;
mod template;

pub use format::{FormattedReview, Formatter};
pub use submission::Submission;
