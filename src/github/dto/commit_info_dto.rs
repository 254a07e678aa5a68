use crate::github::committer::Committer;

pub struct CommitInfoDto {
    pub message: String,
    pub committer: Option<Committer>,
}

impl CommitInfoDto {
    pub fn new(message: impl Into<String>, committer: Option<&Committer>) -> Self {
        Self {
            message: message.into(),
            committer: committer.cloned(),
        }
    }
}
