use base64::{prelude::BASE64_STANDARD, Engine};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("unsupported content encoding {0:?}")]
    UnsupportedEncoding(String),
    #[error("file content is not valid base64")]
    Base64(#[from] base64::DecodeError),
    #[error("file content is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// A file read from a branch. `sha` is the blob id required to update it in place.
#[derive(Debug, Clone)]
pub struct RemoteFile {
    pub sha: String,
    pub path: String,
    encoding: String,
    encoded_content: String,
}

impl RemoteFile {
    pub fn new(
        sha: impl Into<String>,
        path: impl Into<String>,
        encoding: impl Into<String>,
        encoded_content: impl Into<String>,
    ) -> Self {
        RemoteFile {
            sha: sha.into(),
            path: path.into(),
            encoding: encoding.into(),
            encoded_content: encoded_content.into(),
        }
    }

    pub fn text(&self) -> Result<String, ContentError> {
        match self.encoding.as_str() {
            "base64" => {
                // the contents API wraps base64 at 60 columns
                let compact: String = self
                    .encoded_content
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let bytes = BASE64_STANDARD.decode(compact)?;
                Ok(String::from_utf8(bytes)?)
            }
            "" | "utf-8" => Ok(self.encoded_content.to_owned()),
            other => Err(ContentError::UnsupportedEncoding(other.to_owned())),
        }
    }
}
