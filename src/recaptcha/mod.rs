use crate::{
    config::RecaptchaConfig,
    http::{Client, ClientRequestBuilder},
};
use serde::{Deserialize, Serialize};

pub const PARSE_FAILURE: &str = "JSON parse failure";

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    #[serde(default)]
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// Outcome of one token check. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    #[serde(skip)]
    pub success: bool,
    pub errors: Vec<String>,
}

impl VerificationResult {
    fn failure(error: impl Into<String>) -> Self {
        VerificationResult {
            success: false,
            errors: vec![error.into()],
        }
    }
}

#[derive(Clone, Debug)]
pub struct Verifier {
    http: Client,
    verify_url: String,
    secret: String,
}

impl Verifier {
    pub fn new(http: Client, config: &RecaptchaConfig) -> Self {
        Verifier {
            http,
            verify_url: config.verify_url.to_owned(),
            secret: config.secret.to_owned(),
        }
    }

    /// Asks the provider whether `token` is valid. Transport and decoding
    /// problems are reported as a failed verification, not as errors.
    pub async fn verify(&self, token: &str) -> VerificationResult {
        let response = self
            .http
            .post(&self.verify_url)
            .query("secret", &self.secret)
            .query("response", token)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                log::warn!("reCAPTCHA request failed: {}", err);
                return VerificationResult::failure(PARSE_FAILURE);
            }
        };

        match response.collect::<SiteVerifyResponse>() {
            Ok(verification) => VerificationResult {
                success: verification.success,
                errors: verification.error_codes,
            },
            Err(err) => {
                log::warn!("reCAPTCHA response unusable: {}", err);
                VerificationResult::failure(PARSE_FAILURE)
            }
        }
    }
}
