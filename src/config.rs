use crate::github::committer::Committer;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};

const MAIN_BRANCH_NAME: &str = "main";
const DEFAULT_CONFIG_FILE_NAME: &str = "reviewrelay.yaml";
const CONFIG_PATH_ENV: &str = "REVIEWRELAY_CONFIG";
const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
const RECAPTCHA_SECRET_ENV: &str = "RECAPTCHA_SECRET_KEY";

const DEFAULT_ADDRESS: &str = "0.0.0.0:8787";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
const DEFAULT_DATA_DIR: &str = "data/courseReviews";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
    pub server: ServerConfig,
    #[serde(default)]
    pub recaptcha: RecaptchaConfig,
    pub github: GithubConfig,
}

impl Config {
    /// Reads the file named by `REVIEWRELAY_CONFIG` (or `reviewrelay.yaml`)
    /// and fills the secrets from the environment.
    pub async fn load() -> Result<Config> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE_NAME.to_owned());

        let mut config = Config::load_from(&path).await?;
        config.github.token = required_env(GITHUB_TOKEN_ENV)?;
        config.recaptcha.secret = required_env(RECAPTCHA_SECRET_ENV)?;

        Ok(config)
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        Config::parse(&config_string)
    }

    pub fn parse(config_string: &str) -> Result<Config> {
        let config = serde_yaml::from_str::<Config>(config_string)?;

        if config.server.allowed_origin.trim().is_empty() {
            bail!("server.allowed_origin must not be empty");
        }

        Ok(config)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid log_level {:?}", self.log_level))
    }

    fn default_log_level() -> String {
        "info".to_owned()
    }
}

fn required_env(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => bail!("{} must be set", key),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_address")]
    pub address: String,
    pub allowed_origin: String,
}

impl ServerConfig {
    fn default_address() -> String {
        DEFAULT_ADDRESS.to_owned()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecaptchaConfig {
    #[serde(default = "RecaptchaConfig::default_verify_url")]
    pub verify_url: String,
    #[serde(skip)]
    pub secret: String,
}

impl Default for RecaptchaConfig {
    fn default() -> Self {
        RecaptchaConfig {
            verify_url: RecaptchaConfig::default_verify_url(),
            secret: String::new(),
        }
    }
}

impl RecaptchaConfig {
    fn default_verify_url() -> String {
        DEFAULT_RECAPTCHA_VERIFY_URL.to_owned()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishMode {
    #[default]
    PullRequest,
    Issue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "GithubConfig::default_api_url")]
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    #[serde(default = "GithubConfig::default_base_branch")]
    pub base_branch: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub reviewers: Vec<String>,
    #[serde(default)]
    pub team_reviewers: Vec<String>,
    #[serde(default = "GithubConfig::default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub publish_mode: PublishMode,
    #[serde(default)]
    pub draft: bool,
    pub committer: Option<CommitterConfig>,
    #[serde(default = "GithubConfig::default_cleanup")]
    pub cleanup_orphaned_branch: bool,
    #[serde(skip)]
    pub token: String,
}

impl GithubConfig {
    fn default_api_url() -> String {
        DEFAULT_GITHUB_API_URL.to_owned()
    }

    fn default_base_branch() -> String {
        MAIN_BRANCH_NAME.to_owned()
    }

    fn default_data_dir() -> String {
        DEFAULT_DATA_DIR.to_owned()
    }

    fn default_cleanup() -> bool {
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitterConfig {
    pub name: String,
    pub email: String,
}

impl From<CommitterConfig> for Committer {
    fn from(value: CommitterConfig) -> Self {
        Committer {
            name: value.name,
            email: value.email,
        }
    }
}
