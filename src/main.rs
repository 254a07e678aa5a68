mod config;
mod github;
mod http;
mod logger;
mod publish;
mod recaptcha;
mod review;
mod server;

use anyhow::{Context, Result};
use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().await.context("Cannot load config file")?;
    logger::init(config.level_filter()?)?;

    log::info!("Starting");
    log::info!(
        "Publishing to {}/{} as {:?}",
        config.github.owner,
        config.github.repo,
        config.github.publish_mode
    );

    let state = AppState::new(&config, http::Client::new())?;

    server::serve(&config.server.address, state)
        .await
        .context("Cannot serve review submissions")
}
