mod cors;
mod handler;
mod reply;
mod validate;

use crate::{
    config::Config,
    github::GithubClient,
    http::Client,
    publish::Publisher,
    recaptcha::Verifier,
    review::Formatter,
};
use anyhow::{Context, Result};
use axum::Router;
use cors::Cors;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Everything a request needs, built once at start-up and shared read-only.
pub struct AppState {
    cors: Cors,
    verifier: Verifier,
    formatter: Formatter,
    publisher: Publisher,
}

impl AppState {
    pub fn new(config: &Config, http: Client) -> Result<Self> {
        let cors = Cors::new(&config.server.allowed_origin)
            .context("server.allowed_origin is not a valid header value")?;
        let formatter = Formatter::new().context("Cannot compile review templates")?;
        let github = GithubClient::new(http.clone(), &config.github.api_url, &config.github.token);

        Ok(AppState {
            cors,
            verifier: Verifier::new(http, &config.recaptcha),
            formatter,
            publisher: Publisher::new(github, config.github.clone()),
        })
    }
}

/// Every path and method goes through the same handler.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new().fallback(handler::handle).with_state(state)
}

pub async fn serve(address: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Cannot bind {}", address))?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server stopped unexpectedly")?;

    log::info!("Stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutting down"),
        Err(err) => {
            log::error!("Cannot listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests;
