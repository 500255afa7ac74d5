use interfaces_github_trending::index::{build_client, BuildClientError, GITHUB_TRENDING_URL};
use projects_trending::{config::Config, pipeline::run};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("BuildClient: {source}")]
    BuildClient {
        #[source]
        source: BuildClientError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    // Load .env first so RUST_LOG from it reaches the filter.
    let dotenv = dotenvy::dotenv();

    utils_trace::init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    if let Err(err) = dotenv {
        debug!("No .env loaded: {err}");
    }

    let config = Config::from_env();
    let client = build_client()
        .map_err(|source| MainError::BuildClient { source })?;

    run(&client, &config, GITHUB_TRENDING_URL).await;

    Ok(())
}
