use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

pub const GITHUB_TRENDING_URL: &str = "https://github.com/trending";

/// GitHub serves a stripped page to unknown agents, so pose as desktop Chrome.
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/91.0.4472.124 Safari/537.36",
);

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct TrendingPageResult {
    pub body: String,
    pub status: StatusCode,
}

#[derive(Debug, Error)]
pub enum BuildClientError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },
}

pub fn build_client() -> Result<Client, BuildClientError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|source| BuildClientError::ClientBuild { source })
}

/// `base`, optionally scoped to a language: `https://github.com/trending/rust`.
pub fn trending_url(base: &str, language: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match language.map(|lang| lang.trim().trim_matches('/')) {
        Some(lang) if !lang.is_empty() => format!("{base}/{lang}"),
        _ => base.to_string(),
    }
}

pub async fn fetch_trending_page(
    client: &Client,
    base: &str,
    language: Option<&str>,
    since: &str,
) -> Result<TrendingPageResult, FetchTrendingPageError> {
    let url = trending_url(base, language);
    tracing::debug!(%url, since, "fetching trending page");

    let response = client
        .get(&url)
        .query(&[("since", since)])
        .send()
        .await
        .map_err(|source| FetchTrendingPageError::RequestSend { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchTrendingPageError::UnexpectedStatus { status, url });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchTrendingPageError::ResponseRead { source })?;

    Ok(TrendingPageResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchTrendingPageError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status} for {url}")]
    UnexpectedStatus {
        status: StatusCode,
        url: String,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
