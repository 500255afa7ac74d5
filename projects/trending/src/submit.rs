use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::{SubmitPayload, TrendingEntry};

pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Collector answered 200; `body` is its response text.
    Sent { body: String },
    /// Empty batch, no request made.
    NothingToSend,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("MissingEndpoint: no collection endpoint configured")]
    MissingEndpoint,

    #[error("MissingSecret: no admin secret configured")]
    MissingSecret,

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}: {body}")]
    UnexpectedStatus {
        status: StatusCode,
        body: String,
    },
}

/// Posts `entries` as one batch tagged with `category`.
///
/// Endpoint and secret are checked before anything else, so a misconfigured
/// run never touches the network even with an empty batch. Only a 200 counts
/// as success; nothing is retried.
pub async fn submit(
    client: &Client,
    entries: &[TrendingEntry],
    category: &str,
    endpoint: &str,
    secret: &str,
) -> Result<SubmitOutcome, SubmitError> {
    if endpoint.trim().is_empty() {
        return Err(SubmitError::MissingEndpoint);
    }
    if secret.trim().is_empty() {
        return Err(SubmitError::MissingSecret);
    }
    if entries.is_empty() {
        return Ok(SubmitOutcome::NothingToSend);
    }

    let payload = SubmitPayload { repo_list: entries, category };

    let response = client
        .post(endpoint)
        .header(ADMIN_SECRET_HEADER, secret)
        .timeout(SUBMIT_TIMEOUT)
        .json(&payload)
        .send()
        .await
        .map_err(|source| SubmitError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| SubmitError::ResponseRead { source })?;

    if status != StatusCode::OK {
        return Err(SubmitError::UnexpectedStatus { status, body });
    }

    Ok(SubmitOutcome::Sent { body })
}
