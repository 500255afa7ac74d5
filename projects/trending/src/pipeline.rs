use interfaces_github_trending::index::{fetch_trending_page, TrendingPageResult};
use reqwest::Client;
use tracing::{error, info};

use crate::{
    config::Config,
    extract::extract,
    models::TrendingEntry,
    period::Period,
    submit::{submit, SubmitOutcome},
};

/// Fetches and extracts one listing. Any failure is logged and yields no entries.
pub async fn scrape_trending(
    client: &Client,
    base: &str,
    language: Option<&str>,
    period: Period,
) -> Vec<TrendingEntry> {
    info!("Scraping {} | {}", language.unwrap_or("all languages"), period);

    let TrendingPageResult { body, .. } =
        match fetch_trending_page(client, base, language, period.as_str()).await {
            Ok(page) => page,
            Err(err) => {
                error!("Failed to fetch trending page: {err}");
                return Vec::new();
            }
        };

    match extract(&body) {
        Ok(entries) => entries,
        Err(err) => {
            error!("Failed to extract trending rows: {err}");
            Vec::new()
        }
    }
}

/// One full run: resolve the period, scrape, submit. Never fails outward.
pub async fn run(client: &Client, config: &Config, base: &str) {
    let period = match config.period() {
        Ok(period) => period,
        Err(err) => {
            error!("Invalid SCRAPE_MODE: {err}");
            return;
        }
    };

    let entries = scrape_trending(client, base, config.language.as_deref(), period).await;

    let target = match config.submission_target() {
        Ok(target) => target,
        Err(err) => {
            error!("Submission disabled: {err}");
            return;
        }
    };

    match submit(client, &entries, period.as_str(), &target.endpoint, &target.secret).await {
        Ok(SubmitOutcome::Sent { body }) => {
            info!(count = entries.len(), "{period} pushed successfully");
            info!("Response: {body}");
        }
        Ok(SubmitOutcome::NothingToSend) => info!("No repos to send for {period}"),
        Err(err) => error!("Failed to push {period}: {err}"),
    }
}
