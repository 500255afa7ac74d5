use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::TrendingEntry;

const ROW_SELECTOR: &str = "article.Box-row";
const TITLE_SELECTOR: &str = "h2 a";
const STAT_SELECTOR: &str = "div.f6 span";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("InvalidSelector: {selector}: {message}")]
    InvalidSelector {
        selector: &'static str,
        message: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
enum RowError {
    #[error("EmptyOwner: title {title:?}")]
    EmptyOwner { title: String },

    #[error("EmptyRepo: title {title:?}")]
    EmptyRepo { title: String },
}

struct RowSelectors {
    row: Selector,
    title: Selector,
    stat: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            row: parse_selector(ROW_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            stat: parse_selector(STAT_SELECTOR)?,
        })
    }
}

fn parse_selector(selector: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector,
        message: e.to_string(),
    })
}

/// Extracts every well-formed repository row, in document order.
///
/// Rows without a `owner / repo` title are dropped quietly; rows that have one
/// but fail further checks are dropped with a warning. Neither stops the scan.
pub fn extract(html: &str) -> Result<Vec<TrendingEntry>, ExtractError> {
    let selectors = RowSelectors::new()?;
    let document = Html::parse_document(html);

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in document.select(&selectors.row).enumerate() {
        match extract_row(row, &selectors) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {
                debug!(index, "row has no owner/repo title, skipping");
                skipped += 1;
            }
            Err(err) => {
                warn!(index, "Skipping row: {err}");
                skipped += 1;
            }
        }
    }

    info!(entries = entries.len(), skipped, "extracted trending rows");
    Ok(entries)
}

fn extract_row(
    row: ElementRef<'_>,
    selectors: &RowSelectors,
) -> Result<Option<TrendingEntry>, RowError> {
    let Some(anchor) = row.select(&selectors.title).next() else {
        return Ok(None);
    };

    let title: String = anchor
        .text()
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .collect();

    let Some((owner, repo)) = title.split_once('/') else {
        return Ok(None);
    };
    if owner.is_empty() {
        return Err(RowError::EmptyOwner { title });
    }
    if repo.is_empty() {
        return Err(RowError::EmptyRepo { title });
    }

    let stars_earned = row
        .select(&selectors.stat)
        .map(|span| span.text().collect::<String>().to_lowercase())
        .find(|text| text.contains("star"))
        .map(|text| parse_star_count(&text))
        .unwrap_or(0);

    Ok(Some(TrendingEntry {
        owner: owner.to_string(),
        repo: repo.to_string(),
        stars_earned,
    }))
}

/// Keeps only the digits: "1,234 stars today" -> 1234. No digits -> 0.
///
/// A fragment holding several numbers has them concatenated; the listing has
/// never been seen to do that, so it is left alone.
fn parse_star_count(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or_else(|_| {
        warn!(text, "star count out of range, using 0");
        0
    })
}
