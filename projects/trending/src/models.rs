use serde::{Deserialize, Serialize};

/// One repository row of the trending listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub owner: String,
    pub repo: String,
    pub stars_earned: u64,
}

#[derive(Debug, Serialize)]
pub struct SubmitPayload<'a> {
    #[serde(rename = "repoList")]
    pub repo_list: &'a [TrendingEntry],
    pub category: &'a str,
}
