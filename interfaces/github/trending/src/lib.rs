//! Client for the GitHub trending listing page
//!
//! - `index::fetch_trending_page` returns the raw HTML of one listing
//! - `index::build_client` carries the browser User-Agent and the fixed timeout

pub mod index;
