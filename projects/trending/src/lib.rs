//! GitHub trending repositories collector
//!
//! - HTML extraction in `extract`
//! - Batch submission to the collection endpoint in `submit`
//! - Requires BACKEND_URL and ADMIN_SECRET env vars to submit

pub mod config;
pub mod extract;
pub mod models;
pub mod period;
pub mod pipeline;
pub mod submit;
