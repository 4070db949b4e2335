// File: ./src/config.rs
// Destination settings for the Convex upload, read from the process environment.
use anyhow::{Context, Result};
use std::env;

/// Where the scraped data goes. Both values are required; they are only
/// resolved right before an upload is attempted, so a scrape-only run
/// (nothing found) never fails on missing configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Convex HTTP actions deployment.
    pub convex_url: String,
    /// Bearer token for the upload endpoints.
    pub convex_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let convex_url =
            env::var("CONVEX_URL").context("CONVEX_URL not set in environment")?;
        let convex_api_key =
            env::var("CONVEX_API_KEY").context("CONVEX_API_KEY not set in environment")?;
        Ok(Self {
            convex_url,
            convex_api_key,
        })
    }
}
