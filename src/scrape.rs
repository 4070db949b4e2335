// File: ./src/scrape.rs
// Fetches the registrar's calendar page and runs the extraction over it.
use crate::extract;
use crate::model::CalendarData;
use anyhow::{Context, Result};
use std::time::Duration;

pub const CALENDAR_URL: &str = "https://www.bu.edu/reg/calendars/";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client shared by the fetch and the uploads.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// GET one page as text. Non-2xx responses abort the run.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;
    let status = response.status();
    let body = response
        .error_for_status()
        .with_context(|| format!("Calendar fetch returned {}", status))?
        .text()
        .await
        .context("Failed to read calendar page body")?;
    Ok(body)
}

/// Fetch the calendar page and extract holidays and semester boundaries.
pub async fn scrape_calendar(client: &reqwest::Client) -> Result<CalendarData> {
    log::info!("Fetching calendar from {}", CALENDAR_URL);
    let html = fetch_page(client, CALENDAR_URL).await?;
    log::info!("Successfully fetched calendar page");
    Ok(extract::extract_calendar(&html))
}
