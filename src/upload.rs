// File: ./src/upload.rs
// Pushes scraped results to the Convex HTTP endpoints, one POST per list.
use crate::config::Config;
use crate::model::{HolidayEvent, SemesterEvent};
use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::json;

pub struct Uploader {
    client: reqwest::Client,
    config: Config,
}

impl Uploader {
    pub fn new(client: reqwest::Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Semesters are uploaded before holidays so the backend can attach
    /// holidays to already-known semesters.
    pub async fn upload_semesters(&self, semesters: &[SemesterEvent]) -> Result<()> {
        log::info!("Uploading {} semesters", semesters.len());
        self.post_json("calendar/uploadSemesters", &json!({ "semesters": semesters }))
            .await
    }

    pub async fn upload_holidays(&self, holidays: &[HolidayEvent]) -> Result<()> {
        log::info!("Uploading {} holidays", holidays.len());
        self.post_json("calendar/uploadHolidays", &json!({ "holidays": holidays }))
            .await
    }

    /// One all-or-nothing POST. Non-2xx responses surface the status and the
    /// response body in the error; there are no retries.
    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<()> {
        let endpoint = format!(
            "{}/{}",
            self.config.convex_url.trim_end_matches('/'),
            path
        );
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.config.convex_api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Upload to {} failed: {} - {}", endpoint, status, body);
        }
        log::info!("Upload to {} succeeded ({})", endpoint, status);
        Ok(())
    }
}
