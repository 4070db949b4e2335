use anyhow::Result;
use bucal::config::Config;
use bucal::scrape;
use bucal::upload::Uploader;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

#[tokio::main]
async fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    dotenvy::dotenv().ok();

    log::info!("Starting calendar scraper");
    let client = scrape::http_client()?;
    let data = scrape::scrape_calendar(&client).await?;

    log::info!(
        "Found {} holidays and {} semesters",
        data.holidays.len(),
        data.semesters.len()
    );
    for holiday in &data.holidays {
        log::info!(
            "  - {}: {} ({})",
            holiday.date,
            holiday.name,
            holiday.semester.as_deref().unwrap_or("no semester")
        );
    }

    if data.is_empty() {
        log::warn!("No holidays or semesters found, nothing to upload");
        return Ok(());
    }

    // Configuration is only required once there is something to send.
    let config = Config::from_env()?;
    let uploader = Uploader::new(client, config);
    if !data.semesters.is_empty() {
        uploader.upload_semesters(&data.semesters).await?;
    }
    if !data.holidays.is_empty() {
        uploader.upload_holidays(&data.holidays).await?;
    }
    log::info!("Upload complete!");
    Ok(())
}
