use chrono::Local;
use reqwest::Client;
use std::io::Write;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::ScrapeError;
use crate::report;
use crate::scrapers::NewsScraper;

/// How a single fetch → extract → report cycle ended.
#[derive(Debug)]
pub enum CycleOutcome {
    Reported(usize),
    Empty,
    Failed(ScrapeError),
}

pub struct NewsMonitor {
    scraper: Arc<dyn NewsScraper>,
    client: Client,
}

impl NewsMonitor {
    pub fn new(scraper: Arc<dyn NewsScraper>, client: Client) -> Self {
        Self { scraper, client }
    }

    /// Runs one cycle. Failures are logged and reported, never returned, so
    /// the scheduler keeps going.
    pub async fn run_cycle<W: Write + Send>(&self, out: &mut W) -> CycleOutcome {
        let source = self.scraper.source_name();
        info!("--- Starting new check cycle at {} ---", Local::now().format("%Y-%m-%d %H:%M:%S"));

        let result = self.scrape_and_report(out).await;

        let outcome = match result {
            Ok(0) => {
                warn!("No news items found on {}, selectors may be outdated", source);
                return CycleOutcome::Empty;
            }
            Ok(count) => {
                info!("Reported {} news items from {}", count, source);
                CycleOutcome::Reported(count)
            }
            Err(e) => {
                if e.is_transport() {
                    error!("Request to {} failed: {}", source, e);
                } else {
                    error!("Unexpected error while scraping {}: {}", source, e);
                }
                // The sink may be the thing that failed; nothing more to do then.
                let _ = report::print_error(out, &e);
                CycleOutcome::Failed(e)
            }
        };

        match (report::print_cycle_end(out), outcome) {
            (Err(e), CycleOutcome::Reported(_)) => {
                error!("Unexpected error while scraping {}: {}", source, e);
                CycleOutcome::Failed(ScrapeError::Output(e))
            }
            // An earlier failure already decided the outcome.
            (_, outcome) => outcome,
        }
    }

    async fn scrape_and_report<W: Write + Send>(&self, out: &mut W) -> Result<usize, ScrapeError> {
        report::print_cycle_start(out, Local::now().naive_local())?;

        let items = self.scraper.scrape(&self.client).await?;
        if items.is_empty() {
            report::print_empty(out)?;
            return Ok(0);
        }

        report::print_items(out, &items)?;
        Ok(items.len())
    }
}
