use anyhow::{Context, Result};
use std::io;
use std::sync::Arc;
use tracing::info;

use news_monitor::config::Config;
use news_monitor::monitor::NewsMonitor;
use news_monitor::report;
use news_monitor::scheduler::Scheduler;
use news_monitor::scrapers::NaverNewsScraper;
use news_monitor::utils::http::create_client;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("news_monitor=info".parse()?),
        )
        .init();

    info!("Starting News Monitor");

    let config = Config::load()?;

    let scraper = NaverNewsScraper::new(&config.search, &config.selectors)
        .context("Failed to set up Naver news scraper")?;
    info!("Search URL: {}", scraper.search_url());

    let client = create_client(&config).context("Failed to build HTTP client")?;
    let monitor = Arc::new(NewsMonitor::new(Arc::new(scraper), client));

    report::print_startup(&mut io::stdout(), &config.search.query, config.check_interval())?;

    let handle = Scheduler::new(config.check_interval()).start(move || {
        let monitor = monitor.clone();
        async move {
            monitor.run_cycle(&mut io::stdout()).await;
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    info!("Shutdown requested, waiting for the running cycle");
    handle.stop(config.shutdown_grace()).await;

    Ok(())
}
