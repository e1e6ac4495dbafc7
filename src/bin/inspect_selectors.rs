use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::fs;

use news_monitor::config::Config;
use news_monitor::utils::http::{create_client, fetch_html};

const SAMPLE_FILE: &str = "naver_news_sample.html";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let client = create_client(&config)?;
    let url = config.search.url().context("Invalid search URL")?;

    println!("Fetching {} ...", url);
    let html = fetch_html(&client, &url).await?;
    fs::write(SAMPLE_FILE, &html).with_context(|| format!("Failed to write {}", SAMPLE_FILE))?;
    println!("Saved {} bytes to {}", html.len(), SAMPLE_FILE);

    let document = Html::parse_document(&html);
    let selectors = &config.selectors;

    for (role, css) in [
        ("container", &selectors.container),
        ("title", &selectors.title),
        ("source", &selectors.source),
        ("date", &selectors.date),
    ] {
        match Selector::parse(css) {
            Ok(selector) => {
                let count = document.select(&selector).count();
                println!("{:<10} '{}' matched {} elements", role, css, count);
            }
            Err(e) => println!("{:<10} '{}' is not a valid selector: {:?}", role, css, e),
        }
    }

    // Common alternatives seen on Naver result pages over time
    let candidates = ["div.news_wrap", "li.bx", "a.news_tit", "div.news_contents", "span.info"];
    for css in candidates {
        if let Ok(selector) = Selector::parse(css) {
            let count = document.select(&selector).count();
            if count > 0 {
                println!("Selector '{}' matched {} elements", css, count);
            }
        }
    }

    Ok(())
}
