use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::config::{SearchConfig, SelectorConfig};
use crate::error::ScrapeError;
use crate::models::{NewsItem, NO_DATE, NO_SOURCE, NO_TITLE, NO_URL};
use crate::parsers::{absolute_date, compile_selector, trimmed_text};
use crate::scrapers::NewsScraper;
use crate::utils::http::fetch_html;

/// Compiled form of [`SelectorConfig`].
#[derive(Debug, Clone)]
pub struct NewsSelectors {
    container: Selector,
    title: Selector,
    source: Selector,
    date: Selector,
}

impl NewsSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            container: compile_selector(&config.container)?,
            title: compile_selector(&config.title)?,
            source: compile_selector(&config.source)?,
            date: compile_selector(&config.date)?,
        })
    }
}

pub struct NaverNewsScraper {
    search_url: Url,
    selectors: NewsSelectors,
}

impl NaverNewsScraper {
    pub fn new(search: &SearchConfig, selectors: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            search_url: search.url()?,
            selectors: NewsSelectors::compile(selectors)?,
        })
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }
}

#[async_trait]
impl NewsScraper for NaverNewsScraper {
    async fn scrape(&self, client: &Client) -> Result<Vec<NewsItem>, ScrapeError> {
        info!("Scraping Naver news search...");

        let html = fetch_html(client, &self.search_url).await?;
        let items = extract_news_items(&html, &self.selectors);

        info!("Found {} news items on Naver search page", items.len());
        Ok(items)
    }

    fn source_name(&self) -> &str {
        "Naver News"
    }
}

/// Pull every result container out of a search page. Missing fields fall back
/// to their placeholders; an unrecognised page yields an empty list.
pub fn extract_news_items(html: &str, selectors: &NewsSelectors) -> Vec<NewsItem> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.container)
        .map(|container| extract_item(container, selectors))
        .collect()
}

fn extract_item(container: ElementRef<'_>, selectors: &NewsSelectors) -> NewsItem {
    let mut item = NewsItem::default();

    if let Some(link) = container.select(&selectors.title).next() {
        item.title = link.value().attr("title").unwrap_or(NO_TITLE).to_string();
        item.url = link.value().attr("href").unwrap_or(NO_URL).to_string();
    }

    item.source = container
        .select(&selectors.source)
        .next()
        .map(trimmed_text)
        .unwrap_or_else(|| NO_SOURCE.to_string());

    // A missing date element and a relative date end up the same.
    item.date = container
        .select(&selectors.date)
        .next()
        .and_then(|date| absolute_date(&date.text().collect::<String>()))
        .unwrap_or_else(|| NO_DATE.to_string());

    debug!(title = %item.title, date = %item.date, "Extracted news item");
    item
}
