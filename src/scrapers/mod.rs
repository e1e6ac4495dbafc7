use async_trait::async_trait;
use reqwest::Client;

use crate::error::ScrapeError;
use crate::models::NewsItem;

mod naver;

pub use naver::{extract_news_items, NaverNewsScraper, NewsSelectors};

#[async_trait]
pub trait NewsScraper: Send + Sync {
    async fn scrape(&self, client: &Client) -> Result<Vec<NewsItem>, ScrapeError>;
    fn source_name(&self) -> &str;
}
