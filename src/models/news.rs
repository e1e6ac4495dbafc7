use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "제목 없음";
pub const NO_URL: &str = "#";
pub const NO_SOURCE: &str = "언론사 정보 없음";
pub const NO_DATE: &str = "날짜 정보 없음";

/// One search result. Lives for a single cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub date: String,
}

impl Default for NewsItem {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            url: NO_URL.to_string(),
            source: NO_SOURCE.to_string(),
            date: NO_DATE.to_string(),
        }
    }
}
