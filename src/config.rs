use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Optional override file, looked up in the working directory.
pub const CONFIG_FILE: &str = "news_monitor";
pub const ENV_PREFIX: &str = "NEWS_MONITOR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub selectors: SelectorConfig,
    pub check_interval_seconds: u64,
    pub user_agent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
    pub shutdown_grace_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub base_url: String,
    pub query: String,
    /// `1` asks Naver for newest-first ordering.
    pub sort: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub container: String,
    pub title: String,
    pub source: String,
    pub date: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search: SearchConfig::default(),
            selectors: SelectorConfig::default(),
            check_interval_seconds: 3600,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            request_timeout_seconds: None,
            shutdown_grace_seconds: 10,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            base_url: "https://search.naver.com/search.naver".to_string(),
            query: "파이썬 웹 스크래핑".to_string(),
            sort: 1,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            container: "div.news_area".to_string(),
            title: "a.news_tit".to_string(),
            source: "a.info.press".to_string(),
            date: ".info_group .info:not(.press)".to_string(),
        }
    }
}

impl Config {
    /// Built-in defaults, then `news_monitor.toml`, then `NEWS_MONITOR__*` variables.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE, ENV_PREFIX)
    }

    fn load_from(file: &str, prefix: &str) -> Result<Self> {
        let defaults = config::Config::try_from(&Config::default())
            .context("Failed to build default configuration")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to load configuration")?;

        let config: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.check_interval_seconds > 0,
            "check_interval_seconds must be greater than zero"
        );
        Ok(())
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_seconds)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

impl SearchConfig {
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("where", "news"),
                ("sm", "tab_pge"),
                ("query", self.query.as_str()),
                ("sort", self.sort.to_string().as_str()),
            ],
        )
    }
}
