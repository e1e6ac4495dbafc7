pub mod config;
pub mod error;
pub mod models;
pub mod monitor;
pub mod parsers;
pub mod report;
pub mod scheduler;
pub mod scrapers;
pub mod utils;

pub use error::ScrapeError;
