pub mod date;

pub use date::*;

use scraper::{ElementRef, Selector};

use crate::error::ScrapeError;

/// Compile a CSS selector, keeping the offending text in the error.
pub fn compile_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("invalid selector '{}': {:?}", css, e)))
}

/// Text content of the element with surrounding whitespace stripped.
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
