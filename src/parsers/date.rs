use once_cell::sync::Lazy;
use regex::Regex;

/// Naver prints recent results as "3시간 전" / "15분 전".
static RELATIVE_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"시간|분").expect("Invalid relative date regex"));

pub fn is_relative_date(text: &str) -> bool {
    RELATIVE_DATE_REGEX.is_match(text)
}

/// Trimmed date text, or `None` when it is a relative timestamp.
pub fn absolute_date(raw: &str) -> Option<String> {
    if is_relative_date(raw) {
        None
    } else {
        Some(raw.trim().to_string())
    }
}
