//! Console rendering of a scrape cycle.
//!
//! Everything here writes plain lines to any [`Write`] sink; the binary hands
//! it stdout. Log events go through `tracing` separately.

use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::time::Duration;

use crate::error::ScrapeError;
use crate::models::{
    NewsItem, EMOJI_BELL, EMOJI_CHECK, EMOJI_CROSS, EMOJI_DATE, EMOJI_LINK, EMOJI_SOURCE,
    EMOJI_TITLE, EMOJI_WARNING,
};

const BANNER_WIDTH: usize = 50;
const ITEM_SEPARATOR_WIDTH: usize = 20;

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub fn print_startup<W: Write + ?Sized>(out: &mut W, query: &str, interval: Duration) -> io::Result<()> {
    writeln!(out, "{} 키워드: '{}' 뉴스 스크래핑을 시작합니다.", EMOJI_BELL, query)?;
    writeln!(out, "   매 {}마다 작업을 실행하도록 설정되었습니다.", describe_interval(interval))
}

pub fn print_cycle_start<W: Write + ?Sized>(out: &mut W, now: NaiveDateTime) -> io::Result<()> {
    writeln!(out, "{}", banner())?;
    writeln!(out, "[{}] 뉴스 스크래핑 시작...", now.format("%Y-%m-%d %H:%M:%S"))
}

pub fn print_items<W: Write + ?Sized>(out: &mut W, items: &[NewsItem]) -> io::Result<()> {
    writeln!(out, "{} 총 {}개의 뉴스 정보를 추출했습니다.\n", EMOJI_CHECK, items.len())?;
    writeln!(out, "--- 뉴스 요약 정보 ---")?;

    for (idx, item) in items.iter().enumerate() {
        writeln!(out, "[{}]", idx + 1)?;
        writeln!(out, "  {} 제목: {}", EMOJI_TITLE, item.title)?;
        writeln!(out, "  {} 언론사: {}", EMOJI_SOURCE, item.source)?;
        writeln!(out, "  {} 업로드 일자: {}", EMOJI_DATE, item.date)?;
        writeln!(
            out,
            "  {} 링크: {} (이 주소를 복사하여 브라우저에서 클릭하여 이동)",
            EMOJI_LINK, item.url
        )?;
        writeln!(out, "{}", "-".repeat(ITEM_SEPARATOR_WIDTH))?;
    }

    Ok(())
}

/// Selectors matched nothing. The cycle ends here without the closing banner.
pub fn print_empty<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} 스크래핑할 뉴스 항목을 찾을 수 없습니다. (선택자 확인 필요)",
        EMOJI_WARNING
    )?;
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH))
}

pub fn print_error<W: Write + ?Sized>(out: &mut W, err: &ScrapeError) -> io::Result<()> {
    if err.is_transport() {
        writeln!(out, "{} 요청 오류 발생: {}", EMOJI_CROSS, err)
    } else {
        writeln!(out, "{} 스크래핑 중 예상치 못한 오류 발생: {}", EMOJI_CROSS, err)
    }
}

pub fn print_cycle_end<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", banner())
}

fn describe_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    if secs > 0 && secs % 3600 == 0 {
        format!("{}시간", secs / 3600)
    } else if secs > 0 && secs % 60 == 0 {
        format!("{}분", secs / 60)
    } else {
        format!("{}초", secs)
    }
}
