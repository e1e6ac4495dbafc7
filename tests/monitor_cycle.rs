use pretty_assertions::assert_eq;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use news_monitor::config::{Config, SearchConfig};
use news_monitor::models::{NewsItem, NO_DATE};
use news_monitor::monitor::{CycleOutcome, NewsMonitor};
use news_monitor::scrapers::{NaverNewsScraper, NewsScraper};
use news_monitor::utils::http::create_client;
use news_monitor::ScrapeError;

const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <ul class="list_news">
    <li class="bx">
      <div class="news_wrap api_ani_send">
        <div class="news_area">
          <div class="news_info">
            <div class="info_group">
              <a href="https://media.example/a" class="info press">
                Source A
              </a>
              <span class="info">2024.01.01</span>
            </div>
          </div>
          <a href="http://x" class="news_tit" target="_blank" title="Test">Test</a>
        </div>
      </div>
    </li>
    <li class="bx">
      <div class="news_wrap api_ani_send">
        <div class="news_area">
          <div class="news_info">
            <div class="info_group">
              <a href="https://media.example/b" class="info press">Source B</a>
              <span class="info">3시간 전</span>
            </div>
          </div>
          <a href="http://y" class="news_tit" title="Relative">Relative</a>
        </div>
      </div>
    </li>
  </ul>
</body></html>"#;

fn config_for(server: &MockServer) -> Config {
    Config {
        search: SearchConfig {
            base_url: format!("{}/search.naver", server.uri()),
            ..SearchConfig::default()
        },
        ..Config::default()
    }
}

fn monitor_for(config: &Config) -> (Arc<NaverNewsScraper>, NewsMonitor) {
    let scraper = Arc::new(NaverNewsScraper::new(&config.search, &config.selectors).unwrap());
    let client = create_client(config).unwrap();
    (scraper.clone(), NewsMonitor::new(scraper, client))
}

async fn mount_search_page(server: &MockServer, config: &Config, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/search.naver"))
        .and(query_param("where", "news"))
        .and(query_param("query", "파이썬 웹 스크래핑"))
        .and(query_param("sort", "1"))
        .and(header("user-agent", config.user_agent.as_str()))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn scrape_extracts_items_from_search_page() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    mount_search_page(&server, &config, 200, SAMPLE_PAGE).await;

    let (scraper, _) = monitor_for(&config);
    let client = create_client(&config).unwrap();
    let items = scraper.scrape(&client).await.unwrap();

    assert_eq!(
        items,
        vec![
            NewsItem {
                title: "Test".to_string(),
                url: "http://x".to_string(),
                source: "Source A".to_string(),
                date: "2024.01.01".to_string(),
            },
            NewsItem {
                title: "Relative".to_string(),
                url: "http://y".to_string(),
                source: "Source B".to_string(),
                date: NO_DATE.to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn full_cycle_prints_numbered_summary() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    mount_search_page(&server, &config, 200, SAMPLE_PAGE).await;

    let (_, monitor) = monitor_for(&config);
    let mut out = Vec::new();
    let outcome = monitor.run_cycle(&mut out).await;

    let text = String::from_utf8(out).unwrap();
    assert!(matches!(outcome, CycleOutcome::Reported(2)));
    assert!(text.starts_with(&"=".repeat(50)));
    assert!(text.contains("뉴스 스크래핑 시작..."));
    assert!(text.contains("✔️ 총 2개의 뉴스 정보를 추출했습니다."));
    assert!(text.contains("[1]\n  📌 제목: Test\n  🏢 언론사: Source A\n  📅 업로드 일자: 2024.01.01\n"));
    assert!(text.contains("  📅 업로드 일자: 날짜 정보 없음\n"));
    assert!(text.ends_with(&format!("{}\n", "=".repeat(50))));
}

#[tokio::test]
async fn page_without_results_takes_warning_path() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    mount_search_page(&server, &config, 200, "<html><body><div class=\"not_found\"></div></body></html>").await;

    let (_, monitor) = monitor_for(&config);
    let mut out = Vec::new();
    let outcome = monitor.run_cycle(&mut out).await;

    let text = String::from_utf8(out).unwrap();
    assert!(matches!(outcome, CycleOutcome::Empty));
    assert!(text.contains("❗ 스크래핑할 뉴스 항목을 찾을 수 없습니다."));
    assert!(!text.contains("개의 뉴스 정보를 추출했습니다"));
}

#[tokio::test]
async fn server_error_is_reported_not_raised() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    mount_search_page(&server, &config, 500, "").await;

    let (_, monitor) = monitor_for(&config);
    let mut out = Vec::new();
    let outcome = monitor.run_cycle(&mut out).await;

    let text = String::from_utf8(out).unwrap();
    match outcome {
        CycleOutcome::Failed(err @ ScrapeError::Status { .. }) => assert!(err.is_transport()),
        other => panic!("expected status failure, got {:?}", other),
    }
    assert!(text.contains("❌ 요청 오류 발생: HTTP error 500"));
    assert!(text.ends_with(&format!("{}\n", "=".repeat(50))));
}

#[tokio::test]
async fn unreachable_host_fails_cycle_and_next_cycle_still_runs() {
    let config = Config {
        search: SearchConfig {
            base_url: "http://127.0.0.1:1/search.naver".to_string(),
            ..SearchConfig::default()
        },
        ..Config::default()
    };
    let (_, monitor) = monitor_for(&config);

    for _ in 0..2 {
        let mut out = Vec::new();
        let outcome = monitor.run_cycle(&mut out).await;

        let text = String::from_utf8(out).unwrap();
        assert!(matches!(outcome, CycleOutcome::Failed(ScrapeError::Transport(_))));
        assert!(text.contains("❌ 요청 오류 발생:"));
    }
}
