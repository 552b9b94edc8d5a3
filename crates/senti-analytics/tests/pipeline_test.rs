//! 파이프라인 통합 테스트.
//!
//! 실제 HTTP 호출 없이 스텁 소스로 수집 → 스코어링 → 집계 → 리포트
//! 흐름 전체를 검증합니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use senti_analytics::{run_pipeline, ReportKind, SentimentScorer};
use senti_core::{CollectionWindow, TickerEntry, TitleSource};

/// 항상 같은 제목 목록을 반환하는 스텁 소스.
struct FixedSource {
    name: &'static str,
    titles: Vec<String>,
}

impl FixedSource {
    fn new(name: &'static str, titles: &[&str]) -> Arc<dyn TitleSource> {
        Arc::new(Self {
            name,
            titles: titles.iter().map(|t| t.to_string()).collect(),
        })
    }
}

#[async_trait]
impl TitleSource for FixedSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_titles(
        &self,
        _term: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.titles.clone())
    }
}

/// 항상 실패하는 스텁 소스.
struct FailingSource;

#[async_trait]
impl TitleSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_titles(
        &self,
        _term: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        Err("simulated upstream outage".into())
    }
}

fn window() -> CollectionWindow {
    CollectionWindow::ending_at(Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap())
}

fn tickers() -> Vec<TickerEntry> {
    vec![
        TickerEntry::new("AAPL", "Apple"),
        TickerEntry::new("TSLA", "Tesla"),
    ]
}

#[tokio::test]
async fn test_detail_row_count_is_sum_of_source_counts() {
    let sources = vec![
        FixedSource::new("reddit", &["post one", "post two"]),
        FixedSource::new("news", &["headline"]),
        FixedSource::new("youtube", &["video one", "video two", "video three"]),
    ];
    let scorer = SentimentScorer::new();

    let (report, stats) = run_pipeline(&tickers(), &sources, &scorer, &window()).await;

    // 티커 2개 × (2 + 1 + 3)건
    assert_eq!(report.detail.len(), 12);
    assert_eq!(stats.titles_scored, 12);
    assert_eq!(stats.source_errors, 0);
    assert_eq!(report.daily_average.len(), 2);
}

#[tokio::test]
async fn test_failing_source_is_recovered_per_call() {
    let sources: Vec<Arc<dyn TitleSource>> = vec![
        FixedSource::new("reddit", &["a great wonderful success story"]),
        Arc::new(FailingSource),
        FixedSource::new("youtube", &["another fantastic amazing win"]),
    ];
    let scorer = SentimentScorer::new();

    let (report, stats) = run_pipeline(&tickers(), &sources, &scorer, &window()).await;

    // 실패한 소스는 티커마다 한 번씩 빈 결과로 복구됩니다.
    assert_eq!(stats.source_errors, 2);
    assert_eq!(report.detail.len(), 4);
    assert_eq!(report.daily_average.len(), 2);
}

#[tokio::test]
async fn test_all_sources_failing_yields_zero_mean_and_no_extremes() {
    let sources: Vec<Arc<dyn TitleSource>> =
        vec![Arc::new(FailingSource), Arc::new(FailingSource)];
    let scorer = SentimentScorer::new();

    let (report, stats) = run_pipeline(&tickers(), &sources, &scorer, &window()).await;

    assert_eq!(stats.titles_scored, 0);
    assert!(report.detail.is_empty());
    assert!(report.extreme.is_empty());
    assert_eq!(report.daily_average.len(), 2);
    for row in &report.daily_average {
        assert_eq!(row.sentiment, 0.0);
    }
}

#[tokio::test]
async fn test_empty_ticker_list_produces_empty_report() {
    let sources = vec![FixedSource::new("reddit", &["unused"])];
    let scorer = SentimentScorer::new();

    let (report, stats) = run_pipeline(&[], &sources, &scorer, &window()).await;

    assert!(report.detail.is_empty());
    assert!(report.daily_average.is_empty());
    assert!(report.extreme.is_empty());
    assert_eq!(stats, Default::default());
}

#[tokio::test]
async fn test_rows_share_the_window_label() {
    let sources = vec![FixedSource::new("news", &["a headline"])];
    let scorer = SentimentScorer::new();
    let window = window();

    let (report, _) = run_pipeline(&tickers(), &sources, &scorer, &window).await;

    for row in &report.detail {
        assert_eq!(row.timestamp, window.label());
    }
    for row in &report.daily_average {
        assert_eq!(row.timestamp, window.label());
    }
}

#[tokio::test]
async fn test_daily_average_csv_is_sorted_descending() {
    // 긍정 일색 소스와 부정 일색 소스로 서로 다른 평균을 만듭니다.
    struct PerTickerSource;

    #[async_trait]
    impl TitleSource for PerTickerSource {
        fn name(&self) -> &'static str {
            "per-ticker"
        }

        async fn fetch_titles(
            &self,
            term: &str,
        ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
            if term == "Apple" {
                Ok(vec!["amazing wonderful great success".to_string()])
            } else {
                Ok(vec!["horrible terrible awful failure".to_string()])
            }
        }
    }

    let sources: Vec<Arc<dyn TitleSource>> = vec![Arc::new(PerTickerSource)];
    let scorer = SentimentScorer::new();

    let (report, _) = run_pipeline(&tickers(), &sources, &scorer, &window()).await;

    assert_eq!(report.daily_average[0].ticker, "AAPL");
    assert_eq!(report.daily_average[1].ticker, "TSLA");
    assert!(report.daily_average[0].sentiment > report.daily_average[1].sentiment);

    let csv = String::from_utf8(report.to_csv(ReportKind::DailyAverage).unwrap()).unwrap();
    assert!(csv.starts_with("Ticker,Asset,Sentiment,Timestamp"));
}
