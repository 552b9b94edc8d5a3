//! 실행 리포트 테이블 빌더.
//!
//! 실행당 세 테이블을 만듭니다:
//! - 상세: 제목 단위, 수집 순서 유지 (정렬 없음)
//! - 일평균: 티커 단위, 감성 내림차순
//! - 극단: 일평균의 부분집합 (`abs(mean) > 0.10`), 감성 내림차순
//!
//! 내림차순 정렬은 안정 정렬이므로 동점 행은 기존 순서를 유지합니다.

use chrono::NaiveDate;
use senti_core::{DetailRow, ScoredTitle, SummaryRow, TickerSentiment};
use thiserror::Error;

use crate::aggregator::is_extreme;

/// 리포트 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// 극단 감성 테이블
    Extreme,
    /// 일평균 감성 테이블
    DailyAverage,
    /// 상세 테이블
    Detailed,
}

impl ReportKind {
    /// 세 리포트 전체 (업로드 순서).
    pub const ALL: [ReportKind; 3] = [Self::Extreme, Self::DailyAverage, Self::Detailed];

    /// blob 키 접두사.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Extreme => "extreme_sentiment",
            Self::DailyAverage => "daily_avg_sentiment",
            Self::Detailed => "detailed_sentiment",
        }
    }

    /// 실행 날짜가 붙은 blob 키 (예: `daily_avg_sentiment_2025-03-14.csv`).
    ///
    /// 같은 날짜에 다시 실행하면 같은 키가 나와 기존 blob을 덮어씁니다.
    pub fn blob_key(&self, date: NaiveDate) -> String {
        format!("{}_{}.csv", self.prefix(), date.format("%Y-%m-%d"))
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// CSV 인코딩 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV 직렬화 실패
    #[error("CSV encode error: {0}")]
    Csv(String),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// 실행 리포트 (세 테이블).
#[derive(Debug, Default, Clone)]
pub struct SentimentReport {
    /// 상세 행 (수집 순서)
    pub detail: Vec<DetailRow>,
    /// 일평균 행 ([`finalize`](Self::finalize) 후 내림차순)
    pub daily_average: Vec<SummaryRow>,
    /// 극단 행 ([`finalize`](Self::finalize) 후 내림차순)
    pub extreme: Vec<SummaryRow>,
}

impl SentimentReport {
    /// 빈 리포트를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 티커 하나의 결과를 테이블에 누적합니다.
    pub fn push_ticker(&mut self, summary: &TickerSentiment, scored: &[ScoredTitle]) {
        for item in scored {
            self.detail.push(DetailRow {
                ticker: summary.ticker.clone(),
                asset: summary.asset.clone(),
                title: item.title.clone(),
                sentiment: item.score,
                timestamp: summary.timestamp.clone(),
            });
        }

        self.daily_average.push(SummaryRow::from(summary));

        if is_extreme(summary.sentiment) {
            self.extreme.push(SummaryRow::from(summary));
        }
    }

    /// 요약 테이블을 감성 내림차순으로 정렬합니다.
    ///
    /// 상세 테이블은 수집 순서를 유지합니다.
    pub fn finalize(&mut self) {
        sort_descending(&mut self.daily_average);
        sort_descending(&mut self.extreme);
    }

    /// 종류별 테이블을 CSV로 인코딩합니다.
    ///
    /// 빈 테이블도 헤더 행은 포함합니다.
    pub fn to_csv(&self, kind: ReportKind) -> Result<Vec<u8>, ReportError> {
        match kind {
            ReportKind::Detailed => encode_detail(&self.detail),
            ReportKind::DailyAverage => encode_summary(&self.daily_average),
            ReportKind::Extreme => encode_summary(&self.extreme),
        }
    }
}

fn sort_descending(rows: &mut [SummaryRow]) {
    rows.sort_by(|a, b| {
        b.sentiment
            .partial_cmp(&a.sentiment)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn encode_detail(rows: &[DetailRow]) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(["Ticker", "Asset", "Title", "Sentiment", "Timestamp"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.to_string()))
}

fn encode_summary(rows: &[SummaryRow]) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(["Ticker", "Asset", "Sentiment", "Timestamp"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.to_string()))
}
