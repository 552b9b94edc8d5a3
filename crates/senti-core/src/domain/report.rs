//! 리포트 테이블 행 타입.
//!
//! CSV 헤더는 serde 필드명(PascalCase)에서 생성됩니다:
//! 상세 = `Ticker, Asset, Title, Sentiment, Timestamp`,
//! 요약 = `Ticker, Asset, Sentiment, Timestamp`.

use serde::{Deserialize, Serialize};

use super::sentiment::TickerSentiment;

/// 상세 테이블 행 (수집 제목 단위).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailRow {
    /// 티커 심볼
    pub ticker: String,
    /// 회사/자산명
    pub asset: String,
    /// 제목 텍스트
    pub title: String,
    /// 복합 감성 점수
    pub sentiment: f64,
    /// 수집 구간 라벨
    pub timestamp: String,
}

/// 요약 테이블 행 (티커 단위). 일평균/극단 테이블이 공용으로 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryRow {
    /// 티커 심볼
    pub ticker: String,
    /// 회사/자산명
    pub asset: String,
    /// 평균 복합 감성 점수
    pub sentiment: f64,
    /// 수집 구간 라벨
    pub timestamp: String,
}

impl From<&TickerSentiment> for SummaryRow {
    fn from(summary: &TickerSentiment) -> Self {
        Self {
            ticker: summary.ticker.clone(),
            asset: summary.asset.clone(),
            sentiment: summary.sentiment,
            timestamp: summary.timestamp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_row_field_names_are_pascal_case() {
        let row = SummaryRow {
            ticker: "AAPL".to_string(),
            asset: "Apple".to_string(),
            sentiment: 0.25,
            timestamp: "t".to_string(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("Ticker").is_some());
        assert!(json.get("Asset").is_some());
        assert!(json.get("Sentiment").is_some());
        assert!(json.get("Timestamp").is_some());
    }

    #[test]
    fn test_detail_row_field_names_are_pascal_case() {
        let row = DetailRow {
            ticker: "AAPL".to_string(),
            asset: "Apple".to_string(),
            title: "Apple hits record".to_string(),
            sentiment: 0.5,
            timestamp: "t".to_string(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("Title").is_some());
    }
}
