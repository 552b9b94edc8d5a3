//! 감성 점수 타입.

use serde::{Deserialize, Serialize};

/// 제목 하나에 대한 복합 감성 점수.
///
/// 점수는 [-1.0, 1.0] 범위의 정규화된 부호 있는 값입니다.
/// 0보다 작으면 부정, 크면 긍정이며 절대값이 강도를 나타냅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTitle {
    /// 원본 텍스트 (게시물/기사/영상 제목)
    pub title: String,
    /// 복합 감성 점수
    pub score: f64,
}

impl ScoredTitle {
    pub fn new(title: impl Into<String>, score: f64) -> Self {
        Self {
            title: title.into(),
            score,
        }
    }
}

/// 티커별 감성 요약.
///
/// 한 실행에서 티커당 하나씩 생성됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSentiment {
    /// 티커 심볼
    pub ticker: String,
    /// 회사/자산명 (검색어)
    pub asset: String,
    /// 평균 복합 감성 점수 (수집 제목이 없으면 0.0)
    pub sentiment: f64,
    /// 수집 구간 라벨
    pub timestamp: String,
}
