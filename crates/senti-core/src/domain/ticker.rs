//! 분석 대상 티커 타입.

use serde::{Deserialize, Serialize};

/// 분석 대상 티커 항목.
///
/// 외부 티커 테이블의 한 행으로, 심볼과 콘텐츠 소스 검색어로 쓰이는
/// 회사/자산명을 담습니다. 실행 시작 시 한 번 로드되며 실행 동안 불변입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerEntry {
    /// 티커 심볼 (예: AAPL)
    pub ticker: String,
    /// 회사/자산명, 콘텐츠 검색어로 사용 (예: Apple)
    pub company: String,
}

impl TickerEntry {
    /// 새 티커 항목을 생성합니다.
    pub fn new(ticker: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            company: company.into(),
        }
    }
}

impl std::fmt::Display for TickerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.ticker, self.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let entry = TickerEntry::new("AAPL", "Apple");
        assert_eq!(entry.to_string(), "AAPL (Apple)");
    }
}
