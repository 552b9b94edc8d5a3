//! 실행 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 수집 실행 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// 처리한 티커 수
    pub tickers: usize,
    /// 점수를 매긴 제목 수
    pub titles_scored: usize,
    /// 복구된 소스 호출 실패 수
    pub source_errors: usize,
    /// 극단 감성으로 분류된 티커 수
    pub extreme_tickers: usize,
    /// 업로드 성공한 리포트 수
    pub uploads_ok: usize,
    /// 업로드 실패한 리포트 수
    pub uploads_failed: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl RunStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 리포트 업로드가 성공했는지 확인
    pub fn all_uploads_ok(&self) -> bool {
        self.uploads_failed == 0
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            tickers = self.tickers,
            titles_scored = self.titles_scored,
            source_errors = self.source_errors,
            extreme_tickers = self.extreme_tickers,
            uploads_ok = self.uploads_ok,
            uploads_failed = self.uploads_failed,
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_uploads_ok() {
        let mut stats = RunStats::new();
        assert!(stats.all_uploads_ok());

        stats.uploads_failed = 1;
        assert!(!stats.all_uploads_ok());
    }
}
