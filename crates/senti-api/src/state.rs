//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 모든 API 핸들러에서 공유되는 상태를 관리합니다.
//! 전역 클라이언트 대신 프로세스 시작 시 명시적으로 구성해 주입한
//! collaborator 인스턴스를 담으며, Axum의 State extractor를 통해
//! 핸들러에 전달됩니다.

use std::sync::Arc;

use senti_analytics::SentimentScorer;
use senti_core::{TickerEntry, TitleSource};

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 시작 시 한 번 로드된 티커 목록 (실행 동안 불변)
    pub tickers: Arc<Vec<TickerEntry>>,

    /// 콘텐츠 소스 (Reddit → News → YouTube 순서)
    pub sources: Arc<Vec<Arc<dyn TitleSource>>>,

    /// 감성 스코어러
    pub scorer: Arc<SentimentScorer>,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    ///
    /// # 인자
    /// * `tickers` - 시작 시 로드된 티커 목록
    /// * `sources` - 콘텐츠 소스 collaborator 목록
    pub fn new(tickers: Vec<TickerEntry>, sources: Vec<Arc<dyn TitleSource>>) -> Self {
        Self {
            tickers: Arc::new(tickers),
            sources: Arc::new(sources),
            scorer: Arc::new(SentimentScorer::new()),
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }
}

/// 테스트용 상태 생성 (티커/소스 없음).
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    AppState::new(Vec::new(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_state_is_empty() {
        let state = create_test_state();
        assert!(state.tickers.is_empty());
        assert!(state.sources.is_empty());
        assert!(!state.version.is_empty());
        assert!(state.uptime_secs() >= 0);
    }
}
