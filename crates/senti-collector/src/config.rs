//! 환경변수 기반 설정 모듈.

use senti_core::AppConfig;
use std::time::Duration;

use crate::Result;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 공용 애플리케이션 설정 (저장소, 소스 자격증명)
    pub app: AppConfig,
    /// 데몬 모드 설정
    pub daemon: DaemonConfig,
}

/// 데몬 모드 설정
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// 수집 실행 주기 (분 단위, 기본 1일)
    pub interval_minutes: u64,
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    ///
    /// 필수 자격증명(News/YouTube API 키)이 없으면 에러를 반환하며,
    /// 이는 치명적입니다 (수집 실행 자체를 시작하지 않음).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let app = AppConfig::from_env()
            .map_err(|e| crate::error::CollectorError::Config(e.to_string()))?;
        app.validate()
            .map_err(|e| crate::error::CollectorError::Config(e.to_string()))?;

        Ok(Self {
            app,
            daemon: DaemonConfig {
                interval_minutes: env_var_parse("DAEMON_INTERVAL_MINUTES", 1440),
            },
        })
    }
}

impl DaemonConfig {
    /// 수집 실행 주기를 Duration으로 반환
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes * 60)
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
