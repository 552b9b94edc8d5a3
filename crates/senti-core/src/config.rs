//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 설정 파일(`config/default.toml`)과 `SENTI__` 접두사 환경 변수를
//! 함께 지원하며, 환경 변수가 파일 값을 덮어씁니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SentiError, SentiResult};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// API 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 리포트 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
    /// 콘텐츠 소스 설정
    #[serde(default)]
    pub sources: SourceConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// 리포트 저장소 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// blob 저장소 루트 디렉터리
    pub root: String,
    /// 티커 테이블 blob 키 (두 컬럼 CSV: ticker,company)
    pub ticker_list_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: "data/reports".to_string(),
            ticker_list_key: "analysed_stocks.csv".to_string(),
        }
    }
}

/// 콘텐츠 소스 설정.
///
/// News/YouTube API 키는 필수이며 [`AppConfig::validate`]에서 검증됩니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Reddit 검색을 한정할 커뮤니티 (서브레딧)
    pub reddit_subreddit: String,
    /// Reddit 공개 API 요청에 사용하는 User-Agent
    pub reddit_user_agent: String,
    /// NewsAPI 키
    #[serde(default)]
    pub news_api_key: String,
    /// YouTube Data API v3 키
    #[serde(default)]
    pub youtube_api_key: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            reddit_subreddit: "stocks".to_string(),
            reddit_user_agent: "sentiscan/0.3".to_string(),
            news_api_key: String::new(),
            youtube_api_key: String::new(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드 (예: SENTI__SERVER__PORT=8080)
            .add_source(
                config::Environment::with_prefix("SENTI")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }

    /// 환경 변수만으로 설정을 구성합니다.
    ///
    /// 설정 파일이 없는 배포 환경(컨테이너, 스케줄러)에서 사용합니다.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("SENTI")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 필수 자격증명이 모두 설정되었는지 검증합니다.
    ///
    /// 누락된 자격증명은 치명적 에러입니다 (실행 시작 자체를 중단).
    pub fn validate(&self) -> SentiResult<()> {
        if self.sources.news_api_key.trim().is_empty() {
            return Err(SentiError::Config(
                "NewsAPI 키가 설정되지 않았습니다 (SENTI__SOURCES__NEWS_API_KEY)".to_string(),
            ));
        }
        if self.sources.youtube_api_key.trim().is_empty() {
            return Err(SentiError::Config(
                "YouTube API 키가 설정되지 않았습니다 (SENTI__SOURCES__YOUTUBE_API_KEY)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.ticker_list_key, "analysed_stocks.csv");
        assert_eq!(config.sources.reddit_subreddit, "stocks");
    }

    #[test]
    fn test_validate_requires_api_keys() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_err());

        config.sources.news_api_key = "news-key".to_string();
        assert!(config.validate().is_err());

        config.sources.youtube_api_key = "yt-key".to_string();
        assert!(config.validate().is_ok());
    }
}
