//! 감성 수집 시스템의 에러 타입.
//!
//! 이 모듈은 시스템 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum SentiError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 콘텐츠 소스 에러 (Reddit, News, YouTube)
    #[error("콘텐츠 소스 에러: {0}")]
    Source(String),

    /// 저장소 에러 (blob 읽기/쓰기)
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 감성 수집 작업을 위한 Result 타입.
pub type SentiResult<T> = Result<T, SentiError>;

impl SentiError {
    /// 호출 단위로 복구되는 에러인지 확인합니다.
    ///
    /// 콘텐츠 소스 실패는 해당 소스의 기여를 빈 목록으로 대체하고
    /// 실행을 계속합니다. 설정/저장소 구성 실패는 복구 대상이 아닙니다.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SentiError::Source(_))
    }
}

impl From<serde_json::Error> for SentiError {
    fn from(err: serde_json::Error) -> Self {
        SentiError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for SentiError {
    fn from(err: config::ConfigError) -> Self {
        SentiError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_recoverable() {
        let source_err = SentiError::Source("timeout".to_string());
        assert!(source_err.is_recoverable());

        let config_err = SentiError::Config("missing key".to_string());
        assert!(!config_err.is_recoverable());

        let storage_err = SentiError::Storage("disk full".to_string());
        assert!(!storage_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = SentiError::Source("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
