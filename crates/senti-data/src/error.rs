//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 수집/저장 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 데이터 가져오기 오류 (외부 소스)
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// 업스트림 비정상 응답 상태
    #[error("Upstream status {status}: {url}")]
    BadStatus { status: u16, url: String },

    /// 파싱 오류
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 저장소 IO 오류
    #[error("Storage error: {0}")]
    StorageError(String),

    /// blob을 찾을 수 없음
    #[error("Blob not found: {0}")]
    NotFound(String),

    /// 잘못된 데이터 형식
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DataError::ParseError(err.to_string())
        } else {
            DataError::FetchError(err.to_string())
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::StorageError(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
