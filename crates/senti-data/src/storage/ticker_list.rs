//! 티커 테이블 로드.
//!
//! blob 저장소에서 두 컬럼 CSV(`ticker,company`)를 읽어 파싱합니다.
//! 이 단계의 실패는 치명적이며 호출자에게 그대로 전파됩니다.
//!
//! ## CSV 파일 형식
//!
//! ```csv
//! ticker,company
//! AAPL,Apple
//! TSLA,Tesla
//! ```

use senti_core::{BlobStorage, TickerEntry};
use serde::Deserialize;

use crate::error::DataError;

/// 티커 테이블 CSV 레코드.
#[derive(Debug, Deserialize)]
struct TickerRecord {
    ticker: String,
    company: String,
}

/// blob 저장소에서 티커 테이블을 로드합니다.
///
/// 저장소 접근 실패, 헤더 누락, 컬럼 누락 모두 에러입니다.
/// 헤더만 있는 빈 테이블은 유효하며 빈 목록을 반환합니다.
pub async fn load_ticker_table(
    storage: &dyn BlobStorage,
    key: &str,
) -> Result<Vec<TickerEntry>, DataError> {
    let bytes = storage
        .get_blob(key)
        .await
        .map_err(|e| DataError::StorageError(format!("티커 테이블 로드 실패 ({}): {}", key, e)))?;

    let entries = parse_ticker_table(&bytes)?;
    tracing::info!(key = key, count = entries.len(), "티커 테이블 로드 완료");
    Ok(entries)
}

/// CSV 본문을 티커 목록으로 파싱합니다.
pub fn parse_ticker_table(bytes: &[u8]) -> Result<Vec<TickerEntry>, DataError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut entries = Vec::new();

    for record in reader.deserialize::<TickerRecord>() {
        let record = record?;
        entries.push(TickerEntry::new(record.ticker, record.company));
    }

    Ok(entries)
}
