//! 리포트 업로드 모듈.
//!
//! 세 리포트 테이블을 CSV로 인코딩해 날짜가 붙은 키로 저장합니다.
//! 개별 업로드 실패는 로그로 남기고 계속 진행하되, 결과를
//! [`UploadOutcome`]으로 집계해 호출자에게 돌려줍니다.
//! 실행은 업로드 실패와 무관하게 완료되지만, 실패 내역은 통계와
//! 요약 로그에 그대로 드러납니다.

use chrono::NaiveDate;
use senti_analytics::{ReportKind, SentimentReport};
use senti_core::BlobStorage;

/// 리포트 업로드 집계 결과.
#[derive(Debug, Clone, Default)]
pub struct UploadOutcome {
    /// 업로드에 성공한 blob 키
    pub uploaded: Vec<String>,
    /// 실패한 (blob 키, 사유) 쌍
    pub failed: Vec<(String, String)>,
}

impl UploadOutcome {
    /// 모든 업로드가 성공했는지 확인합니다.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 세 리포트를 모두 업로드합니다.
///
/// 같은 날짜에 다시 호출하면 같은 키로 기존 blob을 덮어씁니다.
pub async fn upload_reports(
    storage: &dyn BlobStorage,
    report: &SentimentReport,
    date: NaiveDate,
) -> UploadOutcome {
    let mut outcome = UploadOutcome::default();

    for kind in ReportKind::ALL {
        let key = kind.blob_key(date);

        let csv = match report.to_csv(kind) {
            Ok(csv) => csv,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "리포트 인코딩 실패");
                outcome.failed.push((key, e.to_string()));
                continue;
            }
        };

        match storage.put_blob(&key, &csv).await {
            Ok(()) => {
                tracing::info!(key = %key, bytes = csv.len(), "리포트 업로드 완료");
                outcome.uploaded.push(key);
            }
            Err(e) => {
                tracing::error!(key = %key, error = %e, "리포트 업로드 실패");
                outcome.failed.push((key, e.to_string()));
            }
        }
    }

    outcome
}
