//! 단일 수집 실행 모듈.
//!
//! 티커 테이블 로드 → 파이프라인 실행 → 리포트 업로드까지
//! 한 번의 수집 실행 전체를 담당합니다. 티커 테이블 로드 실패만
//! 치명적이며, 소스/업로드 실패는 복구 후 통계로 보고됩니다.

use std::sync::Arc;
use std::time::Instant;

use senti_analytics::{run_pipeline, SentimentScorer};
use senti_core::{report_date, BlobStorage, CollectionWindow, TitleSource};
use senti_data::load_ticker_table;

use crate::modules::report_upload::upload_reports;
use crate::{CollectorConfig, Result, RunStats};

/// 수집 실행 한 번을 수행합니다.
pub async fn run_collection(
    config: &CollectorConfig,
    storage: &dyn BlobStorage,
    sources: &[Arc<dyn TitleSource>],
    scorer: &SentimentScorer,
) -> Result<RunStats> {
    let start = Instant::now();

    tracing::info!("감성 수집 시작");

    // 1. 티커 테이블 로드 (실패 시 치명적)
    let tickers = load_ticker_table(storage, &config.app.storage.ticker_list_key).await?;

    // 2. 수집 구간은 실행당 한 번 계산
    let window = CollectionWindow::last_24h();
    tracing::info!(
        window = %window.label(),
        tickers = tickers.len(),
        "수집 구간 확정"
    );

    // 3. 티커별 수집 → 스코어링 → 집계
    let (report, pipeline_stats) = run_pipeline(&tickers, sources, scorer, &window).await;

    // 4. 리포트 업로드 (실패는 집계로 보고, 실행은 계속 완료 처리)
    let outcome = upload_reports(storage, &report, report_date()).await;
    if !outcome.is_complete() {
        tracing::warn!(failed = outcome.failed.len(), "일부 리포트 업로드 실패");
    }

    Ok(RunStats {
        tickers: tickers.len(),
        titles_scored: pipeline_stats.titles_scored,
        source_errors: pipeline_stats.source_errors,
        extreme_tickers: report.extreme.len(),
        uploads_ok: outcome.uploaded.len(),
        uploads_failed: outcome.failed.len(),
        elapsed: start.elapsed(),
    })
}
