//! 순차 수집 파이프라인.
//!
//! 티커 목록 순서대로 한 번에 하나씩 처리하며, 티커 안에서도
//! 세 소스를 차례로 호출합니다 (병렬 fan-out 없음).
//! 개별 소스 호출 실패는 경고 로그 후 빈 목록으로 복구되어
//! 실행 전체를 중단하지 않습니다.

use std::sync::Arc;

use senti_core::{collect_span, CollectionWindow, ScoredTitle, TickerEntry, TitleSource};
use tracing::Instrument;

use crate::aggregator::aggregate;
use crate::analyzer::SentimentScorer;
use crate::report::SentimentReport;

/// 파이프라인 실행 통계.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// 점수를 매긴 제목 수
    pub titles_scored: usize,
    /// 복구된 소스 호출 실패 수
    pub source_errors: usize,
}

/// 전체 티커에 대해 수집 → 스코어링 → 집계를 수행하고
/// 정렬이 끝난 리포트를 반환합니다.
pub async fn run_pipeline(
    tickers: &[TickerEntry],
    sources: &[Arc<dyn TitleSource>],
    scorer: &SentimentScorer,
    window: &CollectionWindow,
) -> (SentimentReport, PipelineStats) {
    let mut report = SentimentReport::new();
    let mut stats = PipelineStats::default();

    for entry in tickers {
        let (scored, errors) = collect_ticker(entry, sources, scorer)
            .instrument(collect_span!("collect_ticker", entry.ticker))
            .await;

        stats.titles_scored += scored.len();
        stats.source_errors += errors;

        let summary = aggregate(entry, &scored, window);
        report.push_ticker(&summary, &scored);
    }

    report.finalize();
    (report, stats)
}

/// 티커 하나에 대해 세 소스를 순차 호출하고 제목에 점수를 매깁니다.
///
/// 반환값은 (점수 매긴 제목, 복구된 소스 실패 수)입니다.
async fn collect_ticker(
    entry: &TickerEntry,
    sources: &[Arc<dyn TitleSource>],
    scorer: &SentimentScorer,
) -> (Vec<ScoredTitle>, usize) {
    let mut titles = Vec::new();
    let mut errors = 0;

    for source in sources {
        match source.fetch_titles(&entry.company).await {
            Ok(mut fetched) => {
                tracing::debug!(
                    source = source.name(),
                    count = fetched.len(),
                    "제목 수집 완료"
                );
                titles.append(&mut fetched);
            }
            Err(e) => {
                errors += 1;
                tracing::warn!(
                    source = source.name(),
                    error = %e,
                    "소스 호출 실패, 빈 결과로 계속"
                );
            }
        }
    }

    (scorer.score_titles(&titles), errors)
}
