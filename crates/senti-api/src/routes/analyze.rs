//! 감성 분석 endpoint.
//!
//! 배치 수집과 같은 계산을 요청 시점에 동기적으로 수행해 티커별
//! 평균 감성을 JSON 배열로 반환합니다. 저장소에는 기록하지 않습니다.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use senti_analytics::run_pipeline;
use senti_core::CollectionWindow;

use crate::error::ApiResult;
use crate::state::AppState;

/// 티커별 평균 감성 응답 항목.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TickerSentimentResponse {
    /// 티커 심볼
    pub ticker: String,
    /// 회사/자산명
    pub asset: String,
    /// 평균 복합 감성 점수 (수집 제목이 없으면 0.0)
    pub sentiment: f64,
}

/// 전체 티커에 대한 감성 분석 실행.
///
/// 일평균 테이블을 감성 내림차순으로 반환합니다. 개별 소스 실패는
/// 빈 결과로 복구되므로 정상 경로의 응답은 항상 `200`입니다.
/// 티커 목록이 비어 있으면 빈 배열을 반환합니다.
/// GET /analyze
#[utoipa::path(
    get,
    path = "/analyze",
    tag = "analyze",
    responses(
        (status = 200, description = "티커별 평균 감성 (내림차순)", body = [TickerSentimentResponse])
    )
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TickerSentimentResponse>>> {
    let window = CollectionWindow::last_24h();
    let (report, stats) =
        run_pipeline(&state.tickers, &state.sources, &state.scorer, &window).await;

    if stats.source_errors > 0 {
        tracing::warn!(
            source_errors = stats.source_errors,
            "일부 소스 호출이 빈 결과로 복구되었습니다"
        );
    }

    let results = report
        .daily_average
        .iter()
        .map(|row| TickerSentimentResponse {
            ticker: row.ticker.clone(),
            asset: row.asset.clone(),
            sentiment: row.sentiment,
        })
        .collect();

    Ok(Json(results))
}

/// 분석 라우터 생성.
pub fn analyze_router() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", get(analyze))
}
