//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/analyze` - 전체 티커 감성 분석 (동기 실행, 저장 없음)

pub mod analyze;
pub mod health;

pub use analyze::{analyze_router, TickerSentimentResponse};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .merge(analyze_router())
}
