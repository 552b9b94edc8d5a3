//! 감성 분석 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 헬스 체크와 `/analyze` 엔드포인트를 제공합니다.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{http::StatusCode, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use senti_api::openapi::swagger_ui_router;
use senti_api::routes::create_api_router;
use senti_api::state::AppState;
use senti_core::{init_logging, AppConfig, LogConfig, TitleSource};
use senti_data::{
    load_ticker_table, LocalBlobStorage, NewsTitleSource, RedditTitleSource, YoutubeTitleSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 설정 로드 (필수 자격증명 누락 시 여기서 중단)
    let config = AppConfig::from_env().context("설정 로드 실패")?;
    config.validate().context("설정 검증 실패")?;

    // 로깅 초기화 (RUST_LOG가 있으면 설정값보다 우선)
    let log_config = LogConfig::new(config.logging.level.clone())
        .with_format(config.logging.format.parse().unwrap_or_default());
    init_logging(log_config).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    // 티커 테이블은 프로세스 시작 시 한 번 로드 (실패 시 치명적)
    let storage = LocalBlobStorage::new(config.storage.root.clone());
    let tickers = load_ticker_table(&storage, &config.storage.ticker_list_key)
        .await
        .context("티커 테이블 로드 실패")?;
    if tickers.is_empty() {
        warn!("티커 테이블이 비어 있습니다. /analyze는 빈 배열을 반환합니다");
    }

    // collaborator 구성 및 상태 생성
    let sources = build_sources(&config);
    let state = Arc::new(AppState::new(tickers, sources));
    info!(
        version = %state.version,
        tickers = state.tickers.len(),
        sources = state.sources.len(),
        "Application state initialized"
    );

    // 라우터 생성
    let app = create_router(state);

    // 서버 시작
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("잘못된 서버 주소")?;
    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("OpenAPI spec at http://{}/api-docs/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>) -> Router {
    create_api_router()
        .with_state(state)
        // OpenAPI 문서 및 Swagger UI
        .merge(swagger_ui_router())
        // 기타 미들웨어
        .layer(TraceLayer::new_for_http())
        // 전역 타임아웃 - 408 상태 코드 반환.
        // /analyze는 티커당 세 번의 순차 네트워크 호출을 수행하므로 넉넉하게 잡습니다.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(300),
        ))
        .layer(cors_layer())
}

/// CORS 미들웨어 구성.
///
/// CORS_ORIGINS 환경변수가 설정되어 있으면 해당 origin만 허용합니다.
/// 설정되지 않으면 개발 모드로 간주하여 모든 origin을 허용합니다.
///
/// # 환경변수
///
/// - `CORS_ORIGINS`: 쉼표로 구분된 허용 origin 목록
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!("CORS configured with {} allowed origins", origins.len());
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS not set, allowing any origin (development mode)");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([axum::http::Method::GET])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
}

/// 설정에서 세 콘텐츠 소스를 구성합니다 (Reddit → News → YouTube 순서).
fn build_sources(config: &AppConfig) -> Vec<Arc<dyn TitleSource>> {
    let sources = &config.sources;
    vec![
        Arc::new(RedditTitleSource::new(
            sources.reddit_subreddit.clone(),
            sources.reddit_user_agent.clone(),
        )),
        Arc::new(NewsTitleSource::new(sources.news_api_key.clone())),
        Arc::new(YoutubeTitleSource::new(sources.youtube_api_key.clone())),
    ]
}

/// Graceful shutdown 시그널 대기.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Ctrl-C 핸들러 설치 실패");
    info!("종료 신호 수신, 서버 종료 중...");
}
