//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiErrorResponse;
use crate::routes::{ComponentHealth, ComponentStatus, HealthResponse, TickerSentimentResponse};

/// SentiScan API 문서.
///
/// 모든 엔드포인트와 스키마를 포함하는 OpenAPI 3.0 스펙입니다.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SentiScan Sentiment API",
        version = "0.3.1",
        description = r#"
# SentiScan 감성 분석 REST API

설정된 티커 목록에 대해 소셜(Reddit)/뉴스(NewsAPI)/영상(YouTube)
제목을 수집하고 VADER 복합 감성 점수의 티커별 평균을 반환합니다.

## 주요 기능

- **감성 분석**: `GET /analyze` - 전체 티커 동기 분석 (감성 내림차순)
- **헬스 체크**: `GET /health`, `GET /health/ready`
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(crate::routes::analyze::analyze),
    components(schemas(
        TickerSentimentResponse,
        HealthResponse,
        ComponentHealth,
        ComponentStatus,
        ApiErrorResponse,
    )),
    tags(
        (name = "analyze", description = "감성 분석 실행")
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
pub fn swagger_ui_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_includes_analyze_path() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/analyze"));
    }
}
