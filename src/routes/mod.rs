//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 묶어 등록하고, 추출기(extractor) 오류를
//! 공통 에러 본문으로 변환하는 설정을 함께 적용합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `/v1/users` - 사용자 CRUD
//!
//! # Extractor 오류 처리
//!
//! - JSON 본문 파싱 실패(형식 오류, 필드 누락, 타입 불일치, Content-Type 오류) → 400
//! - 경로의 사용자 ID가 정수가 아닌 경우 → 존재하지 않는 사용자로 보고 404
//! - 일치하는 라우트가 없는 요청(경로 또는 메서드 불일치) → 404, 동일한 에러 본문

use actix_web::{error, web, HttpRequest, HttpResponse};
use log::debug;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 어떤 라우트에도 일치하지 않는 요청에 대한 메시지
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Resource not found";

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config());

    cfg.service(health_check);
    configure_user_routes(cfg);

    cfg.default_service(web::to(route_not_found));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, req: &HttpRequest| {
        debug!("JSON 본문 파싱 실패 ({}): {}", req.path(), err);
        AppError::validation(format!("Invalid request body: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, req: &HttpRequest| {
        debug!("경로 파라미터 파싱 실패 ({}): {}", req.path(), err);
        AppError::user_not_found().into()
    })
}

async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    debug!("일치하는 라우트 없음: {} {}", req.method(), req.path());
    Err(AppError::NotFound(ROUTE_NOT_FOUND_MESSAGE.to_string()))
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "SQLite (sqlx)",
            "dependency_injection": "Constructor"
        }
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/v2/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], ROUTE_NOT_FOUND_MESSAGE);
    }

    #[actix_web::test]
    async fn test_unsupported_method_gets_error_body() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::patch().uri("/v1/users/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }
}
