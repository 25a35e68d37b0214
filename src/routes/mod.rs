//! API 라우트 설정 모듈
//!
//! 회원가입 검증 엔드포인트와 헬스체크 엔드포인트를 등록하고,
//! JSON 추출기 설정을 애플리케이션에 연결합니다.
//!
//! # Routes
//!
//! - `POST /user` - 회원가입 페이로드 검증
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::{web, HttpResponse};
use log::debug;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user);
}

/// JSON 추출기 설정
///
/// 본문이 JSON이 아니거나, 타입이 맞지 않거나, Content-Type이 잘못된 요청을
/// `AppError::MalformedPayload`(400, `{"error": ...}`)로 변환합니다.
/// 이 경우 필드 검증은 수행되지 않습니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("역직렬화 실패: {}", err);
        AppError::MalformedPayload(err.to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_validation_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
