//! # User Registration HTTP Handlers
//!
//! 회원가입 페이로드를 검증하는 HTTP 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/user` | 회원가입 페이로드 검증 | 200 OK / 400 Bad Request |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @PostMapping("/user")
//! public ResponseEntity<Success> newUser(@Valid @RequestBody User user) {
//!     return ResponseEntity.ok(new Success("성공"));
//! }
//! ```
//!
//! Spring은 `@Valid` 실패 시 프레임워크가 `MethodArgumentNotValidException`을
//! 400 응답으로 변환합니다. 이 모듈에서는 핸들러가 직접 검증기를 호출하고
//! 결과가 비었는지에 따라 응답을 선택합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! received ─▶ 역직렬화 실패 ─────────────▶ 400 {"error": ...}
//!    │
//!    ▼
//! validated ─▶ 위반 없음 ────────────────▶ 200 {"message": "성공"}
//!    │
//!    └──────▶ 위반 있음 ────────────────▶ 400 {"fieldErrors": [...]}
//! ```
//!
//! 역직렬화 실패는 `routes::json_config`에 등록된 에러 핸들러가
//! `AppError::MalformedPayload`로 처리하므로 핸들러 본문까지 도달하지 않습니다.

use actix_web::{post, web, HttpResponse};
use log::debug;

use crate::domain::dto::users::request::UserRegistration;
use crate::domain::dto::users::response::{ErrorResponse, SuccessResponse};

/// 회원가입 페이로드를 검증합니다
///
/// # Returns
///
/// * `200 OK` - 모든 규칙 통과, `{"message": "성공"}`
/// * `400 Bad Request` - 하나 이상의 규칙 위반, `{"fieldErrors": [...]}`
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/user \
///   -H "Content-Type: application/json" \
///   -d '{"id":1,"email":"a@b.com","password":"123456"}'
/// ```
#[post("/user")]
pub async fn create_user(payload: web::Json<UserRegistration>) -> HttpResponse {
    let violations = payload.validate();

    if violations.is_empty() {
        debug!("회원가입 검증 통과: id={:?}", payload.id);
        return HttpResponse::Ok().json(SuccessResponse::registered());
    }

    debug!(
        "회원가입 검증 실패: {}",
        violations
            .iter()
            .map(|v| v.field.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    HttpResponse::BadRequest().json(ErrorResponse::from(violations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::user_registration::{
        EMAIL_MALFORMED, EMAIL_REQUIRED, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT,
    };
    use crate::validation::FieldError;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    async fn post_user(body: Value) -> (StatusCode, Value) {
        let app = test::init_service(App::new().service(create_user)).await;

        let request = test::TestRequest::post()
            .uri("/user")
            .set_json(&body)
            .to_request();

        let response = test::call_service(&app, request).await;
        let status = response.status();
        let body: Value = test::read_body_json(response).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_valid_registration_returns_success() {
        let (status, body) =
            post_user(json!({"id": 1, "email": "a@b.com", "password": "123456"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "성공"}));
    }

    #[actix_web::test]
    async fn test_empty_email_returns_field_error() {
        let (status, body) =
            post_user(json!({"id": 1, "email": "", "password": "123456"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fieldErrors"][0]["field"], "email");
        assert_eq!(body["fieldErrors"][0]["message"], EMAIL_REQUIRED);
    }

    #[actix_web::test]
    async fn test_malformed_email_returns_field_error() {
        let (status, body) =
            post_user(json!({"id": 1, "email": "jdfad", "password": "123456"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fieldErrors"][0]["field"], "email");
        assert_eq!(body["fieldErrors"][0]["message"], EMAIL_MALFORMED);
    }

    #[actix_web::test]
    async fn test_field_errors_follow_validator_order() {
        let (status, body) = post_user(json!({"id": 1, "email": null, "password": "123"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        let response: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            response.field_errors,
            vec![
                FieldError::new("email", EMAIL_REQUIRED),
                FieldError::new("password", PASSWORD_TOO_SHORT),
            ]
        );
    }

    #[actix_web::test]
    async fn test_missing_password_key_is_required() {
        let (status, body) = post_user(json!({"id": 1, "email": "a@b.com"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"fieldErrors": [{"field": "password", "message": PASSWORD_REQUIRED}]})
        );
    }
}
