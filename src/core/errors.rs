//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 요청 처리 중 발생하는
//! 에러를 일관된 JSON 응답으로 변환합니다.
//!
//! 필드 검증 실패는 이 타입으로 표현하지 않습니다. 검증 결과는 핸들러가 직접
//! `ErrorResponse`로 만들어 400 응답을 돌려주며, 여기서는 요청 본문 자체를
//! 해석할 수 없는 경우만 다룹니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! web::JsonConfig::default()
//!     .error_handler(|err, _req| AppError::MalformedPayload(err.to_string()).into());
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문을 `UserRegistration` 형태로 역직렬화할 수 없음 (400 Bad Request)
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 에러 종류에 맞는 상태 코드와 `{"error": "..."}` JSON 본문을 사용합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    #[test]
    fn test_malformed_payload_response() {
        let error = AppError::MalformedPayload("expected value at line 1 column 1".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body = response.into_body().try_into_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value["error"],
            "Malformed payload: expected value at line 1 column 1"
        );
    }
}
