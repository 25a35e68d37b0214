//! 회원가입 요청에 대한 응답 DTO
//!
//! 검증 통과 시 [`SuccessResponse`], 실패 시 [`ErrorResponse`]를 반환합니다.

use serde::{Deserialize, Serialize};

use crate::validation::FieldError;

/// 검증 통과 시 돌려주는 고정 응답 메시지
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "성공";

/// 검증 성공 응답
///
/// ```json
/// { "message": "성공" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn registered() -> Self {
        Self::new(REGISTRATION_SUCCESS_MESSAGE)
    }
}

/// 필드 검증 실패 응답
///
/// `field_errors`는 검증기가 보고한 순서를 그대로 유지합니다.
///
/// ```json
/// { "fieldErrors": [ { "field": "email", "message": "Email is required." } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub field_errors: Vec<FieldError>,
}

impl From<Vec<FieldError>> for ErrorResponse {
    fn from(field_errors: Vec<FieldError>) -> Self {
        Self { field_errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response_shape() {
        let json = serde_json::to_value(SuccessResponse::registered()).unwrap();

        assert_eq!(json, json!({ "message": "성공" }));
    }

    #[test]
    fn test_error_response_uses_camel_case_key() {
        let response = ErrorResponse::from(vec![
            FieldError::new("email", "Email is required."),
            FieldError::new("password", "Password is required,"),
        ]);

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            json!({
                "fieldErrors": [
                    { "field": "email", "message": "Email is required." },
                    { "field": "password", "message": "Password is required," }
                ]
            })
        );
    }
}
