//! # 사용자 등록 요청 DTO
//!
//! `POST /user`로 전달되는 회원가입 페이로드와 그 검증 규칙을 정의합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `id` | null 불가 | `must not be null` |
//! | `email` | null 불가 | `Email is required.` |
//! | `email` | 최소 1자 | `Email is required.` |
//! | `email` | 이메일 형식 (유니코드, 따옴표 로컬 파트 허용) | `Email is not well formatted.` |
//! | `password` | null 불가 | `Password is required,` |
//! | `password` | 최소 6자 | `Password should be at least 6 characters.` |
//!
//! 필드마다 처음 실패한 규칙 하나만 보고되며, 필드는 `id`, `email`,
//! `password` 순서로 보고됩니다.
//!
//! ## JSON 예제
//!
//! ```json
//! { "id": 1, "email": "user@example.com", "password": "123456" }
//! ```

use serde::{Deserialize, Serialize};
use validator::ValidateLength;

use crate::validation::{evaluate, is_well_formed_email, FieldError, FieldRule};

pub const ID_REQUIRED: &str = "must not be null";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_MALFORMED: &str = "Email is not well formatted.";
pub const PASSWORD_REQUIRED: &str = "Password is required,";
pub const PASSWORD_TOO_SHORT: &str = "Password should be at least 6 characters.";

const PASSWORD_MIN_LENGTH: u64 = 6;

/// 회원가입 요청 DTO
///
/// 모든 필드가 `Option`이므로 JSON의 `null`이나 누락된 키도 역직렬화에
/// 성공하고, 필수 여부는 [`UserRegistration::validate`]가 판단합니다.
/// 요청마다 생성되고 응답 후 버려지며 저장되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRegistration {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserRegistration {
    pub fn new(id: i64, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// 선언된 규칙을 모두 평가하여 위반 목록을 반환합니다.
    ///
    /// 실패하지 않으며 부수 효과가 없습니다. 빈 목록은 모든 규칙을
    /// 통과했음을 의미합니다.
    pub fn validate(&self) -> Vec<FieldError> {
        evaluate(self, USER_REGISTRATION_RULES)
    }
}

const USER_REGISTRATION_RULES: &[FieldRule<UserRegistration>] = &[
    FieldRule::new("id", id_present, ID_REQUIRED),
    FieldRule::new("email", email_present, EMAIL_REQUIRED),
    FieldRule::new("email", email_not_empty, EMAIL_REQUIRED),
    FieldRule::new("email", email_well_formed, EMAIL_MALFORMED),
    FieldRule::new("password", password_present, PASSWORD_REQUIRED),
    FieldRule::new("password", password_long_enough, PASSWORD_TOO_SHORT),
];

fn id_present(user: &UserRegistration) -> bool {
    user.id.is_some()
}

fn email_present(user: &UserRegistration) -> bool {
    user.email.is_some()
}

// null은 앞선 규칙이 처리하므로 여기서는 통과로 본다.
fn email_not_empty(user: &UserRegistration) -> bool {
    user.email
        .as_ref()
        .is_none_or(|email| email.validate_length(Some(1u64), None, None))
}

fn email_well_formed(user: &UserRegistration) -> bool {
    user.email
        .as_ref()
        .is_none_or(|email| email.is_empty() || is_well_formed_email(email))
}

fn password_present(user: &UserRegistration) -> bool {
    user.password.is_some()
}

fn password_long_enough(user: &UserRegistration) -> bool {
    user.password
        .as_ref()
        .is_none_or(|password| password.validate_length(Some(PASSWORD_MIN_LENGTH), None, None))
}
