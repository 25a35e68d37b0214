//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트가 보내는 사용자 요청 페이로드와 각 페이로드의 검증 규칙을
//! 정의합니다.
//!
//! - [`user_registration`] - `POST /user` 회원가입 페이로드

pub mod user_registration;

pub use user_registration::UserRegistration;
