//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Valid @RequestBody User` | `UserRegistration` | 회원가입 요청 |
//! | `ResponseEntity<Success>` | `SuccessResponse` | 검증 성공 응답 |
//! | `MethodArgumentNotValidException` | `ErrorResponse` | 필드 에러 응답 |

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
