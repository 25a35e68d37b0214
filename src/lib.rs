//! 사용자 등록 검증 서비스
//!
//! 회원가입 페이로드를 받아 필드 단위 규칙(존재 여부, 형식, 길이)을 적용하고
//! 성공 응답 또는 필드 에러 목록을 돌려주는 HTTP 서비스입니다.
//! 저장소, 인증, 비즈니스 로직은 없습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /user, GET /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 역직렬화 결과를 검증하고 응답 선택
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DTO + Rules    │ ← UserRegistration 규칙 테이블
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_validation_service::domain::UserRegistration;
//!
//! let user = UserRegistration::new(1, "jdfad", "123456");
//! let violations = user.validate();
//! assert_eq!(violations[0].message, "Email is not well formatted.");
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod validation;
pub mod routes;
pub mod handlers;
