//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 요청 처리 결과를 클라이언트에게 전달하는 응답 구조를 정의합니다.
//!
//! ## JSON 응답 예제
//!
//! ### 검증 성공 (200 OK)
//! ```json
//! { "message": "성공" }
//! ```
//!
//! ### 검증 실패 (400 Bad Request)
//! ```json
//! {
//!   "fieldErrors": [
//!     { "field": "email", "message": "Email is not well formatted." }
//!   ]
//! }
//! ```

pub mod registration_response;

pub use registration_response::*;
