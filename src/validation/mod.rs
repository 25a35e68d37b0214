//! # Validation Module
//!
//! 요청 DTO에 대한 필드 단위 검증 기반을 제공합니다.
//!
//! Spring의 `@NotNull`, `@Size`, `@Email` 애노테이션처럼 필드에 규칙을 붙이는
//! 대신, 각 DTO가 `FieldRule` 목록을 명시적으로 선언하고 [`evaluate`]가
//! 이를 순서대로 평가합니다.
//!
//! ```rust,ignore
//! use crate::validation::{evaluate, FieldRule};
//!
//! const RULES: &[FieldRule<SignUp>] = &[
//!     FieldRule::new("email", email_present, "Email is required."),
//! ];
//!
//! let violations = evaluate(&request, RULES);
//! ```

pub mod email;
pub mod field_rule;

pub use email::is_well_formed_email;
pub use field_rule::*;
