//! # Data Transfer Objects
//!
//! HTTP 계층과 주고받는 요청/응답 구조체를 모아둔 모듈입니다.
//! 모든 DTO는 요청 단위로 생성되고 응답 후 버려집니다.

pub mod users;

pub use users::*;
