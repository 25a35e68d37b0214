//! # Domain Module
//!
//! 서비스가 다루는 데이터 구조를 정의합니다. 영속 엔티티는 없으며
//! 요청/응답 DTO만 존재합니다.

pub mod dto;

pub use dto::*;
