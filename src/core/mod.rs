//! # Core Infrastructure Module
//!
//! 애플리케이션 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! - [`errors`] - `AppError`

pub mod errors;

pub use errors::*;
