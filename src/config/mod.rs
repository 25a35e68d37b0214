//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export PROFILE="dev"        # dev → .env.dev, prod → .env.prod, 그 외 → .env
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! export RUST_LOG="info,actix_web=info"
//! ```
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${server.port}")` | `ServerConfig::port()` |
//! | `@Profile("dev")` | `Profile::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod server_config;

pub use server_config::*;
