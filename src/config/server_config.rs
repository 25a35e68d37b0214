//! 서버 실행 환경 설정
//!
//! 환경 변수에서 바인딩 주소, 워커 수, CORS 허용 Origin, 실행 프로필을 읽습니다.
//! 값이 없거나 파싱할 수 없으면 기본값을 사용합니다.

use std::convert::Infallible;
use std::env;
use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKERS: usize = 4;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8080";

/// `.env` 파일 선택에 사용하는 실행 프로필
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Development,
    Production,
    Default,
}

impl Profile {
    /// `PROFILE` 환경 변수에서 현재 프로필을 결정합니다 (기본값: dev)
    pub fn current() -> Self {
        env::var("PROFILE")
            .map_or(Profile::Development, |value| value.parse::<Profile>().unwrap_or(Profile::Default))
    }

    /// 프로필에 대응하는 env 파일 이름
    pub fn env_file(&self) -> &'static str {
        match self {
            Profile::Development => ".env.dev",
            Profile::Production => ".env.prod",
            Profile::Default => ".env",
        }
    }
}

/// 알 수 없는 값은 `Profile::Default`로 해석하므로 실패하지 않습니다
impl FromStr for Profile {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "dev" | "development" => Profile::Development,
            "prod" | "production" => Profile::Production,
            _ => Profile::Default,
        })
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
    }

    pub fn port() -> u16 {
        parse_or_default("PORT", env::var("PORT").ok(), DEFAULT_PORT)
    }

    /// actix-web 워커 스레드 수 (최소 1)
    pub fn workers() -> usize {
        parse_or_default("WORKERS", env::var("WORKERS").ok(), DEFAULT_WORKERS).max(1)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분) 에서 허용 Origin 목록을 읽습니다
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string());
        split_origins(&raw)
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|e| {
            log::warn!("{} 파싱 실패 ({}): {}. 기본값 사용", key, value, e);
            default
        }),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
