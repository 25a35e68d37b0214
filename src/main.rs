//! 사용자 등록 검증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 외부 저장소나 서비스 연결 없이
//! 환경 설정과 로깅만 초기화한 뒤 바로 요청을 받습니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use user_validation_service::config::{CorsConfig, Profile, ServerConfig};
use user_validation_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env의 RUST_LOG가 반영되도록 env 파일을 먼저 로드
    let profile = Profile::current();
    let env_file = load_env_file(&profile);
    init_logging();

    info!("Current profile: {:?}", profile);
    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => error!("{} 파일 로드 실패: {}", profile.env_file(), e),
    }

    info!("🚀 사용자 등록 검증 서비스 시작중...");

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다 (워커 {}개)", bind_address, workers);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 회원가입 검증: POST http://{}/user", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 실행 프로필에 맞는 `.env` 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file(profile: &Profile) -> Result<&'static str, dotenv::Error> {
    let file = profile.env_file();
    dotenv::from_filename(file).map(|_| file)
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin에서의 JSON POST 요청을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
