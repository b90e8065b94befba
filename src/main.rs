//! 사용자 CRUD 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 데이터베이스 연결과 스키마를 준비한 뒤 리포지토리 → 서비스 순으로
//! 구성 요소를 생성하여 핸들러에 주입합니다 (composition root).

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_service::config::{CorsConfig, DatabaseConfig, RateLimitConfig, ServerConfig};
use users_service::db::Database;
use users_service::repositories::users::SqlUserRepository;
use users_service::routes::configure_all_routes;
use users_service::services::users::{DefaultUserService, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    let database = initialize_database().await?;
    let user_service = build_user_service(&database).await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let result = start_http_server(user_service).await;

    database.close().await;
    info!("👋 사용자 서비스 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 제한, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 요청 제한 설정 오류 또는 서버 실행 오류
async fn start_http_server(user_service: Arc<dyn UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/v1/users", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::from_env();
    let user_service = web::Data::from(user_service);

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일 로드
///
/// `PROFILE` 환경 변수에 따라 `.env.prod`, `.env.dev` 또는 기본 `.env`를 로드합니다.
/// 로거 초기화 전이므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => eprintln!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => eprintln!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            eprintln!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

async fn initialize_database() -> io::Result<Database> {
    let config = DatabaseConfig::from_env();
    info!("📡 데이터베이스 연결 중... ({})", config.url);

    Database::connect(&config).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })
}

/// 리포지토리와 서비스를 생성하고 `users` 테이블을 준비합니다.
async fn build_user_service(database: &Database) -> io::Result<Arc<dyn UserService>> {
    let user_repo = SqlUserRepository::new(database);

    user_repo.ensure_schema().await.map_err(|e| {
        error!("users 테이블 생성 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    Ok(Arc::new(DefaultUserService::new(Arc::new(user_repo))))
}

fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .max_age(3600)
}
