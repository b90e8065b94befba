//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, HTTP 서버, 실행 환경, 요청 제한 및 CORS 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 파싱할 수 없는 값은 에러 로그를 남기고
//! 기본값으로 대체합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 인메모리 데이터베이스 사용
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 환경 변수 원시 값을 파싱하고, 실패 시 기본값을 사용합니다.
fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    parse_or_default(key, env::var(key).ok(), default)
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수
    pub fn workers() -> usize {
        env_or("WORKERS", 4)
    }
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// sqlx 연결 문자열 (예: `sqlite://users.db?mode=rwc`, `sqlite::memory:`)
    pub url: String,
    /// 풀의 최대 연결 수
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        let environment = Environment::current();
        Self {
            url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| Self::default_url_for_env(&environment).to_string()),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5),
        }
    }

    pub fn default_url_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development => "sqlite://users_dev.db?mode=rwc",
            Environment::Test => "sqlite::memory:",
            Environment::Staging | Environment::Production => "sqlite://users.db?mode=rwc",
        }
    }

    /// 인메모리 데이터베이스 설정
    ///
    /// 인메모리 SQLite 는 연결마다 별도의 데이터베이스를 가지므로 연결 수를 1로 고정합니다.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 허용 출처 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분) 를 읽습니다.
    pub fn from_env() -> Self {
        Self::from_raw(env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    fn from_raw(raw: Option<String>) -> Self {
        let allowed_origins = raw
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect());

        Self { allowed_origins }
    }
}
