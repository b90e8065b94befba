//! # Configuration Module
//!
//! 환경 변수 기반의 설정값을 한 곳에서 관리합니다.
//! 프로필별 `.env` 파일(`.env.dev`, `.env.prod`)은 `main`에서 `dotenv`로 먼저 로드됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 데이터베이스
//! export DATABASE_URL="sqlite://users.db?mode=rwc"
//! export DATABASE_MAX_CONNECTIONS="5"
//!
//! # 요청 제한 / CORS
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! ```

pub mod data_config;

pub use data_config::*;
