//! # Database Connection Module
//!
//! sqlx 기반 SQLite 연결 풀을 생성하고 관리합니다.
//!
//! - 연결 문자열과 풀 크기는 [`DatabaseConfig`]에서 가져옵니다.
//! - 파일 기반 데이터베이스는 없으면 생성합니다.
//! - 동시 쓰기 시 즉시 실패하지 않도록 busy timeout 을 설정합니다.
//! - 파일 기반 데이터베이스는 WAL 저널 모드로 열어 읽기가 쓰기를 막지 않게 합니다.
//! - 인메모리 데이터베이스는 연결이 닫히면 내용이 사라지므로 유휴 연결을 회수하지 않습니다.

use std::str::FromStr;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppResult, ErrorContext};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 설정에 따라 연결 풀을 만들고 `SELECT 1`로 연결을 확인합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options = SqliteConnectOptions::from_str(&config.url)
            .with_context(|| format!("잘못된 DATABASE_URL '{}'", config.url))?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        if !config.is_in_memory() {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));

        if config.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options.connect_with(options).await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        info!("✅ 데이터베이스 연결 성공: {}", config.url);

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
