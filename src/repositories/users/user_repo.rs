//! # 사용자 리포지토리 구현
//!
//! `users` 테이블에 대한 데이터 액세스 계층입니다.
//!
//! ## 구성
//!
//! - [`UserRepository`]: 조회 연산(`find_by_id`, `list_all`)과 트랜잭션 시작(`begin`)
//! - [`UserTransaction`]: 하나의 트랜잭션 안에서 실행되는 조회/삽입/수정/삭제
//! - [`SqlUserRepository`]: sqlx + SQLite 구현
//!
//! 변경 연산은 항상 트랜잭션을 통해 수행됩니다. 서비스 계층은 읽기-수정-쓰기를
//! 하나의 트랜잭션으로 묶고 마지막에 `commit`을 호출하며, 커밋되지 않은 채
//! 드롭된 트랜잭션은 롤백됩니다. 따라서 연산 도중 실패해도 부분적으로 반영된
//! 상태가 다른 요청에 노출되지 않습니다.
//!
//! 저장소 I/O 오류는 [`AppError::DatabaseError`]로 그대로 전파됩니다.

use async_trait::async_trait;
use log::debug;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::{NewUser, User};

const SELECT_BY_ID: &str = "SELECT id, first_name, last_name, age FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, first_name, last_name, age FROM users ORDER BY id";
const INSERT: &str = "INSERT INTO users (first_name, last_name, age) VALUES (?, ?, ?)";
const UPDATE: &str = "UPDATE users SET first_name = ?, last_name = ?, age = ? WHERE id = ?";
const DELETE: &str = "DELETE FROM users WHERE id = ?";
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name VARCHAR(256) NOT NULL,
    last_name  VARCHAR(256) NOT NULL,
    age        INTEGER NOT NULL
)
"#;

/// 사용자 데이터 액세스 계약
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 저장 순서(id 오름차순)로 모든 사용자를 반환합니다.
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// 새 쓰기 트랜잭션을 시작합니다.
    async fn begin(&self) -> AppResult<Box<dyn UserTransaction>>;
}

/// 하나의 저장소 트랜잭션 범위에서 수행되는 사용자 연산
#[async_trait]
pub trait UserTransaction: Send {
    async fn find_by_id(&mut self, id: i64) -> AppResult<Option<User>>;

    /// 행을 삽입하고 저장소가 부여한 ID가 채워진 사용자를 반환합니다.
    async fn insert(&mut self, user: NewUser) -> AppResult<User>;

    /// `user.id`에 해당하는 행을 덮어씁니다.
    async fn update(&mut self, user: &User) -> AppResult<()>;

    /// `user.id`에 해당하는 행을 삭제합니다.
    async fn delete(&mut self, user: &User) -> AppResult<()>;

    async fn commit(&mut self) -> AppResult<()>;
}

/// sqlx 기반 사용자 리포지토리
#[derive(Clone)]
pub struct SqlUserRepository {
    pool: SqlitePool,
}

impl SqlUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }

    /// `users` 테이블이 없으면 생성합니다.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        debug!("users 테이블 스키마 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn begin(&self) -> AppResult<Box<dyn UserTransaction>> {
        // 조회 후 쓰기 과정에서 SHARED → RESERVED 승격 교착이 생기지 않도록
        // 시작 시점에 쓰기 잠금을 잡습니다. 잠금 대기는 busy_timeout 을 따릅니다.
        let tx = self.pool.begin_with(BEGIN_WRITE).await?;
        Ok(Box::new(SqlUserTransaction { tx: Some(tx) }))
    }
}

/// sqlx 트랜잭션 래퍼
///
/// `commit` 이후에는 `tx`가 비어 있으며, 이후 호출은 내부 오류가 됩니다.
pub struct SqlUserTransaction {
    tx: Option<Transaction<'static, Sqlite>>,
}

impl SqlUserTransaction {
    fn conn(&mut self) -> AppResult<&mut SqliteConnection> {
        match self.tx.as_mut() {
            Some(tx) => Ok(&mut **tx),
            None => Err(AppError::InternalError(
                "transaction already committed".to_string(),
            )),
        }
    }
}

#[async_trait]
impl UserTransaction for SqlUserTransaction {
    async fn find_by_id(&mut self, id: i64) -> AppResult<Option<User>> {
        let conn = self.conn()?;
        let user = sqlx::query_as::<_, User>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(user)
    }

    async fn insert(&mut self, user: NewUser) -> AppResult<User> {
        let conn = self.conn()?;
        let result = sqlx::query(INSERT)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.age)
            .execute(conn)
            .await?;

        Ok(user.with_id(result.last_insert_rowid()))
    }

    async fn update(&mut self, user: &User) -> AppResult<()> {
        let conn = self.conn()?;
        let result = sqlx::query(UPDATE)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.age)
            .bind(user.id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::user_not_found());
        }
        Ok(())
    }

    async fn delete(&mut self, user: &User) -> AppResult<()> {
        let conn = self.conn()?;
        let result = sqlx::query(DELETE).bind(user.id).execute(conn).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::user_not_found());
        }
        Ok(())
    }

    async fn commit(&mut self) -> AppResult<()> {
        match self.tx.take() {
            Some(tx) => {
                tx.commit().await?;
                Ok(())
            }
            None => Err(AppError::InternalError(
                "transaction already committed".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    async fn repository() -> SqlUserRepository {
        let database = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        let repo = SqlUserRepository::new(&database);
        repo.ensure_schema().await.unwrap();
        repo
    }

    async fn insert(repo: &SqlUserRepository, user: NewUser) -> User {
        let mut tx = repo.begin().await.unwrap();
        let stored = tx.insert(user).await.unwrap();
        tx.commit().await.unwrap();
        stored
    }

    #[actix_web::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = repository().await;

        let first = insert(&repo, NewUser::new("Ana", "Lopez", 30)).await;
        let second = insert(&repo, NewUser::new("Luis", "Perez", 41)).await;

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(repo.find_by_id(first.id).await.unwrap(), Some(first.clone()));
        assert_eq!(repo.list_all().await.unwrap(), vec![first, second]);
    }

    #[actix_web::test]
    async fn test_find_missing_returns_none() {
        let repo = repository().await;
        assert_eq!(repo.find_by_id(999_999).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let repo = repository().await;
        let mut user = insert(&repo, NewUser::new("Ana", "Lopez", 30)).await;

        user.apply(NewUser::new("Ana2", "Lopez", 31));
        let mut tx = repo.begin().await.unwrap();
        tx.update(&user).await.unwrap();
        tx.commit().await.unwrap();
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user.clone()));

        let mut tx = repo.begin().await.unwrap();
        tx.delete(&user).await.unwrap();
        tx.commit().await.unwrap();
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_uncommitted_transaction_rolls_back() {
        let repo = repository().await;

        {
            let mut tx = repo.begin().await.unwrap();
            tx.insert(NewUser::new("Ghost", "User", 50)).await.unwrap();
        }

        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_of_missing_row_is_not_found() {
        let repo = repository().await;
        let phantom = NewUser::new("No", "One", 20).with_id(42);

        let mut tx = repo.begin().await.unwrap();
        assert!(matches!(tx.update(&phantom).await, Err(AppError::NotFound(_))));
        assert!(matches!(tx.delete(&phantom).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_commit_twice_is_an_error() {
        let repo = repository().await;
        let mut tx = repo.begin().await.unwrap();
        tx.commit().await.unwrap();

        assert!(matches!(tx.commit().await, Err(AppError::InternalError(_))));
        assert!(matches!(tx.find_by_id(1).await, Err(AppError::InternalError(_))));
    }
}
