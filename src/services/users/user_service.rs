//! # 사용자 관리 서비스 구현
//!
//! 사용자 조회/생성/수정/삭제의 비즈니스 규칙을 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  • fetch-or-fail (NotFound)                  │
//! │  • 전체 필드 덮어쓰기 수정                    │
//! │  • 변경 연산의 트랜잭션 경계                  │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │                UserRepository                │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 입력 검증은 핸들러에서 이미 끝난 상태로 들어온다고 가정합니다.
//! 생성/수정/삭제는 각각 하나의 저장소 트랜잭션 안에서 실행되고,
//! 모든 단계가 성공했을 때만 커밋됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::{NewUser, User};
use crate::repositories::users::UserRepository;

/// 사용자 서비스 계약
///
/// 핸들러는 이 트레이트에만 의존하며, 구현체는 `main`에서 주입됩니다.
#[async_trait]
pub trait UserService: Send + Sync {
    /// 존재하지 않으면 [`AppError::NotFound`]
    async fn get_user_by_id(&self, id: i64) -> AppResult<User>;

    async fn get_all_users(&self) -> AppResult<Vec<User>>;

    /// 새 사용자를 저장하고 저장소가 부여한 ID와 함께 반환합니다.
    async fn save_user(&self, user: NewUser) -> AppResult<User>;

    /// first_name, last_name, age 를 `changes`의 값으로 모두 덮어씁니다.
    async fn update_user(&self, id: i64, changes: NewUser) -> AppResult<User>;

    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// 리포지토리에 위임하는 기본 구현
pub struct DefaultUserService {
    user_repo: Arc<dyn UserRepository>,
}

impl DefaultUserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for DefaultUserService {
    async fn get_user_by_id(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        let users = self.user_repo.list_all().await?;
        debug!("사용자 목록 조회: {}건", users.len());
        Ok(users)
    }

    async fn save_user(&self, user: NewUser) -> AppResult<User> {
        let mut tx = self.user_repo.begin().await?;
        let created = tx.insert(user).await?;
        tx.commit().await?;

        info!("사용자 생성 완료: id={}", created.id);
        Ok(created)
    }

    async fn update_user(&self, id: i64, changes: NewUser) -> AppResult<User> {
        let mut tx = self.user_repo.begin().await?;

        let mut existing = tx
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        existing.apply(changes);
        tx.update(&existing).await?;
        tx.commit().await?;

        info!("사용자 수정 완료: id={}", id);
        Ok(existing)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        let mut tx = self.user_repo.begin().await?;

        let existing = tx
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        tx.delete(&existing).await?;
        tx.commit().await?;

        info!("사용자 삭제 완료: id={}", id);
        Ok(())
    }
}
