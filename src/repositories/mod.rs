//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 트레이트로 정의되며, 구체 구현은 `main`(composition root)에서
//! 생성되어 서비스의 생성자로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{SqlUserRepository, UserRepository};
//!
//! let user_repo = SqlUserRepository::new(&database);
//! user_repo.ensure_schema().await?;
//! let user = user_repo.find_by_id(1).await?;
//! ```

pub mod users;
