//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository) 트레이트와 sqlx 구현
//! [`SqlUserRepository`](user_repo::SqlUserRepository)를 제공합니다.

pub mod user_repo;

pub use user_repo::{SqlUserRepository, UserRepository, UserTransaction};
