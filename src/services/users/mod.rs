//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기(생성, 조회, 수정, 삭제)의 비즈니스 규칙을 구현합니다.

pub mod user_service;

pub use user_service::{DefaultUserService, UserService};
