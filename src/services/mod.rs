//! 비즈니스 로직 계층
//!
//! 서비스는 리포지토리 트레이트 객체를 생성자로 주입받고,
//! 도메인 에러([`AppError`](crate::core::errors::AppError))를 반환합니다.

pub mod users;
