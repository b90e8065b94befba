//! # Domain Entities
//!
//! 관계형 저장소에 영속되는 도메인 엔티티입니다.
//! 현재는 `users` 테이블에 대응하는 사용자 엔티티 하나만 존재하며,
//! 다른 엔티티와의 관계는 없습니다.

pub mod users;
