//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (users 테이블)
//! └── dto       - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Service Layer (services)
//!      │
//!      ▼
//! Repository Layer (repositories, db)
//! ```

pub mod dto;
pub mod entities;
