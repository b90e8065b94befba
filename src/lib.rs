//! 사용자 CRUD 서비스 백엔드
//!
//! 단일 `User` 리소스에 대한 목록/조회/생성/수정/삭제 REST API 를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: `/v1/users` CRUD 엔드포인트
//! - **요청 검증**: `validator` 기반 필드 단위 검증, 400 응답에 필드별 메시지
//! - **일관된 에러 본문**: 모든 실패 응답은 `{"message": ...}` 형식
//! - **트랜잭션**: 생성/수정/삭제는 하나의 SQL 트랜잭션으로 실행
//! - **SQLite**: sqlx 기반 `users` 테이블 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │    Handlers     │ ← 요청 검증 / 에러 → HTTP 변환
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │    Services     │ ← 비즈니스 규칙 (fetch-or-fail, 덮어쓰기 수정)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │  Repositories   │ ← sqlx 트랜잭션 / 쿼리
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │     SQLite      │
//! └─────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
