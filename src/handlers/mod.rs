//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 변환하고, 결과를 HTTP 응답으로 돌려주는 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 요청 검증, 응답 변환         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 규칙                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<dyn UserService>`로 주입된 서비스만 사용하며,
//! 모든 실패는 [`AppError`](crate::core::errors::AppError)로 반환되어
//! 경계에서 상태 코드와 JSON 에러 본문으로 변환됩니다.

pub mod users;
