//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체입니다.
//! JSON 필드명은 camelCase 를 사용합니다.

pub mod users;
