//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 에러 타입과 결과 타입을 제공합니다.
//!
//! ```rust,ignore
//! use crate::core::{AppError, AppResult};
//!
//! fn find(id: i64) -> AppResult<User> {
//!     Err(AppError::user_not_found())
//! }
//! ```

pub mod errors;

pub use errors::*;
