//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 검증 및 변환 유틸리티

pub mod string_utils;
