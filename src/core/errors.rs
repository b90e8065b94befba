//! # Application Error Handling System
//!
//! 사용자 CRUD 서비스의 통합 에러 처리 시스템입니다.
//! 서비스/리포지토리 계층에서 발생한 에러를 닫힌 집합의 [`AppError`] 변형으로
//! 표현하고, 핸들러 경계에서 HTTP 상태 코드와 JSON 에러 본문으로 변환합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 의미 | HTTP 상태 |
//! |------|------|-----------|
//! | `ValidationError` | 요청 본문 형식/범위 오류 | 400 Bad Request |
//! | `NotFound` | 존재하지 않는 사용자 ID | 404 Not Found |
//! | `DatabaseError` | 저장소 I/O 실패 | 500 Internal Server Error |
//! | `InternalError` | 그 밖의 예기치 않은 오류 | 500 Internal Server Error |
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 `message` 필드를 가진 JSON 객체입니다.
//! 검증 실패의 경우 필드별 위반 내역이 `errors` 배열로 함께 전달됩니다.
//!
//! ```json
//! {
//!   "message": "Request validation failed",
//!   "errors": [
//!     { "field": "firstName", "message": "must not be blank" }
//!   ]
//! }
//! ```
//!
//! 500 응답에는 내부 에러 내용을 노출하지 않고 고정된 안내 문구만 담습니다.
//! 원본 에러는 `log::error!`로 서버 로그에만 남습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_user(&self, id: i64) -> AppResult<User> {
//!     self.user_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(AppError::user_not_found)
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::string_utils::to_camel_case;

/// 존재하지 않는 사용자를 참조했을 때의 고정 메시지
pub const USER_NOT_FOUND_MESSAGE: &str = "User does not exist";

/// 예기치 않은 에러(500)에 대한 고정 메시지
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Something unexpected happened. Please try again";

/// 요청 본문 검증 실패 시 최상위 메시지
pub const VALIDATION_FAILED_MESSAGE: &str = "Request validation failed";

/// 단일 필드 검증 위반 내역
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// JSON 필드명 (camelCase)
    pub field: String,
    /// 사람이 읽을 수 있는 위반 메시지
    pub message: String,
}

/// 모든 에러 응답에 공통으로 사용되는 JSON 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

/// 애플리케이션 전역 에러 타입
///
/// 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, actix-web이
/// [`ResponseError`] 구현을 통해 HTTP 응답으로 변환합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 입력이 형식 또는 범위 제약을 위반함 (400)
    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        fields: Vec<FieldViolation>,
    },

    /// 참조한 리소스가 존재하지 않음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 계층 실패 (500)
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// 그 밖의 내부 오류 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 필드 정보 없이 메시지만 가진 검증 에러를 생성합니다.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// 사용자 미존재 에러
    pub fn user_not_found() -> Self {
        AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string())
    }

    /// 응답 본문에 실릴 메시지. 500 계열은 내부 내용을 숨깁니다.
    fn public_message(&self) -> String {
        match self {
            AppError::ValidationError { message, .. } => message.clone(),
            AppError::NotFound(message) => message.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = to_camel_case(field.as_ref());
                field_errors.iter().map(move |error| FieldViolation {
                    field: field.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", error.code)),
                })
            })
            .collect();

        // HashMap 순회 순서에 응답이 흔들리지 않도록 정렬
        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));

        AppError::ValidationError {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            fields,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 중 예기치 않은 오류: {}", self);
        }

        let fields = match self {
            AppError::ValidationError { fields, .. } => fields.clone(),
            _ => Vec::new(),
        };

        HttpResponse::build(status).json(ErrorResponse {
            message: self.public_message(),
            errors: fields,
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥 메시지를 붙여 [`AppError::InternalError`]로 변환하는 확장 트레이트
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::Validate;

    async fn body_of(error: AppError) -> ErrorResponse {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::validation("firstName is required");
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let response = AppError::user_not_found().error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError(sqlx::Error::PoolTimedOut);
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_not_found_body_carries_fixed_message() {
        let body = body_of(AppError::user_not_found()).await;
        assert_eq!(body.message, USER_NOT_FOUND_MESSAGE);
        assert!(body.errors.is_empty());
    }

    #[actix_web::test]
    async fn test_internal_error_body_hides_details() {
        let body = body_of(AppError::InternalError("connection reset by peer".into())).await;
        assert_eq!(body.message, UNEXPECTED_ERROR_MESSAGE);
        assert!(!body.message.contains("connection reset"));
    }

    #[derive(Validate)]
    struct AgeHolder {
        #[validate(range(min = 1, max = 200, message = "out of range"))]
        some_age: i32,
    }

    #[actix_web::test]
    async fn test_validation_errors_become_camel_case_violations() {
        let errors = AgeHolder { some_age: 0 }.validate().unwrap_err();
        let body = body_of(AppError::from(errors)).await;

        assert_eq!(body.message, VALIDATION_FAILED_MESSAGE);
        assert_eq!(
            body.errors,
            vec![FieldViolation {
                field: "someAge".to_string(),
                message: "out of range".to_string(),
            }]
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");
        assert!(app_result.is_err());

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
