//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 계약을 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   └── user_request.rs    # 생성/수정 공용 요청 (검증 규칙 포함)
//! └── response/
//!     └── user_response.rs   # 사용자 응답
//! ```
//!
//! 요청 DTO는 `validator::Validate`를 구현하며, 핸들러가 서비스 호출 전에
//! `validate()`를 실행합니다. 검증을 통과한 요청만 [`NewUser`] 로 변환됩니다.
//!
//! [`NewUser`]: crate::domain::entities::users::user::NewUser

pub mod request;
pub mod response;
