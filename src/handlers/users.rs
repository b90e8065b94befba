//! # 사용자 HTTP 핸들러
//!
//! `/v1/users` 하위의 CRUD 엔드포인트를 정의합니다.
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | GET | `/v1/users` | 200 `[User]` | 500 |
//! | GET | `/v1/users/{id}` | 200 `User` | 404 |
//! | POST | `/v1/users` | 201 `User` | 400 |
//! | PUT | `/v1/users/{id}` | 200 `User` | 400, 404 |
//! | DELETE | `/v1/users/{id}` | 204 | 404 |
//!
//! 요청 본문은 서비스 호출 전에 `validator`로 검증되며, 검증 실패는
//! 서비스 계층에 도달하지 않고 400 응답으로 끝납니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::services::users::UserService;

/// 사용자 목록 조회 핸들러
///
/// `GET /v1/users`
#[get("")]
pub async fn list_users(
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = service
        .get_all_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회 핸들러
///
/// `GET /v1/users/{user_id}`
///
/// ## 실패 (404 Not Found)
/// ```json
/// { "message": "User does not exist" }
/// ```
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<dyn UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 생성 핸들러
///
/// `POST /v1/users`
///
/// # 요청 본문
///
/// ```json
/// { "firstName": "Ana", "lastName": "Lopez", "age": 30 }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// { "id": 1, "firstName": "Ana", "lastName": "Lopez", "age": 30 }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "message": "Request validation failed",
///   "errors": [{ "field": "firstName", "message": "must not be blank" }]
/// }
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<dyn UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service.save_user(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 사용자 수정 핸들러
///
/// `PUT /v1/users/{user_id}`
///
/// 본문의 firstName, lastName, age 로 기존 값을 모두 덮어씁니다.
/// 본문 검증이 먼저 수행되므로, 잘못된 본문은 ID 존재 여부와 관계없이 400 입니다.
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<dyn UserService>,
    user_id: web::Path<i64>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service
        .update_user(user_id.into_inner(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /v1/users/{user_id}` → 204 No Content
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<dyn UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(user_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
