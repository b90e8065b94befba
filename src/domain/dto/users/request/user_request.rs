use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::users::user::NewUser;
use crate::utils::string_utils::validate_not_blank;

/// 사용자 생성/수정 요청 본문 (`POST /v1/users`, `PUT /v1/users/{id}`)
///
/// ```json
/// { "firstName": "Ana", "lastName": "Lopez", "age": 30 }
/// ```
///
/// 알 수 없는 필드(`id` 포함)는 무시됩니다. ID는 항상 저장소가 부여합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 256, message = "must be at most 256 characters"))]
    pub first_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 256, message = "must be at most 256 characters"))]
    pub last_name: String,

    #[validate(range(min = 1, max = 200, message = "must be between 1 and 200"))]
    pub age: i32,
}

impl UserRequest {
    pub fn into_new_user(self) -> NewUser {
        NewUser::new(self.first_name, self.last_name, self.age)
    }
}

impl From<UserRequest> for NewUser {
    fn from(request: UserRequest) -> Self {
        request.into_new_user()
    }
}
