use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 본문
///
/// ```json
/// { "id": 1, "firstName": "Ana", "lastName": "Lopez", "age": 30 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            age,
        } = user;

        Self {
            id,
            first_name,
            last_name,
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let response = UserResponse::from(User {
            id: 3,
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            age: 30,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "id": 3, "firstName": "Ana", "lastName": "Lopez", "age": 30 })
        );
    }
}
