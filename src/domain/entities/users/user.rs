//! # 사용자 엔티티
//!
//! `users` 테이블 스키마:
//!
//! | 컬럼 | 타입 | 제약 |
//! |------|------|------|
//! | `id` | `INTEGER` | PRIMARY KEY, 저장소가 생성 |
//! | `first_name` | `VARCHAR(256)` | NOT NULL |
//! | `last_name` | `VARCHAR(256)` | NOT NULL |
//! | `age` | `INTEGER` | NOT NULL, 1..=200 |
//!
//! 필드 제약(공백 불가, 최대 길이, 나이 범위)은 요청 DTO 검증 단계에서 보장되며,
//! 검증을 통과한 값만 엔티티로 변환되어 저장소에 도달합니다.

use sqlx::FromRow;

/// 저장된 사용자
///
/// `id`는 삽입 시점에 저장소가 단 한 번 부여하며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl User {
    /// 변경 가능한 필드(first_name, last_name, age)를 모두 덮어씁니다.
    ///
    /// 부분 병합이 아닌 전체 필드 덮어쓰기이며, `id`는 유지됩니다.
    pub fn apply(&mut self, changes: NewUser) {
        let NewUser {
            first_name,
            last_name,
            age,
        } = changes;

        self.first_name = first_name;
        self.last_name = last_name;
        self.age = age;
    }
}

/// 아직 저장되지 않은 사용자 (ID 없음)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl NewUser {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    /// 저장소가 부여한 ID로 엔티티를 완성합니다.
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites_every_mutable_field() {
        let mut user = NewUser::new("Ana", "Lopez", 30).with_id(7);

        user.apply(NewUser::new("Ana2", "Garcia", 31));

        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, "Ana2");
        assert_eq!(user.last_name, "Garcia");
        assert_eq!(user.age, 31);
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let user = NewUser::new("Ana", "Lopez", 30).with_id(1);
        assert_eq!(
            user,
            User {
                id: 1,
                first_name: "Ana".to_string(),
                last_name: "Lopez".to_string(),
                age: 30,
            }
        );
    }
}
