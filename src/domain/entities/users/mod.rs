//! Users Entity Module
//!
//! `users` 테이블의 한 행에 대응하는 [`User`](user::User) 엔티티와,
//! 아직 저장되지 않은(ID가 없는) 사용자를 나타내는 [`NewUser`](user::NewUser)를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::NewUser;
//!
//! let new_user = NewUser::new("Ana", "Lopez", 30);
//! let stored = user_repo.begin().await?.insert(new_user).await?;
//! ```

pub mod user;
