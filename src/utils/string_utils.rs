//! # 문자열 처리 유틸리티
//!
//! 요청 검증과 에러 응답 생성에 쓰이는 문자열 헬퍼 함수 모음입니다.
//!
//! - [`validate_not_blank`]: `validator`의 `custom` 검증 함수로 사용되는 공백 검사
//! - [`is_valid_string`]: 공백만으로 이루어지지 않은 문자열인지 판별
//! - [`to_camel_case`]: Rust 필드명(snake_case)을 JSON 필드명(camelCase)으로 변환

use std::borrow::Cow;

use validator::ValidationError;

/// 문자열이 비어 있지 않고 공백 문자만으로 구성되지도 않았는지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `#[validate(custom(function = "validate_not_blank"))]` 용 검증 함수
///
/// 빈 문자열이나 공백만 있는 문자열(`"   "`, `"\t\n"`)을 거부합니다.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// `first_name` → `firstName`
///
/// 이미 camelCase 인 입력은 그대로 반환됩니다.
pub fn to_camel_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
            continue;
        }
        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Ana").is_ok());
        assert!(validate_not_blank(" Lopez ").is_ok());

        let error = validate_not_blank("  ").unwrap_err();
        assert_eq!(error.code, "blank");
        assert_eq!(error.message.as_deref(), Some("must not be blank"));
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("last_name"), "lastName");
        assert_eq!(to_camel_case("age"), "age");
        assert_eq!(to_camel_case("firstName"), "firstName");
        assert_eq!(to_camel_case("_private"), "private");
    }
}
