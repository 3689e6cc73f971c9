//! # 문자열 유틸리티
//!
//! 설정 값 정리, 업스트림 JSON 필드 정리, 비밀 값 마스킹에 쓰이는 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// null, 빈 문자열, 공백만 있는 문자열을 None으로 변환합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 비밀 값을 로그/Debug 출력용으로 마스킹합니다.
///
/// 앞 4글자만 남기고 나머지는 `*`로 가립니다. 8글자 이하이면 전부 가립니다.
///
/// ```rust,ignore
/// assert_eq!(mask_secret("pat1234567890"), "pat1*********");
/// assert_eq!(mask_secret("short"), "*****");
/// ```
pub fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    if len <= 8 {
        return "*".repeat(len);
    }
    let visible: String = value.chars().take(4).collect();
    format!("{}{}", visible, "*".repeat(len - 4))
}
