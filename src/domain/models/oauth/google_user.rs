//! # Google 사용자 정보 모델
//!
//! `https://www.googleapis.com/oauth2/v2/userinfo` 응답을 역직렬화합니다.

use serde::Deserialize;
use crate::utils::string_utils::deserialize_optional_string;

/// Google OAuth 2.0 사용자 정보 응답 구조체
///
/// | 필드 | 필수 스코프 |
/// |------|-------------|
/// | `id`, `email`, `verified_email` | `openid`, `email` |
/// | `name`, `picture` | `profile` |
///
/// 저장에 필요한 `email`, `name`이 빠진 응답도 역직렬화 자체는 성공하며,
/// 누락 여부는 [`LeadRecord`](crate::domain::models::LeadRecord) 생성 시 검증합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 고유 사용자 ID
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default)]
    pub verified_email: bool,

    /// 표시 이름
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default)]
    pub given_name: Option<String>,

    #[serde(default)]
    pub family_name: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,
}
