//! Google API 응답 DTO 모듈
//!
//! 토큰 교환 응답과 비즈니스 계정 목록 응답을 정의합니다.

use std::fmt;
use serde::Deserialize;
use crate::domain::models::oauth::GrantedScopes;
use crate::utils::string_utils::{deserialize_optional_string, mask_secret};

/// 비즈니스 계정이 없을 때 저장하는 값
pub const NO_BUSINESS_ID: &str = "No GMB ID found";

/// Google OAuth 2.0 토큰 교환 응답
///
/// Authorization Code를 Access Token으로 교환할 때 Google이 반환하는 데이터입니다.
/// `access_token`이 없거나 비어 있는 응답도 역직렬화는 성공하며,
/// 판단은 서비스 계층에서 `InvalidToken`으로 처리합니다.
#[derive(Deserialize)]
pub struct GoogleTokenResponse {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 부여된 권한 범위 (공백 구분)
    #[serde(default)]
    pub scope: Option<String>,
}

impl GoogleTokenResponse {
    /// 부여된 스코프 목록
    ///
    /// `scope` 필드가 없으면 빈 목록으로 취급합니다.
    pub fn granted_scopes(&self) -> GrantedScopes {
        GrantedScopes::parse(self.scope.as_deref().unwrap_or_default())
    }
}

impl fmt::Debug for GoogleTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTokenResponse")
            .field("access_token", &self.access_token.as_deref().map(mask_secret))
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("scope", &self.scope)
            .finish()
    }
}

/// 비즈니스 계정 목록 응답
///
/// 계정이 하나도 없으면 Google은 `{}`를 반환하므로 `accounts`는 기본값을 가집니다.
/// 첫 번째 계정만 사용하므로 `nextPageToken`은 읽지 않습니다.
#[derive(Debug, Default, Deserialize)]
pub struct BusinessAccountsResponse {
    #[serde(default)]
    pub accounts: Vec<BusinessAccount>,
}

/// 비즈니스 계정 항목
#[derive(Debug, Deserialize)]
pub struct BusinessAccount {
    /// 리소스 이름 (`accounts/{account_id}`)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

impl BusinessAccountsResponse {
    /// 첫 번째 계정의 식별자를 반환합니다.
    ///
    /// 목록이 비었거나 첫 계정에 이름이 없으면 [`NO_BUSINESS_ID`]를 반환합니다.
    pub fn first_account_id(&self) -> String {
        self.accounts
            .first()
            .and_then(|account| account.name.clone())
            .unwrap_or_else(|| NO_BUSINESS_ID.to_string())
    }
}
