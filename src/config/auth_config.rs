//! # Authentication Configuration Module
//!
//! Google OAuth 클라이언트와 세션 쿠키 관련 설정을 관리하는 모듈입니다.
//! 모든 값은 시작 시점에 한 번만 읽혀 [`AppConfig`](super::AppConfig)에 담기며,
//! 핸들러는 `web::Data`로 전달받은 설정만 참조합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="https://signin.example.com/authorize"
//! export SESSION_SECRET="$(openssl rand -base64 48)"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export GOOGLE_DISCOVERY_URL="https://accounts.google.com/.well-known/openid-configuration"
//! export GOOGLE_BUSINESS_ACCOUNTS_URI="https://mybusinessaccountmanagement.googleapis.com/v1/accounts"
//! export SESSION_COOKIE_SECURE="false"   # 로컬 HTTP 개발 시에만
//! ```

use std::fmt;
use actix_web::cookie::Key;
use sha2::{Digest, Sha512};
use crate::domain::models::ProviderMetadata;
use crate::errors::errors::AppResult;
use crate::utils::string_utils::{clean_optional_string, mask_secret};
use super::{optional_var, parsed_var, required_var};

/// Google Business Profile 관리 스코프
///
/// 콜백 시 부여된 스코프에 이 값이 없으면 재동의 경로로 분기합니다.
pub const BUSINESS_MANAGE_SCOPE: &str = "https://www.googleapis.com/auth/business.manage";

/// 로그인 시 한 번에 요청하는 스코프 목록
pub const DEFAULT_SCOPES: [&str; 4] = ["openid", "email", "profile", BUSINESS_MANAGE_SCOPE];

pub const DEFAULT_DISCOVERY_URL: &str =
    "https://accounts.google.com/.well-known/openid-configuration";
pub const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_USERINFO_URI: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
pub const DEFAULT_BUSINESS_ACCOUNTS_URI: &str =
    "https://mybusinessaccountmanagement.googleapis.com/v1/accounts";

/// Google OAuth 2.0 클라이언트 설정
///
/// Google Cloud Console 에서 발급한 클라이언트 정보와 호출할 엔드포인트들을 담습니다.
/// 엔드포인트는 discovery 문서로 덮어쓸 수 있습니다 ([`with_provider_metadata`](Self::with_provider_metadata)).
///
/// ## 보안 고려사항
///
/// - `client_secret`은 `Debug` 출력에서 마스킹됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Google Cloud Console에 등록된 콜백 URI (`/authorize`)
    pub redirect_uri: String,
    pub discovery_url: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
    pub business_accounts_uri: String,
    /// 인증 요청 시 전달할 스코프 목록
    pub scopes: Vec<String>,
    /// 콜백에서 반드시 부여되어 있어야 하는 스코프
    pub required_scope: String,
    /// 환경 변수로 직접 지정되어 discovery로 덮어쓰지 않는 엔드포인트
    pub pinned: PinnedEndpoints,
}

/// 운영자가 환경 변수로 직접 지정한 엔드포인트 표시
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinnedEndpoints {
    pub auth_uri: bool,
    pub token_uri: bool,
    pub userinfo_uri: bool,
}

impl PinnedEndpoints {
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_set = |key: &str| clean_optional_string(lookup(key)).is_some();
        Self {
            auth_uri: is_set("GOOGLE_AUTH_URI"),
            token_uri: is_set("GOOGLE_TOKEN_URI"),
            userinfo_uri: is_set("GOOGLE_USERINFO_URI"),
        }
    }
}

impl GoogleOAuthConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            client_id: required_var(lookup, "GOOGLE_CLIENT_ID")?,
            client_secret: required_var(lookup, "GOOGLE_CLIENT_SECRET")?,
            redirect_uri: required_var(lookup, "GOOGLE_REDIRECT_URI")?,
            discovery_url: optional_var(lookup, "GOOGLE_DISCOVERY_URL", DEFAULT_DISCOVERY_URL),
            auth_uri: optional_var(lookup, "GOOGLE_AUTH_URI", DEFAULT_AUTH_URI),
            token_uri: optional_var(lookup, "GOOGLE_TOKEN_URI", DEFAULT_TOKEN_URI),
            userinfo_uri: optional_var(lookup, "GOOGLE_USERINFO_URI", DEFAULT_USERINFO_URI),
            business_accounts_uri: optional_var(
                lookup,
                "GOOGLE_BUSINESS_ACCOUNTS_URI",
                DEFAULT_BUSINESS_ACCOUNTS_URI,
            ),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            required_scope: BUSINESS_MANAGE_SCOPE.to_string(),
            pinned: PinnedEndpoints::from_lookup(lookup),
        })
    }

    /// 스코프 목록을 인증 URL용 공백 구분 문자열로 합칩니다.
    pub fn scope_param(&self) -> String {
        self.scopes.join(" ")
    }

    /// discovery 문서에서 얻은 엔드포인트로 설정을 갱신합니다.
    ///
    /// 문서에 없는 엔드포인트와 환경 변수로 직접 지정한 엔드포인트는 기존 값을 유지합니다.
    pub fn with_provider_metadata(mut self, metadata: &ProviderMetadata) -> Self {
        if let (false, Some(uri)) = (self.pinned.auth_uri, &metadata.authorization_endpoint) {
            self.auth_uri = uri.clone();
        }
        if let (false, Some(uri)) = (self.pinned.token_uri, &metadata.token_endpoint) {
            self.token_uri = uri.clone();
        }
        if let (false, Some(uri)) = (self.pinned.userinfo_uri, &metadata.userinfo_endpoint) {
            self.userinfo_uri = uri.clone();
        }
        self
    }
}

impl fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("userinfo_uri", &self.userinfo_uri)
            .field("business_accounts_uri", &self.business_accounts_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// 쿠키 세션 설정
///
/// 세션에는 OAuth state와 액세스 토큰만 저장되며, 쿠키 내용은 암호화됩니다.
#[derive(Clone)]
pub struct SessionConfig {
    secret: String,
    /// 쿠키에 `Secure` 속성을 붙일지 여부 (기본값: true)
    pub cookie_secure: bool,
}

impl SessionConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required_var(lookup, "SESSION_SECRET")?;
        if secret.len() < 32 {
            log::warn!("SESSION_SECRET이 32자보다 짧습니다 (프로덕션에서는 안전하지 않음)");
        }

        Ok(Self {
            secret,
            cookie_secure: parsed_var(lookup, "SESSION_COOKIE_SECURE", true),
        })
    }

    /// 세션 쿠키 서명/암호화 키를 생성합니다.
    ///
    /// `Key`는 64바이트 이상의 키 재료를 요구하므로 SHA-512 다이제스트를 사용합니다.
    pub fn key(&self) -> Key {
        let digest = Sha512::digest(self.secret.as_bytes());
        Key::from(digest.as_slice())
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &mask_secret(&self.secret))
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}
