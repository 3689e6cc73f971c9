//! OpenID Connect discovery 문서 모델

use serde::Deserialize;

/// `/.well-known/openid-configuration` 응답 중 사용하는 엔드포인트들
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderMetadata {
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub authorization_endpoint: Option<String>,
    #[serde(default)]
    pub token_endpoint: Option<String>,
    #[serde(default)]
    pub userinfo_endpoint: Option<String>,
}
