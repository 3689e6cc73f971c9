//! # Google OAuth 2.0 인증 서비스
//!
//! Google 인증 URL 생성, 인증 코드 ↔ 액세스 토큰 교환, 부여된 스코프 검증을 담당합니다.
//! 기본 정보 스코프와 비즈니스 관리 스코프를 한 번의 동의 화면에서 함께 요청하고,
//! 콜백에서 비즈니스 스코프가 빠져 있으면 재동의 경로로 분기합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌────────────┐              ┌──────────────┐              ┌──────────────┐
//! │  브라우저    │              │   우리 서버    │              │ Google OAuth │
//! └────────────┘              └──────────────┘              └──────────────┘
//!       │ 1. GET /login              │                              │
//!       ├───────────────────────────►│ 2. state 생성 → 세션 저장       │
//!       │ 3. 302 authorization URL   │                              │
//!       │◄───────────────────────────┤                              │
//!       │ 4. 로그인 + 동의 (prompt=consent)                            │
//!       ├──────────────────────────────────────────────────────────►│
//!       │ 5. 302 /authorize?code&state                              │
//!       │◄──────────────────────────────────────────────────────────┤
//!       ├───────────────────────────►│ 6. code → token 교환          │
//!       │                            ├─────────────────────────────►│
//!       │                            │ 7. access_token + scope      │
//!       │                            │◄─────────────────────────────┤
//!       │                            │ 8. business.manage 스코프 확인  │
//! ```
//!
//! ## 스코프 검증 결과
//!
//! - 액세스 토큰 없음 → `AppError::InvalidToken` (400)
//! - `business.manage` 미부여 → `AppError::MissingScope` (재동의 페이지)

use std::fmt;
use crate::config::GoogleOAuthConfig;
use crate::domain::dto::oauth::GoogleTokenResponse;
use crate::domain::models::oauth::{GrantedScopes, ProviderMetadata};
use crate::errors::errors::{AppError, AppResult, UpstreamEndpoint};
use crate::services::read_json;
use crate::utils::string_utils::mask_secret;

/// 스코프 검증을 통과한 액세스 토큰
#[derive(Clone)]
pub struct AuthorizedToken {
    pub access_token: String,
    pub scopes: GrantedScopes,
}

impl fmt::Debug for AuthorizedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedToken")
            .field("access_token", &mask_secret(&self.access_token))
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// Google OAuth 인증 서비스
///
/// 시작 시 한 번 생성되어 `OnboardingService`를 통해 모든 요청에서 공유됩니다.
/// `reqwest::Client`는 내부적으로 커넥션 풀을 가지므로 복제 비용이 낮습니다.
#[derive(Debug, Clone)]
pub struct GoogleAuthService {
    http: reqwest::Client,
    config: GoogleOAuthConfig,
}

impl GoogleAuthService {
    pub fn new(http: reqwest::Client, config: GoogleOAuthConfig) -> Self {
        Self { http, config }
    }

    /// discovery 문서로 엔드포인트를 확정한 서비스를 생성합니다.
    ///
    /// discovery 요청이 실패하면 경고 로그를 남기고 설정된 엔드포인트를 그대로 사용합니다.
    pub async fn discover(http: reqwest::Client, config: GoogleOAuthConfig) -> Self {
        match Self::fetch_provider_metadata(&http, &config.discovery_url).await {
            Ok(metadata) => {
                log::info!(
                    "OpenID discovery 완료: issuer={}",
                    metadata.issuer.as_deref().unwrap_or("unknown")
                );
                let config = config.with_provider_metadata(&metadata);
                Self::new(http, config)
            }
            Err(e) => {
                log::warn!("OpenID discovery 실패, 설정된 엔드포인트 사용: {}", e);
                Self::new(http, config)
            }
        }
    }

    /// OpenID Connect discovery 문서를 조회합니다.
    pub async fn fetch_provider_metadata(
        http: &reqwest::Client,
        discovery_url: &str,
    ) -> AppResult<ProviderMetadata> {
        let response = http
            .get(discovery_url)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("discovery 요청 실패: {}", e)))?;

        read_json(response, UpstreamEndpoint::Discovery).await
    }

    pub fn config(&self) -> &GoogleOAuthConfig {
        &self.config
    }

    /// CSRF 방지용 state 값을 생성합니다.
    pub fn generate_oauth_state(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    /// Google 인증 페이지 URL을 생성합니다.
    ///
    /// 항상 `prompt=consent`로 동의 화면을 다시 띄우므로, 재동의 경로에서도
    /// 같은 URL을 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let state = service.generate_oauth_state();
    /// let url = service.authorization_url(&state);
    /// // https://accounts.google.com/o/oauth2/v2/auth?client_id=...&prompt=consent...
    /// ```
    pub fn authorization_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.config.client_id.clone()),
            ("redirect_uri", self.config.redirect_uri.clone()),
            ("scope", self.config.scope_param()),
            ("response_type", "code".to_string()),
            ("state", state.to_string()),
            ("prompt", "consent".to_string()),
            ("access_type", "offline".to_string()),
            ("include_granted_scopes", "true".to_string()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_uri, query_string)
    }

    /// 인증 코드를 교환하고 필수 스코프가 부여되었는지 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UpstreamFailure` - 토큰 엔드포인트가 실패 응답을 반환한 경우
    /// * `AppError::InvalidToken` - 응답에 액세스 토큰이 없는 경우
    /// * `AppError::MissingScope` - `business.manage` 스코프가 부여되지 않은 경우
    pub async fn authorize(&self, auth_code: &str) -> AppResult<AuthorizedToken> {
        let token_response = self.exchange_code_for_token(auth_code).await?;
        self.verify_token(token_response)
    }

    /// 토큰 응답을 검증합니다.
    pub fn verify_token(&self, token_response: GoogleTokenResponse) -> AppResult<AuthorizedToken> {
        let scopes = token_response.granted_scopes();

        let access_token = token_response.access_token.ok_or_else(|| {
            AppError::InvalidToken("토큰 응답에 access_token이 없습니다".to_string())
        })?;

        if !scopes.contains(&self.config.required_scope) {
            log::warn!(
                "필수 스코프 미부여, 재동의 필요: granted={:?}",
                scopes.as_slice()
            );
            return Err(AppError::MissingScope(self.config.required_scope.clone()));
        }

        Ok(AuthorizedToken { access_token, scopes })
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<GoogleTokenResponse> {
        let params = [
            ("code", auth_code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        let token: GoogleTokenResponse = read_json(response, UpstreamEndpoint::Token)
            .await
            .map_err(|e| match e {
                AppError::ExternalServiceError(msg) => AppError::InvalidToken(msg),
                other => other,
            })?;

        log::debug!("Google 토큰 교환 완료: {:?}", token);
        Ok(token)
    }
}
